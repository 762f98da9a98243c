//! # Construct Kinds
//!
//! One type per construct, each owning its delimiter constants. The scanner
//! refers to these constants and never spells out a delimiter itself.
//!
//! ## Types
//!
//! - **`Emphasis`**: `STAR = b'*'`, up to `MAX_RUN` stars select italic/bold/bold-italic
//! - **`Heading`**: `H1 = b"# "`, `H2 = b"## "`, `H3 = b"### "`, `SUBTEXT = b"-# "`
//! - **`Spoiler`**: `FENCE = b"||"`
//! - **`Code`**: `TICK = b'\`'`, `FENCE = b"\`\`\`"`
//! - **`CustomEmoji`**: `OPEN = b"<emoji:"`, `CLOSE = b'>'`
//! - **`Mention`**: `USER_OPEN = b"<userid:'"`, `ROLE_OPEN = b"<roleid:'"`, `CLOSE = b"'>"`
//! - **`FileEmbed`**: `OPEN = b"[%file%]("`
//! - **`Link`** / **`Invite`**: scheme prefixes and the invite URL pattern

pub mod code;
pub mod custom_emoji;
pub mod emphasis;
pub mod file_embed;
pub mod heading;
pub mod link;
pub mod mention;
pub mod spoiler;

pub use code::Code;
pub use custom_emoji::CustomEmoji;
pub use emphasis::Emphasis;
pub use file_embed::FileEmbed;
pub use heading::{Heading, HeadingLevel};
pub use link::{Invite, Link};
pub use mention::Mention;
pub use spoiler::Spoiler;
