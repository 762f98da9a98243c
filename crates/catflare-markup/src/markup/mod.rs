//! # Inline Markup
//!
//! Single-pass, cursor-based scanning of user-authored message and bio text
//! into a flat sequence of [`ContentNode`]s.
//!
//! ## Architecture
//!
//! There is no tokenizer. The scanner walks the source once, and at each
//! position dispatches to at most one construct matcher, chosen by the
//! character under the cursor and a short literal lookahead. Matchers either
//! consume a whole construct or restore the cursor and report no match, in
//! which case the current character joins the pending text run.
//!
//! Constructs never nest: `||**x**||` is a spoiler whose content is the raw
//! string `**x**`.
//!
//! ## Modules
//!
//! - **`types`**: `ContentNode` enum, one variant per construct plus `Text`
//! - **`features`**: `Feature` flags, `FeatureSet`, `ParserConfig` and presets
//! - **`kinds`**: Per-construct types owning their delimiters
//! - **`cursor`**: `Cursor` for byte-wise scanning with save/restore rollback
//! - **`search`**: Memoized closer lookup keeping total work linear
//! - **`span`**: `Span` byte ranges covering each node's source, delimiters included
//! - **`emoji`**: `EmojiPattern` collaborator and the default regex pattern
//! - **`error`**: `MarkupError` for pattern, feature and preset construction
//! - **`parser`**: `parse()` main entry point with `try_parse_*` matchers
//!
//! ## Dispatch Precedence
//!
//! Non-ASCII characters try the unicode emoji pattern. Otherwise the
//! matchers are tried in this fixed order, each gated by its feature flag:
//! file embed, custom emoji, emphasis, user mention, role mention, invite
//! link, generic link, heading/subtext, spoiler, code.

pub mod cursor;
pub mod emoji;
pub mod error;
pub mod features;
pub mod kinds;
pub mod parser;
pub mod search;
pub mod span;
pub mod types;

pub use emoji::{EmojiPattern, RegexEmojiPattern};
pub use error::MarkupError;
pub use features::{Feature, FeatureSet, ParserConfig, Preset};
pub use parser::{parse, parse_spanned, parse_with_emoji};
pub use span::Span;
pub use types::{ContentNode, Spanned};
