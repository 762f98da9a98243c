/// Inline code `` `x` `` and fenced code blocks ```` ```lang\nx``` ````.
///
/// Fenced blocks are tried first. Code is a raw zone: nothing inside is
/// parsed.
pub struct Code;

impl Code {
    pub const TICK: u8 = b'`';
    pub const INLINE: &'static [u8; 1] = b"`";
    pub const FENCE: &'static [u8; 3] = b"```";

    /// Bytes that may appear in a fence's language tag.
    pub fn is_lang_byte(b: u8) -> bool {
        !b.is_ascii_whitespace() && b != Self::TICK
    }
}
