/// Custom emoji reference `<emoji:id>`.
pub struct CustomEmoji;

impl CustomEmoji {
    pub const OPEN: &'static [u8; 7] = b"<emoji:";
    pub const CLOSE: u8 = b'>';

    /// Characters allowed in an emoji identifier.
    pub fn is_id_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
    }
}
