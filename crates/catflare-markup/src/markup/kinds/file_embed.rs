/// File embed `[%file%](url)`. The URL may itself contain balanced parentheses.
pub struct FileEmbed;

impl FileEmbed {
    pub const OPEN: &'static [u8; 9] = b"[%file%](";
    pub const PAREN_OPEN: u8 = b'(';
    pub const PAREN_CLOSE: u8 = b')';
}
