/// A cursor for byte-wise markup scanning with position tracking.
///
/// Positions are byte offsets into `s`. Every delimiter the scanner looks
/// for is ASCII, so byte comparisons never split a multi-byte character;
/// only [`Cursor::bump_char`] needs to know about UTF-8 widths.
///
/// Rollback is done by cloning the cursor before an attempt and assigning
/// the clone back on failure.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat)
    }

    /// The unscanned remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Borrows `start..end` of the source.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances past one whole character, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves the cursor to an absolute byte position.
    pub fn seek(&mut self, i: usize) {
        self.i = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.rest(), "ello");
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("<emoji:cat>");
        assert!(cur.starts_with(b"<emoji:"));
        assert!(!cur.starts_with(b"<userid:'"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
        assert_eq!(cur.rest(), "");
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("||");
        assert!(!cur.starts_with(b"|||"));

        cur.bump();
        assert!(!cur.starts_with(b"||"));
        assert!(cur.starts_with(b"|"));
    }

    #[test]
    fn starts_with_at_eof() {
        let mut cur = Cursor::new("ab");
        cur.bump_n(2);
        assert!(cur.eof());
        // Empty pattern should still match at EOF
        assert!(cur.starts_with(b""));
        assert!(!cur.starts_with(b"a"));
    }

    #[test]
    fn bump_char_steps_over_multibyte_characters() {
        let mut cur = Cursor::new("é🐱x");
        assert_eq!(cur.bump_char(), Some('é'));
        assert_eq!(cur.pos(), 2);
        assert_eq!(cur.bump_char(), Some('🐱'));
        assert_eq!(cur.pos(), 6);
        assert_eq!(cur.bump_char(), Some('x'));
        assert!(cur.eof());
        assert_eq!(cur.bump_char(), None);
    }

    #[test]
    fn clone_restores_position() {
        let mut cur = Cursor::new("||spoiler");
        let saved = cur.clone();
        cur.bump_n(5);
        assert_eq!(cur.pos(), 5);
        cur = saved;
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn seek_and_slice() {
        let mut cur = Cursor::new("Hello **bold**");
        cur.seek(8);
        assert_eq!(cur.peek(), Some(b'b'));
        assert_eq!(cur.slice(8, 12), "bold");
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }
}
