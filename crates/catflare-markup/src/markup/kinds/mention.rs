/// User and role mentions share a closing sequence and differ only in prefix.
pub struct Mention;

impl Mention {
    pub const USER_OPEN: &'static [u8; 9] = b"<userid:'";
    pub const ROLE_OPEN: &'static [u8; 9] = b"<roleid:'";
    pub const CLOSE: &'static [u8; 2] = b"'>";
}
