pub struct Spoiler;

impl Spoiler {
    pub const FENCE: &'static [u8; 2] = b"||";
}
