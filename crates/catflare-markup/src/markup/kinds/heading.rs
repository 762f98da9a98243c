use crate::markup::features::Feature;

/// Heading and subtext prefixes.
///
/// Prefixes are recognized wherever they occur in the text, not just at the
/// start of a line.
pub struct Heading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    Subtext,
}

impl Heading {
    pub const H1: &'static [u8; 2] = b"# ";
    pub const H2: &'static [u8; 3] = b"## ";
    pub const H3: &'static [u8; 4] = b"### ";
    pub const SUBTEXT: &'static [u8; 3] = b"-# ";

    pub const HASH: u8 = b'#';
    pub const DASH: u8 = b'-';
    pub const NEWLINE: &'static [u8; 1] = b"\n";

    /// Levels in the order their prefixes are tested.
    pub const LEVELS: [HeadingLevel; 4] = [
        HeadingLevel::H3,
        HeadingLevel::H2,
        HeadingLevel::H1,
        HeadingLevel::Subtext,
    ];

    pub const FEATURES: [Feature; 4] = [
        Feature::Heading1,
        Feature::Heading2,
        Feature::Heading3,
        Feature::Subtext,
    ];
}

impl HeadingLevel {
    pub fn prefix(self) -> &'static [u8] {
        match self {
            HeadingLevel::H1 => Heading::H1,
            HeadingLevel::H2 => Heading::H2,
            HeadingLevel::H3 => Heading::H3,
            HeadingLevel::Subtext => Heading::SUBTEXT,
        }
    }

    pub fn feature(self) -> Feature {
        match self {
            HeadingLevel::H1 => Feature::Heading1,
            HeadingLevel::H2 => Feature::Heading2,
            HeadingLevel::H3 => Feature::Heading3,
            HeadingLevel::Subtext => Feature::Subtext,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_prefix_is_a_prefix_of_a_later_one() {
        // A longer prefix must be tested before any prefix it starts with.
        for (i, earlier) in Heading::LEVELS.iter().enumerate() {
            for later in &Heading::LEVELS[i + 1..] {
                assert!(
                    !earlier.prefix().starts_with(later.prefix()),
                    "{earlier:?} shadows {later:?}"
                );
            }
        }
    }
}
