use crate::markup::features::Feature;

/// Star-delimited emphasis. The length of the opening run picks the form and
/// the closer must be the same run.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    /// Longest opening run considered; further stars are left for the content.
    pub const MAX_RUN: usize = 3;

    /// Every flag that can make the emphasis matcher worth attempting.
    pub const FEATURES: [Feature; 3] = [Feature::Italic, Feature::Bold, Feature::BoldItalic];

    /// The feature selected by an opening run of `run` stars.
    pub fn feature_for_run(run: usize) -> Option<Feature> {
        match run {
            1 => Some(Feature::Italic),
            2 => Some(Feature::Bold),
            3 => Some(Feature::BoldItalic),
            _ => None,
        }
    }

    /// The closing delimiter matching an opening run of `run` stars.
    pub fn closer(run: usize) -> &'static [u8] {
        &b"***"[..run.min(Self::MAX_RUN)]
    }
}
