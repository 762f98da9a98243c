use thiserror::Error;

/// Errors from the fallible edges of the markup API.
///
/// Parsing itself never fails; these come from building collaborators and
/// from turning user-supplied names into flags or presets.
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("Invalid emoji pattern: {0}")]
    InvalidEmojiPattern(#[from] regex::Error),

    #[error("Unknown markup feature '{0}'")]
    UnknownFeature(String),

    #[error("Unknown parser preset '{0}' (expected 'message' or 'bio')")]
    UnknownPreset(String),
}
