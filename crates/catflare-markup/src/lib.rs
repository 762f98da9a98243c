pub mod markup;

// Re-export key types for easier usage
pub use markup::{
    ContentNode, EmojiPattern, Feature, FeatureSet, MarkupError, ParserConfig, Preset,
    RegexEmojiPattern, Span, Spanned, parse, parse_spanned, parse_with_emoji,
};
