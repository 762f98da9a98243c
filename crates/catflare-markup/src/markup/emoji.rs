use std::sync::OnceLock;

use regex::Regex;

use super::error::MarkupError;

/// Recognizes one unicode emoji sequence at the start of a string.
///
/// The scanner only asks "does an emoji start here, and how long is it".
/// Implementations must return a length that is non-zero and ends on a
/// character boundary of `rest`; anything else is treated as no match.
pub trait EmojiPattern {
    /// Byte length of the emoji sequence at the start of `rest`, if any.
    fn match_len(&self, rest: &str) -> Option<usize>;
}

/// An [`EmojiPattern`] backed by a regular expression.
///
/// The supplied pattern is anchored to the start of the input, so callers
/// pass the bare sequence grammar.
#[derive(Debug, Clone)]
pub struct RegexEmojiPattern {
    regex: Regex,
}

impl RegexEmojiPattern {
    /// Flags, keycap-free pictographic sequences with variation selectors,
    /// skin tones, tag sequences and ZWJ joins.
    pub const DEFAULT_PATTERN: &'static str = concat!(
        r"[\x{1F1E6}-\x{1F1FF}]{2}",
        r"|(?:\p{Emoji_Modifier_Base}\p{Emoji_Modifier}|\p{Emoji_Presentation}\x{FE0F}?|\p{Extended_Pictographic}\x{FE0F})",
        r"(?:[\x{E0020}-\x{E007E}]+\x{E007F})?",
        r"(?:\x{200D}(?:\p{Emoji_Modifier_Base}\p{Emoji_Modifier}|\p{Extended_Pictographic}\x{FE0F}?\p{Emoji_Modifier}?))*",
    );

    pub fn new(pattern: &str) -> Result<Self, MarkupError> {
        let regex = Regex::new(&format!("^(?:{pattern})"))?;
        Ok(Self { regex })
    }

    /// The shared instance built from [`Self::DEFAULT_PATTERN`].
    pub fn builtin() -> &'static RegexEmojiPattern {
        static EMOJI_PATTERN: OnceLock<RegexEmojiPattern> = OnceLock::new();
        EMOJI_PATTERN.get_or_init(|| {
            RegexEmojiPattern::new(Self::DEFAULT_PATTERN).expect("Invalid emoji regex")
        })
    }
}

impl EmojiPattern for RegexEmojiPattern {
    fn match_len(&self, rest: &str) -> Option<usize> {
        self.regex.find(rest).map(|m| m.end()).filter(|&len| len > 0)
    }
}
