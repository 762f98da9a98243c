use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::MarkupError;

/// A parsable construct that can be switched on or off per parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Bold,
    Italic,
    BoldItalic,
    CustomEmoji,
    UnicodeEmoji,
    Link,
    Invite,
    Heading1,
    Heading2,
    Heading3,
    Subtext,
    Spoiler,
    InlineCode,
    CodeBlock,
    FileEmbed,
    UserMention,
    RoleMention,
}

impl Feature {
    /// Every flag, in declaration order.
    pub const ALL: [Feature; 17] = [
        Feature::Bold,
        Feature::Italic,
        Feature::BoldItalic,
        Feature::CustomEmoji,
        Feature::UnicodeEmoji,
        Feature::Link,
        Feature::Invite,
        Feature::Heading1,
        Feature::Heading2,
        Feature::Heading3,
        Feature::Subtext,
        Feature::Spoiler,
        Feature::InlineCode,
        Feature::CodeBlock,
        Feature::FileEmbed,
        Feature::UserMention,
        Feature::RoleMention,
    ];

    /// The snake_case name used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Bold => "bold",
            Feature::Italic => "italic",
            Feature::BoldItalic => "bold_italic",
            Feature::CustomEmoji => "custom_emoji",
            Feature::UnicodeEmoji => "unicode_emoji",
            Feature::Link => "link",
            Feature::Invite => "invite",
            Feature::Heading1 => "heading1",
            Feature::Heading2 => "heading2",
            Feature::Heading3 => "heading3",
            Feature::Subtext => "subtext",
            Feature::Spoiler => "spoiler",
            Feature::InlineCode => "inline_code",
            Feature::CodeBlock => "code_block",
            Feature::FileEmbed => "file_embed",
            Feature::UserMention => "user_mention",
            Feature::RoleMention => "role_mention",
        }
    }

    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| MarkupError::UnknownFeature(s.to_string()))
    }
}

/// A set of [`Feature`]s stored as a bit mask.
///
/// Iteration always yields flags in declaration order, so two sets with the
/// same members serialize identically regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Feature>", into = "Vec<Feature>")]
pub struct FeatureSet(u32);

impl FeatureSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        Feature::ALL.into_iter().collect()
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    /// True if at least one of `features` is in the set.
    pub fn contains_any(&self, features: &[Feature]) -> bool {
        features.iter().any(|f| self.contains(*f))
    }

    pub fn insert(&mut self, feature: Feature) {
        self.0 |= feature.bit();
    }

    pub fn remove(&mut self, feature: Feature) {
        self.0 &= !feature.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.contains(*f))
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut set = FeatureSet::empty();
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

impl From<Vec<Feature>> for FeatureSet {
    fn from(features: Vec<Feature>) -> Self {
        features.into_iter().collect()
    }
}

impl From<FeatureSet> for Vec<Feature> {
    fn from(set: FeatureSet) -> Self {
        set.iter().collect()
    }
}

/// The enabled features for one parse call.
///
/// A construct is only recognized when its flag is present; a missing flag
/// means its matcher is never attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParserConfig {
    features: FeatureSet,
}

impl ParserConfig {
    pub fn new(features: FeatureSet) -> Self {
        Self { features }
    }

    /// Dialect for chat message bodies.
    pub fn message() -> Self {
        Self::new(FeatureSet::all())
    }

    /// Dialect for profile bios. Currently the same set as [`ParserConfig::message`].
    pub fn bio() -> Self {
        Self::new(FeatureSet::all())
    }

    pub fn all() -> Self {
        Self::new(FeatureSet::all())
    }

    pub fn none() -> Self {
        Self::new(FeatureSet::empty())
    }

    pub fn with(mut self, feature: Feature) -> Self {
        self.features.insert(feature);
        self
    }

    pub fn without(mut self, feature: Feature) -> Self {
        self.features.remove(feature);
        self
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.features.contains(feature)
    }

    pub fn features(&self) -> FeatureSet {
        self.features
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::message()
    }
}

impl FromIterator<Feature> for ParserConfig {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Named configurations, selected by where the text is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    Message,
    Bio,
}

impl Preset {
    pub fn config(self) -> ParserConfig {
        match self {
            Preset::Message => ParserConfig::message(),
            Preset::Bio => ParserConfig::bio(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Message => "message",
            Preset::Bio => "bio",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(Preset::Message),
            "bio" => Ok(Preset::Bio),
            other => Err(MarkupError::UnknownPreset(other.to_string())),
        }
    }
}
