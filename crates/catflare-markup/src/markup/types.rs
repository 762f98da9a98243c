use serde::Serialize;

use super::{features::Feature, span::Span};

/// A parsed content node.
///
/// Every string borrows from the parsed source, so a node sequence lives no
/// longer than the text it was parsed from. Contents are raw: nothing is
/// escaped, and identifiers are not resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentNode<'a> {
    /// Plain text that isn't part of any construct.
    Text(&'a str),
    Bold(&'a str),
    Italic(&'a str),
    BoldItalic(&'a str),
    /// `# ` heading, content trimmed.
    Heading1(&'a str),
    Heading2(&'a str),
    Heading3(&'a str),
    /// `-# ` small print, content trimmed.
    Subtext(&'a str),
    /// Hidden until revealed by the reader.
    Spoiler(&'a str),
    InlineCode(&'a str),
    /// Fenced block. Unlike every other node, the content may be empty.
    CodeBlock {
        language: Option<&'a str>,
        content: &'a str,
    },
    /// `<emoji:id>` reference to a server-side emoji.
    CustomEmoji(&'a str),
    /// A full unicode emoji sequence as written.
    UnicodeEmoji(&'a str),
    Link {
        url: &'a str,
        text: &'a str,
    },
    Invite {
        code: &'a str,
        url: &'a str,
    },
    FileEmbed(&'a str),
    UserMention(&'a str),
    RoleMention(&'a str),
}

impl<'a> ContentNode<'a> {
    /// The feature flag that produced this node, or `None` for plain text.
    pub fn feature(&self) -> Option<Feature> {
        let feature = match self {
            ContentNode::Text(_) => return None,
            ContentNode::Bold(_) => Feature::Bold,
            ContentNode::Italic(_) => Feature::Italic,
            ContentNode::BoldItalic(_) => Feature::BoldItalic,
            ContentNode::Heading1(_) => Feature::Heading1,
            ContentNode::Heading2(_) => Feature::Heading2,
            ContentNode::Heading3(_) => Feature::Heading3,
            ContentNode::Subtext(_) => Feature::Subtext,
            ContentNode::Spoiler(_) => Feature::Spoiler,
            ContentNode::InlineCode(_) => Feature::InlineCode,
            ContentNode::CodeBlock { .. } => Feature::CodeBlock,
            ContentNode::CustomEmoji(_) => Feature::CustomEmoji,
            ContentNode::UnicodeEmoji(_) => Feature::UnicodeEmoji,
            ContentNode::Link { .. } => Feature::Link,
            ContentNode::Invite { .. } => Feature::Invite,
            ContentNode::FileEmbed(_) => Feature::FileEmbed,
            ContentNode::UserMention(_) => Feature::UserMention,
            ContentNode::RoleMention(_) => Feature::RoleMention,
        };
        Some(feature)
    }

    /// The source text this node carries: content, URL or identifier.
    ///
    /// Concatenating `text()` over a node sequence yields the input with
    /// markup delimiters removed and heading/spoiler/code-block content
    /// trimmed.
    pub fn text(&self) -> &'a str {
        match *self {
            ContentNode::Text(s)
            | ContentNode::Bold(s)
            | ContentNode::Italic(s)
            | ContentNode::BoldItalic(s)
            | ContentNode::Heading1(s)
            | ContentNode::Heading2(s)
            | ContentNode::Heading3(s)
            | ContentNode::Subtext(s)
            | ContentNode::Spoiler(s)
            | ContentNode::InlineCode(s)
            | ContentNode::CustomEmoji(s)
            | ContentNode::UnicodeEmoji(s)
            | ContentNode::FileEmbed(s)
            | ContentNode::UserMention(s)
            | ContentNode::RoleMention(s) => s,
            ContentNode::CodeBlock { content, .. } => content,
            ContentNode::Link { url, .. } | ContentNode::Invite { url, .. } => url,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ContentNode::Text(_))
    }
}

/// A node together with the source range it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spanned<'a> {
    pub span: Span,
    pub node: ContentNode<'a>,
}
