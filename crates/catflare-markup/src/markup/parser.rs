use super::{
    cursor::Cursor,
    emoji::{EmojiPattern, RegexEmojiPattern},
    features::{Feature, ParserConfig},
    kinds::{
        Code, CustomEmoji, Emphasis, FileEmbed, Heading, HeadingLevel, Invite, Link, Mention,
        Spoiler,
    },
    search::Closers,
    span::Span,
    types::{ContentNode, Spanned},
};

/// Parses message or bio text into a sequence of [`ContentNode`]s.
///
/// Unicode emoji are recognized with the built-in pattern; use
/// [`parse_with_emoji`] to supply another.
///
/// Parsing never fails. Markup that doesn't close, or closes around nothing,
/// is returned as plain text.
pub fn parse<'a>(text: &'a str, config: &ParserConfig) -> Vec<ContentNode<'a>> {
    parse_with_emoji(text, config, RegexEmojiPattern::builtin())
}

/// Like [`parse`], recognizing unicode emoji with `emoji`.
pub fn parse_with_emoji<'a>(
    text: &'a str,
    config: &ParserConfig,
    emoji: &dyn EmojiPattern,
) -> Vec<ContentNode<'a>> {
    parse_spanned(text, config, emoji)
        .into_iter()
        .map(|s| s.node)
        .collect()
}

/// Parses `text`, keeping the source span of every node.
///
/// # Returns
/// Nodes in source order whose spans tile the input exactly: the first
/// starts at 0, each starts where the previous ended, and the last ends at
/// `text.len()`. Consecutive text is always merged into one `Text` node.
pub fn parse_spanned<'a>(
    text: &'a str,
    config: &ParserConfig,
    emoji: &dyn EmojiPattern,
) -> Vec<Spanned<'a>> {
    let mut cur = Cursor::new(text);
    let mut closers = Closers::new(text);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text<'a>(out: &mut Vec<Spanned<'a>>, text: &'a str, start: usize, end: usize) {
        if end > start {
            out.push(Spanned {
                span: Span::new(start, end),
                node: ContentNode::Text(&text[start..end]),
            });
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = try_parse_construct(&mut cur, &mut closers, config, emoji) {
            flush_text(&mut out, text, text_start, start);
            out.push(Spanned {
                span: Span::new(start, cur.pos()),
                node,
            });
            text_start = cur.pos();
            continue;
        }
        cur.bump_char();
    }

    flush_text(&mut out, text, text_start, cur.pos());
    log::debug!("Parsed {} bytes into {} nodes", text.len(), out.len());
    out
}

/// Tries the one matcher selected by the text at the cursor.
///
/// The branches are keyed by distinct leading literals, so at most one of
/// them applies at any position. A disabled feature skips its branch.
fn try_parse_construct<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'_>,
    config: &ParserConfig,
    emoji: &dyn EmojiPattern,
) -> Option<ContentNode<'a>> {
    let b = cur.peek()?;
    let features = config.features();

    if !b.is_ascii() {
        if config.is_enabled(Feature::UnicodeEmoji) {
            return try_parse_unicode_emoji(cur, emoji);
        }
        return None;
    }

    if cur.starts_with(FileEmbed::OPEN) && config.is_enabled(Feature::FileEmbed) {
        try_parse_file_embed(cur, closers)
    } else if cur.starts_with(CustomEmoji::OPEN) && config.is_enabled(Feature::CustomEmoji) {
        try_parse_custom_emoji(cur)
    } else if b == Emphasis::STAR && features.contains_any(&Emphasis::FEATURES) {
        try_parse_emphasis(cur, closers, config)
    } else if cur.starts_with(Mention::USER_OPEN) && config.is_enabled(Feature::UserMention) {
        try_parse_mention(cur, closers, Mention::USER_OPEN, ContentNode::UserMention)
    } else if cur.starts_with(Mention::ROLE_OPEN) && config.is_enabled(Feature::RoleMention) {
        try_parse_mention(cur, closers, Mention::ROLE_OPEN, ContentNode::RoleMention)
    } else if b == Link::LEAD
        && Link::at_scheme(cur.rest().as_bytes())
        && features.contains_any(&[Feature::Invite, Feature::Link])
    {
        // Invites are a narrower form of link and win when both apply.
        let invite = if config.is_enabled(Feature::Invite) {
            try_parse_invite(cur)
        } else {
            None
        };
        invite.or_else(|| {
            if config.is_enabled(Feature::Link) {
                try_parse_link(cur)
            } else {
                None
            }
        })
    } else if (b == Heading::HASH || (b == Heading::DASH && cur.starts_with(Heading::SUBTEXT)))
        && features.contains_any(&Heading::FEATURES)
    {
        try_parse_heading(cur, closers, config)
    } else if cur.starts_with(Spoiler::FENCE) && config.is_enabled(Feature::Spoiler) {
        try_parse_spoiler(cur, closers)
    } else if b == Code::TICK
        && features.contains_any(&[Feature::CodeBlock, Feature::InlineCode])
    {
        try_parse_code(cur, closers, config)
    } else {
        None
    }
}

/// Restores the cursor after a failed attempt.
fn rollback<'a, T>(cur: &mut Cursor<'a>, saved: Cursor<'a>, what: &str) -> Option<T> {
    log::trace!("No {what} at byte {}, rolling back", saved.pos());
    *cur = saved;
    None
}

fn try_parse_unicode_emoji<'a>(
    cur: &mut Cursor<'a>,
    emoji: &dyn EmojiPattern,
) -> Option<ContentNode<'a>> {
    let rest = cur.rest();
    let len = emoji
        .match_len(rest)
        .filter(|&len| len > 0 && len <= rest.len() && rest.is_char_boundary(len))?;
    cur.bump_n(len);
    Some(ContentNode::UnicodeEmoji(&rest[..len]))
}

/// Parses `[%file%](url)`, where `url` may contain balanced parentheses.
fn try_parse_file_embed<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'_>,
) -> Option<ContentNode<'a>> {
    let saved = cur.clone();
    cur.bump_n(FileEmbed::OPEN.len());
    // The opener's last byte is the parenthesis that must balance.
    let paren = cur.pos() - 1;
    let url_start = cur.pos();

    let Some(close) = closers.matching_paren(paren) else {
        return rollback(cur, saved, "file embed");
    };
    if close == url_start {
        return rollback(cur, saved, "file embed");
    }
    cur.seek(close + 1);
    Some(ContentNode::FileEmbed(cur.slice(url_start, close)))
}

fn try_parse_custom_emoji<'a>(cur: &mut Cursor<'a>) -> Option<ContentNode<'a>> {
    let saved = cur.clone();
    cur.bump_n(CustomEmoji::OPEN.len());
    let id_start = cur.pos();

    while let Some(b) = cur.peek()
        && CustomEmoji::is_id_byte(b)
    {
        cur.bump();
    }
    let id_end = cur.pos();

    if id_end == id_start || cur.peek() != Some(CustomEmoji::CLOSE) {
        return rollback(cur, saved, "custom emoji");
    }
    cur.bump(); // >
    Some(ContentNode::CustomEmoji(cur.slice(id_start, id_end)))
}

/// Parses `*x*`, `**x**` or `***x***`.
///
/// The opening run picks the form. If that form is disabled the attempt
/// fails outright rather than trying a shorter run.
fn try_parse_emphasis<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'_>,
    config: &ParserConfig,
) -> Option<ContentNode<'a>> {
    let saved = cur.clone();
    let mut run = 0;
    while run < Emphasis::MAX_RUN && cur.peek() == Some(Emphasis::STAR) {
        cur.bump();
        run += 1;
    }

    let Some(feature) = Emphasis::feature_for_run(run) else {
        return rollback(cur, saved, "emphasis");
    };
    if !config.is_enabled(feature) {
        return rollback(cur, saved, "enabled emphasis");
    }

    let closer = Emphasis::closer(run);
    let inner_start = cur.pos();
    let Some(inner_end) = closers.find(closer, inner_start) else {
        return rollback(cur, saved, "closed emphasis");
    };
    if inner_end == inner_start {
        return rollback(cur, saved, "non-empty emphasis");
    }
    cur.seek(inner_end + closer.len());

    let content = cur.slice(inner_start, inner_end);
    Some(match feature {
        Feature::Italic => ContentNode::Italic(content),
        Feature::Bold => ContentNode::Bold(content),
        _ => ContentNode::BoldItalic(content),
    })
}

/// Parses `<userid:'id'>` or `<roleid:'id'>`; `make` builds the node.
fn try_parse_mention<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'_>,
    open: &[u8],
    make: fn(&'a str) -> ContentNode<'a>,
) -> Option<ContentNode<'a>> {
    let saved = cur.clone();
    cur.bump_n(open.len());
    let id_start = cur.pos();

    let Some(id_end) = closers.find(Mention::CLOSE, id_start) else {
        return rollback(cur, saved, "mention");
    };
    if id_end == id_start {
        return rollback(cur, saved, "mention");
    }
    cur.seek(id_end + Mention::CLOSE.len());
    Some(make(cur.slice(id_start, id_end)))
}

fn try_parse_invite<'a>(cur: &mut Cursor<'a>) -> Option<ContentNode<'a>> {
    let (url, code) = Invite::match_start(cur.rest())?;
    cur.bump_n(url.len());
    Some(ContentNode::Invite { code, url })
}

/// Parses a bare link up to the next whitespace. Trailing punctuation is
/// part of the URL.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<ContentNode<'a>> {
    let rest = cur.rest();
    let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
    if len == 0 {
        return None;
    }
    cur.bump_n(len);
    let url = &rest[..len];
    Some(ContentNode::Link { url, text: url })
}

/// Parses `# `, `## `, `### ` or `-# ` followed by text up to the end of
/// the line. The newline itself is left for the following text.
fn try_parse_heading<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'_>,
    config: &ParserConfig,
) -> Option<ContentNode<'a>> {
    let level = Heading::LEVELS
        .into_iter()
        .find(|level| cur.starts_with(level.prefix()))?;
    if !config.is_enabled(level.feature()) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(level.prefix().len());
    let inner_start = cur.pos();
    let inner_end = closers
        .find(Heading::NEWLINE, inner_start)
        .unwrap_or(cur.s.len());

    let content = cur.slice(inner_start, inner_end).trim();
    if content.is_empty() {
        return rollback(cur, saved, "heading content");
    }
    cur.seek(inner_end);

    Some(match level {
        HeadingLevel::H1 => ContentNode::Heading1(content),
        HeadingLevel::H2 => ContentNode::Heading2(content),
        HeadingLevel::H3 => ContentNode::Heading3(content),
        HeadingLevel::Subtext => ContentNode::Subtext(content),
    })
}

fn try_parse_spoiler<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'_>,
) -> Option<ContentNode<'a>> {
    let saved = cur.clone();
    cur.bump_n(Spoiler::FENCE.len());
    let inner_start = cur.pos();

    let Some(inner_end) = closers.find(Spoiler::FENCE, inner_start) else {
        return rollback(cur, saved, "closed spoiler");
    };
    let content = cur.slice(inner_start, inner_end).trim();
    if content.is_empty() {
        return rollback(cur, saved, "non-empty spoiler");
    }
    cur.seek(inner_end + Spoiler::FENCE.len());
    Some(ContentNode::Spoiler(content))
}

/// Fenced blocks first, then inline code.
fn try_parse_code<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'_>,
    config: &ParserConfig,
) -> Option<ContentNode<'a>> {
    if cur.starts_with(Code::FENCE)
        && config.is_enabled(Feature::CodeBlock)
        && let Some(node) = try_parse_code_block(cur, closers)
    {
        return Some(node);
    }
    if config.is_enabled(Feature::InlineCode) {
        return try_parse_inline_code(cur, closers);
    }
    None
}

/// Parses ```` ```lang\ncontent``` ````.
///
/// The language tag is only taken when a whitespace separator follows it;
/// otherwise the content starts right after the opening fence. An empty
/// body is allowed.
fn try_parse_code_block<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'_>,
) -> Option<ContentNode<'a>> {
    let saved = cur.clone();
    cur.bump_n(Code::FENCE.len());
    let tag_start = cur.pos();

    while let Some(b) = cur.peek()
        && Code::is_lang_byte(b)
    {
        cur.bump();
    }
    let tag_end = cur.pos();

    let language = match cur.peek() {
        Some(b) if b.is_ascii_whitespace() => {
            cur.bump(); // separator
            (tag_end > tag_start).then(|| cur.slice(tag_start, tag_end))
        }
        _ => {
            cur.seek(tag_start);
            None
        }
    };

    let inner_start = cur.pos();
    let Some(inner_end) = closers.find(Code::FENCE, inner_start) else {
        return rollback(cur, saved, "closed code block");
    };
    cur.seek(inner_end + Code::FENCE.len());

    Some(ContentNode::CodeBlock {
        language,
        content: cur.slice(inner_start, inner_end).trim(),
    })
}

fn try_parse_inline_code<'a>(
    cur: &mut Cursor<'a>,
    closers: &mut Closers<'_>,
) -> Option<ContentNode<'a>> {
    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();

    let Some(inner_end) = closers.find(Code::INLINE, inner_start) else {
        return rollback(cur, saved, "closed inline code");
    };
    if inner_end == inner_start {
        return rollback(cur, saved, "non-empty inline code");
    }
    cur.seek(inner_end + Code::INLINE.len());
    Some(ContentNode::InlineCode(cur.slice(inner_start, inner_end)))
}
