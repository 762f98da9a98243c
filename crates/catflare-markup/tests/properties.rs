use catflare_markup::{
    ContentNode, Feature, ParserConfig, Preset, RegexEmojiPattern, Spanned, parse, parse_spanned,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Inputs mixing well-formed, malformed and overlapping markup.
fn corpus() -> Vec<String> {
    let mut inputs: Vec<String> = [
        "",
        "plain",
        "Hello **bold** world",
        "Hello *italic* and ***both*** here",
        "**unterminated",
        "***",
        "*a**b***c****",
        "||spoiler|| and ||||empty",
        "|| ||",
        "`code` ``` fenced\nblock ``` `",
        "```rust\nfn main() {}\n```",
        "```",
        "# Heading\n## Second\n### Third\n-# subtext\nbody",
        "#\n# \n-#\n-# ",
        "mid # sentence heading",
        "<emoji:cat> <emoji:> <emoji:bad id> <emoji:dog",
        "<userid:'1'><roleid:'2'><userid:''><roleid:'",
        "[%file%](https://x/y(1).png) [%file%]() [%file%](((",
        "https://catfla.re/invite/abc123 https://rolling.catfla.re/invite/z",
        "http://example.com, https://example.com/a(b).",
        "httpx://not-a-link http:/ https",
        "😀 café 👍🏽 日本 \u{2764}\u{FE0F}",
        "||**nested**|| `*raw*` **`mixed`**",
        "\r\n# crlf heading\r\nnext",
        "a*b*c||d||e`f`g",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    inputs.push("||a".repeat(200));
    inputs.push("<userid:'x ".repeat(200));
    inputs.push("[%file%](".repeat(200));
    inputs.push("*".repeat(100));
    inputs
}

fn spanned<'a>(text: &'a str, config: &ParserConfig) -> Vec<Spanned<'a>> {
    parse_spanned(text, config, RegexEmojiPattern::builtin())
}

/// Byte offset of `inner` within `outer`, which it must borrow from.
fn offset_in(outer: &str, inner: &str) -> usize {
    let start = inner.as_ptr() as usize - outer.as_ptr() as usize;
    assert!(start + inner.len() <= outer.len(), "{inner:?} escapes {outer:?}");
    start
}

#[test]
fn spans_tile_the_input() {
    for input in corpus() {
        let nodes = spanned(&input, &ParserConfig::message());
        let mut pos = 0;
        for s in &nodes {
            assert_eq!(s.span.start, pos, "gap or overlap in {input:?}: {nodes:?}");
            assert!(s.span.end > s.span.start, "empty span in {input:?}");
            pos = s.span.end;
        }
        assert_eq!(pos, input.len(), "input not fully covered: {input:?}");
    }
}

#[test]
fn node_text_comes_from_its_own_span() {
    for input in corpus() {
        for s in spanned(&input, &ParserConfig::message()) {
            let text = s.node.text();
            let start = offset_in(&input, text);
            assert!(
                start >= s.span.start && start + text.len() <= s.span.end,
                "{:?} outside {:?} in {input:?}",
                s.node,
                s.span
            );
            if s.node.is_text() {
                assert_eq!(text, s.span.slice(&input));
            }
        }
    }
}

#[test]
fn only_delimiters_and_trimmed_whitespace_are_dropped() {
    for input in corpus() {
        for s in spanned(&input, &ParserConfig::message()) {
            let droppable: &[char] = match s.node {
                ContentNode::Bold(_) | ContentNode::Italic(_) | ContentNode::BoldItalic(_) => {
                    &['*']
                }
                ContentNode::Spoiler(_) => &['|'],
                ContentNode::Heading1(_)
                | ContentNode::Heading2(_)
                | ContentNode::Heading3(_)
                | ContentNode::Subtext(_) => &['#', '-'],
                ContentNode::InlineCode(_) | ContentNode::CodeBlock { language: None, .. } => {
                    &['`']
                }
                _ => continue,
            };

            let text = s.node.text();
            let start = offset_in(&input, text);
            let dropped = input[s.span.start..start]
                .chars()
                .chain(input[start + text.len()..s.span.end].chars());
            for c in dropped {
                assert!(
                    c.is_whitespace() || droppable.contains(&c),
                    "{c:?} dropped from {:?} in {input:?}",
                    s.node
                );
            }
        }
    }
}

#[test]
fn text_runs_are_never_split() {
    for input in corpus() {
        let nodes = parse(&input, &ParserConfig::message());
        for pair in nodes.windows(2) {
            assert!(
                !(pair[0].is_text() && pair[1].is_text()),
                "adjacent text nodes in {input:?}: {nodes:?}"
            );
        }
    }
}

#[test]
fn only_code_blocks_may_be_empty() {
    for input in corpus() {
        for node in parse(&input, &ParserConfig::message()) {
            if !matches!(node, ContentNode::CodeBlock { .. }) {
                assert!(!node.text().is_empty(), "empty {node:?} in {input:?}");
            }
        }
    }
}

#[test]
fn parsing_is_deterministic() {
    for input in corpus() {
        let config = ParserConfig::message();
        assert_eq!(parse(&input, &config), parse(&input, &config));
    }
}

#[rstest]
fn disabled_features_never_appear(
    #[values(
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
        Feature::RoleMention
    )]
    feature: Feature,
) {
    let config = ParserConfig::message().without(feature);
    for input in corpus() {
        for node in parse(&input, &config) {
            assert_ne!(node.feature(), Some(feature), "in {input:?}");
        }
    }
}

#[test]
fn every_feature_is_reachable_from_the_corpus() {
    let mut seen = std::collections::BTreeSet::new();
    for input in corpus() {
        seen.extend(parse(&input, &ParserConfig::message()).iter().filter_map(|n| n.feature()));
    }
    let all: std::collections::BTreeSet<Feature> = Feature::ALL.into_iter().collect();
    assert_eq!(seen, all);
}

#[rstest]
#[case("just some words, nothing else.")]
#[case("numbers 1 2 3 and symbols ! ? ; ~ = +")]
#[case("unicode without emoji: café naïve 日本語")]
#[case("hashes#inside#words and dashes-#")]
fn input_without_constructs_is_one_text_node(#[case] input: &str) {
    assert_eq!(
        parse(input, &ParserConfig::message()),
        vec![ContentNode::Text(input)]
    );
}

#[test]
fn presets_agree_on_every_input() {
    for input in corpus() {
        assert_eq!(
            parse(&input, &Preset::Message.config()),
            parse(&input, &Preset::Bio.config())
        );
    }
}

#[test]
fn unterminated_openers_at_scale() {
    // Each opener would scan to the end if closer lookups were not shared.
    let inputs = [
        "<userid:'x ".repeat(20_000),
        "[%file%](".repeat(20_000),
        "||a ".repeat(20_000) + "|",
        "`".repeat(20_000),
    ];
    for input in inputs {
        let nodes = spanned(&input, &ParserConfig::message());
        assert_eq!(nodes.last().map(|s| s.span.end), Some(input.len()));
    }
}
