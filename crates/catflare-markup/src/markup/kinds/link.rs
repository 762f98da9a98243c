use std::sync::OnceLock;

use regex::Regex;

/// Bare `http://` / `https://` links, running to the next whitespace.
pub struct Link;

impl Link {
    pub const HTTP: &'static [u8; 7] = b"http://";
    pub const HTTPS: &'static [u8; 8] = b"https://";
    pub const LEAD: u8 = b'h';

    pub fn at_scheme(rest: &[u8]) -> bool {
        rest.starts_with(Self::HTTP) || rest.starts_with(Self::HTTPS)
    }
}

/// Catflare invite URLs, a narrower form of [`Link`] that carries a code.
pub struct Invite;

impl Invite {
    pub const PATTERN: &'static str =
        r"^https?://(?:rolling\.)?catfla\.re/invite/([A-Za-z0-9_-]+)";

    fn regex() -> &'static Regex {
        static INVITE_REGEX: OnceLock<Regex> = OnceLock::new();
        INVITE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid invite regex"))
    }

    /// Matches an invite URL at the start of `rest`, returning `(url, code)`.
    pub fn match_start(rest: &str) -> Option<(&str, &str)> {
        let caps = Self::regex().captures(rest)?;
        let url = caps.get(0)?.as_str();
        let code = caps.get(1)?.as_str();
        Some((url, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://catfla.re/invite/abc123", "https://catfla.re/invite/abc123", "abc123")]
    #[case("http://catfla.re/invite/a-b_c rest", "http://catfla.re/invite/a-b_c", "a-b_c")]
    #[case(
        "https://rolling.catfla.re/invite/XyZ9/extra",
        "https://rolling.catfla.re/invite/XyZ9",
        "XyZ9"
    )]
    fn invite_urls(#[case] input: &str, #[case] url: &str, #[case] code: &str) {
        assert_eq!(Invite::match_start(input), Some((url, code)));
    }

    #[rstest]
    #[case("https://catfla.re/invite/")]
    #[case("https://catflaxre/invite/abc")]
    #[case("https://other.catfla.re/invite/abc")]
    #[case("see https://catfla.re/invite/abc")]
    #[case("ftp://catfla.re/invite/abc")]
    fn non_invite_urls(#[case] input: &str) {
        assert_eq!(Invite::match_start(input), None);
    }

    #[test]
    fn scheme_detection() {
        assert!(Link::at_scheme(b"http://x"));
        assert!(Link::at_scheme(b"https://x"));
        assert!(!Link::at_scheme(b"https:/x"));
        assert!(!Link::at_scheme(b"htt"));
    }
}
