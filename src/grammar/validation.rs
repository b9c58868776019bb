//! Whole-string URL grammar, built from the ABNF in RFC 3986.
//!
//! This grammar is stricter than the extraction scanner and shares nothing
//! with it beyond the IP literal fragments.
//!
//! Every compiled pattern is case-insensitive. Letter classes are wrapped in
//! `(?-u:...)` so folding never lets a non-ASCII character into an ASCII
//! host.

use super::{
    any_of, ascii, capture, compiled, group, insensitive, ipv4, ipv6_literal, label, many,
    optional, seq, whole, NON_ASCII,
};

pub(crate) const UNRESERVED: &str = r"(?-u:[a-z0-9\-._~])";
pub(crate) const PCT_ENCODED: &str = "(?:%(?-u:[0-9a-f]){2})";
pub(crate) const SUB_DELIMS: &str = r"[!$&'()*+,;=]";

pub(crate) fn pchar() -> String {
    any_of(&[UNRESERVED, PCT_ENCODED, SUB_DELIMS, r"[:|@]"])
}

pub(crate) fn userinfo() -> String {
    many(&any_of(&[UNRESERVED, PCT_ENCODED, SUB_DELIMS, ":"]))
}

pub(crate) fn ip() -> String {
    any_of(&[&ipv4(), &ipv6_literal()])
}

/// An ASCII class, plus every non-ASCII code point when `unicode` is set.
fn widen(members: &str, unicode: bool) -> String {
    let members = ascii(members);
    if unicode {
        any_of(&[&members, NON_ASCII])
    } else {
        members
    }
}

/// Labels left of the registrable domain may contain `_`.
pub(crate) fn subdomain_segment(unicode: bool) -> String {
    label(
        &widen("[a-z0-9]", unicode),
        &widen(r"[a-z0-9_\-]", unicode),
        &widen("[a-z0-9]", unicode),
    )
}

pub(crate) fn domain_segment(unicode: bool) -> String {
    label(
        &widen("[a-z0-9]", unicode),
        &widen(r"[a-z0-9\-]", unicode),
        &widen("[a-z0-9]", unicode),
    )
}

/// A top-level label must start with a letter.
pub(crate) fn domain_tld(unicode: bool) -> String {
    label(
        &widen("[a-z]", unicode),
        &widen(r"[a-z0-9\-]", unicode),
        &widen("[a-z0-9]", unicode),
    )
}

pub(crate) fn domain(unicode: bool) -> String {
    group(&seq(&[
        &many(&seq(&[&subdomain_segment(unicode), r"\."])),
        &group(&seq(&[&domain_segment(unicode), r"\."])),
        &domain_tld(unicode),
    ]))
}

pub(crate) fn host(unicode: bool) -> String {
    any_of(&[&ip(), &domain(unicode)])
}

pub(crate) fn port() -> String {
    "[0-9]{1,5}".to_string()
}

pub(crate) fn authority(unicode: bool) -> String {
    whole(&seq(&[
        &optional(&seq(&[&capture("userinfo", &userinfo()), "@"])),
        &capture("host", &host(unicode)),
        &optional(&seq(&[":", &capture("port", &port())])),
    ]))
}

pub(crate) fn scheme() -> String {
    whole(&ascii(r"[a-z][a-z0-9+\-.]*"))
}

pub(crate) fn path() -> String {
    whole(&many(&seq(&["/", &pchar(), "*"])))
}

pub(crate) fn query() -> String {
    whole(&many(&any_of(&[&pchar(), "/", r"\?"])))
}

pub(crate) fn fragment() -> String {
    whole(&many(&any_of(&[&pchar(), "/", r"\?"])))
}

/// RFC 3986 appendix B, with the scheme separator tightened to `://`.
pub(crate) fn unencoded_url() -> String {
    whole(&seq(&[
        &optional(&seq(&[&capture("scheme", "[^:/?#]+"), "://"])),
        &capture("authority", "[^/?#]*"),
        &capture("path", "[^?#]*"),
        &optional(&seq(&[r"\?", &capture("query", "[^#]*")])),
        &optional(&seq(&["#", &capture("fragment", ".*")])),
    ]))
}

pub(crate) fn web_protocol() -> String {
    whole(&ascii("https?"))
}

compiled! {
    pub(crate) fn unencoded_url_re => insensitive(&unencoded_url());
    pub(crate) fn scheme_re => insensitive(&scheme());
    pub(crate) fn web_protocol_re => insensitive(&web_protocol());
    pub(crate) fn path_re => insensitive(&path());
    pub(crate) fn query_re => insensitive(&query());
    pub(crate) fn fragment_re => insensitive(&fragment());
    pub(crate) fn authority_re => insensitive(&authority(false));
    pub(crate) fn unicode_authority_re => insensitive(&authority(true));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::compile;

    fn full(fragment: &str, input: &str) -> bool {
        compile(&insensitive(&whole(fragment))).is_match(input)
    }

    #[test]
    fn test_all_validators_compile() {
        unencoded_url_re();
        scheme_re();
        web_protocol_re();
        path_re();
        query_re();
        fragment_re();
        authority_re();
        unicode_authority_re();
    }

    #[test]
    fn test_pchar() {
        for ok in ["a", "Z", "~", "%2F", "!", "=", ":", "@", "|"] {
            assert!(full(&pchar(), ok), "{ok} should be a pchar");
        }
        for bad in ["/", "?", "#", " ", "%", "%zz", "é"] {
            assert!(!full(&pchar(), bad), "{bad} should not be a pchar");
        }
    }

    #[test]
    fn test_domain_ascii() {
        assert!(full(&domain(false), "example.com"));
        assert!(full(&domain(false), "my_sub.example.com"));
        assert!(!full(&domain(false), "my_domain.com"));
        assert!(!full(&domain(false), "example.1com"));
        assert!(!full(&domain(false), "example"));
        assert!(!full(&domain(false), "bücher.de"));
        assert!(full(&domain(false), "EXAMPLE.COM"));
        assert!(!full(&domain(false), "\u{212A}.com"));
        assert!(!full(&domain(false), "exa\u{17F}.com"));
    }

    #[test]
    fn test_domain_unicode() {
        assert!(full(&domain(true), "bücher.de"));
        assert!(full(&domain(true), "例え.テスト"));
        assert!(!full(&domain(true), "-bücher.de"));
    }

    #[test]
    fn test_authority_parts() {
        let re = authority_re();
        let caps = re.captures("user:pass@example.com:8080").expect("authority matches");
        assert_eq!(caps.name("userinfo").map(|m| m.as_str()), Some("user:pass"));
        assert_eq!(caps.name("host").map(|m| m.as_str()), Some("example.com"));
        assert_eq!(caps.name("port").map(|m| m.as_str()), Some("8080"));

        assert!(re.is_match("127.0.0.1"));
        assert!(re.is_match("[::1]:80"));
        assert!(!re.is_match("example.com:123456"));
        assert!(!re.is_match("exa mple.com"));
    }

    #[test]
    fn test_unencoded_split() {
        let caps = unencoded_url_re()
            .captures("https://example.com/a/b?x=1#top")
            .expect("any string splits");
        assert_eq!(caps.name("scheme").map(|m| m.as_str()), Some("https"));
        assert_eq!(caps.name("authority").map(|m| m.as_str()), Some("example.com"));
        assert_eq!(caps.name("path").map(|m| m.as_str()), Some("/a/b"));
        assert_eq!(caps.name("query").map(|m| m.as_str()), Some("x=1"));
        assert_eq!(caps.name("fragment").map(|m| m.as_str()), Some("top"));
    }

    #[test]
    fn test_scheme_and_protocol() {
        assert!(scheme_re().is_match("svn+ssh"));
        assert!(!scheme_re().is_match("1http"));
        assert!(web_protocol_re().is_match("HTTPS"));
        assert!(!web_protocol_re().is_match("ftp"));
        assert!(!web_protocol_re().is_match("http\u{17F}"));
        assert!(!scheme_re().is_match("\u{212A}"));
    }
}
