//! Candidate scanners used by the extractors.
//!
//! The regex engine has no look-around, so every scanner consumes the
//! character in front of the entity as part of the match and the
//! extractors check the text that follows the match themselves.
//!
//! Scanners are case-sensitive and spell out `a-zA-Z`; only the protocol
//! and the retweet marker fold case, and only within ASCII.

use super::{
    any_of, ascii, capture, class, compiled, group, insensitive, invalid_characters, ipv4,
    ipv6_literal, many, not_class, optional, seq, some, AT_SIGNS, CTRL_CHARS, HASH_SIGNS,
    LATIN_ACCENTS, PUNCTUATION, PUNCTUATION_NO_HYPHEN, PUNCTUATION_NO_HYPHEN_UNDERSCORE,
    UNICODE_SPACES,
};

// ==================== MENTIONS ====================

/// What may stand right before an at-sign: start of text, a character that
/// cannot be part of a screen name or an e-mail address, or a retweet marker.
pub(crate) fn mention_preceding() -> String {
    let plain = not_class(&["a-zA-Z0-9_!#$%&*", AT_SIGNS]);
    let retweet = seq(&[
        &any_of(&["^", r"[^a-zA-Z0-9_+~.\-]"]),
        &insensitive(&ascii("RT")),
        ":?",
    ]);
    any_of(&[&plain, "^", &retweet])
}

pub(crate) fn screen_name() -> String {
    "[a-zA-Z0-9_]{1,20}".to_string()
}

pub(crate) fn list_slug() -> String {
    r"[a-zA-Z][a-zA-Z0-9_\-]{0,24}".to_string()
}

pub(crate) fn mention_or_list() -> String {
    seq(&[
        &mention_preceding(),
        &capture("at", &class(&[AT_SIGNS])),
        &capture("screen_name", &screen_name()),
        &optional(&seq(&["/", &capture("list_slug", &list_slug())])),
    ])
}

/// Text that may not directly follow a mention.
pub(crate) fn mention_terminator() -> String {
    seq(&[r"\A", &any_of(&[&class(&[AT_SIGNS]), &class(&[LATIN_ACCENTS]), "://"])])
}

// ==================== HASHTAGS ====================

/// Joiners, marks and middle dots that may appear inside a hashtag.
pub(crate) const HASHTAG_SPECIALS: &str = "_\u{200C}\u{200D}\u{A67E}\u{05BE}\u{05F3}\u{05F4}\u{FF5E}\u{301C}\u{309B}\u{309C}\u{30A0}\u{30FB}\u{3003}\u{0F0B}\u{0F0C}\u{00B7}";

/// Body characters other than decimal digits.
pub(crate) fn hashtag_non_digit() -> String {
    class(&[r"\p{L}\p{M}", HASHTAG_SPECIALS])
}

pub(crate) fn hashtag_alphanumeric() -> String {
    class(&[r"\p{L}\p{M}\p{Nd}", HASHTAG_SPECIALS])
}

pub(crate) fn hashtag_boundary() -> String {
    any_of(&["^", &not_class(&[r"&\p{L}\p{M}\p{Nd}", HASHTAG_SPECIALS])])
}

/// At least one non-digit somewhere in the body, so `#123` never matches
/// while `#_` and `#1_` do.
pub(crate) fn hashtag_body() -> String {
    let alnum = hashtag_alphanumeric();
    seq(&[&alnum, "*", &hashtag_non_digit(), &alnum, "*"])
}

pub(crate) fn hashtag() -> String {
    seq(&[
        &hashtag_boundary(),
        &capture(
            "hashtag",
            &seq(&[&class(&[HASH_SIGNS]), &capture("tag", &hashtag_body())]),
        ),
    ])
}

pub(crate) fn hashtag_terminator() -> String {
    seq(&[r"\A", &any_of(&[&class(&[HASH_SIGNS]), "://"])])
}

/// Keycap and variation selectors that turn `#` into an emoji.
pub(crate) fn hashtag_invalid_initial() -> String {
    seq(&[r"\A", &class(&["\u{FE0F}\u{20E3}"])])
}

// ==================== URLS ====================

pub(crate) fn url_preceding() -> String {
    any_of(&[
        &not_class(&["a-zA-Z0-9", AT_SIGNS, "$", HASH_SIGNS, &invalid_characters()]),
        "^",
    ])
}

fn domain_edge_char() -> String {
    not_class(&[PUNCTUATION, CTRL_CHARS, &invalid_characters(), UNICODE_SPACES])
}

fn subdomain_middle_char() -> String {
    not_class(&[
        PUNCTUATION_NO_HYPHEN_UNDERSCORE,
        CTRL_CHARS,
        &invalid_characters(),
        UNICODE_SPACES,
    ])
}

fn domain_middle_char() -> String {
    not_class(&[PUNCTUATION_NO_HYPHEN, CTRL_CHARS, &invalid_characters(), UNICODE_SPACES])
}

/// `label.` where inner characters may include `-` and `_`.
pub(crate) fn subdomain() -> String {
    let edge = domain_edge_char();
    group(&seq(&[
        &optional(&seq(&[&edge, &subdomain_middle_char(), "*"])),
        &edge,
        r"\.",
    ]))
}

/// `label.` where inner characters may include `-`.
pub(crate) fn domain_name() -> String {
    let edge = domain_edge_char();
    group(&seq(&[
        &optional(&seq(&[&edge, &domain_middle_char(), "*"])),
        &edge,
        r"\.",
    ]))
}

/// A top-level label: starts with a letter, ends with a letter or digit,
/// at least two characters long.
pub(crate) fn tld_label() -> String {
    seq(&[
        &class(&[r"\p{L}\p{M}"]),
        &class(&[r"\p{L}\p{M}\p{Nd}\-"]),
        "*",
        &class(&[r"\p{L}\p{M}\p{Nd}"]),
    ])
}

pub(crate) fn candidate_domain() -> String {
    group(&seq(&[&subdomain(), "*", &domain_name(), &tld_label()]))
}

pub(crate) fn candidate_host() -> String {
    any_of(&[
        &capture("domain", &candidate_domain()),
        &capture("ip", &any_of(&[&ipv4(), &ipv6_literal()])),
    ])
}

pub(crate) fn path_char() -> String {
    class(&[r"\-a-zA-Z\p{Cyrillic}0-9!*';:=+,.$/%#\[\]_~&|@", LATIN_ACCENTS])
}

/// One or two levels of balanced parentheses, as in wiki links.
pub(crate) fn balanced_parens() -> String {
    let chars = path_char();
    seq(&[
        r"\(",
        &any_of(&[&format!("{chars}+"), &seq(&[r"\(", &chars, "+", r"\)"])]),
        r"\)",
    ])
}

/// Characters allowed to end a path; sentence punctuation is not.
pub(crate) fn path_ending() -> String {
    any_of(&[
        &class(&[r"\-a-zA-Z\p{Cyrillic}0-9=_#/+", LATIN_ACCENTS]),
        &balanced_parens(),
    ])
}

pub(crate) fn path_segment() -> String {
    let chars = path_char();
    any_of(&[
        &seq(&[
            &chars,
            "*",
            &many(&seq(&[&balanced_parens(), &chars, "*"])),
            &path_ending(),
        ]),
        &seq(&[&chars, "+/"]),
    ])
}

pub(crate) fn query_char() -> String {
    r"[\-a-zA-Z0-9!?*'();:&=+$/%#\[\]_.,~|@]".to_string()
}

pub(crate) fn query_ending() -> String {
    "[a-zA-Z0-9_&=#/]".to_string()
}

pub(crate) fn candidate_url() -> String {
    seq(&[
        &url_preceding(),
        &capture(
            "url",
            &seq(&[
                &optional(&capture("protocol", &web_protocol())),
                &capture("host", &candidate_host()),
                &optional(&seq(&[":", &capture("port", "[0-9]{1,5}")])),
                &optional(&capture("path", &seq(&["/", &many(&path_segment())]))),
                &optional(&capture(
                    "query",
                    &seq(&[r"\?", &query_char(), "*", &query_ending()]),
                )),
            ]),
        ),
    ])
}

/// `http://` or `https://` in any case.
pub(crate) fn web_protocol() -> String {
    insensitive(&ascii("https?://"))
}

/// Shortened links are cut at the end of their slug.
pub(crate) fn short_link() -> String {
    seq(&[
        r"\A",
        &web_protocol(),
        &insensitive(&ascii(r"t\.co/")),
        &some("[a-zA-Z0-9]"),
    ])
}

compiled! {
    pub(crate) fn mention_re => mention_or_list();
    pub(crate) fn mention_terminator_re => mention_terminator();
    pub(crate) fn hashtag_re => hashtag();
    pub(crate) fn hashtag_terminator_re => hashtag_terminator();
    pub(crate) fn hashtag_invalid_initial_re => hashtag_invalid_initial();
    pub(crate) fn url_re => candidate_url();
    pub(crate) fn short_link_re => short_link();
}
