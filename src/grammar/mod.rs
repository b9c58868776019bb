//! Grammar combinators
//!
//! Every pattern in the crate is assembled from small named fragments instead
//! of one literal, so each sub-grammar can be compiled and tested on its own:
//!
//! - `extraction.rs` - candidate scanners for mentions, hashtags and URLs
//! - `validation.rs` - strict whole-string URL grammar (RFC 3986 based)
//!
//! Fragments are plain `String`s. Compiled patterns are process-wide
//! singletons built on first use and never torn down.

use regex::{Regex, RegexBuilder};

pub(crate) mod extraction;
pub(crate) mod validation;

/// Upper bound for the compiled automata. The URL grammars carry several
/// Unicode classes and need more room than the regex default.
const SIZE_LIMIT: usize = 1 << 25;

/// Code points that may never appear in a post: non-characters, the BOM
/// and the bidi embedding/override controls.
pub const INVALID_CHARACTERS: [char; 8] = [
    '\u{FFFE}', '\u{FEFF}', '\u{FFFF}', '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}',
];

// ==================== CLASS MEMBERS ====================

/// ASCII control characters.
pub(crate) const CTRL_CHARS: &str = r"\x00-\x1F\x7F";

/// Unicode spacing, including a few characters not tagged White_Space.
pub(crate) const UNICODE_SPACES: &str = "\u{09}-\u{0D}\u{20}\u{85}\u{A0}\u{1680}\u{180E}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}";

/// Accented Latin letters, meant to sit next to `a-z` in a class.
pub(crate) const LATIN_ACCENTS: &str = concat!(
    "\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{00FF}\u{0100}-\u{024F}\u{0253}-\u{0254}",
    "\u{0256}-\u{0257}\u{0259}\u{025B}\u{0263}\u{0268}\u{026F}\u{0272}\u{0289}\u{02BB}\u{1E00}-\u{1EFF}"
);

pub(crate) const PUNCTUATION: &str = r##"\-_!"#$%&'()*+,./:;<=>?@\[\]^`{|}~"##;
pub(crate) const PUNCTUATION_NO_HYPHEN: &str = r##"_!"#$%&'()*+,./:;<=>?@\[\]^`{|}~"##;
pub(crate) const PUNCTUATION_NO_HYPHEN_UNDERSCORE: &str = r##"!"#$%&'()*+,./:;<=>?@\[\]^`{|}~"##;

pub(crate) const AT_SIGNS: &str = "@\u{FF20}";
pub(crate) const HASH_SIGNS: &str = "#\u{FF03}";

/// Anything outside ASCII. Used to widen label classes for IDN hosts.
pub(crate) const NON_ASCII: &str = r"[^\x00-\x7F]";

/// The invalid characters as class members.
pub(crate) fn invalid_characters() -> String {
    INVALID_CHARACTERS.iter().collect()
}

// ==================== COMBINATORS ====================

/// `(?:inner)`
pub(crate) fn group(inner: &str) -> String {
    format!("(?:{inner})")
}

/// `(?P<name>inner)`
pub(crate) fn capture(name: &str, inner: &str) -> String {
    format!("(?P<{name}>{inner})")
}

/// Ordered alternation. Earlier branches win (leftmost-first).
pub(crate) fn any_of(branches: &[&str]) -> String {
    group(&branches.join("|"))
}

/// `(?:inner)?`
pub(crate) fn optional(inner: &str) -> String {
    format!("{}?", group(inner))
}

/// `(?:inner)*`
pub(crate) fn many(inner: &str) -> String {
    format!("{}*", group(inner))
}

/// `(?:inner)+`
pub(crate) fn some(inner: &str) -> String {
    format!("{}+", group(inner))
}

/// Concatenation of fragments.
pub(crate) fn seq(parts: &[&str]) -> String {
    parts.concat()
}

/// `[members]`
pub(crate) fn class(members: &[&str]) -> String {
    format!("[{}]", members.concat())
}

/// `[^members]`
pub(crate) fn not_class(members: &[&str]) -> String {
    format!("[^{}]", members.concat())
}

/// Anchors `inner` to the whole haystack.
pub(crate) fn whole(inner: &str) -> String {
    format!(r"\A{}\z", group(inner))
}

/// A label whose first and last characters come from narrower classes than
/// its interior: `first (middle* last)?`.
pub(crate) fn label(first: &str, middle: &str, last: &str) -> String {
    group(&seq(&[first, &optional(&seq(&[middle, "*", last]))]))
}

/// A decimal octet, 0-255, without leading zeros.
pub(crate) fn dec_octet() -> String {
    any_of(&["25[0-5]", "2[0-4][0-9]", "1[0-9]{2}", "[1-9][0-9]", "[0-9]"])
}

/// Dotted-quad IPv4 literal.
pub(crate) fn ipv4() -> String {
    let octet = dec_octet();
    group(&seq(&[&octet, "(?:", r"\.", &octet, "){3}"]))
}

/// Bracketed IPv6 literal. Only the character set is checked.
pub(crate) fn ipv6_literal() -> String {
    group(&seq(&[r"\[", &ascii("[a-fA-F0-9:.]"), r"+\]"]))
}

/// `(?i:inner)`
///
/// Unicode case folding maps `k` to U+212A and `s` to U+017F, so ASCII
/// members inside `inner` must be wrapped in [`ascii`].
pub(crate) fn insensitive(inner: &str) -> String {
    format!("(?i:{inner})")
}

/// `(?-u:inner)`: case folding stays within ASCII. `inner` may only match
/// ASCII; negated classes are not allowed here.
pub(crate) fn ascii(inner: &str) -> String {
    format!("(?-u:{inner})")
}

/// Compiles a fragment. Matching is case-sensitive unless the fragment
/// opts in with [`insensitive`].
pub(crate) fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .size_limit(SIZE_LIMIT)
        .build()
        .expect("static grammar must compile")
}

/// Declares lazily compiled, process-wide patterns.
macro_rules! compiled {
    ($($(#[$meta:meta])* $vis:vis fn $name:ident => $pattern:expr;)*) => {
        $(
            $(#[$meta])*
            $vis fn $name() -> &'static regex::Regex {
                static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
                RE.get_or_init(|| $crate::grammar::compile(&$pattern))
            }
        )*
    };
}
pub(crate) use compiled;

// ==================== TESTS ====================
