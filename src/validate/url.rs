//! Strict URL validation
//!
//! The input is split once by `unencoded_url_re` into scheme, authority,
//! path, query and fragment; each part is then matched whole against its
//! own grammar. Percent-encoded input is expected: spaces and other
//! unencoded characters fail the path, query or fragment checks.

use crate::grammar::validation::{
    authority_re, fragment_re, path_re, query_re, scheme_re, unencoded_url_re,
    unicode_authority_re, web_protocol_re,
};

/// Whether `url` is a well-formed URL.
///
/// `require_protocol` demands an `http` or `https` scheme. `allow_unicode`
/// accepts non-ASCII characters in host labels (IDN hosts written
/// natively). Without a protocol requirement any syntactically valid
/// scheme is accepted.
///
/// A scheme is only recognised when followed by `://`. Without it the
/// prefix reads as authority, so `mailto:foo@example.com` is checked as
/// userinfo `mailto:foo` on host `example.com` and passes when no protocol
/// is required.
pub fn url_is_valid(url: &str, require_protocol: bool, allow_unicode: bool) -> bool {
    if url.is_empty() {
        return false;
    }
    let Some(parts) = unencoded_url_re().captures(url) else {
        return false;
    };

    match parts.name("scheme") {
        Some(scheme) if require_protocol => {
            if !web_protocol_re().is_match(scheme.as_str()) {
                return false;
            }
        }
        Some(scheme) => {
            if !scheme_re().is_match(scheme.as_str()) {
                return false;
            }
        }
        None if require_protocol => return false,
        None => {}
    }

    let part = |name: &str| parts.name(name).map_or("", |m| m.as_str());

    if !path_re().is_match(part("path")) {
        return false;
    }
    if parts.name("query").is_some() && !query_re().is_match(part("query")) {
        return false;
    }
    if parts.name("fragment").is_some() && !fragment_re().is_match(part("fragment")) {
        return false;
    }

    let authority = part("authority");
    if allow_unicode {
        unicode_authority_re().is_match(authority)
    } else {
        authority_re().is_match(authority)
    }
}
