//! URL extraction
//!
//! Candidates come from one scan (`grammar::extraction::candidate_url`):
//! an optional `http(s)://`, a host, an optional port, and a path/query
//! tail whose last character may not be sentence punctuation or an
//! unbalanced `)`. Each candidate is then refined here:
//!
//! - with a protocol, the grammar alone decides; `t.co` links are cut at
//!   the end of their slug
//! - without one, the host must be an ASCII domain whose top-level label
//!   the TLD table knows, and the candidate must not continue a word like
//!   `foo_bar.com` or a path like `/x.com`

use regex::Captures;

use super::entity::Entity;
use super::offsets::CodepointCursor;
use super::tld::{TldKind, TldLookup};
use crate::grammar::extraction::{short_link_re, url_re};

/// Country codes commonly used for short links, valid without a path.
const SHORT_LINK_COUNTRY_TLDS: &[&str] = &["co", "tv"];

/// Characters that may not directly precede a protocol-less URL.
const BARE_URL_INVALID_PRECEDING: &[char] = &['-', '_', '.', '/'];

pub(crate) fn extract(text: &str, tlds: &dyn TldLookup) -> Vec<Entity> {
    let mut cursor = CodepointCursor::new(text);
    let mut found = Vec::new();

    for caps in url_re().captures_iter(text) {
        let Some(url) = caps.name("url") else {
            continue;
        };
        let mut end = url.end();

        if caps.name("protocol").is_some() {
            if let Some(short) = short_link_re().find(url.as_str()) {
                end = url.start() + short.end();
            }
        } else if !accept_bare(text, &caps, tlds) {
            continue;
        }

        let range = cursor.range(url.start()..end);
        found.push(Entity::url(range, &text[url.start()..end]));
    }

    found
}

fn accept_bare(text: &str, caps: &Captures<'_>, tlds: &dyn TldLookup) -> bool {
    let (Some(url), Some(domain)) = (caps.name("url"), caps.name("domain")) else {
        // IP literals need a protocol
        return false;
    };
    if text[..url.start()].ends_with(BARE_URL_INVALID_PRECEDING) {
        return false;
    }

    let domain = domain.as_str();
    if !domain.is_ascii() {
        return false;
    }
    let Some((head, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    match tlds.classify(tld) {
        Some(TldKind::Generic) => true,
        Some(TldKind::Country) => {
            // `example.jp` alone is too likely to be prose
            caps.name("path").is_some()
                || head.contains('.')
                || SHORT_LINK_COUNTRY_TLDS.contains(&tld.to_ascii_lowercase().as_str())
        }
        None => {
            tracing::trace!(domain, "Dropped URL candidate with unknown TLD");
            false
        }
    }
}
