//! Entity extraction
//!
//! - `entity.rs` - Range, EntityKind and Entity value types
//! - `mention.rs` - `@screen_name` and `@screen_name/list`
//! - `hashtag.rs` - `#tag` over a Unicode word class
//! - `url.rs` - URL candidates refined by host and TLD rules
//! - `resolver.rs` - merge into one ordered, non-overlapping list
//! - `tld.rs` - injectable top-level domain table
//!
//! All ranges are code-point offsets into the input text.
//!
//! # Usage
//! ```
//! use bytetext::extract::{entities, EntityKind};
//!
//! let found = entities("text mentioning @username with a url http://t.co/abcde and a #hashtag");
//! let kinds: Vec<EntityKind> = found.iter().map(|e| e.kind()).collect();
//! assert_eq!(kinds, vec![EntityKind::Mention, EntityKind::Url, EntityKind::Hashtag]);
//! ```

pub mod entity;
pub mod tld;

mod hashtag;
mod mention;
mod offsets;
mod resolver;
mod url;

pub use entity::*;
pub use tld::*;

use std::fmt;
use std::sync::{Arc, OnceLock};

/// Runs the extractors with a given TLD table.
///
/// Cheap to clone; the table is shared.
#[derive(Clone)]
pub struct Extractor {
    tlds: Arc<dyn TldLookup>,
}

impl Extractor {
    /// Extractor backed by [`TldSet::builtin`].
    pub fn new() -> Self {
        Self::with_tlds(Arc::new(TldSet::builtin()))
    }

    pub fn with_tlds(tlds: Arc<dyn TldLookup>) -> Self {
        Extractor { tlds }
    }

    /// Mentions, URLs and hashtags, ordered by start, never overlapping.
    pub fn entities(&self, text: &str) -> Vec<Entity> {
        let mut candidates = mention::extract(text);
        candidates.extend(url::extract(text, self.tlds.as_ref()));
        candidates.extend(hashtag::extract(text));
        resolver::resolve(candidates)
    }

    /// Mentions and list mentions.
    pub fn mentioned_screen_names(&self, text: &str) -> Vec<Entity> {
        mention::extract(text)
    }

    /// Hashtags, excluding any that fall inside a URL.
    pub fn hashtags(&self, text: &str) -> Vec<Entity> {
        let tags = hashtag::extract(text);
        if tags.is_empty() {
            return tags;
        }
        hashtag::outside_urls(tags, &self.urls(text))
    }

    pub fn urls(&self, text: &str) -> Vec<Entity> {
        url::extract(text, self.tlds.as_ref())
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor").finish_non_exhaustive()
    }
}

static DEFAULT_EXTRACTOR: OnceLock<Extractor> = OnceLock::new();

/// Process-wide extractor with the built-in TLD table
pub fn default_extractor() -> &'static Extractor {
    DEFAULT_EXTRACTOR.get_or_init(Extractor::new)
}

/// See [`Extractor::entities`].
pub fn entities(text: &str) -> Vec<Entity> {
    default_extractor().entities(text)
}

/// See [`Extractor::mentioned_screen_names`].
pub fn mentioned_screen_names(text: &str) -> Vec<Entity> {
    default_extractor().mentioned_screen_names(text)
}

/// See [`Extractor::hashtags`].
pub fn hashtags(text: &str) -> Vec<Entity> {
    default_extractor().hashtags(text)
}

/// See [`Extractor::urls`].
pub fn urls(text: &str) -> Vec<Entity> {
    default_extractor().urls(text)
}

#[cfg(test)]
mod tests;
