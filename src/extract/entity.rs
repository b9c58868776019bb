//! Range and entity value types shared by every extractor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open span `[start, stop)` in code-point offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Range {
    pub start: usize,
    pub stop: usize,
}

impl Range {
    pub fn new(start: usize, stop: usize) -> Self {
        debug_assert!(start <= stop, "Range: start must be <= stop");
        Range { start, stop }
    }

    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// Check if this range contains another range
    pub fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && other.stop <= self.stop
    }

    /// Check if this range overlaps with another
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.stop && other.start < self.stop
    }

    /// The covered code points of `source`.
    ///
    /// Offsets past the end of `source` are clamped, so the result is never
    /// longer than `source`.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        let mut bounds = source
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(source.len()));
        let Some(from) = bounds.nth(self.start) else {
            return "";
        };
        if self.is_empty() {
            return &source[from..from];
        }
        let to = bounds.nth(self.len() - 1).unwrap_or(source.len());
        &source[from..to]
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.stop)
    }
}

impl From<std::ops::Range<usize>> for Range {
    fn from(range: std::ops::Range<usize>) -> Self {
        Range::new(range.start, range.end)
    }
}

/// Kind of entity recognized in a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Mention,
    Hashtag,
    #[serde(rename = "URL")]
    Url,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Mention => "Mention",
            EntityKind::Hashtag => "Hashtag",
            EntityKind::Url => "URL",
        }
    }

    /// Lower wins when two candidates overlap. URLs may legitimately carry
    /// `@` and `#` in their path, query or fragment.
    pub(crate) fn priority(&self) -> u8 {
        match self {
            EntityKind::Url => 0,
            EntityKind::Mention => 1,
            EntityKind::Hashtag => 2,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific data carried by an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Attributes {
    Mention {
        screen_name: String,
        list_slug: Option<String>,
    },
    Hashtag {
        tag: String,
    },
    #[serde(rename = "URL")]
    Url,
}

/// A recognized mention, hashtag or URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub range: Range,
    /// The source text covered by `range`
    pub text: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Entity {
    pub fn mention(range: Range, text: &str, screen_name: &str, list_slug: Option<&str>) -> Self {
        Entity {
            range,
            text: text.to_string(),
            attributes: Attributes::Mention {
                screen_name: screen_name.to_string(),
                list_slug: list_slug.map(str::to_string),
            },
        }
    }

    pub fn hashtag(range: Range, text: &str, tag: &str) -> Self {
        Entity {
            range,
            text: text.to_string(),
            attributes: Attributes::Hashtag {
                tag: tag.to_string(),
            },
        }
    }

    pub fn url(range: Range, text: &str) -> Self {
        Entity {
            range,
            text: text.to_string(),
            attributes: Attributes::Url,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self.attributes {
            Attributes::Mention { .. } => EntityKind::Mention,
            Attributes::Hashtag { .. } => EntityKind::Hashtag,
            Attributes::Url => EntityKind::Url,
        }
    }

    /// Screen name without the at-sign or list suffix
    pub fn screen_name(&self) -> Option<&str> {
        match &self.attributes {
            Attributes::Mention { screen_name, .. } => Some(screen_name),
            _ => None,
        }
    }

    /// List slug of a `@user/list` mention, without the slash
    pub fn list_slug(&self) -> Option<&str> {
        match &self.attributes {
            Attributes::Mention { list_slug, .. } => list_slug.as_deref(),
            _ => None,
        }
    }

    /// Hashtag text without the hash sign
    pub fn tag(&self) -> Option<&str> {
        match &self.attributes {
            Attributes::Hashtag { tag } => Some(tag),
            _ => None,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind(), self.range, self.text)
    }
}
