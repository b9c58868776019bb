//! Top-level domain lookup
//!
//! URL candidates written without a protocol (`example.com/page`) are only
//! accepted when their final label is a known top-level domain. The table is
//! injected into the [`Extractor`](super::Extractor); `TldSet::builtin()`
//! is used when none is given.

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Category of a top-level domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TldKind {
    /// `com`, `org`, `app`, ...
    Generic,
    /// Two-letter ISO country codes
    Country,
}

/// A read-only table of top-level labels.
///
/// Implementations must be case-insensitive.
pub trait TldLookup: Send + Sync {
    fn classify(&self, label: &str) -> Option<TldKind>;

    fn is_known(&self, label: &str) -> bool {
        self.classify(label).is_some()
    }
}

/// Errors raised while loading a TLD table
#[derive(Debug, Error)]
pub enum TldError {
    #[error("Invalid TLD document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TLD label: {0:?}")]
    InvalidLabel(String),
}

#[derive(Deserialize)]
struct TldDocument {
    #[serde(default)]
    country: Vec<String>,
    #[serde(default)]
    generic: Vec<String>,
}

/// `HashSet`-backed TLD table
#[derive(Debug, Clone, Default)]
pub struct TldSet {
    country: HashSet<String>,
    generic: HashSet<String>,
}

impl TldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// ISO country codes plus the generic domains seen most in posts.
    pub fn builtin() -> Self {
        let mut set = Self::new();
        set.country.extend(COUNTRY_TLDS.iter().map(|s| s.to_string()));
        set.generic.extend(GENERIC_TLDS.iter().map(|s| s.to_string()));
        set
    }

    /// Loads `{"country": [...], "generic": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, TldError> {
        let doc: TldDocument = serde_json::from_str(json)?;
        let mut set = Self::new();
        for label in doc.country {
            set.insert(&label, TldKind::Country)?;
        }
        for label in doc.generic {
            set.insert(&label, TldKind::Generic)?;
        }
        tracing::debug!(
            country = set.country.len(),
            generic = set.generic.len(),
            "Loaded TLD table"
        );
        Ok(set)
    }

    pub fn insert(&mut self, label: &str, kind: TldKind) -> Result<(), TldError> {
        let label = label.trim().trim_start_matches('.');
        if label.is_empty() || label.contains(|c: char| c == '.' || c.is_whitespace()) {
            return Err(TldError::InvalidLabel(label.to_string()));
        }
        let label = label.to_lowercase();
        match kind {
            TldKind::Country => self.country.insert(label),
            TldKind::Generic => self.generic.insert(label),
        };
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.country.len() + self.generic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TldLookup for TldSet {
    fn classify(&self, label: &str) -> Option<TldKind> {
        let label = label.to_lowercase();
        if self.country.contains(&label) {
            Some(TldKind::Country)
        } else if self.generic.contains(&label) {
            Some(TldKind::Generic)
        } else {
            None
        }
    }
}

const COUNTRY_TLDS: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at", "au", "aw", "ax",
    "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bl", "bm", "bn", "bo", "bq", "br",
    "bs", "bt", "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm",
    "cn", "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz", "ec",
    "ee", "eg", "eh", "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga", "gb", "gd",
    "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu", "gw", "gy",
    "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io", "iq", "ir", "is", "it",
    "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn", "kp", "kr", "kw", "ky", "kz", "la",
    "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv", "ly", "ma", "mc", "md", "me", "mf", "mg",
    "mh", "mk", "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms", "mt", "mu", "mv", "mw", "mx", "my",
    "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no", "np", "nr", "nu", "nz", "om", "pa", "pe",
    "pf", "pg", "ph", "pk", "pl", "pm", "pn", "pr", "ps", "pt", "pw", "py", "qa", "re", "ro", "rs",
    "ru", "rw", "sa", "sb", "sc", "sd", "se", "sg", "sh", "si", "sj", "sk", "sl", "sm", "sn", "so",
    "sr", "ss", "st", "su", "sv", "sx", "sy", "sz", "tc", "td", "tf", "tg", "th", "tj", "tk", "tl",
    "tm", "tn", "to", "tr", "tt", "tv", "tw", "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc",
    "ve", "vg", "vi", "vn", "vu", "wf", "ws", "ye", "yt", "za", "zm", "zw",
];

const GENERIC_TLDS: &[&str] = &[
    "aero", "app", "art", "asia", "bar", "biz", "blog", "cat", "club", "com", "coop", "design",
    "dev", "edu", "email", "gov", "info", "int", "io", "jobs", "live", "me", "mil", "mobi",
    "museum", "name", "net", "news", "online", "org", "page", "pro", "shop", "site", "space",
    "store", "tech", "tel", "travel", "tv", "video", "website", "wiki", "xxx", "xyz",
];
