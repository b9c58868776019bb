//! Hashtag extraction over a Unicode word class.

use super::entity::Entity;
use super::offsets::CodepointCursor;
use crate::grammar::extraction::{hashtag_invalid_initial_re, hashtag_re, hashtag_terminator_re};

/// All hashtag candidates in `text`, left to right, without regard to URLs.
pub(crate) fn extract(text: &str) -> Vec<Entity> {
    let mut cursor = CodepointCursor::new(text);
    let mut found = Vec::new();

    for caps in hashtag_re().captures_iter(text) {
        let (Some(full), Some(tag)) = (caps.name("hashtag"), caps.name("tag")) else {
            continue;
        };
        if hashtag_terminator_re().is_match(&text[full.end()..]) {
            continue;
        }
        // keycap emoji
        if hashtag_invalid_initial_re().is_match(tag.as_str()) {
            continue;
        }

        let range = cursor.range(full.range());
        found.push(Entity::hashtag(range, full.as_str(), tag.as_str()));
    }

    found
}

/// Drops hashtags that sit inside one of `urls` (a `#fragment`).
pub(crate) fn outside_urls(hashtags: Vec<Entity>, urls: &[Entity]) -> Vec<Entity> {
    hashtags
        .into_iter()
        .filter(|tag| !urls.iter().any(|url| url.range.overlaps(&tag.range)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::entity::Range;

    fn tags(text: &str) -> Vec<String> {
        extract(text)
            .iter()
            .filter_map(|e| e.tag().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_basic_hashtag() {
        assert_eq!(tags("#rust is fun"), vec!["rust"]);
    }

    #[test]
    fn test_digits_only_rejected() {
        assert!(tags("#123").is_empty());
        assert_eq!(tags("#1st"), vec!["1st"]);
    }

    #[test]
    fn test_not_inside_words() {
        assert!(tags("abc#def").is_empty());
        assert!(tags("&#39;").is_empty());
    }

    #[test]
    fn test_trailing_punctuation_excluded() {
        let found = extract("love #rust!");
        assert_eq!(found[0].text, "#rust");
        assert_eq!(found[0].range, Range::new(5, 10));
    }

    #[test]
    fn test_outside_urls() {
        let url = Entity::url(Range::new(0, 20), "http://a.com/#anchor");
        let inside = Entity::hashtag(Range::new(13, 20), "#anchor", "anchor");
        let after = Entity::hashtag(Range::new(21, 25), "#tag", "tag");
        let kept = outside_urls(vec![inside, after.clone()], &[url]);
        assert_eq!(kept, vec![after]);
    }
}
