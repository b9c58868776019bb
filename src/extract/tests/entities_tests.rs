//! Tests for the merged entity list and the `Extractor` facade.

use std::sync::Arc;

use crate::extract::{
    entities, hashtags, urls, Entity, EntityKind, Extractor, Range, TldKind, TldSet,
};
use pretty_assertions::assert_eq;

fn summary(found: &[Entity]) -> Vec<(EntityKind, &str)> {
    found.iter().map(|e| (e.kind(), e.text.as_str())).collect()
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_mixed_entities_in_order() {
    let found = entities("text mentioning @username with a url http://t.co/abcde and a #hashtag");
    assert_eq!(
        summary(&found),
        vec![
            (EntityKind::Mention, "@username"),
            (EntityKind::Url, "http://t.co/abcde"),
            (EntityKind::Hashtag, "#hashtag"),
        ]
    );
    assert_eq!(found[0].range, Range::new(16, 25));
}

#[test]
fn test_empty_text() {
    assert!(entities("").is_empty());
    assert!(entities("nothing to see here").is_empty());
}

// ============================================================================
// Overlap resolution
// ============================================================================

#[test]
fn test_hashtag_in_query_belongs_to_url() {
    let text = "http://example.com/?tag=#rust";
    let found = entities(text);
    assert_eq!(summary(&found), vec![(EntityKind::Url, text)]);
    assert!(hashtags(text).is_empty());
}

#[test]
fn test_mention_in_path_belongs_to_url() {
    let text = "profile http://example.com/@alice";
    let found = entities(text);
    assert_eq!(summary(&found), vec![(EntityKind::Url, "http://example.com/@alice")]);
}

#[test]
fn test_mention_next_to_url() {
    let found = entities("@alice http://example.com #news");
    assert_eq!(
        summary(&found),
        vec![
            (EntityKind::Mention, "@alice"),
            (EntityKind::Url, "http://example.com"),
            (EntityKind::Hashtag, "#news"),
        ]
    );
}

#[test]
fn test_ranges_never_overlap() {
    let found = entities("@a #b http://c.com/#d @e/f g.com #h");
    for pair in found.windows(2) {
        assert!(pair[0].range.stop <= pair[1].range.start, "{} / {}", pair[0], pair[1]);
    }
}

// ============================================================================
// TLD injection
// ============================================================================

#[test]
fn test_custom_tld_table() {
    let tlds = TldSet::from_json(r#"{"generic": ["internal"]}"#).unwrap();
    let extractor = Extractor::with_tlds(Arc::new(tlds));

    let found = extractor.urls("see wiki.internal and example.com");
    assert_eq!(summary(&found), vec![(EntityKind::Url, "wiki.internal")]);
    assert_eq!(urls("see wiki.internal and example.com").len(), 1);
}

#[test]
fn test_empty_tld_table_keeps_protocol_urls() {
    let extractor = Extractor::with_tlds(Arc::new(TldSet::new()));
    let found = extractor.urls("example.com and https://example.com");
    assert_eq!(summary(&found), vec![(EntityKind::Url, "https://example.com")]);
}

#[test]
fn test_inserted_tld() {
    let mut tlds = TldSet::new();
    tlds.insert("Zone", TldKind::Generic).unwrap();
    let extractor = Extractor::with_tlds(Arc::new(tlds));
    assert_eq!(extractor.urls("a.zone").len(), 1);
}

#[test]
fn test_default_matches_free_functions() {
    let text = "@alice #rust example.com";
    assert_eq!(Extractor::default().entities(text), entities(text));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_entities_serialize_for_hosts() {
    let found = entities("@alice/team");
    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json[0]["kind"], "Mention");
    assert_eq!(json[0]["screen_name"], "alice");
    assert_eq!(json[0]["list_slug"], "team");
    assert_eq!(json[0]["range"]["stop"], 11);
}
