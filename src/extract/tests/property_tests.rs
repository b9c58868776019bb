//! Property tests over generated posts.

use crate::extract::{entities, hashtags, mentioned_screen_names, urls};
use proptest::prelude::*;

/// Posts assembled from fragments that tend to form and break entities.
fn post() -> impl Strategy<Value = String> {
    let fragment = prop::sample::select(vec![
        " ", "@", "＠", "#", "＃", ".", "/", ":", "_", "-", "(", ")", "?", "=", "alice", "rust",
        "com", "jp", "co", "http://", "https://", "t.co/", "example", "é", "日本", "123",
        "RT", "\u{20E3}",
    ]);
    prop::collection::vec(fragment, 0..24).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_entities_ordered_and_disjoint(text in post()) {
        let found = entities(&text);
        for pair in found.windows(2) {
            prop_assert!(pair[0].range.stop <= pair[1].range.start);
        }
    }

    #[test]
    fn prop_text_matches_range(text in post()) {
        let found = entities(&text)
            .into_iter()
            .chain(mentioned_screen_names(&text))
            .chain(hashtags(&text))
            .chain(urls(&text));
        for entity in found {
            prop_assert!(!entity.range.is_empty());
            prop_assert_eq!(entity.range.slice(&text), entity.text.as_str());
        }
    }

    #[test]
    fn prop_extraction_is_deterministic(text in post()) {
        prop_assert_eq!(entities(&text), entities(&text));
    }

    #[test]
    fn prop_ranges_within_text(text in post()) {
        let length = text.chars().count();
        for entity in entities(&text) {
            prop_assert!(entity.range.stop <= length);
        }
    }
}
