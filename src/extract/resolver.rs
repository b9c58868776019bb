//! Entity resolver
//!
//! Merges candidates from every extractor into one ordered, non-overlapping
//! list. On overlap the higher-priority kind (URL, then mention, then
//! hashtag) is kept whole and the other candidate is dropped; spans are
//! never truncated. Between candidates of the same kind the earlier start
//! wins, then the longer span.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::entity::Entity;

pub(crate) fn resolve(mut candidates: Vec<Entity>) -> Vec<Entity> {
    candidates.sort_by_key(|e| (e.kind().priority(), e.range.start, Reverse(e.range.stop)));

    // Kept entities keyed by start. They never overlap, so the only one that
    // can clash with a candidate is the last one starting before its stop.
    let mut kept: BTreeMap<usize, Entity> = BTreeMap::new();

    for candidate in candidates {
        let clash = kept
            .range(..candidate.range.stop)
            .next_back()
            .map(|(_, winner)| winner)
            .filter(|winner| winner.range.overlaps(&candidate.range));

        if let Some(winner) = clash {
            tracing::trace!(
                dropped = %candidate,
                kept = %winner,
                "Dropped overlapping entity"
            );
            continue;
        }
        kept.insert(candidate.range.start, candidate);
    }

    kept.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::entity::{EntityKind, Range};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_url_beats_hashtag_inside_it() {
        let url = Entity::url(Range::new(0, 20), "http://a.com/#anchor");
        let tag = Entity::hashtag(Range::new(13, 20), "#anchor", "anchor");
        let resolved = resolve(vec![tag, url.clone()]);
        assert_eq!(resolved, vec![url]);
    }

    #[test]
    fn test_url_beats_mention_starting_earlier() {
        let mention = Entity::mention(Range::new(0, 6), "@a.com", "a", None);
        let url = Entity::url(Range::new(2, 12), "a.com/x@yz");
        let resolved = resolve(vec![mention, url.clone()]);
        assert_eq!(resolved, vec![url]);
    }

    #[test]
    fn test_disjoint_sorted_by_start() {
        let h = Entity::hashtag(Range::new(20, 24), "#tag", "tag");
        let u = Entity::url(Range::new(10, 19), "t.co/abcd");
        let m = Entity::mention(Range::new(0, 5), "@user", "user", None);
        let kinds: Vec<EntityKind> = resolve(vec![h, u, m]).iter().map(Entity::kind).collect();
        assert_eq!(kinds, vec![EntityKind::Mention, EntityKind::Url, EntityKind::Hashtag]);
    }

    #[test]
    fn test_adjacent_entities_both_kept() {
        let a = Entity::url(Range::new(0, 5), "a.com");
        let b = Entity::hashtag(Range::new(5, 7), "#b", "b");
        assert_eq!(resolve(vec![a, b]).len(), 2);
    }

    #[test]
    fn test_same_kind_earlier_start_wins() {
        let first = Entity::url(Range::new(0, 10), "a.com/abcd");
        let second = Entity::url(Range::new(5, 15), "abcd/efghi");
        assert_eq!(resolve(vec![second, first.clone()]), vec![first]);
    }
}
