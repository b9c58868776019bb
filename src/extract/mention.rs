//! Mention extraction: `@screen_name` and `@screen_name/list-slug`.

use super::entity::Entity;
use super::offsets::CodepointCursor;
use crate::grammar::extraction::{mention_re, mention_terminator_re};

/// All mentions and list mentions in `text`, left to right.
pub(crate) fn extract(text: &str) -> Vec<Entity> {
    let mut cursor = CodepointCursor::new(text);
    let mut found = Vec::new();

    for caps in mention_re().captures_iter(text) {
        let (Some(at), Some(name)) = (caps.name("at"), caps.name("screen_name")) else {
            continue;
        };
        let slug = caps.name("list_slug");
        let end = slug.map_or(name.end(), |s| s.end());

        // `@user@host`, `@josé` and `@scheme://` are not mentions
        if mention_terminator_re().is_match(&text[end..]) {
            continue;
        }

        let range = cursor.range(at.start()..end);
        found.push(Entity::mention(
            range,
            &text[at.start()..end],
            name.as_str(),
            slug.map(|s| s.as_str()),
        ));
    }

    found
}
