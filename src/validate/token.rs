//! Single-token checks built on the extractors.
//!
//! A token is valid when extraction over it yields exactly one entity and
//! that entity covers the whole input.

use crate::extract::{self, Entity};

fn is_single(token: &str, found: &[Entity]) -> bool {
    matches!(found, [only] if only.text == token)
}

/// `@name`, or `@name/list` since a list mention is a mention.
pub fn username_is_valid(username: &str) -> bool {
    if username.is_empty() {
        return false;
    }
    is_single(username, &extract::mentioned_screen_names(username))
}

/// `@name/list`
pub fn list_is_valid(list: &str) -> bool {
    if list.is_empty() {
        return false;
    }
    matches!(
        extract::mentioned_screen_names(list).as_slice(),
        [only] if only.text == list && only.list_slug().is_some()
    )
}

pub fn hashtag_is_valid(hashtag: &str) -> bool {
    if hashtag.is_empty() {
        return false;
    }
    is_single(hashtag, &extract::hashtags(hashtag))
}
