//! ByteText: entity extraction and validation for short posts
//!
//! A Rust/WASM library that finds @mentions, #hashtags and URLs in free
//! text and checks posts and single tokens against platform text rules.
//!
//! # Architecture
//!
//! ## Extraction
//! - `extract/mention.rs` - `@screen_name` and `@screen_name/list`
//! - `extract/hashtag.rs` - `#tag` over a Unicode word class
//! - `extract/url.rs` - URL candidates refined by host and TLD rules
//! - `extract/resolver.rs` - ordered, non-overlapping merge of all three
//! - `extract/tld.rs` - injectable top-level domain table
//!
//! ## Validation
//! - `validate/text.rs` - NFC length, empty/too long/invalid character
//! - `validate/token.rs` - single username, list and hashtag tokens
//! - `validate/url.rs` - strict RFC 3986 URL check
//!
//! ## Shared
//! - `grammar/` - pattern combinators and the compiled, process-wide grammars
//! - `wasm.rs` - `TextCortex` JavaScript bindings
//!
//! Offsets in every [`Range`] count Unicode code points, not bytes.
//!
//! # Usage (Rust)
//! ```
//! use bytetext::{entities, hashtag_is_valid, mentioned_screen_names};
//!
//! let found = mentioned_screen_names("mention @user1 @user2 and @user3");
//! assert_eq!(found[1].screen_name(), Some("user2"));
//! assert_eq!(found[1].range.to_string(), "(15, 21)");
//!
//! assert!(!hashtag_is_valid("#123"));
//! assert_eq!(entities("#rust and @ferris").len(), 2);
//! ```
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { TextCortex } from 'bytetext';
//!
//! await init();
//! const cortex = new TextCortex();
//! cortex.entities("text mentioning @username with a url http://t.co/abcde and a #hashtag");
//! cortex.isValidUrl("http://example.com/path?q=1", true, true); // true
//! ```

mod grammar;

pub mod extract;
pub mod validate;
pub mod wasm;

// Public exports - Extraction
pub use extract::{
    entities, hashtags, mentioned_screen_names, urls, Entity, EntityKind, Extractor, Range,
    TldKind, TldLookup, TldSet,
};

// Public exports - Validation
pub use validate::{
    hashtag_is_valid, list_is_valid, text_is_valid, text_length, text_validate, url_is_valid,
    username_is_valid, ValidationArgs, ValidationError,
};

pub use wasm::TextCortex;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Installs the panic hook so panics reach the browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("bytetext v{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_names_crate() {
        assert!(version().starts_with("bytetext v"));
    }
}
