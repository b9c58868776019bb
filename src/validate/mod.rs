//! Validation
//!
//! - `error.rs` - `ValidationError`, the closed set of text failures
//! - `config.rs` - `ValidationArgs`
//! - `text.rs` - normalized length and whole-post checks
//! - `token.rs` - single username, list and hashtag tokens
//! - `url.rs` - strict whole-string URL check
//!
//! Token checks reuse the extractors. The URL check does not; it runs the
//! RFC 3986 grammar from `grammar::validation`.
//!
//! # Usage
//! ```
//! use bytetext::validate::{text_validate, url_is_valid, ValidationArgs, ValidationError};
//!
//! let args = ValidationArgs::new(140, false);
//! assert_eq!(text_validate("", args), Err(ValidationError::Empty));
//! assert!(url_is_valid("http://[::1]:8080/", true, true));
//! ```

pub mod config;
pub mod error;

mod text;
mod token;
mod url;

pub use config::ValidationArgs;
pub use error::ValidationError;
pub use text::{text_is_valid, text_length, text_validate};
pub use token::{hashtag_is_valid, list_is_valid, username_is_valid};
pub use url::url_is_valid;

/// Code points rejected by [`text_validate`].
pub const INVALID_CHARACTERS: &[char] = &crate::grammar::INVALID_CHARACTERS;
