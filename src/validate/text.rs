//! Whole-post checks.

use unicode_normalization::UnicodeNormalization;

use super::{ValidationArgs, ValidationError, INVALID_CHARACTERS};

/// Code points in the NFC form of `text`.
///
/// `"e\u{301}"` and `"é"` both count as one.
pub fn text_length(text: &str) -> usize {
    text.nfc().count()
}

/// Runs the checks in order: empty, too long, invalid character.
pub fn text_validate(text: &str, args: ValidationArgs) -> Result<(), ValidationError> {
    if !args.can_be_empty && text.is_empty() {
        return Err(ValidationError::Empty);
    }

    let length = text_length(text);
    if length > args.max_length {
        return Err(ValidationError::TooLong {
            length,
            max_length: args.max_length,
        });
    }

    if let Some((offset, character)) = text
        .char_indices()
        .find(|(_, c)| INVALID_CHARACTERS.contains(c))
    {
        return Err(ValidationError::InvalidCharacter { character, offset });
    }

    Ok(())
}

pub fn text_is_valid(text: &str, args: ValidationArgs) -> bool {
    text_validate(text, args).is_ok()
}
