//! Byte offset to code-point offset conversion.

use super::entity::Range;

/// Converts ascending byte offsets into code-point offsets in one pass.
///
/// The regex engine reports byte offsets; entities carry code-point
/// offsets. Matches come out left to right, so the cursor only walks
/// forward. A request behind the cursor restarts the count from zero.
pub(crate) struct CodepointCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CodepointCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        CodepointCursor {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// `byte` must fall on a char boundary.
    pub(crate) fn offset(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }

    pub(crate) fn range(&mut self, bytes: std::ops::Range<usize>) -> Range {
        let start = self.offset(bytes.start);
        let stop = self.offset(bytes.end);
        Range::new(start, stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_match_bytes() {
        let mut cursor = CodepointCursor::new("hello world");
        assert_eq!(cursor.range(6..11), Range::new(6, 11));
    }

    #[test]
    fn test_multibyte_offsets() {
        let text = "日本 @user";
        let at = text.find('@').unwrap();
        let mut cursor = CodepointCursor::new(text);
        assert_eq!(cursor.range(at..text.len()), Range::new(3, 8));
    }

    #[test]
    fn test_cursor_rewinds() {
        let text = "ééé";
        let mut cursor = CodepointCursor::new(text);
        assert_eq!(cursor.offset(6), 3);
        assert_eq!(cursor.offset(2), 1);
    }
}
