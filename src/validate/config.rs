//! Validation parameters

use serde::{Deserialize, Serialize};

/// Limits applied by [`text_validate`](super::text_validate).
///
/// There is no default: every platform picks its own limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationArgs {
    /// Maximum normalized code-point count
    pub max_length: usize,
    /// Whether `""` passes
    pub can_be_empty: bool,
}

impl ValidationArgs {
    pub fn new(max_length: usize, can_be_empty: bool) -> Self {
        Self {
            max_length,
            can_be_empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let args: ValidationArgs =
            serde_json::from_str(r#"{"max_length": 280, "can_be_empty": true}"#).unwrap();
        assert_eq!(args, ValidationArgs::new(280, true));
    }

    #[test]
    fn test_missing_field_rejected() {
        assert!(serde_json::from_str::<ValidationArgs>(r#"{"max_length": 280}"#).is_err());
    }
}
