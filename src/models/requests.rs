//! Request DTOs for the answer cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Maximum allowed question length in bytes
pub const MAX_QUESTION_LENGTH: usize = 512;

/// Request body for the ASK operation (POST /ask)
///
/// # Fields
/// - `question`: The question to resolve; its trimmed form is the cache key
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    /// The question to resolve
    pub question: String,
}

impl AskRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.question.trim().is_empty() {
            return Some("Question cannot be empty".to_string());
        }
        if self.question.len() > MAX_QUESTION_LENGTH {
            return Some(format!(
                "Question exceeds maximum length of {} bytes",
                MAX_QUESTION_LENGTH
            ));
        }
        None
    }

    /// The cache key: the question with surrounding whitespace stripped,
    /// so retried and hand-typed variants of the same question coalesce.
    pub fn key(&self) -> &str {
        self.question.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_request_deserialize() {
        let json = r#"{"question": "what is rust"}"#;
        let req: AskRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.question, "what is rust");
    }

    #[test]
    fn test_validate_empty_question() {
        let req = AskRequest {
            question: "   ".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_too_long() {
        let req = AskRequest {
            question: "x".repeat(MAX_QUESTION_LENGTH + 1),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = AskRequest {
            question: "what is rust".to_string(),
        };
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_key_trims_whitespace() {
        let req = AskRequest {
            question: "  what is rust \n".to_string(),
        };
        assert_eq!(req.key(), "what is rust");
    }
}
