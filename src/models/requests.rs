//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies and the input
//! checks applied before anything reaches the cache engine.

use serde::Deserialize;

use crate::cache::MAX_KEY_LENGTH;

// == Input Validation ==
/// Characters allowed in keys and plain values: `[a-zA-Z0-9-_]`.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Checks a key. Returns an error message if invalid, None if valid.
pub fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} characters",
            MAX_KEY_LENGTH
        ));
    }
    if !key.chars().all(is_token_char) {
        return Some("Key can only contain characters from the set [a-zA-Z0-9-_]".to_string());
    }
    None
}

/// Checks a plain value.
pub fn validate_value(value: &str) -> Option<String> {
    if value.is_empty() || !value.chars().all(is_token_char) {
        return Some(
            "Value must be non-empty and only contain characters from the set [a-zA-Z0-9-_]"
                .to_string(),
        );
    }
    None
}

/// Checks a sorted-set member.
///
/// Members may not contain `-` or `.`, the characters used by the sorted-set
/// encoding.
pub fn validate_member(member: &str) -> Option<String> {
    if member.is_empty() || !member.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some(
            "Member must be non-empty and only contain characters from the set [a-zA-Z0-9_]"
                .to_string(),
        );
    }
    None
}

/// Request body for the SET operation (PUT /set)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
/// - `ttl`: Optional TTL in seconds (uses default if not specified). Negative
///   values are accepted and store an entry that has already expired.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<i64>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key).or_else(|| validate_value(&self.value))
    }
}

/// Request body for the sorted-set append (POST /zadd)
#[derive(Debug, Clone, Deserialize)]
pub struct SortedSetRequest {
    /// The cache key holding the set
    pub key: String,
    /// Integer score stored alongside the member
    pub score: i64,
    /// Member name
    pub member: String,
}

impl SortedSetRequest {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key).or_else(|| validate_member(&self.member))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_request_deserialize() {
        let json = r#"{"key": "test", "value": "hello"}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, "hello");
        assert!(req.ttl.is_none());
    }

    #[test]
    fn test_set_request_with_ttl() {
        let json = r#"{"key": "test", "value": "hello", "ttl": 60}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ttl, Some(60));
    }

    #[test]
    fn test_set_request_with_negative_ttl() {
        let json = r#"{"key": "test", "value": "hello", "ttl": -30}"#;
        let req: SetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ttl, Some(-30));
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_empty_key() {
        let req = SetRequest {
            key: "".to_string(),
            value: "test".to_string(),
            ttl: None,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = SetRequest {
            key: "valid-key_1".to_string(),
            value: "some-value_2".to_string(),
            ttl: Some(60),
        };
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_rejects_foreign_characters() {
        assert!(validate_key("has space").is_some());
        assert!(validate_key("dot.key").is_some());
        assert!(validate_value("a.b").is_some());
        assert!(validate_value("").is_some());
    }

    #[test]
    fn test_validate_key_length() {
        assert!(validate_key(&"k".repeat(MAX_KEY_LENGTH)).is_none());
        assert!(validate_key(&"k".repeat(MAX_KEY_LENGTH + 1)).is_some());
    }

    #[test]
    fn test_sorted_set_request() {
        let json = r#"{"key": "board", "score": -4, "member": "alice"}"#;
        let req: SortedSetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.score, -4);
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_member_rejects_separators() {
        assert!(validate_member("al-ice").is_some());
        assert!(validate_member("al.ice").is_some());
        assert!(validate_member("al_ice").is_none());
    }
}
