use serde::Deserialize;

/// Standard backend error envelope. Only `message` is consumed by the
/// client (the stores' message-preference order); the other fields are
/// parsed leniently so a bare `{"message": "..."}` body still works.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_envelope_parses() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"status":"error","code":"NOT_FOUND","message":"Order not found"}"#,
        )
        .unwrap();
        assert_eq!(body.message.as_deref(), Some("Order not found"));
    }

    #[test]
    fn bare_message_parses() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("nope"));
        assert!(body.code.is_none());
    }

    #[test]
    fn empty_object_has_no_message() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
    }
}
