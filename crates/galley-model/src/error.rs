//! Error types for payload decoding

/// Errors raised while decoding or encoding payloads
///
/// Most model constructors are lenient and degrade to empty shapes
/// instead of failing; this surfaces only when the payload is not JSON
/// at all, or when re-encoding fails.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Payload was not valid JSON, or did not match the top-level shape
    #[error("invalid payload json: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_message_carries_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err = ModelError::from(cause);
        assert!(err.to_string().starts_with("invalid payload json:"));
    }
}
