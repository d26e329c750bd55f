use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{ "status": ..., "message": ... }` wrapper every endpoint returns.
///
/// Both fields are optional on the wire so that a body missing either one
/// still decodes and fails the status check instead of the JSON parse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<Value>,
    /// HTTP-like code the API adds to error envelopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
}

impl Envelope {
    pub const SUCCESS: &'static str = "success";
    const FALLBACK_ERROR: &'static str = "unknown error";

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(Self::SUCCESS)
    }

    /// Text to report when the envelope is not a success.
    pub fn error_message(&self) -> String {
        match &self.message {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => Self::FALLBACK_ERROR.to_string(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_requires_exact_status() {
        let env: Envelope = serde_json::from_str(r#"{"status":"Success","message":"x"}"#).unwrap();
        assert!(!env.is_success());
        let env: Envelope = serde_json::from_str(r#"{"status":"success","message":"x"}"#).unwrap();
        assert!(env.is_success());
    }

    #[test]
    fn missing_fields_decode() {
        let env: Envelope = serde_json::from_str("{}").unwrap();
        assert!(!env.is_success());
        assert_eq!(env.error_message(), "unknown error");
    }

    #[test]
    fn non_string_message_is_rendered_as_json() {
        let env: Envelope = serde_json::from_str(r#"{"status":"error","message":["a"]}"#).unwrap();
        assert_eq!(env.error_message(), r#"["a"]"#);
    }
}
