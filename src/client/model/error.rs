use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure of a REST call as seen by the views.
///
/// Transport and decoding failures use status 500; backend errors carry the
/// HTTP status and the message from the error body.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
        }
    }

    /// Builds the error for a non-2xx response from its raw body.
    pub fn from_body(status: u64, body: &str) -> Self {
        Self {
            status,
            message: error_message(body),
        }
    }
}

/// Message of an error body: the `error` (or `message`) field of a JSON body,
/// otherwise the body text itself.
pub fn error_message(body: &str) -> String {
    if let Ok(error_dto) = serde_json::from_str::<ErrorDto>(body) {
        return error_dto.error;
    }

    match body.trim() {
        "" => "Unknown error".to_string(),
        text => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_error_field_of_json_body() {
        assert_eq!(error_message(r#"{"error":"Role not found"}"#), "Role not found");
    }

    #[test]
    fn reads_message_field_of_json_body() {
        assert_eq!(
            error_message(r#"{"message":"Email already taken","code":409}"#),
            "Email already taken"
        );
    }

    #[test]
    fn falls_back_to_plain_body_text() {
        let error = ApiError::from_body(502, "  Bad Gateway\n");
        assert_eq!(error.status, 502);
        assert_eq!(error.message, "Bad Gateway");

        assert_eq!(
            error_message("<html><body>Forbidden</body></html>"),
            "<html><body>Forbidden</body></html>"
        );
    }

    #[test]
    fn empty_body_is_unknown_error() {
        assert_eq!(error_message(""), "Unknown error");
    }
}
