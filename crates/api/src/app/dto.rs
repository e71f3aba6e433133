use serde::{Deserialize, Serialize};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AddEntryForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

impl SearchParams {
    /// The trimmed query, or `None` when absent/blank.
    pub fn term(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// JSON body of the delete endpoint: `status` is 1 on success, 0 otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub status: u8,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: 1,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_term_ignores_blank_queries() {
        assert_eq!(SearchParams { query: None }.term(), None);
        assert_eq!(SearchParams { query: Some("  ".into()) }.term(), None);
        assert_eq!(SearchParams { query: Some(" hello ".into()) }.term(), Some("hello"));
    }

    #[test]
    fn status_response_serializes_flat() {
        let body = serde_json::to_value(StatusResponse::failed("Please log in.")).unwrap();
        assert_eq!(body, serde_json::json!({"status": 0, "message": "Please log in."}));
    }
}
