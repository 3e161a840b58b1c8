use thiserror::Error;

/// What went wrong with a generation attempt. None of these are fatal:
/// every variant ends the current submission, gets surfaced in the status
/// line and a toast, and the UI returns to idle.
#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    /// Local input failed validation; nothing was sent over the network.
    #[error("{0}")]
    Validation(String),

    /// The service answered with a non-2xx status. `detail` is the
    /// structured message from the error body when one was present,
    /// otherwise "HTTP <status>".
    #[error("{detail}")]
    Http { status: u16, detail: String },

    /// The response arrived but its body was not the expected JSON.
    #[error("invalid response from service: {0}")]
    Parse(String),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
}

impl GenerateError {
    pub fn http(status: u16, detail: Option<String>) -> Self {
        let detail = detail.unwrap_or_else(|| format!("HTTP {status}"));
        GenerateError::Http { status, detail }
    }

    pub fn accounts_required() -> Self {
        GenerateError::Validation("accounts_required".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_uses_detail_when_present() {
        let err = GenerateError::http(500, Some("quota exceeded".to_string()));
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn test_http_error_falls_back_to_status() {
        let err = GenerateError::http(503, None);
        assert_eq!(err.to_string(), "HTTP 503");
    }
}
