//! Custom error types for taskdash.

use thiserror::Error;

/// Errors that can occur while talking to the task store or driving the
/// control prompt.
#[derive(Error, Debug)]
pub enum Error {
    #[error("task store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("task store returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("control prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let err = Error::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://localhost/tasks".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "task store returned 500 Internal Server Error for http://localhost/tasks"
        );
    }
}
