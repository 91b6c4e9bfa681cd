use std::fmt;
use thiserror::Error;

/// The client operation a failure belongs to.
///
/// Rendered into every API-level error message so the notification layer
/// can tell a failed headlines load from a failed search.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Operation {
    /// Top headlines by country/category.
    TopHeadlines,
    /// Free-text article search.
    Search,
}

impl Operation {
    /// The endpoint path for this operation, relative to the API endpoint.
    pub fn path(self) -> &'static str {
        match self {
            Operation::TopHeadlines => "top-headlines",
            Operation::Search => "everything",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// An error type for all errors which this library can produce.
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a non-success status and a JSON body carrying
    /// a `message` field; the message is surfaced verbatim.
    #[error("Error in {operation} request: {message}")]
    Api {
        /// Operation the failed request belonged to.
        operation: Operation,
        /// The API's own error message.
        message: String,
    },

    /// Non-success status without a structured body.
    #[error("Error code: {code} {text} in {operation} request")]
    Status {
        /// Operation the failed request belonged to.
        operation: Operation,
        /// Numeric HTTP status code.
        code: u16,
        /// Status text, or a fallback phrase when the response carried none.
        text: String,
    },

    /// The request never completed (connect, DNS, or body-read failure).
    #[error("Http: {0}")]
    Http(#[from] reqwest::Error),

    /// A success-status body that is not valid JSON, or does not match the
    /// response model.
    #[error("Json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
