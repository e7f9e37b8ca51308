//! Response envelope and stream events.

use serde::{Deserialize, Serialize};

use super::books::Book;
use super::error::{BookshelfError, Result};
use super::RequestId;

/// A response to a unary catalog request.
///
/// # Fields
///
/// - `id`: the request ID this response corresponds to
/// - `result`: the result value (present on success)
/// - `error`: error message (present on failure)
/// - `success`: whether the request succeeded
///
/// The result is carried as a JSON value; the typed client decodes it into
/// the record type the operation promises ([`Book`], `BookList`, `Empty`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub id: RequestId,
    pub result: Option<serde_json::Value>,
    pub error: Option<String>,
    pub success: bool,
}

impl Response {
    /// Creates a successful response.
    pub fn success(id: RequestId, result: serde_json::Value) -> Self {
        Response {
            id,
            result: Some(result),
            error: None,
            success: true,
        }
    }

    /// Creates an error response.
    pub fn error(id: RequestId, error: impl Into<String>) -> Self {
        Response {
            id,
            result: None,
            error: Some(error.into()),
            success: false,
        }
    }

    /// Collapses the envelope into the result value.
    ///
    /// A success envelope without a result is malformed and reported as
    /// [`BookshelfError::InvalidResponse`]; a failure envelope surfaces as
    /// [`BookshelfError::Remote`] with the server's message.
    pub fn into_result(self) -> Result<serde_json::Value> {
        if self.success {
            self.result.ok_or_else(|| {
                BookshelfError::InvalidResponse("missing result in success response".to_string())
            })
        } else {
            Err(BookshelfError::Remote(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

/// One step of the `watch` stream.
///
/// Each frame received after a watch request decodes to exactly one of:
///
/// ```text
/// {"event": "record", "book": {...}}   one catalog entry, stream continues
/// {"event": "end"}                     clean end-of-stream
/// {"event": "error", "message": "..."} stream failed
/// ```
///
/// `End` and `Error` are both terminal; no frames follow either.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StreamEvent {
    Record { book: Book },
    End,
    Error { message: String },
}
