use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

use super::books::Book;

pub type RequestId = u64;

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One of the five catalog operations.
///
/// The catalog surface is closed, so requests are a tagged enum rather than
/// a free-form method name. The tag doubles as the wire operation name:
///
/// ```text
/// {"op": "get", "id": 123}
/// {"op": "list"}
/// {"op": "insert", "id": 7, "title": "Dune", "author": "Herbert"}
/// {"op": "delete", "id": 123}
/// {"op": "watch"}
/// ```
///
/// `watch` is the only server-streaming operation; the other four are unary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Get { id: i32 },
    List,
    Insert(Book),
    Delete { id: i32 },
    Watch,
}

impl Operation {
    /// Wire name of the operation, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Get { .. } => "get",
            Operation::List => "list",
            Operation::Insert(_) => "insert",
            Operation::Delete { .. } => "delete",
            Operation::Watch => "watch",
        }
    }

    /// Whether the server answers with a stream of events instead of a
    /// single response frame.
    pub fn is_streaming(&self) -> bool {
        matches!(self, Operation::Watch)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Request {
    pub id: RequestId,
    pub op: Operation,
    pub timeout_ms: Option<u64>,
}

impl Request {
    pub fn new(op: Operation) -> Self {
        Request {
            id: generate_request_id(),
            op,
            timeout_ms: None,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

fn generate_request_id() -> RequestId {
    // Try to use system time as the base
    let timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    // Always increment the counter to ensure uniqueness
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

    // Combine timestamp and counter to ensure uniqueness
    // Use the lower 32 bits for counter and upper 32 bits for timestamp
    (timestamp & 0xFFFFFFFF00000000) | (counter & 0xFFFFFFFF)
}
