use std::time::Duration;

/// Deadline-carrying token threaded through every remote call.
///
/// Created once per process invocation and passed by reference to each
/// operation. With no deadline set, unary calls block until the server
/// answers or the connection dies; with one set, the whole round-trip is
/// bounded and expiry surfaces as `BookshelfError::Timeout`.
///
/// A deadline never bounds individual `watch` receives: the stream is
/// open-ended, and tearing down the process is what cancels it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallContext {
    timeout: Option<Duration>,
}

impl CallContext {
    /// A context with no deadline.
    pub fn new() -> Self {
        CallContext { timeout: None }
    }

    /// A context bounding each unary round-trip by `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        CallContext {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Deadline in milliseconds, as stamped into the request envelope.
    pub fn timeout_ms(&self) -> Option<u64> {
        self.timeout.map(|t| t.as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_deadline() {
        assert!(CallContext::new().timeout().is_none());
        assert!(CallContext::default().timeout_ms().is_none());
    }

    #[test]
    fn test_timeout_ms_conversion() {
        let ctx = CallContext::with_timeout(Duration::from_secs(5));
        assert_eq!(ctx.timeout_ms(), Some(5000));
    }
}
