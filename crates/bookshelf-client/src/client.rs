use serde::de::DeserializeOwned;
use tokio::net::TcpStream;

use bookshelf_common::protocol::error::{BookshelfError, Result};
use bookshelf_common::protocol::{Book, BookList, Empty, Operation, Request};
use bookshelf_common::transport::{JsonCodec, TcpTransport};

use crate::context::CallContext;
use crate::watch::WatchStream;

/// Typed handle to the bookshelf catalog service.
///
/// Owns one live connection, opened by [`connect`] and closed on drop. Each
/// command invocation creates its own client and performs exactly one
/// logical RPC over it; handles are never shared or reused.
///
/// [`connect`]: BookshelfClient::connect
#[derive(Debug)]
pub struct BookshelfClient {
    addr: String,
    stream: TcpStream,
}

impl BookshelfClient {
    /// Dials the service and returns a connected handle.
    ///
    /// The dial is bounded by the transport's 5-second timeout; refusal or
    /// expiry is `BookshelfError::Connection`.
    pub async fn connect(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        let stream = TcpTransport::connect(&addr).await?;
        tracing::debug!(%addr, "connected to catalog service");

        Ok(Self { addr, stream })
    }

    /// Address this client dialed.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Retrieves the book with the given id.
    pub async fn get(&mut self, ctx: &CallContext, id: i32) -> Result<Book> {
        self.call(ctx, Operation::Get { id }).await
    }

    /// Lists the full catalog.
    pub async fn list(&mut self, ctx: &CallContext) -> Result<BookList> {
        self.call(ctx, Operation::List).await
    }

    /// Inserts a book; the service echoes the created record.
    pub async fn insert(&mut self, ctx: &CallContext, book: Book) -> Result<Book> {
        self.call(ctx, Operation::Insert(book)).await
    }

    /// Deletes the book with the given id, returning the acknowledgment.
    pub async fn delete(&mut self, ctx: &CallContext, id: i32) -> Result<Empty> {
        self.call(ctx, Operation::Delete { id }).await
    }

    /// Starts the server-streaming watch call.
    ///
    /// Consumes the client: after the watch request is on the wire the
    /// connection belongs to the returned [`WatchStream`], which yields
    /// inserted books until end-of-stream or an error. The context deadline
    /// bounds the call setup only, not the receives that follow.
    pub async fn watch(mut self, ctx: &CallContext) -> Result<WatchStream> {
        let request = Self::build_request(ctx, Operation::Watch);
        let encoded = JsonCodec::encode_request(&request)?;

        let send = TcpTransport::send_message(&mut self.stream, &encoded);
        match ctx.timeout() {
            Some(limit) => tokio::time::timeout(limit, send)
                .await
                .map_err(|_| BookshelfError::Timeout(limit.as_millis() as u64))??,
            None => send.await?,
        }

        tracing::debug!(request_id = request.id, "watch stream opened");
        Ok(WatchStream::new(self.stream))
    }

    /// One unary round-trip: build the envelope, send it, unwrap the
    /// response, decode the typed record.
    async fn call<T: DeserializeOwned>(&mut self, ctx: &CallContext, op: Operation) -> Result<T> {
        let op_name = op.name();
        let request = Self::build_request(ctx, op);
        tracing::debug!(request_id = request.id, op = op_name, "issuing unary call");

        let roundtrip = TcpTransport::send_request(&mut self.stream, &request);
        let response = match ctx.timeout() {
            Some(limit) => tokio::time::timeout(limit, roundtrip)
                .await
                .map_err(|_| BookshelfError::Timeout(limit.as_millis() as u64))??,
            None => roundtrip.await?,
        };

        let value = response.into_result()?;
        serde_json::from_value(value).map_err(|e| {
            BookshelfError::InvalidResponse(format!("malformed {} result: {}", op_name, e))
        })
    }

    fn build_request(ctx: &CallContext, op: Operation) -> Request {
        let request = Request::new(op);
        match ctx.timeout_ms() {
            Some(ms) => request.with_timeout(ms),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_refused_is_connection_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        let err = BookshelfClient::connect(&addr).await.unwrap_err();
        assert!(matches!(err, BookshelfError::Connection(_)));
    }

    #[test]
    fn test_build_request_stamps_context_deadline() {
        let ctx = CallContext::with_timeout(std::time::Duration::from_millis(250));
        let request = BookshelfClient::build_request(&ctx, Operation::List);
        assert_eq!(request.timeout_ms, Some(250));

        let request = BookshelfClient::build_request(&CallContext::new(), Operation::List);
        assert_eq!(request.timeout_ms, None);
    }
}
