use tokio::net::TcpStream;

use bookshelf_common::protocol::error::{BookshelfError, Result};
use bookshelf_common::protocol::{Book, StreamEvent};
use bookshelf_common::transport::TcpTransport;

/// Handle to an open watch stream.
///
/// Obtained from `BookshelfClient::watch`; owns the connection for the rest
/// of its life. The stream is unbounded: each [`next`] call blocks until the
/// server sends the next frame, so records are surfaced one at a time and
/// never buffered ahead.
///
/// State machine: `OPEN -> (RECEIVE)* -> CLOSED`, where `CLOSED` is reached
/// through a clean `End` event (`Ok(None)`), a server-reported `Error`
/// event, or a transport failure. Dropping the handle closes the
/// connection, which is also how a pending receive gets cancelled.
///
/// [`next`]: WatchStream::next
pub struct WatchStream {
    stream: TcpStream,
    closed: bool,
}

impl WatchStream {
    pub(crate) fn new(stream: TcpStream) -> Self {
        WatchStream {
            stream,
            closed: false,
        }
    }

    /// Receives the next record.
    ///
    /// - `Ok(Some(book))`: one record; the stream continues
    /// - `Ok(None)`: clean end-of-stream
    /// - `Err(_)`: the server reported an error, or the transport failed
    ///
    /// After `Ok(None)` or an error the stream is closed and every further
    /// call returns `Ok(None)`.
    pub async fn next(&mut self) -> Result<Option<Book>> {
        if self.closed {
            return Ok(None);
        }

        match TcpTransport::receive_event(&mut self.stream).await {
            Ok(StreamEvent::Record { book }) => Ok(Some(book)),
            Ok(StreamEvent::End) => {
                self.closed = true;
                tracing::debug!("watch stream ended cleanly");
                Ok(None)
            }
            Ok(StreamEvent::Error { message }) => {
                self.closed = true;
                Err(BookshelfError::Remote(message))
            }
            Err(e) => {
                self.closed = true;
                Err(e)
            }
        }
    }
}
