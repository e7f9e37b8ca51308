use std::net::ToSocketAddrs;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::protocol::error::{BookshelfError, Result};
use crate::protocol::{Request, Response, StreamEvent};
use crate::transport::codec::JsonCodec;

/// Dial timeout for new connections (5 seconds)
const DIAL_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum accepted frame size (100 MB)
const MAX_MESSAGE_SIZE: usize = 100 * 1024 * 1024;

/// Async TCP transport for the catalog protocol.
///
/// # Wire Protocol
///
/// Messages are sent with a 4-byte length prefix (big-endian u32) followed
/// by the JSON-encoded data:
///
/// ```text
/// [4-byte length] [JSON data]
/// ```
///
/// A unary exchange is one request frame out, one response frame back. A
/// watch exchange is one request frame out, then [`StreamEvent`] frames in
/// until an `End` or `Error` event.
pub struct TcpTransport;

impl TcpTransport {
    /// Connects to a remote endpoint with a bounded dial timeout.
    ///
    /// The address may resolve to multiple candidates; each is tried in
    /// order with [`DIAL_TIMEOUT`] applied per attempt.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The address cannot be resolved
    /// - Every resolved address refuses or times out
    pub async fn connect(addr: &str) -> Result<TcpStream> {
        let socket_addrs = addr
            .to_socket_addrs()
            .map_err(|e| BookshelfError::Connection(format!("Invalid address '{}': {}", addr, e)))?;

        let mut last_err = None;
        for socket_addr in socket_addrs {
            match tokio::time::timeout(DIAL_TIMEOUT, TcpStream::connect(&socket_addr)).await {
                Ok(Ok(stream)) => return Ok(stream),
                Ok(Err(e)) => {
                    last_err = Some(e.to_string());
                }
                Err(_) => {
                    last_err = Some(format!(
                        "dial timed out after {}ms",
                        DIAL_TIMEOUT.as_millis()
                    ));
                }
            }
        }

        Err(BookshelfError::Connection(format!(
            "Failed to connect to {}: {}",
            addr,
            last_err.unwrap_or_else(|| "Unknown error".to_string())
        )))
    }

    /// Sends a request and waits for its response.
    ///
    /// One framed round-trip; combines [`Self::send_message`] and
    /// [`Self::receive_message`] with JSON encoding/decoding.
    pub async fn send_request(stream: &mut TcpStream, request: &Request) -> Result<Response> {
        let encoded = JsonCodec::encode_request(request)?;

        Self::send_message(stream, &encoded).await?;

        let response_data = Self::receive_message(stream).await?;
        JsonCodec::decode_response(&response_data)
    }

    /// Receives one step of a watch stream.
    pub async fn receive_event(stream: &mut TcpStream) -> Result<StreamEvent> {
        let data = Self::receive_message(stream).await?;
        JsonCodec::decode_event(&data)
    }

    /// Sends a message with length prefix.
    ///
    /// Wire format: `[4-byte length as u32 big-endian] + [data]`
    pub async fn send_message(stream: &mut TcpStream, data: &[u8]) -> Result<()> {
        let len = data.len() as u32;

        stream
            .write_all(&len.to_be_bytes())
            .await
            .map_err(|e| Self::map_io_error(e, "writing length prefix"))?;

        stream
            .write_all(data)
            .await
            .map_err(|e| Self::map_io_error(e, "writing data"))?;

        stream
            .flush()
            .await
            .map_err(|e| Self::map_io_error(e, "flushing stream"))?;

        Ok(())
    }

    /// Receives a message with length prefix.
    ///
    /// Wire format: `[4-byte length as u32 big-endian] + [data]`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Reading the length prefix fails
    /// - Message exceeds [`MAX_MESSAGE_SIZE`]
    /// - Reading the data fails
    pub async fn receive_message(stream: &mut TcpStream) -> Result<Vec<u8>> {
        let mut len_buf = [0u8; 4];
        stream
            .read_exact(&mut len_buf)
            .await
            .map_err(|e| Self::map_io_error(e, "reading length prefix"))?;

        let len = u32::from_be_bytes(len_buf) as usize;

        // Validate length to prevent allocation of excessively large buffers
        if len > MAX_MESSAGE_SIZE {
            return Err(BookshelfError::InvalidResponse(format!(
                "Message too large: {} bytes (max {} bytes)",
                len, MAX_MESSAGE_SIZE
            )));
        }

        let mut buf = vec![0u8; len];
        stream
            .read_exact(&mut buf)
            .await
            .map_err(|e| Self::map_io_error(e, "reading data"))?;

        Ok(buf)
    }

    /// Map IO errors to appropriate BookshelfError variants
    ///
    /// - Timeouts/would block -> `Timeout`
    /// - Connection loss, including mid-frame EOF -> `Connection`
    /// - Other IO errors -> `Io`
    ///
    /// A clean end-of-stream is signaled by a `StreamEvent::End` frame, so
    /// an EOF while reading a frame is always a lost connection.
    fn map_io_error(err: std::io::Error, context: &str) -> BookshelfError {
        match err.kind() {
            std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock => {
                BookshelfError::Timeout(DIAL_TIMEOUT.as_millis() as u64)
            }
            std::io::ErrorKind::ConnectionReset
            | std::io::ErrorKind::ConnectionAborted
            | std::io::ErrorKind::NotConnected
            | std::io::ErrorKind::UnexpectedEof => {
                BookshelfError::Connection(format!("{}: Connection lost", context))
            }
            _ => BookshelfError::Io(err),
        }
    }
}
