//! Bookshelf Transport Layer
//!
//! TCP transport and JSON codec for catalog RPC messages.
//!
//! # Architecture
//!
//! - **[`JsonCodec`]**: encode/decode protocol messages to JSON
//! - **[`TcpTransport`]**: async TCP transport with a bounded dial timeout
//! - **Wire Format**: `[4-byte length prefix as u32 big-endian] + [JSON data]`
//!
//! All receive paths enforce a maximum message size of 100 MB to prevent
//! memory exhaustion.
//!
//! # Example
//!
//! ```no_run
//! use bookshelf_common::transport::TcpTransport;
//! use bookshelf_common::protocol::{Operation, Request};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut stream = TcpTransport::connect("127.0.0.1:50051").await?;
//!
//! let request = Request::new(Operation::Get { id: 123 });
//! let response = TcpTransport::send_request(&mut stream, &request).await?;
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod tcp;

pub use codec::JsonCodec;
pub use tcp::TcpTransport;

#[cfg(test)]
mod tests;
