//! Bookshelf Common Types and Transport
//!
//! This crate provides the protocol definitions and TCP transport layer for
//! the bookshelf catalog client.
//!
//! # Overview
//!
//! Bookshelf is a command-line client for a book catalog service. This crate
//! contains the pieces shared between the typed client and the CLI:
//!
//! - **Protocol Layer**: request/response envelopes, the catalog operations,
//!   stream events, record types, and error handling
//! - **Transport Layer**: TCP-based communication with JSON serialization
//!
//! # Wire Protocol
//!
//! - **Transport**: one TCP connection per command invocation
//! - **Serialization**: JSON
//! - **Message Format**: `[4-byte length prefix as u32 big-endian] + [JSON data]`
//! - **Max Message Size**: 100 MB (prevents memory exhaustion)
//!
//! A unary call is one request frame followed by one response frame. The
//! streaming `watch` call is one request frame followed by a sequence of
//! [`protocol::StreamEvent`] frames terminated by an `End` or `Error` event.
//!
//! # Example
//!
//! ```
//! use bookshelf_common::{Operation, Request, Response};
//! use serde_json::json;
//!
//! // Create a request
//! let request = Request::new(Operation::Get { id: 123 }).with_timeout(5000);
//!
//! // Process and create response
//! let response = Response::success(request.id, json!({"id": 123}));
//! ```

pub mod protocol;
pub mod transport;

pub use protocol::*;
