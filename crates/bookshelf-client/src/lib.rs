//! Typed client for the bookshelf catalog service.
//!
//! [`BookshelfClient::connect`] dials the service with a bounded timeout and
//! yields a handle exposing the five catalog operations. The four unary
//! operations perform exactly one framed round-trip each; [`watch`] converts
//! the connection into a [`WatchStream`] that surfaces records one at a time
//! until the server signals end-of-stream or an error.
//!
//! The connection is owned by the client (or, after `watch`, by the stream
//! handle) and closed when that value is dropped, including on every early
//! error return.
//!
//! [`watch`]: BookshelfClient::watch

pub mod client;
pub mod context;
pub mod watch;

pub use client::BookshelfClient;
pub use context::CallContext;
pub use watch::WatchStream;
