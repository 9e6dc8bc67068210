//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, no
//! chunked bodies, no keep-alive.
//!
//! # Architecture
//!
//! - **`connection`**: Drives one connection through parse, route, write
//! - **`parser`**: Reads a request line, headers and optional body from a stream
//! - **`request`**: HTTP request representation
//! - **`response`**: Status line, response value and builder
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`encoding`**: gzip negotiation via `Accept-Encoding`
//! - **`error`**: Errors that abort a connection
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Parse request line, headers, body
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and run the handler
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │
//!               ▼
//!            Closed
//! ```
//!
//! Any error short-circuits to `Closed` with nothing written.

pub mod connection;
pub mod encoding;
pub mod error;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
