//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 server side: one request per connection,
//! `GET` only, `Connection: close` on every response.
//!
//! # Architecture
//!
//! - **`connection`**: per-client state machine (read, process, write, close)
//! - **`parser`**: extracts the request line from the received bytes
//! - **`request`**: request representation and the bounded token type
//! - **`router`**: maps a request to a response using the file resolver
//! - **`response`**: status codes, fixed header set, error pages
//! - **`writer`**: serialises a response and writes it in two segments
//! - **`mime`**: content type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate until blank line, limit, EOF or timeout
//!        └──────┬──────┘
//!               │ Request line parsed      (400 / 408 / 413 go straight to Writing)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route: 501 / welcome / 403 / 404 / 500 / 200
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Headers, then body
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Closed (never reused)
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
pub mod router;
