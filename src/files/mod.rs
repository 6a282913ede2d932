//! Filesystem side of request handling
//!
//! Turns request paths into file contents below the server root, enforcing
//! the traversal rule and the in-memory size cap.

pub mod resolver;

pub use resolver::{FileContent, FileResolver, ResolveError};
