//! Simple HTTP Server
//!
//! Serves files from the working directory over HTTP/1.1, one request per
//! connection.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
