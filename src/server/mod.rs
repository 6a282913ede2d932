//! Listening socket and connection dispatch.

pub mod context;
pub mod listener;

pub use context::ServerContext;
pub use listener::Server;
