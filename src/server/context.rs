use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::Config;
use crate::files::FileResolver;

/// Everything a connection task needs, shared read-only across tasks.
#[derive(Debug)]
pub struct ServerContext {
    pub config: Config,
    pub files: FileResolver,
    /// Caps the number of connections being served at once.
    pub limiter: Arc<Semaphore>,
}

impl ServerContext {
    pub fn new(config: Config) -> Self {
        let files = FileResolver::new(config.root.clone(), config.max_file_size);
        let limiter = Arc::new(Semaphore::new(config.max_connections.max(1)));
        Self {
            config,
            files,
            limiter,
        }
    }
}
