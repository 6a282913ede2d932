use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const LISTEN_BACKLOG: u32 = 10;
pub const MAX_REQUEST_SIZE: usize = 8 * 1024;
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
pub const MAX_CONNECTIONS: usize = 64;
pub const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Server settings.
///
/// Only the port comes from the command line. The remaining fields are fixed
/// limits, kept here so the listener and tests read them from one place.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on. `0` asks the OS for a free one (tests only).
    pub port: u16,
    /// Directory request paths are resolved against.
    pub root: PathBuf,
    pub backlog: u32,
    pub max_connections: usize,
    pub max_request_size: usize,
    pub max_file_size: u64,
    pub read_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
            backlog: LISTEN_BACKLOG,
            max_connections: MAX_CONNECTIONS,
            max_request_size: MAX_REQUEST_SIZE,
            max_file_size: MAX_FILE_SIZE,
            read_timeout: READ_TIMEOUT,
        }
    }
}

impl Config {
    /// Builds the config from the process arguments.
    pub fn load() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    /// Builds the config from an argument list that excludes the program name.
    ///
    /// The first argument, if any, is the port. Anything that is not a number
    /// in `1..=65535` falls back to [`DEFAULT_PORT`] with a warning.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let port = match args.into_iter().next() {
            Some(arg) => parse_port(arg.as_ref()).unwrap_or_else(|| {
                tracing::warn!(
                    value = arg.as_ref(),
                    default = DEFAULT_PORT,
                    "Invalid port number, using default port"
                );
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            port,
            ..Self::default()
        }
    }
}

/// Parses a listening port, rejecting `0` and anything outside `u16`.
pub fn parse_port(value: &str) -> Option<u16> {
    match value.trim().parse::<u16>() {
        Ok(0) | Err(_) => None,
        Ok(port) => Some(port),
    }
}
