use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::io::AsyncReadExt;

use crate::http::response::StatusCode;

/// Why a request path could not be turned into file contents.
#[derive(Debug)]
pub enum ResolveError {
    /// The path contains `..`.
    Traversal,
    /// Nothing at the path, or it is not a regular file.
    NotFound,
    /// The file is larger than the configured cap.
    TooLarge { size: u64, limit: u64 },
    /// Fewer bytes came back than `stat` reported.
    ShortRead { expected: u64, actual: u64 },
    Io(io::Error),
}

impl ResolveError {
    pub fn status(&self) -> StatusCode {
        match self {
            ResolveError::Traversal => StatusCode::Forbidden,
            ResolveError::NotFound => StatusCode::NotFound,
            ResolveError::TooLarge { .. }
            | ResolveError::ShortRead { .. }
            | ResolveError::Io(_) => StatusCode::InternalServerError,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Traversal => write!(f, "path contains '..'"),
            ResolveError::NotFound => write!(f, "no regular file at path"),
            ResolveError::TooLarge { size, limit } => {
                write!(f, "file is {size} bytes, limit is {limit}")
            }
            ResolveError::ShortRead { expected, actual } => {
                write!(f, "read {actual} of {expected} bytes")
            }
            ResolveError::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<io::Error> for ResolveError {
    fn from(e: io::Error) -> Self {
        ResolveError::Io(e)
    }
}

/// A file loaded whole into memory for one response.
#[derive(Debug, Clone)]
pub struct FileContent {
    pub bytes: Bytes,
}

impl FileContent {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Maps request paths onto files below `root`.
#[derive(Debug, Clone)]
pub struct FileResolver {
    root: PathBuf,
    max_file_size: u64,
}

impl FileResolver {
    pub fn new(root: impl Into<PathBuf>, max_file_size: u64) -> Self {
        Self {
            root: root.into(),
            max_file_size,
        }
    }

    /// Normalises, checks and resolves `request_path` to a regular file.
    pub async fn resolve(&self, request_path: &str) -> Result<PathBuf, ResolveError> {
        let relative = normalize(request_path);
        check_traversal(relative)?;

        let full = self.root.join(relative);
        match tokio::fs::metadata(&full).await {
            Ok(meta) if meta.is_file() => Ok(full),
            Ok(_) => Err(ResolveError::NotFound),
            Err(e) => {
                tracing::debug!(path = %full.display(), error = %e, "stat failed");
                Err(ResolveError::NotFound)
            }
        }
    }

    /// Reads the whole file, refusing anything over the size cap.
    pub async fn load(&self, path: &Path) -> Result<FileContent, ResolveError> {
        let file = tokio::fs::File::open(path).await?;
        let expected = file.metadata().await?.len();

        if expected > self.max_file_size {
            return Err(ResolveError::TooLarge {
                size: expected,
                limit: self.max_file_size,
            });
        }

        // One byte over the cap is enough to notice a file that grew.
        let mut buf = Vec::with_capacity(expected as usize);
        file.take(self.max_file_size + 1)
            .read_to_end(&mut buf)
            .await?;

        let actual = buf.len() as u64;
        if actual != expected {
            return Err(ResolveError::ShortRead { expected, actual });
        }

        Ok(FileContent { bytes: Bytes::from(buf) })
    }
}

/// Strips exactly one leading `/`.
pub fn normalize(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Rejects any path containing the substring `..`, even inside a file name
/// such as `a..b.txt`.
pub fn check_traversal(path: &str) -> Result<(), ResolveError> {
    if path.contains("..") {
        return Err(ResolveError::Traversal);
    }
    Ok(())
}
