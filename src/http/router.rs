use crate::files::FileResolver;
use crate::http::mime::mime_type;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};

/// Produces the single response for a parsed request.
///
/// Order of checks: method, root page, traversal, existence, read.
pub async fn route(req: &Request, files: &FileResolver) -> Response {
    if req.method != Method::GET {
        return Response::error(StatusCode::NotImplemented);
    }

    if req.path() == "/" {
        return Response::welcome();
    }

    let path = match files.resolve(req.path()).await {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!(path = %req.path, error = %e, "request path rejected");
            return Response::error(e.status());
        }
    };

    match files.load(&path).await {
        Ok(content) => Response::ok(mime_type(req.path()), content.bytes),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read file");
            Response::error(e.status())
        }
    }
}
