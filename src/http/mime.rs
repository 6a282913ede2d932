//! Content type lookup by file extension.

pub const DEFAULT_MIME: &str = "text/plain";

/// Extension to content type, matched literally (case-sensitive).
pub static MIME_TABLE: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("json", "application/json"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("pdf", "application/pdf"),
];

/// Returns the content type for `path`.
///
/// The extension is everything after the last `.` in the whole path, so a
/// dot in a directory name with an extensionless file below it yields an
/// unknown extension and therefore [`DEFAULT_MIME`].
///
/// # Example
///
/// ```
/// # use simple_http_server::http::mime::mime_type;
/// assert_eq!(mime_type("index.html"), "text/html");
/// assert_eq!(mime_type("README"), "text/plain");
/// ```
pub fn mime_type(path: &str) -> &'static str {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return DEFAULT_MIME;
    };

    MIME_TABLE
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_MIME)
}
