use simple_http_server::http::mime::{DEFAULT_MIME, MIME_TABLE, mime_type};

#[test]
fn test_mime_known_extensions() {
    let cases = [
        ("index.html", "text/html"),
        ("index.htm", "text/html"),
        ("style.css", "text/css"),
        ("app.js", "application/javascript"),
        ("data.json", "application/json"),
        ("logo.png", "image/png"),
        ("photo.jpg", "image/jpeg"),
        ("photo.jpeg", "image/jpeg"),
        ("anim.gif", "image/gif"),
        ("paper.pdf", "application/pdf"),
    ];

    for (path, expected) in cases {
        assert_eq!(mime_type(path), expected, "path {}", path);
    }
}

#[test]
fn test_mime_no_extension() {
    assert_eq!(mime_type("Makefile"), DEFAULT_MIME);
    assert_eq!(mime_type("/docs/README"), "text/plain");
}

#[test]
fn test_mime_unknown_extension() {
    assert_eq!(mime_type("archive.tar.gz"), "text/plain");
    assert_eq!(mime_type("notes.xyz"), "text/plain");
}

#[test]
fn test_mime_uses_last_dot() {
    assert_eq!(mime_type("bundle.min.js"), "application/javascript");
    assert_eq!(mime_type("site.v2/index"), "text/plain");
    assert_eq!(mime_type("trailing."), "text/plain");
}

#[test]
fn test_mime_is_case_sensitive() {
    assert_eq!(mime_type("INDEX.HTML"), "text/plain");
    assert_eq!(mime_type("photo.JPG"), "text/plain");
}

#[test]
fn test_mime_table_has_ten_entries() {
    assert_eq!(MIME_TABLE.len(), 10);
}
