use simple_http_server::http::parser::{ParseError, find_headers_end, parse_http_request};
use simple_http_server::http::request::{Method, PATH_MAX, VERSION_MAX};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path(), "/index.html");
    assert_eq!(parsed.version(), "HTTP/1.1");
}

#[test]
fn test_parse_keeps_raw_headers_unparsed() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(&parsed.headers[..], b"BrokenHeader\r\n\r\n");
}

#[test]
fn test_parse_unknown_method_is_not_an_error() {
    let parsed = parse_http_request(b"BREW /pot HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, Method::Other("BREW".to_string()));
}

#[test]
fn test_parse_post_request() {
    let parsed = parse_http_request(b"POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello").unwrap();

    assert_eq!(parsed.method, Method::POST);
}

#[test]
fn test_parse_empty_buffer() {
    assert_eq!(parse_http_request(b"").unwrap_err(), ParseError::Empty);
    assert_eq!(parse_http_request(b"  \r\n\r\n").unwrap_err(), ParseError::Empty);
}

#[test]
fn test_parse_single_token() {
    assert_eq!(
        parse_http_request(b"GET").unwrap_err(),
        ParseError::InvalidRequestLine
    );
}

#[test]
fn test_parse_two_tokens() {
    assert_eq!(
        parse_http_request(b"GET /\r\n\r\n").unwrap_err(),
        ParseError::InvalidRequestLine
    );
}

#[test]
fn test_parse_tokens_are_taken_from_first_line_only() {
    let result = parse_http_request(b"GET\r\n/ HTTP/1.1\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequestLine)));
}

#[test]
fn test_parse_ignores_extra_tokens() {
    let parsed = parse_http_request(b"GET /a.txt HTTP/1.1 trailing junk\r\n\r\n").unwrap();

    assert_eq!(parsed.path(), "/a.txt");
    assert_eq!(parsed.version(), "HTTP/1.1");
}

#[test]
fn test_parse_without_trailing_newline() {
    let parsed = parse_http_request(b"GET /x HTTP/1.0").unwrap();

    assert_eq!(parsed.path(), "/x");
    assert!(parsed.headers.is_empty());
}

#[test]
fn test_parse_bare_lf_line_endings() {
    let parsed = parse_http_request(b"GET /lf HTTP/1.0\nHost: a\n\n").unwrap();

    assert_eq!(parsed.path(), "/lf");
    assert_eq!(parsed.version(), "HTTP/1.0");
}

#[test]
fn test_parse_truncates_long_tokens() {
    let long_path = format!("/{}", "a".repeat(1000));
    let raw = format!("GETTINGLONGERTHANFIFTEEN {} HTTP/1.1-and-then-some\r\n\r\n", long_path);
    let parsed = parse_http_request(raw.as_bytes()).unwrap();

    assert_eq!(parsed.method, Method::Other("GETTINGLONGERTH".to_string()));
    assert_eq!(parsed.path().len(), PATH_MAX);
    assert_eq!(parsed.path(), &long_path[..PATH_MAX]);
    assert!(parsed.path.was_truncated());
    assert_eq!(parsed.version().len(), VERSION_MAX);
    assert_eq!(parsed.version(), "HTTP/1.1-and-th");
}

#[test]
fn test_find_headers_end() {
    assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\nHost: a\r\n\r\nrest"), Some(27));
    assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\nHost: a\r\n"), None);
    assert_eq!(find_headers_end(b""), None);
}
