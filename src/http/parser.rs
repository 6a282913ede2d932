use bytes::Bytes;

use crate::http::request::Request;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace was received.
    Empty,
    /// The request line has fewer than three tokens.
    InvalidRequestLine,
}

/// Parses the request line at the start of `buf`.
///
/// Only the first line is looked at. It must hold three whitespace-separated
/// tokens (method, path, version); a fourth and later tokens are ignored.
/// The remaining lines are kept raw on the request and never validated.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let (line, rest) = match buf.iter().position(|&b| b == b'\n') {
        Some(pos) => (&buf[..pos], &buf[pos + 1..]),
        None => (buf, &buf[buf.len()..]),
    };

    let line = String::from_utf8_lossy(line);
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::Empty)?;
    let path = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let version = parts.next().ok_or(ParseError::InvalidRequestLine)?;

    Ok(Request::from_tokens(method, path, version).with_headers(Bytes::copy_from_slice(rest)))
}

/// Returns the offset just past the blank line ending the header block.
///
/// Accepts `\r\n\r\n` as well as a bare `\n\n` from hand-typed requests.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    let crlf = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|pos| pos + 4);
    let lf = buf
        .windows(2)
        .position(|w| w == b"\n\n")
        .map(|pos| pos + 2);

    match (crlf, lf) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
