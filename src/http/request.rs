use std::fmt;

use bytes::Bytes;

/// Longest method token kept, in bytes.
pub const METHOD_MAX: usize = 15;
/// Longest path token kept, in bytes.
pub const PATH_MAX: usize = 511;
/// Longest protocol version token kept, in bytes.
pub const VERSION_MAX: usize = 15;

/// A string holding at most `MAX` bytes.
///
/// Longer input is silently truncated to its first `MAX` bytes. If that cut
/// would split a UTF-8 character, the whole character is dropped, so the
/// stored value can be a few bytes shorter than `MAX`.
///
/// # Example
///
/// ```
/// # use simple_http_server::http::request::BoundedToken;
/// let token = BoundedToken::<4>::new("GETTER");
/// assert_eq!(token.as_str(), "GETT");
/// assert!(token.was_truncated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedToken<const MAX: usize> {
    value: String,
    truncated: bool,
}

impl<const MAX: usize> BoundedToken<MAX> {
    pub fn new(input: &str) -> Self {
        if input.len() <= MAX {
            return Self {
                value: input.to_string(),
                truncated: false,
            };
        }

        let mut end = MAX;
        while !input.is_char_boundary(end) {
            end -= 1;
        }

        Self {
            value: input[..end].to_string(),
            truncated: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether the input was longer than `MAX` and got cut.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    pub const fn capacity() -> usize {
        MAX
    }
}

impl<const MAX: usize> fmt::Display for BoundedToken<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<const MAX: usize> PartialEq<str> for BoundedToken<MAX> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<const MAX: usize> PartialEq<&str> for BoundedToken<MAX> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

/// HTTP request methods.
///
/// Only `GET` is served. Everything else, including tokens that are not a
/// known method at all, is answered with 501 Not Implemented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
    /// Any other token, kept verbatim.
    Other(String),
}

impl Method {
    /// Parses an HTTP method (case-sensitive).
    ///
    /// ```
    /// # use simple_http_server::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(s) => s,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed request line.
///
/// Everything after the first line is kept as raw bytes in `headers` and is
/// never interpreted.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: BoundedToken<PATH_MAX>,
    pub version: BoundedToken<VERSION_MAX>,
    pub headers: Bytes,
}

impl Request {
    /// Builds a request from the three request line tokens, applying the
    /// per-token length bounds.
    pub fn from_tokens(method: &str, path: &str, version: &str) -> Self {
        let method = BoundedToken::<METHOD_MAX>::new(method);
        Self {
            method: Method::parse(method.as_str()),
            path: BoundedToken::new(path),
            version: BoundedToken::new(version),
            headers: Bytes::new(),
        }
    }

    pub fn with_headers(mut self, headers: Bytes) -> Self {
        self.headers = headers;
        self
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: String,
    path: String,
    version: String,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: "GET".to_string(),
            path: "/".to_string(),
            version: "HTTP/1.1".to_string(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn build(self) -> Request {
        Request::from_tokens(&self.method, &self.path, &self.version)
    }
}
