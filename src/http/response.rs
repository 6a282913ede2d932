use std::time::SystemTime;

use bytes::Bytes;

pub const SERVER_NAME: &str = "Simple-HTTP-Server/1.0";

/// Page served for `GET /`.
pub const WELCOME_PAGE: &str = "<!DOCTYPE html>\n\
<html><head><title>Simple HTTP Server</title></head>\n\
<body><h1>Welcome to Simple HTTP Server</h1>\n\
<p>Server is running successfully!</p>\n\
<p>Try accessing a file like <a href=\"/index.html\">index.html</a></p>\n\
</body></html>\n";

/// HTTP status codes the server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 408 Request Timeout
    RequestTimeout,
    /// 413 Payload Too Large
    PayloadTooLarge,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use simple_http_server::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::RequestTimeout => 408,
            StatusCode::PayloadTooLarge => 413,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase used in the status line and on error pages.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::RequestTimeout => "Request Timeout",
            StatusCode::PayloadTooLarge => "Payload Too Large",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// A complete HTTP response ready to be written.
///
/// Headers are kept in wire order.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

/// Builds a response with the fixed header set
/// `Server, Date, Content-Type, Content-Length, Connection`.
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("application/json")
///     .body(b"{}".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: &'static str,
    date: Option<SystemTime>,
    body: Bytes,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: "text/plain",
            date: None,
            body: Bytes::new(),
        }
    }

    pub fn content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = content_type;
        self
    }

    /// Pins the `Date` header. Defaults to the time `build` is called.
    pub fn date(mut self, date: SystemTime) -> Self {
        self.date = Some(date);
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response. `Content-Length` always matches the body.
    pub fn build(self) -> Response {
        let date = self.date.unwrap_or_else(SystemTime::now);

        let headers = vec![
            ("Server".to_string(), SERVER_NAME.to_string()),
            ("Date".to_string(), httpdate::fmt_http_date(date)),
            ("Content-Type".to_string(), self.content_type.to_string()),
            ("Content-Length".to_string(), self.body.len().to_string()),
            ("Connection".to_string(), "close".to_string()),
        ];

        Response {
            status: self.status,
            headers,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 OK with the given content type and body.
    pub fn ok(content_type: &'static str, body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(content_type)
            .body(body)
            .build()
    }

    /// 200 OK with the built-in welcome page.
    pub fn welcome() -> Self {
        Self::ok("text/html", WELCOME_PAGE)
    }

    /// Minimal HTML error page naming the status code and reason twice.
    pub fn error(status: StatusCode) -> Self {
        ResponseBuilder::new(status)
            .content_type("text/html")
            .body(error_page(status))
            .build()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub fn error_page(status: StatusCode) -> String {
    let code = status.as_u16();
    let message = status.reason_phrase();
    format!(
        "<!DOCTYPE html>\n\
<html><head><title>{code} {message}</title></head>\n\
<body><h1>{code} {message}</h1><p>{message}</p></body></html>\n"
    )
}
