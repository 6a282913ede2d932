use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Renders the status line, header block and terminating blank line.
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Sends one response as two segments: the header block, then the body.
///
/// Each segment is written until fully transmitted; a short write is resumed
/// rather than assumed complete.
pub struct ResponseWriter {
    head: Vec<u8>,
    body: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            head: serialize_head(response),
            body: response.body.clone(),
            written: 0,
        }
    }

    pub fn head_len(&self) -> usize {
        self.head.len()
    }

    pub fn total_len(&self) -> usize {
        self.head.len() + self.body.len()
    }

    /// Writes whatever has not been sent yet and returns the total number of
    /// bytes transmitted for this response.
    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<usize>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.head.len() {
            let n = stream.write(&self.head[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing headers"));
            }

            self.written += n;
        }

        while self.written < self.total_len() {
            let offset = self.written - self.head.len();
            let n = stream.write(&self.body[offset..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing body"));
            }

            self.written += n;
        }

        stream.flush().await?;

        Ok(self.written)
    }
}
