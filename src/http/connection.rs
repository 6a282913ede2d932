use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::http::parser::{find_headers_end, parse_http_request};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::router::route;
use crate::http::writer::ResponseWriter;
use crate::server::context::ServerContext;

const READ_CHUNK: usize = 1024;

/// One accepted client, served exactly once and then closed.
pub struct Connection<S = TcpStream> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    ctx: Arc<ServerContext>,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

/// Result of the read phase.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A header terminator arrived, or the peer stopped sending after some bytes.
    Complete,
    /// The peer closed without sending anything.
    Closed,
    /// The buffer filled up before the header terminator.
    TooLarge,
    TimedOut,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, ctx: Arc<ServerContext>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            state: ConnectionState::Reading,
            ctx,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        ReadOutcome::Complete => match parse_http_request(&self.buffer) {
                            Ok(req) => ConnectionState::Processing(req),
                            Err(e) => {
                                tracing::debug!(error = ?e, "malformed request line");
                                Self::respond(Response::error(StatusCode::BadRequest))
                            }
                        },
                        ReadOutcome::Closed => ConnectionState::Closed,
                        ReadOutcome::TooLarge => {
                            tracing::warn!(
                                limit = self.ctx.config.max_request_size,
                                "request exceeds size limit"
                            );
                            Self::respond(Response::error(StatusCode::PayloadTooLarge))
                        }
                        ReadOutcome::TimedOut => {
                            tracing::warn!(
                                timeout = ?self.ctx.config.read_timeout,
                                "request not received in time"
                            );
                            Self::respond(Response::error(StatusCode::RequestTimeout))
                        }
                    };
                }

                ConnectionState::Processing(req) => {
                    tracing::info!(
                        method = %req.method,
                        path = %req.path,
                        version = %req.version,
                        "request"
                    );

                    let response = route(req, &self.ctx.files).await;
                    self.state = Self::respond(response);
                }

                ConnectionState::Writing(writer) => {
                    let sent = writer.write_to_stream(&mut self.stream).await?;
                    tracing::trace!(bytes = sent, "response sent");

                    // Best effort: the peer may already be gone.
                    let _ = self.stream.shutdown().await;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    fn respond(response: Response) -> ConnectionState {
        ConnectionState::Writing(ResponseWriter::new(&response))
    }

    /// Accumulates bytes until the header block is complete, the buffer limit
    /// is hit, the peer stops sending, or the read timeout expires.
    pub async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        let limit = self.ctx.config.max_request_size;
        let read_timeout = self.ctx.config.read_timeout;

        match timeout(read_timeout, Self::fill_buffer(&mut self.stream, &mut self.buffer, limit))
            .await
        {
            Ok(outcome) => outcome,
            Err(_) => Ok(ReadOutcome::TimedOut),
        }
    }

    async fn fill_buffer(
        stream: &mut S,
        buffer: &mut BytesMut,
        limit: usize,
    ) -> anyhow::Result<ReadOutcome> {
        loop {
            if find_headers_end(buffer).is_some() {
                return Ok(ReadOutcome::Complete);
            }

            if buffer.len() >= limit {
                return Ok(ReadOutcome::TooLarge);
            }

            let mut temp = [0u8; READ_CHUNK];
            let want = READ_CHUNK.min(limit - buffer.len());
            let n = stream.read(&mut temp[..want]).await?;

            if n == 0 {
                if buffer.is_empty() {
                    return Ok(ReadOutcome::Closed);
                }
                // Peer finished sending without a blank line.
                return Ok(ReadOutcome::Complete);
            }

            buffer.extend_from_slice(&temp[..n]);
        }
    }
}
