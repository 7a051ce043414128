use std::io;

use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::{HeaderMap, StatusCode};

/// Buffered response target handed to fallible handlers
///
/// Mirrors the transport contract: headers are set first, the status line is
/// committed once, and the body is appended last. Turned into a response
/// after the handler returns.
#[derive(Debug, Default)]
pub struct ResponseWriter {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Headers to send with the response
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable access to the response headers
    pub const fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Commit the status line
    ///
    /// Only the first call has any effect.
    pub fn write_header(&mut self, status: StatusCode) {
        if let Some(current) = self.status {
            tracing::warn!(%current, ignored = %status, "response status already written");
            return;
        }
        self.status = Some(status);
    }

    /// Append bytes to the body, committing `200 OK` if no status was written
    pub fn write_body(&mut self, bytes: &[u8]) {
        if self.status.is_none() {
            self.write_header(StatusCode::OK);
        }
        self.body.extend_from_slice(bytes);
    }

    /// Committed status, or `200 OK` when nothing has been committed yet
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    /// Whether a status line has been committed
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.status.is_some()
    }

    /// Body written so far
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl io::Write for ResponseWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_body(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl IntoResponse for ResponseWriter {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}
