use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::response::{IntoResponse, Response};
use futures::future::BoxFuture;
use http::StatusCode;
use serde::Serialize;
use tower::Service;

use crate::Request;
use crate::error::find_status_error;
use crate::handler::{Handler, HandlerFn};
use crate::response::write_json;
use crate::writer::ResponseWriter;

/// Writes the response for an error a handler returned
pub trait ErrorHandler: Send + Sync + 'static {
    fn handle_error(&self, w: &mut ResponseWriter, status: StatusCode, err: &anyhow::Error);
}

impl<F> ErrorHandler for F
where
    F: Fn(&mut ResponseWriter, StatusCode, &anyhow::Error) + Send + Sync + 'static,
{
    fn handle_error(&self, w: &mut ResponseWriter, status: StatusCode, err: &anyhow::Error) {
        self(w, status, err);
    }
}

/// Default error handler: a `{"status", "error"}` JSON envelope
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonErrorHandler;

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    error: String,
}

impl ErrorHandler for JsonErrorHandler {
    fn handle_error(&self, w: &mut ResponseWriter, status: StatusCode, err: &anyhow::Error) {
        write_json(
            w,
            status,
            &ErrorBody {
                status: status.as_u16(),
                error: err.to_string(),
            },
        );
    }
}

/// [`JsonErrorHandler`] as a function, for composing custom error handlers
pub fn default_error_handler(w: &mut ResponseWriter, status: StatusCode, err: &anyhow::Error) {
    JsonErrorHandler.handle_error(w, status, err);
}

/// A fallible [`Handler`] exposed as an infallible `tower` service
///
/// Mount it with `Router::route_service` or `axum::routing::get_service`.
pub struct ErrorAdapter<H, E = JsonErrorHandler> {
    inner: Arc<Inner<H, E>>,
}

struct Inner<H, E> {
    handler: H,
    error_handler: E,
}

impl<H, E> Clone for ErrorAdapter<H, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H, E> std::fmt::Debug for ErrorAdapter<H, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorAdapter").finish_non_exhaustive()
    }
}

impl<H: Handler, E: ErrorHandler> Inner<H, E> {
    async fn serve(&self, req: Request) -> Response {
        let mut w = ResponseWriter::new();

        let Err(err) = self.handler.serve(&mut w, req).await else {
            return w.into_response();
        };

        let (status, cause) = match find_status_error(&err) {
            Some(status_err) => (status_err.status(), status_err.cause()),
            None => (StatusCode::INTERNAL_SERVER_ERROR, &err),
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %err, "handler failed");
        } else {
            tracing::debug!(%status, error = %err, "handler returned an error");
        }

        if w.is_committed() {
            tracing::warn!(%status, "handler wrote a response before failing");
        }

        self.error_handler.handle_error(&mut w, status, cause);
        w.into_response()
    }
}

impl<H: Handler, E: ErrorHandler> Service<Request> for ErrorAdapter<H, E> {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move { Ok(inner.serve(req).await) })
    }
}

/// Adapt a handler, answering errors with [`JsonErrorHandler`]
pub fn adapt<H: Handler>(handler: H) -> ErrorAdapter<H> {
    adapt_with(handler, JsonErrorHandler)
}

/// Adapt a handler, answering errors with a custom error handler
pub fn adapt_with<H: Handler, E: ErrorHandler>(handler: H, error_handler: E) -> ErrorAdapter<H, E> {
    ErrorAdapter {
        inner: Arc::new(Inner { handler, error_handler }),
    }
}

/// Adapt a function, answering errors with [`JsonErrorHandler`]
pub fn adapt_fn<F>(f: F) -> ErrorAdapter<HandlerFn<F>>
where
    F: for<'a> Fn(&'a mut ResponseWriter, Request) -> BoxFuture<'a, crate::Result> + Send + Sync + 'static,
{
    adapt(crate::handler::handler_fn(f))
}

/// Adapt a function, answering errors with a custom error handler
pub fn adapt_fn_with<F, E>(f: F, error_handler: E) -> ErrorAdapter<HandlerFn<F>, E>
where
    F: for<'a> Fn(&'a mut ResponseWriter, Request) -> BoxFuture<'a, crate::Result> + Send + Sync + 'static,
    E: ErrorHandler,
{
    adapt_with(crate::handler::handler_fn(f), error_handler)
}
