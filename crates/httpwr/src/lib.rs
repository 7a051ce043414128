//! Fallible HTTP handlers for `axum`/`tower`
//!
//! A handler returns an error instead of writing the error response itself.
//! The adapter turns that error into exactly one JSON response, so a handler
//! can never report a failure and then keep going.
//!
//! ```rust,no_run
//! use axum::Router;
//! use http::StatusCode;
//! use httpwr::{WithStatus, adapt_fn, ok};
//!
//! let app: Router = Router::new().route_service(
//!     "/answer",
//!     adapt_fn(|w, req| {
//!         Box::pin(async move {
//!             let query = req.uri().query().unwrap_or_default().to_owned();
//!             let n: u32 = query.parse().with_status(StatusCode::BAD_REQUEST)?;
//!             ok(w, StatusCode::OK, &(n * 2).to_string())
//!         })
//!     }),
//! );
//! ```

mod adapter;
mod error;
mod handler;
mod response;
mod writer;

pub use adapter::{
    ErrorAdapter, ErrorHandler, JsonErrorHandler, adapt, adapt_fn, adapt_fn_with, adapt_with, default_error_handler,
};
pub use error::{CommonError, StatusError, WithStatus, find_status_error, is, wrap};
pub use handler::{Handler, HandlerFn, handler_fn};
pub use response::{BAD_REQUEST_MSG, CREATED_MSG, Data, INTERNAL_SERVER_ERROR_MSG, OK_MSG, ok, ok_with_data};
pub use writer::ResponseWriter;

/// Request type handed to fallible handlers
pub type Request = axum::extract::Request;

/// Result returned by fallible handlers
pub type Result<T = ()> = std::result::Result<T, anyhow::Error>;

// Not public API, used by the exported macros.
#[doc(hidden)]
pub mod __private {
    pub use anyhow::anyhow;
}
