use std::error::Error as StdError;
use std::fmt::{Debug, Display};

use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::adapter::{ErrorHandler, JsonErrorHandler};
use crate::writer::ResponseWriter;

/// An error paired with the HTTP status it should be answered with
///
/// Displays as its cause. Equality is a kind check: any two status errors
/// compare equal, whatever they carry.
#[derive(Debug, thiserror::Error)]
#[error("{cause}")]
pub struct StatusError {
    status: StatusCode,
    #[source]
    cause: anyhow::Error,
}

impl StatusError {
    /// Pair an error with a status code
    #[must_use]
    pub fn new(status: StatusCode, cause: impl Into<anyhow::Error>) -> Self {
        Self {
            status,
            cause: cause.into(),
        }
    }

    /// Build a status error from a plain message
    #[must_use]
    pub fn msg<M>(status: StatusCode, message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self::new(status, anyhow::Error::msg(message))
    }

    /// Status code the response should carry
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// The wrapped error
    #[must_use]
    pub const fn cause(&self) -> &anyhow::Error {
        &self.cause
    }

    /// Unwrap into the wrapped error, dropping the status
    #[must_use]
    pub fn into_cause(self) -> anyhow::Error {
        self.cause
    }

    /// Check this error and everything it wraps against `target`
    ///
    /// Matches when `target` is itself a status error, or when any error in
    /// the cause chain has the type of `target` and compares equal to it.
    #[must_use]
    pub fn is<E>(&self, target: &E) -> bool
    where
        E: StdError + PartialEq + 'static,
    {
        chain_contains(std::iter::successors(Some(self as &(dyn StdError + 'static)), |&e| e.source()), target)
    }
}

impl PartialEq for StatusError {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl From<CommonError> for StatusError {
    fn from(kind: CommonError) -> Self {
        Self::new(kind.status_code(), kind)
    }
}

impl IntoResponse for StatusError {
    fn into_response(self) -> Response {
        let mut w = ResponseWriter::new();
        JsonErrorHandler.handle_error(&mut w, self.status, &self.cause);
        w.into_response()
    }
}

/// Frequently returned failures
///
/// Usable as comparison targets for [`is`], or converted into a
/// [`StatusError`] carrying the matching status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CommonError {
    #[error("internal server error")]
    InternalServerError,
    #[error("bad request")]
    BadRequest,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
}

impl CommonError {
    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

/// Wrap an error with a status, passing an absent error through
///
/// Lets a call site wrap whatever a fallible operation produced without
/// turning success into a failure.
#[must_use]
pub fn wrap<E>(status: StatusCode, err: Option<E>) -> Option<StatusError>
where
    E: Into<anyhow::Error>,
{
    err.map(|e| StatusError::new(status, e))
}

/// Attach a status code to the error side of a result
pub trait WithStatus<T> {
    /// Wrap an `Err` in a [`StatusError`]; `Ok` is left untouched
    ///
    /// # Errors
    ///
    /// Returns the original error paired with `status`
    fn with_status(self, status: StatusCode) -> Result<T, StatusError>;
}

impl<T, E> WithStatus<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn with_status(self, status: StatusCode) -> Result<T, StatusError> {
        self.map_err(|e| StatusError::new(status, e))
    }
}

/// First status error in the chain of `err`, outermost first
#[must_use]
pub fn find_status_error(err: &anyhow::Error) -> Option<&StatusError> {
    err.chain().find_map(|e| e.downcast_ref::<StatusError>())
}

/// Whether `err`, or any error it wraps, matches `target`
#[must_use]
pub fn is<E>(err: &anyhow::Error, target: &E) -> bool
where
    E: StdError + PartialEq + 'static,
{
    chain_contains(err.chain(), target)
}

fn chain_contains<'a, E>(mut chain: impl Iterator<Item = &'a (dyn StdError + 'static)>, target: &E) -> bool
where
    E: StdError + PartialEq + 'static,
{
    chain.any(|link| link.downcast_ref::<E>().is_some_and(|link| link == target))
}

/// Build a [`StatusError`] from a status and a format string
///
/// ```
/// use http::StatusCode;
///
/// let err = httpwr::status_error!(StatusCode::CONFLICT, "foo bar {}", 10);
/// assert_eq!(err.status(), StatusCode::CONFLICT);
/// assert_eq!(err.to_string(), "foo bar 10");
/// ```
#[macro_export]
macro_rules! status_error {
    ($status:expr, $($arg:tt)+) => {
        $crate::StatusError::new($status, $crate::__private::anyhow!($($arg)+))
    };
}

/// Return early from a fallible handler with a [`StatusError`]
#[macro_export]
macro_rules! bail_status {
    ($status:expr, $($arg:tt)+) => {
        return ::core::result::Result::Err(::core::convert::From::from($crate::status_error!($status, $($arg)+)))
    };
}
