use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::Request;
use crate::writer::ResponseWriter;

/// Like a regular request handler, but serving can fail
///
/// A handler writes its success response to `w` and returns `Ok(())`, or
/// returns an error and leaves the failure response to the adapter.
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    async fn serve(&self, w: &mut ResponseWriter, req: Request) -> crate::Result;
}

/// A plain function used as a [`Handler`]
#[derive(Clone, Copy)]
pub struct HandlerFn<F>(F);

/// Turn a function into a [`Handler`]
///
/// The function returns a boxed future borrowing the writer:
///
/// ```
/// use http::StatusCode;
///
/// let handler = httpwr::handler_fn(|w, _req| Box::pin(async move { httpwr::ok(w, StatusCode::OK, "hi") }));
/// # let _ = handler;
/// ```
pub const fn handler_fn<F>(f: F) -> HandlerFn<F>
where
    F: for<'a> Fn(&'a mut ResponseWriter, Request) -> BoxFuture<'a, crate::Result> + Send + Sync + 'static,
{
    HandlerFn(f)
}

#[async_trait]
impl<F> Handler for HandlerFn<F>
where
    F: for<'a> Fn(&'a mut ResponseWriter, Request) -> BoxFuture<'a, crate::Result> + Send + Sync + 'static,
{
    async fn serve(&self, w: &mut ResponseWriter, req: Request) -> crate::Result {
        (self.0)(w, req).await
    }
}

impl<F> std::fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerFn").finish_non_exhaustive()
    }
}
