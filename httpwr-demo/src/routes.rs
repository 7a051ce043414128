use std::io::Write;

use axum::Router;
use axum::routing::{get_service, post_service};
use http::StatusCode;
use http::header::{CONTENT_TYPE, HeaderValue};
use httpwr::{CREATED_MSG, CommonError, Data, OK_MSG, Request, ResponseWriter, StatusError, WithStatus};
use serde::Deserialize;

const BODY_LIMIT_BYTES: usize = 64 * 1024;
const MAX_NAME_CHARS: usize = 64;

/// Example routes, one per response path
pub fn router() -> Router {
    Router::new()
        .route("/ok", get_service(httpwr::adapt_fn(|w, req| Box::pin(ok_handler(w, req)))))
        .route(
            "/greetings",
            post_service(httpwr::adapt_fn(|w, req| Box::pin(create_greeting(w, req)))),
        )
        .route(
            "/forbidden",
            get_service(httpwr::adapt_fn(|w, req| Box::pin(forbidden(w, req)))),
        )
        .route("/fail", get_service(httpwr::adapt_fn(|w, req| Box::pin(fail(w, req)))))
        .route(
            "/teapot",
            get_service(httpwr::adapt_fn_with(|w, req| Box::pin(teapot(w, req)), plain_text_error)),
        )
}

async fn ok_handler(w: &mut ResponseWriter, _req: Request) -> httpwr::Result {
    httpwr::ok(w, StatusCode::OK, OK_MSG)
}

#[derive(Debug, Deserialize)]
struct GreetingRequest {
    name: String,
}

fn validate_name(name: &str) -> Option<anyhow::Error> {
    if name.chars().count() > MAX_NAME_CHARS {
        return Some(anyhow::anyhow!("name must be at most {MAX_NAME_CHARS} characters"));
    }
    None
}

async fn create_greeting(w: &mut ResponseWriter, req: Request) -> httpwr::Result {
    let bytes = axum::body::to_bytes(req.into_body(), BODY_LIMIT_BYTES)
        .await
        .with_status(StatusCode::BAD_REQUEST)?;
    let greeting: GreetingRequest = serde_json::from_slice(&bytes).with_status(StatusCode::BAD_REQUEST)?;

    let name = greeting.name.trim();
    if name.is_empty() {
        httpwr::bail_status!(StatusCode::UNPROCESSABLE_ENTITY, "name must not be empty");
    }
    if let Some(err) = httpwr::wrap(StatusCode::UNPROCESSABLE_ENTITY, validate_name(name)) {
        return Err(err.into());
    }

    tracing::debug!(%name, "greeting created");

    let mut data = Data::new();
    data.insert("greeting".to_string(), format!("hello, {name}").into());
    httpwr::ok_with_data(w, StatusCode::CREATED, CREATED_MSG, data)
}

async fn forbidden(_w: &mut ResponseWriter, _req: Request) -> httpwr::Result {
    Err(StatusError::from(CommonError::Forbidden).into())
}

async fn fail(_w: &mut ResponseWriter, _req: Request) -> httpwr::Result {
    Err(anyhow::anyhow!("server is doing funky stuff"))
}

async fn teapot(_w: &mut ResponseWriter, _req: Request) -> httpwr::Result {
    Err(httpwr::status_error!(StatusCode::IM_A_TEAPOT, "short and stout").into())
}

/// Error handler answering in plain text instead of JSON
fn plain_text_error(w: &mut ResponseWriter, status: StatusCode, err: &anyhow::Error) {
    w.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    w.write_header(status);
    if let Err(e) = writeln!(w, "{status}: {err}") {
        tracing::warn!(error = %e, "failed to write error body");
    }
}
