//! Fallible handlers covering every response path

use axum::Router;
use http::StatusCode;
use httpwr::{
    BAD_REQUEST_MSG, CREATED_MSG, Data, INTERNAL_SERVER_ERROR_MSG, OK_MSG, Request, ResponseWriter, StatusError,
};

/// Message each route answers with, or the error text it fails with
pub const DATA_WAS_WRONG: &str = "data was wrong";
pub const FUNKY_STUFF: &str = "server is doing funky stuff";
pub const SOME_MSG: &str = "some msg";

/// Payload served by `/data`
pub fn sample_data() -> Data {
    let mut data = Data::new();
    data.insert("some".to_owned(), "data".into());
    data.insert("age".to_owned(), 23.into());
    data
}

async fn nothing(_w: &mut ResponseWriter, _req: Request) -> httpwr::Result {
    Ok(())
}

async fn classified(_w: &mut ResponseWriter, _req: Request) -> httpwr::Result {
    Err(StatusError::msg(StatusCode::BAD_REQUEST, DATA_WAS_WRONG).into())
}

async fn unclassified(_w: &mut ResponseWriter, _req: Request) -> httpwr::Result {
    Err(anyhow::anyhow!(FUNKY_STUFF))
}

async fn message(w: &mut ResponseWriter, _req: Request) -> httpwr::Result {
    httpwr::ok(w, StatusCode::OK, SOME_MSG)
}

async fn message_with_data(w: &mut ResponseWriter, _req: Request) -> httpwr::Result {
    httpwr::ok_with_data(w, StatusCode::OK, SOME_MSG, sample_data())
}

async fn conflict(_w: &mut ResponseWriter, _req: Request) -> httpwr::Result {
    Err(httpwr::status_error!(StatusCode::CONFLICT, "foo bar {}", 10).into())
}

pub fn router() -> Router {
    Router::new()
        .route_service("/nothing", httpwr::adapt_fn(|w, req| Box::pin(nothing(w, req))))
        .route_service("/classified", httpwr::adapt_fn(|w, req| Box::pin(classified(w, req))))
        .route_service("/unclassified", httpwr::adapt_fn(|w, req| Box::pin(unclassified(w, req))))
        .route_service("/message", httpwr::adapt_fn(|w, req| Box::pin(message(w, req))))
        .route_service("/data", httpwr::adapt_fn(|w, req| Box::pin(message_with_data(w, req))))
        .route_service("/conflict", httpwr::adapt_fn(|w, req| Box::pin(conflict(w, req))))
        .route_service(
            "/created",
            httpwr::adapt_fn(|w, _req| Box::pin(async move { httpwr::ok(w, StatusCode::CREATED, CREATED_MSG) })),
        )
        .route_service(
            "/const/ok",
            httpwr::adapt_fn(|w, _req| Box::pin(async move { httpwr::ok(w, StatusCode::OK, OK_MSG) })),
        )
        .route_service(
            "/const/internal",
            httpwr::adapt_fn(|w, _req| {
                Box::pin(async move { httpwr::ok(w, StatusCode::OK, INTERNAL_SERVER_ERROR_MSG) })
            }),
        )
        .route_service(
            "/const/bad-request",
            httpwr::adapt_fn(|w, _req| Box::pin(async move { httpwr::ok(w, StatusCode::OK, BAD_REQUEST_MSG) })),
        )
}
