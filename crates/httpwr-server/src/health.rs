use http::StatusCode;
use httpwr::{OK_MSG, Request, ResponseWriter};

/// Health check handler
pub async fn health_handler(w: &mut ResponseWriter, _req: Request) -> httpwr::Result {
    httpwr::ok(w, StatusCode::OK, OK_MSG)
}
