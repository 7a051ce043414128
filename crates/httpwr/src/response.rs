use http::StatusCode;
use http::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;

use crate::writer::ResponseWriter;

pub const CREATED_MSG: &str = "Created";
pub const OK_MSG: &str = "OK";
pub const INTERNAL_SERVER_ERROR_MSG: &str = "Internal Server Error";
pub const BAD_REQUEST_MSG: &str = "Bad Request";

/// Caller-supplied payload for [`ok_with_data`]
pub type Data = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Serialize)]
struct Message<'a> {
    status: u16,
    msg: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Data>,
}

/// Write a `{"status", "msg"}` JSON envelope
///
/// Always returns `Ok(())` so it can end a fallible handler.
///
/// # Errors
///
/// Never; encode failures are logged and the body is left empty
pub fn ok(w: &mut ResponseWriter, status: StatusCode, msg: &str) -> crate::Result {
    write_json(
        w,
        status,
        &Message {
            status: status.as_u16(),
            msg,
            data: None,
        },
    );
    Ok(())
}

/// Write a `{"status", "msg", "data"}` JSON envelope
///
/// # Errors
///
/// Never; encode failures are logged and the body is left empty
pub fn ok_with_data(w: &mut ResponseWriter, status: StatusCode, msg: &str, data: Data) -> crate::Result {
    write_json(
        w,
        status,
        &Message {
            status: status.as_u16(),
            msg,
            data: Some(&data),
        },
    );
    Ok(())
}

/// Set the JSON content type, commit `status` and write `body` as one line
///
/// Best effort: an encode failure leaves the status committed and the body empty.
pub(crate) fn write_json<T: Serialize>(w: &mut ResponseWriter, status: StatusCode, body: &T) {
    w.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    w.write_header(status);

    match serde_json::to_vec(body) {
        Ok(mut bytes) => {
            bytes.push(b'\n');
            w.write_body(&bytes);
        }
        Err(e) => {
            tracing::warn!(%status, error = %e, "failed to encode response body");
        }
    }
}
