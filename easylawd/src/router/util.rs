use easylaw_api::response::ErrorBody;
use easylaw_api::status::StatusCode;
use serde::Serialize;

use crate::proto::http::Response;

pub fn json_response(code: StatusCode, body: Vec<u8>) -> Response {
    if code == StatusCode::Ok {
        if let Ok(txt) = std::str::from_utf8(&body) {
            tracing::trace!(target: "easylawd", body = txt, "response body");
        }
    }
    Response { code, headers: vec![("content-type".into(), "application/json".into())], body }
}

pub fn json_value<T: Serialize>(code: StatusCode, value: &T) -> Response {
    let body = serde_json::to_vec(value).unwrap_or_else(|_| b"{}".to_vec());
    json_response(code, body)
}

pub fn error_response(code: StatusCode, msg: &str) -> Response {
    json_value(code, &ErrorBody::new(msg))
}

pub fn text_response(code: StatusCode, text: &str) -> Response {
    Response {
        code,
        headers: vec![("content-type".into(), "text/plain; charset=utf-8".into())],
        body: text.as_bytes().to_vec(),
    }
}
