use anyhow::Result;

use crate::proto::http::{Request, Response};
use crate::services::{self, Services};
use easylaw_api::status::StatusCode;
use easylaw_query::Collection;

mod api;
mod util;

const WELCOME: &str = "Welcome to easylaw search API";

/// Route a request using the process-wide services.
pub async fn handle(req: Request) -> Result<Response> {
    handle_with(req, services::services()?).await
}

pub async fn handle_with(req: Request, services: &Services) -> Result<Response> {
    match (req.method.as_str(), req.route()) {
        ("GET", "/") => Ok(util::text_response(StatusCode::Ok, WELCOME)),
        ("GET", "/health/ready") => Ok(util::json_response(
            StatusCode::Ok,
            b"{\"status\":\"ready\"}".to_vec(),
        )),
        (_, "/" | "/health/ready") => {
            Ok(util::error_response(StatusCode::MethodNotAllowed, "method not allowed"))
        }
        (method, path) => match Collection::from_route(path) {
            Some(collection) if method == "GET" => {
                Ok(api::handle_collection(collection, &req, services).await)
            }
            Some(_) => Ok(util::error_response(StatusCode::MethodNotAllowed, "method not allowed")),
            None => Ok(util::error_response(StatusCode::NotFound, "not found")),
        },
    }
}
