use dioxus_logger::tracing;
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::{
    client::{config::panel_config, model::error::ApiError},
    model::api::ResponseBody,
};

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<ResponseBody<T>>()
            .await
            .map(ResponseBody::into_data)
            .map_err(|e| ApiError::internal(format!("Failed to parse response: {}", e)))
    } else {
        Err(parse_error(status, response).await)
    }
}

async fn parse_error(status: u64, response: Response) -> ApiError {
    // The body can only be read once, so decode the error from its text
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_body(status, &body);

    tracing::error!("Request failed with status {}: {}", status, error.message);

    error
}

/// Create a GET request with credentials
pub fn get(path: &str) -> Request {
    let url = panel_config().api_url(path);
    tracing::debug!("GET {}", url);
    Request::get(&url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(path: &str) -> Request {
    let url = panel_config().api_url(path);
    tracing::debug!("POST {}", url);
    Request::post(&url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a PUT request with credentials and JSON content type
pub fn put(path: &str) -> Request {
    let url = panel_config().api_url(path);
    tracing::debug!("PUT {}", url);
    Request::put(&url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a DELETE request with credentials
pub fn delete(path: &str) -> Request {
    let url = panel_config().api_url(path);
    tracing::debug!("DELETE {}", url);
    Request::delete(&url).credentials(reqwasm::http::RequestCredentials::Include)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to send request: {}", e)))
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::internal(format!("Failed to serialize request: {}", e)))
}
