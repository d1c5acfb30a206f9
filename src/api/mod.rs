//! HTTP API Client
//!
//! Frontend bindings to the backend HTTP API, organized by domain.
//! Every request carries the session cookie.

mod activity;
mod auth;
mod course;
mod graduation;
mod profile;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response, UrlSearchParams};

// Re-export all public items
pub use activity::*;
pub use auth::*;
pub use course::*;
pub use graduation::*;
pub use profile::*;

/// Error taxonomy of the backend API
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401: wrong credentials or expired session
    Unauthorized,
    /// 409 on signup: the account already exists
    Conflict(String),
    /// Backend unreachable
    Network(String),
    /// Any other non-2xx status
    Status(u16),
    /// Response body did not match the expected shape
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "인증에 실패했습니다."),
            ApiError::Conflict(msg) => write!(f, "{}", msg),
            ApiError::Network(_) => {
                write!(f, "서버와 연결할 수 없습니다. 잠시 후 다시 시도해주세요.")
            }
            ApiError::Status(code) => write!(f, "요청에 실패했습니다. (HTTP {})", code),
            ApiError::Decode(_) => write!(f, "응답을 해석하지 못했습니다."),
        }
    }
}

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Issue one fetch and map the status code into the error taxonomy.
async fn send(
    method: &str,
    url: &str,
    body: Option<JsValue>,
    content_type: Option<&str>,
) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_credentials(RequestCredentials::Include);
    if let Some(body) = &body {
        opts.set_body(body);
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| ApiError::Network(js_err(e)))?;
    if let Some(ct) = content_type {
        request
            .headers()
            .set("Content-Type", ct)
            .map_err(|e| ApiError::Network(js_err(e)))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_err(e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Network(js_err(e)))?;

    match resp.status() {
        200..=299 => Ok(resp),
        401 => Err(ApiError::Unauthorized),
        409 => Err(ApiError::Conflict(read_error_message(&resp).await)),
        status => Err(ApiError::Status(status)),
    }
}

/// Best-effort extraction of a `message` field from an error payload.
async fn read_error_message(resp: &Response) -> String {
    let fallback = "이미 존재하는 계정입니다.".to_string();
    let Ok(promise) = resp.json() else {
        return fallback;
    };
    match JsFuture::from(promise).await {
        Ok(value) => js_sys::Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .unwrap_or(fallback),
        Err(_) => fallback,
    }
}

/// Decode a JSON response body.
async fn response_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let promise = resp.json().map_err(|e| ApiError::Decode(js_err(e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_err(e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = send("GET", url, None, None).await?;
    response_json(resp).await
}

/// POST form-encoded fields. The browser sets the content type for
/// `UrlSearchParams` bodies.
pub(crate) async fn post_form(url: &str, fields: &[(&str, &str)]) -> Result<Response, ApiError> {
    let params = UrlSearchParams::new().map_err(|e| ApiError::Network(js_err(e)))?;
    for (key, value) in fields {
        params.append(key, value);
    }
    send("POST", url, Some(params.into()), None).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = send(
        "POST",
        url,
        Some(JsValue::from_str(&json)),
        Some("application/json"),
    )
    .await?;
    response_json(resp).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = send(
        "PUT",
        url,
        Some(JsValue::from_str(&json)),
        Some("application/json"),
    )
    .await?;
    response_json(resp).await
}

pub(crate) async fn delete(url: &str) -> Result<(), ApiError> {
    send("DELETE", url, None, None).await?;
    Ok(())
}
