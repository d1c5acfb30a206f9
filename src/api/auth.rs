//! Auth Endpoints
//!
//! Login and signup. The backend establishes the session via cookie;
//! logout is client-side only.

use wasm_bindgen::JsValue;

use super::{post_form, send, ApiError};
use crate::models::SignupForm;

/// `POST /api/auth/login`, form-encoded. 200 establishes the session
/// cookie; 401 means wrong credentials.
pub async fn login(user_id: &str, password: &str) -> Result<(), ApiError> {
    post_form(
        "/api/auth/login",
        &[("userId", user_id), ("password", password)],
    )
    .await?;
    Ok(())
}

/// `POST /api/signup`, JSON body. 409 (or a duplicate-account payload)
/// surfaces as [`ApiError::Conflict`].
pub async fn signup(form: &SignupForm) -> Result<(), ApiError> {
    let json = serde_json::to_string(form).map_err(|e| ApiError::Decode(e.to_string()))?;
    send(
        "POST",
        "/api/signup",
        Some(JsValue::from_str(&json)),
        Some("application/json"),
    )
    .await?;
    Ok(())
}
