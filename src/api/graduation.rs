//! Graduation Status Endpoint

use super::{get_json, ApiError};
use crate::models::GraduationStatus;

/// `GET /api/graduation/my-status` - evaluated graduation checklist of
/// the logged-in student.
pub async fn fetch_my_status() -> Result<GraduationStatus, ApiError> {
    get_json("/api/graduation/my-status").await
}
