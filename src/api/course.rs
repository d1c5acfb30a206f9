//! Course History Endpoint

use super::{get_json, ApiError};
use crate::models::RawCourseRecord;

/// `GET /api/course/history` - full course history of the logged-in
/// student. Requires an established session.
pub async fn fetch_course_history() -> Result<Vec<RawCourseRecord>, ApiError> {
    get_json("/api/course/history").await
}
