//! Activity Endpoints
//!
//! CRUD over extracurricular-activity records, scoped by student id.

use serde::Serialize;

use super::{delete, get_json, post_json, put_json, ApiError};
use crate::models::Activity;

#[derive(Serialize)]
pub struct CreateActivityArgs<'a> {
    #[serde(rename = "studentId")]
    pub student_id: &'a str,
    pub category: &'a str,
    pub title: &'a str,
    pub detail: &'a str,
    pub year: u32,
}

/// `GET /api/activities?studentId=...`
pub async fn list_activities(student_id: &str) -> Result<Vec<Activity>, ApiError> {
    get_json(&format!("/api/activities?studentId={}", student_id)).await
}

/// `POST /api/activities` - returns the created record with its id.
pub async fn create_activity(args: &CreateActivityArgs<'_>) -> Result<Activity, ApiError> {
    post_json("/api/activities", args).await
}

/// `PUT /api/activities/{id}`
pub async fn update_activity(activity: &Activity) -> Result<Activity, ApiError> {
    put_json(&format!("/api/activities/{}", activity.id), activity).await
}

/// `DELETE /api/activities/{id}`
pub async fn delete_activity(id: u32) -> Result<(), ApiError> {
    delete(&format!("/api/activities/{}", id)).await
}
