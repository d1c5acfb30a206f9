//! Profile Endpoints

use super::{get_json, post_form, ApiError};
use crate::models::UserProfile;

/// `GET /api/auth/mypage` - profile of the logged-in user.
pub async fn fetch_profile() -> Result<UserProfile, ApiError> {
    get_json("/api/auth/mypage").await
}

/// `POST /api/auth/mypage/update`, form-encoded. Updates the mutable
/// profile fields (track, English-test score, internship flag).
pub async fn update_profile(
    major: &str,
    track: &str,
    eng_score: u32,
    internship: bool,
) -> Result<(), ApiError> {
    let score = eng_score.to_string();
    let internship = internship.to_string();
    post_form(
        "/api/auth/mypage/update",
        &[
            ("major", major),
            ("specific_major", track),
            ("eng_score", &score),
            ("internship", &internship),
        ],
    )
    .await?;
    Ok(())
}
