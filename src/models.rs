//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Serialize};

/// Course-history item as returned by `GET /api/course/history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCourseRecord {
    pub lecid: String,
    #[serde(rename = "lectureName")]
    pub lecture_name: String,
    pub credit: u32,
    /// Grade points on the 0.0-4.5 scale
    pub received_grade: f64,
    /// Free-form category label, e.g. "전공필수" / "교양"
    #[serde(rename = "lecType")]
    pub lec_type: String,
    /// Academic year
    pub grade: u32,
    /// 1, 2, or anything else for seasonal terms
    pub semester: u32,
}

/// UI-facing course record derived from [`RawCourseRecord`].
///
/// `letter_grade` and `needs_retake` are always recomputed from `score`
/// at normalization, never stored independently of it.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseRecord {
    /// Zero-based position in the loaded set; stable per load only
    pub id: usize,
    pub name: String,
    pub credit: u32,
    pub letter_grade: String,
    /// Numeric grade points, used for sorting
    pub score: f64,
    pub category: String,
    pub needs_retake: bool,
    pub year: u32,
    pub semester_label: String,
}

/// One row of the graduation checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraduationCheckItem {
    pub category: String,
    pub current: u32,
    pub required: u32,
    pub passed: bool,
    pub message: String,
}

/// Response of `GET /api/graduation/my-status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraduationStatus {
    #[serde(rename = "majorType")]
    pub major_type: String,
    #[serde(rename = "studentId")]
    pub student_id: u64,
    #[serde(rename = "graduationPossible")]
    pub graduation_possible: bool,
    #[serde(rename = "checkList")]
    pub check_list: Vec<GraduationCheckItem>,
    #[serde(rename = "missingCourses", default)]
    pub missing_courses: Vec<String>,
}

/// Response of `GET /api/auth/mypage`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "studentId", default)]
    pub student_id: String,
    pub major: String,
    #[serde(default)]
    pub track: String,
    #[serde(default)]
    pub eng_score: u32,
    #[serde(default)]
    pub total_gpa: f64,
    #[serde(default)]
    pub major_gpa: f64,
    #[serde(default)]
    pub internship: bool,
}

/// Extracurricular activity record, scoped by student id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    /// "대회" or "인턴십"
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub detail: String,
    pub year: u32,
}

/// Signup request body for `POST /api/signup`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupForm {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub password: String,
    pub name: String,
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub major: String,
}

impl SignupForm {
    /// All fields are required; empty fields are rejected before submission.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.user_id.trim().is_empty() {
            return Err("아이디를 입력해주세요.");
        }
        if self.password.is_empty() {
            return Err("비밀번호를 입력해주세요.");
        }
        if self.name.trim().is_empty() {
            return Err("이름을 입력해주세요.");
        }
        if self.student_id.trim().is_empty() {
            return Err("학번을 입력해주세요.");
        }
        if self.major.trim().is_empty() {
            return Err("전공을 입력해주세요.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SignupForm {
        SignupForm {
            user_id: "knu2023".to_string(),
            password: "secret".to_string(),
            name: "홍길동".to_string(),
            student_id: "2023123456".to_string(),
            major: "컴퓨터학부".to_string(),
        }
    }

    #[test]
    fn test_signup_form_complete() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_signup_form_missing_fields() {
        let mut form = filled_form();
        form.student_id = String::new();
        assert!(form.validate().is_err());

        let mut form = filled_form();
        form.user_id = "   ".to_string();
        assert!(form.validate().is_err());
    }
}
