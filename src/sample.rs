//! Sample Datasets
//!
//! Fixed data shown to unauthenticated users in place of personalized
//! data. Course samples are built as raw records and run through the
//! normalizer so the derived fields cannot drift from their scores.

use crate::models::{CourseRecord, GraduationCheckItem, GraduationStatus, RawCourseRecord};
use crate::records::normalize;

fn raw(
    lecid: &str,
    name: &str,
    credit: u32,
    score: f64,
    lec_type: &str,
    year: u32,
    semester: u32,
) -> RawCourseRecord {
    RawCourseRecord {
        lecid: lecid.to_string(),
        lecture_name: name.to_string(),
        credit,
        received_grade: score,
        lec_type: lec_type.to_string(),
        grade: year,
        semester,
    }
}

/// Sample course history for the 수강과목정리 page.
pub fn sample_course_records() -> Vec<CourseRecord> {
    let raw_records = vec![
        raw("SAMPLE-01", "자료구조", 3, 4.3, "전공기초", 2023, 1),
        raw("SAMPLE-02", "컴퓨터구조", 3, 3.3, "전공필수", 2023, 2),
        raw("SAMPLE-03", "오픈소스SW실습", 3, 4.0, "전공선택", 2024, 1),
        raw("SAMPLE-04", "일반교양영어", 2, 3.7, "교양", 2023, 1),
        raw("SAMPLE-05", "글쓰기기초", 2, 3.0, "교양", 2023, 2),
        raw("SAMPLE-06", "웹프로그래밍", 3, 4.3, "전공선택", 2024, 2),
    ];
    normalize(&raw_records)
}

/// Sample graduation status for the checklist page.
pub fn sample_graduation_status() -> GraduationStatus {
    let item = |category: &str, current, required, passed, message: &str| GraduationCheckItem {
        category: category.to_string(),
        current,
        required,
        passed,
        message: message.to_string(),
    };

    GraduationStatus {
        major_type: "심화컴퓨팅전공트랙 (예시)".to_string(),
        student_id: 2025000000,
        graduation_possible: false,
        check_list: vec![
            item("총 학점", 120, 130, false, "총 학점이 10학점 부족합니다."),
            item("전공 학점", 65, 70, false, "전공 학점이 부족합니다."),
            item("교양 학점", 30, 30, true, "이수 완료"),
            item("영어 성적", 850, 700, true, "기준 점수 충족 (토익)"),
            item("현장 실습", 1, 1, true, "인턴십 이수 완료"),
        ],
        missing_courses: vec![
            "캡스톤디자인".to_string(),
            "소프트웨어공학".to_string(),
            "운영체제".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::needs_retake;

    #[test]
    fn test_sample_records_have_consistent_derived_fields() {
        let records = sample_course_records();
        assert_eq!(records.len(), 6);
        for (idx, record) in records.iter().enumerate() {
            assert_eq!(record.id, idx);
            assert_eq!(
                record.letter_grade,
                crate::records::score_to_letter_grade(record.score)
            );
            assert_eq!(record.needs_retake, needs_retake(record.score));
        }
    }

    #[test]
    fn test_logged_out_checklist_gets_sample_unchanged() {
        use crate::session::{resolve_data_source, DataSource, Session};

        match resolve_data_source(&Session::default(), sample_graduation_status()) {
            DataSource::Sample(status) => assert_eq!(status, sample_graduation_status()),
            DataSource::Live => panic!("logged-out checklist must not hit the network"),
        }
    }

    #[test]
    fn test_sample_status_shape() {
        let status = sample_graduation_status();
        assert!(!status.graduation_possible);
        assert_eq!(status.check_list.len(), 5);
        assert_eq!(status.missing_courses.len(), 3);
        assert_eq!(status.check_list[0].category, "총 학점");
    }
}
