//! Course Record Transformer
//!
//! Pure helpers that turn raw history items into UI-ready course records
//! and support the filter/sort controls of the course list.

use crate::models::{CourseRecord, GraduationCheckItem, RawCourseRecord};

/// Letter-grade bands in descending order; first match wins.
/// Lower bound of each band is inclusive.
const GRADE_BANDS: &[(f64, &str)] = &[
    (4.3, "A+"),
    (4.0, "A0"),
    (3.7, "A-"),
    (3.3, "B+"),
    (3.0, "B0"),
    (2.7, "B-"),
    (2.4, "C+"),
    (2.0, "C0"),
    (1.7, "C-"),
    (1.3, "D+"),
    (1.0, "D0"),
];

/// Map grade points (0.0-4.5 scale) to a letter grade.
pub fn score_to_letter_grade(score: f64) -> &'static str {
    for (min, letter) in GRADE_BANDS {
        if score >= *min {
            return letter;
        }
    }
    "F"
}

/// B- (2.7) or below counts as needing a retake.
/// The boundary is inclusive: exactly 2.7 qualifies.
pub fn needs_retake(score: f64) -> bool {
    score <= 2.7
}

/// Human-readable semester label; anything outside 1/2 is a seasonal term.
pub fn semester_label(semester: u32) -> &'static str {
    match semester {
        1 => "1학기",
        2 => "2학기",
        _ => "계절학기",
    }
}

/// Map raw history items 1:1 into UI records.
/// Ids are assigned by zero-based input position and are stable per load only.
pub fn normalize(raw: &[RawCourseRecord]) -> Vec<CourseRecord> {
    raw.iter()
        .enumerate()
        .map(|(idx, item)| CourseRecord {
            id: idx,
            name: item.lecture_name.clone(),
            credit: item.credit,
            letter_grade: score_to_letter_grade(item.received_grade).to_string(),
            score: item.received_grade,
            category: item.lec_type.clone(),
            needs_retake: needs_retake(item.received_grade),
            year: item.grade,
            semester_label: semester_label(item.semester).to_string(),
        })
        .collect()
}

/// Category tabs of the course list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    /// Any category containing "전공" (전공기초, 전공필수, 전공선택, ...)
    Major,
    /// Everything that is not 전공
    Liberal,
}

impl CategoryFilter {
    /// Tab order in the course list
    pub const TABS: &'static [CategoryFilter] =
        &[CategoryFilter::All, CategoryFilter::Major, CategoryFilter::Liberal];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "전체",
            CategoryFilter::Major => "전공",
            CategoryFilter::Liberal => "교양",
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Major => category.contains("전공"),
            CategoryFilter::Liberal => !category.contains("전공"),
        }
    }
}

/// Keep records whose category matches the selected tab.
/// Major and Liberal form a binary partition of All.
pub fn filter_by_category(records: &[CourseRecord], selection: CategoryFilter) -> Vec<CourseRecord> {
    records
        .iter()
        .filter(|r| selection.matches(&r.category))
        .cloned()
        .collect()
}

/// Case-insensitive substring match on the course name; empty query matches all.
pub fn filter_by_search(records: &[CourseRecord], query: &str) -> Vec<CourseRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Sort criteria of the course list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by course name
    Name,
    /// Descending by grade points
    Grade,
    /// Descending by credit
    Credit,
}

impl SortKey {
    pub fn from_value(value: &str) -> SortKey {
        match value {
            "grade" => SortKey::Grade,
            "credit" => SortKey::Credit,
            _ => SortKey::Name,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Grade => "grade",
            SortKey::Credit => "credit",
        }
    }
}

/// Return a reordering of the records by the given key. Stable sort, so
/// sorting an already-sorted list is a no-op.
pub fn sort_records(records: &[CourseRecord], key: SortKey) -> Vec<CourseRecord> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Grade => sorted.sort_by(|a, b| b.score.total_cmp(&a.score)),
        SortKey::Credit => sorted.sort_by(|a, b| b.credit.cmp(&a.credit)),
    }
    sorted
}

/// Progress-bar percentage for one checklist row, clamped to 100.
/// Rows without a numeric requirement are all-or-nothing.
pub fn progress_percent(item: &GraduationCheckItem) -> f64 {
    if item.required > 0 {
        (item.current as f64 / item.required as f64 * 100.0).min(100.0)
    } else if item.passed {
        100.0
    } else {
        0.0
    }
}

/// Find a checklist row by its category label (e.g. "총 학점").
pub fn find_check_item<'a>(
    check_list: &'a [GraduationCheckItem],
    category: &str,
) -> Option<&'a GraduationCheckItem> {
    check_list.iter().find(|item| item.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_raw(name: &str, received_grade: f64, lec_type: &str, semester: u32) -> RawCourseRecord {
        RawCourseRecord {
            lecid: format!("LEC-{}", name),
            lecture_name: name.to_string(),
            credit: 3,
            received_grade,
            lec_type: lec_type.to_string(),
            grade: 2023,
            semester,
        }
    }

    fn make_record(id: usize, name: &str, score: f64, credit: u32, category: &str) -> CourseRecord {
        CourseRecord {
            id,
            name: name.to_string(),
            credit,
            letter_grade: score_to_letter_grade(score).to_string(),
            score,
            category: category.to_string(),
            needs_retake: needs_retake(score),
            year: 2023,
            semester_label: "1학기".to_string(),
        }
    }

    #[test]
    fn test_letter_grade_bands() {
        assert_eq!(score_to_letter_grade(4.5), "A+");
        assert_eq!(score_to_letter_grade(4.3), "A+");
        assert_eq!(score_to_letter_grade(4.2), "A0");
        assert_eq!(score_to_letter_grade(4.0), "A0");
        assert_eq!(score_to_letter_grade(3.7), "A-");
        assert_eq!(score_to_letter_grade(3.3), "B+");
        assert_eq!(score_to_letter_grade(3.0), "B0");
        assert_eq!(score_to_letter_grade(2.7), "B-");
        assert_eq!(score_to_letter_grade(2.4), "C+");
        assert_eq!(score_to_letter_grade(2.0), "C0");
        assert_eq!(score_to_letter_grade(1.7), "C-");
        assert_eq!(score_to_letter_grade(1.3), "D+");
        assert_eq!(score_to_letter_grade(1.0), "D0");
        assert_eq!(score_to_letter_grade(0.9), "F");
        assert_eq!(score_to_letter_grade(0.0), "F");
    }

    #[test]
    fn test_letter_grade_exhaustive_no_gaps() {
        // Sweeping the scale in small steps: every score falls in exactly
        // one known band, and the band never gets better as the score drops.
        let order = [
            "A+", "A0", "A-", "B+", "B0", "B-", "C+", "C0", "C-", "D+", "D0", "F",
        ];
        let mut last_rank = 0;
        for step in (0..=450).rev() {
            let score = step as f64 / 100.0;
            let letter = score_to_letter_grade(score);
            let rank = order
                .iter()
                .position(|l| *l == letter)
                .unwrap_or_else(|| panic!("unknown band {} for {}", letter, score));
            assert!(rank >= last_rank, "band improved as score dropped at {}", score);
            last_rank = rank;
        }
        assert_eq!(last_rank, order.len() - 1);
    }

    #[test]
    fn test_retake_boundary() {
        // Exactly 2.7 displays as B- but still needs a retake.
        assert_eq!(score_to_letter_grade(2.7), "B-");
        assert!(needs_retake(2.7));
        assert!(needs_retake(2.69));
        assert!(needs_retake(0.0));
        assert!(!needs_retake(2.71));
        assert!(!needs_retake(4.3));
    }

    #[test]
    fn test_semester_label() {
        assert_eq!(semester_label(1), "1학기");
        assert_eq!(semester_label(2), "2학기");
        assert_eq!(semester_label(3), "계절학기");
        assert_eq!(semester_label(0), "계절학기");
    }

    #[test]
    fn test_normalize_assigns_ids_in_order() {
        let raw = vec![
            make_raw("자료구조", 4.3, "전공기초", 1),
            make_raw("컴퓨터구조", 3.3, "전공필수", 2),
            make_raw("글쓰기기초", 2.7, "교양", 3),
        ];
        let records = normalize(&raw);

        assert_eq!(records.len(), 3);
        let ids: Vec<usize> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);

        assert_eq!(records[0].letter_grade, "A+");
        assert!(!records[0].needs_retake);
        assert_eq!(records[2].letter_grade, "B-");
        assert!(records[2].needs_retake);
        assert_eq!(records[2].semester_label, "계절학기");
    }

    #[test]
    fn test_category_filter_partition() {
        let records = vec![
            make_record(0, "자료구조", 4.3, 3, "전공기초"),
            make_record(1, "오픈소스SW실습", 4.0, 3, "전공선택"),
            make_record(2, "일반교양영어", 3.7, 2, "일반교양"),
            make_record(3, "글쓰기기초", 3.0, 2, "교양"),
        ];

        let all = filter_by_category(&records, CategoryFilter::All);
        let major = filter_by_category(&records, CategoryFilter::Major);
        let liberal = filter_by_category(&records, CategoryFilter::Liberal);

        assert_eq!(all.len(), 4);
        assert_eq!(major.len() + liberal.len(), all.len());
        assert!(major.iter().all(|r| r.category.contains("전공")));
        assert!(liberal.iter().all(|r| !r.category.contains("전공")));

        // "전공선택" is 전공, "일반교양" is 교양
        assert!(major.iter().any(|r| r.name == "오픈소스SW실습"));
        assert!(liberal.iter().any(|r| r.name == "일반교양영어"));
        assert!(!liberal.iter().any(|r| r.category == "전공선택"));
    }

    #[test]
    fn test_search_filter() {
        let records = vec![
            make_record(0, "WebProgramming", 4.3, 3, "전공선택"),
            make_record(1, "자료구조", 4.0, 3, "전공기초"),
        ];

        assert_eq!(filter_by_search(&records, "").len(), 2);
        assert_eq!(filter_by_search(&records, "webpro").len(), 1);
        assert_eq!(filter_by_search(&records, "WEBPRO").len(), 1);
        assert_eq!(filter_by_search(&records, "자료").len(), 1);
        assert_eq!(filter_by_search(&records, "없는과목").len(), 0);
    }

    #[test]
    fn test_sort_records() {
        let records = vec![
            make_record(0, "나관리", 2.0, 2, "교양"),
            make_record(1, "가나다", 4.3, 3, "전공기초"),
            make_record(2, "다람쥐", 3.0, 1, "교양"),
        ];

        let by_name = sort_records(&records, SortKey::Name);
        let names: Vec<&str> = by_name.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["가나다", "나관리", "다람쥐"]);

        let by_grade = sort_records(&records, SortKey::Grade);
        let scores: Vec<f64> = by_grade.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![4.3, 3.0, 2.0]);

        let by_credit = sort_records(&records, SortKey::Credit);
        let credits: Vec<u32> = by_credit.iter().map(|r| r.credit).collect();
        assert_eq!(credits, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let records = vec![
            make_record(0, "운영체제", 3.3, 3, "전공필수"),
            make_record(1, "자료구조", 3.3, 3, "전공기초"),
            make_record(2, "글쓰기기초", 2.0, 2, "교양"),
        ];
        for key in [SortKey::Name, SortKey::Grade, SortKey::Credit] {
            let once = sort_records(&records, key);
            let twice = sort_records(&once, key);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_progress_percent() {
        let item = |current, required, passed| GraduationCheckItem {
            category: "총 학점".to_string(),
            current,
            required,
            passed,
            message: String::new(),
        };

        assert_eq!(progress_percent(&item(65, 130, false)), 50.0);
        // Over-achievement clamps to 100
        assert_eq!(progress_percent(&item(150, 130, true)), 100.0);
        // No numeric requirement: all-or-nothing
        assert_eq!(progress_percent(&item(0, 0, true)), 100.0);
        assert_eq!(progress_percent(&item(0, 0, false)), 0.0);
    }

    #[test]
    fn test_find_check_item() {
        let list = vec![
            GraduationCheckItem {
                category: "총 학점".to_string(),
                current: 120,
                required: 130,
                passed: false,
                message: String::new(),
            },
            GraduationCheckItem {
                category: "전공 학점".to_string(),
                current: 65,
                required: 70,
                passed: false,
                message: String::new(),
            },
        ];
        assert_eq!(find_check_item(&list, "전공 학점").map(|i| i.current), Some(65));
        assert!(find_check_item(&list, "영어 성적").is_none());
    }
}
