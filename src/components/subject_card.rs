//! Subject Card Component
//!
//! One course record in the 수강과목정리 list.

use leptos::prelude::*;

use crate::models::CourseRecord;

#[component]
pub fn SubjectCard(record: CourseRecord) -> impl IntoView {
    let CourseRecord {
        name,
        credit,
        letter_grade,
        category,
        needs_retake,
        year,
        semester_label,
        ..
    } = record;

    view! {
        <div class="subject-card">
            <div class="subject-name">{name}</div>

            <div class="subject-meta">
                <span class="subject-credit-pill">{credit}"학점"</span>
                <span class="subject-grade-pill">"성적 "{letter_grade}</span>
                <span class="subject-semester">{year}"학년 "{semester_label}</span>
            </div>

            <div class="button-container">
                <span class="category-badge">{category}</span>
                {needs_retake.then(|| view! {
                    <span class="retake-badge">"재수강 필요"</span>
                })}
            </div>
        </div>
    }
}
