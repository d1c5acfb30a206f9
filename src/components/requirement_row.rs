//! Requirement Row Component
//!
//! One graduation-checklist requirement with its progress bar.

use leptos::prelude::*;

use crate::models::GraduationCheckItem;
use crate::records::progress_percent;

#[component]
pub fn RequirementRow(item: GraduationCheckItem) -> impl IntoView {
    let percentage = progress_percent(&item);
    let status = if item.passed { "완료" } else { "미완료" };
    let badge_class = if item.passed {
        "status-badge passed"
    } else {
        "status-badge failed"
    };
    let fill_class = if item.passed {
        "progress-fill passed"
    } else {
        "progress-fill failed"
    };
    let progress = format!("{} / {}", item.current, item.required);

    view! {
        <div class="requirement-row">
            <div class="requirement-main">
                <div class="requirement-head">
                    <span class="requirement-title">{item.category}</span>
                    <span class="requirement-progress">{progress}</span>
                </div>
                <div class="progress-track">
                    <div class=fill_class style=format!("width: {}%;", percentage)></div>
                </div>
                <p class="requirement-message">{item.message}</p>
            </div>
            <span class=badge_class>{status}</span>
        </div>
    }
}
