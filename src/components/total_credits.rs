//! Total Credits Component
//!
//! Overall graduation-credit progress card.

use leptos::prelude::*;

#[component]
pub fn TotalCredits(completed: u32, total: u32) -> impl IntoView {
    let percentage = if total > 0 {
        (completed as f64 / total as f64 * 100.0).min(100.0)
    } else {
        0.0
    };

    view! {
        <div class="total-credits">
            <h2>"졸업 학점 이수 현황"</h2>

            <div class="total-credits-numbers">
                <span class="total-credits-done">{completed}"학점"</span>
                <span class="total-credits-goal">" / "{total}"학점"</span>
            </div>

            <div class="progress-track">
                <div class="progress-fill" style=format!("width: {}%;", percentage)></div>
            </div>

            <p class="total-credits-percent">{format!("{:.1}% 이수", percentage)}</p>
        </div>
    }
}
