//! Each Credits Component
//!
//! Single credit figure card (전공/교양).

use leptos::prelude::*;

#[component]
pub fn EachCredits(title: &'static str, score: u32) -> impl IntoView {
    view! {
        <div class="each-credits">
            <h2>{title}</h2>
            <span class="each-credits-value">{score}"학점"</span>
        </div>
    }
}
