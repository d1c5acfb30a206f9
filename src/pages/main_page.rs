//! Main Page
//!
//! Landing view with navigation cards and the gated credit summary.

use leptos::prelude::*;

use crate::components::{CreditSummary, LoginPrompt};
use crate::context::{AppContext, Page};

/// Navigation cards of the landing page
const CARDS: &[(Page, &str, &str)] = &[
    (Page::Scores, "📚", "수강과목정리"),
    (Page::Checklist, "✅", "졸업요건 check"),
    (Page::Scores, "🎓", "학점기록"),
    (Page::MyPage, "👤", "마이페이지"),
];

#[component]
pub fn MainPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="main-page">
            <div class="main-title">
                <h1>"KNU JOLUV"</h1>
                <p class="main-motto">"\"성공적인 졸업을 위한 길라잡이입니다.\""</p>
                <p class="main-motto-en">"\"Your Roadmap to a Successful Graduation.\""</p>
            </div>

            <div class="main-cards">
                {CARDS.iter().map(|(page, icon, label)| {
                    let page = *page;
                    view! {
                        <div class="main-card" on:click=move |_| ctx.navigate(page)>
                            <span class="main-card-icon">{*icon}</span>
                            <h2>{*label}</h2>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="main-summary">
                <h3>"📊 나의 이수 현황"</h3>
                {move || if ctx.session.get().is_authenticated() {
                    view! { <CreditSummary /> }.into_any()
                } else {
                    view! { <LoginPrompt /> }.into_any()
                }}
            </div>
        </div>
    }
}
