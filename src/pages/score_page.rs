//! Score Management Page (수강과목정리)
//!
//! Credit summary on top, course list below. Logged-out sessions see the
//! sample records behind a banner.

use leptos::prelude::*;

use crate::components::{CourseList, CreditSummary, LoginPrompt, SampleBanner};
use crate::context::AppContext;

#[component]
pub fn ScorePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="score-page">
            {move || if ctx.session.get().is_authenticated() {
                view! { <CreditSummary /> }.into_any()
            } else {
                view! { <LoginPrompt /> }.into_any()
            }}

            <div class="score-page-list">
                <Show when=move || !ctx.session.get().is_authenticated()>
                    <SampleBanner />
                </Show>

                <CourseList />
            </div>
        </div>
    }
}
