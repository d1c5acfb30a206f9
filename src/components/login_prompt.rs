//! Login Prompt Component
//!
//! Inline box shown in place of personalized charts for logged-out users.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

#[component]
pub fn LoginPrompt() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="login-prompt">
            <p class="login-prompt-text">"로그인 후 내 졸업 요건 진행률을 확인해보세요!"</p>
            <button class="login-prompt-btn" on:click=move |_| ctx.navigate(Page::Login)>
                "로그인 하러 가기"
            </button>
        </div>
    }
}
