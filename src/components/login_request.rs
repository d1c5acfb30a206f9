//! Login Request Component
//!
//! Full lock screen for pages that require an authenticated session.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

#[component]
pub fn LoginRequest() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="login-request">
            <div class="login-request-box">
                <div class="login-request-icon">"🔒"</div>
                <h2>"로그인이 필요합니다"</h2>
                <p>
                    "개인 맞춤형 정보(학점, 졸업요건 등)를"<br/>
                    "확인하려면 로그인이 필요해요."
                </p>
                <div class="login-request-actions">
                    <button class="primary" on:click=move |_| ctx.navigate(Page::Login)>
                        "로그인 하기"
                    </button>
                    <button on:click=move |_| ctx.navigate(Page::Main)>
                        "뒤로 가기"
                    </button>
                </div>
            </div>
        </div>
    }
}
