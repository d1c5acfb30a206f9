//! Sample Data Banner Component
//!
//! Tells logged-out users that they are looking at example data.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

#[component]
pub fn SampleBanner(#[prop(default = false)] with_login_button: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="sample-banner">
            <div class="sample-banner-text">
                <p class="sample-banner-title">"현재는 예시 데이터가 표시되고 있습니다."</p>
                <p class="sample-banner-sub">"내 진짜 졸업 요건을 확인하려면 로그인해주세요."</p>
            </div>
            {with_login_button.then(|| view! {
                <button class="sample-banner-btn" on:click=move |_| ctx.navigate(Page::Login)>
                    "로그인 하기"
                </button>
            })}
        </div>
    }
}
