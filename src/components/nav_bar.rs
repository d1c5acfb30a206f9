//! Navigation Bar Component
//!
//! Top bar for switching pages, with session status and logout.

use leptos::prelude::*;

use crate::context::{AppContext, Page};
use crate::store::{store_clear, use_app_store};

/// Pages reachable from the bar
const NAV_ITEMS: &[(Page, &str)] = &[
    (Page::Main, "홈"),
    (Page::Scores, "수강과목정리"),
    (Page::Checklist, "졸업요건 check"),
    (Page::MyPage, "마이페이지"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let logout = move |_| {
        ctx.logout();
        store_clear(&store);
        ctx.navigate(Page::Main);
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-logo" on:click=move |_| ctx.navigate(Page::Main)>"KNU JOLUV"</span>

            <div class="nav-links">
                {NAV_ITEMS.iter().map(|(page, label)| {
                    let page = *page;
                    let is_active = move || ctx.page.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                            on:click=move |_| ctx.navigate(page)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="nav-session">
                {move || match ctx.session.get().user_id {
                    Some(user_id) => view! {
                        <span class="nav-user">{user_id}" 님"</span>
                        <button class="nav-btn" on:click=logout>"로그아웃"</button>
                    }.into_any(),
                    None => view! {
                        <button class="nav-btn" on:click=move |_| ctx.navigate(Page::Login)>
                            "로그인"
                        </button>
                    }.into_any(),
                }}
            </div>
        </nav>
    }
}
