//! JOLUV Frontend App
//!
//! Root component: session context, global store and page switching.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::NavBar;
use crate::context::{AppContext, Page};
use crate::pages::{ChecklistPage, LoginPage, MainPage, MyPage, ScorePage, SignupPage};
use crate::session::Session;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (session, set_session) = signal(Session::default());
    let (epoch, set_epoch) = signal(0u32);
    let (page, set_page) = signal(Page::Main);

    // Provide context to all children
    provide_context(AppContext::new(
        (session, set_session),
        (epoch, set_epoch),
        (page, set_page),
    ));
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match page.get() {
                    Page::Main => view! { <MainPage /> }.into_any(),
                    Page::Scores => view! { <ScorePage /> }.into_any(),
                    Page::Checklist => view! { <ChecklistPage /> }.into_any(),
                    Page::Login => view! { <LoginPage /> }.into_any(),
                    Page::Signup => view! { <SignupPage /> }.into_any(),
                    Page::MyPage => view! { <MyPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
