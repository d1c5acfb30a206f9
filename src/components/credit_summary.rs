//! Credit Summary Component
//!
//! Dashboard cards fed by the graduation-status endpoint. Only rendered
//! for authenticated sessions; the gate lives in the pages.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{EachCredits, TotalCredits};
use crate::context::AppContext;
use crate::models::GraduationStatus;
use crate::records::find_check_item;
use crate::session::LoadState;

#[component]
pub fn CreditSummary() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (status, set_status) = signal(LoadState::<GraduationStatus>::Idle);

    // Load on mount and whenever the identity changes
    Effect::new(move |_| {
        let _ = ctx.epoch.get();
        if !ctx.session.get().is_authenticated() {
            set_status.set(LoadState::Idle);
            return;
        }
        set_status.set(LoadState::Loading);
        let epoch = ctx.current_epoch();
        spawn_local(async move {
            let result = api::fetch_my_status().await;
            // Response for a since-changed session is a no-op
            if !ctx.is_current(epoch) {
                return;
            }
            match result {
                Ok(data) => set_status.set(LoadState::Loaded(data)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[CreditSummary] {}", e).into());
                    set_status.set(LoadState::Failed("데이터를 불러오는데 실패했습니다.".to_string()));
                }
            }
        });
    });

    view! {
        <div class="credit-summary">
            {move || match status.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <div class="loading">"데이터를 불러오는 중..."</div> }.into_any()
                }
                LoadState::Failed(msg) => {
                    view! { <div class="load-error">{msg}</div> }.into_any()
                }
                LoadState::Loaded(data) => {
                    let total = find_check_item(&data.check_list, "총 학점").cloned();
                    let major = find_check_item(&data.check_list, "전공 학점")
                        .map(|item| item.current)
                        .unwrap_or(0);
                    let liberal = find_check_item(&data.check_list, "교양 학점")
                        .map(|item| item.current)
                        .unwrap_or(0);
                    view! {
                        <div class="credit-summary-cards">
                            {total.map(|item| view! {
                                <TotalCredits completed=item.current total=item.required />
                            })}
                            <EachCredits title="전공 학점" score=major />
                            <EachCredits title="교양 학점" score=liberal />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
