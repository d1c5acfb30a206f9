//! Login Page
//!
//! Controlled login form with field-level error reporting, plus the
//! already-logged-in view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::context::{AppContext, Page};
use crate::store::{store_clear, use_app_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (user_id, set_user_id) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(String::new());
        let id = user_id.get();
        let pw = password.get();
        if id.is_empty() || pw.is_empty() {
            set_error_message.set("아이디와 비밀번호를 입력해주세요.".to_string());
            return;
        }

        spawn_local(async move {
            match api::login(&id, &pw).await {
                Ok(()) => {
                    ctx.login(id);
                    ctx.navigate(Page::Main);
                }
                Err(ApiError::Unauthorized) => {
                    set_error_message.set("아이디 또는 비밀번호가 일치하지 않습니다.".to_string());
                }
                Err(e @ ApiError::Network(_)) => {
                    set_error_message.set(e.to_string());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Login] {}", e).into());
                    set_error_message.set("로그인 처리 중 문제가 발생했습니다.".to_string());
                }
            }
        });
    };

    let logout = move |_| {
        ctx.logout();
        store_clear(&store);
    };

    let has_error = move || !error_message.get().is_empty();

    view! {
        <div class="login-page">
            {move || if let Some(current_user) = ctx.session.get().user_id {
                // Already logged in
                view! {
                    <div class="login-box logged-in">
                        <div class="login-unlocked-icon">"🔓"</div>
                        <h2>"이미 로그인 상태입니다"</h2>
                        <p>"환영합니다, "<span class="login-user">{current_user}</span>" 님!"</p>
                        <div class="login-actions">
                            <button class="primary" on:click=move |_| ctx.navigate(Page::MyPage)>
                                "마이페이지로 이동"
                            </button>
                            <button on:click=logout>"로그아웃"</button>
                        </div>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="login-box">
                        <h2>"로그인"</h2>
                        <p class="login-sub">"서비스 이용을 위해 로그인해주세요."</p>

                        <form on:submit=submit>
                            <input
                                type="text"
                                placeholder="아이디"
                                class=move || if has_error() { "field error" } else { "field" }
                                prop:value=move || user_id.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_user_id.set(input.value());
                                    // Typing clears the previous error
                                    set_error_message.set(String::new());
                                }
                            />
                            <input
                                type="password"
                                placeholder="비밀번호"
                                class=move || if has_error() { "field error" } else { "field" }
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_password.set(input.value());
                                    set_error_message.set(String::new());
                                }
                            />

                            <Show when=has_error>
                                <div class="field-error-message">{move || error_message.get()}</div>
                            </Show>

                            <button type="submit" class="primary">"로그인 하기"</button>
                        </form>

                        <p class="login-signup-link">
                            "계정이 없으신가요? "
                            <a on:click=move |_| ctx.navigate(Page::Signup)>"회원가입하기"</a>
                        </p>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
