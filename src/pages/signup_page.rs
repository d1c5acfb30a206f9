//! Signup Page
//!
//! Account creation form. Duplicate accounts surface inline; success
//! navigates to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::context::{AppContext, Page};
use crate::models::SignupForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (user_id, set_user_id) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (student_id, set_student_id) = signal(String::new());
    let (major, set_major) = signal(String::new());
    let (error_message, set_error_message) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(String::new());

        let form = SignupForm {
            user_id: user_id.get(),
            password: password.get(),
            name: name.get(),
            student_id: student_id.get(),
            major: major.get(),
        };
        // Required fields are checked before anything leaves the client
        if let Err(msg) = form.validate() {
            set_error_message.set(msg.to_string());
            return;
        }

        spawn_local(async move {
            match api::signup(&form).await {
                Ok(()) => {
                    ctx.navigate(Page::Login);
                }
                Err(ApiError::Conflict(msg)) => {
                    set_error_message.set(msg);
                }
                Err(e @ ApiError::Network(_)) => {
                    set_error_message.set(e.to_string());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Signup] {}", e).into());
                    set_error_message.set("회원가입 중 오류가 발생했습니다.".to_string());
                }
            }
        });
    };

    let text_input = move |placeholder: &'static str,
                           value: ReadSignal<String>,
                           set_value: WriteSignal<String>,
                           is_password: bool| {
        let input_type = if is_password { "password" } else { "text" };
        view! {
            <input
                type=input_type
                placeholder=placeholder
                class="field"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_value.set(input.value());
                }
            />
        }
    };

    view! {
        <div class="signup-page">
            <div class="signup-box">
                <h2>"회원가입"</h2>

                <form on:submit=submit>
                    {text_input("아이디", user_id, set_user_id, false)}
                    {text_input("비밀번호", password, set_password, true)}
                    {text_input("이름", name, set_name, false)}
                    {text_input("학번 (예: 2023123456)", student_id, set_student_id, false)}
                    {text_input("전공 (예: 컴퓨터학부)", major, set_major, false)}

                    {move || {
                        let msg = error_message.get();
                        (!msg.is_empty()).then(|| view! {
                            <div class="field-error-message">{msg}</div>
                        })
                    }}

                    <button type="submit" class="primary">"회원가입"</button>
                </form>

                <p class="signup-login-link">
                    "이미 계정이 있으신가요? "
                    <a on:click=move |_| ctx.navigate(Page::Login)>"로그인"</a>
                </p>
            </div>
        </div>
    }
}
