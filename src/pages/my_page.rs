//! My Page
//!
//! Profile, track selection, TOEIC score, internship flag, GPA figures
//! and extracurricular activities. Requires an authenticated session.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, CreateActivityArgs};
use crate::components::LoginRequest;
use crate::context::AppContext;
use crate::models::UserProfile;
use crate::session::LoadState;
use crate::store::{
    store_add_activity, AppStateStoreFields, store_remove_activity, store_set_activities, store_set_profile,
    use_app_store,
};
use crate::tracks::track_options;

#[component]
pub fn MyPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || if ctx.session.get().is_authenticated() {
            view! { <MyPageContent /> }.into_any()
        } else {
            view! { <LoginRequest /> }.into_any()
        }}
    }
}

#[component]
fn MyPageContent() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (profile_state, set_profile_state) = signal(LoadState::<UserProfile>::Idle);
    let (selected_track, set_selected_track) = signal(String::new());
    let (eng_score_input, set_eng_score_input) = signal(String::new());
    let (internship_checked, set_internship_checked) = signal(false);
    let (toast, set_toast) = signal::<Option<String>>(None);

    // Activity form
    let (act_category, set_act_category) = signal("대회".to_string());
    let (act_title, set_act_title) = signal(String::new());
    let (act_detail, set_act_detail) = signal(String::new());
    let (act_year, set_act_year) = signal(String::new());

    let show_toast = move |message: &str| {
        set_toast.set(Some(message.to_string()));
        spawn_local(async move {
            TimeoutFuture::new(3_000).await;
            set_toast.set(None);
        });
    };

    // Load profile and activities on mount and whenever the identity changes
    Effect::new(move |_| {
        let _ = ctx.epoch.get();
        set_profile_state.set(LoadState::Loading);
        let epoch = ctx.current_epoch();
        spawn_local(async move {
            let result = api::fetch_profile().await;
            if !ctx.is_current(epoch) {
                return;
            }
            match result {
                Ok(profile) => {
                    let track = if profile.track.is_empty() {
                        track_options(&profile.major)[0].to_string()
                    } else {
                        profile.track.clone()
                    };
                    set_selected_track.set(track);
                    set_eng_score_input.set(profile.eng_score.to_string());
                    set_internship_checked.set(profile.internship);

                    let student_id = profile.student_id.clone();
                    store_set_profile(&store, Some(profile.clone()));
                    set_profile_state.set(LoadState::Loaded(profile));

                    match api::list_activities(&student_id).await {
                        Ok(activities) => {
                            if ctx.is_current(epoch) {
                                store_set_activities(&store, activities);
                            }
                        }
                        Err(e) => {
                            web_sys::console::error_1(&format!("[MyPage] {}", e).into());
                        }
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[MyPage] {}", e).into());
                    set_profile_state
                        .set(LoadState::Failed("데이터를 불러오는데 실패했습니다.".to_string()));
                }
            }
        });
    });

    // One save action shared by the track/score/internship buttons
    let save_profile = move |_: web_sys::MouseEvent| {
        let Some(profile) = store.profile().get() else {
            return;
        };
        let track = selected_track.get();
        let score = eng_score_input.get().parse::<u32>().unwrap_or(0);
        let internship = internship_checked.get();
        spawn_local(async move {
            match api::update_profile(&profile.major, &track, score, internship).await {
                Ok(()) => {
                    if let Some(p) = &mut *store.profile().write() {
                        p.track = track;
                        p.eng_score = score;
                        p.internship = internship;
                    }
                    show_toast("성공적으로 저장되었습니다! 🎉");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[MyPage] {}", e).into());
                    show_toast("저장 중 오류가 발생했습니다.");
                }
            }
        });
    };

    let add_activity = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(profile) = store.profile().get() else {
            return;
        };
        let title = act_title.get();
        let year_input = act_year.get();
        if title.is_empty() || year_input.is_empty() {
            return;
        }
        let Ok(year) = year_input.parse::<u32>() else {
            show_toast("연도는 숫자로 입력해주세요.");
            return;
        };
        let category = act_category.get();
        let detail = act_detail.get();
        spawn_local(async move {
            let args = CreateActivityArgs {
                student_id: &profile.student_id,
                category: &category,
                title: &title,
                detail: &detail,
                year,
            };
            match api::create_activity(&args).await {
                Ok(created) => {
                    store_add_activity(&store, created);
                    set_act_title.set(String::new());
                    set_act_detail.set(String::new());
                    set_act_year.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[MyPage] {}", e).into());
                    show_toast("활동 저장 중 오류가 발생했습니다.");
                }
            }
        });
    };

    view! {
        <div class="mypage-layout">
            {move || toast.get().map(|message| view! {
                <div class="toast-notification">
                    <span class="toast-icon">"✅"</span>
                    {message}
                </div>
            })}

            {move || match profile_state.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <div class="loading">"로딩 중..."</div> }.into_any()
                }
                LoadState::Failed(msg) => {
                    view! { <div class="load-error">{msg}</div> }.into_any()
                }
                LoadState::Loaded(_) => view! {
                    <div class="mypage-columns">
                        // Left: profile and editable requirement inputs
                        <div class="mypage-box left">
                            <header class="mypage-header">
                                <div class="profile-img"></div>
                                <div>
                                    <h1>
                                        {move || store.profile().get()
                                            .map(|p| format!("{} 님", p.name))
                                            .unwrap_or_default()}
                                    </h1>
                                    <p class="student-id">
                                        {move || store.profile().get()
                                            .map(|p| format!("학번: {}", p.student_id))
                                            .unwrap_or_default()}
                                    </p>
                                    <p class="major">
                                        {move || store.profile().get()
                                            .map(|p| p.major)
                                            .unwrap_or_default()}
                                    </p>
                                </div>
                            </header>

                            <section class="mypage-track">
                                <h2>"세부 트랙 정보"</h2>
                                <select
                                    prop:value=move || selected_track.get()
                                    on:change=move |ev| {
                                        let target = ev.target().unwrap();
                                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                        set_selected_track.set(select.value());
                                    }
                                >
                                    {move || {
                                        let major = store.profile().get()
                                            .map(|p| p.major)
                                            .unwrap_or_default();
                                        track_options(&major).iter().map(|option| {
                                            view! { <option value=*option>{*option}</option> }
                                        }).collect_view()
                                    }}
                                </select>
                                <button class="save-btn" on:click=save_profile>"트랙 변경 저장"</button>
                            </section>

                            <section class="mypage-score">
                                <h2>"공인어학성적 관리"</h2>
                                <label>"TOEIC"</label>
                                <div class="score-input-group">
                                    <input
                                        type="number"
                                        placeholder="0"
                                        prop:value=move || eng_score_input.get()
                                        on:input=move |ev| {
                                            let target = ev.target().unwrap();
                                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                            set_eng_score_input.set(input.value());
                                        }
                                    />
                                    <span class="score-unit">"점"</span>
                                </div>
                                <button class="save-btn" on:click=save_profile>"성적 저장"</button>
                            </section>

                            <section class="mypage-internship">
                                <h2>"현장실습 관리"</h2>
                                <label class="checkbox-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || internship_checked.get()
                                        on:change=move |ev| {
                                            let target = ev.target().unwrap();
                                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                            set_internship_checked.set(input.checked());
                                        }
                                    />
                                    <span>"현장실습(인턴십) 이수 완료"</span>
                                </label>
                                <button class="save-btn" on:click=save_profile>"실습 여부 저장"</button>
                            </section>
                        </div>

                        // Right: GPA figures and activity history
                        <div class="mypage-box right">
                            <section class="mypage-gpa">
                                <h2>"학점 현황"</h2>
                                <div class="gpa-container">
                                    <div class="gpa-item">
                                        <span class="gpa-label">"전체 학점"</span>
                                        <span class="gpa-value">
                                            {move || store.profile().get()
                                                .map(|p| format!("{:.2}", p.total_gpa))
                                                .unwrap_or_else(|| "0.00".to_string())}
                                        </span>
                                        <span class="gpa-max">" / 4.3"</span>
                                    </div>
                                    <div class="gpa-item">
                                        <span class="gpa-label">"전공 학점"</span>
                                        <span class="gpa-value highlight">
                                            {move || store.profile().get()
                                                .map(|p| format!("{:.2}", p.major_gpa))
                                                .unwrap_or_else(|| "0.00".to_string())}
                                        </span>
                                        <span class="gpa-max">" / 4.3"</span>
                                    </div>
                                </div>
                            </section>

                            <section class="mypage-activities">
                                <h2>"경력 및 활동"</h2>
                                <div class="activity-list">
                                    {move || if store.activities().get().is_empty() {
                                        view! {
                                            <p class="no-activities">"등록된 경력 및 활동이 없습니다."</p>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <For
                                                each=move || store.activities().get()
                                                key=|activity| activity.id
                                                children=move |activity| {
                                                    let id = activity.id;
                                                    let delete = move |_| {
                                                        spawn_local(async move {
                                                            match api::delete_activity(id).await {
                                                                Ok(()) => store_remove_activity(&store, id),
                                                                Err(e) => web_sys::console::error_1(
                                                                    &format!("[MyPage] {}", e).into(),
                                                                ),
                                                            }
                                                        });
                                                    };
                                                    view! {
                                                        <div class="activity-item">
                                                            <span class="activity-badge">{activity.category.clone()}</span>
                                                            <div class="activity-info">
                                                                <div class="activity-title">{activity.title.clone()}</div>
                                                                <div class="activity-detail">{activity.detail.clone()}</div>
                                                                <div class="activity-year">{activity.year}</div>
                                                            </div>
                                                            <button class="activity-delete" on:click=delete>"삭제"</button>
                                                        </div>
                                                    }
                                                }
                                            />
                                        }.into_any()
                                    }}
                                </div>

                                <form class="activity-form" on:submit=add_activity>
                                    <div class="activity-form-row">
                                        <select
                                            prop:value=move || act_category.get()
                                            on:change=move |ev| {
                                                let target = ev.target().unwrap();
                                                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                                set_act_category.set(select.value());
                                            }
                                        >
                                            <option value="대회">"대회"</option>
                                            <option value="인턴십">"인턴십"</option>
                                        </select>
                                        <input
                                            type="text"
                                            placeholder="활동/경력명"
                                            prop:value=move || act_title.get()
                                            on:input=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                set_act_title.set(input.value());
                                            }
                                        />
                                    </div>
                                    <div class="activity-form-row">
                                        <input
                                            type="text"
                                            placeholder="기관/세부"
                                            prop:value=move || act_detail.get()
                                            on:input=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                set_act_detail.set(input.value());
                                            }
                                        />
                                        <input
                                            type="text"
                                            placeholder="연도"
                                            prop:value=move || act_year.get()
                                            on:input=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                set_act_year.set(input.value());
                                            }
                                        />
                                        <button type="submit">"추가"</button>
                                    </div>
                                </form>
                            </section>
                        </div>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
