//! Checklist Page (졸업요건 check)
//!
//! Graduation-requirement breakdown. Logged-out sessions see the fixed
//! sample status behind a banner; a live fetch failure never falls back
//! to the sample.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{RequirementRow, SampleBanner};
use crate::context::AppContext;
use crate::models::GraduationStatus;
use crate::sample;
use crate::session::{resolve_data_source, DataSource, LoadState};

#[component]
pub fn ChecklistPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (status, set_status) = signal(LoadState::<GraduationStatus>::Idle);

    Effect::new(move |_| {
        let _ = ctx.epoch.get();
        let session = ctx.session.get();
        match resolve_data_source(&session, sample::sample_graduation_status()) {
            DataSource::Sample(sample_status) => {
                // Sample status unchanged, no network request
                set_status.set(LoadState::Loaded(sample_status));
            }
            DataSource::Live => {
                set_status.set(LoadState::Loading);
                let epoch = ctx.current_epoch();
                spawn_local(async move {
                    let result = api::fetch_my_status().await;
                    if !ctx.is_current(epoch) {
                        return;
                    }
                    match result {
                        Ok(data) => set_status.set(LoadState::Loaded(data)),
                        Err(e) => {
                            web_sys::console::error_1(&format!("[Checklist] {}", e).into());
                            set_status
                                .set(LoadState::Failed("데이터를 불러오는데 실패했습니다.".to_string()));
                        }
                    }
                });
            }
        }
    });

    view! {
        <div class="checklist-page">
            <Show when=move || !ctx.session.get().is_authenticated()>
                <SampleBanner with_login_button=true />
            </Show>

            {move || match status.get() {
                LoadState::Idle | LoadState::Loading => {
                    view! { <div class="loading">"로딩 중..."</div> }.into_any()
                }
                LoadState::Failed(msg) => {
                    view! { <div class="load-error">{msg}</div> }.into_any()
                }
                LoadState::Loaded(data) => {
                    let verdict = if data.graduation_possible {
                        "🎉 졸업 가능합니다!"
                    } else {
                        "⚠️ 아직 부족한 요건이 있습니다."
                    };
                    let verdict_class = if data.graduation_possible {
                        "verdict possible"
                    } else {
                        "verdict lacking"
                    };
                    let missing = data.missing_courses.clone();
                    view! {
                        <section class="checklist-profile">
                            <div class="checklist-profile-icon">"🎓"</div>
                            <div>
                                <h2>{data.student_id}" 님"</h2>
                                <p>
                                    "판정된 전공 트랙: "
                                    <span class="track-name">{data.major_type.clone()}</span>
                                </p>
                                <p class=verdict_class>{verdict}</p>
                            </div>
                        </section>

                        <h1>"졸업 요건 상세 점검"</h1>
                        <section class="checklist-rows">
                            <div class="checklist-rows-head">
                                <span>"체크 항목"</span>
                                <span>"상태"</span>
                            </div>
                            {data.check_list.iter().map(|item| {
                                view! { <RequirementRow item=item.clone() /> }
                            }).collect_view()}
                        </section>

                        {(!missing.is_empty()).then(|| view! {
                            <section class="missing-courses">
                                <h3>"🚨 미이수 필수 과목"</h3>
                                <ul>
                                    {missing.iter().map(|course| {
                                        view! { <li>{course.clone()}</li> }
                                    }).collect_view()}
                                </ul>
                            </section>
                        })}
                    }.into_any()
                }
            }}
        </div>
    }
}
