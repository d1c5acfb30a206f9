//! Course List Component
//!
//! Course history with category tabs, name search and sorting.
//! Logged-out sessions see the fixed sample records without any request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::SubjectCard;
use crate::context::AppContext;
use crate::models::CourseRecord;
use crate::records::{
    filter_by_category, filter_by_search, normalize, sort_records, CategoryFilter, SortKey,
};
use crate::sample;
use crate::session::{resolve_data_source, DataSource, LoadState};

#[component]
pub fn CourseList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (records, set_records) = signal(LoadState::<Vec<CourseRecord>>::Idle);
    let (selected_category, set_selected_category) = signal(CategoryFilter::Major);
    let (search_query, set_search_query) = signal(String::new());
    let (sort_key, set_sort_key) = signal(SortKey::Name);

    // Resolve the data source on mount and whenever the identity changes
    Effect::new(move |_| {
        let _ = ctx.epoch.get();
        let session = ctx.session.get();
        match resolve_data_source(&session, sample::sample_course_records()) {
            DataSource::Sample(sample_records) => {
                // No network request for logged-out sessions
                set_records.set(LoadState::Loaded(sample_records));
            }
            DataSource::Live => {
                set_records.set(LoadState::Loading);
                let epoch = ctx.current_epoch();
                spawn_local(async move {
                    let result = api::fetch_course_history().await;
                    // Response for a since-changed session is a no-op
                    if !ctx.is_current(epoch) {
                        return;
                    }
                    match result {
                        Ok(raw) => {
                            web_sys::console::log_1(
                                &format!("[CourseList] Loaded {} records", raw.len()).into(),
                            );
                            set_records.set(LoadState::Loaded(normalize(&raw)));
                        }
                        Err(e) => {
                            web_sys::console::error_1(&format!("[CourseList] {}", e).into());
                            set_records.set(LoadState::Failed("수강 이력 불러오기 실패".to_string()));
                        }
                    }
                });
            }
        }
    });

    // Filter then search then sort, all pure
    let displayed = Memo::new(move |_| {
        let Some(loaded) = records.get().loaded().cloned() else {
            return Vec::new();
        };
        let filtered = filter_by_category(&loaded, selected_category.get());
        let searched = filter_by_search(&filtered, &search_query.get());
        sort_records(&searched, sort_key.get())
    });

    let is_empty = move || {
        displayed.get().is_empty()
            && !records.get().is_loading()
            && records.get().error().is_none()
    };

    view! {
        <div class="course-list">
            <header class="course-list-header">
                <div class="category-tabs">
                    {CategoryFilter::TABS.iter().map(|filter| {
                        let filter = *filter;
                        let is_selected = move || selected_category.get() == filter;
                        view! {
                            <button
                                class=move || if is_selected() { "tab-btn active" } else { "tab-btn" }
                                on:click=move |_| set_selected_category.set(filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="course-list-controls">
                    <input
                        type="text"
                        placeholder="과목명 검색..."
                        prop:value=move || search_query.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_search_query.set(input.value());
                        }
                    />

                    <select
                        prop:value=move || sort_key.get().value()
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            set_sort_key.set(SortKey::from_value(&select.value()));
                        }
                    >
                        <option value="name">"이름순"</option>
                        <option value="grade">"성적순"</option>
                        <option value="credit">"학점순"</option>
                    </select>
                </div>
            </header>

            <Show when=move || records.get().is_loading()>
                <div class="loading">"데이터를 불러오는 중..."</div>
            </Show>

            {move || records.get().error().map(|msg| view! {
                <div class="load-error">{msg.to_string()}</div>
            })}

            <div class="cards-container">
                {move || if is_empty() {
                    view! { <div class="no-courses">"해당하는 과목이 없습니다."</div> }.into_any()
                } else {
                    view! {
                        <For
                            each=move || displayed.get()
                            key=|record| record.id
                            children=move |record| {
                                view! { <SubjectCard record=record /> }
                            }
                        />
                    }.into_any()
                }}
            </div>
        </div>
    }
}
