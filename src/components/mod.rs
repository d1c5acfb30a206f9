//! UI Components
//!
//! Reusable Leptos components.

mod course_list;
mod credit_summary;
mod each_credits;
mod login_prompt;
mod login_request;
mod nav_bar;
mod requirement_row;
mod sample_banner;
mod subject_card;
mod total_credits;

pub use course_list::CourseList;
pub use credit_summary::CreditSummary;
pub use each_credits::EachCredits;
pub use login_prompt::LoginPrompt;
pub use login_request::LoginRequest;
pub use nav_bar::NavBar;
pub use requirement_row::RequirementRow;
pub use sample_banner::SampleBanner;
pub use subject_card::SubjectCard;
pub use total_credits::TotalCredits;
