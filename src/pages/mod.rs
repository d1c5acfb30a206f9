//! Page Views
//!
//! One module per routed view.

mod checklist_page;
mod login_page;
mod main_page;
mod my_page;
mod score_page;
mod signup_page;

pub use checklist_page::ChecklistPage;
pub use login_page::LoginPage;
pub use main_page::MainPage;
pub use my_page::MyPage;
pub use score_page::ScorePage;
pub use signup_page::SignupPage;
