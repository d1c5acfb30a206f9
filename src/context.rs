//! Application Context
//!
//! Shared state provided via Leptos Context API. The session is mutated
//! only through [`AppContext::login`] and [`AppContext::logout`].

use leptos::prelude::*;

use crate::session::Session;

/// Views of the single-page app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Main,
    Scores,
    Checklist,
    Login,
    Signup,
    MyPage,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current session - read
    pub session: ReadSignal<Session>,
    /// Current session - write
    set_session: WriteSignal<Session>,
    /// Session epoch; bumped on every login/logout - read
    pub epoch: ReadSignal<u32>,
    /// Session epoch - write
    set_epoch: WriteSignal<u32>,
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(
        session: (ReadSignal<Session>, WriteSignal<Session>),
        epoch: (ReadSignal<u32>, WriteSignal<u32>),
        page: (ReadSignal<Page>, WriteSignal<Page>),
    ) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
            epoch: epoch.0,
            set_epoch: epoch.1,
            page: page.0,
            set_page: page.1,
        }
    }

    /// Establish a session for the given user id.
    /// Any response in flight for the previous identity becomes stale.
    pub fn login(&self, user_id: String) {
        self.set_session.set(Session::login(user_id));
        self.set_epoch.update(|v| *v += 1);
    }

    /// Clear the session. Stale responses are dropped via the epoch.
    pub fn logout(&self) {
        self.set_session.set(Session::logout());
        self.set_epoch.update(|v| *v += 1);
    }

    /// Switch the visible page.
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Snapshot of the epoch for stale-response checks around an await.
    pub fn current_epoch(&self) -> u32 {
        self.epoch.get_untracked()
    }

    /// True if the response started at `epoch` still belongs to the
    /// current session.
    pub fn is_current(&self, epoch: u32) -> bool {
        self.current_epoch() == epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context() -> AppContext {
        AppContext::new(signal(Session::default()), signal(0u32), signal(Page::Main))
    }

    #[test]
    fn test_login_logout_bump_epoch() {
        let ctx = make_context();
        assert!(!ctx.session.get_untracked().is_authenticated());
        assert_eq!(ctx.current_epoch(), 0);

        ctx.login("knu2023".to_string());
        assert_eq!(
            ctx.session.get_untracked().user_id.as_deref(),
            Some("knu2023")
        );
        assert_eq!(ctx.current_epoch(), 1);
        // A response captured before login is now stale
        assert!(!ctx.is_current(0));

        ctx.logout();
        assert!(!ctx.session.get_untracked().is_authenticated());
        assert_eq!(ctx.current_epoch(), 2);
    }

    #[test]
    fn test_navigate() {
        let ctx = make_context();
        assert_eq!(ctx.page.get_untracked(), Page::Main);
        ctx.navigate(Page::Checklist);
        assert_eq!(ctx.page.get_untracked(), Page::Checklist);
    }
}
