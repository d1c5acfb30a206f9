//! Session Gate
//!
//! Decides, per personalized view, whether to show live data, a fixed
//! sample dataset, or a login prompt. Pure logic; the signals live in
//! [`crate::context`].

/// Current user identity. Unauthenticated at startup; changed only through
/// the explicit login/logout entry points on the app context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub user_id: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn login(user_id: String) -> Session {
        Session { user_id: Some(user_id) }
    }

    pub fn logout() -> Session {
        Session { user_id: None }
    }
}

/// Data-sourcing policy for one personalized view, resolved once per mount.
/// Sample and live data are never mixed in one response.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource<T> {
    /// Authenticated: fetch from the backend
    Live,
    /// Unauthenticated: use the fixed sample set, no network request
    Sample(T),
}

/// Unauthenticated sessions get the sample dataset unchanged; authenticated
/// sessions go to the network. A live fetch failure surfaces as
/// [`LoadState::Failed`], never as a silent sample fallback.
pub fn resolve_data_source<T>(session: &Session, sample: T) -> DataSource<T> {
    if session.is_authenticated() {
        DataSource::Live
    } else {
        DataSource::Sample(sample)
    }
}

/// Per-view load cycle: `Idle -> Loading -> Loaded | Failed`.
/// Terminal states re-enter `Loading` only on an explicit trigger
/// (identity change or manual reload); there is no automatic retry.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_transitions() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.user_id, None);

        let session = Session::login("knu2023".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.user_id.as_deref(), Some("knu2023"));

        let session = Session::logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_unauthenticated_gets_sample_unchanged() {
        let sample = vec!["자료구조", "컴퓨터구조"];
        match resolve_data_source(&Session::default(), sample.clone()) {
            DataSource::Sample(data) => assert_eq!(data, sample),
            DataSource::Live => panic!("unauthenticated session must not hit the network"),
        }
    }

    #[test]
    fn test_authenticated_goes_live() {
        let session = Session::login("knu2023".to_string());
        assert_eq!(resolve_data_source(&session, ()), DataSource::Live);
    }

    #[test]
    fn test_load_state_accessors() {
        let state: LoadState<u32> = LoadState::Loading;
        assert!(state.is_loading());
        assert_eq!(state.loaded(), None);

        let state = LoadState::Loaded(42u32);
        assert_eq!(state.loaded(), Some(&42));
        assert_eq!(state.error(), None);

        let state: LoadState<u32> = LoadState::Failed("수강 이력 불러오기 실패".to_string());
        assert_eq!(state.error(), Some("수강 이력 불러오기 실패"));
    }
}
