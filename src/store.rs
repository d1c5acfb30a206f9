//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Activity, UserProfile};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Profile of the logged-in user, once loaded
    pub profile: Option<UserProfile>,
    /// Extracurricular activities of the logged-in user
    pub activities: Vec<Activity>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the loaded profile
pub fn store_set_profile(store: &AppStore, profile: Option<UserProfile>) {
    *store.profile().write() = profile;
}

/// Replace the activity list after a reload
pub fn store_set_activities(store: &AppStore, activities: Vec<Activity>) {
    *store.activities().write() = activities;
}

/// Add an activity to the front of the list (newest first)
pub fn store_add_activity(store: &AppStore, activity: Activity) {
    store.activities().write().insert(0, activity);
}

/// Update an activity in the store by ID
pub fn store_update_activity(store: &AppStore, updated: Activity) {
    store.activities().write().iter_mut()
        .find(|a| a.id == updated.id)
        .map(|a| *a = updated);
}

/// Remove an activity from the store by ID
pub fn store_remove_activity(store: &AppStore, activity_id: u32) {
    store.activities().write().retain(|a| a.id != activity_id);
}

/// Clear everything session-scoped (called on logout)
pub fn store_clear(store: &AppStore) {
    *store.profile().write() = None;
    store.activities().write().clear();
}
