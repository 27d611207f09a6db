//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Notice;

/// A notice on screen, keyed for dismissal
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub notice: Notice,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Notices currently shown by the toaster, oldest first
    pub notices: Vec<ToastEntry>,
    /// Last id handed out to a notice
    pub next_notice_id: u32,
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

/// Show a notice; returns its id
pub fn store_push_notice(store: &AppStore, notice: Notice) -> u32 {
    let next_id = store.next_notice_id();
    let id = next_id.get_untracked().wrapping_add(1);
    next_id.set(id);
    store.notices().update(|notices| notices.push(ToastEntry { id, notice }));
    id
}

/// Remove a notice by ID
pub fn store_dismiss_notice(store: &AppStore, id: u32) {
    store.notices().update(|notices| notices.retain(|entry| entry.id != id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_get_distinct_ids_and_dismiss_by_id() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());

        let first = store_push_notice(&store, Notice::success("Todo created successfully"));
        let second = store_push_notice(&store, Notice::error("Failed to delete todo"));
        assert_ne!(first, second);
        assert_eq!(store.notices().get_untracked().len(), 2);

        store_dismiss_notice(&store, first);
        let left = store.notices().get_untracked();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, second);
        assert_eq!(left[0].notice, Notice::error("Failed to delete todo"));
    }
}
