//! Board State Store
//!
//! Read-only projection of the board for the Leptos UI. The board's list
//! membership is the system of record; the store is refreshed from it after
//! every handled event.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::Board;
use crate::dom::Dom;
use crate::models::ListKind;

#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Card ids of the active list, in visual order
    pub active: Vec<String>,
    pub finished: Vec<String>,
    pub open_tooltips: usize,
}

pub type AppStore = Store<BoardState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Copy the board's membership into the store. Fields that did not change
/// are left alone so drag-over events do not notify subscribers.
pub fn store_sync<D: Dom>(store: &AppStore, board: &Board<D>) {
    let active = board.list(ListKind::Active).ids();
    if *store.active().read_untracked() != active {
        *store.active().write() = active;
    }

    let finished = board.list(ListKind::Finished).ids();
    if *store.finished().read_untracked() != finished {
        *store.finished().write() = finished;
    }

    let open = board.open_tooltips();
    if *store.open_tooltips().read_untracked() != open {
        *store.open_tooltips().write() = open;
    }
}

/// `(active, finished)` card counts, tracked
pub fn store_counts(store: &AppStore) -> (usize, usize) {
    (store.active().read().len(), store.finished().read().len())
}

/// Number of open tooltips, tracked
pub fn store_open_tooltips(store: &AppStore) -> usize {
    store.open_tooltips().get()
}
