//! Global state management
//!
//! Bridges the pure `discovery` workflow core into Dioxus signals: the store
//! lives in one signal, toasts implement the core's notification sink, and
//! components only ever talk to [`DiscoveryState`].

use dioxus::prelude::*;

use discovery::{
    DiscoveredItem, DiscoveryStore, Notification, NotificationSink, SourceStats, Tab,
};

/// Items per page in the discovery tables
pub const DISCOVERY_PAGE_SIZE: usize = 15;

// ============================================================================
// Toasts
// ============================================================================

/// A toast currently on screen
#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// Toast stack state, provided at the admin layout level
#[derive(Clone, Copy)]
pub struct ToastState {
    pub toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast {
            id,
            title: title.into(),
            description: description.into(),
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

impl NotificationSink for ToastState {
    fn notify(&mut self, notification: Notification) {
        self.push(notification.title, notification.description);
    }
}

/// Hook to access the toast context
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
}

// ============================================================================
// Discovery workflow
// ============================================================================

/// Signal wrapper around the discovery review store.
///
/// Copy so event handlers can capture it freely; all components on the page
/// observe the same underlying store signal.
#[derive(Clone, Copy)]
pub struct DiscoveryState {
    store: Signal<DiscoveryStore>,
    toasts: ToastState,
}

impl DiscoveryState {
    fn new(items: Vec<DiscoveredItem>, toasts: ToastState) -> Self {
        Self {
            store: Signal::new(DiscoveryStore::new(items, DISCOVERY_PAGE_SIZE)),
            toasts,
        }
    }

    // -- reads ---------------------------------------------------------

    pub fn tab(&self) -> Tab {
        self.store.read().tab()
    }

    pub fn tab_count(&self, tab: Tab) -> usize {
        self.store.read().tab_count(tab)
    }

    pub fn current_page(&self) -> usize {
        self.store.read().current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.store.read().total_pages()
    }

    /// The current page of the active partition, cloned out of the store.
    pub fn page_items(&self) -> Vec<DiscoveredItem> {
        self.store.read().page_slice().into_iter().cloned().collect()
    }

    pub fn source_stats(&self) -> SourceStats {
        self.store.read().source_stats()
    }

    pub fn selected_item(&self) -> Option<DiscoveredItem> {
        self.store.read().selected_item().cloned()
    }

    pub fn is_detail_open(&self) -> bool {
        self.store.read().is_detail_open()
    }

    // -- writes --------------------------------------------------------

    pub fn set_tab(&mut self, tab: Tab) {
        self.store.write().set_tab(tab);
    }

    pub fn set_page(&mut self, page: usize) {
        self.store.write().set_page(page);
    }

    pub fn approve(&mut self, id: &str) {
        let mut toasts = self.toasts;
        self.store.write().approve(id, &mut toasts);
    }

    pub fn ignore(&mut self, id: &str) {
        let mut toasts = self.toasts;
        self.store.write().ignore(id, &mut toasts);
    }

    pub fn restore(&mut self, id: &str) {
        let mut toasts = self.toasts;
        self.store.write().restore(id, &mut toasts);
    }

    pub fn select_for_detail(&mut self, id: &str) {
        self.store.write().select_for_detail(id);
    }

    pub fn close_detail(&mut self) {
        self.store.write().close_detail();
    }
}

/// Hook that owns the review store for a discovery page.
///
/// The item snapshot is captured once; later renders reuse the same store.
pub fn use_discovery_state(items: Vec<DiscoveredItem>) -> DiscoveryState {
    let toasts = use_toasts();
    use_hook(move || DiscoveryState::new(items, toasts))
}
