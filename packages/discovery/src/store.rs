//! The discovery store: session state plus the approve/ignore/restore
//! dispatcher.
//!
//! The store exclusively owns the mutable workflow state (ignored/approved
//! membership, tab, page position, selection). The item list is an immutable
//! snapshot fed in once per session. All transitions are synchronous and run
//! to completion; derived views are computed on read.

use std::collections::HashSet;

use tracing::debug;

use crate::notify::{Notification, NotificationSink};
use crate::pager::Pager;
use crate::partition::partition;
use crate::selection::Selection;
use crate::sources::{aggregate_sources, SourceStats};
use crate::types::{DiscoveredItem, Tab};

/// Session-local review state over a discovered-item snapshot.
pub struct DiscoveryStore {
    items: Vec<DiscoveredItem>,
    ignored: HashSet<String>,
    approved: HashSet<String>,
    tab: Tab,
    pager: Pager,
    selection: Selection,
}

impl DiscoveryStore {
    /// Build a store over a feed snapshot. Starts on the Awaiting tab,
    /// page 1, nothing ignored or approved.
    pub fn new(items: Vec<DiscoveredItem>, items_per_page: usize) -> Self {
        DiscoveryStore {
            items,
            ignored: HashSet::new(),
            approved: HashSet::new(),
            tab: Tab::default(),
            pager: Pager::new(items_per_page),
            selection: Selection::new(),
        }
    }

    // ------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------

    /// The full immutable snapshot, review state notwithstanding.
    pub fn items(&self) -> &[DiscoveredItem] {
        &self.items
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn items_per_page(&self) -> usize {
        self.pager.items_per_page()
    }

    /// Items in the active tab's partition, original order preserved.
    /// Approved items have left the review queue and appear in neither tab.
    pub fn filtered(&self) -> Vec<&DiscoveredItem> {
        partition(&self.items, &self.ignored, self.tab)
            .into_iter()
            .filter(|item| !self.approved.contains(&item.id))
            .collect()
    }

    /// The current page of the active partition.
    pub fn page_slice(&self) -> Vec<&DiscoveredItem> {
        let filtered = self.filtered();
        self.pager.slice(&filtered).to_vec()
    }

    /// Pages in the active partition; 0 when it is empty.
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered().len())
    }

    /// Count badge for a tab, approved items excluded.
    pub fn tab_count(&self, tab: Tab) -> usize {
        partition(&self.items, &self.ignored, tab)
            .iter()
            .filter(|item| !self.approved.contains(&item.id))
            .count()
    }

    /// Discovery volume per integration, over the full snapshot. Unaffected
    /// by tab, ignore, or approval state.
    pub fn source_stats(&self) -> SourceStats {
        aggregate_sources(&self.items)
    }

    // ------------------------------------------------------------------
    // Tab / page entry points
    // ------------------------------------------------------------------

    /// Switch tabs. The partitions are independent sequences, so the page
    /// position always resets to 1.
    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab == tab {
            return;
        }
        debug!(?tab, "switching review tab");
        self.tab = tab;
        self.pager.reset();
    }

    /// Request a page change; out-of-bounds requests are clamped.
    pub fn set_page(&mut self, requested: usize) {
        let len = self.filtered().len();
        self.pager.set_page(requested, len);
    }

    // ------------------------------------------------------------------
    // Action dispatcher
    // ------------------------------------------------------------------

    /// Approve a discovery: it leaves the review queue for good (but stays
    /// in the snapshot and in source stats). No-op for unknown, ignored, or
    /// already-approved ids.
    pub fn approve(&mut self, id: &str, sink: &mut dyn NotificationSink) {
        let Some(name) = self.item_name(id) else {
            return;
        };
        if self.ignored.contains(id) {
            return;
        }
        if self.approved.insert(id.to_string()) {
            debug!(id, "discovery approved");
            self.pager.clamp_to(self.filtered().len());
            sink.notify(Notification::new(
                "Application approved",
                format!("{name} has been approved."),
            ));
        }
    }

    /// Move a discovery to the Ignored partition. Idempotent; notifies only
    /// on the transition. No-op for unknown ids.
    pub fn ignore(&mut self, id: &str, sink: &mut dyn NotificationSink) {
        let Some(name) = self.item_name(id) else {
            return;
        };
        if self.ignored.insert(id.to_string()) {
            debug!(id, "discovery ignored");
            self.pager.clamp_to(self.filtered().len());
            sink.notify(Notification::new(
                "Application ignored",
                format!("{name} has been moved to the ignored list."),
            ));
        }
    }

    /// Move an ignored discovery back to Awaiting. Idempotent; notifies only
    /// on the transition. No-op for unknown ids.
    pub fn restore(&mut self, id: &str, sink: &mut dyn NotificationSink) {
        let Some(name) = self.item_name(id) else {
            return;
        };
        if self.ignored.remove(id) {
            debug!(id, "discovery restored");
            self.pager.clamp_to(self.filtered().len());
            sink.notify(Notification::new(
                "Application restored",
                format!("{name} is awaiting review again."),
            ));
        }
    }

    // ------------------------------------------------------------------
    // Detail dialog
    // ------------------------------------------------------------------

    /// Open the users dialog for an item. No-op for unknown ids.
    pub fn select_for_detail(&mut self, id: &str) {
        if self.item_name(id).is_some() {
            self.selection.select(id);
        }
    }

    pub fn close_detail(&mut self) {
        self.selection.clear();
    }

    pub fn is_detail_open(&self) -> bool {
        self.selection.is_open()
    }

    /// The item shown in the detail dialog, if one is open.
    pub fn selected_item(&self) -> Option<&DiscoveredItem> {
        let id = self.selection.selected_id()?;
        self.items.iter().find(|item| item.id == id)
    }

    fn item_name(&self, id: &str) -> Option<String> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{item, items, RecordingSink};
    use crate::types::Tab;

    fn ids(items: &[&DiscoveredItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_ignore_moves_item_between_partitions() {
        let mut store = DiscoveryStore::new(items(3), 15);
        let mut sink = RecordingSink::new();

        store.ignore("1", &mut sink);

        assert_eq!(ids(&store.filtered()), vec!["0", "2"]);
        store.set_tab(Tab::Ignored);
        assert_eq!(ids(&store.filtered()), vec!["1"]);
        assert_eq!(sink.titles(), vec!["Application ignored"]);
    }

    #[test]
    fn test_ignore_is_idempotent_and_notifies_once() {
        let mut store = DiscoveryStore::new(items(3), 15);
        let mut sink = RecordingSink::new();

        store.ignore("1", &mut sink);
        store.ignore("1", &mut sink);

        assert_eq!(sink.notifications.len(), 1);
        assert_eq!(store.tab_count(Tab::Ignored), 1);
    }

    #[test]
    fn test_restore_is_idempotent_and_notifies_once() {
        let mut store = DiscoveryStore::new(items(3), 15);
        let mut sink = RecordingSink::new();

        store.ignore("1", &mut sink);
        store.restore("1", &mut sink);
        store.restore("1", &mut sink);

        assert_eq!(
            sink.titles(),
            vec!["Application ignored", "Application restored"]
        );
        assert_eq!(store.tab_count(Tab::Ignored), 0);
    }

    #[test]
    fn test_unknown_id_is_a_silent_noop() {
        let mut store = DiscoveryStore::new(items(2), 15);
        let mut sink = RecordingSink::new();

        store.ignore("nope", &mut sink);
        store.restore("nope", &mut sink);
        store.approve("nope", &mut sink);

        assert!(sink.notifications.is_empty());
        assert_eq!(store.tab_count(Tab::Awaiting), 2);
        assert_eq!(store.tab_count(Tab::Ignored), 0);
    }

    #[test]
    fn test_approve_removes_from_review_queue_but_not_snapshot() {
        let mut store = DiscoveryStore::new(items(3), 15);
        let mut sink = RecordingSink::new();

        store.approve("0", &mut sink);

        assert_eq!(ids(&store.filtered()), vec!["1", "2"]);
        store.set_tab(Tab::Ignored);
        assert!(store.filtered().is_empty());
        assert_eq!(store.items().len(), 3);
        assert_eq!(sink.titles(), vec!["Application approved"]);
    }

    #[test]
    fn test_approve_is_idempotent_and_skips_ignored_items() {
        let mut store = DiscoveryStore::new(items(3), 15);
        let mut sink = RecordingSink::new();

        store.approve("0", &mut sink);
        store.approve("0", &mut sink);
        store.ignore("1", &mut sink);
        store.approve("1", &mut sink);

        assert_eq!(
            sink.titles(),
            vec!["Application approved", "Application ignored"]
        );
        assert_eq!(store.tab_count(Tab::Ignored), 1);
    }

    #[test]
    fn test_tab_switch_resets_page() {
        let mut store = DiscoveryStore::new(items(45), 15);
        let mut sink = RecordingSink::new();
        store.ignore("0", &mut sink);

        store.set_page(2);
        assert_eq!(store.current_page(), 2);

        store.set_tab(Tab::Ignored);
        assert_eq!(store.current_page(), 1);

        // Setting the already-active tab is a no-op
        store.set_page(1);
        store.set_tab(Tab::Ignored);
        assert_eq!(store.current_page(), 1);
    }

    #[test]
    fn test_mutation_clamps_page_when_partition_shrinks() {
        // 16 awaiting items, 15 per page: page 2 holds one item
        let mut store = DiscoveryStore::new(items(16), 15);
        let mut sink = RecordingSink::new();

        store.set_page(2);
        store.ignore("15", &mut sink);

        assert_eq!(store.current_page(), 1);
        assert_eq!(store.total_pages(), 1);
    }

    #[test]
    fn test_source_stats_ignore_review_state() {
        let mut store = DiscoveryStore::new(items(4), 15);
        let mut sink = RecordingSink::new();
        let before = store.source_stats();

        store.ignore("0", &mut sink);
        store.approve("1", &mut sink);
        store.set_tab(Tab::Ignored);

        assert_eq!(store.source_stats(), before);
    }

    #[test]
    fn test_detail_selection_lifecycle() {
        let mut store = DiscoveryStore::new(vec![item("a"), item("b")], 15);

        store.select_for_detail("a");
        assert!(store.is_detail_open());
        assert_eq!(store.selected_item().map(|i| i.id.as_str()), Some("a"));

        // Selecting another item replaces, never stacks
        store.select_for_detail("b");
        assert_eq!(store.selected_item().map(|i| i.id.as_str()), Some("b"));

        // Unknown ids leave the dialog alone
        store.select_for_detail("zzz");
        assert_eq!(store.selected_item().map(|i| i.id.as_str()), Some("b"));

        store.close_detail();
        assert!(!store.is_detail_open());
        assert!(store.selected_item().is_none());
    }

    #[test]
    fn test_empty_feed_degrades_cleanly() {
        let store = DiscoveryStore::new(Vec::new(), 15);
        assert!(store.filtered().is_empty());
        assert!(store.page_slice().is_empty());
        assert_eq!(store.total_pages(), 0);
        assert_eq!(store.source_stats(), SourceStats::default());
    }
}
