//! End-to-end scenarios for the discovery review workflow.

use discovery::testing::{items, RecordingSink};
use discovery::{DiscoveryStore, SourceTag, Tab};

#[test]
fn full_first_page_with_exactly_one_page() {
    // 15 awaiting items at 15 per page: a single page holding all of them
    let store = DiscoveryStore::new(items(15), 15);

    assert_eq!(store.total_pages(), 1);
    assert_eq!(store.page_slice().len(), 15);
}

#[test]
fn page_two_request_on_single_page_clamps_to_one() {
    let mut store = DiscoveryStore::new(items(15), 15);
    store.set_page(2);
    assert_eq!(store.current_page(), 1);
    assert_eq!(store.page_slice().len(), 15);
}

#[test]
fn ignoring_mid_list_item_keeps_valid_page() {
    // 45 awaiting items, 15 per page, admin is on page 2 of 3
    let mut store = DiscoveryStore::new(items(45), 15);
    let mut sink = RecordingSink::new();
    store.set_page(2);

    store.ignore("20", &mut sink);

    // 44 items still need 3 pages; page 2 remains meaningful
    assert_eq!(store.total_pages(), 3);
    assert_eq!(store.current_page(), 2);
    assert!(store.page_slice().iter().all(|i| i.id != "20"));

    store.set_tab(Tab::Ignored);
    assert_eq!(store.filtered().len(), 1);
    assert_eq!(store.filtered()[0].id, "20");
}

#[test]
fn restore_round_trips_to_the_original_partitions() {
    let mut store = DiscoveryStore::new(items(10), 15);
    let mut sink = RecordingSink::new();

    let awaiting_before: Vec<String> =
        store.filtered().iter().map(|i| i.id.clone()).collect();

    store.ignore("4", &mut sink);
    store.restore("4", &mut sink);

    let awaiting_after: Vec<String> =
        store.filtered().iter().map(|i| i.id.clone()).collect();
    assert_eq!(awaiting_before, awaiting_after);
    assert_eq!(store.tab_count(Tab::Ignored), 0);
    assert_eq!(
        sink.titles(),
        vec!["Application ignored", "Application restored"]
    );
}

#[test]
fn review_session_walkthrough() {
    let mut store = DiscoveryStore::new(items(20), 15);
    let mut sink = RecordingSink::new();

    // Triage a few discoveries
    store.approve("0", &mut sink);
    store.ignore("1", &mut sink);
    store.ignore("2", &mut sink);

    assert_eq!(store.tab_count(Tab::Awaiting), 17);
    assert_eq!(store.tab_count(Tab::Ignored), 2);

    // Inspect the users behind one of them
    store.select_for_detail("3");
    let selected = store.selected_item().expect("dialog shows item 3");
    assert_eq!(selected.id, "3");
    assert!(selected.users[0].count >= 1);
    store.close_detail();

    // Second thoughts about an ignored one
    store.set_tab(Tab::Ignored);
    store.restore("1", &mut sink);
    assert_eq!(store.tab_count(Tab::Ignored), 1);
    assert_eq!(store.tab_count(Tab::Awaiting), 18);

    // Source volume never budged
    let stats = store.source_stats();
    assert_eq!(stats.count(SourceTag::GoogleWorkspace), 20);
    assert_eq!(sink.notifications.len(), 4);
}
