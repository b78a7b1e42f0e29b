//! Property tests for the workflow's structural invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use discovery::testing::{items, RecordingSink};
use discovery::{aggregate_sources, partition, DiscoveryStore, Pager, Tab};

/// An item list plus an ignored set drawn from its ids.
fn items_with_ignored() -> impl Strategy<Value = (Vec<discovery::DiscoveredItem>, HashSet<String>)>
{
    (0usize..60).prop_flat_map(|n| {
        let list = items(n);
        proptest::collection::vec(proptest::bool::ANY, n).prop_map(move |mask| {
            let ignored: HashSet<String> = list
                .iter()
                .zip(&mask)
                .filter(|(_, keep)| **keep)
                .map(|(item, _)| item.id.clone())
                .collect();
            (list.clone(), ignored)
        })
    })
}

/// A random approve/ignore/restore/page/tab event stream over known ids.
#[derive(Debug, Clone)]
enum Event {
    Approve(usize),
    Ignore(usize),
    Restore(usize),
    SetPage(usize),
    SetTab(bool),
}

fn event_stream(n_items: usize) -> impl Strategy<Value = Vec<Event>> {
    let idx = 0..n_items.max(1);
    let event = prop_oneof![
        idx.clone().prop_map(Event::Approve),
        idx.clone().prop_map(Event::Ignore),
        idx.prop_map(Event::Restore),
        (0usize..20).prop_map(Event::SetPage),
        proptest::bool::ANY.prop_map(Event::SetTab),
    ];
    proptest::collection::vec(event, 0..40)
}

fn apply(store: &mut DiscoveryStore, sink: &mut RecordingSink, events: &[Event]) {
    for event in events {
        match event {
            Event::Approve(i) => store.approve(&i.to_string(), sink),
            Event::Ignore(i) => store.ignore(&i.to_string(), sink),
            Event::Restore(i) => store.restore(&i.to_string(), sink),
            Event::SetPage(p) => store.set_page(*p),
            Event::SetTab(ignored) => store.set_tab(if *ignored {
                Tab::Ignored
            } else {
                Tab::Awaiting
            }),
        }
    }
}

proptest! {
    #[test]
    fn partition_is_complete_and_disjoint((list, ignored) in items_with_ignored()) {
        let awaiting = partition(&list, &ignored, Tab::Awaiting);
        let shelved = partition(&list, &ignored, Tab::Ignored);

        prop_assert_eq!(awaiting.len() + shelved.len(), list.len());

        let awaiting_ids: HashSet<&str> = awaiting.iter().map(|i| i.id.as_str()).collect();
        let shelved_ids: HashSet<&str> = shelved.iter().map(|i| i.id.as_str()).collect();
        prop_assert!(awaiting_ids.is_disjoint(&shelved_ids));

        // Both partitions preserve input order
        let merged: Vec<&str> = list
            .iter()
            .map(|i| i.id.as_str())
            .filter(|id| awaiting_ids.contains(id))
            .collect();
        prop_assert_eq!(
            awaiting.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            merged
        );
    }

    #[test]
    fn pagination_bounds_hold(
        items_per_page in 1usize..50,
        len in 0usize..500,
        requested in 0usize..1000,
    ) {
        let mut pager = Pager::new(items_per_page);
        let total = pager.total_pages(len);
        prop_assert_eq!(total, len.div_ceil(items_per_page));

        pager.set_page(requested, len);
        prop_assert!(pager.current_page() >= 1);
        prop_assert!(pager.current_page() <= total.max(1));
    }

    #[test]
    fn page_slice_never_exceeds_page_size(
        items_per_page in 1usize..20,
        len in 0usize..100,
        requested in 0usize..20,
    ) {
        let backing: Vec<usize> = (0..len).collect();
        let mut pager = Pager::new(items_per_page);
        pager.set_page(requested, len);

        let slice = pager.slice(&backing);
        prop_assert!(slice.len() <= items_per_page);

        // Half-open range: slice starts exactly where the page math says
        if !slice.is_empty() {
            prop_assert_eq!(slice[0], (pager.current_page() - 1) * items_per_page);
        }
    }

    #[test]
    fn store_invariants_survive_any_event_stream(
        (n, events) in (0usize..40).prop_flat_map(|n| (Just(n), event_stream(n))),
    ) {
        let mut store = DiscoveryStore::new(items(n), 15);
        let mut sink = RecordingSink::new();
        apply(&mut store, &mut sink, &events);

        // Page stays in bounds for the active partition
        let total = store.total_pages();
        prop_assert!(store.current_page() >= 1);
        prop_assert!(store.current_page() <= total.max(1));

        // The two tabs stay complementary over the unapproved remainder
        let visible = store.tab_count(Tab::Awaiting) + store.tab_count(Tab::Ignored);
        prop_assert!(visible <= n);

        // Source volume is untouched by review actions
        prop_assert_eq!(store.source_stats(), aggregate_sources(store.items()));
    }

    #[test]
    fn ignore_then_restore_is_identity(
        n in 1usize..30,
        pick in 0usize..30,
    ) {
        let list = items(n);
        let id = (pick % n).to_string();
        let mut store = DiscoveryStore::new(list, 15);
        let mut sink = RecordingSink::new();

        let before: Vec<String> = store.filtered().iter().map(|i| i.id.clone()).collect();
        store.ignore(&id, &mut sink);
        store.restore(&id, &mut sink);
        let after: Vec<String> = store.filtered().iter().map(|i| i.id.clone()).collect();

        prop_assert_eq!(before, after);
        prop_assert_eq!(store.tab_count(Tab::Ignored), 0);
    }
}
