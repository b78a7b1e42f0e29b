//! Test doubles and fixture builders.
//!
//! Kept in the library (not `#[cfg(test)]`) so the integration tests under
//! `tests/` can reuse them.

use crate::notify::{Notification, NotificationSink};
use crate::types::{DiscoveredItem, DiscoveryUser, SourceTag};

/// Sink that records every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub notifications: Vec<Notification>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.notifications.iter().map(|n| n.title.as_str()).collect()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

/// Minimal valid item with the given id.
pub fn item(id: &str) -> DiscoveredItem {
    item_with_sources(id, &[SourceTag::GoogleWorkspace])
}

/// Item with the given id and source tags.
pub fn item_with_sources(id: &str, sources: &[SourceTag]) -> DiscoveredItem {
    DiscoveredItem::new(
        id,
        format!("App {id}"),
        sources.to_vec(),
        vec![DiscoveryUser {
            email: format!("{id}@example.com"),
            count: 1,
        }],
        "2 days ago",
    )
    .expect("fixture item is valid")
}

/// `n` items with ids `"0"`, `"1"`, ...
pub fn items(n: usize) -> Vec<DiscoveredItem> {
    (0..n).map(|i| item(&i.to_string())).collect()
}
