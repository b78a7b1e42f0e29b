//! Outbound notification sink.
//!
//! Notifications are fire-and-forget: the workflow hands them to the sink on
//! state transitions and never learns whether delivery succeeded. The
//! frontend implements the sink with a toast signal; tests use
//! [`crate::testing::RecordingSink`].

use serde::{Deserialize, Serialize};

/// A user-facing notification emitted on a workflow transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Where workflow notifications go.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}
