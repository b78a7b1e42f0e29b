//! Approval-review workflow state for discovered application usage.
//!
//! Integrations (Google Workspace, Microsoft, a browser extension) report
//! application usage they detect; each report lands here as an immutable
//! [`DiscoveredItem`]. Admins then work through the review queue, approving,
//! ignoring, or restoring discoveries. This crate owns that workflow state
//! and nothing else: no IO, no rendering, no persistence. The frontend feeds
//! it a snapshot once per session and forwards user events to it.
//!
//! All state transitions are synchronous and run to completion; derived views
//! (partition, page slice, source counts) are computed on read from committed
//! state, so a stale read is unrepresentable.
//!
//! # Modules
//!
//! - [`types`] - Discovery entities and the feed-record validation boundary
//! - [`partition`] - Order-preserving awaiting/ignored partition
//! - [`pager`] - Fixed-size page arithmetic with clamping
//! - [`sources`] - Per-source occurrence counts
//! - [`selection`] - Detail-dialog selection state
//! - [`store`] - The store gluing the above together, plus the
//!   approve/ignore/restore dispatcher
//! - [`notify`] - Outbound notification sink trait
//! - [`testing`] - Test doubles (recording sink, item builders)

pub mod error;
pub mod notify;
pub mod pager;
pub mod partition;
pub mod selection;
pub mod sources;
pub mod store;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use error::FeedError;
pub use notify::{Notification, NotificationSink};
pub use pager::Pager;
pub use partition::partition;
pub use selection::Selection;
pub use sources::{aggregate_sources, SourceStats};
pub use store::DiscoveryStore;
pub use types::{DiscoveredItem, DiscoveryUser, SourceTag, Tab};
