//! Error types for the discovery workflow.
//!
//! The workflow itself is total: unknown ids are no-ops and page requests are
//! clamped, so nothing inside the store can fail. The only fallible edge is
//! the ingestion boundary, where loosely-typed feed records are validated
//! into [`crate::DiscoveredItem`]s.

use thiserror::Error;

/// Errors raised while validating a feed record into a `DiscoveredItem`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("Feed record has an empty id")]
    EmptyId,

    #[error("Feed record '{id}' has an empty display name")]
    EmptyName { id: String },

    #[error("Feed record '{id}' reports zero usages for {email}")]
    ZeroUsageCount { id: String, email: String },
}
