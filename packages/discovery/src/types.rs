//! Discovery entities and the feed-record validation boundary.
//!
//! Feed payloads arrive loosely typed (string source tags, unchecked counts).
//! Everything past [`DiscoveredItem::new`] is validated and immutable for the
//! session: the workflow never mutates an item, it only re-labels its review
//! state through set membership in the store.

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

// ============================================================================
// Source tags
// ============================================================================

/// The integration/channel that reported a discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTag {
    GoogleWorkspace,
    Microsoft,
    ChromeExtension,
}

impl SourceTag {
    pub fn label(&self) -> &'static str {
        match self {
            SourceTag::GoogleWorkspace => "Google Workspace",
            SourceTag::Microsoft => "Microsoft",
            SourceTag::ChromeExtension => "Chrome Extension",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SourceTag::GoogleWorkspace => "\u{1F4E6}", // 📦
            SourceTag::Microsoft => "\u{1FA9F}",       // 🪟
            SourceTag::ChromeExtension => "\u{1F9E9}", // 🧩
        }
    }

    pub fn variants() -> &'static [SourceTag] {
        &[
            SourceTag::GoogleWorkspace,
            SourceTag::Microsoft,
            SourceTag::ChromeExtension,
        ]
    }

    /// Parse a wire tag. Unknown tags yield `None` so newer feed versions can
    /// add sources without breaking older dashboards.
    pub fn parse(tag: &str) -> Option<SourceTag> {
        match tag {
            "google_workspace" => Some(SourceTag::GoogleWorkspace),
            "microsoft" => Some(SourceTag::Microsoft),
            "chrome_extension" => Some(SourceTag::ChromeExtension),
            _ => None,
        }
    }
}

// ============================================================================
// Review tabs
// ============================================================================

/// The two mutually exclusive review states shown as tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Awaiting,
    Ignored,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Awaiting => "Awaiting Review",
            Tab::Ignored => "Ignored",
        }
    }

    pub fn variants() -> &'static [Tab] {
        &[Tab::Awaiting, Tab::Ignored]
    }
}

// ============================================================================
// Discovered items
// ============================================================================

/// A user who triggered a discovery, with the number of recorded usages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryUser {
    pub email: String,
    pub count: u32,
}

/// One detected application/service instance.
///
/// Immutable snapshot for the session. `last_used` is a display string from
/// the feed and is never parsed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredItem {
    pub id: String,
    pub name: String,
    pub sources: Vec<SourceTag>,
    pub users: Vec<DiscoveryUser>,
    pub last_used: String,
}

impl DiscoveredItem {
    /// Validate a feed record into an item.
    ///
    /// Duplicate source tags are collapsed (the feed occasionally repeats a
    /// tag when two connectors of the same kind report the same app).
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sources: Vec<SourceTag>,
        users: Vec<DiscoveryUser>,
        last_used: impl Into<String>,
    ) -> Result<Self, FeedError> {
        let id = id.into();
        if id.is_empty() {
            return Err(FeedError::EmptyId);
        }
        let name = name.into();
        if name.is_empty() {
            return Err(FeedError::EmptyName { id });
        }
        for user in &users {
            if user.count == 0 {
                return Err(FeedError::ZeroUsageCount {
                    id,
                    email: user.email.clone(),
                });
            }
        }

        let mut deduped: Vec<SourceTag> = Vec::with_capacity(sources.len());
        for tag in sources {
            if !deduped.contains(&tag) {
                deduped.push(tag);
            }
        }

        Ok(DiscoveredItem {
            id,
            name,
            sources: deduped,
            users,
            last_used: last_used.into(),
        })
    }

    /// Total recorded usages across all reporting users.
    pub fn total_usage(&self) -> u32 {
        self.users.iter().map(|u| u.count).sum()
    }

    pub fn has_source(&self, tag: SourceTag) -> bool {
        self.sources.contains(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_tag_parse_known() {
        assert_eq!(
            SourceTag::parse("google_workspace"),
            Some(SourceTag::GoogleWorkspace)
        );
        assert_eq!(SourceTag::parse("microsoft"), Some(SourceTag::Microsoft));
        assert_eq!(
            SourceTag::parse("chrome_extension"),
            Some(SourceTag::ChromeExtension)
        );
    }

    #[test]
    fn test_source_tag_parse_unknown_is_none() {
        assert_eq!(SourceTag::parse("slack_connector"), None);
        assert_eq!(SourceTag::parse(""), None);
    }

    #[test]
    fn test_item_rejects_empty_id() {
        let err = DiscoveredItem::new("", "Figma", vec![], vec![], "2 days ago");
        assert_eq!(err.unwrap_err(), FeedError::EmptyId);
    }

    #[test]
    fn test_item_rejects_zero_usage_count() {
        let users = vec![DiscoveryUser {
            email: "kim@example.com".into(),
            count: 0,
        }];
        let err = DiscoveredItem::new("d1", "Figma", vec![], users, "today");
        assert!(matches!(err, Err(FeedError::ZeroUsageCount { .. })));
    }

    #[test]
    fn test_item_dedupes_source_tags() {
        let item = DiscoveredItem::new(
            "d1",
            "Figma",
            vec![
                SourceTag::Microsoft,
                SourceTag::GoogleWorkspace,
                SourceTag::Microsoft,
            ],
            vec![],
            "today",
        )
        .unwrap();
        assert_eq!(
            item.sources,
            vec![SourceTag::Microsoft, SourceTag::GoogleWorkspace]
        );
    }

    #[test]
    fn test_total_usage() {
        let item = DiscoveredItem::new(
            "d1",
            "Figma",
            vec![SourceTag::ChromeExtension],
            vec![
                DiscoveryUser {
                    email: "a@example.com".into(),
                    count: 3,
                },
                DiscoveryUser {
                    email: "b@example.com".into(),
                    count: 2,
                },
            ],
            "today",
        )
        .unwrap();
        assert_eq!(item.total_usage(), 5);
    }
}
