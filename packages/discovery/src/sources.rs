//! Per-source occurrence counts.
//!
//! Counts run over the *full* discovered list, never the filtered view:
//! they report discovery volume per integration, not review progress.

use serde::Serialize;

use crate::types::{DiscoveredItem, SourceTag};

/// Number of items reported by each integration.
///
/// An item tagged with several sources counts once toward each of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStats {
    pub google_workspace: usize,
    pub microsoft: usize,
    pub chrome_extension: usize,
}

impl SourceStats {
    pub fn count(&self, tag: SourceTag) -> usize {
        match tag {
            SourceTag::GoogleWorkspace => self.google_workspace,
            SourceTag::Microsoft => self.microsoft,
            SourceTag::ChromeExtension => self.chrome_extension,
        }
    }
}

/// Count, per source tag, the items whose sources include that tag.
pub fn aggregate_sources(items: &[DiscoveredItem]) -> SourceStats {
    let mut stats = SourceStats::default();
    for item in items {
        if item.has_source(SourceTag::GoogleWorkspace) {
            stats.google_workspace += 1;
        }
        if item.has_source(SourceTag::Microsoft) {
            stats.microsoft += 1;
        }
        if item.has_source(SourceTag::ChromeExtension) {
            stats.chrome_extension += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item_with_sources;

    #[test]
    fn test_aggregate_empty_list() {
        assert_eq!(aggregate_sources(&[]), SourceStats::default());
    }

    #[test]
    fn test_multi_tagged_item_counts_toward_each_tag_once() {
        let items = vec![item_with_sources(
            "a",
            &[SourceTag::GoogleWorkspace, SourceTag::Microsoft],
        )];
        let stats = aggregate_sources(&items);
        assert_eq!(stats.google_workspace, 1);
        assert_eq!(stats.microsoft, 1);
        assert_eq!(stats.chrome_extension, 0);
    }

    #[test]
    fn test_counts_sum_items_not_tags() {
        let items = vec![
            item_with_sources("a", &[SourceTag::ChromeExtension]),
            item_with_sources("b", &[SourceTag::ChromeExtension]),
            item_with_sources("c", &[SourceTag::Microsoft, SourceTag::ChromeExtension]),
        ];
        let stats = aggregate_sources(&items);
        assert_eq!(stats.chrome_extension, 3);
        assert_eq!(stats.microsoft, 1);
        assert_eq!(stats.count(SourceTag::GoogleWorkspace), 0);
    }
}
