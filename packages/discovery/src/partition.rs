//! Order-preserving awaiting/ignored partition.

use std::collections::HashSet;

use crate::types::{DiscoveredItem, Tab};

/// Filter `items` down to the partition matching `tab`.
///
/// Pure: the two partitions are complementary over `items` (every item lands
/// in exactly one of them for a given ignored set), and input order is
/// preserved. An empty result is valid, not an error.
pub fn partition<'a>(
    items: &'a [DiscoveredItem],
    ignored: &HashSet<String>,
    tab: Tab,
) -> Vec<&'a DiscoveredItem> {
    items
        .iter()
        .filter(|item| match tab {
            Tab::Awaiting => !ignored.contains(&item.id),
            Tab::Ignored => ignored.contains(&item.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item;

    #[test]
    fn test_partition_splits_by_membership() {
        let items = vec![item("a"), item("b"), item("c")];
        let ignored: HashSet<String> = ["b".to_string()].into();

        let awaiting = partition(&items, &ignored, Tab::Awaiting);
        let shelved = partition(&items, &ignored, Tab::Ignored);

        assert_eq!(
            awaiting.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
        assert_eq!(
            shelved.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["b"]
        );
    }

    #[test]
    fn test_partition_preserves_input_order() {
        let items = vec![item("z"), item("m"), item("a")];
        let ignored = HashSet::new();

        let awaiting = partition(&items, &ignored, Tab::Awaiting);
        assert_eq!(
            awaiting.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["z", "m", "a"]
        );
    }

    #[test]
    fn test_partition_empty_result_is_valid() {
        let items = vec![item("a")];
        let ignored: HashSet<String> = ["a".to_string()].into();

        assert!(partition(&items, &ignored, Tab::Awaiting).is_empty());
        assert!(partition(&[], &ignored, Tab::Ignored).is_empty());
    }
}
