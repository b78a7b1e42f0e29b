//! Detail-dialog selection state.

/// Which item (if any) is open in the detail dialog.
///
/// At most one item is selected at a time; selecting while a dialog is open
/// replaces the previous selection (no stacking).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
    open: bool,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
        self.open = true;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.open = false;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut selection = Selection::new();
        selection.select("a");
        selection.select("b");
        assert_eq!(selection.selected_id(), Some("b"));
        assert!(selection.is_open());
    }

    #[test]
    fn test_clear_closes_and_forgets() {
        let mut selection = Selection::new();
        selection.select("a");
        selection.clear();
        assert_eq!(selection.selected_id(), None);
        assert!(!selection.is_open());
    }
}
