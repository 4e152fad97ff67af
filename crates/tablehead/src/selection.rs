#![forbid(unsafe_code)]

//! Single-slot row selection.

use crate::row::RowId;

/// Selection state holding at most one row id.
///
/// The transition function is a per-id flip: toggling the held id clears
/// the slot, toggling any other id replaces it. Selecting a different row
/// therefore deselects the previous one without an explicit deselect step;
/// the single slot is what distinguishes this from a multi-select model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<RowId>,
}

impl SelectionState {
    /// An empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `id`: held becomes cleared, anything else becomes held.
    ///
    /// Returns the new slot contents.
    pub fn toggle(&mut self, id: &RowId) -> Option<&RowId> {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.clone());
        }
        self.selected.as_ref()
    }

    /// Whether `id` is the held selection.
    #[must_use]
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// The held selection, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&RowId> {
        self.selected.as_ref()
    }

    /// Clear the slot.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
