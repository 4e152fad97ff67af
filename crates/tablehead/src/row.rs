#![forbid(unsafe_code)]

//! Row identity and the core row-model stage.

use std::fmt;

/// Identifier of one row in the derived model.
///
/// Identity is positional: the row built from element `i` of the input
/// slice gets the id `"i"`. Positional ids are only as stable as the
/// positions themselves; inserting or removing elements reassigns them,
/// so hosts that edit their collection in place should clear the selection
/// alongside the edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(String);

impl RowId {
    /// Identity for the row at `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(index.to_string())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One row of the derived model: positional identity plus a borrow of the
/// caller's data item.
///
/// Rows are rebuilt on every derivation pass and never outlive it.
/// Selection status is not stored here; it is read from the table's
/// selection slot at frame time.
pub struct Row<'a, T> {
    /// Positional identity of this row.
    pub id: RowId,
    /// The caller-owned data item.
    pub data: &'a T,
}

impl<T> Clone for Row<'_, T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            data: self.data,
        }
    }
}

impl<T> fmt::Debug for Row<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("data", &"<row data>")
            .finish()
    }
}

/// Map a data slice into identified rows, preserving input order.
///
/// O(n), fresh allocation per call; the rows borrow `data`.
pub(crate) fn core_rows<T>(data: &[T]) -> Vec<Row<'_, T>> {
    data.iter()
        .enumerate()
        .map(|(index, data)| Row {
            id: RowId::from_index(index),
            data,
        })
        .collect()
}
