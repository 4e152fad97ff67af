#![forbid(unsafe_code)]

//! The render-capability seam.
//!
//! The pipeline computes structure; content paint belongs to the caller.
//! Columns carry paint descriptors (closures behind `Rc`) that frame
//! assembly invokes with a context object. The select column instead
//! routes through the table's checkbox capability. Painted output is an
//! opaque `String` the pipeline never inspects.

use std::fmt;
use std::rc::Rc;

use crate::row::Row;

/// How a header paints its content.
pub enum HeaderPaint {
    /// A fixed title.
    Title(String),
    /// Caller-supplied renderer.
    Custom(Rc<dyn Fn(&HeaderContext<'_>) -> String>),
}

impl HeaderPaint {
    pub(crate) fn paint(&self, ctx: &HeaderContext<'_>) -> String {
        match self {
            Self::Title(title) => title.clone(),
            Self::Custom(paint) => paint(ctx),
        }
    }
}

impl Clone for HeaderPaint {
    fn clone(&self) -> Self {
        match self {
            Self::Title(title) => Self::Title(title.clone()),
            Self::Custom(paint) => Self::Custom(Rc::clone(paint)),
        }
    }
}

impl fmt::Debug for HeaderPaint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(title) => f.debug_tuple("Title").field(title).finish(),
            Self::Custom(_) => f.debug_tuple("Custom").field(&"<dyn Fn>").finish(),
        }
    }
}

/// Context handed to header renderers.
#[derive(Debug)]
pub struct HeaderContext<'a> {
    /// Id of the column this header belongs to.
    pub column_id: &'a str,
    /// Current pixel width of the column.
    pub width: f32,
}

/// How a cell paints its content.
pub enum CellPaint<T> {
    /// Paint the accessor value as-is.
    Value,
    /// The checkbox capability, parameterized per row by the selection flag.
    Select,
    /// Caller-supplied renderer invoked with the full cell context.
    Custom(Rc<dyn Fn(&CellContext<'_, T>) -> String>),
}

impl<T> Clone for CellPaint<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value => Self::Value,
            Self::Select => Self::Select,
            Self::Custom(paint) => Self::Custom(Rc::clone(paint)),
        }
    }
}

impl<T> fmt::Debug for CellPaint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => f.write_str("Value"),
            Self::Select => f.write_str("Select"),
            Self::Custom(_) => f.debug_tuple("Custom").field(&"<dyn Fn>").finish(),
        }
    }
}

/// Context handed to cell renderers: the row, the column, and the value
/// the column's accessor produced for it.
pub struct CellContext<'a, T> {
    /// The row being painted.
    pub row: &'a Row<'a, T>,
    /// Id of the column being painted.
    pub column_id: &'a str,
    /// The accessor's value for this cell.
    pub value: &'a str,
}

/// External checkbox paint capability for the select column.
///
/// Frame assembly calls this once per visible row with the row's selection
/// flag. Toggling is not part of the capability: the host's input layer
/// routes clicks back through
/// [`DataTable::toggle_row`](crate::table::DataTable::toggle_row).
pub trait CheckboxPaint {
    /// Paint one checkbox cell.
    fn paint(&self, checked: bool) -> String;
}

impl<F> CheckboxPaint for F
where
    F: Fn(bool) -> String,
{
    fn paint(&self, checked: bool) -> String {
        self(checked)
    }
}
