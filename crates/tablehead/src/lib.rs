#![forbid(unsafe_code)]

//! Headless table state for generically-typed row collections.
//!
//! `tablehead` turns a declarative column schema plus a caller-owned data
//! slice into a complete render model: a paginated, selectable row set and
//! a live column-sizing map for layout. Painting is not this crate's job.
//! Cell and header content go through caller-supplied renderer
//! descriptors, and the derived [`TableFrame`](table::TableFrame) is plain
//! data a host can draw with whatever it likes.
//!
//! Three behaviors sit on top of plain derivation:
//!
//! - **Single-row selection** through an injected leading checkbox column
//!   ([`selection`], [`column`]).
//! - **Per-column pixel resizing** with a three-phase drag lifecycle and
//!   clamped widths ([`sizing`]).
//! - **Page windowing** of the row collection ([`page`]), with the
//!   pagination surface an external control consumes.
//!
//! The two leading columns stay pinned under horizontal scroll, with the
//! second pinned offset tracking the first column's live width
//! ([`sticky`]).
//!
//! # Example
//!
//! ```
//! use tablehead::{ColumnDef, DataTable};
//!
//! struct Track {
//!     title: String,
//!     plays: u64,
//! }
//!
//! let columns = vec![
//!     ColumnDef::new("title", |t: &Track| t.title.clone()).header("Title"),
//!     ColumnDef::new("plays", |t: &Track| t.plays.to_string()).header("Plays"),
//! ];
//! let mut table = DataTable::new(columns, |checked: bool| {
//!     if checked { "[x]" } else { "[ ]" }.to_string()
//! })
//! .page_size(2);
//!
//! let data = vec![
//!     Track { title: "Tupelo".into(), plays: 41 },
//!     Track { title: "The Ship Song".into(), plays: 7 },
//!     Track { title: "The Mercy Seat".into(), plays: 23 },
//! ];
//!
//! let frame = table.frame(&data);
//! assert_eq!(frame.page.count, 2);
//! assert_eq!(frame.rows.len(), 2);
//!
//! let first = frame.rows[0].row.id.clone();
//! table.toggle_row(&first);
//! let frame = table.frame(&data);
//! assert!(frame.rows[0].selected);
//! ```

pub mod column;
pub mod page;
pub mod render;
pub mod row;
pub mod selection;
pub mod sizing;
pub mod sticky;
pub mod table;

pub use column::{ColumnDef, PinSide, SELECT_COLUMN_ID, SizeBounds, SizeDefaults, normalize};
pub use page::{PageInfo, PageWindow, RowModel};
pub use render::{CellContext, CellPaint, CheckboxPaint, HeaderContext, HeaderPaint};
pub use row::{Row, RowId};
pub use selection::SelectionState;
pub use sizing::{ResizeOutcome, SizingState};
pub use sticky::Placement;
pub use table::{CellSlot, DataTable, HeaderSlot, Placeholder, RowSlot, TableFrame};
