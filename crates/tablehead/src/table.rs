#![forbid(unsafe_code)]

//! The table instance: state ownership and frame derivation.
//!
//! [`DataTable`] owns everything that outlives a single pass (the
//! normalized schema, the selection slot, the sizing state machine, and
//! the page window) and derives a complete [`TableFrame`] from a data
//! slice on demand. There is no dependency tracking: hosts call
//! [`frame`](DataTable::frame) again after any state-mutating call, and
//! the outcome enums on the mutators make "did anything change" cheap to
//! answer.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::column::{ColumnDef, SizeDefaults, normalize};
use crate::page::{PageInfo, PageWindow, RowModel};
use crate::render::{CellContext, CellPaint, CheckboxPaint, HeaderContext};
use crate::row::{Row, RowId};
use crate::selection::SelectionState;
use crate::sizing::{ResizeOutcome, SizingState};
use crate::sticky::{self, Placement};

const EMPTY_TEXT: &str = "No results.";

/// One header in the derived frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSlot {
    /// Id of the column this header belongs to.
    pub column_id: String,
    /// Painted header content.
    pub content: String,
    /// Current pixel width.
    pub width: f32,
    /// Horizontal placement (pinning, offset, layering).
    pub placement: Placement,
    /// Whether resize gestures may target this column.
    pub resizable: bool,
}

/// One cell in the derived frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSlot {
    /// Id of the column this cell belongs to.
    pub column_id: String,
    /// Painted cell content.
    pub content: String,
    /// Current pixel width of the column.
    pub width: f32,
    /// Horizontal placement, mirroring the column's header.
    pub placement: Placement,
}

/// One visible row in the derived frame.
pub struct RowSlot<'a, T> {
    /// The row: positional id plus the borrowed data item.
    pub row: Row<'a, T>,
    /// Whether this row holds the selection.
    pub selected: bool,
    /// Cells in column order.
    pub cells: Vec<CellSlot>,
}

impl<T> fmt::Debug for RowSlot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowSlot")
            .field("row", &self.row)
            .field("selected", &self.selected)
            .field("cells", &self.cells.len())
            .finish()
    }
}

/// The empty-state slot, spanning every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Number of columns the slot spans.
    pub span: usize,
    /// The empty-state text.
    pub content: String,
}

/// The complete derived render model of one pass.
///
/// Frames are rebuilt wholesale; nothing in one survives into the next.
pub struct TableFrame<'a, T> {
    /// Headers in column order.
    pub headers: Vec<HeaderSlot>,
    /// The visible page's rows.
    pub rows: Vec<RowSlot<'a, T>>,
    /// Present exactly when the underlying collection is empty.
    pub placeholder: Option<Placeholder>,
    /// Sizing tokens for layout: `--header-{id}-size` / `--col-{id}-size`.
    pub sizing_vars: BTreeMap<String, f32>,
    /// Sum of all column widths; sizes the scrollable viewport.
    pub total_width: f32,
    /// Pagination metadata for the external control.
    pub page: PageInfo,
}

impl<T> fmt::Debug for TableFrame<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableFrame")
            .field("headers", &self.headers.len())
            .field("rows", &self.rows.len())
            .field("placeholder", &self.placeholder)
            .field("total_width", &self.total_width)
            .field("page", &self.page)
            .finish()
    }
}

/// A table instance over rows of type `T`.
///
/// Construction normalizes the schema and seeds the width map; selection,
/// sizing, and the page window then persist across pagination and
/// recomputation until the instance is dropped. The data itself is never
/// held: callers pass their slice to [`frame`](DataTable::frame) each
/// pass, and the pipeline reads it without mutating.
pub struct DataTable<T> {
    columns: Vec<ColumnDef<T>>,
    defaults: SizeDefaults,
    sizing: SizingState,
    selection: SelectionState,
    window: PageWindow,
    checkbox: Rc<dyn CheckboxPaint>,
    empty_text: String,
}

impl<T> DataTable<T> {
    /// Create a table over `columns` with the stock sizing defaults.
    ///
    /// `checkbox` is the external paint capability for the injected select
    /// column.
    pub fn new(columns: Vec<ColumnDef<T>>, checkbox: impl CheckboxPaint + 'static) -> Self {
        Self::with_defaults(columns, checkbox, SizeDefaults::default())
    }

    /// Create a table with caller-supplied sizing defaults.
    pub fn with_defaults(
        columns: Vec<ColumnDef<T>>,
        checkbox: impl CheckboxPaint + 'static,
        defaults: SizeDefaults,
    ) -> Self {
        let columns = normalize(&columns, &defaults);
        let mut sizing = SizingState::new();
        for col in &columns {
            sizing.seed(col.id(), col.resolve_bounds(&defaults), col.is_resizable());
        }
        Self {
            columns,
            defaults,
            sizing,
            selection: SelectionState::new(),
            window: PageWindow::default(),
            checkbox: Rc::new(checkbox),
            empty_text: EMPTY_TEXT.to_owned(),
        }
    }

    /// Set the page size (rows per page).
    #[must_use]
    pub fn page_size(mut self, size: usize) -> Self {
        self.window = PageWindow::new(0, size);
        self
    }

    /// Override the empty-state text shown when the data slice is empty.
    #[must_use]
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// The normalized schema, select column first.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    // --- selection -------------------------------------------------------

    /// Flip the selection slot for `id`; see [`SelectionState::toggle`].
    ///
    /// Returns the new slot contents.
    pub fn toggle_row(&mut self, id: &RowId) -> Option<&RowId> {
        #[cfg(feature = "tracing")]
        tracing::debug!(row = %id, "selection toggle");
        self.selection.toggle(id)
    }

    /// Whether `id` holds the selection.
    #[must_use]
    pub fn is_row_selected(&self, id: &RowId) -> bool {
        self.selection.is_selected(id)
    }

    /// The selected row id, if any.
    #[must_use]
    pub fn selected_row(&self) -> Option<&RowId> {
        self.selection.selected()
    }

    // --- sizing ----------------------------------------------------------

    /// Begin a resize gesture; see [`SizingState::begin`].
    pub fn begin_resize(&mut self, column_id: &str, pointer_x: f32) -> ResizeOutcome {
        self.sizing.begin(column_id, pointer_x)
    }

    /// Feed a pointer move to the live gesture; see [`SizingState::update`].
    pub fn update_resize(&mut self, pointer_x: f32) -> ResizeOutcome {
        self.sizing.update(pointer_x)
    }

    /// End the live gesture; see [`SizingState::end`].
    pub fn end_resize(&mut self) -> ResizeOutcome {
        self.sizing.end()
    }

    /// Current pixel width of `column_id`.
    #[must_use]
    pub fn column_width(&self, column_id: &str) -> Option<f32> {
        self.sizing.width(column_id)
    }

    /// Sum of all column widths.
    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.sizing.total_width()
    }

    // --- pagination surface ----------------------------------------------

    /// The current page window (requested index plus size).
    #[must_use]
    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Request a page. Out-of-range indices clamp at derivation time.
    pub fn set_page_index(&mut self, index: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!(index, "page change");
        self.window.set_index(index);
    }

    /// Change the page size; the window moves back to the first page.
    /// A zero size acts as 1.
    pub fn set_page_size(&mut self, size: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!(size, "page size change");
        self.window.set_size(size);
    }

    // --- derivation ------------------------------------------------------

    /// Derive the complete render model for `data` under the current
    /// state.
    ///
    /// Pure with respect to the table: repeated calls with the same data
    /// and no intervening mutations yield identical frames.
    #[must_use]
    pub fn frame<'a>(&self, data: &'a [T]) -> TableFrame<'a, T> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "table_frame",
            rows = data.len(),
            page = self.window.index()
        )
        .entered();

        let model = RowModel::compute(data, self.window);

        let widths: Vec<f32> = self
            .columns
            .iter()
            .map(|col| {
                self.sizing
                    .width(col.id())
                    .unwrap_or_else(|| col.resolve_bounds(&self.defaults).seed())
            })
            .collect();
        let placements = sticky::resolve(&widths);

        let headers = self
            .columns
            .iter()
            .zip(widths.iter().zip(&placements))
            .map(|(col, (&width, &placement))| {
                let ctx = HeaderContext {
                    column_id: col.id(),
                    width,
                };
                HeaderSlot {
                    column_id: col.id().to_owned(),
                    content: col.header.paint(&ctx),
                    width,
                    placement,
                    resizable: col.is_resizable(),
                }
            })
            .collect();

        let rows = model
            .visible_rows()
            .iter()
            .map(|row| self.row_slot(row, &widths, &placements))
            .collect();

        let placeholder = model.is_empty().then(|| Placeholder {
            span: self.columns.len(),
            content: self.empty_text.clone(),
        });

        TableFrame {
            headers,
            rows,
            placeholder,
            sizing_vars: self.sizing.sizing_vars(self.columns.iter().map(ColumnDef::id)),
            total_width: self.sizing.total_width(),
            page: model.page(),
        }
    }

    fn row_slot<'a>(
        &self,
        row: &Row<'a, T>,
        widths: &[f32],
        placements: &[Placement],
    ) -> RowSlot<'a, T> {
        let selected = self.selection.is_selected(&row.id);
        let cells = self
            .columns
            .iter()
            .zip(widths.iter().zip(placements))
            .map(|(col, (&width, &placement))| {
                let content = match &col.cell {
                    CellPaint::Select => self.checkbox.paint(selected),
                    CellPaint::Value => (col.accessor)(row.data),
                    CellPaint::Custom(paint) => {
                        let value = (col.accessor)(row.data);
                        paint(&CellContext {
                            row,
                            column_id: col.id(),
                            value: &value,
                        })
                    }
                };
                CellSlot {
                    column_id: col.id().to_owned(),
                    content,
                    width,
                    placement,
                }
            })
            .collect();

        RowSlot {
            row: row.clone(),
            selected,
            cells,
        }
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("sizing", &self.sizing)
            .field("selection", &self.selection)
            .field("window", &self.window)
            .field("checkbox", &"<dyn CheckboxPaint>")
            .field("empty_text", &self.empty_text)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{PinSide, SELECT_COLUMN_ID};

    struct Track {
        title: &'static str,
        plays: u32,
    }

    fn tracks() -> Vec<Track> {
        vec![
            Track { title: "Tupelo", plays: 41 },
            Track { title: "The Ship Song", plays: 7 },
            Track { title: "The Mercy Seat", plays: 23 },
        ]
    }

    fn checkbox(checked: bool) -> String {
        if checked { "[x]" } else { "[ ]" }.to_string()
    }

    fn table() -> DataTable<Track> {
        let columns = vec![
            ColumnDef::new("title", |t: &Track| t.title.to_string()).header("Title"),
            ColumnDef::new("plays", |t: &Track| t.plays.to_string())
                .header("Plays")
                .size(80.0)
                .min_size(40.0)
                .max_size(160.0),
        ];
        DataTable::new(columns, checkbox)
    }

    #[test]
    fn frame_has_select_column_first() {
        let data = tracks();
        let frame = table().frame(&data);
        assert_eq!(frame.headers.len(), 3);
        assert_eq!(frame.headers[0].column_id, SELECT_COLUMN_ID);
        assert_eq!(frame.headers[0].content, "Select");
        assert_eq!(frame.headers[0].width, 20.0);
        assert_eq!(frame.headers[1].content, "Title");
    }

    #[test]
    fn cells_paint_accessor_values() {
        let data = tracks();
        let frame = table().frame(&data);
        let first = &frame.rows[0];
        assert_eq!(first.cells[1].content, "Tupelo");
        assert_eq!(first.cells[2].content, "41");
    }

    #[test]
    fn checkbox_cells_reflect_selection() {
        let data = tracks();
        let mut table = table();

        let frame = table.frame(&data);
        assert!(frame.rows.iter().all(|r| r.cells[0].content == "[ ]"));

        table.toggle_row(&RowId::from_index(1));
        let frame = table.frame(&data);
        assert_eq!(frame.rows[0].cells[0].content, "[ ]");
        assert_eq!(frame.rows[1].cells[0].content, "[x]");
        assert!(frame.rows[1].selected);
    }

    #[test]
    fn selecting_second_row_clears_first() {
        let mut table = table();
        table.toggle_row(&RowId::from("1"));
        table.toggle_row(&RowId::from("2"));
        assert_eq!(table.selected_row(), Some(&RowId::from("2")));
        assert!(!table.is_row_selected(&RowId::from("1")));
    }

    #[test]
    fn selection_survives_pagination() {
        let data = tracks();
        let mut table = table().page_size(2);
        table.toggle_row(&RowId::from_index(2));

        table.set_page_index(1);
        let frame = table.frame(&data);
        assert_eq!(frame.rows.len(), 1);
        assert!(frame.rows[0].selected);

        table.set_page_index(0);
        let frame = table.frame(&data);
        assert!(frame.rows.iter().all(|r| !r.selected));
        assert_eq!(table.selected_row(), Some(&RowId::from_index(2)));
    }

    #[test]
    fn page_surface_clamps_requests() {
        let data = tracks();
        let mut table = table().page_size(2);
        table.set_page_index(99);
        let frame = table.frame(&data);
        assert_eq!(frame.page.index, 1);
        assert_eq!(frame.page.count, 2);
    }

    #[test]
    fn page_size_change_resets_window() {
        let data = tracks();
        let mut table = table().page_size(1);
        table.set_page_index(2);
        table.set_page_size(2);
        let frame = table.frame(&data);
        assert_eq!(frame.page.index, 0);
        assert_eq!(frame.page.size, 2);
        assert_eq!(frame.page.count, 2);
    }

    #[test]
    fn window_reports_requested_state() {
        let mut table = table().page_size(5);
        table.set_page_index(3);
        assert_eq!(table.window().index(), 3);
        assert_eq!(table.window().size(), 5);
    }

    #[test]
    fn zero_page_size_acts_as_one() {
        let data = tracks();
        let mut table = table();
        table.set_page_size(0);
        let frame = table.frame(&data);
        assert_eq!(frame.page.size, 1);
        assert_eq!(frame.rows.len(), 1);
    }

    #[test]
    fn empty_data_yields_placeholder() {
        let table = table();
        let frame = table.frame(&[]);
        assert!(frame.rows.is_empty());
        let placeholder = frame.placeholder.expect("placeholder for empty data");
        assert_eq!(placeholder.span, 3);
        assert_eq!(placeholder.content, "No results.");
    }

    #[test]
    fn empty_text_is_overridable() {
        let table = table().empty_text("Nothing here");
        let frame = table.frame(&[]);
        assert_eq!(frame.placeholder.unwrap().content, "Nothing here");
    }

    #[test]
    fn placeholder_absent_with_rows() {
        let data = tracks();
        assert!(table().frame(&data).placeholder.is_none());
    }

    #[test]
    fn resize_reflows_frame_widths() {
        let data = tracks();
        let mut table = table();

        assert_eq!(table.begin_resize("plays", 10.0), ResizeOutcome::Started);
        assert_eq!(table.update_resize(60.0), ResizeOutcome::Resized);
        assert_eq!(table.end_resize(), ResizeOutcome::Ended);

        let frame = table.frame(&data);
        assert_eq!(frame.headers[2].width, 130.0);
        assert_eq!(frame.rows[0].cells[2].width, 130.0);
        assert_eq!(frame.sizing_vars["--col-plays-size"], 130.0);
        assert_eq!(frame.sizing_vars["--header-plays-size"], 130.0);
    }

    #[test]
    fn update_after_end_does_not_move_widths() {
        let mut table = table();
        table.begin_resize("plays", 0.0);
        table.update_resize(20.0);
        table.end_resize();
        assert_eq!(table.update_resize(500.0), ResizeOutcome::Ignored);
        assert_eq!(table.column_width("plays"), Some(100.0));
    }

    #[test]
    fn sticky_offset_follows_select_column_resize() {
        let data = tracks();
        let mut table = table();

        let frame = table.frame(&data);
        assert_eq!(frame.headers[1].placement.left, Some(20.0));

        table.begin_resize(SELECT_COLUMN_ID, 0.0);
        table.update_resize(35.0);
        table.end_resize();

        let frame = table.frame(&data);
        assert_eq!(frame.headers[0].width, 55.0);
        assert_eq!(frame.headers[1].placement.left, Some(55.0));
        assert_eq!(frame.headers[1].placement.pin, Some(PinSide::Left));
        assert!(frame.headers[2].placement.left.is_none());
    }

    #[test]
    fn total_width_sizes_the_viewport() {
        let data = tracks();
        let frame = table().frame(&data);
        // select 20 + title 100 (default min) + plays 80.
        assert_eq!(frame.total_width, 200.0);
        assert_eq!(
            frame.total_width,
            frame.headers.iter().map(|h| h.width).sum::<f32>()
        );
    }

    #[test]
    fn custom_cell_renderer_sees_context() {
        let columns = vec![
            ColumnDef::new("plays", |t: &Track| t.plays.to_string())
                .cell_with(|ctx| format!("row {} played {}", ctx.row.id, ctx.value)),
        ];
        let table = DataTable::new(columns, checkbox);
        let data = tracks();
        let frame = table.frame(&data);
        assert_eq!(frame.rows[0].cells[1].content, "row 0 played 41");
    }

    #[test]
    fn frames_are_rederivable() {
        let data = tracks();
        let table = table();
        let a = table.frame(&data);
        let b = table.frame(&data);
        assert_eq!(a.headers, b.headers);
        assert_eq!(a.sizing_vars, b.sizing_vars);
        assert_eq!(a.page, b.page);
        assert_eq!(a.rows.len(), b.rows.len());
    }
}
