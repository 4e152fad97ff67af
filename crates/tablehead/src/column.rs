#![forbid(unsafe_code)]

//! Column schema: definitions, size resolution, and normalization.
//!
//! Callers describe columns declaratively with [`ColumnDef`]; the
//! normalizer derives the schema the table actually runs on. It prepends
//! the synthetic select column, forces every column resizable, and
//! resolves omitted size fields against a [`SizeDefaults`] policy. The
//! caller's definitions are cloned, never mutated.

use std::fmt;
use std::rc::Rc;

use crate::render::{CellContext, CellPaint, HeaderContext, HeaderPaint};

/// Reserved id of the injected select column.
pub const SELECT_COLUMN_ID: &str = "select";

/// Pixel width the select column starts at.
const SELECT_COLUMN_WIDTH: f32 = 20.0;

/// Horizontal side a column asks to be pinned to.
///
/// The hint is carried through normalization, but pinning itself is
/// positional: the sticky resolver pins the two leading columns to the
/// left regardless of hints. See [`crate::sticky`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinSide {
    /// Pin to the leading edge.
    Left,
    /// Pin to the trailing edge.
    Right,
}

/// Resolved pixel size constraints for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    /// Declared width.
    pub size: f32,
    /// Lower clamp bound.
    pub min: f32,
    /// Upper clamp bound.
    pub max: f32,
}

impl SizeBounds {
    /// Clamp `width` into `[min, max]`.
    ///
    /// Saturates at the upper bound when a malformed schema declares
    /// `min > max`; a non-finite `width` is absorbed to a bound instead of
    /// propagating.
    #[must_use]
    pub fn clamp(&self, width: f32) -> f32 {
        width.max(self.min).min(self.max)
    }

    /// The width a freshly normalized column starts at.
    ///
    /// A declared size outside its own bounds seeds at the nearer bound so
    /// the clamp invariant holds from the first frame. The stock defaults
    /// declare 50 under a 100 minimum and therefore seed at 100.
    #[must_use]
    pub fn seed(&self) -> f32 {
        self.clamp(self.size)
    }
}

/// Default sizing applied to columns that omit size fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeDefaults {
    /// Declared width for columns without an explicit `size`.
    pub size: f32,
    /// Lower bound for columns without an explicit `min_size`.
    pub min: f32,
    /// Upper bound for columns without an explicit `max_size`.
    pub max: f32,
}

impl Default for SizeDefaults {
    fn default() -> Self {
        Self {
            size: 50.0,
            min: 100.0,
            max: 500.0,
        }
    }
}

pub(crate) type Accessor<T> = Rc<dyn Fn(&T) -> String>;

/// Declarative definition of one table column.
///
/// Built with the consuming-builder methods and handed to the table as a
/// sequence. Size fields left unset resolve against the table's
/// [`SizeDefaults`] at normalization time. Definitions are cheaply
/// cloneable; descriptors live behind `Rc`.
pub struct ColumnDef<T> {
    pub(crate) id: String,
    pub(crate) header: HeaderPaint,
    pub(crate) accessor: Accessor<T>,
    pub(crate) cell: CellPaint<T>,
    pub(crate) size: Option<f32>,
    pub(crate) min_size: Option<f32>,
    pub(crate) max_size: Option<f32>,
    pub(crate) resizable: bool,
    pub(crate) pin: Option<PinSide>,
}

impl<T> ColumnDef<T> {
    /// Create a column that reads its display value with `accessor`.
    ///
    /// The header defaults to the column id; override it with
    /// [`header`](Self::header) or [`header_with`](Self::header_with).
    pub fn new(id: impl Into<String>, accessor: impl Fn(&T) -> String + 'static) -> Self {
        let id = id.into();
        Self {
            header: HeaderPaint::Title(id.clone()),
            id,
            accessor: Rc::new(accessor),
            cell: CellPaint::Value,
            size: None,
            min_size: None,
            max_size: None,
            resizable: false,
            pin: None,
        }
    }

    /// Set a fixed header title.
    #[must_use]
    pub fn header(mut self, title: impl Into<String>) -> Self {
        self.header = HeaderPaint::Title(title.into());
        self
    }

    /// Set a custom header renderer.
    #[must_use]
    pub fn header_with(mut self, paint: impl Fn(&HeaderContext<'_>) -> String + 'static) -> Self {
        self.header = HeaderPaint::Custom(Rc::new(paint));
        self
    }

    /// Set a custom cell renderer. Without one, cells paint the accessor
    /// value as-is.
    #[must_use]
    pub fn cell_with(mut self, paint: impl Fn(&CellContext<'_, T>) -> String + 'static) -> Self {
        self.cell = CellPaint::Custom(Rc::new(paint));
        self
    }

    /// Set the declared width in pixels.
    #[must_use]
    pub fn size(mut self, px: f32) -> Self {
        self.size = Some(px);
        self
    }

    /// Set the minimum width in pixels.
    #[must_use]
    pub fn min_size(mut self, px: f32) -> Self {
        self.min_size = Some(px);
        self
    }

    /// Set the maximum width in pixels.
    #[must_use]
    pub fn max_size(mut self, px: f32) -> Self {
        self.max_size = Some(px);
        self
    }

    /// Set the resizability flag. Normalization forces this on, so the
    /// flag only matters for schemas used outside a table instance.
    #[must_use]
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Hint the side this column wants to be pinned to.
    #[must_use]
    pub fn pin(mut self, side: PinSide) -> Self {
        self.pin = Some(side);
        self
    }

    /// The column id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether resize gestures may target this column.
    #[must_use]
    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    /// The pin-side hint, if any.
    #[must_use]
    pub fn pin_hint(&self) -> Option<PinSide> {
        self.pin
    }

    /// Resolve this column's size fields against `defaults`.
    #[must_use]
    pub fn resolve_bounds(&self, defaults: &SizeDefaults) -> SizeBounds {
        SizeBounds {
            size: self.size.unwrap_or(defaults.size),
            min: self.min_size.unwrap_or(defaults.min),
            max: self.max_size.unwrap_or(defaults.max),
        }
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: Rc::clone(&self.accessor),
            cell: self.cell.clone(),
            size: self.size,
            min_size: self.min_size,
            max_size: self.max_size,
            resizable: self.resizable,
            pin: self.pin,
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("cell", &self.cell)
            .field("size", &self.size)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .field("resizable", &self.resizable)
            .field("pin", &self.pin)
            .finish()
    }
}

/// The synthetic leading select column.
///
/// 20px wide (with a matching minimum so the width is honored), resizable,
/// pinned left, painting through the table's checkbox capability.
fn select_column<T>() -> ColumnDef<T> {
    ColumnDef {
        id: SELECT_COLUMN_ID.to_owned(),
        header: HeaderPaint::Title("Select".to_owned()),
        accessor: Rc::new(|_| String::new()),
        cell: CellPaint::Select,
        size: Some(SELECT_COLUMN_WIDTH),
        min_size: Some(SELECT_COLUMN_WIDTH),
        max_size: None,
        resizable: true,
        pin: Some(PinSide::Left),
    }
}

/// Normalize a caller schema.
///
/// Prepends the select column, forces every column resizable, and writes
/// resolved size fields into the derived copies so the output is
/// self-contained. Pure (the input is cloned, never mutated) and
/// idempotent: the select column is recognized by its reserved id and
/// injected at most once, and re-resolving already resolved size fields
/// changes nothing.
#[must_use]
pub fn normalize<T>(columns: &[ColumnDef<T>], defaults: &SizeDefaults) -> Vec<ColumnDef<T>> {
    let has_select = columns
        .first()
        .is_some_and(|col| col.id == SELECT_COLUMN_ID);

    let mut out = Vec::with_capacity(columns.len() + usize::from(!has_select));
    if !has_select {
        out.push(select_column());
    }
    out.extend(columns.iter().cloned());

    for col in &mut out {
        let bounds = col.resolve_bounds(defaults);
        col.size = Some(bounds.size);
        col.min_size = Some(bounds.min);
        col.max_size = Some(bounds.max);
        col.resizable = true;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HeaderContext;

    fn caller_columns() -> Vec<ColumnDef<&'static str>> {
        vec![
            ColumnDef::new("name", |s: &&str| s.to_string()).header("Name"),
            ColumnDef::new("len", |s: &&str| s.len().to_string())
                .header("Length")
                .size(120.0)
                .min_size(60.0)
                .max_size(240.0),
        ]
    }

    #[test]
    fn normalize_prepends_select_column() {
        let normalized = normalize(&caller_columns(), &SizeDefaults::default());
        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0].id(), SELECT_COLUMN_ID);
        assert!(matches!(normalized[0].cell, CellPaint::Select));
        assert_eq!(normalized[0].pin_hint(), Some(PinSide::Left));
        assert_eq!(normalized[1].id(), "name");
        assert_eq!(normalized[2].id(), "len");
    }

    #[test]
    fn normalize_forces_resizable() {
        let columns = vec![ColumnDef::new("a", |_: &u8| String::new()).resizable(false)];
        let normalized = normalize(&columns, &SizeDefaults::default());
        assert!(normalized.iter().all(ColumnDef::is_resizable));
    }

    #[test]
    fn normalize_resolves_defaults() {
        let normalized = normalize(&caller_columns(), &SizeDefaults::default());
        // "name" omitted all size fields.
        assert_eq!(normalized[1].size, Some(50.0));
        assert_eq!(normalized[1].min_size, Some(100.0));
        assert_eq!(normalized[1].max_size, Some(500.0));
        // "len" declared everything.
        assert_eq!(normalized[2].size, Some(120.0));
        assert_eq!(normalized[2].min_size, Some(60.0));
        assert_eq!(normalized[2].max_size, Some(240.0));
    }

    #[test]
    fn normalize_does_not_mutate_input() {
        let columns = caller_columns();
        let _ = normalize(&columns, &SizeDefaults::default());
        assert_eq!(columns.len(), 2);
        assert!(!columns[0].is_resizable());
        assert_eq!(columns[0].size, None);
    }

    #[test]
    fn normalize_is_idempotent() {
        let defaults = SizeDefaults::default();
        let once = normalize(&caller_columns(), &defaults);
        let twice = normalize(&once, &defaults);

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(&twice) {
            assert_eq!(a.id(), b.id());
            assert_eq!(a.size, b.size);
            assert_eq!(a.min_size, b.min_size);
            assert_eq!(a.max_size, b.max_size);
            assert_eq!(a.resizable, b.resizable);
            assert_eq!(a.pin_hint(), b.pin_hint());
        }
    }

    #[test]
    fn default_size_seeds_at_minimum() {
        // The stock defaults declare size 50 under min 100; the seed policy
        // clamps up rather than reproducing the mismatch.
        let bounds = ColumnDef::new("x", |_: &u8| String::new())
            .resolve_bounds(&SizeDefaults::default());
        assert_eq!(bounds.seed(), 100.0);
    }

    #[test]
    fn select_column_seed_honors_its_width() {
        let defaults = SizeDefaults::default();
        let normalized = normalize(&Vec::<ColumnDef<u8>>::new(), &defaults);
        let bounds = normalized[0].resolve_bounds(&defaults);
        assert_eq!(bounds.seed(), 20.0);
        assert_eq!(bounds.max, 500.0);
    }

    #[test]
    fn clamp_saturates_at_bounds() {
        let bounds = SizeBounds {
            size: 100.0,
            min: 100.0,
            max: 500.0,
        };
        assert_eq!(bounds.clamp(550.0), 500.0);
        assert_eq!(bounds.clamp(12.0), 100.0);
        assert_eq!(bounds.clamp(250.0), 250.0);
    }

    #[test]
    fn clamp_absorbs_non_finite_width() {
        let bounds = SizeBounds {
            size: 100.0,
            min: 100.0,
            max: 500.0,
        };
        assert!(bounds.clamp(f32::NAN).is_finite());
        assert_eq!(bounds.clamp(f32::INFINITY), 500.0);
        assert_eq!(bounds.clamp(f32::NEG_INFINITY), 100.0);
    }

    #[test]
    fn custom_header_renderer_survives_normalize() {
        let columns = vec![
            ColumnDef::new("w", |_: &u8| String::new())
                .header_with(|ctx| format!("{} [{}px]", ctx.column_id, ctx.width)),
        ];
        let normalized = normalize(&columns, &SizeDefaults::default());
        let ctx = HeaderContext {
            column_id: "w",
            width: 120.0,
        };
        assert_eq!(normalized[1].header.paint(&ctx), "w [120px]");
    }

    #[test]
    fn builder_chain() {
        let col = ColumnDef::new("plays", |n: &u32| n.to_string())
            .header("Plays")
            .size(90.0)
            .min_size(40.0)
            .max_size(200.0)
            .resizable(true)
            .pin(PinSide::Left);
        assert_eq!(col.id(), "plays");
        assert!(col.is_resizable());
        assert_eq!(col.pin_hint(), Some(PinSide::Left));
        let bounds = col.resolve_bounds(&SizeDefaults::default());
        assert_eq!(bounds.size, 90.0);
        assert_eq!(bounds.min, 40.0);
        assert_eq!(bounds.max, 200.0);
    }
}
