#![forbid(unsafe_code)]

//! Column sizing state machine.
//!
//! Tracks the current pixel width of every column and processes the
//! drag-resize lifecycle in "onChange" mode: every pointer move writes the
//! clamped width immediately, so layout reflows mid-gesture rather than
//! only at release.
//!
//! # Invariants
//!
//! 1. A gesture is well-formed: one `begin`, zero or more `update`s, one
//!    `end`. Events outside that shape are ignored, never an error.
//! 2. `min <= width <= max` holds after every write.
//! 3. `end` discards the captured context and writes nothing; an `update`
//!    arriving after `end` finds no context and is ignored.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Unknown column at `begin` | Stale id from the host | Gesture refused |
//! | Non-resizable column at `begin` | Schema said so | Gesture refused |
//! | `begin` during a live gesture | Overlapping input streams | Second gesture refused |
//! | Update without live gesture | Arrived after `end` | Ignored |
//! | Non-finite pointer coordinate | Broken input source | Delta treated as zero |

use std::collections::BTreeMap;

use crate::column::SizeBounds;

/// What a resize entry point did with its event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// A gesture began; the drag context is live.
    Started,
    /// A live gesture wrote a new width.
    Resized,
    /// The live gesture ended; the context is gone.
    Ended,
    /// The event did not apply: no live gesture, or an unknown or
    /// non-resizable column.
    Ignored,
}

/// Captured context of a live resize gesture.
#[derive(Debug, Clone, PartialEq)]
struct ResizeDrag {
    column_id: String,
    start_width: f32,
    start_x: f32,
    bounds: SizeBounds,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ColumnWidth {
    current: f32,
    bounds: SizeBounds,
    resizable: bool,
}

/// Per-column width state plus the live drag context.
///
/// Seeded from the normalized schema; mutated only through the gesture
/// entry points. Owned by one table instance.
#[derive(Debug, Clone, Default)]
pub struct SizingState {
    widths: BTreeMap<String, ColumnWidth>,
    drag: Option<ResizeDrag>,
}

impl SizingState {
    /// An empty sizing map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed (or reseed) the entry for one column.
    ///
    /// The current width starts at [`SizeBounds::seed`]. Duplicate ids are
    /// not validated; the last seed wins.
    pub fn seed(&mut self, column_id: impl Into<String>, bounds: SizeBounds, resizable: bool) {
        self.widths.insert(
            column_id.into(),
            ColumnWidth {
                current: bounds.seed(),
                bounds,
                resizable,
            },
        );
    }

    /// Current pixel width of `column_id`, if seeded.
    #[must_use]
    pub fn width(&self, column_id: &str) -> Option<f32> {
        self.widths.get(column_id).map(|col| col.current)
    }

    /// Begin a gesture on `column_id` at pointer position `pointer_x`.
    ///
    /// Captures the column's current width and the pointer origin. Refuses
    /// unknown or non-resizable columns, a second gesture while one is
    /// live, and a non-finite pointer origin (no meaningful delta can ever
    /// come of it).
    pub fn begin(&mut self, column_id: &str, pointer_x: f32) -> ResizeOutcome {
        if self.drag.is_some() || !pointer_x.is_finite() {
            return ResizeOutcome::Ignored;
        }
        let Some(col) = self.widths.get(column_id) else {
            return ResizeOutcome::Ignored;
        };
        if !col.resizable {
            return ResizeOutcome::Ignored;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(column = column_id, width = col.current, "resize begin");

        self.drag = Some(ResizeDrag {
            column_id: column_id.to_owned(),
            start_width: col.current,
            start_x: pointer_x,
            bounds: col.bounds,
        });
        ResizeOutcome::Started
    }

    /// Process a pointer move at `pointer_x`.
    ///
    /// Writes `clamp(start_width + (pointer_x - start_x), min, max)`
    /// immediately. A non-finite coordinate contributes a zero delta; a
    /// move with no live gesture is ignored.
    pub fn update(&mut self, pointer_x: f32) -> ResizeOutcome {
        let Some(drag) = &self.drag else {
            return ResizeOutcome::Ignored;
        };

        let delta = if pointer_x.is_finite() {
            pointer_x - drag.start_x
        } else {
            0.0
        };
        let width = drag.bounds.clamp(drag.start_width + delta);

        #[cfg(feature = "tracing")]
        tracing::debug!(column = %drag.column_id, width, "resize update");

        if let Some(col) = self.widths.get_mut(&drag.column_id) {
            col.current = width;
        }
        ResizeOutcome::Resized
    }

    /// End the live gesture, discarding its context.
    pub fn end(&mut self) -> ResizeOutcome {
        match self.drag.take() {
            Some(_drag) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(column = %_drag.column_id, "resize end");
                ResizeOutcome::Ended
            }
            None => ResizeOutcome::Ignored,
        }
    }

    /// Whether a gesture is live.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    /// Id of the column the live gesture targets, if any.
    #[must_use]
    pub fn resizing_column(&self) -> Option<&str> {
        self.drag.as_ref().map(|drag| drag.column_id.as_str())
    }

    /// Sum of all current widths; sizes the scrollable viewport.
    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.widths.values().map(|col| col.current).sum()
    }

    /// Sizing-variable map for the given visible headers.
    ///
    /// Two entries per header, `--header-{id}-size` and `--col-{id}-size`,
    /// each holding the current pixel width, shaped for consumption as
    /// declarative layout hints. Recomputed per frame; never cached.
    #[must_use]
    pub fn sizing_vars<'a>(
        &self,
        headers: impl IntoIterator<Item = &'a str>,
    ) -> BTreeMap<String, f32> {
        let mut vars = BTreeMap::new();
        for id in headers {
            if let Some(col) = self.widths.get(id) {
                vars.insert(format!("--header-{id}-size"), col.current);
                vars.insert(format!("--col-{id}-size"), col.current);
            }
        }
        vars
    }
}
