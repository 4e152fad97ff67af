#![forbid(unsafe_code)]

//! Plain-text painting of derived frames.
//!
//! The library hands back structure and opaque content strings; this
//! module is the "external collaborator" that actually draws them. Pixel
//! widths map to terminal cells at a fixed scale.

use tablehead::TableFrame;
use unicode_width::UnicodeWidthChar;

/// Terminal cells per pixel-width unit.
const PX_PER_CELL: f32 = 8.0;

fn cell_cols(width: f32) -> usize {
    ((width / PX_PER_CELL).round() as usize).max(3)
}

/// Truncate or pad `text` to exactly `cols` display columns.
fn fit(text: &str, cols: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > cols {
            break;
        }
        out.push(ch);
        used += w;
    }
    while used < cols {
        out.push(' ');
        used += 1;
    }
    out
}

/// Draw one frame as plain text.
///
/// Pinned headers are marked with `*`; the pagination line echoes the
/// surface an external pagination control would consume.
pub fn render_frame<T>(frame: &TableFrame<'_, T>) -> String {
    let mut out = String::new();

    let header_line: Vec<String> = frame
        .headers
        .iter()
        .map(|h| {
            let marker = if h.placement.is_pinned() { "*" } else { " " };
            fit(&format!("{}{}", marker, h.content), cell_cols(h.width))
        })
        .collect();
    out.push_str(&header_line.join(" | "));
    out.push('\n');

    let total_cols: usize = frame
        .headers
        .iter()
        .map(|h| cell_cols(h.width) + 3)
        .sum::<usize>()
        .saturating_sub(3);
    out.push_str(&"-".repeat(total_cols));
    out.push('\n');

    if let Some(placeholder) = &frame.placeholder {
        out.push_str(&fit(&placeholder.content, total_cols));
        out.push('\n');
    }

    for row in &frame.rows {
        let line: Vec<String> = row
            .cells
            .iter()
            .map(|c| fit(&format!(" {}", c.content), cell_cols(c.width)))
            .collect();
        out.push_str(&line.join(" | "));
        out.push('\n');
    }

    out.push_str(&format!(
        "page {}/{} (size {}, {} rows, total width {}px)\n",
        frame.page.index + 1,
        frame.page.count,
        frame.page.size,
        frame.page.total_rows,
        frame.total_width,
    ));
    out
}

/// Draw the sizing-variable map as layout hints.
pub fn render_sizing_vars<T>(frame: &TableFrame<'_, T>) -> String {
    let mut out = String::new();
    for (token, px) in &frame.sizing_vars {
        out.push_str(&format!("  {token}: {px}px\n"));
    }
    out
}

/// Describe the pinned region: which columns stick, and where.
pub fn render_pinned<T>(frame: &TableFrame<'_, T>) -> String {
    let mut out = String::new();
    for header in &frame.headers {
        if let Some(left) = header.placement.left {
            out.push_str(&format!(
                "  {} pinned at left {}px (layer {})\n",
                header.column_id, left, header.placement.layer,
            ));
        }
    }
    out
}
