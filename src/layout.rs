use serde::Serialize;

use std::num::NonZeroUsize;

/// Height every image is normalized to.
pub const TARGET_HEIGHT: u32 = 600;
/// White margin between and around cells.
pub const PADDING: u32 = 10;
/// Largest canvas side; JPEG cannot encode more.
pub const MAX_CANVAS_SIDE: u32 = 65_535;

/// Grid geometry of one collage. Derived from the normalized widths, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridLayout{
    pub count: usize,
    pub columns: usize,
    pub rows: usize,
    pub cell_width: u32,
    pub cell_height: u32,
    pub padding: u32,
}

impl GridLayout{
    /// `widths` are the normalized widths in placement order.
    pub fn compute(widths: &[u32], images_per_row: Option<NonZeroUsize>) -> Self{
        let count = widths.len();
        let columns = match images_per_row{
            Some(n) => n.get(),
            None => auto_columns(count),
        };
        let rows = count.div_ceil(columns);
        let cell_width = widths.iter().copied().max().unwrap_or(0);
        Self{
            count,
            columns,
            rows,
            cell_width,
            cell_height: TARGET_HEIGHT,
            padding: PADDING,
        }
    }

    /// Canvas size in pixels, or `None` if a side exceeds `MAX_CANVAS_SIDE`.
    pub fn canvas_size(&self) -> Option<(u32, u32)>{
        let w = span(self.cell_width, self.columns, self.padding)?;
        let h = span(self.cell_height, self.rows, self.padding)?;
        let max = MAX_CANVAS_SIDE as u64;
        if w > max || h > max {
            return None;
        }
        Some((w as u32, h as u32))
    }

    /// Canvas size without the side limit, for error reporting.
    pub fn canvas_size_wide(&self) -> (u64, u64){
        (
            span(self.cell_width, self.columns, self.padding).unwrap_or(u64::MAX),
            span(self.cell_height, self.rows, self.padding).unwrap_or(u64::MAX),
        )
    }

    /// Row and column of the image at `index`.
    pub fn cell_of(&self, index: usize) -> (usize, usize){
        (index / self.columns, index % self.columns)
    }

    /// Top-left pixel of the cell holding the image at `index`.
    pub fn cell_origin(&self, index: usize) -> (i64, i64){
        let (row, col) = self.cell_of(index);
        let x = col as i64 * self.cell_width as i64 + self.padding as i64 * (col as i64 + 1);
        let y = row as i64 * self.cell_height as i64 + self.padding as i64 * (row as i64 + 1);
        (x, y)
    }
}

/// `ceil(sqrt(count))`, at least 1.
pub fn auto_columns(count: usize) -> usize{
    let mut c = (count as f64).sqrt().ceil() as usize;
    // float sqrt can be off by one for large counts
    while c > 1 && (c - 1) * (c - 1) >= count { c -= 1; }
    while c * c < count { c += 1; }
    c.max(1)
}

/// Width of `n` cells of size `cell` plus `n + 1` paddings.
fn span(cell: u32, n: usize, padding: u32) -> Option<u64>{
    let n = u64::try_from(n).ok()?;
    (cell as u64).checked_mul(n)?
        .checked_add((padding as u64).checked_mul(n.checked_add(1)?)?)
}

/// Normalized width for an image of `width`x`height`. `height` must be non-zero.
pub fn scaled_width(width: u32, height: u32) -> u32{
    let w = (TARGET_HEIGHT as f64 * width as f64 / height as f64).round();
    (w as u32).max(1)
}
