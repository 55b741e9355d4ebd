use crate::{
    errors::{ CollageError, CollageResult },
    layout::GridLayout,
    normalize::NormalizedImage,
};

use image::{ imageops, RgbaImage };

pub const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// Allocate a white canvas sized for `layout`.
pub fn create_white_canvas(layout: &GridLayout) -> CollageResult<RgbaImage>{
    let fail = || {
        let (width, height) = layout.canvas_size_wide();
        CollageError::CanvasCreationFailed{ width, height }
    };
    let (w, h) = layout.canvas_size().ok_or_else(fail)?;
    if w == 0 || h == 0 {
        return Err(fail());
    }
    let len = (w as usize)
        .checked_mul(h as usize)
        .and_then(|n| n.checked_mul(BACKGROUND.len()))
        .ok_or_else(fail)?;

    let mut raw = Vec::new();
    raw.try_reserve_exact(len).map_err(|_| fail())?;
    raw.extend(BACKGROUND.iter().copied().cycle().take(len));
    RgbaImage::from_raw(w, h, raw).ok_or_else(fail)
}

/// Draw `img` unscaled with its top-left corner in the cell for `index`.
/// Transparent pixels blend over the background.
pub fn paint(canvas: &mut RgbaImage, layout: &GridLayout, index: usize, img: &NormalizedImage){
    let (x, y) = layout.cell_origin(index);
    imageops::overlay(canvas, &img.pixels, x, y);
}
