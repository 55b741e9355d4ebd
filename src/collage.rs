use crate::{
    canvas::{ create_white_canvas, paint },
    encode::save_canvas,
    errors::{ CollageError, CollageResult },
    layout::GridLayout,
    normalize::load_all,
    timer::Timer,
};

use tracing::info;

use std::{
    num::NonZeroUsize,
    path::Path,
};

/// Build a collage of `image_paths` in order and write it to `output_path`.
///
/// Images are scaled to a common height and laid out left to right, top to
/// bottom, `images_per_row` per row (`ceil(sqrt(n))` when absent). The output
/// format follows the extension of `output_path`: `.png` is written as PNG,
/// anything else as JPEG.
///
/// Any failure aborts the build and leaves `output_path` untouched.
pub fn create_collage(
    image_paths: &[impl AsRef<Path>],
    output_path: &Path,
    images_per_row: Option<NonZeroUsize>,
) -> CollageResult<GridLayout>{
    if image_paths.is_empty() {
        return Err(CollageError::NoImages);
    }
    let mut timer = Timer::new();

    let images = load_all(image_paths)?;
    info!("Loaded {} images: {:?}ms", images.len(), timer.lap());

    let widths: Vec<u32> = images.iter().map(|i| i.width()).collect();
    let layout = GridLayout::compute(&widths, images_per_row);
    info!(
        "Grid: {}x{} cells of {}x{}",
        layout.columns, layout.rows, layout.cell_width, layout.cell_height
    );

    let mut canvas = create_white_canvas(&layout)?;
    for (i, img) in images.into_iter().enumerate() {
        paint(&mut canvas, &layout, i, &img);
    }
    info!("Canvas {}x{}: {:?}ms", canvas.width(), canvas.height(), timer.lap());

    save_canvas(canvas, output_path)?;
    info!("Saved {}: {:?}ms (total {:?}ms)", output_path.display(), timer.lap(), timer.total());
    Ok(layout)
}
