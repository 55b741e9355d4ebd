use crate::{
    errors::{ CollageError, CollageResult },
    layout::{ scaled_width, GridLayout, TARGET_HEIGHT },
};

use image::{
    imageops::FilterType,
    ImageReader as IR,
    RgbaImage,
};

use tracing::debug;

use std::path::Path;

/// A source image scaled to `TARGET_HEIGHT`, aspect ratio kept.
pub struct NormalizedImage{
    pub pixels: RgbaImage,
}

impl NormalizedImage{
    pub fn width(&self) -> u32{
        self.pixels.width()
    }

    pub fn height(&self) -> u32{
        self.pixels.height()
    }
}

/// Decode `path` and resize it to the target height.
pub fn load_normalized(path: &Path) -> CollageResult<NormalizedImage>{
    let img = IR::open(path)
        .map_err(|e| CollageError::load(path, e))?
        .with_guessed_format()
        .map_err(|e| CollageError::load(path, e))?
        .decode()
        .map_err(|e| CollageError::load(path, e))?;

    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(CollageError::load(path, format!("invalid dimensions {w}x{h}")));
    }

    let nw = scaled_width(w, h);
    // an image too wide for a one-cell canvas can never be placed
    let alone = GridLayout::compute(&[nw], None);
    if alone.canvas_size().is_none() {
        let (width, height) = alone.canvas_size_wide();
        return Err(CollageError::CanvasCreationFailed{ width, height });
    }

    let pixels = img.resize_exact(nw, TARGET_HEIGHT, FilterType::Lanczos3).into_rgba8();
    let normalized = NormalizedImage{ pixels };
    debug!(
        "{}: {}x{} -> {}x{}",
        path.display(), w, h, normalized.width(), normalized.height()
    );
    Ok(normalized)
}

/// Normalize every path in order, stopping at the first failure.
pub fn load_all(paths: &[impl AsRef<Path>]) -> CollageResult<Vec<NormalizedImage>>{
    paths.iter().map(|p| load_normalized(p.as_ref())).collect()
}

#[cfg(test)]
mod tests{
    use super::*;

    use image::{ Rgb, RgbImage };

    fn write_fixture(dir: &Path, name: &str, w: u32, h: u32) -> std::path::PathBuf{
        let path = dir.join(name);
        RgbImage::from_pixel(w, h, Rgb([200, 30, 30])).save(&path).unwrap();
        path
    }

    #[test]
    fn landscape_and_portrait_reach_target_height(){
        let dir = tempfile::tempdir().unwrap();
        let wide = write_fixture(dir.path(), "wide.png", 320, 180);
        let tall = write_fixture(dir.path(), "tall.png", 90, 160);

        let wide = load_normalized(&wide).unwrap();
        assert_eq!((wide.width(), wide.height()), (1067, 600));
        let tall = load_normalized(&tall).unwrap();
        assert_eq!((tall.width(), tall.height()), (338, 600));
    }

    #[test]
    fn format_is_guessed_from_content(){
        let dir = tempfile::tempdir().unwrap();
        let png = write_fixture(dir.path(), "a.png", 60, 60);
        let renamed = dir.path().join("a.jpg");
        std::fs::rename(&png, &renamed).unwrap();
        let img = load_normalized(&renamed).unwrap();
        assert_eq!((img.width(), img.height()), (600, 600));
    }

    #[test]
    fn missing_file_is_a_load_failure(){
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.png");
        match load_normalized(&missing){
            Err(CollageError::ImageLoadFailed{ path, .. }) => assert_eq!(path, missing),
            other => panic!("unexpected: {:?}", other.map(|i| i.width())),
        }
    }

    #[test]
    fn garbage_is_a_load_failure(){
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        assert!(matches!(load_normalized(&path), Err(CollageError::ImageLoadFailed{ .. })));
    }

    #[test]
    fn extreme_panorama_is_rejected_before_resizing(){
        let dir = tempfile::tempdir().unwrap();
        let strip = write_fixture(dir.path(), "strip.png", 1000, 1);
        match load_normalized(&strip){
            Err(CollageError::CanvasCreationFailed{ width, height }) => {
                assert_eq!(width, 600_000 + 20);
                assert_eq!(height, 620);
            },
            other => panic!("unexpected: {:?}", other.map(|i| i.width())),
        }
    }

    #[test]
    fn load_all_stops_at_first_failure(){
        let dir = tempfile::tempdir().unwrap();
        let good = write_fixture(dir.path(), "good.png", 10, 10);
        let bad = dir.path().join("bad.png");
        let paths = vec![good.clone(), bad.clone(), good];
        match load_all(&paths){
            Err(CollageError::ImageLoadFailed{ path, .. }) => assert_eq!(path, bad),
            _ => panic!("expected a load failure"),
        }
    }
}
