//! The ordered list of images a collage is built from.
//!
//! Picked files replace the list as given. Dropped files are filtered by
//! extension and appended only if not already present.

use tracing::warn;

use std::path::{ Path, PathBuf };

/// Extensions accepted from dropped files, lowercase.
pub const DROP_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "heic", "webp",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection{
    paths: Vec<PathBuf>,
}

impl Selection{
    pub fn new() -> Self{
        Self::default()
    }

    pub fn replace(&mut self, picked: impl IntoIterator<Item = PathBuf>){
        self.clear();
        self.paths.extend(picked);
    }

    /// Returns how many paths were appended.
    pub fn append_dropped(&mut self, dropped: impl IntoIterator<Item = PathBuf>) -> usize{
        let mut added = 0;
        for path in dropped {
            if !has_image_extension(&path) {
                warn!("Skipping {}: not an image file", path.display());
                continue;
            }
            if self.paths.contains(&path) {
                continue;
            }
            self.paths.push(path);
            added += 1;
        }
        added
    }

    pub fn clear(&mut self){
        self.paths.clear();
    }

    pub fn paths(&self) -> &[PathBuf]{
        &self.paths
    }

    pub fn len(&self) -> usize{
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool{
        self.paths.is_empty()
    }

    pub fn can_export(&self) -> bool{
        !self.is_empty()
    }
}

pub fn has_image_extension(path: &Path) -> bool{
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| DROP_EXTENSIONS.contains(&e.as_str()))
}
