use crate::errors::{ CollageError, CollageResult };

use image::{
    codecs::{ jpeg::JpegEncoder, png::PngEncoder },
    DynamicImage,
    RgbaImage,
};

use tracing::debug;

use std::{
    fs,
    io::{ BufWriter, Write },
    path::Path,
};

pub const JPEG_QUALITY: u8 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat{
    Png,
    Jpeg,
}

impl OutputFormat{
    /// `.png` (any case) selects PNG, everything else JPEG.
    pub fn from_path(path: &Path) -> Self{
        match path.extension().and_then(|e| e.to_str()){
            Some(ext) if ext.eq_ignore_ascii_case("png") => Self::Png,
            _ => Self::Jpeg,
        }
    }
}

/// Encode `canvas` and move it over `output`. Nothing is left at `output` on failure.
pub fn save_canvas(canvas: RgbaImage, output: &Path) -> CollageResult<()>{
    let format = OutputFormat::from_path(output);
    let rgb = DynamicImage::ImageRgba8(canvas).into_rgb8();

    let dir = match output.parent(){
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(".collage-").suffix(".tmp");
    // same mode a plain create would get, umask applied
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| CollageError::save(format!("{}: {e}", dir.display())))?;
    debug!("encoding {:?} via {}", format, tmp.path().display());

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let res = match format{
            OutputFormat::Png => rgb.write_with_encoder(PngEncoder::new(&mut writer)),
            OutputFormat::Jpeg => rgb.write_with_encoder(
                JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
            ),
        };
        res.map_err(CollageError::save)?;
        writer.flush().map_err(CollageError::save)?;
    }

    if let Ok(meta) = fs::metadata(output) {
        fs::set_permissions(tmp.path(), meta.permissions()).map_err(CollageError::save)?;
    }
    tmp.persist(output).map_err(|e| CollageError::save(e.error))?;
    Ok(())
}
