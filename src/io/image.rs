//! Sample image decoding and PNG export of synthesized grids

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::{PixelBuffer, PixelGrid};
use image::RgbaImage;
use std::path::Path;

/// Decode an image file into an RGBA pixel buffer
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a supported image format
pub fn load_pixel_buffer<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let rgba = image::open(path)
        .map_err(|e| AlgorithmError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_rgba8();

    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    PixelBuffer::from_rgba(width, height, rgba.into_raw())
}

/// Export a grid as a PNG; unpainted cells become fully transparent
///
/// # Errors
///
/// Returns an error if:
/// - The grid is larger than an image can address
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png<P: AsRef<Path>>(grid: &PixelGrid, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let buffer = grid.to_rgba();

    let too_large = || AlgorithmError::InvalidSourceData {
        reason: format!("{}x{} grid exceeds image limits", grid.width(), grid.height()),
    };
    let width = u32::try_from(buffer.width()).map_err(|_overflow| too_large())?;
    let height = u32::try_from(buffer.height()).map_err(|_overflow| too_large())?;
    let img = RgbaImage::from_raw(width, height, buffer.into_bytes()).ok_or_else(too_large)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
