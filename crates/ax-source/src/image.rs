use std::path::Path;

use anyhow::Result;
use ax_core::error::CoreError;
use image::RgbImage;

/// Decode an image file into 8-bit RGB.
///
/// PNG, JPEG, BMP and GIF are supported. Alpha is dropped.
///
/// # Errors
/// Returns [`CoreError::FileNotFound`] if the path does not exist,
/// [`CoreError::Decode`] if the content cannot be decoded, and
/// [`CoreError::DegenerateImage`] for zero-sized images.
///
/// # Example
/// ```no_run
/// use ax_source::image::load_image;
/// use std::path::Path;
/// let img = load_image(Path::new("photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<RgbImage> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let img = image::open(path).map_err(|e| CoreError::Decode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    log::debug!(
        "Image chargée : {} ({}×{})",
        path.display(),
        img.width(),
        img.height()
    );
    check_dimensions(img.to_rgb8())
}

/// Decode an in-memory encoded image (format guessed from the header).
///
/// # Errors
/// Same taxonomy as [`load_image`], with `"<memory>"` as the path.
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes).map_err(|e| CoreError::Decode {
        path: "<memory>".into(),
        reason: e.to_string(),
    })?;
    check_dimensions(img.to_rgb8())
}

fn check_dimensions(img: RgbImage) -> Result<RgbImage> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(CoreError::DegenerateImage { width, height }.into());
    }
    Ok(img)
}
