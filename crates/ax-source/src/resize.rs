use anyhow::{Context, Result};
use ax_core::config::{ConvertConfig, MAX_FRAME_CELLS};
use ax_core::error::CoreError;
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbImage;

/// Output dimensions for a `width`×`height` source shrunk to `target_width`.
///
/// Height is `round(target_width × height / width / vertical_compensation)`,
/// so the picture keeps its proportions once drawn with character cells
/// taller than wide.
///
/// # Errors
/// Returns [`CoreError::DegenerateImage`] if the source has a zero dimension
/// or the computed height rounds to zero, and [`CoreError::Config`] if the
/// output would exceed [`MAX_FRAME_CELLS`].
///
/// # Example
/// ```
/// use ax_source::resize::target_size;
/// assert_eq!(target_size(200, 100, 100, 1.65).unwrap(), (100, 30));
/// ```
pub fn target_size(
    width: u32,
    height: u32,
    target_width: u32,
    vertical_compensation: f32,
) -> Result<(u32, u32), CoreError> {
    if width == 0 || height == 0 || target_width == 0 {
        return Err(CoreError::DegenerateImage { width, height });
    }
    let ratio = f64::from(height) / f64::from(width) / f64::from(vertical_compensation);
    let new_height = (f64::from(target_width) * ratio).round();
    if !new_height.is_finite() || new_height > MAX_FRAME_CELLS as f64 {
        return Err(too_large(target_width, new_height));
    }
    let new_height = new_height as u32;
    if new_height == 0 {
        return Err(CoreError::DegenerateImage {
            width: target_width,
            height: new_height,
        });
    }
    if u64::from(target_width) * u64::from(new_height) > MAX_FRAME_CELLS {
        return Err(too_large(target_width, f64::from(new_height)));
    }
    Ok((target_width, new_height))
}

fn too_large(width: u32, height: f64) -> CoreError {
    CoreError::Config(format!(
        "sortie {width}×{height} au-delà de {MAX_FRAME_CELLS} caractères"
    ))
}

/// Resize `src` into `dst` with bilinear convolution. Dimensions of `dst`
/// determine output size.
///
/// # Errors
/// Returns an error if either image has invalid dimensions or the resize fails.
///
/// # Example
/// ```
/// use ax_source::resize::resize_into;
/// use image::RgbImage;
/// let src = RgbImage::new(100, 100);
/// let mut dst = RgbImage::new(50, 20);
/// resize_into(&src, &mut dst).unwrap();
/// ```
pub fn resize_into(src: &RgbImage, dst: &mut RgbImage) -> Result<()> {
    if src.dimensions() == dst.dimensions() {
        dst.copy_from_slice(src.as_raw());
        return Ok(());
    }

    // fast_image_resize wants `&mut` on the source buffer.
    let mut src_buf = src.as_raw().clone();
    let src_image = Image::from_slice_u8(src.width(), src.height(), &mut src_buf, PixelType::U8x3)
        .context("Invalid source dimensions")?;

    let (width, height) = dst.dimensions();
    let mut dst_image = Image::from_slice_u8(width, height, &mut **dst, PixelType::U8x3)
        .context("Invalid destination dimensions")?;

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear));
    Resizer::new()
        .resize(&src_image, &mut dst_image, Some(&options))
        .context("Resize failed")?;

    Ok(())
}

/// Shrink `src` to `config.target_width` with vertical compensation applied.
///
/// # Errors
/// Returns [`CoreError::DegenerateImage`] for zero-sized input or output,
/// [`CoreError::Config`] for an oversized output, or an error if the resize
/// itself fails.
///
/// # Example
/// ```
/// use ax_source::resize::resize_to_width;
/// use ax_core::config::ConvertConfig;
/// use image::RgbImage;
/// let src = RgbImage::new(200, 100);
/// let dst = resize_to_width(&src, &ConvertConfig::default()).unwrap();
/// assert_eq!(dst.dimensions(), (100, 30));
/// ```
pub fn resize_to_width(src: &RgbImage, config: &ConvertConfig) -> Result<RgbImage> {
    let (width, height) = target_size(
        src.width(),
        src.height(),
        config.target_width,
        config.vertical_compensation,
    )?;
    log::debug!(
        "Redimensionnement {}×{} → {width}×{height}",
        src.width(),
        src.height()
    );
    let mut dst = RgbImage::new(width, height);
    resize_into(src, &mut dst)?;
    Ok(dst)
}
