use std::path::Path;

use anyhow::{Context, Result};
use ax_ascii::palette::SampleDiagnostic;
use ax_core::config::ConvertConfig;
use ax_core::frame::AsciiFrame;
use image::RgbImage;

/// Result of a successful conversion.
#[derive(Clone, Debug)]
pub struct Conversion {
    /// The rendered frame.
    pub frame: AsciiFrame,
    /// Samples with no palette entry, already logged by the mapper.
    pub skipped: Vec<SampleDiagnostic>,
}

/// Run resize → luminance → palette → lines on `image`.
///
/// # Errors
/// Returns an error if the config is invalid or a stage fails
/// (degenerate dimensions, resize failure).
///
/// # Example
/// ```
/// use ax_app::pipeline::try_convert;
/// use ax_core::config::ConvertConfig;
/// use image::{Rgb, RgbImage};
/// let img = RgbImage::from_pixel(200, 100, Rgb([128, 128, 128]));
/// let out = try_convert(&img, &ConvertConfig::default()).unwrap();
/// assert_eq!(out.frame.height(), 30);
/// ```
pub fn try_convert(image: &RgbImage, config: &ConvertConfig) -> Result<Conversion> {
    config.validate()?;

    let resized = ax_source::resize::resize_to_width(image, config)
        .context("Échec du redimensionnement")?;
    let gray = ax_ascii::luminance::to_luminance(&resized, config.luma);
    let mapped = ax_ascii::palette::map_samples(&gray, config);
    if !mapped.skipped.is_empty() {
        log::warn!(
            "{} échantillon(s) hors palette (bucket {})",
            mapped.skipped.len(),
            config.bucket_width
        );
    }
    let frame = ax_ascii::lines::assemble(&mapped.chars, gray.width());
    log::debug!("Frame ASCII : {}×{}", frame.width(), frame.height());

    Ok(Conversion {
        frame,
        skipped: mapped.skipped,
    })
}

/// Convert `image` to ASCII text; failures are logged and yield `""`.
///
/// # Example
/// ```
/// use ax_app::pipeline::convert_image;
/// use ax_core::config::ConvertConfig;
/// use image::RgbImage;
/// let text = convert_image(&RgbImage::new(0, 0), &ConvertConfig::default());
/// assert!(text.is_empty());
/// ```
#[must_use]
pub fn convert_image(image: &RgbImage, config: &ConvertConfig) -> String {
    match try_convert(image, config) {
        Ok(conversion) => conversion.frame.into_text(),
        Err(e) => {
            log::error!("Erreur de conversion : {e:#}");
            String::new()
        }
    }
}

/// Decode the image at `path` and convert it; failures yield `""`.
#[must_use]
pub fn convert_path(path: &Path, config: &ConvertConfig) -> String {
    match ax_source::image::load_image(path) {
        Ok(image) => convert_image(&image, config),
        Err(e) => {
            log::error!("Erreur de chargement : {e:#}");
            String::new()
        }
    }
}

/// Decode an encoded image held in memory and convert it; failures yield `""`.
///
/// # Example
/// ```
/// use ax_app::pipeline::convert_bytes;
/// use ax_core::config::ConvertConfig;
/// assert!(convert_bytes(b"not an image", &ConvertConfig::default()).is_empty());
/// ```
#[must_use]
pub fn convert_bytes(bytes: &[u8], config: &ConvertConfig) -> String {
    match ax_source::image::decode_bytes(bytes) {
        Ok(image) => convert_image(&image, config),
        Err(e) => {
            log::error!("Erreur de décodage : {e:#}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ax_core::charset::PALETTE;
    use ax_core::config::OverflowPolicy;
    use ax_core::error::CoreError;
    use image::Rgb;

    #[test]
    fn solid_gray_end_to_end() {
        let img = RgbImage::from_pixel(200, 100, Rgb([128, 128, 128]));
        let text = convert_image(&img, &ConvertConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 30);
        for line in lines {
            assert_eq!(line.chars().count(), 100);
            assert!(line.chars().all(|c| c == PALETTE[5]));
        }
    }

    #[test]
    fn black_and_white_extremes() {
        let config = ConvertConfig {
            target_width: 20,
            ..ConvertConfig::default()
        };
        let black = convert_image(&RgbImage::from_pixel(40, 40, Rgb([0; 3])), &config);
        assert!(black.lines().all(|l| l.chars().all(|c| c == PALETTE[0])));
        let white = convert_image(&RgbImage::from_pixel(40, 40, Rgb([255; 3])), &config);
        assert!(white.lines().all(|l| l.chars().all(|c| c == PALETTE[10])));
    }

    #[test]
    fn conversion_is_deterministic() {
        let img = RgbImage::from_fn(123, 77, |x, y| {
            Rgb([(x * 2) as u8, (y * 3) as u8, ((x ^ y) & 0xff) as u8])
        });
        let config = ConvertConfig::default();
        assert_eq!(convert_image(&img, &config), convert_image(&img, &config));
    }

    #[test]
    fn degenerate_image_yields_empty_string() {
        assert_eq!(convert_image(&RgbImage::new(0, 5), &ConvertConfig::default()), "");
        let err = try_convert(&RgbImage::new(0, 5), &ConvertConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::DegenerateImage { .. })
        ));
    }

    #[test]
    fn invalid_config_yields_empty_string() {
        let config = ConvertConfig {
            bucket_width: 0,
            ..ConvertConfig::default()
        };
        let img = RgbImage::from_pixel(10, 10, Rgb([1, 2, 3]));
        assert_eq!(convert_image(&img, &config), "");
    }

    #[test]
    fn placeholder_keeps_rows_aligned() {
        let config = ConvertConfig {
            target_width: 10,
            bucket_width: 5,
            placeholder: '!',
            ..ConvertConfig::default()
        };
        let img = RgbImage::from_pixel(20, 33, Rgb([250; 3]));
        let out = try_convert(&img, &config).unwrap();
        assert_eq!(out.skipped.len(), 10 * out.frame.height() as usize);
        assert!(out.frame.rows().iter().all(|r| r == "!!!!!!!!!!"));
    }

    #[test]
    fn skip_policy_shortens_output() {
        let config = ConvertConfig {
            target_width: 10,
            bucket_width: 5,
            overflow: OverflowPolicy::Skip,
            ..ConvertConfig::default()
        };
        let img = RgbImage::from_pixel(20, 33, Rgb([250; 3]));
        let out = try_convert(&img, &config).unwrap();
        assert!(out.frame.is_empty());
        assert_eq!(out.frame.into_text(), "");
        assert_eq!(out.skipped.len(), 10 * 10);
    }

    #[test]
    fn missing_path_yields_empty_string() {
        let path = Path::new("/nonexistent/image.jpg");
        assert!(convert_path(path, &ConvertConfig::default()).is_empty());
        let err = ax_source::image::load_image(path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
    }

    #[test]
    fn huge_target_width_yields_empty_string() {
        let config = ConvertConfig {
            target_width: u32::MAX,
            ..ConvertConfig::default()
        };
        let img = RgbImage::from_pixel(1, 1, Rgb([128; 3]));
        assert_eq!(convert_image(&img, &config), "");
        let err = try_convert(&img, &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::Config(_))
        ));
    }

    #[test]
    fn tiny_vertical_compensation_yields_empty_string() {
        let config = ConvertConfig {
            vertical_compensation: 1e-30,
            ..ConvertConfig::default()
        };
        let img = RgbImage::from_pixel(1, 1, Rgb([128; 3]));
        assert_eq!(convert_image(&img, &config), "");
    }

    #[test]
    fn encoded_bytes_convert_like_the_image() {
        let img = RgbImage::from_pixel(200, 100, Rgb([128; 3]));
        let mut png = std::io::Cursor::new(Vec::new());
        img.write_to(&mut png, image::ImageFormat::Png).unwrap();
        let config = ConvertConfig::default();
        assert_eq!(
            convert_bytes(png.get_ref(), &config),
            convert_image(&img, &config)
        );
        assert_eq!(convert_bytes(&[0, 1, 2, 3], &config), "");
    }
}
