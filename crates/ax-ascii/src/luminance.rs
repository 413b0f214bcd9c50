use ax_core::config::LumaWeights;
use image::{GrayImage, Luma, RgbImage};

/// Luminance pondérée d'un pixel RGB, en virgule fixe.
///
/// # Example
/// ```
/// use ax_ascii::luminance::luma;
/// use ax_core::config::LumaWeights;
/// assert_eq!(luma(255, 255, 255, LumaWeights::Bt601), 255);
/// assert_eq!(luma(128, 128, 128, LumaWeights::Bt709), 128);
/// ```
#[inline(always)]
#[must_use]
pub fn luma(r: u8, g: u8, b: u8, weights: LumaWeights) -> u8 {
    let (r, g, b) = (u32::from(r), u32::from(g), u32::from(b));
    let y = match weights {
        LumaWeights::Bt601 => (r * 2990 + g * 5870 + b * 1140 + 5000) / 10000,
        LumaWeights::Bt709 => (r * 2126 + g * 7152 + b * 722 + 5000) / 10000,
    };
    y.min(255) as u8
}

/// Reduce an RGB image to a single-channel intensity image of the same size.
///
/// # Example
/// ```
/// use ax_ascii::luminance::to_luminance;
/// use ax_core::config::LumaWeights;
/// use image::{Rgb, RgbImage};
/// let img = RgbImage::from_pixel(3, 2, Rgb([128, 128, 128]));
/// let gray = to_luminance(&img, LumaWeights::Bt601);
/// assert_eq!(gray.dimensions(), (3, 2));
/// assert!(gray.pixels().all(|p| p.0[0] == 128));
/// ```
#[must_use]
pub fn to_luminance(img: &RgbImage, weights: LumaWeights) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b] = img.get_pixel(x, y).0;
        Luma([luma(r, g, b, weights)])
    })
}
