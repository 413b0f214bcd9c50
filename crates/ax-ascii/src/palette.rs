use ax_core::charset::{BucketLut, PALETTE};
use ax_core::config::{ConvertConfig, OverflowPolicy};
use ax_core::error::CoreError;
use image::GrayImage;
use rayon::prelude::*;

/// Un échantillon dont le bucket dépasse la palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleDiagnostic {
    /// Column in the grayscale image.
    pub x: u32,
    /// Row in the grayscale image.
    pub y: u32,
    /// Intensity as fed to the mapper (after inversion).
    pub value: u8,
    /// Bucket width in use.
    pub bucket_width: u8,
    /// Palette index that was out of range.
    pub index: usize,
}

impl From<SampleDiagnostic> for CoreError {
    fn from(d: SampleDiagnostic) -> Self {
        CoreError::SampleRange {
            value: d.value,
            bucket_width: d.bucket_width,
            index: d.index,
            palette_len: PALETTE.len(),
        }
    }
}

/// Flat character stream plus the samples that had no palette entry.
#[derive(Clone, Debug, Default)]
pub struct MappedSamples {
    /// Characters in row-major order.
    pub chars: Vec<char>,
    /// Out-of-range samples, in row-major order.
    pub skipped: Vec<SampleDiagnostic>,
}

/// Map every intensity sample to a palette character, row-major.
///
/// Rows are mapped in parallel and concatenated in order. A sample whose
/// bucket overflows the palette never aborts the conversion: it is logged,
/// recorded in [`MappedSamples::skipped`], and either replaced by
/// `config.placeholder` or dropped, depending on `config.overflow`.
///
/// # Example
/// ```
/// use ax_ascii::palette::map_samples;
/// use ax_core::config::ConvertConfig;
/// use image::{GrayImage, Luma};
/// let gray = GrayImage::from_pixel(4, 2, Luma([0]));
/// let mapped = map_samples(&gray, &ConvertConfig::default());
/// assert_eq!(mapped.chars, vec!['@'; 8]);
/// assert!(mapped.skipped.is_empty());
/// ```
#[must_use]
pub fn map_samples(gray: &GrayImage, config: &ConvertConfig) -> MappedSamples {
    let width = gray.width() as usize;
    if width == 0 {
        return MappedSamples::default();
    }
    let lut = BucketLut::new(config.bucket_width);

    let rows: Vec<(Vec<char>, Vec<SampleDiagnostic>)> = gray
        .as_raw()
        .par_chunks(width)
        .enumerate()
        .map(|(y, row)| map_row(row, y as u32, &lut, config))
        .collect();

    let mut mapped = MappedSamples {
        chars: Vec::with_capacity(gray.as_raw().len()),
        skipped: Vec::new(),
    };
    for (chars, skipped) in rows {
        mapped.chars.extend(chars);
        mapped.skipped.extend(skipped);
    }
    mapped
}

fn map_row(
    row: &[u8],
    y: u32,
    lut: &BucketLut,
    config: &ConvertConfig,
) -> (Vec<char>, Vec<SampleDiagnostic>) {
    let mut chars = Vec::with_capacity(row.len());
    let mut skipped = Vec::new();

    for (x, &sample) in row.iter().enumerate() {
        let value = if config.invert { 255 - sample } else { sample };
        if let Some(ch) = lut.map(value) {
            chars.push(ch);
            continue;
        }

        let diag = SampleDiagnostic {
            x: x as u32,
            y,
            value,
            bucket_width: lut.bucket_width(),
            index: usize::from(value / lut.bucket_width().max(1)),
        };
        log::warn!(
            "Échantillon ({}, {}) hors palette : valeur {}, largeur de bucket {}",
            diag.x,
            diag.y,
            diag.value,
            diag.bucket_width
        );
        if config.overflow == OverflowPolicy::Placeholder {
            chars.push(config.placeholder);
        }
        skipped.push(diag);
    }

    (chars, skipped)
}
