/// Palette de densité, du plus dense (sombre) au plus clair.
///
/// Index 0 is used for black samples; higher buckets move towards the
/// sparse end of the palette.
pub const PALETTE: [char; 22] = [
    '@', '%', '#', '*', '+', '=', '-', ':', '.', '[', ']', '{', '}', ';', ',', '<', '>', '/', '?',
    '\\', '|', ' ',
];

/// Palette index for an intensity sample: `floor(sample / bucket_width)`.
///
/// Returns `None` when the index falls outside [`PALETTE`] or when
/// `bucket_width` is zero.
///
/// # Example
/// ```
/// use ax_core::charset::palette_index;
/// assert_eq!(palette_index(128, 25), Some(5));
/// assert_eq!(palette_index(255, 5), None);
/// ```
#[inline(always)]
#[must_use]
pub fn palette_index(sample: u8, bucket_width: u8) -> Option<usize> {
    if bucket_width == 0 {
        return None;
    }
    let index = usize::from(sample / bucket_width);
    (index < PALETTE.len()).then_some(index)
}

/// Lookup table mapping intensity [0..255] → palette character.
///
/// Pre-computed once per bucket width for O(1) per-sample cost.
/// Entries whose bucket overflows the palette are `None`.
///
/// # Example
/// ```
/// use ax_core::charset::BucketLut;
/// let lut = BucketLut::new(25);
/// assert_eq!(lut.map(0), Some('@'));
/// assert_eq!(lut.map(255), Some(']'));
/// ```
#[derive(Clone)]
pub struct BucketLut {
    lut: [Option<char>; 256],
    bucket_width: u8,
}

impl BucketLut {
    /// Build the table for the given bucket width.
    #[must_use]
    pub fn new(bucket_width: u8) -> Self {
        let mut lut = [None; 256];
        for (sample, slot) in (0..=u8::MAX).zip(lut.iter_mut()) {
            *slot = palette_index(sample, bucket_width).map(|i| PALETTE[i]);
        }
        Self { lut, bucket_width }
    }

    /// Map an intensity sample to its palette character.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, sample: u8) -> Option<char> {
        self.lut[usize::from(sample)]
    }

    /// Bucket width this table was built for.
    #[must_use]
    pub fn bucket_width(&self) -> u8 {
        self.bucket_width
    }
}
