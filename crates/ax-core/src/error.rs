use thiserror::Error;

/// Errors originating from the conversion pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Referenced image file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// The image exists but could not be decoded.
    #[error("Décodage impossible de {path} : {reason}")]
    Decode {
        /// Path of the image.
        path: String,
        /// Decoder message.
        reason: String,
    },

    /// Zero width or height, before or after resizing.
    #[error("Dimensions dégénérées : {width}×{height}")]
    DegenerateImage {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// An intensity sample whose bucket falls outside the palette.
    #[error(
        "Échantillon hors palette : valeur {value}, largeur de bucket {bucket_width}, index {index} ≥ {palette_len}"
    )]
    SampleRange {
        /// Offending intensity.
        value: u8,
        /// Bucket width in use.
        bucket_width: u8,
        /// Computed palette index.
        index: usize,
        /// Palette length.
        palette_len: usize,
    },
}
