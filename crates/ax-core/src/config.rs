use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Largeur cible par défaut, en caractères.
pub const DEFAULT_TARGET_WIDTH: u32 = 100;

/// Intervalle d'intensité couvert par un caractère de la palette.
pub const DEFAULT_BUCKET_WIDTH: u8 = 25;

/// Terminal cells are roughly 1.65× taller than wide.
pub const DEFAULT_VERTICAL_COMPENSATION: f32 = 1.65;

/// Plafond de la taille de sortie, en caractères (4096 × 4096).
///
/// The resized RGB buffer is 3 bytes per cell, so this caps it at 48 MiB.
pub const MAX_FRAME_CELLS: u64 = 4096 * 4096;

/// Paramètres de conversion image → ASCII.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use ax_core::config::ConvertConfig;
/// let config = ConvertConfig::default();
/// assert_eq!(config.target_width, 100);
/// assert_eq!(config.bucket_width, 25);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ConvertConfig {
    /// Largeur de sortie en caractères.
    pub target_width: u32,
    /// Span of intensity values mapped to one palette character.
    pub bucket_width: u8,
    /// Divisor applied to the resized height to correct the cell aspect ratio.
    pub vertical_compensation: f32,
    /// Pondération luminance.
    pub luma: LumaWeights,
    /// Traitement des échantillons hors palette.
    pub overflow: OverflowPolicy,
    /// Caractère substitué quand `overflow` vaut `Placeholder`.
    pub placeholder: char,
    /// Inverser la luminance (pour fond clair).
    pub invert: bool,
}

/// Luminance weighting used by the reducer.
///
/// # Example
/// ```
/// use ax_core::config::LumaWeights;
/// assert_eq!(LumaWeights::default(), LumaWeights::Bt601);
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum LumaWeights {
    /// ITU-R BT.601 : 0.299 R + 0.587 G + 0.114 B.
    #[default]
    Bt601,
    /// ITU-R BT.709 : 0.2126 R + 0.7152 G + 0.0722 B.
    Bt709,
}

/// What the palette mapper does with a sample whose bucket overflows the palette.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Emit the placeholder character so rows keep their width.
    #[default]
    Placeholder,
    /// Drop the character. Later rows shift left.
    Skip,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            bucket_width: DEFAULT_BUCKET_WIDTH,
            vertical_compensation: DEFAULT_VERTICAL_COMPENSATION,
            luma: LumaWeights::Bt601,
            overflow: OverflowPolicy::Placeholder,
            placeholder: ' ',
            invert: false,
        }
    }
}

impl ConvertConfig {
    /// Check every parameter the pipeline divides by or sizes with.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] naming the first invalid field.
    ///
    /// # Example
    /// ```
    /// use ax_core::config::ConvertConfig;
    /// let mut config = ConvertConfig::default();
    /// assert!(config.validate().is_ok());
    /// config.bucket_width = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.target_width == 0 {
            return Err(CoreError::Config("target_width doit être > 0".into()));
        }
        if self.bucket_width == 0 {
            return Err(CoreError::Config("bucket_width doit être > 0".into()));
        }
        if !self.vertical_compensation.is_finite() || self.vertical_compensation <= 0.0 {
            return Err(CoreError::Config(format!(
                "vertical_compensation doit être fini et > 0 (reçu {})",
                self.vertical_compensation
            )));
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    convert: Option<ConvertSection>,
}

/// Convert section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct ConvertSection {
    target_width: Option<u32>,
    bucket_width: Option<u8>,
    vertical_compensation: Option<f32>,
    luma: Option<LumaWeights>,
    overflow: Option<OverflowPolicy>,
    placeholder: Option<char>,
    invert: Option<bool>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or holds invalid values.
///
/// # Example
/// ```no_run
/// use ax_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Config invalide dans {}", path.display()))
}

/// Parse TOML text into a validated config, defaults filling missing keys.
///
/// # Errors
/// Returns an error on malformed TOML or invalid values.
///
/// # Example
/// ```
/// use ax_core::config::parse_config;
/// let config = parse_config("[convert]\ntarget_width = 80\n").unwrap();
/// assert_eq!(config.target_width, 80);
/// assert_eq!(config.bucket_width, 25);
/// ```
pub fn parse_config(content: &str) -> Result<ConvertConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = ConvertConfig::default();

    if let Some(c) = file.convert {
        if let Some(v) = c.target_width {
            config.target_width = v;
        }
        if let Some(v) = c.bucket_width {
            config.bucket_width = v;
        }
        if let Some(v) = c.vertical_compensation {
            config.vertical_compensation = v;
        }
        if let Some(v) = c.luma {
            config.luma = v;
        }
        if let Some(v) = c.overflow {
            config.overflow = v;
        }
        if let Some(v) = c.placeholder {
            config.placeholder = v;
        }
        if let Some(v) = c.invert {
            config.invert = v;
        }
    } else {
        log::debug!("Pas de section [convert], utilisation des défauts.");
    }

    config.validate()?;
    Ok(config)
}
