use std::path::PathBuf;

use anyhow::Result;
use ax_core::config::{ConvertConfig, OverflowPolicy, load_config};
use clap::Parser;

/// asciify — convertit une image en art ASCII.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Largeur de sortie en caractères.
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Intensity span per palette character.
    #[arg(short, long)]
    pub bucket: Option<u8>,

    /// Vertical compensation for the terminal cell aspect ratio.
    #[arg(long)]
    pub vertical_compensation: Option<f32>,

    /// Drop out-of-palette samples instead of writing the placeholder.
    #[arg(long, default_value_t = false)]
    pub skip_overflow: bool,

    /// Inverser la luminance (fond clair).
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Load the config file (or defaults) and apply command-line overrides.
    ///
    /// # Errors
    /// Returns an error if the config file is unreadable or the final values are invalid.
    pub fn resolve_config(&self) -> Result<ConvertConfig> {
        let mut config = if self.config.exists() {
            load_config(&self.config)?
        } else {
            log::warn!(
                "Config introuvable : {}. Utilisation des défauts.",
                self.config.display()
            );
            ConvertConfig::default()
        };

        if let Some(v) = self.width {
            config.target_width = v;
        }
        if let Some(v) = self.bucket {
            config.bucket_width = v;
        }
        if let Some(v) = self.vertical_compensation {
            config.vertical_compensation = v;
        }
        if self.skip_overflow {
            config.overflow = OverflowPolicy::Skip;
        }
        if self.invert {
            config.invert = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let cli = Cli::parse_from([
            "asciify",
            "photo.png",
            "--config",
            "/nonexistent/asciify.toml",
            "--width",
            "60",
            "--bucket",
            "12",
            "--skip-overflow",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.target_width, 60);
        assert_eq!(config.bucket_width, 12);
        assert_eq!(config.overflow, OverflowPolicy::Skip);
        assert!(!config.invert);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = Cli::parse_from([
            "asciify",
            "photo.png",
            "--config",
            "/nonexistent/asciify.toml",
            "--width",
            "0",
        ]);
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn image_path_is_required() {
        assert!(Cli::try_parse_from(["asciify"]).is_err());
    }
}
