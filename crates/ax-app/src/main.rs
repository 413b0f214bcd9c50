use anyhow::Result;
use clap::Parser;

use ax_app::cli::Cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Erreur de configuration : {e:#}");
            return Ok(());
        }
    };

    // 4. Convertir et afficher
    print!("{}", ax_app::convert_path(&cli.image, &config));
    Ok(())
}
