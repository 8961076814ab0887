use std::path::Path;

use anyhow::Result;

use jobwatch_core::AppConfig;

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        println!("Config file already exists: {}", config_path.display());
        println!("Use --force to overwrite it with the defaults.");
        return Ok(());
    }

    AppConfig::default().save_to(config_path)?;
    println!("Wrote default configuration to {}", config_path.display());
    println!("Add course and fellowship feeds under [feeds] courses.");

    Ok(())
}
