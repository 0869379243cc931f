use anyhow::{bail, Result};

use autoscroll_core::AppConfig;

pub fn run(config: &AppConfig, init: bool, path: bool) -> Result<()> {
    let config_path = AppConfig::config_path();

    if path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if init {
        if config_path.exists() {
            bail!(
                "Config file already exists at {}\nRemove it first to regenerate defaults.",
                config_path.display()
            );
        }
        AppConfig::default().save()?;
        println!("Wrote default configuration to {}", config_path.display());
        return Ok(());
    }

    if !config_path.exists() {
        println!("# {} not found, showing defaults", config_path.display());
    }
    print!("{}", config.to_toml()?);

    Ok(())
}
