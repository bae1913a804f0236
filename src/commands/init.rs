use std::fs;
use std::path::Path;

use inquire::Confirm;

use crate::config;

/// Where the starter configuration is downloaded from.
pub const DEFAULT_CONFIG_URL: &str =
    "https://raw.githubusercontent.com/tgit-dev/tgit/main/config.yaml";

/// Handle `tgit init`: download the default config file to the user config
/// directory, asking before overwriting an existing one.
pub async fn handle_init() -> Result<(), Box<dyn std::error::Error>> {
    let path =
        config::user_config_path().ok_or("could not determine the user config directory")?;

    if path.exists() {
        println!("Config file already exists at {}", path.display());
        let overwrite = Confirm::new("Do you want to override it?")
            .with_default(false)
            .prompt()?;
        if !overwrite {
            println!("init cancelled");
            return Ok(());
        }
    }

    println!("downloading config from {}", DEFAULT_CONFIG_URL);
    download_config(DEFAULT_CONFIG_URL, &path).await?;
    println!("config file created at {}", path.display());
    Ok(())
}

/// Download a config file to `dest`, creating parent directories as needed.
///
/// A non-success response is an error and writes nothing.
pub async fn download_config(url: &str, dest: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(format!("failed to download config: HTTP {}", response.status()).into());
    }
    let body = response.text().await?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, body)?;
    Ok(())
}
