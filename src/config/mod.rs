pub mod init;
mod schema;
mod validation;

pub use schema::Config;
pub use validation::validate_config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/nines/)
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("nines")
}

/// Get the default config file path (~/.config/nines/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/nines/config.yaml)
///
/// A missing default file yields `Config::default()`. A missing file that was
/// asked for explicitly is an error.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::HoleCount;
    use std::env;

    #[test]
    fn test_explicit_missing_file_errors() {
        let temp_path = env::temp_dir().join("nines_test_config_missing.yaml");
        let _ = fs::remove_file(&temp_path);
        assert!(load_config(Some(temp_path)).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_path = env::temp_dir().join("nines_test_config_load.yaml");
        fs::write(&temp_path, "holes: 18\n").unwrap();

        let config = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(config.holes, HoleCount::Eighteen);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_invalid_yaml_errors() {
        let temp_path = env::temp_dir().join("nines_test_config_invalid.yaml");
        fs::write(&temp_path, "holes: [not, a, number]\n").unwrap();

        let err = load_config(Some(temp_path.clone())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_config_path_under_config_dir() {
        assert!(get_config_path().starts_with(get_config_dir()));
        assert!(get_config_path().ends_with("config.yaml"));
    }
}
