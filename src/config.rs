use serde::Deserialize;
use std::path::PathBuf;

use crate::content;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_username")]
    pub username: String,
}

fn default_username() -> String {
    content::DEFAULT_USERNAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: default_username(),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("vita").join("config.toml"))
}

impl Config {
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Config::default();
        };

        let Ok(content) = std::fs::read_to_string(&path) else {
            return Config::default();
        };

        toml::from_str::<Config>(&content).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_config() {
        let toml_str = r#"
username = "octocat"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.username, "octocat");
    }

    #[test]
    fn parse_empty_config_uses_default_username() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.username, content::DEFAULT_USERNAME);
    }

    #[test]
    fn invalid_config_falls_back_to_default() {
        let config = toml::from_str::<Config>("username = 42").unwrap_or_default();
        assert_eq!(config.username, content::DEFAULT_USERNAME);
    }
}
