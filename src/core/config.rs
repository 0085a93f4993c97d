//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.techhealth/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::theme::ThemeMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TechHealthConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Footer links. Empty = built-in defaults.
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<ThemeMode>,
    pub copyright_holder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_COPYRIGHT_HOLDER: &str = "TechHealth Solutions";
pub const THEME_ENV_VAR: &str = "TECHHEALTH_THEME";

const DEFAULT_LINKS: [(&str, &str); 3] = [
    ("Instagram", "https://www.instagram.com/minsaude/"),
    ("Facebook", "https://www.facebook.com/minsaude/?locale=pt_BR"),
    ("X", "https://x.com/minsaude"),
];

pub fn default_links() -> Vec<SocialLink> {
    DEFAULT_LINKS
        .iter()
        .map(|(name, url)| SocialLink {
            name: name.to_string(),
            url: url.to_string(),
        })
        .collect()
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Theme the session starts with.
    pub theme: ThemeMode,
    pub copyright_holder: String,
    pub links: Vec<SocialLink>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.techhealth/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".techhealth").join("config.toml"))
}

/// Load config from `~/.techhealth/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TechHealthConfig::default()`.
pub fn load_config() -> Result<TechHealthConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(TechHealthConfig::default())
        }
    }
}

/// Load config from an explicit path. Malformed TOML is a `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<TechHealthConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TechHealthConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TechHealthConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# TechHealth Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "light"                     # "light" or "dark" (or TECHHEALTH_THEME / --theme)
# copyright_holder = "TechHealth Solutions"

# Footer links. Listing any replaces the built-in set.
# [[links]]
# name = "Instagram"
# url = "https://www.instagram.com/minsaude/"

# [[links]]
# name = "X"
# url = "https://x.com/minsaude"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_theme` is from the `--theme` flag (None = not specified).
pub fn resolve(config: &TechHealthConfig, cli_theme: Option<ThemeMode>) -> ResolvedConfig {
    let env_theme = std::env::var(THEME_ENV_VAR).ok().and_then(|value| parse_env_theme(&value));
    resolve_with_env(config, env_theme, cli_theme)
}

/// Unrecognised values are logged and treated as unset.
fn parse_env_theme(value: &str) -> Option<ThemeMode> {
    let parsed = ThemeMode::from_name(value);
    if parsed.is_none() {
        warn!("Ignoring {}={:?}: expected \"light\" or \"dark\"", THEME_ENV_VAR, value);
    }
    parsed
}

/// Resolution with the environment already read. Split out so the
/// precedence rules can be tested without touching process env.
fn resolve_with_env(
    config: &TechHealthConfig,
    env_theme: Option<ThemeMode>,
    cli_theme: Option<ThemeMode>,
) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli_theme
        .or(env_theme)
        .or(config.general.theme)
        .unwrap_or_default();

    let links = if config.links.is_empty() {
        default_links()
    } else {
        config.links.clone()
    };

    ResolvedConfig {
        theme,
        copyright_holder: config
            .general
            .copyright_holder
            .clone()
            .unwrap_or_else(|| DEFAULT_COPYRIGHT_HOLDER.to_string()),
        links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_config() -> TechHealthConfig {
        TechHealthConfig {
            general: GeneralConfig {
                theme: Some(ThemeMode::Dark),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&TechHealthConfig::default(), None, None);
        assert_eq!(resolved.theme, ThemeMode::Light);
        assert_eq!(resolved.copyright_holder, DEFAULT_COPYRIGHT_HOLDER);
        assert_eq!(resolved.links, default_links());
        assert_eq!(resolved.links[0].name, "Instagram");
    }

    #[test]
    fn test_config_theme_overrides_default() {
        let resolved = resolve_with_env(&dark_config(), None, None);
        assert_eq!(resolved.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_env_overrides_config() {
        let resolved = resolve_with_env(&dark_config(), Some(ThemeMode::Light), None);
        assert_eq!(resolved.theme, ThemeMode::Light);
    }

    #[test]
    fn test_cli_theme_wins() {
        let resolved = resolve_with_env(
            &TechHealthConfig::default(),
            Some(ThemeMode::Light),
            Some(ThemeMode::Dark),
        );
        assert_eq!(resolved.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_invalid_env_theme_falls_through_to_config() {
        assert_eq!(parse_env_theme("dark"), Some(ThemeMode::Dark));
        assert_eq!(parse_env_theme("purple"), None);
        assert_eq!(parse_env_theme(""), None);

        let resolved = resolve_with_env(&dark_config(), parse_env_theme("purple"), None);
        assert_eq!(resolved.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
theme = "dark"
copyright_holder = "Clinic"

[[links]]
name = "Site"
url = "https://example.org"
"#;
        let config: TechHealthConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(ThemeMode::Dark));
        assert_eq!(config.links.len(), 1);

        let resolved = resolve_with_env(&config, None, None);
        assert_eq!(resolved.copyright_holder, "Clinic");
        assert_eq!(resolved.links[0].url, "https://example.org");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: TechHealthConfig = toml::from_str("[general]\n").unwrap();
        assert!(config.general.theme.is_none());
        assert!(config.links.is_empty());
    }

    #[test]
    fn test_bad_theme_is_parse_error() {
        let result: Result<TechHealthConfig, _> = toml::from_str("[general]\ntheme = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: TechHealthConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.theme.is_none());
        assert!(config.links.is_empty());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("techhealth-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.theme.is_none());
        assert!(path.exists());

        // Second load reads the generated file
        assert!(load_config_from(&path).is_ok());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = std::env::temp_dir().join(format!("techhealth-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\ntheme = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
        let _ = fs::remove_dir_all(&dir);
    }
}
