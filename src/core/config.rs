//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.passpad/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::generator::{GenerationConfig, LENGTH_MAX, LENGTH_MIN};
use crate::core::state::Tab;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PasspadConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneratorConfig {
    pub length: Option<u8>,
    pub use_uppercase: Option<bool>,
    pub use_lowercase: Option<bool>,
    pub use_digits: Option<bool>,
    pub use_special: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EditorConfig {
    pub tab_width: Option<u8>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub start_tab: Option<Tab>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TAB_WIDTH: u8 = 4;
pub const MIN_TAB_WIDTH: u8 = 1;
pub const MAX_TAB_WIDTH: u8 = 16;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub generation: GenerationConfig,
    pub tab_width: u8,
    pub start_tab: Tab,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&PasspadConfig::default(), None)
    }
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

/// Returns the path to `~/.passpad/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".passpad").join("config.toml"))
}

/// Load config from `override_path` if given, else `~/.passpad/config.toml`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `PasspadConfig::default()`. If a file exists but is malformed,
/// returns `ConfigError::Parse`. An explicit `override_path` must exist.
pub fn load_config(override_path: Option<&Path>) -> Result<PasspadConfig, ConfigError> {
    if let Some(path) = override_path {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: PasspadConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        info!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PasspadConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PasspadConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: PasspadConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# passpad Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [generator]
# length = 12               # Password length, 8-32
# use_uppercase = true
# use_lowercase = true
# use_digits = true
# use_special = true        # ASCII punctuation

# [editor]
# tab_width = 4             # Spaces inserted by the Tab key, 1-16

# [ui]
# start_tab = "generator"   # "generator" or "editor"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// `cli_tab` comes from the `--tab` flag (None = not specified).
/// Out-of-range numeric values clamp with a logged warning rather than
/// failing startup.
pub fn resolve(config: &PasspadConfig, cli_tab: Option<Tab>) -> ResolvedConfig {
    let defaults = GenerationConfig::default();

    let length = match config.generator.length {
        Some(l) if !(LENGTH_MIN..=LENGTH_MAX).contains(&l) => {
            let clamped = l.clamp(LENGTH_MIN, LENGTH_MAX);
            warn!("config generator.length {l} out of range, clamping to {clamped}");
            clamped
        }
        Some(l) => l,
        None => defaults.length,
    };

    let generation = GenerationConfig {
        length,
        use_upper: config.generator.use_uppercase.unwrap_or(defaults.use_upper),
        use_lower: config.generator.use_lowercase.unwrap_or(defaults.use_lower),
        use_digits: config.generator.use_digits.unwrap_or(defaults.use_digits),
        use_special: config.generator.use_special.unwrap_or(defaults.use_special),
    };

    if generation.alphabet().is_empty() {
        warn!("config enables no character classes; generation will fail until one is toggled on");
    }

    let tab_width = match config.editor.tab_width {
        Some(w) if !(MIN_TAB_WIDTH..=MAX_TAB_WIDTH).contains(&w) => {
            let clamped = w.clamp(MIN_TAB_WIDTH, MAX_TAB_WIDTH);
            warn!("config editor.tab_width {w} out of range, clamping to {clamped}");
            clamped
        }
        Some(w) => w,
        None => DEFAULT_TAB_WIDTH,
    };

    // Tab: CLI → config → default
    let start_tab = cli_tab
        .or(config.ui.start_tab)
        .unwrap_or_default();

    ResolvedConfig {
        generation,
        tab_width,
        start_tab,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = PasspadConfig::default();
        assert!(config.generator.length.is_none());
        assert!(config.editor.tab_width.is_none());
        assert!(config.ui.start_tab.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&PasspadConfig::default(), None);
        assert_eq!(resolved.generation, GenerationConfig::default());
        assert_eq!(resolved.tab_width, DEFAULT_TAB_WIDTH);
        assert_eq!(resolved.start_tab, Tab::Generator);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PasspadConfig {
            generator: GeneratorConfig {
                length: Some(20),
                use_uppercase: Some(false),
                use_special: Some(false),
                ..Default::default()
            },
            editor: EditorConfig { tab_width: Some(8) },
            ui: UiConfig {
                start_tab: Some(Tab::Editor),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.generation.length, 20);
        assert!(!resolved.generation.use_upper);
        assert!(resolved.generation.use_lower);
        assert!(resolved.generation.use_digits);
        assert!(!resolved.generation.use_special);
        assert_eq!(resolved.tab_width, 8);
        assert_eq!(resolved.start_tab, Tab::Editor);
    }

    #[test]
    fn test_resolve_clamps_out_of_range_length() {
        let config = PasspadConfig {
            generator: GeneratorConfig {
                length: Some(99),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(resolve(&config, None).generation.length, LENGTH_MAX);

        let config = PasspadConfig {
            generator: GeneratorConfig {
                length: Some(2),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(resolve(&config, None).generation.length, LENGTH_MIN);
    }

    #[test]
    fn test_resolve_clamps_out_of_range_tab_width() {
        let config = PasspadConfig {
            editor: EditorConfig { tab_width: Some(0) },
            ..Default::default()
        };
        assert_eq!(resolve(&config, None).tab_width, MIN_TAB_WIDTH);

        let config = PasspadConfig {
            editor: EditorConfig { tab_width: Some(200) },
            ..Default::default()
        };
        assert_eq!(resolve(&config, None).tab_width, MAX_TAB_WIDTH);
    }

    #[test]
    fn test_resolve_cli_tab_wins() {
        let config = PasspadConfig {
            ui: UiConfig {
                start_tab: Some(Tab::Generator),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Tab::Editor));
        assert_eq!(resolved.start_tab, Tab::Editor);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[generator]
length = 16
use_uppercase = true
use_special = false

[editor]
tab_width = 2

[ui]
start_tab = "editor"
"#;
        let config: PasspadConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.length, Some(16));
        assert_eq!(config.generator.use_uppercase, Some(true));
        assert_eq!(config.generator.use_special, Some(false));
        assert_eq!(config.generator.use_lowercase, None);
        assert_eq!(config.editor.tab_width, Some(2));
        assert_eq!(config.ui.start_tab, Some(Tab::Editor));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[generator]
length = 24
"#;
        let config: PasspadConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.length, Some(24));
        assert!(config.generator.use_uppercase.is_none());
        assert!(config.ui.start_tab.is_none());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(toml::from_str::<PasspadConfig>("generator = 5").is_err());
        assert!(toml::from_str::<PasspadConfig>("[ui]\nstart_tab = \"sideways\"").is_err());
    }

    #[test]
    fn test_all_classes_disabled_still_resolves() {
        // Generation will fail at runtime with a warning; resolution must not.
        let config = PasspadConfig {
            generator: GeneratorConfig {
                use_uppercase: Some(false),
                use_lowercase: Some(false),
                use_digits: Some(false),
                use_special: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert!(resolved.generation.alphabet().is_empty());
    }
}
