// src/config/parser.rs

//! Parser for import rewrite configuration files.
//!
//! TOML files use a `[modules."<id>"]` table per module. JSON files accept
//! either the same `{"modules": {...}}` shape or a bare module map, with the
//! camelCase option names used by JavaScript build configs.

use serde::Deserialize;
use serde::de::IgnoredAny;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use super::{DEFAULT_STYLE_NAME, ImportMap, StyleOption};
use crate::casing::Casing;
use crate::error::Result;
use crate::loader::TransformLoader;

/// Options for one module as written in a configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawModuleConfig {
    /// `${member}` template or `.js` function reference
    #[serde(default)]
    pub transform: Option<String>,

    #[serde(default, alias = "preventFullImport")]
    pub prevent_full_import: bool,

    #[serde(default)]
    pub style: Option<StyleSetting>,

    /// Single casing option, overrides the legacy flags below
    #[serde(default)]
    pub casing: Option<Casing>,

    #[serde(default, alias = "camelCase")]
    pub camel_case: bool,

    #[serde(default, alias = "kebabCase")]
    pub kebab_case: bool,

    #[serde(default, alias = "snakeCase")]
    pub snake_case: bool,

    #[serde(default, alias = "skipDefaultConversion")]
    pub skip_default_conversion: bool,
}

/// The `style` option in any of its accepted shapes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StyleSetting {
    /// `style = true` enables `style.css`, `false` disables styles
    Enabled(bool),
    /// `style = "index"` enables `index.css`
    Name(String),
    /// `style = { name = "sty", ignore = ["row"] }`
    Table(StyleTable),
}

/// Table form of the `style` option
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StyleTable {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl StyleSetting {
    /// Normalize into a style option; `None` when styles are disabled
    ///
    /// An empty string disables styles, while a table with an empty name
    /// falls back to the default stylesheet name.
    pub fn into_option(self) -> Option<StyleOption> {
        match self {
            Self::Enabled(false) => None,
            Self::Enabled(true) => Some(StyleOption::default()),
            Self::Name(name) if name.is_empty() => None,
            Self::Name(name) => Some(StyleOption::new(name)),
            Self::Table(table) => {
                let name = table
                    .name
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| DEFAULT_STYLE_NAME.to_string());
                Some(StyleOption::new(name).ignoring(table.ignore))
            }
        }
    }
}

/// A parsed configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Module identifier -> options
    #[serde(default)]
    pub modules: BTreeMap<String, RawModuleConfig>,
}

/// Configuration file syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension, defaulting to TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Parse configuration from a string
pub fn parse_config_str(content: &str, format: ConfigFormat) -> Result<ConfigFile> {
    let config = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => parse_json(content)?,
    };
    Ok(config)
}

/// A JSON object whose only key is `modules` is the wrapped form, anything
/// else is a bare module map
fn parse_json(content: &str) -> Result<ConfigFile> {
    let keys: BTreeMap<String, IgnoredAny> = serde_json::from_str(content)?;
    if keys.len() == 1 && keys.contains_key("modules") {
        return Ok(serde_json::from_str(content)?);
    }
    Ok(ConfigFile {
        modules: serde_json::from_str(content)?,
    })
}

/// Parse configuration from a file, choosing the format by extension
pub fn parse_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)?;
    parse_config_str(&content, ConfigFormat::from_path(path))
}

/// Read, parse and normalize a configuration file into an [`ImportMap`]
pub fn load_import_map(path: &Path, loader: &dyn TransformLoader) -> Result<ImportMap> {
    let config = parse_config_file(path)?;
    let map = ImportMap::from_raw(config.modules, loader)?;
    info!(
        "Loaded import rewrite configuration from {} ({} modules)",
        path.display(),
        map.len()
    );
    Ok(map)
}
