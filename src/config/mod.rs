// src/config/mod.rs

//! Per-module rewrite configuration
//!
//! Configuration maps a module identifier (a bare package name or an
//! absolute path) to the rules used when rewriting imports of that module.
//! Raw options, as read from a file or built by a host, are normalized once
//! into an immutable [`ImportMap`]:
//!
//! - `transform` becomes a [`Transform`]; strings ending in `.js` are loaded
//!   through a [`TransformLoader`], each distinct reference once
//! - `style` becomes an optional [`StyleOption`]
//! - the legacy `camel_case` / `kebab_case` / `snake_case` flags collapse
//!   into one [`Casing`]
//!
//! # Example imports.toml
//!
//! ```toml
//! [modules."react-bootstrap"]
//! transform = "react-bootstrap/lib/${member}"
//! prevent_full_import = true
//! style = { name = "style", ignore = ["row"] }
//! casing = "kebab"
//!
//! [modules.lodash]
//! transform = "lodash/${member}"
//! ```

pub mod parser;

pub use parser::{
    ConfigFile, ConfigFormat, RawModuleConfig, StyleSetting, StyleTable, load_import_map,
    parse_config_file, parse_config_str,
};

use crate::casing::Casing;
use crate::error::{Error, Result};
use crate::loader::{TransformLoader, load_function};
use crate::transform::{Transform, TransformFn, is_function_reference};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// Stylesheet name used when `style = true`
pub const DEFAULT_STYLE_NAME: &str = "style";

/// Normalized stylesheet settings for one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOption {
    /// Stylesheet file stem (`style` gives `style.css`)
    pub name: String,
    /// Import names that never receive a stylesheet import
    pub ignore: HashSet<String>,
}

impl StyleOption {
    /// Create a style option with no ignored names
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ignore: HashSet::new(),
        }
    }

    /// Add names to the ignore set
    pub fn ignoring<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_ignored(&self, import_name: &str) -> bool {
        self.ignore.contains(import_name)
    }
}

impl Default for StyleOption {
    fn default() -> Self {
        Self::new(DEFAULT_STYLE_NAME)
    }
}

/// Rewrite rules for one configured module
#[derive(Debug, Clone, Default)]
pub struct ModuleConfig {
    /// Path rule; a configured module without one fails when imported
    pub transform: Option<Transform>,
    /// Reject default and namespace imports of the module
    pub prevent_full_import: bool,
    /// Stylesheet imports to inject, if any
    pub style: Option<StyleOption>,
    /// Casing applied to member names before path resolution
    pub casing: Casing,
    /// Keep named-import syntax in rewritten declarations
    pub skip_default_conversion: bool,
}

impl ModuleConfig {
    /// Create a configuration with the given transform and default options
    pub fn new(transform: Transform) -> Self {
        Self {
            transform: Some(transform),
            ..Self::default()
        }
    }

    /// Create a configuration from a `${member}` template
    pub fn template(template: impl Into<String>) -> Self {
        Self::new(Transform::template(template))
    }

    pub fn with_prevent_full_import(mut self, prevent: bool) -> Self {
        self.prevent_full_import = prevent;
        self
    }

    pub fn with_style(mut self, style: StyleOption) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }

    pub fn with_skip_default_conversion(mut self, skip: bool) -> Self {
        self.skip_default_conversion = skip;
        self
    }

    /// The transform rule, or a configuration error naming `module`
    pub fn require_transform(&self, module: &str) -> Result<&Transform> {
        self.transform.as_ref().ok_or_else(|| Error::Configuration {
            module: module.to_string(),
        })
    }
}

/// Immutable configuration store keyed by module identifier
#[derive(Debug, Clone, Default)]
pub struct ImportMap {
    modules: HashMap<String, ModuleConfig>,
}

impl ImportMap {
    /// Start building a map from already-normalized module configurations
    pub fn builder() -> ImportMapBuilder {
        ImportMapBuilder::default()
    }

    /// Normalize raw per-module options
    ///
    /// Function references are loaded here, so load and contract errors
    /// surface before any import is rewritten.
    pub fn from_raw<I>(raw: I, loader: &dyn TransformLoader) -> Result<Self>
    where
        I: IntoIterator<Item = (String, RawModuleConfig)>,
    {
        let mut loaded: HashMap<String, Arc<dyn TransformFn>> = HashMap::new();
        let mut modules = HashMap::new();

        for (module, options) in raw {
            let config = normalize(&module, options, loader, &mut loaded)?;
            modules.insert(module, config);
        }

        Ok(Self { modules })
    }

    /// Look up the configuration for an exact module identifier
    pub fn get(&self, module: &str) -> Option<&ModuleConfig> {
        self.modules.get(module)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Configured module identifiers, sorted
    pub fn module_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Modules configured without a transform rule, sorted
    pub fn missing_transforms(&self) -> Vec<&str> {
        self.module_names()
            .into_iter()
            .filter(|name| self.modules[*name].transform.is_none())
            .collect()
    }

    /// Fail on the first module (in sorted order) that lacks a transform
    pub fn validate(&self) -> Result<()> {
        match self.missing_transforms().first() {
            Some(module) => Err(Error::Configuration {
                module: module.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Builder for an [`ImportMap`] assembled in code rather than read from a file
#[derive(Debug, Default)]
pub struct ImportMapBuilder {
    modules: HashMap<String, ModuleConfig>,
}

impl ImportMapBuilder {
    /// Add a module configuration, replacing any previous entry
    pub fn module(mut self, module: impl Into<String>, config: ModuleConfig) -> Self {
        let module = module.into();
        if self.modules.insert(module.clone(), config).is_some() {
            debug!("Replacing configuration for module {}", module);
        }
        self
    }

    pub fn build(self) -> ImportMap {
        ImportMap {
            modules: self.modules,
        }
    }
}

fn normalize(
    module: &str,
    raw: RawModuleConfig,
    loader: &dyn TransformLoader,
    loaded: &mut HashMap<String, Arc<dyn TransformFn>>,
) -> Result<ModuleConfig> {
    let transform = match raw.transform.filter(|t| !t.is_empty()) {
        None => None,
        Some(reference) if is_function_reference(&reference) => {
            let f = match loaded.get(&reference) {
                Some(f) => Arc::clone(f),
                None => {
                    let f = load_function(loader, &reference)?;
                    loaded.insert(reference.clone(), Arc::clone(&f));
                    f
                }
            };
            Some(Transform::Function(f))
        }
        Some(template) => Some(Transform::Template(template)),
    };

    let flags = [raw.camel_case, raw.kebab_case, raw.snake_case];
    let flag_count = flags.iter().filter(|f| **f).count();
    let casing = match raw.casing {
        Some(casing) => {
            if flag_count > 0 {
                warn!(
                    "Module {}: explicit casing '{}' overrides legacy casing flags",
                    module, casing
                );
            }
            casing
        }
        None => {
            let casing = Casing::from_flags(raw.camel_case, raw.kebab_case, raw.snake_case);
            if flag_count > 1 {
                warn!(
                    "Module {}: several casing flags set, using {} casing",
                    module, casing
                );
            }
            casing
        }
    };

    let style = match raw.style {
        Some(setting) => setting.into_option(),
        None => None,
    };

    Ok(ModuleConfig {
        transform,
        prevent_full_import: raw.prevent_full_import,
        style,
        casing,
        skip_default_conversion: raw.skip_default_conversion,
    })
}
