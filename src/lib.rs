// src/lib.rs

//! Build-time import rewriting
//!
//! Rewrites `import` declarations of configured modules so that each named
//! member is imported from its own sub-path, optionally injecting the
//! member's stylesheet:
//!
//! ```text
//! import { Grid, Row as row } from 'react-bootstrap';
//! ```
//!
//! becomes
//!
//! ```text
//! import Grid from 'react-bootstrap/lib/Grid';
//! import row from 'react-bootstrap/lib/Row';
//! ```
//!
//! # Architecture
//!
//! - Pure engine: one declaration plus its module's configuration in,
//!   replacement declarations out; no state across calls
//! - Normalized configuration: transform rules, casing and style options are
//!   resolved once when configuration is loaded
//! - Host collaborators: parsing, code generation, path resolution and
//!   loading of function transforms stay behind narrow traits

pub mod ast;
pub mod casing;
pub mod classify;
pub mod config;
mod error;
pub mod loader;
pub mod paths;
pub mod rewrite;
pub mod style;
pub mod transform;

pub use ast::{ImportDeclaration, ImportSpecifier, Module, ModuleItem};
pub use casing::{Casing, apply_case};
pub use classify::{ClassifiedImport, classify};
pub use config::{
    ConfigFile, ConfigFormat, DEFAULT_STYLE_NAME, ImportMap, ImportMapBuilder, ModuleConfig,
    RawModuleConfig, StyleOption, StyleSetting, load_import_map, parse_config_file,
    parse_config_str,
};
pub use error::{Error, PLUGIN_NAME, Result};
pub use loader::{Export, FunctionRegistry, TransformLoader, load_function};
pub use paths::{FileRelativeResolver, PathResolver, is_path_like};
pub use rewrite::{
    Disposition, Rewrite, RewriteSummary, Rewriter, rewrite_declaration, rewrite_module,
};
pub use style::build_style_import;
pub use transform::{StyleRequest, Transform, TransformFn};
