// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use import_rewrite::{
    Casing, FileRelativeResolver, ImportDeclaration, ImportMap, ImportSpecifier, ModuleConfig,
    Rewrite, Rewriter, StyleOption,
};

pub const LIBRARY: &str = "react-bootstrap";
pub const TEMPLATE: &str = "react-bootstrap/lib/${member}";

/// Options mirroring the plugin's per-module settings, all off by default.
pub struct Options {
    pub transform: Option<&'static str>,
    pub prevent_full_import: bool,
    pub style: Option<StyleOption>,
    pub casing: Casing,
    pub skip_default_conversion: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            transform: Some(TEMPLATE),
            prevent_full_import: false,
            style: None,
            casing: Casing::None,
            skip_default_conversion: false,
        }
    }
}

impl Options {
    pub fn into_map(self) -> ImportMap {
        let mut config = match self.transform {
            Some(template) => ModuleConfig::template(template),
            None => ModuleConfig::default(),
        }
        .with_prevent_full_import(self.prevent_full_import)
        .with_casing(self.casing)
        .with_skip_default_conversion(self.skip_default_conversion);
        config.style = self.style;
        ImportMap::builder().module(LIBRARY, config).build()
    }
}

/// `import <specifiers> from 'react-bootstrap'`
pub fn bootstrap_import(specifiers: Vec<ImportSpecifier>) -> ImportDeclaration {
    ImportDeclaration::new(LIBRARY, specifiers)
}

/// Rewrite one declaration against `map` as if imported from `/project/src/app.js`.
pub fn rewrite(
    map: &ImportMap,
    decl: &ImportDeclaration,
) -> import_rewrite::Result<Option<Rewrite>> {
    let resolver = FileRelativeResolver::new("/project");
    Rewriter::new(map, &resolver)
        .for_file("/project/src/app.js")
        .rewrite(decl)
}

/// Sources of every declaration a rewrite produces, in emission order.
pub fn all_sources(rewrite: &Rewrite) -> Vec<String> {
    rewrite.declarations().map(|d| d.source.clone()).collect()
}

/// Number of produced sources that look like a whole-module stylesheet.
pub fn full_style_count(rewrite: &Rewrite, name: &str) -> usize {
    let full = format!("react-bootstrap/lib/{}.css", name);
    all_sources(rewrite).iter().filter(|s| **s == full).count()
}

/// Number of produced sources that look like a per-member stylesheet.
pub fn member_style_count(rewrite: &Rewrite, name: &str) -> usize {
    let suffix = format!("/{}.css", name);
    all_sources(rewrite)
        .iter()
        .filter(|s| s.starts_with("react-bootstrap/lib/") && s.ends_with(&suffix))
        .filter(|s| s.matches('/').count() > 2)
        .count()
}
