// src/rewrite.rs

//! The import rewrite engine
//!
//! Given one import declaration and its module's configuration, the engine
//! produces the declarations that replace it:
//!
//! ```text
//! import Bootstrap, { Grid, Row as row } from 'react-bootstrap';
//! ```
//!
//! with `transform = "react-bootstrap/lib/${member}"` becomes
//!
//! ```text
//! import Bootstrap from 'react-bootstrap';
//! import Grid from 'react-bootstrap/lib/Grid';
//! import row from 'react-bootstrap/lib/Row';
//! ```
//!
//! Stylesheet imports, when configured, follow the rewritten declarations.
//! The engine holds no state between declarations; [`Rewriter`] only bundles
//! the per-file inputs (configuration, path resolver, file name).

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::ast::{ImportDeclaration, ImportSpecifier, Module, ModuleItem};
use crate::classify::classify;
use crate::config::{ImportMap, ModuleConfig};
use crate::error::{Error, Result};
use crate::paths::PathResolver;
use crate::style::build_style_import;

/// How the host applies a [`Rewrite`] to the original declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Replace the original with all produced declarations
    Replace,
    /// Keep the original and insert the style imports right after it
    InsertAfter,
}

/// Declarations produced for one import declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    /// Rewritten binding declarations, in specifier order
    pub imports: Vec<ImportDeclaration>,
    /// Stylesheet side-effect imports, emitted after `imports`
    pub styles: Vec<ImportDeclaration>,
}

impl Rewrite {
    pub fn disposition(&self) -> Disposition {
        if self.imports.is_empty() {
            Disposition::InsertAfter
        } else {
            Disposition::Replace
        }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.styles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len() + self.styles.len()
    }

    /// All declarations, binding imports first
    pub fn declarations(&self) -> impl Iterator<Item = &ImportDeclaration> {
        self.imports.iter().chain(self.styles.iter())
    }

    pub fn into_declarations(self) -> Vec<ImportDeclaration> {
        let mut all = self.imports;
        all.extend(self.styles);
        all
    }
}

/// Rewrite one declaration of a configured module
///
/// `module` is the configuration key the declaration matched; it names the
/// module in errors. Returns `None` when nothing needs to change.
pub fn rewrite_declaration(
    decl: &ImportDeclaration,
    module: &str,
    config: &ModuleConfig,
) -> Result<Option<Rewrite>> {
    let transform = config.require_transform(module)?;
    let classified = classify(&decl.specifiers);
    let mut rewrite = Rewrite::default();

    if classified.has_full() {
        if config.prevent_full_import {
            return Err(Error::Policy {
                module: module.to_string(),
            });
        }

        if classified.has_members() {
            // Keep the whole-module binding on its own line against the
            // source as written; members get one line each below.
            let full = classified.full.iter().map(|s| (*s).clone()).collect();
            rewrite
                .imports
                .push(ImportDeclaration::new(decl.source.clone(), full));
        }

        rewrite
            .styles
            .extend(build_style_import(config, transform, None));
    }

    let has_full_style = !rewrite.styles.is_empty();

    for spec in &classified.members {
        let ImportSpecifier::Named { imported, local } = spec else {
            continue;
        };

        let name = config.casing.apply(imported);
        let source = transform.resolve(&name);

        let specifier = if config.skip_default_conversion {
            (*spec).clone()
        } else {
            ImportSpecifier::default_import(local.clone())
        };

        debug!("Rewriting member {} of {} to {}", imported, module, source);
        rewrite
            .imports
            .push(ImportDeclaration::new(source, vec![specifier]));

        if !has_full_style {
            rewrite
                .styles
                .extend(build_style_import(config, transform, Some(name.as_str())));
        }
    }

    if rewrite.is_empty() {
        Ok(None)
    } else {
        Ok(Some(rewrite))
    }
}

/// Per-file rewrite driver
pub struct Rewriter<'a> {
    imports: &'a ImportMap,
    resolver: &'a dyn PathResolver,
    filename: Option<PathBuf>,
}

impl<'a> Rewriter<'a> {
    /// Create a rewriter over `imports`, resolving relative sources with `resolver`
    pub fn new(imports: &'a ImportMap, resolver: &'a dyn PathResolver) -> Self {
        Self {
            imports,
            resolver,
            filename: None,
        }
    }

    /// Set the file whose imports are being rewritten
    pub fn for_file(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// Find the configuration for an import source
    ///
    /// The source is tried as written first, then, when path-like, resolved
    /// against the current file. Returns the matching key with its config.
    pub fn lookup(&self, source: &str) -> Option<(String, &'a ModuleConfig)> {
        if let Some(config) = self.imports.get(source) {
            return Some((source.to_string(), config));
        }

        let resolved = self.resolver.resolve(source, self.filename())?;
        let config = self.imports.get(&resolved)?;
        Some((resolved, config))
    }

    /// Rewrite one declaration, or `None` if its module is not configured
    pub fn rewrite(&self, decl: &ImportDeclaration) -> Result<Option<Rewrite>> {
        let Some((module, config)) = self.lookup(&decl.source) else {
            trace!("Module {} not configured, leaving import untouched", decl.source);
            return Ok(None);
        };
        rewrite_declaration(decl, &module, config)
    }
}

/// Counts from rewriting one module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Original declarations that were replaced
    pub replaced: usize,
    /// Binding declarations emitted in their place
    pub imports_emitted: usize,
    /// Stylesheet imports injected
    pub styles_injected: usize,
}

/// Rewrite every import declaration of `module`
///
/// All declarations are planned before any is spliced, so on error the
/// module is left exactly as it was.
pub fn rewrite_module(module: &mut Module, rewriter: &Rewriter<'_>) -> Result<RewriteSummary> {
    let mut plans = Vec::new();
    for (index, item) in module.items.iter().enumerate() {
        if let ModuleItem::Import(decl) = item
            && let Some(rewrite) = rewriter.rewrite(decl)?
        {
            plans.push((index, rewrite));
        }
    }

    let mut summary = RewriteSummary::default();
    if plans.is_empty() {
        return Ok(summary);
    }

    let old_items = std::mem::take(&mut module.items);
    let mut plans = plans.into_iter().peekable();

    for (index, item) in old_items.into_iter().enumerate() {
        let Some((_, rewrite)) = plans.next_if(|(planned, _)| *planned == index) else {
            module.items.push(item);
            continue;
        };

        summary.imports_emitted += rewrite.imports.len();
        summary.styles_injected += rewrite.styles.len();

        match rewrite.disposition() {
            Disposition::Replace => {
                summary.replaced += 1;
                module.items.extend(
                    rewrite
                        .into_declarations()
                        .into_iter()
                        .map(ModuleItem::Import),
                );
            }
            Disposition::InsertAfter => {
                module.items.push(item);
                module
                    .items
                    .extend(rewrite.styles.into_iter().map(ModuleItem::Import));
            }
        }
    }

    if let Some(filename) = rewriter.filename() {
        debug!(
            "Rewrote {} imports in {} ({} declarations, {} styles)",
            summary.replaced,
            filename.display(),
            summary.imports_emitted,
            summary.styles_injected
        );
    }

    Ok(summary)
}
