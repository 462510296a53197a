// src/style.rs

//! Stylesheet import synthesis
//!
//! A module configured with `style` gets a side-effect import of a
//! stylesheet next to each rewritten member (`lib/Grid/style.css`), or a
//! single `lib/style.css` when the module is imported whole.

use crate::ast::ImportDeclaration;
use crate::config::ModuleConfig;
use crate::transform::{StyleRequest, Transform};
use tracing::{debug, trace};

/// Build the stylesheet import for `import_name`, or for the whole module
/// when `import_name` is `None`
///
/// Returns `None` when styles are disabled or the effective name is in the
/// ignore set.
pub fn build_style_import(
    config: &ModuleConfig,
    transform: &Transform,
    import_name: Option<&str>,
) -> Option<ImportDeclaration> {
    let style = config.style.as_ref()?;
    let has_import_name = import_name.is_some();
    let name = import_name.unwrap_or(&style.name);

    if style.is_ignored(name) {
        trace!("Style import for {} ignored", name);
        return None;
    }

    let request = StyleRequest {
        name: &style.name,
        has_import_name,
    };
    let source = transform.resolve_style(name, request);
    debug!("Adding style import {}", source);
    Some(ImportDeclaration::side_effect(source))
}
