// src/ast.rs

//! Import declaration model shared with the host
//!
//! The host owns parsing and code generation. It hands the engine read-only
//! [`ImportDeclaration`] values and receives freshly built ones back. The
//! [`Module`] type is the minimal item list a host splices rewrites into.

use std::fmt;

/// One specifier of an import declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportSpecifier {
    /// `import local from 'module'`
    Default { local: String },
    /// `import * as local from 'module'`
    Namespace { local: String },
    /// `import { imported as local } from 'module'`
    Named { imported: String, local: String },
}

impl ImportSpecifier {
    /// Create a default specifier
    pub fn default_import(local: impl Into<String>) -> Self {
        Self::Default {
            local: local.into(),
        }
    }

    /// Create a namespace specifier
    pub fn namespace(local: impl Into<String>) -> Self {
        Self::Namespace {
            local: local.into(),
        }
    }

    /// Create a named specifier whose local binding matches the export
    pub fn named(imported: impl Into<String>) -> Self {
        let imported = imported.into();
        Self::Named {
            local: imported.clone(),
            imported,
        }
    }

    /// Create an aliased named specifier (`imported as local`)
    pub fn aliased(imported: impl Into<String>, local: impl Into<String>) -> Self {
        Self::Named {
            imported: imported.into(),
            local: local.into(),
        }
    }

    /// The binding name introduced into the importing file
    pub fn local(&self) -> &str {
        match self {
            Self::Default { local } | Self::Namespace { local } | Self::Named { local, .. } => {
                local
            }
        }
    }

    /// Whether this specifier binds the entire module
    pub fn is_full(&self) -> bool {
        !matches!(self, Self::Named { .. })
    }
}

/// An `import` declaration: a source module and its specifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportDeclaration {
    /// Module identifier as written in the source string literal
    pub source: String,
    /// Specifiers in source order
    pub specifiers: Vec<ImportSpecifier>,
}

impl ImportDeclaration {
    /// Create a declaration
    pub fn new(source: impl Into<String>, specifiers: Vec<ImportSpecifier>) -> Self {
        Self {
            source: source.into(),
            specifiers,
        }
    }

    /// Create a side-effect-only declaration (`import 'path'`)
    pub fn side_effect(source: impl Into<String>) -> Self {
        Self::new(source, Vec::new())
    }

    /// Whether this declaration binds nothing
    pub fn is_side_effect(&self) -> bool {
        self.specifiers.is_empty()
    }
}

impl fmt::Display for ImportDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.specifiers.is_empty() {
            return write!(f, "import '{}';", self.source);
        }

        let mut leading = Vec::new();
        let mut named = Vec::new();
        for spec in &self.specifiers {
            match spec {
                ImportSpecifier::Default { local } => leading.push(local.clone()),
                ImportSpecifier::Namespace { local } => leading.push(format!("* as {}", local)),
                ImportSpecifier::Named { imported, local } if imported == local => {
                    named.push(imported.clone())
                }
                ImportSpecifier::Named { imported, local } => {
                    named.push(format!("{} as {}", imported, local))
                }
            }
        }
        if !named.is_empty() {
            leading.push(format!("{{ {} }}", named.join(", ")));
        }

        write!(f, "import {} from '{}';", leading.join(", "), self.source)
    }
}

/// A top-level item of a source file as seen by the rewrite driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleItem {
    /// An import declaration the engine may rewrite
    Import(ImportDeclaration),
    /// Any other statement, carried through untouched
    Other(String),
}

/// A source file reduced to its ordered top-level items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    pub items: Vec<ModuleItem>,
}

impl Module {
    /// Create a module from items
    pub fn new(items: Vec<ModuleItem>) -> Self {
        Self { items }
    }

    /// Iterate over the import declarations in source order
    pub fn imports(&self) -> impl Iterator<Item = &ImportDeclaration> {
        self.items.iter().filter_map(|item| match item {
            ModuleItem::Import(decl) => Some(decl),
            ModuleItem::Other(_) => None,
        })
    }
}
