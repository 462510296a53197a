// src/loader.rs

//! Loading of function transforms referenced by path
//!
//! A transform string ending in `.js` names a module whose export must be a
//! function. Loading is delegated to the host through [`TransformLoader`];
//! [`FunctionRegistry`] is the in-memory implementation used by hosts that
//! register their transform functions up front, and by tests.

use crate::error::{Error, Result};
use crate::transform::{StyleRequest, TransformFn};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Value exported by a loaded transform module
#[derive(Clone)]
pub enum Export {
    /// A callable transform
    Function(Arc<dyn TransformFn>),
    /// Anything else; carries a short description of what was exported
    Value(String),
}

impl fmt::Debug for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Value(desc) => f.debug_tuple("Value").field(desc).finish(),
        }
    }
}

/// Host collaborator that loads a transform module by reference
pub trait TransformLoader {
    /// Load the module named by `reference`
    ///
    /// Returns the module's export, or a reason string when it cannot be
    /// loaded at all.
    fn load(&self, reference: &str) -> std::result::Result<Export, String>;
}

/// Load `reference` and require its export to be a function
pub fn load_function(loader: &dyn TransformLoader, reference: &str) -> Result<Arc<dyn TransformFn>> {
    let export = loader.load(reference).map_err(|reason| Error::Load {
        reference: reference.to_string(),
        reason,
    })?;

    match export {
        Export::Function(f) => {
            debug!("Loaded transform function from {}", reference);
            Ok(f)
        }
        Export::Value(_) => Err(Error::Contract {
            reference: reference.to_string(),
        }),
    }
}

/// In-memory transform modules keyed by reference
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    exports: HashMap<String, Export>,
}

impl FunctionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under `reference`
    pub fn register<F>(&mut self, reference: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&str, Option<StyleRequest<'_>>) -> String + Send + Sync + 'static,
    {
        self.exports
            .insert(reference.into(), Export::Function(Arc::new(f)));
        self
    }

    /// Register an arbitrary export under `reference`
    pub fn register_export(&mut self, reference: impl Into<String>, export: Export) -> &mut Self {
        self.exports.insert(reference.into(), export);
        self
    }
}

impl TransformLoader for FunctionRegistry {
    fn load(&self, reference: &str) -> std::result::Result<Export, String> {
        self.exports
            .get(reference)
            .cloned()
            .ok_or_else(|| format!("no module registered as '{}'", reference))
    }
}
