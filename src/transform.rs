// src/transform.rs

//! Transform rules: member name to module path
//!
//! A transform is either a template string containing a `${member}`
//! placeholder or a function supplied by the host. The choice is made once,
//! when configuration is normalized (see [`crate::config`]); resolving a path
//! never re-inspects the rule's shape.
//!
//! # Template substitution
//!
//! Every occurrence of `${member}` (case-insensitive, with at most one space
//! inside each brace, e.g. `${ member }`) is replaced by the import name.
//! For style imports the name is first extended with the stylesheet:
//!
//! - full-module style (`import_name == style_name`, name not explicit):
//!   `style` becomes `style.css`
//! - member style: `Grid` becomes `Grid/style.css`

use regex::{NoExpand, Regex};
use std::fmt;
use std::sync::{Arc, LazyLock};

static MEMBER_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$\{\s?member\s?\}").expect("placeholder pattern is valid")
});

/// Style arguments passed to a transform when resolving a stylesheet path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRequest<'a> {
    /// Stylesheet name, `style` unless configured otherwise
    pub name: &'a str,
    /// Whether the import name was given explicitly (a member import)
    pub has_import_name: bool,
}

/// A host-supplied function computing module paths
///
/// Called with the (possibly cased) member name. For style imports `style`
/// carries the stylesheet name; the returned string is used verbatim as the
/// new import source.
pub trait TransformFn: Send + Sync {
    fn call(&self, import_name: &str, style: Option<StyleRequest<'_>>) -> String;
}

impl<F> TransformFn for F
where
    F: Fn(&str, Option<StyleRequest<'_>>) -> String + Send + Sync,
{
    fn call(&self, import_name: &str, style: Option<StyleRequest<'_>>) -> String {
        self(import_name, style)
    }
}

/// Normalized transform rule
#[derive(Clone)]
pub enum Transform {
    /// Template with `${member}` placeholders
    Template(String),
    /// Function returning the final path
    Function(Arc<dyn TransformFn>),
}

impl Transform {
    /// Create a template transform
    pub fn template(template: impl Into<String>) -> Self {
        Self::Template(template.into())
    }

    /// Create a function transform
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&str, Option<StyleRequest<'_>>) -> String + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    /// Resolve the module path for a member import
    pub fn resolve(&self, import_name: &str) -> String {
        resolve(self, import_name, None)
    }

    /// Resolve the stylesheet path for an import name
    pub fn resolve_style(&self, import_name: &str, style: StyleRequest<'_>) -> String {
        resolve(self, import_name, Some(style))
    }

    /// Short label for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Template(_) => "template",
            Self::Function(_) => "function",
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(t) => f.debug_tuple("Template").field(t).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Whether a transform string names a loadable function module
pub fn is_function_reference(spec: &str) -> bool {
    spec.len() >= 3
        && spec
            .get(spec.len() - 3..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".js"))
}

/// Compute the module path for `import_name` under `transform`
pub fn resolve(transform: &Transform, import_name: &str, style: Option<StyleRequest<'_>>) -> String {
    match transform {
        Transform::Function(f) => f.call(import_name, style),
        Transform::Template(template) => {
            let name = match style {
                Some(style) if !style.has_import_name && import_name == style.name => {
                    format!("{}.css", import_name)
                }
                Some(style) => format!("{}/{}.css", import_name, style.name),
                None => import_name.to_string(),
            };
            substitute(template, &name)
        }
    }
}

/// Replace every `${member}` placeholder in `template` with `name`
pub fn substitute(template: &str, name: &str) -> String {
    MEMBER_PLACEHOLDER
        .replace_all(template, NoExpand(name))
        .into_owned()
}
