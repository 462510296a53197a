// src/paths.rs

//! Resolution of relative module identifiers
//!
//! Configuration for local modules is keyed by absolute path, so an import of
//! `./components` or `../lib` is resolved against the importing file's
//! directory before lookup. Sources starting with `/` are normalized on
//! their own. Resolution is purely lexical: the file system is never
//! consulted.

use std::path::{Component, Path, PathBuf};

/// Host collaborator turning a relative module identifier into a lookup key
pub trait PathResolver {
    /// Resolve `source` as imported from `filename`
    ///
    /// Returns `None` when `source` is not path-like (a bare package name).
    fn resolve(&self, source: &str, filename: Option<&Path>) -> Option<String>;
}

/// Whether a module identifier is a path (`/x`, `./x` or `../x`)
pub fn is_path_like(source: &str) -> bool {
    source.starts_with('/') || source.starts_with("./") || source.starts_with("../")
}

/// Resolves relative sources against the importing file's directory
///
/// Relative results are anchored at `cwd`, matching how build tools resolve
/// a relative filename.
#[derive(Debug, Clone)]
pub struct FileRelativeResolver {
    cwd: PathBuf,
}

impl FileRelativeResolver {
    /// Create a resolver anchored at `cwd`
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Create a resolver anchored at the process working directory
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl PathResolver for FileRelativeResolver {
    fn resolve(&self, source: &str, filename: Option<&Path>) -> Option<String> {
        if !is_path_like(source) {
            return None;
        }

        let joined = if source.starts_with('/') {
            PathBuf::from(source)
        } else {
            let dir = filename.and_then(Path::parent).unwrap_or_else(|| Path::new(""));
            dir.join(source)
        };

        let absolute = if joined.is_absolute() {
            joined
        } else {
            self.cwd.join(joined)
        };

        Some(normalize(&absolute).to_string_lossy().into_owned())
    }
}

/// Lexically remove `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
