// src/classify.rs

//! Partition of an import's specifiers into full and member imports

use crate::ast::ImportSpecifier;

/// Specifiers of one declaration split by shape, each list in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedImport<'a> {
    /// Default and namespace specifiers
    pub full: Vec<&'a ImportSpecifier>,
    /// Named specifiers
    pub members: Vec<&'a ImportSpecifier>,
}

impl ClassifiedImport<'_> {
    pub fn has_full(&self) -> bool {
        !self.full.is_empty()
    }

    pub fn has_members(&self) -> bool {
        !self.members.is_empty()
    }
}

/// Split specifiers into full (default/namespace) and member (named) lists
pub fn classify(specifiers: &[ImportSpecifier]) -> ClassifiedImport<'_> {
    let (full, members) = specifiers.iter().partition(|spec| spec.is_full());
    ClassifiedImport { full, members }
}
