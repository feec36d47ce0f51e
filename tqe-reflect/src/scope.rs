//! A scope and the declarations it contains.

use crate::decl::Declaration;
use tqe_format::{File, ScopeIndex, Sequence};

/// A scope: one descriptor in `scope.desc`, naming a run of the master
/// scope-member list.
#[derive(Clone, Copy)]
pub struct Scope<'a> {
    file: &'a File<'a>,
    index: ScopeIndex,
}

impl<'a> Scope<'a> {
    pub fn new(file: &'a File<'a>, index: ScopeIndex) -> Self {
        Self { file, index }
    }

    pub fn index(&self) -> ScopeIndex {
        self.index
    }

    /// The descriptor's member run.
    pub fn descriptor(&self) -> Sequence {
        *self.file.scope_descriptors().at(self.index)
    }

    pub fn is_empty(&self) -> bool {
        self.descriptor().is_empty()
    }

    /// Iterate the declarations of this scope.
    pub fn declarations(&self) -> impl Iterator<Item = Declaration<'a>> + 'a {
        let file = self.file;
        file.get_declarations(self.descriptor())
            .iter()
            .map(move |member| Declaration::new(file, member.index))
    }
}

impl PartialEq for Scope<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.file, other.file) && self.index == other.index
    }
}

impl Eq for Scope<'_> {}
