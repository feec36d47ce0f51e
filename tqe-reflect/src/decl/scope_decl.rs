//! Namespaces and class-like scopes.

use crate::decl::Declaration;
use crate::name::Name;
use crate::scope::Scope;
use tqe_format::records::decl as decl_records;
use tqe_format::records::ty::TypeBasis;
use tqe_format::records::{AccessSort, BasicSpecifiers};
use tqe_format::File;

/// A namespace, class, struct, or union declaration.
#[derive(Clone, Copy)]
pub struct ScopeDeclaration<'a> {
    file: &'a File<'a>,
    record: &'a decl_records::ScopeDeclaration,
}

impl<'a> ScopeDeclaration<'a> {
    pub fn new(file: &'a File<'a>, record: &'a decl_records::ScopeDeclaration) -> Self {
        Self { file, record }
    }

    pub fn record(&self) -> &'a decl_records::ScopeDeclaration {
        self.record
    }

    pub fn name(&self) -> Name<'a> {
        Name::new(self.file, self.record.name)
    }

    pub fn home_scope(&self) -> Declaration<'a> {
        Declaration::new(self.file, self.record.home_scope)
    }

    /// What kind of scope this declares, from the fundamental-types
    /// partition at the record's type field.
    pub fn kind(&self) -> TypeBasis {
        self.file.fundamental_types().at(self.record.ty).basis()
    }

    pub fn is_namespace(&self) -> bool {
        self.kind() == TypeBasis::Namespace
    }

    pub fn is_class_or_struct(&self) -> bool {
        self.kind().is_class_like()
    }

    /// The scope of members this declaration introduces.
    pub fn members(&self) -> Scope<'a> {
        Scope::new(self.file, self.record.initializer)
    }

    pub fn specifiers(&self) -> BasicSpecifiers {
        self.record.specifiers
    }

    pub fn access(&self) -> AccessSort {
        self.record.access.sort()
    }
}

impl PartialEq for ScopeDeclaration<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.file, other.file) && std::ptr::eq(self.record, other.record)
    }
}

impl Eq for ScopeDeclaration<'_> {}
