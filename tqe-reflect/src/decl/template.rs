//! Template declarations and their specializations.

use crate::chart::Chart;
use crate::decl::Declaration;
use crate::name::Name;
use tqe_format::records::decl as decl_records;
use tqe_format::records::{AccessSort, BasicSpecifiers};
use tqe_format::{DeclIndex, File};

/// A template declaration. Carries its own index so the
/// template-specializations trait can be consulted.
#[derive(Clone, Copy)]
pub struct TemplateDeclaration<'a> {
    file: &'a File<'a>,
    record: &'a decl_records::TemplateDeclaration,
    index: DeclIndex,
}

impl<'a> TemplateDeclaration<'a> {
    pub fn new(
        file: &'a File<'a>,
        record: &'a decl_records::TemplateDeclaration,
        index: DeclIndex,
    ) -> Self {
        Self { file, record, index }
    }

    pub fn containing_file(&self) -> &'a File<'a> {
        self.file
    }

    pub fn index(&self) -> DeclIndex {
        self.index
    }

    pub fn name(&self) -> Name<'a> {
        Name::new(self.file, self.record.name)
    }

    /// The templated entity.
    pub fn entity(&self) -> Declaration<'a> {
        Declaration::new(self.file, self.record.entity)
    }

    pub fn chart(&self) -> Chart<'a> {
        Chart::new(self.file, self.record.chart)
    }

    pub fn home_scope(&self) -> Declaration<'a> {
        Declaration::new(self.file, self.record.home_scope)
    }

    pub fn specifiers(&self) -> BasicSpecifiers {
        self.record.specifiers
    }

    pub fn access(&self) -> AccessSort {
        self.record.access.sort()
    }

    /// Iterate the recorded specializations of this template.
    pub fn specializations(&self) -> impl Iterator<Item = Declaration<'a>> + 'a {
        let file = self.file;
        file.get_declarations(file.trait_template_specializations(self.index))
            .iter()
            .map(move |member| Declaration::new(file, member.index))
    }
}

impl PartialEq for TemplateDeclaration<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.file, other.file) && self.index == other.index
    }
}

impl Eq for TemplateDeclaration<'_> {}
