//! Declarations: the generic handle plus the scope and template
//! wrappers.

mod scope_decl;
mod template;

pub use scope_decl::ScopeDeclaration;
pub use template::TemplateDeclaration;

use crate::name::Name;
use tqe_format::records::decl as decl_records;
use tqe_format::{AttrIndex, DeclIndex, DeclSort, File};

/// A declaration of any sort.
#[derive(Clone, Copy)]
pub struct Declaration<'a> {
    file: &'a File<'a>,
    index: DeclIndex,
}

impl<'a> Declaration<'a> {
    pub fn new(file: &'a File<'a>, index: DeclIndex) -> Self {
        Self { file, index }
    }

    pub fn index(&self) -> DeclIndex {
        self.index
    }

    pub fn is_null(&self) -> bool {
        self.index.is_null()
    }

    pub fn sort(&self) -> DeclSort {
        self.index.sort()
    }

    pub fn containing_file(&self) -> &'a File<'a> {
        self.file
    }

    /// The declaration's name, for sorts that carry one.
    pub fn name(&self) -> Option<Name<'a>> {
        let file = self.file;
        let index = self.index;
        let name = match self.sort() {
            DeclSort::Scope => file.scope_declarations().at(index).name,
            DeclSort::Template => file.template_declarations().at(index).name,
            DeclSort::PartialSpecialization => file.partial_specializations().at(index).name,
            DeclSort::Specialization => file.specializations().at(index).name,
            DeclSort::Using => file.using_declarations().at(index).name,
            DeclSort::Enumeration => file.enumerations().at(index).name,
            DeclSort::Enumerator => file.enumerators().at(index).name,
            DeclSort::Alias => file.alias_declarations().at(index).name,
            DeclSort::Function => file.functions().at(index).name,
            DeclSort::Method => file.methods().at(index).name,
            DeclSort::Constructor => file.constructors().at(index).name,
            DeclSort::Destructor => file.destructors().at(index).name,
            DeclSort::Variable => file.variables().at(index).name,
            DeclSort::Parameter => file.parameters().at(index).name,
            DeclSort::Field => file.fields().at(index).name,
            DeclSort::Concept => file.concepts().at(index).name,
            DeclSort::Intrinsic => file.intrinsic_declarations().at(index).name,
            DeclSort::DeductionGuide => file.deduction_guides().at(index).name,
            // References and friends designate other entities; they have
            // no name of their own.
            DeclSort::Reference | DeclSort::Friend => return None,
        };
        Some(Name::new(file, name))
    }

    pub fn as_scope(&self) -> Option<ScopeDeclaration<'a>> {
        (self.sort() == DeclSort::Scope).then(|| {
            ScopeDeclaration::new(self.file, self.file.scope_declarations().at(self.index))
        })
    }

    pub fn as_template(&self) -> Option<TemplateDeclaration<'a>> {
        (self.sort() == DeclSort::Template).then(|| {
            TemplateDeclaration::new(
                self.file,
                self.file.template_declarations().at(self.index),
                self.index,
            )
        })
    }

    pub fn as_function(&self) -> Option<&'a decl_records::FunctionDeclaration> {
        (self.sort() == DeclSort::Function).then(|| self.file.functions().at(self.index))
    }

    pub fn as_method(&self) -> Option<&'a decl_records::MethodDeclaration> {
        (self.sort() == DeclSort::Method).then(|| self.file.methods().at(self.index))
    }

    pub fn as_variable(&self) -> Option<&'a decl_records::VariableDeclaration> {
        (self.sort() == DeclSort::Variable).then(|| self.file.variables().at(self.index))
    }

    pub fn as_enumeration(&self) -> Option<&'a decl_records::Enumeration> {
        (self.sort() == DeclSort::Enumeration).then(|| self.file.enumerations().at(self.index))
    }

    pub fn as_alias(&self) -> Option<&'a decl_records::AliasDeclaration> {
        (self.sort() == DeclSort::Alias).then(|| self.file.alias_declarations().at(self.index))
    }

    pub fn as_field(&self) -> Option<&'a decl_records::FieldDeclaration> {
        (self.sort() == DeclSort::Field).then(|| self.file.fields().at(self.index))
    }

    pub fn as_parameter(&self) -> Option<&'a decl_records::ParameterDeclaration> {
        (self.sort() == DeclSort::Parameter).then(|| self.file.parameters().at(self.index))
    }

    pub fn as_concept(&self) -> Option<&'a decl_records::Concept> {
        (self.sort() == DeclSort::Concept).then(|| self.file.concepts().at(self.index))
    }

    /// Attributes attached to this declaration, in trait-partition order.
    pub fn attributes(&self) -> &'a [AttrIndex] {
        self.file.trait_declaration_attributes(self.index)
    }

    /// The deprecation message, when one is recorded.
    pub fn deprecation(&self) -> Option<&'a str> {
        let text = self.file.trait_deprecation_texts(self.index);
        (!text.is_null()).then(|| self.file.get_string(text))
    }

    /// Friends recorded for this class declaration.
    pub fn friends(&self) -> impl Iterator<Item = Declaration<'a>> + 'a {
        let file = self.file;
        file.get_declarations(file.trait_friendship_of_class(self.index))
            .iter()
            .map(move |member| Declaration::new(file, member.index))
    }
}

impl PartialEq for Declaration<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.file, other.file) && self.index == other.index
    }
}

impl Eq for Declaration<'_> {}
