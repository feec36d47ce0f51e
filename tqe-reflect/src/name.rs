//! Names: identifier, operator, conversion, literal, template,
//! specialization, and source-file variants behind one handle.

use crate::expr::TupleExpressionView;
use tqe_format::records::name as name_records;
use tqe_format::records::name::Operator;
use tqe_format::{File, NameIndex, NameSort};

/// A name, resolved through the sort tag of its [`NameIndex`].
#[derive(Clone, Copy)]
pub struct Name<'a> {
    file: &'a File<'a>,
    index: NameIndex,
}

impl<'a> Name<'a> {
    pub fn new(file: &'a File<'a>, index: NameIndex) -> Self {
        Self { file, index }
    }

    pub fn index(&self) -> NameIndex {
        self.index
    }

    pub fn is_null(&self) -> bool {
        self.index.is_null()
    }

    pub fn sort(&self) -> NameSort {
        self.index.sort()
    }

    pub fn is_identifier(&self) -> bool {
        self.sort() == NameSort::Identifier
    }

    /// The identifier text, when this is an identifier name.
    pub fn as_identifier(&self) -> Option<&'a str> {
        (self.sort() == NameSort::Identifier)
            .then(|| self.file.get_string(self.index.identifier()))
    }

    pub fn is_operator(&self) -> bool {
        self.sort() == NameSort::Operator
    }

    /// The rendered spelling of an operator-function name.
    pub fn operator_spelling(&self) -> Option<&'a str> {
        self.operator_record()
            .map(|record| self.file.get_string(record.encoded))
    }

    /// The operator behind an operator-function name.
    pub fn operator(&self) -> Option<Operator> {
        self.operator_record().map(|record| record.operator())
    }

    fn operator_record(&self) -> Option<&'a name_records::OperatorFunctionName> {
        (self.sort() == NameSort::Operator)
            .then(|| self.file.operator_names().at(self.index))
    }

    /// The conversion-function name record, for `operator T` names.
    pub fn as_conversion(&self) -> Option<&'a name_records::ConversionFunctionName> {
        (self.sort() == NameSort::Conversion)
            .then(|| self.file.conversion_names().at(self.index))
    }

    pub fn is_literal(&self) -> bool {
        self.sort() == NameSort::Literal
    }

    /// The suffix of a literal-operator name.
    pub fn literal_suffix(&self) -> Option<&'a str> {
        (self.sort() == NameSort::Literal)
            .then(|| self.file.get_string(self.file.literal_names().at(self.index).suffix))
    }

    /// The underlying name of a template name.
    pub fn as_template(&self) -> Option<Name<'a>> {
        (self.sort() == NameSort::Template)
            .then(|| Name::new(self.file, self.file.template_names().at(self.index).name))
    }

    pub fn is_specialization(&self) -> bool {
        self.sort() == NameSort::Specialization
    }

    /// The specialization payload: primary name plus argument tuple.
    pub fn as_specialization(&self) -> Option<SpecializationName<'a>> {
        (self.sort() == NameSort::Specialization).then(|| SpecializationName {
            file: self.file,
            record: self.file.specialization_names().at(self.index),
        })
    }

    /// The file name of a source-file name.
    pub fn as_source_file(&self) -> Option<&'a str> {
        (self.sort() == NameSort::SourceFile)
            .then(|| self.file.get_string(self.file.source_file_names().at(self.index).name))
    }
}

impl PartialEq for Name<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.file, other.file) && self.index == other.index
    }
}

impl Eq for Name<'_> {}

impl std::fmt::Debug for Name<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Name")
            .field("file", &(self.file as *const File))
            .field("index", &self.index)
            .finish()
    }
}

/// `primary<arguments...>`.
#[derive(Clone, Copy)]
pub struct SpecializationName<'a> {
    file: &'a File<'a>,
    record: &'a name_records::SpecializationName,
}

impl<'a> SpecializationName<'a> {
    pub fn primary(&self) -> Name<'a> {
        Name::new(self.file, self.record.primary)
    }

    pub fn template_arguments(&self) -> TupleExpressionView<'a> {
        TupleExpressionView::for_expression(self.file, self.record.arguments)
    }
}

/// True when `name` is the identifier `text`.
pub fn is_identifier(name: Name<'_>, text: &str) -> bool {
    name.as_identifier() == Some(text)
}
