//! Syntax-tree records (`syntax.*` partitions): parsed-but-unelaborated
//! token structure the producer preserves for dependent constructs.
//!
//! A record field of type [`Sequence`] slices `heap.syn`.

use crate::index::{ExprIndex, Sequence, SourceLocation, SyntaxIndex, TypeIndex};
use crate::partition::partition_entry;
use bytemuck::{Pod, Zeroable};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SimpleTypeSpecifier {
    pub ty: TypeIndex,
    pub keyword: u32,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct DecltypeSpecifier {
    pub expression: ExprIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TypeSpecifierSeq {
    pub specifiers: SyntaxIndex,
    pub ty: TypeIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct DeclSpecifierSeq {
    pub specifiers: SyntaxIndex,
    pub ty: TypeIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TypeIdSyntax {
    pub type_specifier: SyntaxIndex,
    pub declarator: SyntaxIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct DeclaratorSyntax {
    pub pointer: SyntaxIndex,
    pub function: SyntaxIndex,
    pub identifier: ExprIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct PointerDeclaratorSyntax {
    pub child: SyntaxIndex,
    pub kind: u32,
    pub qualifiers: u32,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct FunctionDeclaratorSyntax {
    pub parameters: SyntaxIndex,
    pub exception_spec: SyntaxIndex,
    pub qualifiers: u32,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ParameterDeclaratorSyntax {
    pub decl_specifier: SyntaxIndex,
    pub declarator: SyntaxIndex,
    pub default_argument: ExprIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ExpressionSyntax {
    pub expression: ExprIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct RequiresClauseSyntax {
    pub expression: ExprIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SimpleRequirementSyntax {
    pub expression: ExprIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TypeRequirementSyntax {
    pub ty: SyntaxIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct NestedRequirementSyntax {
    pub constraint: ExprIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct CompoundRequirementSyntax {
    pub expression: ExprIndex,
    pub return_type: SyntaxIndex,
    pub is_noexcept: u32,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct RequirementBodySyntax {
    /// Run of requirements in `heap.syn`.
    pub requirements: Sequence,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TypeTemplateArgumentSyntax {
    pub argument: SyntaxIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TemplateArgumentListSyntax {
    /// Run of arguments in `heap.syn`.
    pub arguments: Sequence,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TemplateIdSyntax {
    pub name: ExprIndex,
    pub arguments: SyntaxIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TypeTraitIntrinsicSyntax {
    pub intrinsic: u32,
    pub arguments: SyntaxIndex,
    pub locus: SourceLocation,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TupleSyntax {
    /// Run of elements in `heap.syn`.
    pub elements: Sequence,
    pub locus: SourceLocation,
}

partition_entry!(SimpleTypeSpecifier, SyntaxIndex, "syntax.simple-type-specifier");
partition_entry!(DecltypeSpecifier, SyntaxIndex, "syntax.decltype-specifier");
partition_entry!(TypeSpecifierSeq, SyntaxIndex, "syntax.type-specifier-seq");
partition_entry!(DeclSpecifierSeq, SyntaxIndex, "syntax.decl-specifier-seq");
partition_entry!(TypeIdSyntax, SyntaxIndex, "syntax.type-id");
partition_entry!(DeclaratorSyntax, SyntaxIndex, "syntax.declarator");
partition_entry!(PointerDeclaratorSyntax, SyntaxIndex, "syntax.pointer-declarator");
partition_entry!(FunctionDeclaratorSyntax, SyntaxIndex, "syntax.function-declarator");
partition_entry!(ParameterDeclaratorSyntax, SyntaxIndex, "syntax.parameter-declarator");
partition_entry!(ExpressionSyntax, SyntaxIndex, "syntax.expression");
partition_entry!(RequiresClauseSyntax, SyntaxIndex, "syntax.requires-clause");
partition_entry!(SimpleRequirementSyntax, SyntaxIndex, "syntax.simple-requirement");
partition_entry!(TypeRequirementSyntax, SyntaxIndex, "syntax.type-requirement");
partition_entry!(NestedRequirementSyntax, SyntaxIndex, "syntax.nested-requirement");
partition_entry!(CompoundRequirementSyntax, SyntaxIndex, "syntax.compound-requirement");
partition_entry!(RequirementBodySyntax, SyntaxIndex, "syntax.requirement-body");
partition_entry!(TypeTemplateArgumentSyntax, SyntaxIndex, "syntax.type-template-argument");
partition_entry!(TemplateArgumentListSyntax, SyntaxIndex, "syntax.template-argument-list");
partition_entry!(TemplateIdSyntax, SyntaxIndex, "syntax.template-id");
partition_entry!(TypeTraitIntrinsicSyntax, SyntaxIndex, "syntax.type-trait-intrinsic");
partition_entry!(TupleSyntax, SyntaxIndex, "syntax.tuple");
