//! Declaration records (`decl.*` partitions) and the scope-member list.

use super::{Access, BasicSpecifiers};
use crate::index::{
    ChartIndex, DeclIndex, ExprIndex, Index, NameIndex, ScopeIndex, Sequence, SourceLocation,
    TypeIndex,
};
use crate::partition::partition_entry;
use bytemuck::{Pod, Zeroable};

/// One entry of the master scope-member list (`scope.member`).
///
/// Scope descriptors and the template-specializations trait slice runs of
/// these records; each run member routes to its declaration partition
/// through the sort tag of `index`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Declaration {
    pub index: DeclIndex,
}

/// Namespace, class, struct, or union declaration. The discriminating
/// `TypeBasis` lives in the fundamental-types partition at `ty`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ScopeDeclaration {
    pub name: NameIndex,
    pub locus: SourceLocation,
    /// Fundamental type carrying this scope's `TypeBasis`.
    pub ty: TypeIndex,
    pub base: TypeIndex,
    /// Scope descriptor of the members this declaration introduces.
    pub initializer: ScopeIndex,
    pub home_scope: DeclIndex,
    pub alignment: u32,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TemplateDeclaration {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub home_scope: DeclIndex,
    /// Template parameter chart.
    pub chart: ChartIndex,
    /// The templated entity.
    pub entity: DeclIndex,
    pub ty: TypeIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct PartialSpecialization {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub home_scope: DeclIndex,
    pub chart: ChartIndex,
    pub entity: DeclIndex,
    /// Primary template being specialized.
    pub primary: DeclIndex,
    /// Template-argument tuple.
    pub arguments: ExprIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Specialization {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub primary: DeclIndex,
    pub arguments: ExprIndex,
    pub entity: DeclIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct UsingDeclaration {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub home_scope: DeclIndex,
    /// Declaration the using-declaration resolves to.
    pub resolution: DeclIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Enumeration {
    pub name: NameIndex,
    pub locus: SourceLocation,
    /// Underlying type.
    pub ty: TypeIndex,
    pub base: TypeIndex,
    /// Run of enumerators in `decl.enumerator`.
    pub initializer: Sequence,
    pub home_scope: DeclIndex,
    pub alignment: u32,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Enumerator {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub initializer: ExprIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct AliasDeclaration {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub home_scope: DeclIndex,
    /// The type this alias stands for.
    pub aliasee: TypeIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

/// Reference to a declaration owned by another translation unit.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct DeclReference {
    /// Position in `module.imported` of the owning unit.
    pub unit: Index,
    /// The declaration's index inside the owning unit's artifact.
    pub local_index: DeclIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct FunctionDeclaration {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub home_scope: DeclIndex,
    pub chart: ChartIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct MethodDeclaration {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub home_scope: DeclIndex,
    pub chart: ChartIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Constructor {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub home_scope: DeclIndex,
    pub chart: ChartIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Destructor {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub home_scope: DeclIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct VariableDeclaration {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub home_scope: DeclIndex,
    pub initializer: ExprIndex,
    pub alignment: u32,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ParameterDeclaration {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub default_value: ExprIndex,
    /// One-based position in the parameter list.
    pub position: u32,
    pub kind: u32,
    pub properties: u32,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct FieldDeclaration {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub home_scope: DeclIndex,
    pub initializer: ExprIndex,
    pub alignment: u32,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct FriendDeclaration {
    /// The befriended entity.
    pub entity: ExprIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct Concept {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub home_scope: DeclIndex,
    pub ty: TypeIndex,
    pub chart: ChartIndex,
    pub constraint: ExprIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct IntrinsicDeclaration {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub home_scope: DeclIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct DeductionGuide {
    pub name: NameIndex,
    pub locus: SourceLocation,
    pub home_scope: DeclIndex,
    pub ty: TypeIndex,
    pub specifiers: BasicSpecifiers,
    pub access: Access,
}

partition_entry!(ScopeDeclaration, DeclIndex, "decl.scope");
partition_entry!(TemplateDeclaration, DeclIndex, "decl.template");
partition_entry!(PartialSpecialization, DeclIndex, "decl.partial-specialization");
partition_entry!(Specialization, DeclIndex, "decl.specialization");
partition_entry!(UsingDeclaration, DeclIndex, "decl.using");
partition_entry!(Enumeration, DeclIndex, "decl.enum");
partition_entry!(Enumerator, DeclIndex, "decl.enumerator");
partition_entry!(AliasDeclaration, DeclIndex, "decl.alias");
partition_entry!(DeclReference, DeclIndex, "decl.reference");
partition_entry!(FunctionDeclaration, DeclIndex, "decl.function");
partition_entry!(MethodDeclaration, DeclIndex, "decl.method");
partition_entry!(Constructor, DeclIndex, "decl.constructor");
partition_entry!(Destructor, DeclIndex, "decl.destructor");
partition_entry!(VariableDeclaration, DeclIndex, "decl.variable");
partition_entry!(ParameterDeclaration, DeclIndex, "decl.parameter");
partition_entry!(FieldDeclaration, DeclIndex, "decl.field");
partition_entry!(FriendDeclaration, DeclIndex, "decl.friend");
partition_entry!(Concept, DeclIndex, "decl.concept");
partition_entry!(IntrinsicDeclaration, DeclIndex, "decl.intrinsic");
partition_entry!(DeductionGuide, DeclIndex, "decl.deduction-guide");
