//! Type records (`type.*` partitions).

use super::{Access, Qualifiers};
use crate::index::{ChartIndex, ExprIndex, Sequence, SyntaxIndex, TypeIndex};
use crate::partition::partition_entry;
use bytemuck::{Pod, Zeroable};

/// Basis vocabulary of a fundamental type. Scope declarations use it to
/// distinguish namespaces from class-like scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeBasis {
    Void = 0,
    Bool = 1,
    Char = 2,
    Wchar = 3,
    Int = 4,
    Float = 5,
    Double = 6,
    Nullptr = 7,
    Ellipsis = 8,
    Class = 9,
    Struct = 10,
    Union = 11,
    Enum = 12,
    Typename = 13,
    Namespace = 14,
    Function = 15,
    Auto = 16,
}

impl TypeBasis {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Void),
            1 => Some(Self::Bool),
            2 => Some(Self::Char),
            3 => Some(Self::Wchar),
            4 => Some(Self::Int),
            5 => Some(Self::Float),
            6 => Some(Self::Double),
            7 => Some(Self::Nullptr),
            8 => Some(Self::Ellipsis),
            9 => Some(Self::Class),
            10 => Some(Self::Struct),
            11 => Some(Self::Union),
            12 => Some(Self::Enum),
            13 => Some(Self::Typename),
            14 => Some(Self::Namespace),
            15 => Some(Self::Function),
            16 => Some(Self::Auto),
            _ => None,
        }
    }

    /// True for class, struct, and union bases.
    #[inline]
    pub fn is_class_like(self) -> bool {
        matches!(self, Self::Class | Self::Struct | Self::Union)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct FundamentalType {
    pub basis: u32,
    pub precision: u32,
    pub sign: u32,
}

impl FundamentalType {
    /// Decode the basis. Panics on a value outside the vocabulary.
    #[inline]
    pub fn basis(&self) -> TypeBasis {
        match TypeBasis::from_u8(self.basis as u8) {
            Some(basis) => basis,
            None => panic!("unknown type basis {}", self.basis),
        }
    }
}

/// Type designated by a declaration (class, enum, alias, ...).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct DesignatedType {
    pub decl: crate::index::DeclIndex,
}

/// Constructor/destructor type.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TorType {
    /// Parameter tuple.
    pub source: TypeIndex,
    pub eh_spec: ExprIndex,
    pub convention: u32,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SyntacticType {
    pub expr: ExprIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ExpansionType {
    pub pack: TypeIndex,
    pub mode: u32,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct PointerType {
    pub pointee: TypeIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct FunctionType {
    /// Return type.
    pub target: TypeIndex,
    /// Parameter tuple.
    pub source: TypeIndex,
    pub eh_spec: ExprIndex,
    pub convention: u32,
    pub traits: u32,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct MethodType {
    pub target: TypeIndex,
    pub source: TypeIndex,
    /// Enclosing class type.
    pub class_type: TypeIndex,
    pub eh_spec: ExprIndex,
    pub convention: u32,
    pub traits: u32,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ArrayType {
    pub element: TypeIndex,
    pub bound: ExprIndex,
}

/// Base-class specifier.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct BaseType {
    pub ty: TypeIndex,
    pub access: Access,
    pub traits: u32,
}

/// Element run lives in `heap.type`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TupleType {
    pub elements: Sequence,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct LvalueReference {
    pub referee: TypeIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct RvalueReference {
    pub referee: TypeIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct QualifiedType {
    pub unqualified: TypeIndex,
    pub qualifiers: Qualifiers,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ForallType {
    pub chart: ChartIndex,
    pub subject: TypeIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SyntaxType {
    pub syntax: SyntaxIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct PlaceholderType {
    pub constraint: ExprIndex,
    pub basis: u32,
    pub elaboration: TypeIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TypenameType {
    pub path: ExprIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct DecltypeType {
    pub expression: ExprIndex,
}

partition_entry!(FundamentalType, TypeIndex, "type.fundamental");
partition_entry!(DesignatedType, TypeIndex, "type.designated");
partition_entry!(TorType, TypeIndex, "type.tor");
partition_entry!(SyntacticType, TypeIndex, "type.syntactic");
partition_entry!(ExpansionType, TypeIndex, "type.expansion");
partition_entry!(PointerType, TypeIndex, "type.pointer");
partition_entry!(FunctionType, TypeIndex, "type.function");
partition_entry!(MethodType, TypeIndex, "type.method");
partition_entry!(ArrayType, TypeIndex, "type.array");
partition_entry!(BaseType, TypeIndex, "type.base");
partition_entry!(TupleType, TypeIndex, "type.tuple");
partition_entry!(LvalueReference, TypeIndex, "type.lvalue-reference");
partition_entry!(RvalueReference, TypeIndex, "type.rvalue-reference");
partition_entry!(QualifiedType, TypeIndex, "type.qualified");
partition_entry!(ForallType, TypeIndex, "type.forall");
partition_entry!(SyntaxType, TypeIndex, "type.syntax");
partition_entry!(PlaceholderType, TypeIndex, "type.placeholder");
partition_entry!(TypenameType, TypeIndex, "type.typename");
partition_entry!(DecltypeType, TypeIndex, "type.decltype");
