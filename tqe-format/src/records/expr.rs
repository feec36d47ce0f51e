//! Expression records (`expr.*` partitions).
//!
//! Every expression record leads with its source location and type. A
//! record field of type [`Sequence`] slices `heap.expr`.

use crate::index::{
    Cardinality, ChartIndex, DeclIndex, ExprIndex, LitIndex, NameIndex, Sequence, SourceLocation,
    StringIndex, SyntaxIndex, TextOffset, TypeIndex,
};
use crate::partition::partition_entry;
use bytemuck::{Pod, Zeroable};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct LiteralExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub value: LitIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TypeExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub denotation: TypeIndex,
}

/// Reference to a named declaration.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct DeclExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub decl: DeclIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct UnqualifiedId {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub name: NameIndex,
    pub resolution: DeclIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TemplateId {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub primary: ExprIndex,
    /// Template-argument tuple.
    pub arguments: ExprIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TemplateRef {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub member: NameIndex,
    pub arguments: ExprIndex,
}

/// Unary operator application.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct MonadExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub op: u32,
    pub arg: ExprIndex,
}

/// Binary operator application.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct DyadExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub op: u32,
    pub left: ExprIndex,
    pub right: ExprIndex,
}

/// String-literal payload, addressed by [`StringIndex`]. An `ExprIndex`
/// with sort `String` carries the `StringIndex` in its index bits.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct StringLiteral {
    /// Start of the literal bytes in the string table.
    pub start: TextOffset,
    /// Length in bytes, excluding the terminator.
    pub size: Cardinality,
    /// Literal suffix, if any.
    pub suffix: TextOffset,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct CallExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub function: ExprIndex,
    /// Argument tuple.
    pub arguments: ExprIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SizeofExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub operand: TypeIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct AlignofExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub operand: TypeIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct RequiresExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub parameters: ChartIndex,
    pub body: SyntaxIndex,
}

/// Element run lives in `heap.expr`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TupleExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub seq: Sequence,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct PathExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub scope: ExprIndex,
    pub member: ExprIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ReadExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub child: ExprIndex,
    pub kind: u32,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SyntaxTreeExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub syntax: SyntaxIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ExpressionList {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    /// Element run in `heap.expr`.
    pub expressions: Sequence,
    pub delimiter: u32,
}

/// The `elements` expression always has sort `Tuple`; the qualified-name
/// helper on `File` asserts it.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct QualifiedNameExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub elements: ExprIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct PackedTemplateArguments {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub arguments: ExprIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ProductValueTypeExpression {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub structure: TypeIndex,
    pub members: ExprIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SubobjectValue {
    pub locus: SourceLocation,
    pub ty: TypeIndex,
    pub value: ExprIndex,
    pub position: u32,
}

partition_entry!(LiteralExpression, ExprIndex, "expr.literal");
partition_entry!(TypeExpression, ExprIndex, "expr.type");
partition_entry!(DeclExpression, ExprIndex, "expr.decl");
partition_entry!(UnqualifiedId, ExprIndex, "expr.unqualified-id");
partition_entry!(TemplateId, ExprIndex, "expr.template-id");
partition_entry!(TemplateRef, ExprIndex, "expr.template-ref");
partition_entry!(MonadExpression, ExprIndex, "expr.monad");
partition_entry!(DyadExpression, ExprIndex, "expr.dyad");
partition_entry!(StringLiteral, StringIndex, "expr.string");
partition_entry!(CallExpression, ExprIndex, "expr.call");
partition_entry!(SizeofExpression, ExprIndex, "expr.sizeof");
partition_entry!(AlignofExpression, ExprIndex, "expr.alignof");
partition_entry!(RequiresExpression, ExprIndex, "expr.requires");
partition_entry!(TupleExpression, ExprIndex, "expr.tuple");
partition_entry!(PathExpression, ExprIndex, "expr.path");
partition_entry!(ReadExpression, ExprIndex, "expr.read");
partition_entry!(SyntaxTreeExpression, ExprIndex, "expr.syntax-tree");
partition_entry!(ExpressionList, ExprIndex, "expr.list");
partition_entry!(QualifiedNameExpression, ExprIndex, "expr.qualified-name");
partition_entry!(PackedTemplateArguments, ExprIndex, "expr.packed-template-arguments");
partition_entry!(ProductValueTypeExpression, ExprIndex, "expr.product-value-type");
partition_entry!(SubobjectValue, ExprIndex, "expr.subobject-value");
