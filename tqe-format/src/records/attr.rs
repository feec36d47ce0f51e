//! Attribute records (`attr.*` partitions).

use crate::index::{AttrIndex, ExprIndex, Sequence, TextOffset};
use crate::partition::partition_entry;
use bytemuck::{Pod, Zeroable};

/// A bare attribute word, e.g. `[[nodiscard]]`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct AttrBasic {
    pub word: TextOffset,
}

/// A scoped attribute word, e.g. `[[msvc::no_unique_address]]`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct AttrScoped {
    pub scope: TextOffset,
    pub member: TextOffset,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct AttrLabeled {
    pub label: TextOffset,
    pub attribute: AttrIndex,
}

/// An attribute applied with arguments, e.g. `[[deprecated("why")]]`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct AttrCalled {
    pub function: AttrIndex,
    pub arguments: AttrIndex,
}

/// A pack-expanded attribute.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct AttrExpanded {
    pub operand: AttrIndex,
}

/// A `using`-prefix attribute list, e.g. `[[using gnu: hot, const]]`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct AttrFactored {
    pub factor: TextOffset,
    pub terms: AttrIndex,
}

/// An attribute whose payload is an expression.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct AttrElaborated {
    pub expr: ExprIndex,
}

/// Element run lives in `heap.attr`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct AttrTuple {
    pub elements: Sequence,
}

partition_entry!(AttrBasic, AttrIndex, "attr.basic");
partition_entry!(AttrScoped, AttrIndex, "attr.scoped");
partition_entry!(AttrLabeled, AttrIndex, "attr.labeled");
partition_entry!(AttrCalled, AttrIndex, "attr.called");
partition_entry!(AttrExpanded, AttrIndex, "attr.expanded");
partition_entry!(AttrFactored, AttrIndex, "attr.factored");
partition_entry!(AttrElaborated, AttrIndex, "attr.elaborated");
partition_entry!(AttrTuple, AttrIndex, "attr.tuple");
