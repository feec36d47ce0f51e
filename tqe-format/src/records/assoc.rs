//! Associated-trait records: `(decl, payload)` pairs attaching side data
//! to declarations.
//!
//! Trait partitions are not part of the memoized accessor catalogue; the
//! file scans them once to build its trait indexes and answers queries
//! from those maps afterwards.

use crate::index::{AttrIndex, DeclIndex, Sequence, TextOffset};
use bytemuck::{Pod, Zeroable};

/// Attribute-bearing trait partitions, scanned in this order.
pub const ATTRIBUTE_TRAITS: &str = "trait.attribute";
/// Vendor attribute partition, scanned after [`ATTRIBUTE_TRAITS`].
pub const MSVC_DECL_ATTRS: &str = ".msvc.trait.decl-attrs";
/// Deprecation-text trait partition.
pub const DEPRECATION_TRAITS: &str = "trait.deprecated";
/// Class-friendship trait partition.
pub const FRIENDSHIP_TRAITS: &str = "trait.friend";
/// Template-specializations trait partition.
pub const SPECIALIZATION_TRAITS: &str = "trait.specialization";

/// One attribute attached to a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct AttributeTrait {
    pub decl: DeclIndex,
    pub attribute: AttrIndex,
}

/// Deprecation message attached to a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct DeprecationTrait {
    pub decl: DeclIndex,
    pub text: TextOffset,
}

/// Friends of a class declaration, as a run of `scope.member` entries.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct FriendshipTrait {
    pub decl: DeclIndex,
    pub friends: Sequence,
}

/// Specializations of a template declaration, as a run of `scope.member`
/// entries.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SpecializationTrait {
    pub decl: DeclIndex,
    pub specializations: Sequence,
}
