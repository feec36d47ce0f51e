//! Record layouts for every partition family.
//!
//! All records are `#[repr(C)]`, little-endian, padding-free, and
//! plain-old-data: a partition access reinterprets blob memory without
//! copying. Fields are `u32`-based handles except the two 8-byte literal
//! records.

pub mod assoc;
pub mod attr;
pub mod chart;
pub mod decl;
pub mod expr;
pub mod lit;
pub mod module_ref;
pub mod name;
pub mod syntax;
pub mod ty;

use bytemuck::{Pod, Zeroable};

// ---------------------------------------------------------------------------
// Shared field vocabularies
// ---------------------------------------------------------------------------

/// Bit set of producer-recorded declaration properties.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct BasicSpecifiers(pub u32);

impl BasicSpecifiers {
    /// Declared with C language linkage.
    pub const C_LINKAGE: u32 = 0x01;
    /// Has external linkage.
    pub const EXTERNAL: u32 = 0x02;
    /// Has internal linkage.
    pub const INTERNAL: u32 = 0x04;
    /// Carries a deprecation marking.
    pub const DEPRECATED: u32 = 0x08;
    /// Not exported from the module.
    pub const NON_EXPORTED: u32 = 0x10;

    #[inline]
    pub fn contains(self, flags: u32) -> bool {
        self.0 & flags == flags
    }

    #[inline]
    pub fn is_exported(self) -> bool {
        self.0 & Self::NON_EXPORTED == 0
    }
}

/// Member access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AccessSort {
    None = 0,
    Private = 1,
    Protected = 2,
    Public = 3,
}

/// Raw access field of a declaration record.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct Access(pub u32);

impl Access {
    /// Decode the access level. Panics on a value outside the vocabulary;
    /// a well-formed artifact never stores one.
    #[inline]
    pub fn sort(self) -> AccessSort {
        match self.0 {
            0 => AccessSort::None,
            1 => AccessSort::Private,
            2 => AccessSort::Protected,
            3 => AccessSort::Public,
            other => panic!("unknown access value {other}"),
        }
    }
}

/// cv-qualifier bit set on a qualified type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct Qualifiers(pub u32);

impl Qualifiers {
    pub const CONST: u32 = 0x01;
    pub const VOLATILE: u32 = 0x02;
    pub const RESTRICT: u32 = 0x04;

    #[inline]
    pub fn is_const(self) -> bool {
        self.0 & Self::CONST != 0
    }

    #[inline]
    pub fn is_volatile(self) -> bool {
        self.0 & Self::VOLATILE != 0
    }
}
