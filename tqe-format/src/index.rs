//! Typed handles into the artifact: offsets, raw counts, and the sorted
//! index families.
//!
//! Each scalar is a `#[repr(transparent)]` + `Copy` newtype, so wrapping a
//! raw primitive costs nothing at runtime — the compiler enforces type
//! boundaries at zero cost. All of them are plain-old-data and can be read
//! straight out of the blob.
//!
//! ## Sorted indexes
//!
//! An index family that spans several partitions packs a *sort tag* into
//! its high bits:
//!
//! ```text
//! bits 31..24  sort tag (one of the family's `*Sort` values)
//! bits 23..0   linear index into the sort's partition
//! ```
//!
//! The raw bit pattern 0 is the null handle for every sorted index.
//! Two families reuse the index bits for a payload instead of a partition
//! position: a `NameIndex` with sort [`NameSort::Identifier`] carries a
//! [`TextOffset`], and a `LitIndex` with sort [`LitSort::Immediate`]
//! carries the literal value itself.

use crate::partition::PartitionIndex;
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Number of bits reserved for the sort tag of a sorted index.
pub const SORT_BITS: u32 = 8;

/// Shift that moves a sort tag into place.
pub const SORT_SHIFT: u32 = 32 - SORT_BITS;

/// Mask selecting the linear-index bits of a sorted index.
pub const VALUE_MASK: u32 = (1 << SORT_SHIFT) - 1;

// ---------------------------------------------------------------------------
// Offsets and raw counts
// ---------------------------------------------------------------------------

/// Byte offset from the blob base.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Pod, Zeroable)]
#[repr(transparent)]
pub struct ByteOffset(pub u32);

impl ByteOffset {
    #[inline]
    pub fn value(self) -> usize {
        self.0 as usize
    }
}

/// Byte offset from the string-table base. Offset 0 is the null text
/// offset; the table's first byte is NUL, so it also reads as `""`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Pod, Zeroable)]
#[repr(transparent)]
pub struct TextOffset(pub u32);

impl TextOffset {
    #[inline]
    pub fn null() -> Self {
        Self(0)
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn value(self) -> usize {
        self.0 as usize
    }
}

/// Raw-count encoding of a cardinality. A single [`value`](Self::value)
/// conversion yields the usable count.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct Cardinality(pub u32);

impl Cardinality {
    #[inline]
    pub fn value(self) -> usize {
        self.0 as usize
    }
}

/// Raw-count encoding of a per-entry byte size.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Pod, Zeroable)]
#[repr(transparent)]
pub struct EntrySize(pub u32);

impl EntrySize {
    #[inline]
    pub fn value(self) -> usize {
        self.0 as usize
    }
}

// ---------------------------------------------------------------------------
// Plain linear indexes
// ---------------------------------------------------------------------------

/// Plain linear index: heaps, trait partitions, scope-member runs, and the
/// deduction-guide name list.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct Index(pub u32);

impl Index {
    #[inline]
    pub fn value(self) -> usize {
        self.0 as usize
    }
}

/// Linear index into the scope-descriptor partition (`scope.desc`).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Pod, Zeroable)]
#[repr(transparent)]
pub struct ScopeIndex(pub u32);

impl ScopeIndex {
    #[inline]
    pub fn value(self) -> usize {
        self.0 as usize
    }
}

/// Linear index into the string-literal partition (`expr.string`).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Pod, Zeroable)]
#[repr(transparent)]
pub struct StringIndex(pub u32);

impl StringIndex {
    #[inline]
    pub fn value(self) -> usize {
        self.0 as usize
    }
}

impl PartitionIndex for Index {
    #[inline]
    fn position(self) -> usize {
        self.0 as usize
    }
}

impl PartitionIndex for ScopeIndex {
    #[inline]
    fn position(self) -> usize {
        self.0 as usize
    }
}

impl PartitionIndex for StringIndex {
    #[inline]
    fn position(self) -> usize {
        self.0 as usize
    }
}

// ---------------------------------------------------------------------------
// Sequence
// ---------------------------------------------------------------------------

/// A contiguous run `[start, start + cardinality)` within a heap or
/// partition. The sole mechanism by which a fixed-size record references a
/// variable-length payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Sequence {
    pub start: Index,
    pub cardinality: Cardinality,
}

impl Sequence {
    #[inline]
    pub fn new(start: u32, cardinality: u32) -> Self {
        Self {
            start: Index(start),
            cardinality: Cardinality(cardinality),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.cardinality.0 == 0
    }
}

// ---------------------------------------------------------------------------
// Source locations
// ---------------------------------------------------------------------------

/// Line/column pair recorded by the producer for declarations,
/// expressions, and syntax nodes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

// ---------------------------------------------------------------------------
// Sort vocabularies
// ---------------------------------------------------------------------------

macro_rules! sort_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident = $tag:literal,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $tag,)*
        }

        impl $name {
            /// Decode a sort tag. Returns `None` for tags this reader does
            /// not recognize.
            #[inline]
            pub fn from_u8(tag: u8) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

sort_enum! {
    /// Declaration sorts, one per `decl.*` partition.
    DeclSort {
        Scope = 0,
        Template = 1,
        PartialSpecialization = 2,
        Specialization = 3,
        Using = 4,
        Enumeration = 5,
        Enumerator = 6,
        Alias = 7,
        Reference = 8,
        Function = 9,
        Method = 10,
        Constructor = 11,
        Destructor = 12,
        Variable = 13,
        Parameter = 14,
        Field = 15,
        Friend = 16,
        Concept = 17,
        Intrinsic = 18,
        DeductionGuide = 19,
    }
}

sort_enum! {
    /// Type sorts, one per `type.*` partition.
    TypeSort {
        Fundamental = 0,
        Designated = 1,
        Tor = 2,
        Syntactic = 3,
        Expansion = 4,
        Pointer = 5,
        Function = 6,
        Method = 7,
        Array = 8,
        Base = 9,
        Tuple = 10,
        LvalueReference = 11,
        RvalueReference = 12,
        Qualified = 13,
        Forall = 14,
        Syntax = 15,
        Placeholder = 16,
        Typename = 17,
        Decltype = 18,
    }
}

sort_enum! {
    /// Attribute sorts, one per `attr.*` partition.
    AttrSort {
        Basic = 0,
        Scoped = 1,
        Labeled = 2,
        Called = 3,
        Expanded = 4,
        Factored = 5,
        Elaborated = 6,
        Tuple = 7,
    }
}

sort_enum! {
    /// Expression sorts. `String` routes through the `StringIndex`-addressed
    /// string-literal partition; all others have an `expr.*` partition.
    ExprSort {
        Literal = 0,
        Type = 1,
        Decl = 2,
        UnqualifiedId = 3,
        TemplateId = 4,
        TemplateRef = 5,
        Monad = 6,
        Dyad = 7,
        String = 8,
        Call = 9,
        Sizeof = 10,
        Alignof = 11,
        Requires = 12,
        Tuple = 13,
        Path = 14,
        Read = 15,
        SyntaxTree = 16,
        ExpressionList = 17,
        QualifiedName = 18,
        PackedTemplateArguments = 19,
        ProductValueType = 20,
        SubobjectValue = 21,
    }
}

sort_enum! {
    /// Name sorts. `Identifier` has no partition: its index bits are a
    /// [`TextOffset`] into the string table.
    NameSort {
        Identifier = 0,
        Operator = 1,
        Conversion = 2,
        Literal = 3,
        Template = 4,
        Specialization = 5,
        SourceFile = 6,
        Guide = 7,
    }
}

sort_enum! {
    /// Chart sorts.
    ChartSort {
        Unilevel = 0,
        Multilevel = 1,
    }
}

sort_enum! {
    /// Literal sorts. `Immediate` has no partition: its index bits are the
    /// literal value itself.
    LitSort {
        Immediate = 0,
        Integer = 1,
        FloatingPoint = 2,
    }
}

sort_enum! {
    /// Syntax-tree sorts, one per `syntax.*` partition.
    SyntaxSort {
        SimpleTypeSpecifier = 0,
        DecltypeSpecifier = 1,
        TypeSpecifierSeq = 2,
        DeclSpecifierSeq = 3,
        TypeId = 4,
        Declarator = 5,
        PointerDeclarator = 6,
        FunctionDeclarator = 7,
        ParameterDeclarator = 8,
        Expression = 9,
        RequiresClause = 10,
        SimpleRequirement = 11,
        TypeRequirement = 12,
        NestedRequirement = 13,
        CompoundRequirement = 14,
        RequirementBody = 15,
        TypeTemplateArgument = 16,
        TemplateArgumentList = 17,
        TemplateId = 18,
        TypeTraitIntrinsic = 19,
        Tuple = 20,
    }
}

sort_enum! {
    /// Unit sorts. For `Primary` and `Partition` the index bits of a
    /// [`UnitIndex`] are a [`TextOffset`] holding the unit name.
    UnitSort {
        Source = 0,
        Primary = 1,
        Partition = 2,
        Header = 3,
        ExportedTU = 4,
    }
}

// ---------------------------------------------------------------------------
// Sorted index families
// ---------------------------------------------------------------------------

macro_rules! sorted_index {
    ($(#[$meta:meta])* $name:ident, $sort:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Pod, Zeroable)]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Pack a sort tag and linear index.
            #[inline]
            pub fn new(sort: $sort, index: u32) -> Self {
                debug_assert!(index <= VALUE_MASK, "index exceeds 24 bits: {index}");
                Self(((sort as u32) << SORT_SHIFT) | (index & VALUE_MASK))
            }

            /// The null handle (raw bit pattern 0).
            #[inline]
            pub fn null() -> Self {
                Self(0)
            }

            #[inline]
            pub fn is_null(self) -> bool {
                self.0 == 0
            }

            /// Decode the sort tag.
            ///
            /// Panics on a tag this reader does not recognize; an index with
            /// an unknown sort cannot have come from a well-formed artifact.
            #[inline]
            pub fn sort(self) -> $sort {
                let tag = (self.0 >> SORT_SHIFT) as u8;
                match $sort::from_u8(tag) {
                    Some(sort) => sort,
                    None => panic!(
                        "unknown {} sort tag {tag}",
                        stringify!($name),
                    ),
                }
            }

            /// The linear index into the sort's partition.
            #[inline]
            pub fn index(self) -> u32 {
                self.0 & VALUE_MASK
            }

            /// Raw `u32` bit pattern.
            #[inline]
            pub fn raw(self) -> u32 {
                self.0
            }
        }

        impl PartitionIndex for $name {
            #[inline]
            fn position(self) -> usize {
                self.index() as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{}(sort={}, index={})",
                    stringify!($name),
                    self.0 >> SORT_SHIFT,
                    self.index()
                )
            }
        }
    };
}

sorted_index! {
    /// Handle into the declaration family.
    DeclIndex, DeclSort
}

sorted_index! {
    /// Handle into the type family.
    TypeIndex, TypeSort
}

sorted_index! {
    /// Handle into the expression family.
    ExprIndex, ExprSort
}

sorted_index! {
    /// Handle into the attribute family.
    AttrIndex, AttrSort
}

sorted_index! {
    /// Handle into the syntax-tree family.
    SyntaxIndex, SyntaxSort
}

sorted_index! {
    /// Handle into the name family.
    NameIndex, NameSort
}

sorted_index! {
    /// Handle into the chart family.
    ChartIndex, ChartSort
}

sorted_index! {
    /// Handle into the literal family.
    LitIndex, LitSort
}

sorted_index! {
    /// Describes the unit this artifact represents.
    UnitIndex, UnitSort
}

impl NameIndex {
    /// The identifier payload of a [`NameSort::Identifier`] name.
    #[inline]
    pub fn identifier(self) -> TextOffset {
        debug_assert_eq!(self.sort(), NameSort::Identifier);
        TextOffset(self.index())
    }
}

impl UnitIndex {
    /// The name payload of a [`UnitSort::Primary`] or
    /// [`UnitSort::Partition`] unit.
    #[inline]
    pub fn name(self) -> TextOffset {
        TextOffset(self.index())
    }
}

impl LitIndex {
    /// The packed value of a [`LitSort::Immediate`] literal.
    #[inline]
    pub fn immediate(self) -> u32 {
        debug_assert_eq!(self.sort(), LitSort::Immediate);
        self.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_index_packing() {
        let idx = DeclIndex::new(DeclSort::Function, 0x00AB_CDEF);
        assert_eq!(idx.sort(), DeclSort::Function);
        assert_eq!(idx.index(), 0x00AB_CDEF);
        assert!(!idx.is_null());
    }

    #[test]
    fn test_null_bit_pattern() {
        assert!(DeclIndex::null().is_null());
        assert!(NameIndex(0).is_null());
        assert_eq!(TypeIndex::null().raw(), 0);
        // Sort 0 with a non-zero index is not null.
        assert!(!DeclIndex::new(DeclSort::Scope, 1).is_null());
    }

    #[test]
    fn test_sort_round_trip() {
        for tag in 0..=19u8 {
            let sort = DeclSort::from_u8(tag).unwrap();
            assert_eq!(sort as u8, tag);
        }
        assert!(DeclSort::from_u8(20).is_none());
        assert!(DeclSort::from_u8(255).is_none());

        for tag in 0..=21u8 {
            assert_eq!(ExprSort::from_u8(tag).unwrap() as u8, tag);
        }
        assert!(ExprSort::from_u8(22).is_none());

        for tag in 0..=20u8 {
            assert_eq!(SyntaxSort::from_u8(tag).unwrap() as u8, tag);
        }
        assert!(SyntaxSort::from_u8(21).is_none());
    }

    #[test]
    #[should_panic(expected = "unknown DeclIndex sort tag")]
    fn test_unknown_sort_tag_panics() {
        let _ = DeclIndex(0xFF00_0001).sort();
    }

    #[test]
    fn test_identifier_payload() {
        let name = NameIndex::new(NameSort::Identifier, 42);
        assert_eq!(name.sort(), NameSort::Identifier);
        assert_eq!(name.identifier(), TextOffset(42));
    }

    #[test]
    fn test_unit_name_payload() {
        let unit = UnitIndex::new(UnitSort::Primary, 7);
        assert_eq!(unit.sort(), UnitSort::Primary);
        assert_eq!(unit.name(), TextOffset(7));
    }

    #[test]
    fn test_sequence_defaults() {
        let seq = Sequence::default();
        assert!(seq.is_empty());
        assert_eq!(seq.start, Index(0));
    }
}
