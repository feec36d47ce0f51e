//! Name records (`name.*` partitions).
//!
//! Identifier names have no partition: a `NameIndex` with sort
//! `Identifier` carries its string-table offset directly.

use crate::index::{ExprIndex, NameIndex, TextOffset, TypeIndex};
use crate::partition::partition_entry;
use bytemuck::{Pod, Zeroable};

/// Operator vocabulary for operator-function names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Operator {
    Plus = 0,
    Minus = 1,
    Star = 2,
    Slash = 3,
    Percent = 4,
    Caret = 5,
    Ampersand = 6,
    Bar = 7,
    Tilde = 8,
    Bang = 9,
    Assign = 10,
    Less = 11,
    Greater = 12,
    PlusAssign = 13,
    MinusAssign = 14,
    StarAssign = 15,
    LeftShift = 16,
    RightShift = 17,
    EqualEqual = 18,
    NotEqual = 19,
    LessEqual = 20,
    GreaterEqual = 21,
    Spaceship = 22,
    AmpAmp = 23,
    BarBar = 24,
    PlusPlus = 25,
    MinusMinus = 26,
    Comma = 27,
    Arrow = 28,
    Call = 29,
    Subscript = 30,
    New = 31,
    Delete = 32,
    NewArray = 33,
    DeleteArray = 34,
    CoAwait = 35,
}

impl Operator {
    pub fn from_u32(value: u32) -> Option<Self> {
        Some(match value {
            0 => Self::Plus,
            1 => Self::Minus,
            2 => Self::Star,
            3 => Self::Slash,
            4 => Self::Percent,
            5 => Self::Caret,
            6 => Self::Ampersand,
            7 => Self::Bar,
            8 => Self::Tilde,
            9 => Self::Bang,
            10 => Self::Assign,
            11 => Self::Less,
            12 => Self::Greater,
            13 => Self::PlusAssign,
            14 => Self::MinusAssign,
            15 => Self::StarAssign,
            16 => Self::LeftShift,
            17 => Self::RightShift,
            18 => Self::EqualEqual,
            19 => Self::NotEqual,
            20 => Self::LessEqual,
            21 => Self::GreaterEqual,
            22 => Self::Spaceship,
            23 => Self::AmpAmp,
            24 => Self::BarBar,
            25 => Self::PlusPlus,
            26 => Self::MinusMinus,
            27 => Self::Comma,
            28 => Self::Arrow,
            29 => Self::Call,
            30 => Self::Subscript,
            31 => Self::New,
            32 => Self::Delete,
            33 => Self::NewArray,
            34 => Self::DeleteArray,
            35 => Self::CoAwait,
            _ => return None,
        })
    }
}

/// `operator+`, `operator()`, and friends.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct OperatorFunctionName {
    /// Rendered spelling, e.g. `"operator+"`.
    pub encoded: TextOffset,
    /// [`Operator`] vocabulary value.
    pub operator: u32,
}

impl OperatorFunctionName {
    /// Decode the operator. Panics on a value outside the vocabulary.
    #[inline]
    pub fn operator(&self) -> Operator {
        match Operator::from_u32(self.operator) {
            Some(op) => op,
            None => panic!("unknown operator value {}", self.operator),
        }
    }
}

/// `operator T`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ConversionFunctionName {
    pub target: TypeIndex,
    pub encoded: TextOffset,
}

/// `operator""_suffix`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct LiteralOperatorName {
    pub suffix: TextOffset,
}

/// A name that designates a template.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct TemplateName {
    pub name: NameIndex,
}

/// `primary<arguments...>`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SpecializationName {
    pub primary: NameIndex,
    /// Template-argument tuple.
    pub arguments: ExprIndex,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct SourceFileName {
    pub name: TextOffset,
    pub include_guard: TextOffset,
}

partition_entry!(OperatorFunctionName, NameIndex, "name.operator");
partition_entry!(ConversionFunctionName, NameIndex, "name.conversion");
partition_entry!(LiteralOperatorName, NameIndex, "name.literal");
partition_entry!(TemplateName, NameIndex, "name.template");
partition_entry!(SpecializationName, NameIndex, "name.specialization");
partition_entry!(SourceFileName, NameIndex, "name.source-file");
