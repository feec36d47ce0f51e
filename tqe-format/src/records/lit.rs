//! Materialized literal records (`lit.*` partitions).
//!
//! Values that fit 24 bits never reach these partitions; they travel as
//! `LitSort::Immediate` payloads inside the index itself.

use crate::index::LitIndex;
use crate::partition::partition_entry;
use bytemuck::{Pod, Zeroable};

/// Integer constant too wide for an immediate.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct IntegerLiteral {
    pub value: u64,
}

/// Floating-point constant.
#[derive(Copy, Clone, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct FloatingPointLiteral {
    pub value: f64,
}

partition_entry!(IntegerLiteral, LitIndex, "lit.integer");
partition_entry!(FloatingPointLiteral, LitIndex, "lit.float");
