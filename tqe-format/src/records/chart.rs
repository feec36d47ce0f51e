//! Chart records (`chart.*` partitions): template parameter lists.

use crate::index::{ChartIndex, ExprIndex, Sequence};
use crate::partition::partition_entry;
use bytemuck::{Pod, Zeroable};

/// A single-level template parameter list.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct UnilevelChart {
    /// Run of parameters in `decl.parameter`.
    pub parameters: Sequence,
    /// Constraint attached to the parameter list; null when absent.
    pub requires_clause: ExprIndex,
}

/// A multi-level parameter list (template template parameters, nested
/// charts of member templates).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct MultilevelChart {
    /// Run of levels in `chart.unilevel`.
    pub levels: Sequence,
}

partition_entry!(UnilevelChart, ChartIndex, "chart.unilevel");
partition_entry!(MultilevelChart, ChartIndex, "chart.multilevel");
