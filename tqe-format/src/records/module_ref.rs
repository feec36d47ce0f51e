//! Module references (`module.imported`, `module.exported`).

use crate::index::TextOffset;
use bytemuck::{Pod, Zeroable};

/// Reference to another module unit.
///
/// A null `owner` designates a global-module import named by `partition`
/// alone; otherwise the referenced unit is `owner`, or `owner:partition`
/// when `partition` is present.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct ModuleReference {
    pub owner: TextOffset,
    pub partition: TextOffset,
}
