//! Environment seam for resolving inter-module references.

use crate::file::File;

/// Locates sibling module artifacts by name.
///
/// Implementations typically own a set of loaded [`File`]s keyed by unit
/// name. The reader consumes this interface only through
/// [`File::get_imported_module`], which assembles the lookup key as
/// `partition` alone for global-module imports, `owner` for a whole-unit
/// import, or `owner:partition` for a partition import.
pub trait Environment {
    fn module_by_name(&self, name: &str) -> Option<&File<'_>>;
}
