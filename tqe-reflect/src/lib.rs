//! # TQE reflection view
//!
//! Domain wrappers over [`tqe_format::File`]: modules, scopes, names,
//! declarations, templates, and charts as convenient values instead of
//! raw records and indexes.
//!
//! Every wrapper is a trivially copyable `(file, record-or-index)` pair.
//! Wrappers own no caches and no allocations; they are free to construct,
//! copy, and discard, and they borrow the file (and transitively the
//! artifact bytes) for their whole lifetime. Two wrappers compare equal
//! when they view the same element of the same file.

pub mod chart;
pub mod decl;
pub mod expr;
pub mod module;
pub mod name;
pub mod scope;

pub use chart::{Chart, MultilevelChart, UnilevelChart};
pub use decl::{Declaration, ScopeDeclaration, TemplateDeclaration};
pub use expr::TupleExpressionView;
pub use module::{Module, ModuleReference, UnitDescription};
pub use name::{Name, SpecializationName};
pub use scope::Scope;
