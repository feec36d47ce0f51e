//! # TQE format
//!
//! Random, zero-copy read access to TQE module interface artifacts — the
//! compiled binary form of a translated C++ module interface, consumed by
//! reflection and metaprogramming tooling that walks the module's
//! semantic graph without re-parsing source.
//!
//! ## Layout
//!
//! ```text
//! [Signature 4B][Header 68B][body: string table + partitions, any order][TOC]
//! ```
//!
//! A partition is a contiguous array of fixed-size records described by a
//! table-of-contents descriptor `(name, offset, cardinality, entry_size)`.
//! Records reference each other through typed indexes; variable-length
//! payloads travel as `(start, cardinality)` sequences into index heaps.
//!
//! ## Reading model
//!
//! [`File::open`] validates the signature and the size invariant, builds
//! the TOC name map, and nothing else. Partition accessors memoize their
//! resolution in a fixed slot table; trait indexes (declaration
//! attributes, deprecation texts, friendships, template specializations)
//! are built by a single scan on first query. Both publish through
//! `OnceLock`, so a file can be shared across threads and warmed from any
//! of them.
//!
//! Everything handed out by a [`File`] borrows the blob: partitions,
//! records, sequences, and strings are views, never copies. The embedder
//! keeps the blob alive and 8-byte aligned; both obligations are in the
//! type signature and the [`File::open`] docs.
//!
//! After open the reader assumes a well-formed artifact (the producer's
//! contract). Out-of-range indexes, missing required partitions, or
//! entry-size disagreements panic with a descriptive message; they
//! indicate a corrupt or mis-produced artifact, not a recoverable
//! condition.

pub mod blob;
pub mod env;
pub mod error;
pub mod file;
pub mod header;
pub mod index;
pub mod partition;
pub mod records;
pub mod testkit;

pub use blob::BlobView;
pub use env::Environment;
pub use error::{FileError, Result};
pub use file::File;
pub use header::{FileHeader, FormatVersion, PartitionSummary, SIGNATURE};
pub use index::{
    AttrIndex, AttrSort, ByteOffset, Cardinality, ChartIndex, ChartSort, DeclIndex, DeclSort,
    EntrySize, ExprIndex, ExprSort, Index, LitIndex, LitSort, NameIndex, NameSort, ScopeIndex,
    Sequence, SourceLocation, StringIndex, SyntaxIndex, SyntaxSort, TextOffset, TypeIndex,
    TypeSort, UnitIndex, UnitSort,
};
pub use partition::{Partition, PartitionEntry, PartitionIndex};
