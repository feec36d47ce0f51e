//! Error types for artifact validation.
//!
//! Every variant here is surfaced by [`File::open`](crate::File::open);
//! after a successful open the reader operates under a closed-world
//! assumption and surfaces format-contract violations as panics instead
//! (see the crate-level docs).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    /// First four bytes are not the canonical `54 51 45 1A` signature.
    #[error("corrupted file signature")]
    BadSignature,

    /// The sum of region sizes disagrees with the actual blob length,
    /// indicating truncation or tampering.
    #[error("corrupted file: computed size {computed} bytes, blob holds {actual}")]
    SizeMismatch { computed: u64, actual: u64 },

    /// A structural region (table of contents, string table) extends past
    /// the end of the blob.
    #[error("corrupted file: {region} extends to byte {needed}, blob holds {actual}")]
    Truncated {
        region: &'static str,
        needed: u64,
        actual: u64,
    },

    /// A structural region sits at an offset that violates its natural
    /// alignment.
    #[error("corrupted file: {region} at byte offset {offset} is not {align}-byte aligned")]
    Misaligned {
        region: &'static str,
        offset: usize,
        align: usize,
    },

    /// A partition name in the table of contents does not resolve to a
    /// NUL-terminated UTF-8 string inside the string table.
    #[error("malformed partition name at text offset {offset}")]
    MalformedName { offset: u32 },

    /// Two table-of-contents entries carry the same name.
    #[error("duplicate partition name `{0}`")]
    DuplicatePartition(String),
}

pub type Result<T> = std::result::Result<T, FileError>;
