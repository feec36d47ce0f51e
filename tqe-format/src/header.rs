//! Fixed structural layout: signature, file header, partition descriptors.
//!
//! All fixed-width fields are little-endian and naturally aligned.
//!
//! Layout:
//! ```text
//! [Signature 4B][FileHeader 68B][body: string table + partitions, any order][TOC]
//! ```
//!
//! The table of contents lives at `header.toc` and holds
//! `header.partition_count` descriptors. The size invariant admits no
//! slack bytes: signature + header + string table + TOC + partition
//! payloads account for every byte of the blob.

use crate::index::{ByteOffset, Cardinality, EntrySize, ScopeIndex, TextOffset, UnitIndex};
use bytemuck::{Pod, Zeroable};

/// Canonical four-byte signature at offset 0: `"TQE\x1A"`.
pub const SIGNATURE: [u8; 4] = [0x54, 0x51, 0x45, 0x1A];

/// Signature size in bytes.
pub const SIGNATURE_LEN: usize = 4;

/// Fixed header size in bytes.
pub const HEADER_LEN: usize = std::mem::size_of::<FileHeader>();

/// Size of the fixed prefix (signature + header).
pub const STRUCTURE_LEN: usize = SIGNATURE_LEN + HEADER_LEN;

/// Size of one table-of-contents descriptor.
pub const SUMMARY_LEN: usize = std::mem::size_of::<PartitionSummary>();

/// Producer format version.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct FormatVersion {
    pub major: u16,
    pub minor: u16,
}

/// Fixed-layout record immediately following the signature.
///
/// `checksum`, `version`, `abi`, and `src_path` are producer metadata the
/// reader carries but does not validate; open-time validation covers only
/// the signature and the size invariant.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct FileHeader {
    /// Content hash stamped by the producer.
    pub checksum: [u8; 32],
    pub version: FormatVersion,
    pub abi: u32,
    /// Byte offset of the string table.
    pub string_table_bytes: ByteOffset,
    /// String-table size in bytes (raw-count encoded).
    pub string_table_size: Cardinality,
    /// The unit this artifact represents.
    pub unit: UnitIndex,
    /// Path of the translated source, in the string table.
    pub src_path: TextOffset,
    /// Scope descriptor of the global namespace.
    pub global_scope: ScopeIndex,
    /// Byte offset of the table of contents.
    pub toc: ByteOffset,
    /// Number of table-of-contents descriptors.
    pub partition_count: Cardinality,
}

/// Table-of-contents descriptor for one partition.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct PartitionSummary {
    /// Partition name, in the string table. Unique within a file.
    pub name: TextOffset,
    /// Byte offset of the partition data.
    pub offset: ByteOffset,
    /// Number of fixed-size entries.
    pub cardinality: Cardinality,
    /// Bytes per entry.
    pub entry_size: EntrySize,
}

impl PartitionSummary {
    /// Total payload size of this partition in bytes.
    #[inline]
    pub fn size_bytes(&self) -> u64 {
        self.cardinality.0 as u64 * self.entry_size.0 as u64
    }
}

const _: () = assert!(HEADER_LEN == 68, "FileHeader layout drifted");
const _: () = assert!(SUMMARY_LEN == 16, "PartitionSummary layout drifted");
const _: () = assert!(STRUCTURE_LEN % 8 == 0, "structure prefix must keep 8-byte alignment");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_sizes() {
        assert_eq!(std::mem::size_of::<FileHeader>(), 68);
        assert_eq!(std::mem::size_of::<PartitionSummary>(), 16);
        assert_eq!(STRUCTURE_LEN, 72);
    }

    #[test]
    fn test_summary_size_bytes() {
        let summary = PartitionSummary {
            name: TextOffset(1),
            offset: ByteOffset(72),
            cardinality: Cardinality(10),
            entry_size: EntrySize(16),
        };
        assert_eq!(summary.size_bytes(), 160);
    }
}
