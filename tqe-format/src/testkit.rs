//! In-memory artifact assembly for tests and tooling.
//!
//! [`ArtifactBuilder`] produces blobs that satisfy the open-time
//! invariants by construction: the header's size equation is exact, the
//! string table is NUL-padded to an 8-byte multiple (the padding counts
//! in `string_table_size`), and partitions are emitted widest-alignment
//! first so every record lands naturally aligned without slack bytes.
//!
//! Real artifacts come from the module compiler; this assembler only
//! exists so the reader can be driven against small, precise inputs.

use crate::header::{
    FileHeader, FormatVersion, PartitionSummary, SIGNATURE, STRUCTURE_LEN, SUMMARY_LEN,
};
use crate::index::{ByteOffset, Cardinality, EntrySize, ScopeIndex, TextOffset, UnitIndex};
use bytemuck::NoUninit;
use rustc_hash::FxHashMap;
use std::ops::Deref;

struct PendingPartition {
    name: TextOffset,
    bytes: Vec<u8>,
    entry_size: u32,
    cardinality: u32,
    align: usize,
}

/// Assembles a valid artifact blob region by region.
pub struct ArtifactBuilder {
    strings: Vec<u8>,
    interned: FxHashMap<String, TextOffset>,
    partitions: Vec<PendingPartition>,
    global_scope: ScopeIndex,
    unit: UnitIndex,
    src_path: TextOffset,
}

impl ArtifactBuilder {
    pub fn new() -> Self {
        Self {
            // Byte 0 is NUL so the null text offset reads as "".
            strings: vec![0],
            interned: FxHashMap::default(),
            partitions: Vec::new(),
            global_scope: ScopeIndex(0),
            unit: UnitIndex(0),
            src_path: TextOffset::null(),
        }
    }

    /// Intern a string, returning its table offset. The empty string is
    /// always the null offset.
    pub fn add_string(&mut self, text: &str) -> TextOffset {
        if text.is_empty() {
            return TextOffset::null();
        }
        if let Some(&offset) = self.interned.get(text) {
            return offset;
        }
        let offset = TextOffset(self.strings.len() as u32);
        self.strings.extend_from_slice(text.as_bytes());
        self.strings.push(0);
        self.interned.insert(text.to_string(), offset);
        offset
    }

    /// Append a partition of fixed-size records.
    pub fn add_partition<T: NoUninit>(&mut self, name: &str, entries: &[T]) -> &mut Self {
        let name = self.add_string(name);
        self.partitions.push(PendingPartition {
            name,
            bytes: bytemuck::cast_slice(entries).to_vec(),
            entry_size: std::mem::size_of::<T>() as u32,
            cardinality: entries.len() as u32,
            align: std::mem::align_of::<T>(),
        });
        self
    }

    pub fn global_scope(&mut self, scope: ScopeIndex) -> &mut Self {
        self.global_scope = scope;
        self
    }

    pub fn unit(&mut self, unit: UnitIndex) -> &mut Self {
        self.unit = unit;
        self
    }

    pub fn src_path(&mut self, path: &str) -> &mut Self {
        self.src_path = self.add_string(path);
        self
    }

    /// Assemble the blob: prefix, string table, partitions
    /// (widest-alignment first), table of contents.
    pub fn build(&self) -> ArtifactBytes {
        let mut table = self.strings.clone();
        while table.len() % 8 != 0 {
            table.push(0);
        }

        let mut order: Vec<&PendingPartition> = self.partitions.iter().collect();
        order.sort_by_key(|p| std::cmp::Reverse(p.align));

        let mut offset = STRUCTURE_LEN + table.len();
        let mut summaries = Vec::with_capacity(order.len());
        for p in &order {
            debug_assert!(offset % p.align == 0, "partition lands misaligned");
            summaries.push(PartitionSummary {
                name: p.name,
                offset: ByteOffset(offset as u32),
                cardinality: Cardinality(p.cardinality),
                entry_size: EntrySize(p.entry_size),
            });
            offset += p.bytes.len();
        }
        let toc_offset = offset;

        let header = FileHeader {
            checksum: [0; 32],
            version: FormatVersion { major: 1, minor: 0 },
            abi: 0,
            string_table_bytes: ByteOffset(STRUCTURE_LEN as u32),
            string_table_size: Cardinality(table.len() as u32),
            unit: self.unit,
            src_path: self.src_path,
            global_scope: self.global_scope,
            toc: ByteOffset(toc_offset as u32),
            partition_count: Cardinality(order.len() as u32),
        };

        let mut bytes = Vec::with_capacity(toc_offset + order.len() * SUMMARY_LEN);
        bytes.extend_from_slice(&SIGNATURE);
        bytes.extend_from_slice(bytemuck::bytes_of(&header));
        bytes.extend_from_slice(&table);
        for p in &order {
            bytes.extend_from_slice(&p.bytes);
        }
        for summary in &summaries {
            bytes.extend_from_slice(bytemuck::bytes_of(summary));
        }
        ArtifactBytes::from_bytes(bytes)
    }
}

impl Default for ArtifactBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned, 8-aligned artifact bytes.
///
/// The reader requires the blob base to satisfy the widest record
/// alignment; a plain `Vec<u8>` cannot guarantee that, so the buffer is
/// backed by `u64` words.
#[derive(Clone)]
pub struct ArtifactBytes {
    words: Vec<u64>,
    len: usize,
}

impl ArtifactBytes {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let mut words = vec![0u64; bytes.len().div_ceil(8)];
        bytemuck::cast_slice_mut::<u64, u8>(&mut words)[..bytes.len()].copy_from_slice(&bytes);
        Self {
            words,
            len: bytes.len(),
        }
    }

    /// Mutable access, for corrupting specific bytes in tests.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut::<u64, u8>(&mut self.words)[..self.len]
    }

    /// Drop trailing bytes without reallocating (keeps alignment).
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }
}

impl Deref for ArtifactBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &bytemuck::cast_slice::<u64, u8>(&self.words)[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::File;
    use crate::index::Sequence;

    #[test]
    fn test_builder_produces_openable_blob() {
        let mut builder = ArtifactBuilder::new();
        builder.add_partition::<Sequence>("scope.desc", &[Sequence::new(0, 0)]);
        let blob = builder.build();
        let file = File::open(&blob).expect("builder output must validate");
        assert_eq!(file.table_of_contents().len(), 1);
    }

    #[test]
    fn test_string_interning() {
        let mut builder = ArtifactBuilder::new();
        let a = builder.add_string("std");
        let b = builder.add_string("std");
        assert_eq!(a, b);
        assert_eq!(builder.add_string(""), TextOffset::null());
    }

    #[test]
    fn test_aligned_base() {
        let blob = ArtifactBuilder::new().build();
        assert_eq!(blob.as_ptr() as usize % 8, 0);
    }
}
