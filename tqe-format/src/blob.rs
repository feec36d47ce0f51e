//! Borrowed byte span over the artifact plus offset arithmetic.
//!
//! Everything derived from a [`BlobView`] borrows the underlying bytes;
//! the embedder must keep the blob alive for as long as any view exists,
//! which the lifetime parameter enforces.
//!
//! Record casts are zero-copy: a typed view is the blob memory itself,
//! reinterpreted. That requires the producer's natural-alignment layout
//! discipline, anchored by an 8-aligned blob base (8 is the widest record
//! alignment in the format — the literal partitions).

use crate::index::ByteOffset;
use bytemuck::AnyBitPattern;

/// Widest alignment of any record type in the format.
pub const MAX_RECORD_ALIGN: usize = 8;

/// Immutable, byte-addressable view of the artifact bytes.
#[derive(Copy, Clone)]
pub struct BlobView<'a> {
    data: &'a [u8],
}

impl<'a> BlobView<'a> {
    /// Wrap a byte span.
    ///
    /// # Panics
    ///
    /// Panics if the span's base address is not 8-byte aligned. Embedders
    /// on allocations that cannot guarantee this must copy the artifact
    /// into an aligned buffer first.
    pub fn new(data: &'a [u8]) -> Self {
        assert!(
            data.as_ptr() as usize % MAX_RECORD_ALIGN == 0,
            "blob base must be {MAX_RECORD_ALIGN}-byte aligned"
        );
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Borrow `len` bytes starting at `offset`.
    ///
    /// Panics when the range exceeds the blob; a range fabricated from a
    /// validated artifact never does.
    pub fn bytes(&self, offset: usize, len: usize) -> &'a [u8] {
        match offset.checked_add(len).and_then(|end| self.data.get(offset..end)) {
            Some(bytes) => bytes,
            None => panic!(
                "byte range [{offset}, +{len}) exceeds blob of {} bytes",
                self.data.len()
            ),
        }
    }

    /// View the record of type `T` at `offset`.
    pub fn record_at<T: AnyBitPattern>(&self, offset: ByteOffset) -> &'a T {
        let bytes = self.bytes(offset.value(), std::mem::size_of::<T>());
        match bytemuck::try_from_bytes(bytes) {
            Ok(record) => record,
            Err(_) => panic!(
                "misaligned {} record at byte offset {}",
                std::any::type_name::<T>(),
                offset.value()
            ),
        }
    }

    /// View `count` contiguous records of type `T` starting at `offset`.
    pub fn slice_of<T: AnyBitPattern>(&self, offset: ByteOffset, count: usize) -> &'a [T] {
        let len = match count.checked_mul(std::mem::size_of::<T>()) {
            Some(len) => len,
            None => panic!("record count {count} overflows byte arithmetic"),
        };
        let bytes = self.bytes(offset.value(), len);
        match bytemuck::try_cast_slice(bytes) {
            Ok(slice) => slice,
            Err(_) => panic!(
                "misaligned {} partition at byte offset {}",
                std::any::type_name::<T>(),
                offset.value()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned(bytes: &[u8]) -> Vec<u64> {
        let mut buf = vec![0u64; bytes.len().div_ceil(8)];
        bytemuck::cast_slice_mut::<u64, u8>(&mut buf)[..bytes.len()].copy_from_slice(bytes);
        buf
    }

    #[test]
    fn test_record_and_slice_views() {
        let words = aligned(&[1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0]);
        let view = BlobView::new(&bytemuck::cast_slice(&words)[..12]);
        assert_eq!(*view.record_at::<u32>(ByteOffset(4)), 2);
        assert_eq!(view.slice_of::<u32>(ByteOffset(0), 3), &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "exceeds blob")]
    fn test_out_of_range_panics() {
        let words = aligned(&[0; 8]);
        let view = BlobView::new(bytemuck::cast_slice(&words));
        view.bytes(4, 8);
    }
}
