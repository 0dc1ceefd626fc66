//! Pixel-aligned buffer partitioning.
//!
//! A buffer of `len` bytes is cut into `parts` contiguous ranges. Every
//! range except the last holds `pixels / parts` whole RGBA8 pixels; the last
//! one takes the remaining pixels plus any trailing bytes that do not form a
//! whole pixel. The ranges tile `0..len` with no gaps or overlaps.

use std::ops::Range;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Splits `0..len` into `parts` pixel-aligned ranges. `parts == 0` is
/// treated as 1.
pub fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let per_part = (len / BYTES_PER_PIXEL / parts) * BYTES_PER_PIXEL;

    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;
    for _ in 0..parts - 1 {
        ranges.push(start..start + per_part);
        start += per_part;
    }
    ranges.push(start..len);
    ranges
}

/// Splits `buf` into disjoint mutable chunks following `partition`.
pub fn split_chunks(buf: &mut [u8], parts: usize) -> Vec<&mut [u8]> {
    let ranges = partition(buf.len(), parts);
    let mut chunks = Vec::with_capacity(ranges.len());
    let mut rest = buf;
    for range in ranges {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        chunks.push(head);
        rest = tail;
    }
    chunks
}
