//! This module concatenates independently encoded channel buffers into one
//! framed buffer and splits them back apart.
//!
//! Each segment is its element count as an unsigned 32-bit little-endian
//! integer followed by that many elements: 1 byte each for byte segments,
//! 2 bytes little-endian for word segments. The format carries no type tags;
//! it is a closed, fixed-schema container, and the reader must request the
//! segments in the same statically-known order and widths the writer used.

use crate::error::TracepackError;
#[cfg(target_endian = "little")]
use crate::utils::typed_slice_to_bytes;

//==================================================================================
// 1. Writing
//==================================================================================

/// Appends a length-prefixed byte segment to `buf`.
pub fn append_byte_segment(buf: &mut Vec<u8>, data: &[u8]) {
    buf.extend_from_slice(&(data.len() as u32).to_le_bytes());
    buf.extend_from_slice(data);
}

/// Appends a length-prefixed word segment to `buf`, words little-endian.
pub fn append_word_segment(buf: &mut Vec<u8>, words: &[u16]) {
    buf.extend_from_slice(&(words.len() as u32).to_le_bytes());
    #[cfg(target_endian = "little")]
    buf.extend_from_slice(&typed_slice_to_bytes(words));
    #[cfg(not(target_endian = "little"))]
    for word in words {
        buf.extend_from_slice(&word.to_le_bytes());
    }
}

//==================================================================================
// 2. Reading
//==================================================================================

/// Sequential reader over a framed buffer.
///
/// The caller drives it with the a-priori segment type order (byte/byte/word/
/// byte in the canonical pipeline) and finishes with [`SegmentReader::finish`]
/// to reject trailing garbage.
pub struct SegmentReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SegmentReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn read_count(&mut self) -> Result<usize, TracepackError> {
        let end = self.pos + 4;
        if end > self.buf.len() {
            return Err(TracepackError::CorruptContainer(format!(
                "segment length prefix at offset {} runs past buffer end ({} bytes)",
                self.pos,
                self.buf.len()
            )));
        }
        let count = u32::from_le_bytes(self.buf[self.pos..end].try_into().unwrap());
        self.pos = end;
        Ok(count as usize)
    }

    fn take(&mut self, byte_len: usize, count: usize) -> Result<&'a [u8], TracepackError> {
        let end = self.pos.checked_add(byte_len).filter(|&e| e <= self.buf.len());
        let end = end.ok_or_else(|| {
            TracepackError::CorruptContainer(format!(
                "segment of {} elements exceeds the {} bytes remaining",
                count,
                self.buf.len() - self.pos
            ))
        })?;
        let payload = &self.buf[self.pos..end];
        self.pos = end;
        Ok(payload)
    }

    /// Reads the next segment as raw bytes.
    pub fn read_byte_segment(&mut self) -> Result<Vec<u8>, TracepackError> {
        let count = self.read_count()?;
        Ok(self.take(count, count)?.to_vec())
    }

    /// Reads the next segment as little-endian 16-bit words.
    pub fn read_word_segment(&mut self) -> Result<Vec<u16>, TracepackError> {
        let count = self.read_count()?;
        let byte_len = count.checked_mul(2).ok_or_else(|| {
            TracepackError::CorruptContainer(format!(
                "word segment count {} overflows the buffer size",
                count
            ))
        })?;
        let payload = self.take(byte_len, count)?;
        Ok(payload
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect())
    }

    /// Asserts the entire buffer was consumed.
    pub fn finish(self) -> Result<(), TracepackError> {
        if self.pos != self.buf.len() {
            return Err(TracepackError::CorruptContainer(format!(
                "{} trailing bytes after the final segment",
                self.buf.len() - self.pos
            )));
        }
        Ok(())
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
