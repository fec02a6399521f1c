//! This module adapts the external general-purpose entropy coder that wraps
//! the framed channel buffer.
//!
//! The pipeline treats the codec as a black box satisfying
//! `decompress(compress(b)) == b` for all byte buffers `b`; nothing about the
//! channel transform depends on which codec is plugged in. The shipped
//! implementation is a safe wrapper around the `zstd` crate.

use crate::error::TracepackError;

/// Collaborator contract for the outer codec: deterministic and lossless
/// over arbitrary byte buffers.
pub trait OuterCodec {
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, TracepackError>;
    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, TracepackError>;
}

/// Zstandard implementation of the outer codec.
pub struct ZstdCodec {
    level: i32,
}

impl ZstdCodec {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Default for ZstdCodec {
    fn default() -> Self {
        Self::new(crate::config::CompressionProfile::default().codec_level())
    }
}

impl OuterCodec for ZstdCodec {
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, TracepackError> {
        zstd::stream::encode_all(bytes, self.level)
            .map_err(|e| TracepackError::CodecError(e.to_string()))
    }

    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, TracepackError> {
        zstd::stream::decode_all(bytes).map_err(|e| TracepackError::CodecError(e.to_string()))
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zstd_roundtrip() {
        let original = b"hello world, this is a test of the outer codec. hello world.".to_vec();
        let codec = ZstdCodec::default();

        let compressed = codec.compress(&original).unwrap();
        let decompressed = codec.decompress(&compressed).unwrap();
        assert_eq!(original, decompressed);
    }

    #[test]
    fn test_empty_buffer_roundtrip() {
        let codec = ZstdCodec::new(1);
        let compressed = codec.compress(&[]).unwrap();
        assert_eq!(codec.decompress(&compressed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_invalid_stream_is_codec_error() {
        let codec = ZstdCodec::default();
        let result = codec.decompress(&[1, 2, 3, 4, 5]);
        assert!(matches!(result, Err(TracepackError::CodecError(_))));
    }
}
