//! The top-level orchestrator for the compress and decompress pipelines.
//!
//! Compress direction: the textual record stream is split into four channel
//! sequences, each channel is coded by the kernel suited to its distribution
//! (delta-varint for positions, sparse run-length for input state, varint for
//! time deltas), the coded buffers are framed in fixed order (x, y, state,
//! time) and the framed buffer is handed to the outer codec. Decompress
//! reverses every stage. Both directions are pure, synchronous and stateless
//! across calls; concurrent callers on disjoint inputs need no
//! synchronization.

use crate::config::TracepackConfig;
use crate::container::{self, SegmentReader};
use crate::error::TracepackError;
use crate::frame::{self, Channels};
use crate::kernels::{delta, runlen, varint};
use crate::outer::{OuterCodec, ZstdCodec};

//==================================================================================
// 1. Core Transform (codec-parameterized)
//==================================================================================

/// Compresses a decoded textual record stream through the channel transform
/// and the supplied outer codec.
pub fn compress_with(
    text: &str,
    codec: &dyn OuterCodec,
) -> Result<Vec<u8>, TracepackError> {
    let channels = frame::split(text)?;

    let mut x_buf = Vec::new();
    delta::encode(&channels.xs, &mut x_buf)?;
    let mut y_buf = Vec::new();
    delta::encode(&channels.ys, &mut y_buf)?;
    let key_words = runlen::encode(&channels.keys)?;
    let mut time_buf = Vec::new();
    varint::encode_dwords(&channels.time_deltas, &mut time_buf);

    let mut framed = Vec::with_capacity(
        16 + x_buf.len() + y_buf.len() + key_words.len() * 2 + time_buf.len(),
    );
    container::append_byte_segment(&mut framed, &x_buf);
    container::append_byte_segment(&mut framed, &y_buf);
    container::append_word_segment(&mut framed, &key_words);
    container::append_byte_segment(&mut framed, &time_buf);

    log::debug!(
        "framed {} records into {} bytes (x={} y={} state={} time={})",
        channels.len(),
        framed.len(),
        x_buf.len(),
        y_buf.len(),
        key_words.len() * 2,
        time_buf.len()
    );

    codec.compress(&framed)
}

/// Exact inverse of [`compress_with`]: unwraps the outer codec, splits the
/// container back into its four segments, decodes each channel and
/// reassembles the textual record stream.
pub fn decompress_with(
    bytes: &[u8],
    codec: &dyn OuterCodec,
) -> Result<String, TracepackError> {
    let framed = codec.decompress(bytes)?;

    let mut reader = SegmentReader::new(&framed);
    let xs = delta::decode(&reader.read_byte_segment()?)?;
    let ys = delta::decode(&reader.read_byte_segment()?)?;
    let keys = runlen::decode(&reader.read_word_segment()?)?;
    let time_deltas = varint::decode_dwords(&reader.read_byte_segment()?)?;
    reader.finish()?;

    let channels = Channels {
        time_deltas,
        xs,
        ys,
        keys,
    };
    // join re-checks the equal-length invariant and fails on desync.
    frame::join(&channels)
}

//==================================================================================
// 2. Public Convenience API
//==================================================================================

/// Compresses a decoded textual record stream with the configured profile.
pub fn compress(text: &str, config: &TracepackConfig) -> Result<Vec<u8>, TracepackError> {
    let codec = ZstdCodec::new(config.profile.codec_level());
    compress_with(text, &codec)
}

/// Decompresses a buffer produced by [`compress`] back into the textual
/// record stream. No configuration is needed; buffers from any profile
/// decode identically.
pub fn decompress(bytes: &[u8]) -> Result<String, TracepackError> {
    decompress_with(bytes, &ZstdCodec::default())
}

/// Recompresses an outer-coded replay record stream (as replay containers
/// store it) into the compact channel-separated representation.
pub fn recompress(stream: &[u8], config: &TracepackConfig) -> Result<Vec<u8>, TracepackError> {
    let codec = ZstdCodec::new(config.profile.codec_level());
    let text_bytes = codec.decompress(stream)?;
    let text = String::from_utf8(text_bytes).map_err(|e| {
        TracepackError::MalformedInput(format!("record stream is not valid UTF-8: {}", e))
    })?;
    compress_with(&text, &codec)
}

/// Inverse of [`recompress`]: restores an outer-coded record stream
/// equivalent to the one the replay container originally held.
pub fn restore(bytes: &[u8], config: &TracepackConfig) -> Result<Vec<u8>, TracepackError> {
    let codec = ZstdCodec::new(config.profile.codec_level());
    let text = decompress_with(bytes, &codec)?;
    codec.compress(text.as_bytes())
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::POSITION_SCALE;

    fn roundtrip(text: &str) -> String {
        let config = TracepackConfig::default();
        let compressed = compress(text, &config).unwrap();
        decompress(&compressed).unwrap()
    }

    #[test]
    fn test_end_to_end_quantized_roundtrip() {
        let original = "5|100.0|200.0|1,10|100.0625|200.0|1,";
        let restored = roundtrip(original);

        // The float text may be formatted differently, but the quantized
        // channels must match exactly.
        let before = frame::split(original).unwrap();
        let after = frame::split(&restored).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_end_to_end_preserves_exact_integer_channels() {
        let original = "-1|0.0|0.0|0,12345678|10.5|-3.25|255,";
        let after = frame::split(&roundtrip(original)).unwrap();
        assert_eq!(after.time_deltas, vec![-1, 12345678]);
        assert_eq!(after.keys, vec![0, 255]);
    }

    #[test]
    fn test_offscreen_coordinate_decodes_to_clamp_boundary() {
        let restored = roundtrip("0|3000.0|0.0|0,");
        let channels = frame::split(&restored).unwrap();
        assert_eq!(channels.xs, vec![i16::MAX]);

        // The textual value is the saturated boundary, not the original.
        let x_field: f64 = restored.split('|').nth(1).unwrap().parse().unwrap();
        assert_eq!(x_field, f64::from(i16::MAX) / POSITION_SCALE);
    }

    #[test]
    fn test_empty_stream_roundtrip() {
        assert_eq!(roundtrip(""), "");
    }

    #[test]
    fn test_longer_stream_roundtrip() {
        // A synthetic but shape-realistic stream: smooth cursor motion,
        // sparse key presses, near-constant frame deltas.
        let mut text = String::new();
        for i in 0..2000i32 {
            let x = 256.0 + f64::from(i % 400) * 0.5;
            let y = 192.0 - f64::from(i % 300) * 0.25;
            let keys = if (600..640).contains(&(i % 1000)) { 5 } else { 0 };
            text.push_str(&format!("16|{}|{}|{},", x, y, keys));
        }
        let before = frame::split(&text).unwrap();
        let after = frame::split(&roundtrip(&text)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_profiles_interoperate() {
        let text = "1|1.0|2.0|0,2|3.0|4.0|1,";
        for profile in [
            crate::CompressionProfile::Fast,
            crate::CompressionProfile::Balanced,
            crate::CompressionProfile::HighCompression,
        ] {
            let config = TracepackConfig { profile };
            let compressed = compress(text, &config).unwrap();
            // Decompression never depends on the profile used to compress.
            let restored = decompress(&compressed).unwrap();
            assert_eq!(
                frame::split(text).unwrap(),
                frame::split(&restored).unwrap()
            );
        }
    }

    #[test]
    fn test_recompress_restore_roundtrip() {
        let config = TracepackConfig::default();
        let codec = ZstdCodec::new(config.profile.codec_level());
        let text = "5|100.0|200.0|1,10|100.0625|200.0|1,";
        let replay_stream = codec.compress(text.as_bytes()).unwrap();

        let packed = recompress(&replay_stream, &config).unwrap();
        let restored_stream = restore(&packed, &config).unwrap();

        let restored_text =
            String::from_utf8(codec.decompress(&restored_stream).unwrap()).unwrap();
        assert_eq!(
            frame::split(text).unwrap(),
            frame::split(&restored_text).unwrap()
        );
    }

    #[test]
    fn test_corrupt_buffer_is_rejected_not_garbled() {
        let config = TracepackConfig::default();
        let compressed = compress("1|1.0|2.0|0,", &config).unwrap();

        // Truncating the outer stream must surface as an error.
        let result = decompress(&compressed[..compressed.len() / 2]);
        assert!(result.is_err());
    }
}
