// In: src/error.rs

//! This module defines the single, unified error type for the entire tracepack
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.
//!
//! Every error is fatal to the compress/decompress call that raised it: there
//! are no partial results and no silent recovery. Position clamping is the one
//! deliberate lossy policy in the codec and is NOT represented here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TracepackError {
    /// A record field in the textual stream did not parse as its declared
    /// numeric type, or a position value was not a finite number.
    #[error("Malformed record field: {0}")]
    MalformedInput(String),

    /// The four channel sequences presented for reassembly were not all the
    /// same length. This indicates channel desynchronization, usually from a
    /// corrupted or truncated container.
    #[error("Channel length mismatch: {0}")]
    ChannelLengthMismatch(String),

    /// A segment length prefix implied reading past the end of the buffer, a
    /// varint escape sequence was truncated, or a run-length word buffer was
    /// structurally invalid.
    #[error("Corrupt container: {0}")]
    CorruptContainer(String),

    /// An integer could not be represented even by the wide escape path. This
    /// should never occur for the declared 16-/32-bit channel domains and
    /// indicates upstream data invalid for this format.
    #[error("Value out of range for encoding: {0}")]
    RangeOverflow(String),

    /// The outer general-purpose codec failed to compress or decompress.
    #[error("Outer codec operation failed: {0}")]
    CodecError(String),
}
