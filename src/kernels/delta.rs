//! This module contains the pure, stateless kernels for delta encoding and
//! decoding of position channels.
//!
//! A sequence is coded as its first value followed by successive differences,
//! then fed through the 16-bit varint packer. Consecutive position samples in
//! a replay move smoothly frame to frame, so most differences fit a single
//! byte. The diff/cumsum engines are implemented **in-place** and generically
//! over primitive integers.

use num_traits::{PrimInt, WrappingAdd, WrappingSub};

use crate::error::TracepackError;
use crate::kernels::varint;

//==================================================================================
// 1. Generic Core Logic (The "Engine" - In-Place & Performant)
//==================================================================================

/// Replaces each element with its difference from the predecessor, **in-place**.
/// The first element is left untouched.
fn diff_slice_inplace<T>(data: &mut [T])
where
    T: PrimInt + WrappingSub,
{
    // Iterate backwards to use original values for calculation
    for i in (1..data.len()).rev() {
        data[i] = data[i].wrapping_sub(&data[i - 1]);
    }
}

/// Reconstructs the original values by running (prefix) sum, **in-place**.
fn cumsum_slice_inplace<T>(data: &mut [T])
where
    T: PrimInt + WrappingAdd,
{
    // Iterate forwards to use the newly-decoded values for subsequent sums
    for i in 1..data.len() {
        data[i] = data[i].wrapping_add(&data[i - 1]);
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Delta-codes a position channel and varint-packs the coded sequence,
/// appending to `out`.
///
/// An empty channel encodes to an empty byte sequence.
pub fn encode(values: &[i16], out: &mut Vec<u8>) -> Result<(), TracepackError> {
    let mut coded = values.to_vec();
    diff_slice_inplace(&mut coded);
    varint::encode_words(&coded, out);
    Ok(())
}

/// Exact inverse of [`encode`]: varint-unpacks the coded sequence, then
/// prefix-sums it back into absolute positions.
pub fn decode(bytes: &[u8]) -> Result<Vec<i16>, TracepackError> {
    let mut values = varint::decode_words(bytes)?;
    cumsum_slice_inplace(&mut values);
    Ok(values)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
