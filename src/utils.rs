//! This module provides shared, low-level utility functions used throughout
//! the tracepack core.
//!
//! Its primary responsibility is encapsulating the byte/typed-slice
//! conversions behind safe, narrowly-scoped helpers built on `bytemuck`.

/// Converts a slice of primitive values into a `Vec<u8>`.
///
/// This performs a memory copy to create a new, owned byte vector. The byte
/// order is the target's native order; callers that require little-endian
/// output must gate on `target_endian` themselves.
pub fn typed_slice_to_bytes<T: bytemuck::Pod>(data: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(data).to_vec()
}
