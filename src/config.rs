// In: src/config.rs

//! The single source of truth for all tracepack compression configuration.
//!
//! This module defines the unified `TracepackConfig` struct, which is designed
//! to be created once at the application boundary and passed down through the
//! pipeline. Only the outer entropy coder is tunable; the channel transform
//! itself is a fixed format with no knobs, by contract.

use serde::{Deserialize, Serialize};

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// Defines the trade-off between compression speed and final buffer size.
///
/// The profile only influences the outer general-purpose codec. The channel
/// pre-transform is bit-for-bit identical across all profiles, so buffers
/// produced under any profile decompress under any other.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompressionProfile {
    /// Prioritizes speed over size.
    Fast,

    /// A balance between speed and size. This is the recommended default.
    #[default]
    Balanced,

    /// Prioritizes the smallest possible buffer at the cost of CPU time.
    HighCompression,
}

impl CompressionProfile {
    /// Maps the profile to a concrete level for the outer codec.
    pub fn codec_level(self) -> i32 {
        match self {
            CompressionProfile::Fast => 1,
            CompressionProfile::Balanced => 3,
            CompressionProfile::HighCompression => 19,
        }
    }
}

/// The top-level configuration object for a compress/decompress invocation.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TracepackConfig {
    #[serde(default)]
    pub profile: CompressionProfile,
}

//==================================================================================
// II. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_balanced() {
        let config = TracepackConfig::default();
        assert_eq!(config.profile, CompressionProfile::Balanced);
        assert_eq!(config.profile.codec_level(), 3);
    }

    #[test]
    fn test_profile_levels_are_ordered() {
        assert!(
            CompressionProfile::Fast.codec_level()
                < CompressionProfile::HighCompression.codec_level()
        );
    }
}
