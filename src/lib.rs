//! This file is the root of the `tracepack` Rust crate.
//!
//! tracepack recompresses a decoded replay movement stream (textual
//! `time_delta|x|y|input_state` records) into a compact channel-separated
//! binary layout that a general-purpose entropy coder compresses far better
//! than the verbose textual form. The crate root is strictly limited to:
//! 1.  Declaring the top-level modules of the library (`pipeline`, `kernels`,
//!     `frame`, `container`, ...) so the compiler knows they exist.
//! 2.  Re-exporting the small public API surface.
//! 3.  Providing the opt-in logging hook.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod config;
pub mod container;
pub mod error;
pub mod frame;
pub mod kernels;
pub mod outer;
pub mod pipeline;

mod utils;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use config::{CompressionProfile, TracepackConfig};
pub use error::TracepackError;
pub use pipeline::{compress, decompress, recompress, restore};

//==================================================================================
// 3. Logging
//==================================================================================
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Turns on verbose logging for the compression pipeline.
///
/// Idempotent; later calls are no-ops. Intended for debugging sessions and
/// test harnesses, never required for normal operation.
pub fn enable_verbose_logging() {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.filter_level(log::LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        let _ = builder.try_init();
    });
}
