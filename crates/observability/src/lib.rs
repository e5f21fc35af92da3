//! Tracing / logging setup shared by the binaries.

pub mod subscriber;

pub use subscriber::{LogFormat, ParseLogFormatError};

/// Initialize process-wide tracing.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init(format: LogFormat) {
    subscriber::init(format);
}
