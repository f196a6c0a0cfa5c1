//! Glove-Core: configuration and signal-conditioning core for glove-tracking firmware
//!
//! This library carries the complete configuration surface of a five-finger
//! glove-tracking device and the input-side components that surface
//! parameterizes. It features:
//!
//! - A typed, immutable configuration surface with board-aware analog
//!   range resolution
//! - Stable finger index mapping over a fixed five-slot flexion container
//! - Raw input conditioning: running median smoothing, out-of-range
//!   discard, and calibrated range mapping
//! - Legacy and alpha wire encodings for flexion frames
//! - Calibration scheduling for the main control loop
//!
//! # Quick Start
//!
//! ```rust
//! use glove_core::conditioning::FlexionConditioner;
//! use glove_core::config::FirmwareConfig;
//! use glove_core::fingers::FlexionFrame;
//!
//! fn main() -> Result<(), glove_core::ConfigError> {
//!     // Resolve the surface once; consumers only ever see the result.
//!     let config = FirmwareConfig::default().resolve()?;
//!     let mut conditioner = FlexionConditioner::new(&config);
//!
//!     let raw = FlexionFrame::new([210, 480, 500, 520, 490]);
//!     let calibrating = config.timing.calibration_schedule().is_active(0);
//!     let conditioned = conditioner.process_frame(&raw, calibrating);
//!
//!     let line = config.communication.encoding.encode(&conditioned);
//!     assert!(line.ends_with('\n'));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod conditioning;
pub mod config;
pub mod encoding;
pub mod error;
pub mod fingers;
pub mod timing;

// Re-export commonly used types for convenience
pub use conditioning::{FlexionConditioner, MedianFilter};
pub use config::{
    BoardClass, CommMode, ConfigLoader, ConfigSummary, FirmwareConfig, ResolvedAnalog,
    ResolvedConfig,
};
pub use encoding::EncodingMode;
pub use error::ConfigError;
pub use fingers::{Finger, FlexionFrame};
pub use timing::CalibrationSchedule;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert!(!NAME.is_empty());
    }
}
