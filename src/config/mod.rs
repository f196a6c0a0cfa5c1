// src/config/mod.rs
//! Configuration surface for the glove firmware core
//!
//! Every option the firmware exposes lives here: loop timing, calibration
//! duration, transport and encoding selection, analog range detection,
//! clamping, and the optional median filter. The surface is deserialized
//! once (or built in code), resolved into an immutable [`ResolvedConfig`],
//! and passed by reference to every consumer. No module mutates it after
//! resolution.

pub mod board;
pub mod constants;
pub mod loader;

pub use board::BoardClass;
pub use loader::ConfigLoader;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::encoding::EncodingMode;
use crate::error::ConfigError;
use crate::timing::CalibrationSchedule;
use constants::{filtering, timing};

/// Complete firmware configuration surface
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct FirmwareConfig {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub communication: CommunicationConfig,
    #[serde(default)]
    pub analog: AnalogConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Main-loop cadence and calibration duration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    /// Delay between main control-loop iterations, in milliseconds.
    /// 0 means run as fast as possible.
    #[serde(default = "defaults::loop_delay_ms")]
    pub loop_delay_ms: u32,

    /// Number of loop iterations to spend calibrating. -1 calibrates
    /// continuously for the lifetime of the process.
    #[serde(default = "defaults::calibration_loops")]
    pub calibration_loops: i32,
}

/// Transport and wire-format selection
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CommunicationConfig {
    #[serde(default = "defaults::comm_mode")]
    pub mode: CommMode,

    #[serde(default = "defaults::encoding")]
    pub encoding: EncodingMode,
}

/// Transport used to emit encoded sensor data
///
/// Selecting a mode performs no action by itself; it only decides which
/// transport driver the firmware binds at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommMode {
    /// USB serial
    Serial,
    /// Bluetooth serial
    #[serde(rename = "btserial")]
    BluetoothSerial,
}

/// Analog range detection, overrides, and input clamping
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AnalogConfig {
    /// Board class used for automatic analog-maximum detection.
    #[serde(default)]
    pub board: BoardClass,

    /// Manual analog-maximum override. When set, automatic board detection
    /// never clobbers it.
    #[serde(default)]
    pub analog_max: Option<u16>,

    /// Clamp mapped analog output values into `[0, analog_max]`.
    #[serde(default = "defaults::clamp_analog_map")]
    pub clamp_analog_map: bool,

    /// Discard raw flex readings outside `[clamp_min, clamp_max]` instead
    /// of using them.
    #[serde(default)]
    pub clamp_flexion: bool,

    /// Minimum accepted raw flex sensor value. Inert unless `clamp_flexion`
    /// is enabled.
    #[serde(default = "defaults::clamp_min")]
    pub clamp_min: u16,

    /// Maximum accepted raw flex sensor value. Defaults to the resolved
    /// analog maximum so the bound tracks board capability.
    #[serde(default)]
    pub clamp_max: Option<u16>,
}

/// Optional running-median smoothing of raw flex readings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    #[serde(default)]
    pub median_enabled: bool,

    /// Window size for the median filter. Inert unless `median_enabled`.
    #[serde(default = "defaults::median_samples")]
    pub median_samples: usize,
}

/// Default value providers using constants
mod defaults {
    use crate::config::constants::{clamping, filtering, timing};
    use crate::config::CommMode;
    use crate::encoding::EncodingMode;

    pub fn loop_delay_ms() -> u32 { timing::DEFAULT_LOOP_DELAY_MS }
    pub fn calibration_loops() -> i32 { timing::DEFAULT_CALIBRATION_LOOPS }

    pub fn comm_mode() -> CommMode { CommMode::Serial }
    pub fn encoding() -> EncodingMode { EncodingMode::Alpha }

    pub fn clamp_analog_map() -> bool { true }
    pub fn clamp_min() -> u16 { clamping::DEFAULT_CLAMP_MIN }

    pub fn median_samples() -> usize { filtering::DEFAULT_MEDIAN_SAMPLES }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            loop_delay_ms: defaults::loop_delay_ms(),
            calibration_loops: defaults::calibration_loops(),
        }
    }
}

impl Default for CommunicationConfig {
    fn default() -> Self {
        Self {
            mode: defaults::comm_mode(),
            encoding: defaults::encoding(),
        }
    }
}

impl Default for AnalogConfig {
    fn default() -> Self {
        Self {
            board: BoardClass::default(),
            analog_max: None,
            clamp_analog_map: defaults::clamp_analog_map(),
            clamp_flexion: false,
            clamp_min: defaults::clamp_min(),
            clamp_max: None,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            median_enabled: false,
            median_samples: defaults::median_samples(),
        }
    }
}

impl TimingConfig {
    /// Delay between main-loop iterations
    pub fn loop_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.loop_delay_ms))
    }

    /// Calibration schedule derived from the configured loop count
    pub fn calibration_schedule(&self) -> CalibrationSchedule {
        CalibrationSchedule::from_loops(self.calibration_loops)
    }
}

impl AnalogConfig {
    /// Resolve the analog range options into concrete values.
    ///
    /// The analog maximum comes from the manual override when set, then from
    /// automatic board detection. A board with neither is a fatal error;
    /// silently defaulting an unknown range would corrupt all downstream
    /// sensor scaling. The clamp maximum defaults to the resolved analog
    /// maximum unless explicitly overridden.
    pub fn resolve(&self) -> Result<ResolvedAnalog, ConfigError> {
        let analog_max = match self.analog_max {
            Some(value) => {
                debug!(analog_max = value, "analog maximum set manually");
                value
            }
            None => self
                .board
                .analog_max()
                .ok_or(ConfigError::UnresolvedAnalogMax { board: self.board })?,
        };

        let clamp_max = self.clamp_max.unwrap_or(analog_max);

        if self.clamp_flexion && self.clamp_min > clamp_max {
            return Err(ConfigError::Validation {
                issues: vec![format!(
                    "clamp_min ({}) must not exceed clamp_max ({})",
                    self.clamp_min, clamp_max
                )],
            });
        }

        Ok(ResolvedAnalog {
            analog_max,
            clamp_analog_map: self.clamp_analog_map,
            clamp_flexion: self.clamp_flexion,
            clamp_min: self.clamp_min,
            clamp_max,
        })
    }
}

/// Validated, immutable configuration handed to every consumer
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub timing: TimingConfig,
    pub communication: CommunicationConfig,
    pub analog: ResolvedAnalog,
    pub filter: FilterConfig,
}

/// Analog options with every value concretized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAnalog {
    /// Upper bound of the raw analog sample range
    pub analog_max: u16,
    /// Clamp mapped output values into `[0, analog_max]`
    pub clamp_analog_map: bool,
    /// Discard out-of-range raw readings
    pub clamp_flexion: bool,
    /// Lower acceptance bound for raw readings
    pub clamp_min: u16,
    /// Upper acceptance bound for raw readings
    pub clamp_max: u16,
}

impl FirmwareConfig {
    /// Validate configuration consistency
    pub fn validate_consistency(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.timing.loop_delay_ms > timing::MAX_LOOP_DELAY_MS {
            errors.push(format!(
                "Loop delay {} ms exceeds maximum of {} ms",
                self.timing.loop_delay_ms,
                timing::MAX_LOOP_DELAY_MS
            ));
        }

        if self.timing.calibration_loops < timing::CALIBRATION_CONTINUOUS {
            errors.push(format!(
                "Calibration loops must be -1 (continuous) or >= 0, got {}",
                self.timing.calibration_loops
            ));
        }

        if self.filter.median_enabled {
            if self.filter.median_samples < filtering::MIN_MEDIAN_SAMPLES {
                errors.push(format!(
                    "Median window must hold at least {} sample(s)",
                    filtering::MIN_MEDIAN_SAMPLES
                ));
            }
            if self.filter.median_samples > filtering::MAX_MEDIAN_SAMPLES {
                errors.push(format!(
                    "Median window of {} samples exceeds maximum of {}",
                    self.filter.median_samples,
                    filtering::MAX_MEDIAN_SAMPLES
                ));
            }
        }

        if self.analog.clamp_flexion {
            if let Some(clamp_max) = self.analog.clamp_max {
                if self.analog.clamp_min > clamp_max {
                    errors.push(format!(
                        "clamp_min ({}) must not exceed clamp_max ({})",
                        self.analog.clamp_min, clamp_max
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Resolve the surface into an immutable, validated configuration.
    ///
    /// Resolution is a pure function of the surface: resolving the same
    /// inputs twice yields identical outputs.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        self.validate_consistency()
            .map_err(|issues| ConfigError::Validation { issues })?;

        let analog = self.analog.resolve()?;

        let resolved = ResolvedConfig {
            timing: self.timing.clone(),
            communication: self.communication.clone(),
            analog,
            filter: self.filter.clone(),
        };

        debug!(
            board = %self.analog.board,
            analog_max = analog.analog_max,
            "firmware configuration resolved"
        );

        Ok(resolved)
    }
}

impl ResolvedConfig {
    /// Get configuration summary
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            loop_delay_ms: self.timing.loop_delay_ms,
            calibration: self.timing.calibration_schedule(),
            comm_mode: self.communication.mode,
            encoding: self.communication.encoding,
            analog_max: self.analog.analog_max,
            median_enabled: self.filter.median_enabled,
        }
    }
}

/// Configuration summary for display/logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSummary {
    pub loop_delay_ms: u32,
    pub calibration: CalibrationSchedule,
    pub comm_mode: CommMode,
    pub encoding: EncodingMode,
    pub analog_max: u16,
    pub median_enabled: bool,
}
