// src/conditioning/mod.rs
//! Raw flexion conditioning: smoothing, range discard, and output mapping
//!
//! The conditioner turns raw ADC readings into scaled flexion values the
//! encoder can ship. Per finger, each sample passes through three stages,
//! every one toggled by the resolved configuration:
//!
//! 1. running median smoothing, when the filter is enabled;
//! 2. out-of-range discard, when flexion clamping is enabled: a reading
//!    outside `[clamp_min, clamp_max]` is rejected and the previous
//!    accepted value is held;
//! 3. mapping of the calibrated per-finger range onto `[0, analog_max]`,
//!    clamped into that interval when analog-map clamping is enabled.
//!
//! The median filter runs before the range check, so the discard bounds
//! apply to smoothed values.

pub mod median;

pub use median::MedianFilter;

use crate::config::constants::fingers::FINGER_COUNT;
use crate::config::{ResolvedAnalog, ResolvedConfig};
use crate::fingers::{Finger, FlexionFrame};

/// Observed raw range of one finger during calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FingerRange {
    min: u16,
    max: u16,
}

impl FingerRange {
    fn empty() -> Self {
        Self {
            min: u16::MAX,
            max: 0,
        }
    }

    fn observe(&mut self, raw: u16) {
        self.min = self.min.min(raw);
        self.max = self.max.max(raw);
    }

    /// A range is usable once it spans at least two distinct values.
    fn is_usable(&self) -> bool {
        self.min < self.max
    }
}

/// Per-finger conditioning pipeline driven by the resolved configuration
#[derive(Debug, Clone)]
pub struct FlexionConditioner {
    analog: ResolvedAnalog,
    filters: Option<Vec<MedianFilter>>,
    ranges: [FingerRange; FINGER_COUNT],
    last_accepted: [u16; FINGER_COUNT],
}

impl FlexionConditioner {
    /// Conditioner for a resolved configuration
    pub fn new(config: &ResolvedConfig) -> Self {
        let filters = config.filter.median_enabled.then(|| {
            (0..FINGER_COUNT)
                .map(|_| MedianFilter::new(config.filter.median_samples))
                .collect()
        });

        Self {
            analog: config.analog,
            filters,
            ranges: [FingerRange::empty(); FINGER_COUNT],
            last_accepted: [config.analog.clamp_min; FINGER_COUNT],
        }
    }

    /// Condition one raw reading.
    ///
    /// `calibrating` extends the finger's observed range with this sample;
    /// the loop controller derives it from the calibration schedule.
    pub fn process(&mut self, finger: Finger, raw: u16, calibrating: bool) -> u16 {
        let smoothed = match &mut self.filters {
            Some(filters) => filters[finger.index()].push(raw),
            None => raw,
        };

        let accepted = if self.analog.clamp_flexion
            && !(self.analog.clamp_min..=self.analog.clamp_max).contains(&smoothed)
        {
            self.last_accepted[finger.index()]
        } else {
            self.last_accepted[finger.index()] = smoothed;
            smoothed
        };

        if calibrating {
            self.ranges[finger.index()].observe(accepted);
        }

        self.map(finger, accepted)
    }

    /// Condition a whole frame of raw readings
    pub fn process_frame(&mut self, raw: &FlexionFrame, calibrating: bool) -> FlexionFrame {
        let mut out = FlexionFrame::default();
        for (finger, value) in raw.iter() {
            out[finger] = self.process(finger, value, calibrating);
        }
        out
    }

    /// Drop all filter state, calibration ranges, and held values
    pub fn reset(&mut self) {
        if let Some(filters) = &mut self.filters {
            for filter in filters {
                filter.reset();
            }
        }
        self.ranges = [FingerRange::empty(); FINGER_COUNT];
        self.last_accepted = [self.analog.clamp_min; FINGER_COUNT];
    }

    /// Map an accepted reading through the finger's calibrated range onto
    /// `[0, analog_max]`. Without usable calibration data the reading
    /// passes through unscaled.
    fn map(&self, finger: Finger, value: u16) -> u16 {
        let analog_max = i32::from(self.analog.analog_max);
        let range = self.ranges[finger.index()];

        let mapped = if range.is_usable() {
            let span = i32::from(range.max) - i32::from(range.min);
            (i32::from(value) - i32::from(range.min)) * analog_max / span
        } else {
            i32::from(value)
        };

        if self.analog.clamp_analog_map {
            mapped.clamp(0, analog_max) as u16
        } else {
            mapped.clamp(0, i32::from(u16::MAX)) as u16
        }
    }
}
