// src/config/board.rs
//! Board-class detection for the analog input range

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::constants::boards;

/// Microcontroller family the firmware targets
///
/// The board class drives automatic detection of the ADC ceiling. `Custom`
/// boards have no automatic assignment and require a manual analog maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardClass {
    /// AVR-class microcontrollers (10-bit ADC)
    Avr,
    /// ESP32-class microcontrollers (12-bit ADC)
    Esp32,
    /// Anything else; the analog maximum must be set manually
    Custom,
}

impl BoardClass {
    /// Automatic ADC ceiling for this board class, when one is known
    pub fn analog_max(self) -> Option<u16> {
        match self {
            BoardClass::Avr => Some(boards::AVR_ANALOG_MAX),
            BoardClass::Esp32 => Some(boards::ESP32_ANALOG_MAX),
            BoardClass::Custom => None,
        }
    }
}

impl Default for BoardClass {
    fn default() -> Self {
        // Reference hardware for the project
        BoardClass::Esp32
    }
}

impl fmt::Display for BoardClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardClass::Avr => write!(f, "avr"),
            BoardClass::Esp32 => write!(f, "esp32"),
            BoardClass::Custom => write!(f, "custom"),
        }
    }
}
