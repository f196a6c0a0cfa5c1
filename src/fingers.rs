// src/fingers.rs
//! Finger index mapping and the fixed flexion-reading container
//!
//! The five fingers map onto the contiguous indices 0..4 and every
//! flexion container is exactly five slots wide. Downstream code indexes
//! frames by [`Finger`], never by bare integers, so the bijection between
//! fingers and slots holds by construction.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::config::constants::{fingers::FINGER_COUNT, wire};

/// A tracked finger with its stable flexion-array index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

impl Finger {
    /// All fingers in index order
    pub const ALL: [Finger; FINGER_COUNT] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Stable index into a flexion container
    pub fn index(self) -> usize {
        self as usize
    }

    /// Finger for a given container index, if in range
    pub fn from_index(index: usize) -> Option<Finger> {
        Finger::ALL.get(index).copied()
    }

    /// Single-letter label used by the alpha wire encoding
    pub fn alpha_label(self) -> char {
        wire::ALPHA_LABELS[self.index()]
    }
}

/// Fixed five-slot container of per-finger flexion readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlexionFrame {
    readings: [u16; FINGER_COUNT],
}

impl FlexionFrame {
    /// Frame from raw readings in finger index order
    pub fn new(readings: [u16; FINGER_COUNT]) -> Self {
        Self { readings }
    }

    /// Readings in finger index order
    pub fn as_array(&self) -> &[u16; FINGER_COUNT] {
        &self.readings
    }

    /// Iterate readings paired with their finger, in index order
    pub fn iter(&self) -> impl Iterator<Item = (Finger, u16)> + '_ {
        Finger::ALL.iter().map(move |&finger| (finger, self[finger]))
    }
}

impl Index<Finger> for FlexionFrame {
    type Output = u16;

    fn index(&self, finger: Finger) -> &u16 {
        &self.readings[finger.index()]
    }
}

impl IndexMut<Finger> for FlexionFrame {
    fn index_mut(&mut self, finger: Finger) -> &mut u16 {
        &mut self.readings[finger.index()]
    }
}

impl From<[u16; FINGER_COUNT]> for FlexionFrame {
    fn from(readings: [u16; FINGER_COUNT]) -> Self {
        Self::new(readings)
    }
}
