// src/encoding.rs
//! Wire text formats for flexion frames
//!
//! Two encodings exist. The legacy format joins the five decimal values
//! with `&`. The alpha format prefixes each value with its finger's letter
//! and concatenates the results without delimiters, e.g. `A420B533...`.
//! Both terminate the frame with a newline.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::config::constants::wire;
use crate::fingers::FlexionFrame;

/// Textual wire format used to serialize sensor values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingMode {
    /// Values separated by `&`
    Legacy,
    /// Labeled values like `A420B533...`
    Alpha,
}

impl Default for EncodingMode {
    fn default() -> Self {
        EncodingMode::Alpha
    }
}

impl EncodingMode {
    /// Encode a flexion frame in this mode
    pub fn encode(self, frame: &FlexionFrame) -> String {
        match self {
            EncodingMode::Legacy => encode_legacy(frame),
            EncodingMode::Alpha => encode_alpha(frame),
        }
    }
}

/// Encode a frame in the legacy delimiter-separated format
pub fn encode_legacy(frame: &FlexionFrame) -> String {
    let mut out = String::with_capacity(32);

    for (i, (_, value)) in frame.iter().enumerate() {
        if i > 0 {
            out.push(wire::LEGACY_SEPARATOR);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{value}");
    }

    out.push(wire::FRAME_TERMINATOR);
    out
}

/// Encode a frame in the alpha labeled format
pub fn encode_alpha(frame: &FlexionFrame) -> String {
    let mut out = String::with_capacity(32);

    for (finger, value) in frame.iter() {
        out.push(finger.alpha_label());
        let _ = write!(out, "{value}");
    }

    out.push(wire::FRAME_TERMINATOR);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_encoding_golden_string() {
        let frame = FlexionFrame::new([420, 533, 0, 1023, 7]);
        assert_eq!(encode_legacy(&frame), "420&533&0&1023&7\n");
    }

    #[test]
    fn test_alpha_encoding_golden_string() {
        let frame = FlexionFrame::new([420, 533, 0, 1023, 7]);
        assert_eq!(encode_alpha(&frame), "A420B533C0D1023E7\n");
    }

    #[test]
    fn test_mode_dispatch_matches_free_functions() {
        let frame = FlexionFrame::new([1, 2, 3, 4, 5]);

        assert_eq!(EncodingMode::Legacy.encode(&frame), encode_legacy(&frame));
        assert_eq!(EncodingMode::Alpha.encode(&frame), encode_alpha(&frame));
    }

    #[test]
    fn test_zero_frame_encodings() {
        let frame = FlexionFrame::default();

        assert_eq!(encode_legacy(&frame), "0&0&0&0&0\n");
        assert_eq!(encode_alpha(&frame), "A0B0C0D0E0\n");
    }
}
