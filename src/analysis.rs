//! Tempo estimation for stem files.
//!
//! Decoding is delegated to rodio; the detector works on mono sample
//! chunks using energy-based onset detection and an interval histogram.

mod detector;
mod tempo;

pub use detector::TempoDetector;
pub use tempo::{FALLBACK_BPM, estimate_tempo};
