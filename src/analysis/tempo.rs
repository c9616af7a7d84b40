use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, Source};
use thiserror::Error;
use tracing::warn;

use super::detector::TempoDetector;

/// Tempo substituted whenever estimation fails.
pub const FALLBACK_BPM: f32 = 120.0;

/// Samples per detector chunk (~23 ms at 44.1 kHz).
const CHUNK: usize = 1024;

#[derive(Debug, Error)]
enum TempoError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("not enough onsets in {path:?} to estimate a tempo")]
    NoBeat { path: PathBuf },
}

/// Estimate the tempo of an audio file in BPM.
///
/// Never fails: any open/decode problem, and material too sparse to carry
/// a beat, is logged and replaced with [`FALLBACK_BPM`].
pub fn estimate_tempo(path: &Path) -> f32 {
    match try_estimate(path) {
        Ok(bpm) => bpm,
        Err(e) => {
            warn!("tempo estimation failed ({e}), assuming {FALLBACK_BPM} BPM");
            FALLBACK_BPM
        }
    }
}

fn try_estimate(path: &Path) -> Result<f32, TempoError> {
    let file = File::open(path).map_err(|source| TempoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| TempoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let sample_rate: u32 = decoder.sample_rate().into();
    let channels: u16 = decoder.channels().into();
    let channels = channels.max(1);

    let mut detector = TempoDetector::new(sample_rate);

    // Downmix interleaved frames to mono, feeding the detector in fixed
    // chunks at the file's native sample rate.
    let mut mono: Vec<f32> = Vec::with_capacity(CHUNK);
    let mut frame_acc = 0.0f32;
    let mut frame_fill = 0u16;
    for sample in decoder {
        frame_acc += sample;
        frame_fill += 1;
        if frame_fill == channels {
            mono.push(frame_acc / channels as f32);
            frame_acc = 0.0;
            frame_fill = 0;
            if mono.len() == CHUNK {
                detector.process(&mono);
                mono.clear();
            }
        }
    }
    if !mono.is_empty() {
        detector.process(&mono);
    }

    detector.estimate().ok_or_else(|| TempoError::NoBeat {
        path: path.to_path_buf(),
    })
}
