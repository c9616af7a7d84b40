//! Opening, decoding and `rodio` sink creation for stem files.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, Sink, Source};
use thiserror::Error;

/// Failure to open or decode a stem file.
#[derive(Debug, Error)]
pub enum DecodeError {
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
}

/// Open the file at `path` and wrap it in a decoder.
pub(super) fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>, DecodeError> {
    let file = File::open(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| DecodeError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Create a paused `Sink` for the file at `path`.
///
/// A speed multiplier other than 1.0 resamples the stream (pitch and speed
/// change together); 1.0 plays the stream unmodified.
pub(super) fn create_sink(
    stream: &OutputStream,
    path: &Path,
    speed: f32,
) -> Result<Sink, DecodeError> {
    let source = open_source(path)?;

    let sink = Sink::connect_new(stream.mixer());
    if (speed - 1.0).abs() > f32::EPSILON {
        sink.append(source.speed(speed));
    } else {
        sink.append(source);
    }
    sink.pause();
    Ok(sink)
}
