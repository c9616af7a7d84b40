use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;
use tracing::info;
use walkdir::WalkDir;

use crate::analysis::estimate_tempo;
use crate::config::LibrarySettings;

use super::model::{StemPair, StemRole};
use super::pairing::match_files;

/// Filesystem failures while listing the stem directory. These are the one
/// fatal error category: callers propagate them instead of recovering.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read stem directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Lowercased extensions without leading dots, normalized once per scan.
fn normalized_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn is_audio_file(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// List the audio files directly inside `dir` (non-recursive), pair them up
/// and annotate every present side with its estimated tempo.
///
/// Tempo estimation runs sequentially per side and never fails; filesystem
/// errors (missing directory, unreadable entries) propagate to the caller.
/// Zero matching files is not an error and yields an empty map.
pub fn categorize(
    dir: &Path,
    settings: &LibrarySettings,
) -> Result<BTreeMap<String, StemPair>, LibraryError> {
    let exts = normalized_extensions(settings);
    let mut file_names: Vec<String> = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_audio_file(path, &exts) {
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                file_names.push(name.to_string());
            }
        }
    }
    // Directory listing order is platform-dependent; sort so last-write-wins
    // on duplicate markers is reproducible.
    file_names.sort();

    let mut pairs = match_files(&file_names);

    for (title, pair) in pairs.iter_mut() {
        for role in [StemRole::Vocals, StemRole::NoVocals] {
            if let Some(file_name) = pair.stem(role) {
                let bpm = estimate_tempo(&dir.join(file_name));
                info!("{} for {title}: {bpm:.1} BPM", role.label());
                pair.set_bpm(role, bpm);
            }
        }
    }

    Ok(pairs)
}
