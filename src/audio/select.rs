use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use rodio::Source;

use crate::analysis::FALLBACK_BPM;
use crate::library::{StemPair, StemRole};

use super::sink::{DecodeError, open_source};
use super::types::Deck;

/// Result of drawing two decks from the available pairs.
///
/// Explicit variants instead of silent no-ops, so callers can tell
/// "nothing found" from "something matched but was unusable".
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Two decks, ids 1 and 2: vocals from one pair, instrumental from
    /// another.
    Loaded(Vec<Deck>),
    /// Fewer than two pairs were available; nothing was loaded.
    NotEnoughPairs { found: usize },
    /// A drawn pair is missing the stem its slot needs.
    MissingStem { title: String, role: StemRole },
}

/// Shuffle the pairs uniformly and take the first pair's vocals and the
/// second pair's instrumental as the two decks to mix.
///
/// Both stems are decoded here, at load time. An unreadable or
/// undecodable stem file is the fatal case and propagates as `Err`;
/// everything else (too few pairs, a drawn pair missing its side) comes
/// back as a `LoadOutcome` variant.
///
/// The rng is a parameter so tests can drive selection with a seeded one.
pub fn draw_decks<R: Rng + ?Sized>(
    pairs: &BTreeMap<String, StemPair>,
    dir: &Path,
    rng: &mut R,
) -> Result<LoadOutcome, DecodeError> {
    if pairs.len() < 2 {
        return Ok(LoadOutcome::NotEnoughPairs { found: pairs.len() });
    }

    let mut drawn: Vec<(&String, &StemPair)> = pairs.iter().collect();
    drawn.shuffle(rng);

    let (vocals_title, vocals_pair) = drawn[0];
    let Some(vocals_file) = vocals_pair.stem(StemRole::Vocals) else {
        return Ok(LoadOutcome::MissingStem {
            title: vocals_title.clone(),
            role: StemRole::Vocals,
        });
    };

    let (instrumental_title, instrumental_pair) = drawn[1];
    let Some(instrumental_file) = instrumental_pair.stem(StemRole::NoVocals) else {
        return Ok(LoadOutcome::MissingStem {
            title: instrumental_title.clone(),
            role: StemRole::NoVocals,
        });
    };

    let vocals = load_deck(vocals_pair, StemRole::Vocals, 1, dir.join(vocals_file))?;
    let instrumental = load_deck(
        instrumental_pair,
        StemRole::NoVocals,
        2,
        dir.join(instrumental_file),
    )?;

    Ok(LoadOutcome::Loaded(vec![vocals, instrumental]))
}

/// Decode the stem once, up front. The full pass both proves the file is
/// playable and yields the exact rendered duration for the play log.
fn load_deck(
    pair: &StemPair,
    role: StemRole,
    id: u32,
    path: PathBuf,
) -> Result<Deck, DecodeError> {
    let source = open_source(&path)?;

    let sample_rate: u32 = source.sample_rate().into();
    let channels: u16 = source.channels().into();
    let channels = u64::from(channels.max(1));

    let frames = source.count() as u64 / channels;
    let duration = Duration::from_secs_f64(frames as f64 / f64::from(sample_rate.max(1)));

    Ok(Deck {
        id,
        role,
        bpm: pair.bpm(role).unwrap_or(FALLBACK_BPM),
        path,
        duration,
    })
}
