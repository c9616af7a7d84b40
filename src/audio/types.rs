//! Audio-related small types and handles.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::library::StemRole;

#[derive(Debug)]
pub enum AudioCmd {
    /// Start every deck that is not already playing, at the given speed
    /// multiplier (1.0 = unmodified).
    PlayAll { speed: f32 },
    /// Stop every playing deck.
    StopAll,
    /// Stop everything and shut down the audio thread.
    Quit,
}

/// One loaded stem, ready for playback.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Sequential id: 1 for the vocals deck, 2 for the instrumental deck.
    pub id: u32,
    pub role: StemRole,
    pub bpm: f32,
    pub path: PathBuf,
    /// Exact rendered duration, counted from the decoded stream at load.
    pub duration: Duration,
}

/// Runtime deck state shared with callers (and with tests).
#[derive(Debug, Clone)]
pub struct DeckInfo {
    pub id: u32,
    pub role: StemRole,
    pub bpm: f32,
    pub playing: bool,
}

impl DeckInfo {
    pub(crate) fn from_deck(deck: &Deck) -> Self {
        Self {
            id: deck.id,
            role: deck.role,
            bpm: deck.bpm,
            playing: false,
        }
    }

    /// Mark the deck playing. Returns `false` when it already was, so a
    /// repeated play command cannot double-start a deck.
    pub(crate) fn begin_play(&mut self) -> bool {
        if self.playing {
            false
        } else {
            self.playing = true;
            true
        }
    }

    /// Clear the playing flag. Returns whether the deck was playing.
    pub(crate) fn finish(&mut self) -> bool {
        let was = self.playing;
        self.playing = false;
        was
    }
}

pub type DeckListHandle = Arc<Mutex<Vec<DeckInfo>>>;
