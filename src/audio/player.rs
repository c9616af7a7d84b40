use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, Deck, DeckInfo, DeckListHandle};

/// Owner of the audio thread and the shared deck state.
///
/// Commands are fire-and-forget sends; the audio thread applies them and
/// keeps the `DeckListHandle` in sync so callers can observe per-deck
/// playing flags.
pub struct StemPlayer {
    tx: Sender<AudioCmd>,
    decks: DeckListHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl StemPlayer {
    pub fn new(decks: Vec<Deck>) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let infos: DeckListHandle =
            Arc::new(Mutex::new(decks.iter().map(DeckInfo::from_deck).collect()));

        let handle = spawn_audio_thread(decks, rx, infos.clone());

        Self {
            tx,
            decks: infos,
            join: Mutex::new(Some(handle)),
        }
    }

    pub fn deck_handle(&self) -> DeckListHandle {
        self.decks.clone()
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    /// Shut down the audio thread and wait for it to exit.
    pub fn quit(&self) {
        let _ = self.send(AudioCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
