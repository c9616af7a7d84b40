//! Playback orchestration: deck selection and the audio thread.
//!
//! The audio thread owns the rodio `OutputStream` and one `Sink` per deck;
//! commands arrive over an mpsc channel and shared deck state is exposed
//! through an `Arc<Mutex<_>>` handle.

mod player;
mod select;
mod sink;
mod thread;
mod types;

pub use player::StemPlayer;
pub use select::{LoadOutcome, draw_decks};
pub use sink::DecodeError;
pub use types::{AudioCmd, Deck, DeckInfo, DeckListHandle};
