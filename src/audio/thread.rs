use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};
use tracing::{error, info};

use super::sink::create_sink;
use super::types::{AudioCmd, Deck, DeckListHandle};

pub(super) fn spawn_audio_thread(
    decks: Vec<Deck>,
    rx: Receiver<AudioCmd>,
    infos: DeckListHandle,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a console app.
        let mut stream = stream;
        stream.log_on_drop(false);

        // One sink slot per deck; a slot is Some while that deck renders.
        let mut sinks: Vec<Option<Sink>> = decks.iter().map(|_| None).collect();

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(AudioCmd::PlayAll { speed }) => {
                    for (slot, deck) in decks.iter().enumerate() {
                        let started = infos
                            .lock()
                            .map(|mut g| g[slot].begin_play())
                            .unwrap_or(false);
                        if !started {
                            continue;
                        }

                        match create_sink(&stream, &deck.path, speed) {
                            Ok(sink) => {
                                sink.play();
                                info!(
                                    "deck {} playing {} at {:.2}x speed, ~{:.2}s total",
                                    deck.id,
                                    deck.role.label(),
                                    speed,
                                    deck.duration.as_secs_f32() / speed,
                                );
                                sinks[slot] = Some(sink);
                            }
                            Err(e) => {
                                // The stem decoded at load time, so the file
                                // changed underneath us; skip this deck.
                                error!("deck {}: {e}", deck.id);
                                if let Ok(mut g) = infos.lock() {
                                    g[slot].finish();
                                }
                            }
                        }
                    }
                }

                Ok(AudioCmd::StopAll) => {
                    for (slot, deck) in decks.iter().enumerate() {
                        let was_playing = infos
                            .lock()
                            .map(|mut g| g[slot].finish())
                            .unwrap_or(false);
                        if was_playing {
                            if let Some(sink) = sinks[slot].take() {
                                sink.stop();
                            }
                            info!("deck {} stopped", deck.id);
                        }
                    }
                }

                Ok(AudioCmd::Quit) => {
                    for sink in sinks.iter().flatten() {
                        sink.stop();
                    }
                    if let Ok(mut g) = infos.lock() {
                        for info in g.iter_mut() {
                            info.finish();
                        }
                    }
                    break;
                }

                Err(RecvTimeoutError::Timeout) => {
                    // Clear the playing flag of decks whose sink drained.
                    for (slot, deck) in decks.iter().enumerate() {
                        let drained = sinks[slot].as_ref().is_some_and(|s| s.empty());
                        if drained {
                            sinks[slot] = None;
                            if let Ok(mut g) = infos.lock() {
                                g[slot].finish();
                            }
                            info!("deck {} finished", deck.id);
                        }
                    }
                }

                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
