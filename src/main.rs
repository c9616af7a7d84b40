use std::{env, io::BufRead, path::PathBuf};

use tracing::{info, warn};

mod analysis;
mod audio;
mod config;
mod library;

use audio::{AudioCmd, LoadOutcome, StemPlayer, draw_decks};
use config::Settings;
use library::categorize;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    let settings = Settings::load()?;
    settings
        .validate()
        .map_err(|e| format!("invalid configuration: {e}"))?;

    // CLI argument wins over the configured directory.
    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.library.directory.clone());

    info!("scanning {}", dir.display());
    let pairs = categorize(&dir, &settings.library)?;

    // An unreadable stem file is fatal here, like any other filesystem error.
    match draw_decks(&pairs, &dir, &mut rand::rng())? {
        LoadOutcome::NotEnoughPairs { found } => {
            warn!("need at least two stem pairs to mix, found {found}");
        }
        LoadOutcome::MissingStem { title, role } => {
            warn!("drew pair \"{title}\" but it has no {} stem", role.label());
        }
        LoadOutcome::Loaded(decks) => {
            let player = StemPlayer::new(decks);

            let deck_state = player.deck_handle();
            if let Ok(decks) = deck_state.lock() {
                for deck in decks.iter() {
                    info!(
                        "deck {} loaded: {} at {:.1} BPM",
                        deck.id,
                        deck.role.label(),
                        deck.bpm
                    );
                }
            }

            let _ = player.send(AudioCmd::PlayAll {
                speed: settings.playback.speed,
            });

            info!("press Enter to stop");
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;

            let _ = player.send(AudioCmd::StopAll);
            player.quit();
        }
    }

    Ok(())
}
