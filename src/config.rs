//! Runtime settings for the player.
//!
//! Two groups: where the stem library lives and which file extensions count
//! as audio, and how playback behaves (speed multiplier). Values layer as
//! env vars over an optional TOML file over struct defaults.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
