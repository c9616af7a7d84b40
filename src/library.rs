//! Stem library: pairing model, filename pairing engine and the
//! directory categorizer.
//!
//! Separated stems arrive as sibling files in one directory, named by the
//! export tool (`<title>_vocals_*.mp3` / `<title>_no_vocals_*.mp3`). This
//! module groups them back into per-title pairs and annotates each present
//! side with an estimated tempo.

mod model;
mod pairing;
mod scan;

pub use model::{StemPair, StemRole};
pub use pairing::{clean_title, match_files};
pub use scan::{LibraryError, categorize};
