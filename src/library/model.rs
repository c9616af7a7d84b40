/// Which side of a stem pair a file holds.
///
/// `NoVocals` must be checked before `Vocals` when classifying a filename:
/// every `_no_vocals` name also contains the `vocals` substring.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StemRole {
    Vocals,
    NoVocals,
}

impl StemRole {
    /// Human-readable label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            StemRole::Vocals => "Vocals",
            StemRole::NoVocals => "No Vocals",
        }
    }
}

/// The vocals/instrumental grouping derived from one original track.
///
/// A side is "present" when its filename slot is set; tempo fields are
/// filled in lazily, only for present sides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StemPair {
    pub vocals: Option<String>,
    pub no_vocals: Option<String>,
    pub vocals_bpm: Option<f32>,
    pub no_vocals_bpm: Option<f32>,
}

impl StemPair {
    pub fn stem(&self, role: StemRole) -> Option<&str> {
        match role {
            StemRole::Vocals => self.vocals.as_deref(),
            StemRole::NoVocals => self.no_vocals.as_deref(),
        }
    }

    pub fn set_stem(&mut self, role: StemRole, file_name: String) {
        match role {
            StemRole::Vocals => self.vocals = Some(file_name),
            StemRole::NoVocals => self.no_vocals = Some(file_name),
        }
    }

    pub fn bpm(&self, role: StemRole) -> Option<f32> {
        match role {
            StemRole::Vocals => self.vocals_bpm,
            StemRole::NoVocals => self.no_vocals_bpm,
        }
    }

    pub fn set_bpm(&mut self, role: StemRole, bpm: f32) {
        match role {
            StemRole::Vocals => self.vocals_bpm = Some(bpm),
            StemRole::NoVocals => self.no_vocals_bpm = Some(bpm),
        }
    }
}
