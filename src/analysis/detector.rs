use std::collections::VecDeque;

/// Chunks of recent energy kept for the adaptive onset threshold.
const ENERGY_HISTORY: usize = 50;
/// Minimum onsets before an estimate is attempted.
const MIN_ONSETS: usize = 8;
/// Histogram bin width in seconds (10 ms).
const BIN_WIDTH: f32 = 0.01;

/// Offline beat detector over mono sample chunks.
///
/// Feed the whole file through [`process`](Self::process) in fixed-size
/// chunks, then call [`estimate`](Self::estimate). An onset is a chunk
/// whose RMS energy clearly exceeds the recent average; the tempo is the
/// most common inter-onset interval, folded into the 70-180 BPM range.
pub struct TempoDetector {
    sample_rate: u32,
    recent_energy: VecDeque<f32>,
    /// Onset times in seconds since the start of the stream.
    onsets: Vec<f32>,
    elapsed: f32,
}

impl TempoDetector {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            recent_energy: VecDeque::with_capacity(ENERGY_HISTORY),
            onsets: Vec::new(),
            elapsed: 0.0,
        }
    }

    /// Process one chunk of mono samples.
    pub fn process(&mut self, samples: &[f32]) {
        if samples.is_empty() {
            return;
        }

        let energy =
            (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt();

        self.recent_energy.push_back(energy);
        if self.recent_energy.len() > ENERGY_HISTORY {
            self.recent_energy.pop_front();
        }
        let avg_energy =
            self.recent_energy.iter().sum::<f32>() / self.recent_energy.len() as f32;

        if energy > avg_energy * 1.5 && energy > 0.01 {
            // Debounce: at most one onset per 100 ms.
            let last_onset = self.onsets.last().copied().unwrap_or(-1.0);
            if self.elapsed - last_onset > 0.1 {
                self.onsets.push(self.elapsed);
            }
        }

        self.elapsed += samples.len() as f32 / self.sample_rate as f32;
    }

    /// Estimate the tempo from the onsets seen so far.
    ///
    /// Returns `None` when the material gave too few onsets (silence, very
    /// short files) or no plausible inter-onset interval.
    pub fn estimate(&self) -> Option<f32> {
        if self.onsets.len() < MIN_ONSETS {
            return None;
        }

        // Intervals outside 0.2-2.0 s (30-300 BPM) are noise, not beats.
        let intervals: Vec<f32> = self
            .onsets
            .windows(2)
            .map(|w| w[1] - w[0])
            .filter(|&iv| iv > 0.2 && iv < 2.0)
            .collect();
        if intervals.is_empty() {
            return None;
        }

        let mut histogram = [0u32; 200];
        for &iv in &intervals {
            let idx = ((iv / BIN_WIDTH) as usize).min(histogram.len() - 1);
            histogram[idx] += 1;
        }

        let (peak_idx, _) = histogram
            .iter()
            .enumerate()
            .max_by_key(|&(_, &count)| count)?;
        let peak_interval = peak_idx as f32 * BIN_WIDTH;
        if peak_interval <= 0.0 {
            return None;
        }

        let bpm = 60.0 / peak_interval;

        // Fold half/double-time estimates into the usual DJ range.
        let folded = if bpm < 70.0 {
            bpm * 2.0
        } else if bpm > 180.0 {
            bpm / 2.0
        } else {
            bpm
        };

        Some(folded)
    }
}
