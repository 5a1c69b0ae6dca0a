//! Default audio rendering for narration requests.
//!
//! No platform text-to-speech engine is wired into the stack, so the
//! default voice renders each word of the text as a short tone burst:
//! audible, word-paced feedback that keeps the coordinator contract
//! honest. Consumers with a real speech engine implement
//! [`SpeechSynthesizer`] over it instead.

use std::f32::consts::PI;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

use super::{SpeechSynthesizer, UtteranceEvents};

const SAMPLE_RATE: u32 = 44100;

/// Tone ladder cycled word by word, so longer sentences don't drone.
const WORD_TONES_HZ: [f32; 5] = [392.0, 440.0, 494.0, 587.0, 659.0];

/// Tone renderer speaking through the default audio output.
///
/// Holds the non-Send rodio stream, so it must live on the narration
/// worker thread. The output stream is opened lazily on the first
/// utterance; if no device is available every request fails and the
/// coordinator degrades to a silent no-op.
pub struct ChimeVoice {
    output: Option<(OutputStream, OutputStreamHandle)>,
    sink: Option<Arc<Sink>>,
    rate: f32,
    volume: f32,
}

impl ChimeVoice {
    /// `rate` scales word pacing (1.0 = normal, lower = slower), `volume`
    /// is the output gain in 0.0..=1.0.
    pub fn new(rate: f32, volume: f32) -> Self {
        Self {
            output: None,
            sink: None,
            rate: rate.clamp(0.25, 4.0),
            volume: volume.clamp(0.0, 1.0),
        }
    }
}

impl SpeechSynthesizer for ChimeVoice {
    fn speak(&mut self, text: &str, events: UtteranceEvents) -> Result<()> {
        self.cancel();

        if self.output.is_none() {
            let pair = OutputStream::try_default().context("failed to open audio output")?;
            self.output = Some(pair);
        }
        let sink = match &self.output {
            Some((_, handle)) => Sink::try_new(handle).context("failed to create audio sink")?,
            None => return Err(anyhow!("audio output unavailable")),
        };

        sink.set_volume(self.volume);
        sink.append(WordChimes::new(text, self.rate));
        events.started();

        let sink = Arc::new(sink);
        self.sink = Some(Arc::clone(&sink));

        // Watch for natural completion off the worker thread; the stale
        // guard in the events handle makes a preempted report harmless.
        thread::Builder::new()
            .name("narration-watch".to_string())
            .spawn(move || {
                sink.sleep_until_end();
                events.finished();
            })
            .context("failed to spawn narration watcher")?;

        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

/// Finite mono source rendering one tone burst per word, with a short
/// gap between words and a linear fade at each burst edge to avoid clicks.
struct WordChimes {
    segments: Vec<Segment>,
    segment: usize,
    sample: usize,
}

struct Segment {
    freq: f32,
    tone_samples: usize,
    total_samples: usize,
}

impl WordChimes {
    fn new(text: &str, rate: f32) -> Self {
        let per_sample = SAMPLE_RATE as f32 / rate;
        let segments = text
            .split_whitespace()
            .enumerate()
            .map(|(i, word)| {
                // Burst length tracks word length, within speech-like bounds.
                let tone_secs = (0.09 + 0.03 * word.chars().count() as f32).min(0.35);
                let gap_secs = 0.06;
                let tone_samples = (tone_secs * per_sample) as usize;
                Segment {
                    freq: WORD_TONES_HZ[i % WORD_TONES_HZ.len()],
                    tone_samples,
                    total_samples: tone_samples + (gap_secs * per_sample) as usize,
                }
            })
            .collect();

        Self {
            segments,
            segment: 0,
            sample: 0,
        }
    }

    fn duration(&self) -> Duration {
        let total: usize = self.segments.iter().map(|s| s.total_samples).sum();
        Duration::from_secs_f64(total as f64 / SAMPLE_RATE as f64)
    }
}

impl Iterator for WordChimes {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.segments.get(self.segment)?;

        let value = if self.sample < segment.tone_samples {
            let t = self.sample as f32 / SAMPLE_RATE as f32;
            let fade_len = (SAMPLE_RATE / 200) as f32; // 5 ms edges
            let fade_in = (self.sample as f32 / fade_len).min(1.0);
            let fade_out =
                ((segment.tone_samples - self.sample) as f32 / fade_len).min(1.0);
            (2.0 * PI * segment.freq * t).sin() * 0.2 * fade_in * fade_out
        } else {
            0.0 // inter-word gap
        };

        self.sample += 1;
        if self.sample >= segment.total_samples {
            self.segment += 1;
            self.sample = 0;
        }

        Some(value)
    }
}

impl Source for WordChimes {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1 // Mono
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_segment_per_word() {
        let chimes = WordChimes::new("one small step", 1.0);
        assert_eq!(chimes.segments.len(), 3);
    }

    #[test]
    fn empty_text_renders_nothing() {
        let mut chimes = WordChimes::new("   ", 1.0);
        assert_eq!(chimes.next(), None);
        assert_eq!(chimes.duration(), Duration::ZERO);
    }

    #[test]
    fn sample_count_matches_duration() {
        let chimes = WordChimes::new("hello world", 1.0);
        let expected: usize = chimes.segments.iter().map(|s| s.total_samples).sum();
        assert_eq!(chimes.count(), expected);
    }

    #[test]
    fn faster_rate_shortens_output() {
        let slow = WordChimes::new("the same words here", 0.5);
        let fast = WordChimes::new("the same words here", 2.0);
        assert!(fast.duration() < slow.duration());
    }

    #[test]
    fn samples_stay_in_range() {
        for sample in WordChimes::new("amplitude check", 1.0) {
            assert!(sample.abs() <= 0.2 + f32::EPSILON);
        }
    }
}
