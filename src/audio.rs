//! Audio system - fire-and-forget procedural sound cues
//!
//! Cue samples are synthesized on demand (no sound files) and handed to
//! detached rodio sinks. Every failure path degrades to silence; the
//! game loop never waits on audio.

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

const SAMPLE_RATE: u32 = 44_100;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Wing impulse
    Flap,
    /// Power-up collected
    Collect,
    /// Pipe collision
    Hit,
    /// Boundary breach
    Die,
}

/// Audio manager holding the output device
pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    volume: f32,
}

impl Audio {
    /// Open the default output device. The caller decides whether a
    /// failure is worth mentioning; running without audio is supported.
    pub fn new(volume: f32) -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            volume: volume.clamp(0.0, 1.0),
        })
    }

    /// Queue a cue and forget about it
    pub fn play(&self, cue: SoundCue) {
        if self.volume <= 0.0 {
            return;
        }
        let samples = match cue {
            SoundCue::Flap => sine_sweep(400.0, 800.0, 0.10, 0.14),
            SoundCue::Collect => chime(&[520.0, 680.0], 0.12, 0.12),
            SoundCue::Hit => saw_sweep(220.0, 90.0, 0.15, 0.16),
            SoundCue::Die => saw_sweep(400.0, 80.0, 0.45, 0.14),
        };
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        sink.set_volume(self.volume);
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
        sink.detach();
    }
}

/// Quadratic fade-out over the buffer
fn fade(t: f32, duration: f32) -> f32 {
    let x = (1.0 - t / duration).max(0.0);
    x * x
}

/// Sine tone sliding linearly from `f0` to `f1` Hz
fn sine_sweep(f0: f32, f1: f32, duration: f32, amp: f32) -> Vec<f32> {
    let count = (SAMPLE_RATE as f32 * duration) as usize;
    let dt = 1.0 / SAMPLE_RATE as f32;
    let mut phase = 0.0f32;
    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f32 * dt;
        let freq = f0 + (f1 - f0) * t / duration;
        phase += std::f32::consts::TAU * freq * dt;
        samples.push(phase.sin() * amp * fade(t, duration));
    }
    samples
}

/// Sawtooth tone sliding linearly from `f0` to `f1` Hz (harsher timbre
/// for the crash cues)
fn saw_sweep(f0: f32, f1: f32, duration: f32, amp: f32) -> Vec<f32> {
    let count = (SAMPLE_RATE as f32 * duration) as usize;
    let dt = 1.0 / SAMPLE_RATE as f32;
    let mut phase = 0.0f32;
    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f32 * dt;
        let freq = f0 + (f1 - f0) * t / duration;
        phase = (phase + freq * dt).fract();
        samples.push((2.0 * phase - 1.0) * amp * fade(t, duration));
    }
    samples
}

/// A short ascending two-note chime
fn chime(notes: &[f32], note_len: f32, amp: f32) -> Vec<f32> {
    let mut samples = Vec::new();
    for &freq in notes {
        samples.extend(sine_sweep(freq, freq, note_len, amp));
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_fill_and_fade() {
        let samples = sine_sweep(440.0, 440.0, 0.1, 0.2);
        assert_eq!(samples.len(), 4410);
        assert!(samples.iter().all(|s| s.abs() <= 0.2));
        // Tail is quieter than the body
        assert!(samples[4400].abs() < 0.01);
    }

    #[test]
    fn chime_concatenates_notes() {
        let samples = chime(&[520.0, 680.0], 0.12, 0.12);
        assert_eq!(samples.len(), 2 * (44_100.0 * 0.12) as usize);
    }
}
