use std::f32::consts::TAU;

const SAMPLE_RATE: u32 = 44_100;

/// Short effects the engine can ask for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Clip {
    AppleEaten,
}

impl Clip {
    pub const ALL: [Clip; 1] = [Clip::AppleEaten];

    pub fn name(self) -> &'static str {
        match self {
            Clip::AppleEaten => "apple",
        }
    }

    /// Playback gain relative to the master volume.
    pub fn gain(self) -> f32 {
        match self {
            Clip::AppleEaten => 0.35,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Clip::AppleEaten => Tone {
                frequency_hz: 880.0,
                seconds: 0.08,
                level: 0.42,
            },
        }
    }

    /// Embedded PCM data for the clip, as a WAV file.
    pub fn wav_bytes(self) -> Vec<u8> {
        encode_wav(&self.tone().samples(SAMPLE_RATE), SAMPLE_RATE)
    }
}

/// Fire-and-forget playback. Implementations must not block the caller.
pub trait SoundPlayer {
    fn play(&mut self, clip: Clip);
}

/// Player that drops every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl SoundPlayer for Muted {
    fn play(&mut self, clip: Clip) {
        tracing::trace!(clip = clip.name(), "muted");
    }
}

/// A sine beep with a linear fade-out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub seconds: f32,
    /// Peak amplitude, 0.0 to 1.0.
    pub level: f32,
}

impl Tone {
    pub fn samples(&self, sample_rate: u32) -> Vec<i16> {
        let count = (self.seconds.max(0.0) * sample_rate as f32) as usize;
        let peak = self.level.clamp(0.0, 1.0) * i16::MAX as f32;
        let step = TAU * self.frequency_hz / sample_rate as f32;
        (0..count)
            .map(|n| {
                let fade = 1.0 - n as f32 / count as f32;
                (peak * fade * (step * n as f32).sin()) as i16
            })
            .collect()
    }
}

fn chunk_header(out: &mut Vec<u8>, tag: &[u8; 4], len: u32) {
    out.extend_from_slice(tag);
    out.extend_from_slice(&len.to_le_bytes());
}

/// Wraps mono 16-bit samples in a canonical 44-byte RIFF/WAVE header.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    const CHANNELS: u16 = 1;
    const BITS: u16 = 16;
    let block_align = CHANNELS * BITS / 8;
    let data_len = (samples.len() * block_align as usize) as u32;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    chunk_header(&mut out, b"RIFF", 36 + data_len);
    out.extend_from_slice(b"WAVE");
    chunk_header(&mut out, b"fmt ", 16);
    for field in [1u16, CHANNELS] {
        out.extend_from_slice(&field.to_le_bytes());
    }
    for field in [sample_rate, sample_rate * block_align as u32] {
        out.extend_from_slice(&field.to_le_bytes());
    }
    for field in [block_align, BITS] {
        out.extend_from_slice(&field.to_le_bytes());
    }
    chunk_header(&mut out, b"data", data_len);
    out.extend(samples.iter().flat_map(|s| s.to_le_bytes()));
    out
}
