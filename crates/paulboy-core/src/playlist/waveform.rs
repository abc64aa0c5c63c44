use serde::{Deserialize, Serialize};

/// Oscilloscope-style waveform state for the radio tab.
///
/// The phase advances only while a track is playing; sampling is a pure
/// function of phase and position, so a paused waveform freezes in place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Waveform {
    pub amplitude: f32,
    pub frequency: f32,
    phase: f32,
}

impl Default for Waveform {
    fn default() -> Self {
        Self {
            amplitude: 30.0,
            frequency: 0.2,
            phase: 0.0,
        }
    }
}

impl Waveform {
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// One tick of movement.
    pub fn advance(&mut self) {
        self.phase += self.frequency;
    }

    /// Vertical offset at horizontal position `x`.
    pub fn sample(&self, x: f32) -> f32 {
        self.amplitude * (x * 0.05 + self.phase).sin()
    }

    /// Offsets across `width` positions, one every `step`.
    pub fn samples(&self, width: u32, step: u32) -> Vec<f32> {
        (0..width)
            .step_by(step.max(1) as usize)
            .map(|x| self.sample(x as f32))
            .collect()
    }
}
