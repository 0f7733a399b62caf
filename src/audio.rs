//! Sound effect routing and volume state
//!
//! The simulation only names effects; the backend owns the actual
//! playback. This keeps audio out of the deterministic core.

use crate::settings::Settings;
pub use crate::sim::SoundEffect;

/// Path of the sample for an effect, relative to the executable
pub fn asset_path(effect: SoundEffect) -> &'static str {
    match effect {
        SoundEffect::Hit => "res/hit.wav",
        SoundEffect::Shoot => "res/shoot.wav",
        SoundEffect::Explode => "res/explode.wav",
    }
}

#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Final playback gain for a sound effect
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}
