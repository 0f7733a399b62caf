//! Platform seam: input, timing, presentation and sound playback
//!
//! A [`Backend`] owns the window, input device and audio device. The
//! [`run`] loop is backend-agnostic and drives the simulation at
//! whatever frame rate the backend reports.

use crate::audio::AudioManager;
use crate::render::{Scene, build_scene};
use crate::settings::Settings;
use crate::sim::{SoundEffect, TickInput, World, tick};

/// Raw key levels sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    pub fire: bool,
    pub confirm: bool,
    pub pause: bool,
    pub thrust: bool,
    pub reverse: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// Two-frame key history. Fire, confirm and pause act on the press
/// edge; movement keys act on the held level.
#[derive(Debug, Default)]
pub struct Keys {
    current: KeySnapshot,
    previous: KeySnapshot,
}

impl Keys {
    pub fn update(&mut self, snapshot: KeySnapshot) {
        self.previous = self.current;
        self.current = snapshot;
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            fire: self.current.fire && !self.previous.fire,
            confirm: self.current.confirm && !self.previous.confirm,
            pause: self.current.pause && !self.previous.pause,
            thrust: self.current.thrust,
            reverse: self.current.reverse,
            turn_left: self.current.turn_left,
            turn_right: self.current.turn_right,
        }
    }
}

pub trait Backend {
    fn should_close(&self) -> bool;
    /// Seconds since the previous frame
    fn frame_delta(&mut self) -> f32;
    fn poll_keys(&mut self) -> KeySnapshot;
    fn present(&mut self, scene: &Scene);
    fn play_sound(&mut self, effect: SoundEffect, volume: f32);
}

pub fn run<B: Backend>(
    world: &mut World,
    backend: &mut B,
    settings: &Settings,
    audio: &AudioManager,
) {
    let mut keys = Keys::default();
    let mut fps = 0u32;
    let mut fps_frames = 0u32;
    let mut fps_elapsed = 0.0f32;

    while !backend.should_close() {
        let dt = backend.frame_delta();
        keys.update(backend.poll_keys());

        if let Some(effect) = tick(world, &keys.tick_input(), dt) {
            let volume = audio.effective_volume();
            if volume > 0.0 {
                backend.play_sound(effect, volume);
            }
        }

        fps_frames += 1;
        fps_elapsed += dt;
        if fps_elapsed >= 1.0 {
            fps = fps_frames;
            fps_frames = 0;
            fps_elapsed = 0.0;
        }

        let counter = settings.show_fps.then_some(fps);
        backend.present(&build_scene(world, settings, counter));
    }
}
