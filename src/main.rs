//! Headless driver: runs a scripted session through the full frame
//! loop and reports the outcome. Useful for profiling the simulation
//! and for smoke-testing a build without a display.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use vector_rocks::audio::AudioManager;
use vector_rocks::consts::FRAME_DT;
use vector_rocks::platform::{Backend, KeySnapshot, run};
use vector_rocks::render::Scene;
use vector_rocks::settings::{SETTINGS_FILE, Settings};
use vector_rocks::sim::{SoundEffect, World};

/// Deterministic scripted input: leave the menu, then orbit and fire
struct HeadlessBackend {
    frame: u32,
    limit: u32,
    draw_cmds: usize,
    sounds: Vec<SoundEffect>,
}

impl HeadlessBackend {
    fn new(limit: u32) -> Self {
        Self {
            frame: 0,
            limit,
            draw_cmds: 0,
            sounds: Vec::new(),
        }
    }
}

impl Backend for HeadlessBackend {
    fn should_close(&self) -> bool {
        self.frame >= self.limit
    }

    fn frame_delta(&mut self) -> f32 {
        FRAME_DT
    }

    fn poll_keys(&mut self) -> KeySnapshot {
        self.frame += 1;
        KeySnapshot {
            confirm: self.frame < 3,
            fire: self.frame % 9 == 0,
            thrust: self.frame % 4 == 0,
            turn_right: self.frame % 2 == 0,
            ..Default::default()
        }
    }

    fn present(&mut self, scene: &Scene) {
        self.draw_cmds += scene.cmds.len();
    }

    fn play_sound(&mut self, effect: SoundEffect, _volume: f32) {
        self.sounds.push(effect);
    }
}

fn seed_from_args() -> u64 {
    if let Some(arg) = std::env::args().nth(1) {
        if let Ok(seed) = arg.parse() {
            return seed;
        }
        log::warn!("ignoring non-numeric seed argument {arg:?}");
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();

    let settings = Settings::load_from(Path::new(SETTINGS_FILE));
    let audio = AudioManager::new(&settings);
    let seed = seed_from_args();
    log::info!("starting session with seed {seed}");

    let mut world = World::new(seed);
    let mut backend = HeadlessBackend::new(3600);
    run(&mut world, &mut backend, &settings, &audio);

    println!(
        "seed {seed}: {} frames, score {}, {} sounds, {} draw commands",
        backend.frame,
        world.score,
        backend.sounds.len(),
        backend.draw_cmds
    );
}
