//! Game state and entity pools
//!
//! Pools are fixed-capacity arrays reused via an active/life flag;
//! allocation is always first-fit so slot assignment is deterministic.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::asteroid;
use super::trig::TrigTable;
use crate::consts::*;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Playing,
    Paused,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Normal,
    /// Post-hit grace period; collisions are ignored and the ship blinks
    Immune,
    Dead,
}

/// Sound the sim wants played at the start of the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player struck an asteroid
    Hit,
    Shoot,
    Explode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidSize {
    Small,
    /// Reserved; the spawner never produces it
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bullet {
    pub active: bool,
    /// Head position; the trail is purely cosmetic
    pub pos: Vec2,
    /// Unit direction, scaled by BULLET_SPEED at integration time
    pub vel: Vec2,
}

#[derive(Debug, Clone, Copy)]
pub struct Asteroid {
    pub active: bool,
    pub size: AsteroidSize,
    pub center: Vec2,
    /// Unit direction
    pub vel: Vec2,
    /// Pixels per second
    pub speed: f32,
    /// Generated once at spawn, then translated rigidly with the center
    pub vertices: [Vec2; ASTEROID_VERTICES],
}

impl Default for Asteroid {
    fn default() -> Self {
        Self {
            active: false,
            size: AsteroidSize::Small,
            center: Vec2::ZERO,
            vel: Vec2::ZERO,
            speed: 0.0,
            vertices: [Vec2::ZERO; ASTEROID_VERTICES],
        }
    }
}

/// Explosion debris streak; `life == 0` marks a free pool slot
#[derive(Debug, Clone, Copy, Default)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames remaining, counting down from MAX_PART_LIFE
    pub life: i32,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub center: Vec2,
    pub velocity: Vec2,
    /// Degrees, kept normalized in [0, 360)
    pub rotation: i32,
    pub state: PlayerState,
    pub immune_frames: i32,
    /// Derived from center + rotation every update: tip, base-left, base-right
    pub vertices: [Vec2; 3],
}

/// Derive the ship triangle from center and rotation. The tip sits at
/// 270 degrees plus rotation, the base corners at 45 and 135.
pub fn derive_player_vertices(center: Vec2, rotation: i32, table: &TrigTable) -> [Vec2; 3] {
    [270, 45, 135].map(|offset| center + table.direction(offset + rotation) * PLAYER_RADIUS)
}

impl Player {
    fn spawned_at(center: Vec2, table: &TrigTable) -> Self {
        Self {
            center,
            velocity: Vec2::ZERO,
            rotation: 0,
            state: PlayerState::Normal,
            immune_frames: 0,
            vertices: derive_player_vertices(center, 0, table),
        }
    }
}

/// Complete game state. Everything the per-frame step touches lives here;
/// there are no globals.
#[derive(Debug, Clone)]
pub struct World {
    pub seed: u64,
    pub rng: Pcg32,
    pub table: TrigTable,
    pub mode: GameMode,
    pub player: Player,
    pub bullets: [Bullet; MAX_BULLETS],
    pub asteroids: [Asteroid; MAX_ASTEROIDS],
    pub particles: [Particle; MAX_PARTICLES],
    pub score: u32,
    /// Remaining hit absorptions; the run ends when this would go negative
    pub healths: i32,
    pub pending_sound: Option<SoundEffect>,
    /// Frame counter, also feeds the render-side blink hash
    pub frame: u64,
}

impl World {
    /// Create a world in Menu mode with a fresh run staged behind it
    pub fn new(seed: u64) -> Self {
        let table = TrigTable::build();
        let center = Vec2::new(WIDTH / 2.0, HEIGHT / 2.0);
        let mut world = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::spawned_at(center, &table),
            table,
            mode: GameMode::Menu,
            bullets: [Bullet::default(); MAX_BULLETS],
            asteroids: [Asteroid::default(); MAX_ASTEROIDS],
            particles: [Particle::default(); MAX_PARTICLES],
            score: 0,
            healths: MAX_HEALTHS,
            pending_sound: None,
            frame: 0,
        };
        world.reset_run();
        world.mode = GameMode::Menu;
        world
    }

    /// Respawn the player and clear the bullet pool
    pub fn spawn_player(&mut self, center: Vec2) {
        self.player = Player::spawned_at(center, &self.table);
        self.bullets = [Bullet::default(); MAX_BULLETS];
    }

    /// Start a fresh run: player at field center, edge asteroids, zeroed
    /// score. Particles are left running; a burst from the fatal hit may
    /// still be fading when the next run starts.
    pub fn reset_run(&mut self) {
        self.spawn_player(Vec2::new(WIDTH / 2.0, HEIGHT / 2.0));
        for a in self.asteroids.iter_mut() {
            a.active = false;
        }
        let player_center = self.player.center;
        for i in 0..INITIAL_ASTEROIDS {
            asteroid::spawn_edge(&mut self.asteroids[i], player_center, &mut self.rng);
        }
        self.score = 0;
        self.healths = MAX_HEALTHS;
        self.pending_sound = None;
        self.mode = GameMode::Playing;
        log::info!("run started (seed {})", self.seed);
    }

    /// Number of asteroids currently on the field
    pub fn active_asteroids(&self) -> usize {
        self.asteroids.iter().filter(|a| a.active).count()
    }

    /// Activate free particle slots at `point` with random table
    /// directions. The loop breaks only once the counter has already
    /// passed zero, so up to `count + 1` slots light up.
    pub fn emit_particles(&mut self, count: i32, point: Vec2) {
        let mut remaining = count;
        for p in self.particles.iter_mut() {
            if p.life != 0 {
                continue;
            }
            p.life = MAX_PART_LIFE;
            p.vel = self.table.entry(self.rng.random_range(0..ROTATIONS));
            p.pos = point;
            if remaining == 0 {
                break;
            }
            remaining -= 1;
        }
    }
}
