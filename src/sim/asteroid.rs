//! Asteroid lifecycle: edge spawning, debris splits, polygon generation
//!
//! The pool never drains. A rock drifting off the extended bounds is
//! respawned in place, and a destroyed rock either splits into debris
//! (Large) or comes back as a fresh Large at the edge (Small).

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Asteroid, AsteroidSize};
use super::trig::TrigTable;
use crate::consts::*;

/// Generate an irregular polygon around `center`. The angular step
/// accumulates randomly per vertex and is not re-normalized to a full
/// turn, which is what gives the rocks their lopsided look. Radius
/// bounds are ordered before sampling, so callers may pass them
/// reversed.
pub fn generate_vertices(
    rng: &mut Pcg32,
    center: Vec2,
    min_r: i32,
    max_r: i32,
) -> [Vec2; ASTEROID_VERTICES] {
    let (lo, hi) = (min_r.min(max_r), min_r.max(max_r));
    let mut deg = 0i32;
    let mut vertices = [Vec2::ZERO; ASTEROID_VERTICES];
    for v in vertices.iter_mut() {
        let r = rng.random_range(lo..=hi) as f32;
        deg += rng.random_range(45..=60);
        let rad = (deg as f32).to_radians();
        *v = center + Vec2::new(rad.cos(), rad.sin()) * r;
    }
    vertices
}

/// (Re)initialize an inactive slot as a Large asteroid in one of the four
/// off-field strips, aimed loosely at the player. No-op on active slots.
pub fn spawn_edge(a: &mut Asteroid, player_center: Vec2, rng: &mut Pcg32) {
    if a.active {
        return;
    }
    a.speed = rng.random_range(MIN_SPEED..=MAX_SPEED) as f32;
    a.center = match rng.random_range(0..4) {
        0 => Vec2::new(
            rng.random_range(SPAWN_LEFT as i32..=0) as f32,
            rng.random_range(0..=HEIGHT as i32) as f32,
        ),
        1 => Vec2::new(
            rng.random_range(WIDTH as i32..=SPAWN_RIGHT as i32) as f32,
            rng.random_range(0..=HEIGHT as i32) as f32,
        ),
        2 => Vec2::new(
            rng.random_range(0..=WIDTH as i32) as f32,
            rng.random_range(SPAWN_TOP as i32..=0) as f32,
        ),
        _ => Vec2::new(
            rng.random_range(0..=WIDTH as i32) as f32,
            rng.random_range(HEIGHT as i32..=SPAWN_BOTTOM as i32) as f32,
        ),
    };
    a.active = true;
    a.size = AsteroidSize::Large;

    // Approximate homing: aim at a point jittered around the player
    let target_x = rng.random_range(player_center.x as i32 - 300..=player_center.x as i32 + 300);
    let target_y = rng.random_range(player_center.y as i32 - 300..=player_center.y as i32 + 300);
    let dir = (target_y as f32 - a.center.y).atan2(target_x as f32 - a.center.x);
    a.vel = Vec2::new(dir.cos(), dir.sin());

    a.vertices = generate_vertices(rng, a.center, MIN_R, MAX_R);
}

/// Activate the first free pool slot as Small debris at `point`, moving
/// in one of the 72 table directions. Silently skips when the pool is
/// full. The slot's previous speed is kept; debris in a never-used slot
/// does not drift.
pub fn spawn_debris(pool: &mut [Asteroid], point: Vec2, table: &TrigTable, rng: &mut Pcg32) {
    for a in pool.iter_mut() {
        if a.active {
            continue;
        }
        a.active = true;
        a.size = AsteroidSize::Small;
        a.center = point;
        a.vel = table.entry(rng.random_range(0..ROTATIONS));
        a.vertices = generate_vertices(rng, point, MIN_R, MAX_R - DEBRIS_SHRINK);
        break;
    }
}

/// Rigid translation by `velocity * speed * dt`. Leaving the extended
/// bounds deactivates the slot and respawns it at the edge immediately;
/// the vertices are not translated on that frame.
pub fn update(a: &mut Asteroid, player_center: Vec2, rng: &mut Pcg32, dt: f32) {
    if !a.active {
        return;
    }
    let step = a.vel * a.speed * dt;
    a.center += step;
    if a.center.x > SPAWN_RIGHT
        || a.center.x < SPAWN_LEFT
        || a.center.y > SPAWN_BOTTOM
        || a.center.y < SPAWN_TOP
    {
        a.active = false;
        spawn_edge(a, player_center, rng);
        return;
    }
    for v in a.vertices.iter_mut() {
        *v += step;
    }
}
