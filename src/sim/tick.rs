//! Per-frame simulation step and the mode state machine
//!
//! One call to [`tick`] advances the world by one frame. Update order
//! inside a playing frame is fixed; same-frame interactions (a bullet
//! and an asteroid overlapping, the player clipping a rock) resolve
//! deterministically because of it.

use glam::Vec2;

use super::asteroid;
use super::collision::{player_hits_asteroid, point_in_polygon};
use super::state::{AsteroidSize, Bullet, GameMode, Particle, PlayerState, SoundEffect, World};
use crate::consts::*;
use crate::wrap_degrees;

/// Input sampled once per frame. Edge triggers (fire/confirm/pause) are
/// already resolved by the platform layer; the rest are held keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub fire: bool,
    pub confirm: bool,
    pub pause: bool,
    pub thrust: bool,
    pub reverse: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// Advance one frame. Returns the sound request that was pending when
/// the playing step began; the caller hands it to the audio backend.
/// Menu, Paused and GameOver frames never dispatch sounds, so a request
/// raised just before a pause plays on resume.
pub fn tick(world: &mut World, input: &TickInput, dt: f32) -> Option<SoundEffect> {
    world.frame = world.frame.wrapping_add(1);

    match world.mode {
        GameMode::Menu => {
            if input.confirm {
                world.mode = GameMode::Playing;
                log::info!("leaving menu");
            }
            None
        }
        GameMode::Paused => {
            if input.confirm {
                world.mode = GameMode::Playing;
            }
            None
        }
        GameMode::GameOver => {
            if input.confirm {
                world.reset_run();
            }
            None
        }
        GameMode::Playing => {
            if input.pause {
                world.mode = GameMode::Paused;
                None
            } else {
                step_game(world, input, dt)
            }
        }
    }
}

/// One playing frame, in the fixed order: drain the pending sound,
/// update the player, resolve player/asteroid contact, advance bullets,
/// advance asteroids, resolve bullet/asteroid hits, advance particles.
fn step_game(world: &mut World, input: &TickInput, dt: f32) -> Option<SoundEffect> {
    let sound = world.pending_sound.take();

    update_player(world, input, dt);

    if player_hits_asteroid(&world.player, &world.asteroids) {
        world.healths -= 1;
        world.player.state = PlayerState::Immune;
        world.player.immune_frames = IMMUNE_DURATION;
        world.pending_sound = Some(SoundEffect::Hit);
        if world.healths < 0 {
            world.player.state = PlayerState::Dead;
            world.mode = GameMode::GameOver;
            log::info!("game over, score {}", world.score);
        }
    }

    for b in world.bullets.iter_mut() {
        update_bullet(b, dt);
    }

    let player_center = world.player.center;
    for i in 0..MAX_ASTEROIDS {
        asteroid::update(&mut world.asteroids[i], player_center, &mut world.rng, dt);
    }
    resolve_bullet_hits(world);

    for p in world.particles.iter_mut() {
        update_particle(p, dt);
    }

    sound
}

fn update_player(world: &mut World, input: &TickInput, dt: f32) {
    let World {
        player,
        bullets,
        table,
        pending_sound,
        ..
    } = world;

    if player.state == PlayerState::Immune {
        player.immune_frames -= 1;
        if player.immune_frames == 0 {
            player.state = PlayerState::Normal;
        }
    }

    if input.fire {
        // The sound request fires even when the pool is full
        *pending_sound = Some(SoundEffect::Shoot);
        let heading = ((270 + player.rotation) as f32).to_radians();
        let dir = Vec2::new(heading.cos(), heading.sin());
        for b in bullets.iter_mut() {
            if b.active {
                continue;
            }
            b.active = true;
            b.vel = dir;
            // Muzzle offset from last frame's tip vertex
            b.pos = player.vertices[0] + Vec2::new(3.0, 3.0);
            break;
        }
    }

    // Thrust direction is read before turn keys apply, so this frame's
    // burn uses last frame's heading
    let dir = table.direction(270 + player.rotation);
    if input.thrust {
        player.velocity += dir * 5.0;
        // Only the upper bound is clamped
        if player.velocity.x >= 100.0 {
            player.velocity.x = 100.0;
        }
        if player.velocity.y >= 100.0 {
            player.velocity.y = 100.0;
        }
    } else if input.reverse {
        player.velocity -= dir * 5.0;
    }

    // Fixed 5 degrees per held frame, independent of dt
    if input.turn_right {
        player.rotation += ROTATION_SNAP;
    } else if input.turn_left {
        player.rotation -= ROTATION_SNAP;
    }
    player.rotation = wrap_degrees(player.rotation);

    player.center += player.velocity * dt;
    // Toroidal wrap snaps to the exact opposite edge
    if player.center.x >= WIDTH {
        player.center.x = 0.0;
    } else if player.center.x <= 0.0 {
        player.center.x = WIDTH;
    }
    if player.center.y >= HEIGHT {
        player.center.y = 0.0;
    } else if player.center.y <= 0.0 {
        player.center.y = HEIGHT;
    }

    player.vertices =
        super::state::derive_player_vertices(player.center, player.rotation, table);
}

fn update_bullet(b: &mut Bullet, dt: f32) {
    if !b.active {
        return;
    }
    b.pos += b.vel * BULLET_SPEED * dt;
    // Hard field bound, no wrapping
    if b.pos.x >= WIDTH || b.pos.x < 0.0 || b.pos.y >= HEIGHT || b.pos.y < 0.0 {
        b.active = false;
    }
}

fn update_particle(p: &mut Particle, dt: f32) {
    if p.life == 0 {
        return;
    }
    p.pos += p.vel * PARTICLE_SPEED * dt;
    p.life -= 1;
}

/// Single pass over the bullet/asteroid grid; a hit spends the bullet,
/// so each pair resolves at most once per frame. A Large rock splits
/// into one Small debris (first free slot, possibly its own); a Small
/// rock respawns in place as a fresh Large at the edge.
fn resolve_bullet_hits(world: &mut World) {
    for bi in 0..MAX_BULLETS {
        if !world.bullets[bi].active {
            continue;
        }
        for ai in 0..MAX_ASTEROIDS {
            if !world.asteroids[ai].active {
                continue;
            }
            if !point_in_polygon(world.bullets[bi].pos, &world.asteroids[ai].vertices) {
                continue;
            }
            world.pending_sound = Some(SoundEffect::Explode);
            world.score += 10;
            let center = world.asteroids[ai].center;
            let size = world.asteroids[ai].size;
            world.emit_particles(10, center);
            world.asteroids[ai].active = false;
            world.bullets[bi].active = false;

            match size {
                AsteroidSize::Large => {
                    asteroid::spawn_debris(
                        &mut world.asteroids,
                        center,
                        &world.table,
                        &mut world.rng,
                    );
                }
                AsteroidSize::Small => {
                    let player_center = world.player.center;
                    asteroid::spawn_edge(
                        &mut world.asteroids[ai],
                        player_center,
                        &mut world.rng,
                    );
                }
                AsteroidSize::Medium => {}
            }
            break;
        }
    }
}
