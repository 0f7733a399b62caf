//! Backend-agnostic scene building
//!
//! The renderer never touches a window or GPU. [`build_scene`] reads the
//! world and produces an ordered list of draw commands; a platform
//! backend replays them with whatever API it has. Keeping this pure
//! makes frame output testable without opening a window.

use glam::Vec2;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameMode, PlayerState, World};

pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
/// White at alpha 50/255, the dim phase of blinking text
pub const FAINT: Color = [1.0, 1.0, 1.0, 50.0 / 255.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line {
        from: Vec2,
        to: Vec2,
        thickness: f32,
        color: Color,
    },
    Outline {
        points: Vec<Vec2>,
        thickness: f32,
        color: Color,
    },
    /// Regular filled polygon, used for the health pips
    Poly {
        center: Vec2,
        sides: u32,
        radius: f32,
        rotation: f32,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
        align: Align,
    },
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub clear: Color,
    pub cmds: Vec<DrawCmd>,
}

/// Cheap per-frame coin flip for blinking UI, deterministic so frame
/// output stays reproducible
fn blink_on(frame: u64) -> bool {
    ((frame as u32).wrapping_mul(2654435761) >> 16) & 1 == 1
}

pub fn build_scene(world: &World, settings: &Settings, fps: Option<u32>) -> Scene {
    let mut scene = Scene {
        clear: BLACK,
        cmds: Vec::with_capacity(64),
    };

    match world.mode {
        GameMode::Menu => {
            let color = if blink_on(world.frame) && !settings.reduced_flicker {
                FAINT
            } else {
                WHITE
            };
            scene.cmds.push(DrawCmd::Text {
                text: "PRESS <ENTER>".into(),
                pos: Vec2::new(WIDTH / 2.0, HEIGHT / 2.0),
                size: 72.0,
                color,
                align: Align::Center,
            });
        }
        GameMode::Playing => {
            push_game(&mut scene, world, settings);
        }
        GameMode::Paused => {
            push_game(&mut scene, world, settings);
            scene.cmds.push(DrawCmd::Text {
                text: "GAME PAUSED".into(),
                pos: Vec2::new(WIDTH / 2.0, HEIGHT / 2.0 - 64.0),
                size: 64.0,
                color: WHITE,
                align: Align::Center,
            });
        }
        GameMode::GameOver => {
            push_game(&mut scene, world, settings);
            scene.cmds.push(DrawCmd::Text {
                text: "GAME OVER".into(),
                pos: Vec2::new(WIDTH / 2.0, HEIGHT / 2.0 - 72.0),
                size: 72.0,
                color: WHITE,
                align: Align::Center,
            });
            scene.cmds.push(DrawCmd::Text {
                text: "PRESS <ENTER> TO CONTINUE".into(),
                pos: Vec2::new(WIDTH / 2.0, HEIGHT / 2.0 + 200.0),
                size: 32.0,
                color: WHITE,
                align: Align::Center,
            });
        }
    }

    if let Some(fps) = fps {
        scene.cmds.push(DrawCmd::Text {
            text: format!("{fps} FPS"),
            pos: Vec2::new(16.0, 16.0),
            size: 24.0,
            color: WHITE,
            align: Align::Left,
        });
    }

    scene
}

fn push_game(scene: &mut Scene, world: &World, settings: &Settings) {
    for b in world.bullets.iter().filter(|b| b.active) {
        scene.cmds.push(DrawCmd::Line {
            from: b.pos,
            to: b.pos - b.vel * BULLET_TRAIL,
            thickness: LINE_THICKNESS,
            color: WHITE,
        });
    }

    if settings.particles {
        for p in world.particles.iter().filter(|p| p.life > 0) {
            // Trail shrinks with remaining life, truncated to pixels
            let len = (10 * p.life / MAX_PART_LIFE) as f32;
            scene.cmds.push(DrawCmd::Line {
                from: p.pos,
                to: p.pos - p.vel * len,
                thickness: LINE_THICKNESS,
                color: WHITE,
            });
        }
    }

    for a in world.asteroids.iter().filter(|a| a.active) {
        scene.cmds.push(DrawCmd::Outline {
            points: a.vertices.to_vec(),
            thickness: LINE_THICKNESS,
            color: WHITE,
        });
    }

    push_player(scene, world, settings);
    push_hud(scene, world);
}

fn push_player(scene: &mut Scene, world: &World, settings: &Settings) {
    let player = &world.player;
    if player.state == PlayerState::Dead {
        return;
    }
    // Immunity reads as flicker unless the player opted out
    if player.state == PlayerState::Immune && !settings.reduced_flicker && blink_on(world.frame) {
        return;
    }
    let [tip, left, right] = player.vertices;
    for (from, to) in [
        (tip, left),
        (tip, right),
        (left, player.center),
        (right, player.center),
    ] {
        scene.cmds.push(DrawCmd::Line {
            from,
            to,
            thickness: LINE_THICKNESS,
            color: WHITE,
        });
    }
}

fn push_hud(scene: &mut Scene, world: &World) {
    for i in 0..world.healths.max(0) {
        scene.cmds.push(DrawCmd::Poly {
            center: Vec2::new(WIDTH - 100.0 + 32.0 * i as f32, HEIGHT - 78.0),
            sides: 3,
            radius: 15.0,
            rotation: 270.0,
            color: WHITE,
        });
    }
    scene.cmds.push(DrawCmd::Text {
        text: format!("{:04}", world.score % 1000),
        pos: Vec2::new(WIDTH - 128.0, HEIGHT - 64.0),
        size: 48.0,
        color: WHITE,
        align: Align::Left,
    });
}
