//! Vector Rocks - a toroidal-field asteroids arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, collision, game modes)
//! - `render`: Backend-agnostic scene building (lines, outlines, text)
//! - `platform`: Presentation/input backend seam and the frame loop
//! - `audio`: Sound request dispatch with volume control
//! - `settings`: User preferences

pub mod audio;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Visible field size in pixels
    pub const WIDTH: f32 = 1200.0;
    pub const HEIGHT: f32 = 700.0;

    /// Asteroids live up to this far beyond the field before respawning
    pub const SPAWN_MARGIN: f32 = 200.0;
    pub const SPAWN_LEFT: f32 = -SPAWN_MARGIN;
    pub const SPAWN_RIGHT: f32 = WIDTH + SPAWN_MARGIN;
    pub const SPAWN_TOP: f32 = -SPAWN_MARGIN;
    pub const SPAWN_BOTTOM: f32 = HEIGHT + SPAWN_MARGIN;

    /// Player ship circumradius
    pub const PLAYER_RADIUS: f32 = 15.0;
    /// Frames of post-hit immunity
    pub const IMMUNE_DURATION: i32 = 60;
    pub const MAX_HEALTHS: i32 = 3;

    /// Rotation quantization: 5 degree steps, 72 table entries
    pub const ROTATION_SNAP: i32 = 5;
    pub const ROTATIONS: usize = (360 / ROTATION_SNAP) as usize;

    /// Entity pool capacities
    pub const MAX_BULLETS: usize = 5;
    pub const MAX_ASTEROIDS: usize = 20;
    pub const MAX_PARTICLES: usize = 100;
    /// Asteroids concurrently active on the field
    pub const INITIAL_ASTEROIDS: usize = 10;

    pub const BULLET_SPEED: f32 = 250.0;
    /// Rendered bullet trail length in pixels
    pub const BULLET_TRAIL: f32 = 15.0;

    /// Asteroid polygon radius bounds; debris shrinks the upper bound
    pub const MIN_R: i32 = 30;
    pub const MAX_R: i32 = 40;
    pub const DEBRIS_SHRINK: i32 = 20;
    /// Asteroid speed bounds in pixels per second
    pub const MIN_SPEED: i32 = 100;
    pub const MAX_SPEED: i32 = 200;
    /// Vertices per asteroid polygon
    pub const ASTEROID_VERTICES: usize = 6;

    /// Particle lifetime in frames
    pub const MAX_PART_LIFE: i32 = 100;
    pub const PARTICLE_SPEED: f32 = 100.0;

    /// Outline stroke width
    pub const LINE_THICKNESS: f32 = 2.0;

    /// Frame rate the backend paces to
    pub const TARGET_FPS: u32 = 60;
    pub const FRAME_DT: f32 = 1.0 / TARGET_FPS as f32;
}

/// Normalize integer degrees into [0, 360) via double modulo
#[inline]
pub fn wrap_degrees(deg: i32) -> i32 {
    ((deg % 360) + 360) % 360
}

#[cfg(test)]
mod tests {
    use super::wrap_degrees;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0), 0);
        assert_eq!(wrap_degrees(360), 0);
        assert_eq!(wrap_degrees(-5), 355);
        assert_eq!(wrap_degrees(725), 5);
        assert_eq!(wrap_degrees(-725), 355);
    }
}
