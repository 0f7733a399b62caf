//! Precomputed direction table for quantized rotations
//!
//! Every rotation-derived unit vector in the sim goes through this table:
//! 72 entries at 5 degree steps, built once at startup.

use glam::Vec2;

use crate::consts::{ROTATION_SNAP, ROTATIONS};
use crate::wrap_degrees;

#[derive(Debug, Clone)]
pub struct TrigTable {
    entries: [Vec2; ROTATIONS],
}

impl TrigTable {
    /// Fill all 72 entries with (cos, sin) of `i * 5` degrees
    pub fn build() -> Self {
        let mut entries = [Vec2::ZERO; ROTATIONS];
        for (i, entry) in entries.iter_mut().enumerate() {
            let rad = ((i as i32 * ROTATION_SNAP) as f32).to_radians();
            *entry = Vec2::new(rad.cos(), rad.sin());
        }
        Self { entries }
    }

    /// Table index for an angle in degrees; always lands in [0, ROTATIONS)
    #[inline]
    pub fn index_for(deg: i32) -> usize {
        (wrap_degrees(deg) / ROTATION_SNAP) as usize % ROTATIONS
    }

    /// Unit vector pointing at `deg` degrees, quantized to the table step
    #[inline]
    pub fn direction(&self, deg: i32) -> Vec2 {
        self.entries[Self::index_for(deg)]
    }

    /// Entry by raw index, used for uniform random directions
    #[inline]
    pub fn entry(&self, index: usize) -> Vec2 {
        self.entries[index % ROTATIONS]
    }
}
