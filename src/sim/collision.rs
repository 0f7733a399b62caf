//! Point-in-polygon collision tests
//!
//! Brute force over small fixed pools. The predicate is the even-odd
//! ray crossing test with closed edges `V[i]..V[(i + 1) % N]`.

use glam::Vec2;

use super::state::{Asteroid, Player, PlayerState};

/// Even-odd test: does `p` lie inside the polygon `vertices`?
pub fn point_in_polygon(p: Vec2, vertices: &[Vec2]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (vi, vj) = (vertices[i], vertices[j]);
        if (vi.y > p.y) != (vj.y > p.y)
            && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Does any of the player's three vertices sit inside an active asteroid?
/// Immunity short-circuits the whole scan.
pub fn player_hits_asteroid(player: &Player, asteroids: &[Asteroid]) -> bool {
    if player.state == PlayerState::Immune {
        return false;
    }
    player.vertices.iter().any(|&v| {
        asteroids
            .iter()
            .filter(|a| a.active)
            .any(|a| point_in_polygon(v, &a.vertices))
    })
}
