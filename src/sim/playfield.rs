//! Playfield rectangle
//!
//! All clamping, bounds tests and edge spawn points are computed relative to
//! a `Playfield`, never against hard-coded screen dimensions.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the four playfield edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// Axis-aligned playfield from (0,0) to (width,height)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inclusive containment test, grown by `margin` on every side
    pub fn contains_with_margin(&self, pos: Vec2, margin: f32) -> bool {
        pos.x >= -margin
            && pos.x <= self.width + margin
            && pos.y >= -margin
            && pos.y <= self.height + margin
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        self.contains_with_margin(pos, 0.0)
    }

    /// Keep a body of diameter `extent` fully inside the playfield
    pub fn clamp_body(&self, pos: Vec2, extent: f32) -> Vec2 {
        let half = extent / 2.0;
        Vec2::new(
            pos.x.clamp(half, (self.width - half).max(half)),
            pos.y.clamp(half, (self.height - half).max(half)),
        )
    }

    /// A point `margin` units outside `edge`, uniformly placed along it
    pub fn point_outside(&self, edge: Edge, margin: f32, rng: &mut impl Rng) -> Vec2 {
        match edge {
            Edge::Top => Vec2::new(rng.random_range(0.0..self.width), -margin),
            Edge::Right => Vec2::new(self.width + margin, rng.random_range(0.0..self.height)),
            Edge::Bottom => Vec2::new(rng.random_range(0.0..self.width), self.height + margin),
            Edge::Left => Vec2::new(-margin, rng.random_range(0.0..self.height)),
        }
    }

    /// Pick an edge uniformly, then a point outside it
    pub fn random_edge_point(&self, margin: f32, rng: &mut impl Rng) -> Vec2 {
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        self.point_outside(edge, margin, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_center_and_contains() {
        let field = Playfield::new(800.0, 600.0);
        assert_eq!(field.center(), Vec2::new(400.0, 300.0));
        assert!(field.contains(Vec2::new(0.0, 600.0)));
        assert!(!field.contains(Vec2::new(-0.1, 10.0)));
        assert!(field.contains_with_margin(Vec2::new(-15.0, 610.0), 20.0));
    }

    #[test]
    fn test_clamp_body_keeps_extent_inside() {
        let field = Playfield::new(800.0, 600.0);
        assert_eq!(field.clamp_body(Vec2::new(-50.0, 900.0), 30.0), Vec2::new(15.0, 585.0));
    }

    #[test]
    fn test_edge_points_are_outside_by_margin() {
        let field = Playfield::new(800.0, 600.0);
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let p = field.random_edge_point(30.0, &mut rng);
            assert!(!field.contains(p), "{p:?} should be outside");
            let on_margin = p.x == -30.0 || p.x == 830.0 || p.y == -30.0 || p.y == 630.0;
            assert!(on_margin, "{p:?} should sit exactly on the margin line");
        }
    }
}
