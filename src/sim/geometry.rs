//! Axis-aligned box geometry
//!
//! Boxes use screen-style coordinates: `pos` is the top-left corner and y
//! grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Same box moved to a new top-left corner
    pub fn with_position(&self, x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: self.size,
        }
    }

    /// Same box shifted by an offset
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            pos: self.pos + Vec2::new(dx, dy),
            size: self.size,
        }
    }
}

/// Strict overlap test; boxes that only share an edge do not collide
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}
