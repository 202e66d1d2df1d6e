use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Collidable;
use crate::boundary::Boundary;
use crate::projection::{
    LinearProjection, normal_axis, parallel_axis, point_projection, projection_offset,
};

/// A stroked segment with round caps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineCollidable {
    /// First endpoint.
    pub point1: Vec2,
    /// Second endpoint.
    pub point2: Vec2,
    /// Stroke width.
    pub thickness: f32,
}

impl LineCollidable {
    /// Creates a stroked segment.
    pub fn new(point1: Vec2, point2: Vec2, thickness: f32) -> Self {
        Self {
            point1,
            point2,
            thickness,
        }
    }
}

impl Collidable for LineCollidable {
    fn extend_normals(&self, other: &Boundary, out: &mut Vec<Vec2>) {
        out.push(parallel_axis(self.point1, self.point2));
        out.push(normal_axis(self.point1, self.point2));
        if self.thickness > 0.0 {
            // Caps are round; aim from each endpoint at the other shape
            out.push(parallel_axis(self.point1, other.center));
            out.push(parallel_axis(self.point2, other.center));
        }
    }

    #[inline]
    fn linear_projection(&self, axis: Vec2) -> LinearProjection {
        let a = point_projection(self.point1, axis);
        let b = point_projection(self.point2, axis);
        let offset = projection_offset(self.thickness / 2.0, axis);
        LinearProjection::new(a.min(b) - offset, a.max(b) + offset)
    }
}
