use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Collidable;
use crate::boundary::Boundary;
use crate::projection::{
    LinearProjection, parallel_axis, point_projection, projection_offset,
};

/// Sampled axis directions in the ellipse's own frame.
///
/// Exact SAT against an ellipse needs the tangent point for every candidate
/// axis. Instead the ellipse offers a dense fan around both principal
/// directions; together with the axis aimed at the other shape this keeps
/// misses along the diagonals small enough for pointer selection.
pub const ELLIPSE_AXIS_BANK: [Vec2; 14] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 0.1),
    Vec2::new(1.0, -0.1),
    Vec2::new(1.0, 0.25),
    Vec2::new(1.0, -0.25),
    Vec2::new(1.0, 0.5),
    Vec2::new(1.0, -0.5),
    Vec2::new(0.1, 1.0),
    Vec2::new(-0.1, 1.0),
    Vec2::new(0.25, 1.0),
    Vec2::new(-0.25, 1.0),
    Vec2::new(0.5, 1.0),
    Vec2::new(-0.5, 1.0),
];

/// A filled ellipse rotated by `angle` radians about its center.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EllipseCollidable {
    /// Center of the ellipse.
    pub center: Vec2,
    /// Semi-axis along the ellipse's local x direction.
    pub radius_x: f32,
    /// Semi-axis along the ellipse's local y direction.
    pub radius_y: f32,
    /// Rotation in radians.
    pub angle: f32,
}

impl EllipseCollidable {
    /// Creates an ellipse.
    pub fn new(center: Vec2, radius_x: f32, radius_y: f32, angle: f32) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            angle,
        }
    }

    /// Half-width of the ellipse along a direction at `angle` (world frame).
    fn radius_at(&self, angle: f32) -> f32 {
        let (sin, cos) = (angle - self.angle).sin_cos();
        (self.radius_x * self.radius_x * cos * cos + self.radius_y * self.radius_y * sin * sin)
            .sqrt()
    }
}

impl Collidable for EllipseCollidable {
    fn extend_normals(&self, other: &Boundary, out: &mut Vec<Vec2>) {
        let rotation = Vec2::from_angle(self.angle);
        out.extend(ELLIPSE_AXIS_BANK.iter().map(|&axis| rotation.rotate(axis)));
        out.push(parallel_axis(self.center, other.center));
    }

    fn linear_projection(&self, axis: Vec2) -> LinearProjection {
        let angle = if axis.x == 0.0 {
            FRAC_PI_2
        } else {
            (axis.y / axis.x).atan()
        };
        LinearProjection::around(
            point_projection(self.center, axis),
            projection_offset(self.radius_at(angle), axis),
        )
    }
}
