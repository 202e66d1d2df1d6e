use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Collidable;
use crate::boundary::Boundary;
use crate::error::{CollisionError, Result};
use crate::projection::{LinearProjection, linear_projection, normal_axis};

/// A closed convex polygon. The last vertex connects back to the first.
///
/// Also used for selection probes, see [`PolygonCollidable::create_rectangle`]
/// and [`PolygonCollidable::create_cursor`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonCollidable {
    /// Vertices in order.
    pub points: Vec<Vec2>,
}

impl PolygonCollidable {
    /// Creates a polygon from ordered vertices.
    ///
    /// Fewer than three vertices are accepted; such a polygon offers no
    /// separating axis.
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Creates a polygon, rejecting degenerate or non-finite input.
    pub fn try_new(points: Vec<Vec2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(CollisionError::DegeneratePolygon {
                vertices: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(CollisionError::NonFiniteCoordinate { index });
        }
        Ok(Self { points })
    }

    /// Axis-aligned rectangle from two opposite corners.
    ///
    /// # Example
    ///
    /// ```
    /// use unshape_collision::{Collidable, LinearProjection, PolygonCollidable};
    /// use glam::Vec2;
    ///
    /// let rect = PolygonCollidable::create_rectangle(Vec2::ZERO, Vec2::new(10.0, 10.0));
    /// assert_eq!(rect.linear_projection(Vec2::X), LinearProjection::new(0.0, 10.0));
    /// ```
    pub fn create_rectangle(top_left: Vec2, bottom_right: Vec2) -> Self {
        Self::new(Boundary::new(top_left, bottom_right).corners().to_vec())
    }

    /// A 1x1 square centered on a pointer position.
    pub fn create_cursor(center: Vec2) -> Self {
        Self::create_cursor_sized(center, 1.0)
    }

    /// A square of side `size` centered on a pointer position.
    pub fn create_cursor_sized(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self::create_rectangle(center - half, center + half)
    }

    /// Bounding box of the vertices.
    pub fn boundary(&self) -> Boundary {
        Boundary::from_points(&self.points)
    }
}

impl Collidable for PolygonCollidable {
    /// One perpendicular axis per edge, or nothing below three vertices.
    fn extend_normals(&self, _other: &Boundary, out: &mut Vec<Vec2>) {
        let n = self.points.len();
        if n < 3 {
            return;
        }
        out.extend(
            (0..n).map(|i| normal_axis(self.points[i], self.points[(i + 1) % n])),
        );
    }

    #[inline]
    fn linear_projection(&self, axis: Vec2) -> LinearProjection {
        linear_projection(&self.points, axis)
    }
}
