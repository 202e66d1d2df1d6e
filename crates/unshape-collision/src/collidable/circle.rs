use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Collidable;
use crate::boundary::Boundary;
use crate::projection::{
    LinearProjection, parallel_axis, point_projection, projection_offset,
};

/// A filled disc.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CircleCollidable {
    /// Center of the disc.
    pub center: Vec2,
    /// Radius of the disc.
    pub radius: f32,
}

impl CircleCollidable {
    /// Creates a disc.
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Collidable for CircleCollidable {
    /// A single axis from the center toward `other`'s center.
    ///
    /// The disc projects to `radius` along every direction, so the only axis
    /// it can contribute is the one pointing at the other shape.
    fn extend_normals(&self, other: &Boundary, out: &mut Vec<Vec2>) {
        out.push(parallel_axis(self.center, other.center));
    }

    #[inline]
    fn linear_projection(&self, axis: Vec2) -> LinearProjection {
        LinearProjection::around(
            point_projection(self.center, axis),
            projection_offset(self.radius, axis),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection() {
        let circle = CircleCollidable::new(Vec2::ZERO, 2.0);
        assert_eq!(
            circle.linear_projection(Vec2::X),
            LinearProjection::new(-2.0, 2.0)
        );
    }

    #[test]
    fn test_projection_non_unit_axis() {
        let circle = CircleCollidable::new(Vec2::new(1.0, 1.0), 1.0);
        // |(3, 4)| = 5, center projects to 7
        assert_eq!(
            circle.linear_projection(Vec2::new(3.0, 4.0)),
            LinearProjection::new(2.0, 12.0)
        );
    }

    #[test]
    fn test_single_normal_toward_other() {
        let circle = CircleCollidable::new(Vec2::new(1.0, 1.0), 3.0);
        let other = Boundary::new(Vec2::new(4.0, 4.0), Vec2::new(6.0, 8.0));

        assert_eq!(circle.normals(&other), vec![Vec2::new(4.0, 5.0)]);
    }
}
