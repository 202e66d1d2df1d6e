use glam::Vec2;

use crate::boundary::Boundary;
use crate::collidable::{CircleCollidable, CollidableShape, LineCollidable, SetOfCollidables};

/// A stroked polyline viewed as collidable pieces.
///
/// Each consecutive pair of points becomes a [`LineCollidable`]. A single
/// point is a dot and becomes a [`CircleCollidable`] of half the thickness.
/// A stroke has no holes.
#[derive(Debug, Clone, Copy)]
pub struct SetOfPoints<'a> {
    points: &'a [Vec2],
    thickness: f32,
}

impl<'a> SetOfPoints<'a> {
    /// Wraps a polyline and its stroke width.
    pub fn new(points: &'a [Vec2], thickness: f32) -> Self {
        Self { points, thickness }
    }

    /// The polyline points.
    pub fn points(&self) -> &'a [Vec2] {
        self.points
    }

    /// The stroke width.
    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl SetOfCollidables for SetOfPoints<'_> {
    fn collidables(&self) -> Vec<CollidableShape> {
        if let [point] = self.points {
            return vec![CircleCollidable::new(*point, self.thickness / 2.0).into()];
        }
        self.points
            .windows(2)
            .map(|pair| LineCollidable::new(pair[0], pair[1], self.thickness).into())
            .collect()
    }

    fn boundary(&self) -> Boundary {
        Boundary::from_points(self.points).expanded(self.thickness / 2.0)
    }
}
