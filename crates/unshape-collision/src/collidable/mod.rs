//! Convex shape pieces that take part in Separating Axis Theorem tests.
//!
//! Every piece can list candidate separating axes and project itself onto
//! an arbitrary axis. Shape models decompose themselves into these pieces
//! fresh for every query via [`SetOfCollidables`].

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;
use crate::projection::LinearProjection;

mod circle;
mod ellipse;
mod line;
mod polygon;

pub use circle::CircleCollidable;
pub use ellipse::{ELLIPSE_AXIS_BANK, EllipseCollidable};
pub use line::LineCollidable;
pub use polygon::PolygonCollidable;

/// A convex piece that can be tested with the Separating Axis Theorem.
pub trait Collidable {
    /// Appends candidate separating axes to `out`.
    ///
    /// `other` is the boundary of the shape being tested against. Curved
    /// pieces aim extra axes at its center.
    fn extend_normals(&self, other: &Boundary, out: &mut Vec<Vec2>);

    /// Projects the piece onto `axis`, which need not be unit length.
    fn linear_projection(&self, axis: Vec2) -> LinearProjection;

    /// Candidate separating axes against `other`.
    fn normals(&self, other: &Boundary) -> Vec<Vec2> {
        let mut out = Vec::new();
        self.extend_normals(other, &mut out);
        out
    }
}

/// A shape that decomposes into collidable pieces.
///
/// A probe hits the shape when it overlaps any positive piece, unless it
/// lies entirely inside one of the negative pieces (an unfilled interior).
pub trait SetOfCollidables {
    /// Pieces the probe must overlap to register a hit.
    fn collidables(&self) -> Vec<CollidableShape>;

    /// Holes that exclude a probe sitting entirely inside them.
    fn negative_collidables(&self) -> Vec<CollidableShape> {
        Vec::new()
    }

    /// Axis-aligned bounds of the whole shape.
    fn boundary(&self) -> Boundary;
}

impl<T: SetOfCollidables + ?Sized> SetOfCollidables for &T {
    fn collidables(&self) -> Vec<CollidableShape> {
        (**self).collidables()
    }

    fn negative_collidables(&self) -> Vec<CollidableShape> {
        (**self).negative_collidables()
    }

    fn boundary(&self) -> Boundary {
        (**self).boundary()
    }
}

impl<T: SetOfCollidables + ?Sized> SetOfCollidables for Box<T> {
    fn collidables(&self) -> Vec<CollidableShape> {
        (**self).collidables()
    }

    fn negative_collidables(&self) -> Vec<CollidableShape> {
        (**self).negative_collidables()
    }

    fn boundary(&self) -> Boundary {
        (**self).boundary()
    }
}

/// Any collidable piece.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CollidableShape {
    /// Disc.
    Circle(CircleCollidable),
    /// Rotated ellipse.
    Ellipse(EllipseCollidable),
    /// Segment with a stroke width.
    Line(LineCollidable),
    /// Closed convex polygon.
    Polygon(PolygonCollidable),
}

impl Collidable for CollidableShape {
    fn extend_normals(&self, other: &Boundary, out: &mut Vec<Vec2>) {
        match self {
            CollidableShape::Circle(c) => c.extend_normals(other, out),
            CollidableShape::Ellipse(e) => e.extend_normals(other, out),
            CollidableShape::Line(l) => l.extend_normals(other, out),
            CollidableShape::Polygon(p) => p.extend_normals(other, out),
        }
    }

    #[inline]
    fn linear_projection(&self, axis: Vec2) -> LinearProjection {
        match self {
            CollidableShape::Circle(c) => c.linear_projection(axis),
            CollidableShape::Ellipse(e) => e.linear_projection(axis),
            CollidableShape::Line(l) => l.linear_projection(axis),
            CollidableShape::Polygon(p) => p.linear_projection(axis),
        }
    }
}

impl From<CircleCollidable> for CollidableShape {
    fn from(c: CircleCollidable) -> Self {
        CollidableShape::Circle(c)
    }
}

impl From<EllipseCollidable> for CollidableShape {
    fn from(e: EllipseCollidable) -> Self {
        CollidableShape::Ellipse(e)
    }
}

impl From<LineCollidable> for CollidableShape {
    fn from(l: LineCollidable) -> Self {
        CollidableShape::Line(l)
    }
}

impl From<PolygonCollidable> for CollidableShape {
    fn from(p: PolygonCollidable) -> Self {
        CollidableShape::Polygon(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_delegates_projection() {
        let circle = CircleCollidable::new(Vec2::new(1.0, 0.0), 2.0);
        let shape = CollidableShape::from(circle.clone());

        assert_eq!(
            shape.linear_projection(Vec2::X),
            circle.linear_projection(Vec2::X)
        );
    }

    #[test]
    fn test_shape_delegates_normals() {
        let rect = PolygonCollidable::create_rectangle(Vec2::ZERO, Vec2::splat(4.0));
        let shape = CollidableShape::from(rect.clone());
        let other = Boundary::new(Vec2::splat(10.0), Vec2::splat(12.0));

        assert_eq!(shape.normals(&other), rect.normals(&other));
        assert_eq!(shape.normals(&other).len(), 4);
    }
}
