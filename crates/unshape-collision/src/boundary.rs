use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collidable::SetOfCollidables;
use crate::projection::EMPTY_SENTINEL;

/// Axis-aligned bounding box of a shape or probe.
///
/// `top_left` holds the minimum coordinates and `bottom_right` the maximum
/// (canvas y grows downward). `center` is stored separately; boxes built by
/// this crate put it at the midpoint of the corners, but shape models may
/// supply their own.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Boundary {
    /// Minimum corner.
    pub top_left: Vec2,
    /// Maximum corner.
    pub bottom_right: Vec2,
    /// Reference point used to aim axes at this box.
    pub center: Vec2,
}

impl Boundary {
    /// Boundary of an empty point set.
    pub const EMPTY: Self = Self {
        top_left: Vec2::splat(EMPTY_SENTINEL),
        bottom_right: Vec2::splat(EMPTY_SENTINEL),
        center: Vec2::splat(EMPTY_SENTINEL),
    };

    /// Creates a boundary from its corners, centered between them.
    pub fn new(top_left: Vec2, bottom_right: Vec2) -> Self {
        Self {
            top_left,
            bottom_right,
            center: (top_left + bottom_right) * 0.5,
        }
    }

    /// Creates a boundary with an explicit center.
    pub fn with_center(top_left: Vec2, bottom_right: Vec2, center: Vec2) -> Self {
        Self {
            top_left,
            bottom_right,
            center,
        }
    }

    /// Component-wise min/max over a set of points.
    ///
    /// Zero points yields [`Boundary::EMPTY`], which callers must treat as
    /// "no box" rather than a real location.
    ///
    /// # Example
    ///
    /// ```
    /// use unshape_collision::Boundary;
    /// use glam::Vec2;
    ///
    /// let b = Boundary::from_points(&[Vec2::new(4.0, -1.0), Vec2::new(0.0, 3.0)]);
    /// assert_eq!(b.top_left, Vec2::new(0.0, -1.0));
    /// assert_eq!(b.bottom_right, Vec2::new(4.0, 3.0));
    /// assert_eq!(b.center, Vec2::new(2.0, 1.0));
    /// ```
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some((&first, rest)) = points.split_first() else {
            return Self::EMPTY;
        };

        let (min, max) = rest
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Self::new(min, max)
    }

    /// Smallest box enclosing the boundaries of every set.
    ///
    /// Returns `None` for an empty list, which selection overlays use to hide
    /// themselves when nothing is selected.
    pub fn containing<'a, S>(sets: impl IntoIterator<Item = &'a S>) -> Option<Self>
    where
        S: SetOfCollidables + ?Sized + 'a,
    {
        sets.into_iter()
            .map(|set| set.boundary())
            .reduce(|acc, b| {
                Self::new(
                    acc.top_left.min(b.top_left),
                    acc.bottom_right.max(b.bottom_right),
                )
            })
            .map(|b| Self::new(b.top_left, b.bottom_right))
    }

    /// Grows the box by `margin` on every side. The center is kept.
    ///
    /// The empty sentinel is returned unchanged.
    pub fn expanded(&self, margin: f32) -> Self {
        if self.is_empty_sentinel() {
            return *self;
        }
        Self {
            top_left: self.top_left - Vec2::splat(margin),
            bottom_right: self.bottom_right + Vec2::splat(margin),
            center: self.center,
        }
    }

    /// Returns true if this is the box produced for an empty point set.
    pub fn is_empty_sentinel(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Size of the box.
    pub fn size(&self) -> Vec2 {
        self.bottom_right - self.top_left
    }

    /// The four corners, clockwise from `top_left` on a y-down canvas.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.top_left,
            Vec2::new(self.bottom_right.x, self.top_left.y),
            self.bottom_right,
            Vec2::new(self.top_left.x, self.bottom_right.y),
        ]
    }

    /// Returns true if `self` lies entirely within `outer` (shared edges allowed).
    pub fn is_inside(&self, outer: &Boundary) -> bool {
        outer.top_left.x <= self.top_left.x
            && self.bottom_right.x <= outer.bottom_right.x
            && outer.top_left.y <= self.top_left.y
            && self.bottom_right.y <= outer.bottom_right.y
    }

    /// Returns true if the boxes are disjoint on the x-axis or the y-axis.
    pub fn is_disjoint(&self, other: &Boundary) -> bool {
        self.bottom_right.x < other.top_left.x
            || other.bottom_right.x < self.top_left.x
            || self.bottom_right.y < other.top_left.y
            || other.bottom_right.y < self.top_left.y
    }
}
