//! Axis projection and interval arithmetic for the Separating Axis Theorem.
//!
//! Axes are never normalized here. Every producer scales its radial extents
//! by the axis length instead, so all projections onto one axis share the
//! same units.

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coordinate used for "empty" boundaries and projections.
///
/// Far enough outside any canvas that comparisons against it never report a
/// spurious overlap with real geometry.
pub const EMPTY_SENTINEL: f32 = -1_000_000.0;

/// A closed scalar interval `[start, end]` on some axis.
///
/// Producers keep `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearProjection {
    /// Lower end of the interval.
    pub start: f32,
    /// Upper end of the interval.
    pub end: f32,
}

impl LinearProjection {
    /// Projection of an empty point set.
    pub const EMPTY: Self = Self {
        start: EMPTY_SENTINEL,
        end: EMPTY_SENTINEL,
    };

    /// Creates a projection from its two ends.
    #[inline]
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Creates the interval `center ± offset`.
    #[inline]
    pub fn around(center: f32, offset: f32) -> Self {
        Self {
            start: center - offset,
            end: center + offset,
        }
    }

    /// Smallest interval containing every projection.
    ///
    /// Returns `{0, 0}` when there is nothing to contain.
    pub fn containing(projections: impl IntoIterator<Item = LinearProjection>) -> Self {
        projections
            .into_iter()
            .reduce(|acc, p| Self {
                start: acc.start.min(p.start),
                end: acc.end.max(p.end),
            })
            .unwrap_or(Self::new(0.0, 0.0))
    }

    /// Returns true if the two intervals share at least one point.
    ///
    /// Touching endpoints count as overlap. The result does not depend on
    /// argument order.
    #[inline]
    pub fn overlaps(&self, other: &LinearProjection) -> bool {
        let (first, second) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        first.end >= second.start
    }

    /// Returns true if `self` lies entirely within `outer`.
    #[inline]
    pub fn is_inside(&self, outer: &LinearProjection) -> bool {
        outer.start <= self.start && self.end <= outer.end
    }

    /// Length of the interval.
    #[inline]
    pub fn length(&self) -> f32 {
        self.end - self.start
    }
}

/// Projects every point onto `axis` and returns the covered interval.
///
/// An empty slice yields [`LinearProjection::EMPTY`].
pub fn linear_projection(points: &[Vec2], axis: Vec2) -> LinearProjection {
    let Some((first, rest)) = points.split_first() else {
        return LinearProjection::EMPTY;
    };

    let mut min = first.dot(axis);
    let mut max = min;
    for p in rest {
        let d = p.dot(axis);
        if d < min {
            min = d;
        } else if d > max {
            max = d;
        }
    }

    LinearProjection::new(min, max)
}

/// Projection of a single point onto `axis`.
#[inline]
pub fn point_projection(point: Vec2, axis: Vec2) -> f32 {
    point.dot(axis)
}

/// Extent of a radius along a (possibly non-unit) axis.
#[inline]
pub fn projection_offset(radius: f32, axis: Vec2) -> f32 {
    radius * axis.length()
}

/// Fractional position of `new_location` along `reference -> previous_location`.
///
/// Returns 0 at `reference` and 1 at `previous_location`. When the two
/// defining points coincide there is no axis and the result is 0.
///
/// # Example
///
/// ```
/// use unshape_collision::scale_from_points;
/// use glam::Vec2;
///
/// let scale = scale_from_points(Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(25.0, 3.0));
/// assert_eq!(scale, 2.5);
/// ```
pub fn scale_from_points(reference: Vec2, previous_location: Vec2, new_location: Vec2) -> f32 {
    let axis = parallel_axis(reference, previous_location);
    let length_sq = axis.length_squared();
    if length_sq == 0.0 {
        return 0.0;
    }
    (new_location - reference).dot(axis) / length_sq
}

/// Axis running from `p1` to `p2`.
#[inline]
pub fn parallel_axis(p1: Vec2, p2: Vec2) -> Vec2 {
    p2 - p1
}

/// Axis perpendicular to `p1 -> p2` (rotated by 90 degrees, not normalized).
#[inline]
pub fn normal_axis(p1: Vec2, p2: Vec2) -> Vec2 {
    Vec2::new(p1.y - p2.y, p2.x - p1.x)
}
