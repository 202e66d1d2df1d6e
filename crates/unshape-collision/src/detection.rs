//! Fast bounding-box pre-check and Separating Axis Theorem queries.
//!
//! The probe is always a [`PolygonCollidable`]: a marquee rectangle or a
//! cursor square. Shapes are anything implementing [`SetOfCollidables`].

use glam::Vec2;
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;
use crate::collidable::{Collidable, PolygonCollidable, SetOfCollidables};

/// Outcome of the axis-aligned pre-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FastCheck {
    /// The boxes are disjoint; nothing inside them can touch.
    NoCollision,
    /// The boxes overlap; a full SAT test is needed.
    Uncertain,
    /// The first box is nested inside the second.
    Collision,
}

/// Compares two bounding boxes.
///
/// Returns [`FastCheck::Collision`] only when `a` is nested inside `b`. The
/// reverse nesting is reported as [`FastCheck::Uncertain`]: a probe sitting
/// inside a shape's box may still be inside one of its holes.
///
/// # Example
///
/// ```
/// use unshape_collision::{Boundary, FastCheck, fast_check_collision};
/// use glam::Vec2;
///
/// let small = Boundary::new(Vec2::splat(2.0), Vec2::splat(4.0));
/// let large = Boundary::new(Vec2::ZERO, Vec2::splat(10.0));
///
/// assert_eq!(fast_check_collision(&small, &large), FastCheck::Collision);
/// assert_eq!(fast_check_collision(&large, &small), FastCheck::Uncertain);
/// ```
pub fn fast_check_collision(a: &Boundary, b: &Boundary) -> FastCheck {
    if a.is_disjoint(b) {
        FastCheck::NoCollision
    } else if a.is_inside(b) {
        FastCheck::Collision
    } else {
        FastCheck::Uncertain
    }
}

/// Returns true if `probe` hits `shape`.
///
/// 1. The shape's box is fast-checked against the probe's box; a disjoint
///    pair misses and a shape nested inside the probe hits.
/// 2. A probe lying entirely inside any negative piece misses. Holes are
///    checked before the filled pieces.
/// 3. Otherwise the probe hits if it overlaps any positive piece.
pub fn check_collidables_intersection<S>(shape: &S, probe: &PolygonCollidable) -> bool
where
    S: SetOfCollidables + ?Sized,
{
    let probe_boundary = probe.boundary();
    match fast_check_collision(&shape.boundary(), &probe_boundary) {
        FastCheck::NoCollision => return false,
        FastCheck::Collision => {
            trace!("shape nested inside probe {probe_boundary:?}");
            return true;
        }
        FastCheck::Uncertain => {}
    }

    let mut axes = Vec::new();

    for hole in shape.negative_collidables() {
        if selection_inside(probe, &probe_boundary, &hole, &mut axes) {
            trace!("probe {probe_boundary:?} excluded by hole");
            return false;
        }
    }

    shape
        .collidables()
        .iter()
        .any(|piece| intersects(piece, probe, &probe_boundary, &mut axes))
}

/// Separating Axis Theorem test between one piece and a probe.
///
/// Axes come from the piece first, then from the probe. When no axis is
/// available (a degenerate polygon against a degenerate probe) separation
/// cannot be proven and the result is `true`.
///
/// # Example
///
/// ```
/// use unshape_collision::{PolygonCollidable, check_intersection};
/// use glam::Vec2;
///
/// let rect = PolygonCollidable::create_rectangle(Vec2::ZERO, Vec2::splat(10.0));
/// let touching = PolygonCollidable::create_rectangle(Vec2::splat(9.0), Vec2::splat(20.0));
/// let apart = PolygonCollidable::create_rectangle(Vec2::splat(11.0), Vec2::splat(20.0));
///
/// assert!(check_intersection(&rect, &touching));
/// assert!(!check_intersection(&rect, &apart));
/// ```
pub fn check_intersection<C>(collidable: &C, probe: &PolygonCollidable) -> bool
where
    C: Collidable + ?Sized,
{
    let mut axes = Vec::new();
    intersects(collidable, probe, &probe.boundary(), &mut axes)
}

/// Returns true if `probe` projects inside `collidable` on every candidate axis.
///
/// Used to decide whether a probe sits in a hole.
pub fn check_if_selection_is_inside<C>(probe: &PolygonCollidable, collidable: &C) -> bool
where
    C: Collidable + ?Sized,
{
    let mut axes = Vec::new();
    selection_inside(probe, &probe.boundary(), collidable, &mut axes)
}

fn gather_axes<C>(
    collidable: &C,
    probe: &PolygonCollidable,
    probe_boundary: &Boundary,
    axes: &mut Vec<Vec2>,
) where
    C: Collidable + ?Sized,
{
    axes.clear();
    collidable.extend_normals(probe_boundary, axes);
    probe.extend_normals(probe_boundary, axes);
}

fn intersects<C>(
    collidable: &C,
    probe: &PolygonCollidable,
    probe_boundary: &Boundary,
    axes: &mut Vec<Vec2>,
) -> bool
where
    C: Collidable + ?Sized,
{
    gather_axes(collidable, probe, probe_boundary, axes);
    axes.iter().all(|&axis| {
        collidable
            .linear_projection(axis)
            .overlaps(&probe.linear_projection(axis))
    })
}

fn selection_inside<C>(
    probe: &PolygonCollidable,
    probe_boundary: &Boundary,
    collidable: &C,
    axes: &mut Vec<Vec2>,
) -> bool
where
    C: Collidable + ?Sized,
{
    gather_axes(collidable, probe, probe_boundary, axes);
    axes.iter().all(|&axis| {
        probe
            .linear_projection(axis)
            .is_inside(&collidable.linear_projection(axis))
    })
}
