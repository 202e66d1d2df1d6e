//! Canvas-level selection queries built on the collision checks.

use glam::Vec2;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;
use crate::collidable::{PolygonCollidable, SetOfCollidables};
use crate::detection::{FastCheck, check_collidables_intersection, fast_check_collision};
use crate::error::{CollisionError, Result};

/// How a marquee decides which shapes it selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MarqueeMode {
    /// Any shape the marquee touches.
    #[default]
    Touching,
    /// Only shapes whose boundary lies entirely inside the marquee.
    Enclosing,
}

/// Configuration for selection queries.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectionConfig {
    /// Side length of the square probe placed under the pointer.
    pub cursor_size: f32,
    /// Marquee selection rule.
    pub marquee_mode: MarqueeMode,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            cursor_size: 1.0,
            marquee_mode: MarqueeMode::Touching,
        }
    }
}

impl SelectionConfig {
    /// Checks that the configuration describes a usable probe.
    pub fn validate(&self) -> Result<()> {
        if !self.cursor_size.is_finite() || self.cursor_size <= 0.0 {
            return Err(CollisionError::InvalidCursorSize(self.cursor_size));
        }
        Ok(())
    }
}

/// Square probe under the pointer.
pub fn cursor_probe(point: Vec2, config: &SelectionConfig) -> PolygonCollidable {
    PolygonCollidable::create_cursor_sized(point, config.cursor_size)
}

/// Index of the topmost shape under `point`.
///
/// Shapes are ordered back to front, so the last hit wins.
///
/// # Example
///
/// ```
/// use unshape_collision::{SelectionConfig, SetOfPoints, hit_test};
/// use glam::Vec2;
///
/// let a = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
/// let b = [Vec2::new(5.0, -5.0), Vec2::new(5.0, 5.0)];
/// let shapes = [SetOfPoints::new(&a, 2.0), SetOfPoints::new(&b, 2.0)];
/// let config = SelectionConfig::default();
///
/// assert_eq!(hit_test(&shapes, Vec2::new(5.0, 0.0), &config), Some(1));
/// assert_eq!(hit_test(&shapes, Vec2::new(1.0, 0.0), &config), Some(0));
/// assert_eq!(hit_test(&shapes, Vec2::new(1.0, 4.0), &config), None);
/// ```
pub fn hit_test<S>(shapes: &[S], point: Vec2, config: &SelectionConfig) -> Option<usize>
where
    S: SetOfCollidables,
{
    let probe = cursor_probe(point, config);
    let hit = shapes
        .iter()
        .rposition(|shape| check_collidables_intersection(shape, &probe));
    debug!("hit test at {point:?}: {hit:?}");
    hit
}

/// Indices of the shapes selected by a marquee dragged between two corners.
///
/// The corners may be given in any order. Indices are returned in input
/// order.
pub fn marquee_select<S>(
    shapes: &[S],
    corner_a: Vec2,
    corner_b: Vec2,
    config: &SelectionConfig,
) -> Vec<usize>
where
    S: SetOfCollidables,
{
    let marquee = Boundary::new(corner_a.min(corner_b), corner_a.max(corner_b));
    let probe = PolygonCollidable::create_rectangle(marquee.top_left, marquee.bottom_right);

    let selected: Vec<usize> = shapes
        .iter()
        .enumerate()
        .filter(|(_, shape)| match config.marquee_mode {
            MarqueeMode::Touching => check_collidables_intersection(*shape, &probe),
            MarqueeMode::Enclosing => {
                fast_check_collision(&shape.boundary(), &marquee) == FastCheck::Collision
            }
        })
        .map(|(i, _)| i)
        .collect();

    debug!(
        "marquee {:?}..{:?} selected {} of {} shapes",
        marquee.top_left,
        marquee.bottom_right,
        selected.len(),
        shapes.len()
    );
    selected
}

/// Box around the selected shapes, or `None` when nothing is selected.
///
/// Out-of-range indices are ignored.
pub fn selection_boundary<S>(shapes: &[S], indices: &[usize]) -> Option<Boundary>
where
    S: SetOfCollidables,
{
    Boundary::containing(indices.iter().filter_map(|&i| shapes.get(i)))
}
