//! Collision detection for selecting 2D vector shapes.
//!
//! Decides whether a selection probe (a marquee rectangle or a single-point
//! cursor) touches a shape on the canvas, honoring unfilled interiors:
//!
//! - [`LinearProjection`] - scalar interval of a shape projected onto an axis
//! - [`Boundary`] - axis-aligned bounding box used by the fast pre-check
//! - [`CircleCollidable`] / [`EllipseCollidable`] / [`LineCollidable`] /
//!   [`PolygonCollidable`] - convex pieces implementing [`Collidable`]
//! - [`SetOfPoints`] - converts a thick polyline into line and circle pieces
//! - [`check_collidables_intersection`] - fast check plus Separating Axis
//!   Theorem over a [`SetOfCollidables`]
//! - [`hit_test`] / [`marquee_select`] - canvas-level selection queries
//!
//! Every query is a pure function over the geometry passed in. Degenerate
//! input never fails; it produces the sentinel results documented on each
//! function (see [`EMPTY_SENTINEL`]).
//!
//! # Example
//!
//! ```
//! use unshape_collision::{PolygonCollidable, SetOfPoints, check_collidables_intersection};
//! use glam::Vec2;
//!
//! let points = [Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)];
//! let stroke = SetOfPoints::new(&points, 4.0);
//!
//! let on_stroke = PolygonCollidable::create_cursor(Vec2::new(50.0, 1.0));
//! let off_stroke = PolygonCollidable::create_cursor(Vec2::new(50.0, 10.0));
//!
//! assert!(check_collidables_intersection(&stroke, &on_stroke));
//! assert!(!check_collidables_intersection(&stroke, &off_stroke));
//! ```

mod boundary;
mod collidable;
mod detection;
mod error;
mod projection;
mod selection;
mod set_of_points;

pub use boundary::Boundary;
pub use collidable::{
    CircleCollidable, Collidable, CollidableShape, ELLIPSE_AXIS_BANK, EllipseCollidable,
    LineCollidable, PolygonCollidable, SetOfCollidables,
};
pub use detection::{
    FastCheck, check_collidables_intersection, check_if_selection_is_inside, check_intersection,
    fast_check_collision,
};
pub use error::{CollisionError, Result};
pub use projection::{
    EMPTY_SENTINEL, LinearProjection, linear_projection, normal_axis, parallel_axis,
    point_projection, projection_offset, scale_from_points,
};
pub use selection::{
    MarqueeMode, SelectionConfig, cursor_probe, hit_test, marquee_select, selection_boundary,
};
pub use set_of_points::SetOfPoints;
