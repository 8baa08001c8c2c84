//! Convex intersection testing in 2D with GJK.
//!
//! Shapes enter only through support mappings (`SupportMap`): given a
//! direction, return the extremal point. `collision` then decides whether the
//! Minkowski difference of two shapes contains the origin.
//!
//! Layout
//! - `vec2`: vector kernel (dot, displacement, triple product, ...).
//! - `support`: the `SupportMap` trait, the `Mink` value/function pairing, and
//!   the Minkowski-difference support point.
//! - `gjk`: seeding, case analysis, and the bounded search loop.
//! - `shapes`: optional ready-made polygons, circles, and points, plus a
//!   seeded random polygon sampler.

pub mod api;
pub mod gjk;
pub mod shapes;
pub mod support;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use gjk::{collision, collision_report, collision_with_defaults, Report, SearchCfg, Verdict};
pub use support::{minkowski_support, Mink, SupportMap};
pub use vec2::{pt, Pt};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gjk::{
        collision, collision_report, collision_with_defaults, Report, SearchCfg, Verdict,
    };
    pub use crate::shapes::{Circle, PointShape, Polygon, ShapeError};
    pub use crate::support::{Mink, SupportMap};
    pub use crate::vec2::{pt, Pt};
}
