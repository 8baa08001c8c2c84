//! Curated surface for callers that want the search internals too.
//!
//! The crate root and `prelude` cover the predicate itself. This module also
//! exposes the single-step pieces (seed direction, case analysis, simplex
//! carrier) for callers that drive or visualize the search step by step.

// Search entry points and outcomes
pub use crate::gjk::{
    collision, collision_report, collision_with_defaults, Report, SearchCfg, Verdict,
};
// Single-step building blocks
pub use crate::gjk::{encloses_origin, select_direction, Simplex, Step};
// Support mappings
pub use crate::support::{minkowski_support, Mink, SupportMap};
// Shapes and sampling
pub use crate::shapes::rand::{
    draw_offset_pair, draw_polygon_radial, RadialCfg, ReplayToken, VertexCount,
};
pub use crate::shapes::{Circle, PointShape, Polygon, ShapeError};
// Vector kernel
pub use crate::vec2::{
    add, cross2d, dot, from, is_same_direction, neg, perp, pt, scale, sub, triple, Pt,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_by_hand_matches_the_search() {
        // Drive the documented example one step at a time.
        let a = Polygon::from_coords(&[(-15.0, -10.0), (0.0, 15.0), (12.0, -5.0)]).unwrap();
        let b = Polygon::from_coords(&[(-9.0, 13.0), (6.0, 13.0), (-2.0, 22.0)]).unwrap();
        let c0 = minkowski_support(&a, &b, pt(1.0, 0.0));
        let b0 = minkowski_support(&a, &b, pt(-1.0, 0.0));
        let mut simplex = Simplex::Segment(b0, c0);
        let mut dir = select_direction(from(c0, b0), neg(c0));
        let mut enclosed = false;
        for _ in 0..12 {
            let p = minkowski_support(&a, &b, dir);
            assert!(dot(p, dir) >= 0.0);
            match encloses_origin(p, simplex) {
                Step::Enclosed => {
                    enclosed = true;
                    break;
                }
                Step::Continue(s, d) => {
                    simplex = s;
                    dir = d;
                }
            }
        }
        assert!(enclosed);
        assert!(collision(10, &a, &b));
    }
}
