//! Case analysis on the working simplex once a new support point `a` arrives.
//!
//! Regions are classified with triple-product normals: for the triangle
//! `a, b, c`, `perp(ab, −ac)` is the normal of edge `ab` facing away from `c`
//! (and symmetrically for `ac`). Edge `bc` never needs a test because `a` was
//! fetched along the direction that already put the origin beyond `bc`.
//!
//! When `a`, `b`, `c` are collinear both normals vanish and the normal tests
//! cannot separate anything; that case is settled on the line instead
//! (`handle_collinear`).

use crate::vec2::{cross2d, dot, from, is_same_direction, neg, perp, pt, Pt};

use super::types::{Simplex, Step};

/// Grow `simplex` with the newest support point `a` and decide what comes next.
#[inline]
pub fn encloses_origin(a: Pt, simplex: Simplex) -> Step {
    match simplex {
        Simplex::Point(b) => handle_point(a, b),
        Simplex::Segment(b, c) => handle_segment(a, b, c),
    }
}

/// `[b]` + `a`: a segment cannot enclose the origin in 2D.
fn handle_point(a: Pt, b: Pt) -> Step {
    let ab = from(a, b);
    let a0 = neg(a);
    if is_same_direction(ab, a0) {
        Step::Continue(Simplex::Segment(a, b), perp(ab, a0))
    } else {
        Step::Continue(Simplex::Point(a), a0)
    }
}

/// `[b, c]` + `a`: triangle case.
fn handle_segment(a: Pt, b: Pt, c: Pt) -> Step {
    let a0 = neg(a);
    let ab = from(a, b);
    let ac = from(a, c);
    let abp = perp(ab, neg(ac));
    let acp = perp(ac, neg(ab));

    if is_same_direction(abp, a0) {
        if is_same_direction(ab, a0) {
            Step::Continue(Simplex::Segment(a, b), abp)
        } else {
            Step::Continue(Simplex::Point(a), a0)
        }
    } else if is_same_direction(acp, a0) {
        if is_same_direction(ac, a0) {
            Step::Continue(Simplex::Segment(a, c), acp)
        } else {
            Step::Continue(Simplex::Point(a), a0)
        }
    } else if cross2d(ab, ac) == 0.0 {
        handle_collinear(a, b, c)
    } else {
        Step::Enclosed
    }
}

/// Zero-area triangle. The origin is enclosed iff it lies on the hull segment
/// of the three points; otherwise restart from the endpoint nearest to it.
fn handle_collinear(a: Pt, b: Pt, c: Pt) -> Step {
    let mut seg = (b, c);
    for cand in [(a, b), (a, c)] {
        let e = from(cand.0, cand.1);
        let best = from(seg.0, seg.1);
        if dot(e, e) > dot(best, best) {
            seg = cand;
        }
    }
    let (lo, hi) = seg;
    let e = from(lo, hi);
    let l2 = dot(e, e);
    let o = neg(lo);
    let on_segment = if l2 == 0.0 {
        lo == pt(0.0, 0.0)
    } else {
        cross2d(e, o) == 0.0 && (0.0..=l2).contains(&dot(o, e))
    };
    if on_segment {
        Step::Enclosed
    } else {
        let near = if dot(lo, lo) <= dot(hi, hi) { lo } else { hi };
        Step::Continue(Simplex::Point(near), neg(near))
    }
}
