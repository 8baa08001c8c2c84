//! GJK intersection search over the Minkowski difference.
//!
//! Purpose
//! - Decide whether two convex shapes given only by support mappings intersect,
//!   by growing a simplex inside `B ⊖ A` toward the origin.
//!
//! Model
//! - Seed with the supports along `(1,0)` and `(−1,0)` and the normal of that
//!   segment facing the origin (`select_direction`).
//! - Each iteration fetches one support point, stops if it does not pass the
//!   origin, otherwise runs the point/segment case analysis (`encloses_origin`).
//! - A caller-supplied depth bound caps the loop; running out is reported as
//!   `Verdict::Inconclusive` and as `false` by the boolean entry points.
//!
//! Code cross-refs: `support::{SupportMap, minkowski_support}`, `vec2`.

mod direction;
mod simplex;
mod types;

pub use direction::select_direction;
pub use simplex::encloses_origin;
pub use types::{Report, SearchCfg, Simplex, Step, Verdict};

use crate::support::{minkowski_support, SupportMap};
use crate::vec2::{dot, from, neg, pt, Pt};

/// Do the convex shapes `a` and `b` intersect? Touching counts.
///
/// `limit` bounds the search: after seeding, at most `limit + 2` support
/// queries are made, and an unresolved search returns `false`. Such a `false`
/// is inconclusive rather than a proof of separation; use `collision_report`
/// to tell the two apart. Polygons usually resolve within a few iterations,
/// shapes with curved boundaries can need more, so pick `limit` by how much
/// a wrong negative costs (see `SearchCfg::default`).
pub fn collision<A, B>(limit: usize, a: &A, b: &B) -> bool
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    collision_report(limit, a, b).intersects()
}

/// `collision` with `SearchCfg::default()`.
pub fn collision_with_defaults<A, B>(a: &A, b: &B) -> bool
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    collision_report(SearchCfg::default().limit, a, b).intersects()
}

/// Same search as `collision`, keeping the verdict and the iteration count.
pub fn collision_report<A, B>(limit: usize, a: &A, b: &B) -> Report
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    let (simplex, dir) = seed(a, b);
    let report = search(limit, a, b, simplex, dir);
    tracing::debug!(
        verdict = %report.verdict,
        iterations = report.iterations,
        limit,
        "gjk"
    );
    report
}

/// Initial two-point simplex `[b, c]` and the direction from it toward the origin.
fn seed<A, B>(a: &A, b: &B) -> (Simplex, Pt)
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    let c_pt = minkowski_support(a, b, pt(1.0, 0.0));
    let b_pt = minkowski_support(a, b, pt(-1.0, 0.0));
    let dir = select_direction(from(c_pt, b_pt), neg(c_pt));
    (Simplex::Segment(b_pt, c_pt), dir)
}

fn search<A, B>(limit: usize, a: &A, b: &B, mut simplex: Simplex, mut dir: Pt) -> Report
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    let mut depth = 0usize;
    loop {
        let p = minkowski_support(a, b, dir);
        tracing::trace!(depth, simplex = simplex.point_count(), x = p.x, y = p.y, "support");
        if dot(p, dir) < 0.0 {
            return Report {
                verdict: Verdict::Separated,
                iterations: depth + 1,
            };
        }
        match encloses_origin(p, simplex) {
            Step::Enclosed => {
                return Report {
                    verdict: Verdict::Intersecting,
                    iterations: depth + 1,
                }
            }
            Step::Continue(next, next_dir) => {
                if depth > limit {
                    return Report {
                        verdict: Verdict::Inconclusive,
                        iterations: depth + 1,
                    };
                }
                simplex = next;
                dir = next_dir;
                depth += 1;
            }
        }
    }
}
