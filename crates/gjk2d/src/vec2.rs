//! Vector kernel over `Pt = Vector2<f64>`.
//!
//! - Positions and directions share one type; `from(a, b)` is the displacement a→b.
//! - `triple(a, b, c) = a × (b × c) = b(a·c) − c(a·b)` evaluated in the plane,
//!   which yields a vector perpendicular to `b` on `a`'s side when `c = a`.
//!
//! All functions are total on finite inputs. NaN/Inf propagate unchecked.

use nalgebra::Vector2;

/// A 2D point or direction.
pub type Pt = Vector2<f64>;

#[inline]
pub fn pt(x: f64, y: f64) -> Pt {
    Vector2::new(x, y)
}

#[inline]
pub fn dot(u: Pt, v: Pt) -> f64 {
    u.x * v.x + u.y * v.y
}

/// Displacement from `a` to `b`, i.e. `b − a`.
#[inline]
pub fn from(a: Pt, b: Pt) -> Pt {
    b - a
}

/// `a − b`.
#[inline]
pub fn sub(a: Pt, b: Pt) -> Pt {
    a - b
}

#[inline]
pub fn add(a: Pt, b: Pt) -> Pt {
    a + b
}

#[inline]
pub fn scale(n: f64, v: Pt) -> Pt {
    v * n
}

#[inline]
pub fn neg(v: Pt) -> Pt {
    -v
}

/// Signed area of the parallelogram spanned by `u` and `v`.
/// Positive for u→v counterclockwise.
#[inline]
pub fn cross2d(u: Pt, v: Pt) -> f64 {
    u.x * v.y - u.y * v.x
}

/// `a × (b × c)` with all three vectors lying in the z=0 plane.
#[inline]
pub fn triple(a: Pt, b: Pt, c: Pt) -> Pt {
    sub(scale(dot(a, c), b), scale(dot(a, b), c))
}

/// Vector perpendicular to `a`, oriented toward `b`.
///
/// Zero when `a` and `b` are collinear (or either is zero).
#[inline]
pub fn perp(a: Pt, b: Pt) -> Pt {
    triple(a, b, a)
}

#[inline]
pub fn is_same_direction(a: Pt, b: Pt) -> bool {
    dot(a, b) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn displacement_and_difference_are_opposite() {
        let a = pt(1.0, 2.0);
        let b = pt(4.0, -1.0);
        assert_eq!(from(a, b), pt(3.0, -3.0));
        assert_eq!(sub(a, b), pt(-3.0, 3.0));
        assert_eq!(add(from(a, b), a), b);
        assert_eq!(neg(scale(2.0, a)), pt(-2.0, -4.0));
    }

    #[test]
    fn cross2d_sign_follows_orientation() {
        let x = pt(1.0, 0.0);
        let y = pt(0.0, 2.5);
        assert!((cross2d(x, y) - 2.5).abs() < 1e-12);
        assert!((cross2d(y, x) + 2.5).abs() < 1e-12);
        assert_eq!(cross2d(x, scale(3.0, x)), 0.0);
    }

    #[test]
    fn perp_is_orthogonal_and_faces_target() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let a = pt(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
            let b = pt(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
            let p = perp(a, b);
            let tol = 1e-9 * (1.0 + a.norm_squared() * a.norm() * b.norm());
            assert!(dot(p, a).abs() <= tol);
            // p·b = |a|²|b|² − (a·b)² ≥ 0
            assert!(dot(p, b) >= -tol);
        }
    }

    #[test]
    fn perp_of_collinear_vectors_vanishes() {
        let a = pt(2.0, 0.0);
        assert_eq!(perp(a, pt(-7.0, 0.0)), pt(0.0, 0.0));
        assert_eq!(perp(pt(0.0, 0.0), pt(1.0, 1.0)), pt(0.0, 0.0));
    }

    #[test]
    fn same_direction_is_strict() {
        assert!(is_same_direction(pt(1.0, 0.0), pt(1.0, 5.0)));
        assert!(!is_same_direction(pt(1.0, 0.0), pt(0.0, 5.0)));
        assert!(!is_same_direction(pt(1.0, 0.0), pt(-1.0, 0.0)));
    }
}
