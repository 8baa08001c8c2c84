//! Support mappings and the Minkowski-difference support point.
//!
//! A support mapping answers one question: given a direction `d`, which point of
//! the shape maximizes `p · d`? The search never sees anything else of a shape.
//!
//! - `SupportMap`: the single capability shapes implement.
//! - `Mink`: pairs an arbitrary caller-owned value with a support function.
//! - `minkowski_support`: support point of `B ⊖ A` along `d`.

use crate::vec2::{from, neg, Pt};

/// Shapes representable by a support function.
///
/// Contract
/// - Deterministic for a fixed shape and direction.
/// - Returns a point of the shape's convex hull that is extremal along `dir`
///   (maximal dot product). `dir` is not normalized and may be zero, in which
///   case any point of the shape is acceptable.
pub trait SupportMap {
    fn support(&self, dir: Pt) -> Pt;
}

impl<S: SupportMap + ?Sized> SupportMap for &S {
    #[inline]
    fn support(&self, dir: Pt) -> Pt {
        (**self).support(dir)
    }
}

impl<S: SupportMap + ?Sized> SupportMap for Box<S> {
    #[inline]
    fn support(&self, dir: Pt) -> Pt {
        (**self).support(dir)
    }
}

/// A boundary value paired with its support function.
///
/// The value is opaque to the search; it is only ever handed back to `f`.
#[derive(Clone, Copy, Debug)]
pub struct Mink<T, F> {
    pub value: T,
    pub f: F,
}

impl<T, F> Mink<T, F>
where
    F: Fn(&T, Pt) -> Pt,
{
    #[inline]
    pub fn new(value: T, f: F) -> Self {
        Self { value, f }
    }
}

impl<T, F> SupportMap for Mink<T, F>
where
    F: Fn(&T, Pt) -> Pt,
{
    #[inline]
    fn support(&self, dir: Pt) -> Pt {
        (self.f)(&self.value, dir)
    }
}

/// Support point of the Minkowski difference `B ⊖ A = { b − a }` along `d`.
///
/// Combines `A`'s support along `−d` with `B`'s support along `d`. The result
/// maximizes `p · d` over `B ⊖ A`, which contains the origin iff `A` and `B`
/// intersect.
#[inline]
pub fn minkowski_support<A, B>(a: &A, b: &B, d: Pt) -> Pt
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    let pa = a.support(neg(d));
    let pb = b.support(d);
    from(pa, pb)
}
