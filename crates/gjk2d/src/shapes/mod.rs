//! Ready-made convex shapes with support mappings.
//!
//! Purpose
//! - Give callers (and the tests, benches, and CLI) concrete `SupportMap`
//!   implementors: `Polygon`, `Circle`, `PointShape`.
//! - Validate once at construction so every support query is total.
//!
//! The search itself never depends on this module.

mod hull;
pub mod rand;

use std::fmt;

use crate::support::SupportMap;
use crate::vec2::{cross2d, dot, from, pt, Pt};

/// Errors surfaced when building a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A polygon needs at least one vertex.
    Empty,
    /// Vertex `index` has a NaN or infinite coordinate.
    NonFinite { index: usize },
    /// Circle radius must be finite and non-negative.
    InvalidRadius { radius: f64 },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "polygon has no vertices"),
            ShapeError::NonFinite { index } => {
                write!(f, "vertex {index} has a non-finite coordinate")
            }
            ShapeError::InvalidRadius { radius } => {
                write!(f, "circle radius {radius} must be finite and >= 0")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Convex polygon given by its vertices (the convex hull of the vertex set).
///
/// Invariants:
/// - At least one vertex.
/// - All coordinates finite.
///
/// Vertex order is kept as given; support ties resolve to the earliest vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Pt>,
}

impl Polygon {
    pub fn new(vertices: Vec<Pt>) -> Result<Self, ShapeError> {
        if vertices.is_empty() {
            return Err(ShapeError::Empty);
        }
        if let Some(index) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(ShapeError::NonFinite { index });
        }
        Ok(Self { vertices })
    }

    /// Convenience constructor from coordinate pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, ShapeError> {
        Self::new(coords.iter().map(|&(x, y)| pt(x, y)).collect())
    }

    /// Convex hull of `points` (CCW, duplicates and collinear points dropped).
    ///
    /// Collinear input yields a two-vertex polygon, a single distinct point a
    /// one-vertex polygon.
    pub fn convex_hull(points: &[Pt]) -> Result<Self, ShapeError> {
        let poly = Self::new(points.to_vec())?;
        Ok(Self {
            vertices: hull::convex_hull(&poly.vertices),
        })
    }

    /// Hull of `{ b − a : a ∈ self, b ∈ other }`, i.e. `other ⊖ self`.
    ///
    /// Brute-force reference for the search: the shapes intersect iff the
    /// result contains the origin.
    pub fn minkowski_difference(&self, other: &Polygon) -> Polygon {
        let mut pts = Vec::with_capacity(self.vertices.len() * other.vertices.len());
        for a in &self.vertices {
            for b in &other.vertices {
                pts.push(from(*a, *b));
            }
        }
        Self {
            vertices: hull::convex_hull(&pts),
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Pt] {
        &self.vertices
    }

    pub fn translated(&self, t: Pt) -> Polygon {
        Polygon {
            vertices: self.vertices.iter().map(|v| v + t).collect(),
        }
    }

    /// Closed membership test with slack `eps` (`eps > 0` enlarges).
    ///
    /// Pre: vertices are in convex position and consistently ordered, as
    /// produced by `convex_hull`.
    pub fn contains_eps(&self, p: Pt, eps: f64) -> bool {
        let vs = &self.vertices;
        match vs.len() {
            1 => (p - vs[0]).norm() <= eps,
            2 => on_segment_eps(vs[0], vs[1], p, eps),
            n => {
                let mut pos = false;
                let mut neg = false;
                for k in 0..n {
                    let e = from(vs[k], vs[(k + 1) % n]);
                    let len = e.norm();
                    let side = cross2d(e, from(vs[k], p));
                    if side > eps * len {
                        pos = true;
                    } else if side < -eps * len {
                        neg = true;
                    }
                    if pos && neg {
                        return false;
                    }
                }
                true
            }
        }
    }

    #[inline]
    pub fn contains(&self, p: Pt) -> bool {
        self.contains_eps(p, 0.0)
    }
}

fn on_segment_eps(a: Pt, b: Pt, p: Pt, eps: f64) -> bool {
    let ab = from(a, b);
    let len2 = dot(ab, ab);
    if len2 == 0.0 {
        return (p - a).norm() <= eps;
    }
    let t = (dot(from(a, p), ab) / len2).clamp(0.0, 1.0);
    (a + ab * t - p).norm() <= eps
}

impl SupportMap for Polygon {
    fn support(&self, dir: Pt) -> Pt {
        let mut best = self.vertices[0];
        let mut best_dot = dot(best, dir);
        for v in &self.vertices[1..] {
            let d = dot(*v, dir);
            if d > best_dot {
                best = *v;
                best_dot = d;
            }
        }
        best
    }
}

/// Closed disc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Pt,
    radius: f64,
}

impl Circle {
    pub fn new(center: Pt, radius: f64) -> Result<Self, ShapeError> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(ShapeError::InvalidRadius { radius });
        }
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(ShapeError::NonFinite { index: 0 });
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Pt {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl SupportMap for Circle {
    fn support(&self, dir: Pt) -> Pt {
        match dir.try_normalize(0.0) {
            Some(u) => self.center + u * self.radius,
            None => self.center + pt(self.radius, 0.0),
        }
    }
}

/// A single point; its support is itself in every direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointShape(pub Pt);

impl SupportMap for PointShape {
    #[inline]
    fn support(&self, _dir: Pt) -> Pt {
        self.0
    }
}
