//! Search configuration, simplex carrier, and outcome types.

use std::fmt;

use crate::vec2::Pt;

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    /// Depth bound handed to the search loop. At most `limit + 2` support
    /// queries are made after seeding.
    pub limit: usize,
}

impl Default for SearchCfg {
    fn default() -> Self {
        // Polygon pairs typically resolve in two or three iterations; the
        // headroom covers curved shapes whose supports keep moving.
        Self { limit: 32 }
    }
}

/// Working simplex carried between iterations (before the newest point is added).
///
/// Only one- and two-point simplices ever enter the case analysis, so the
/// carrier has exactly those two shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Simplex {
    Point(Pt),
    Segment(Pt, Pt),
}

impl Simplex {
    #[inline]
    pub fn point_count(&self) -> usize {
        match self {
            Simplex::Point(_) => 1,
            Simplex::Segment(..) => 2,
        }
    }
}

/// Result of one case-analysis step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// The triangle formed with the newest point contains the origin.
    Enclosed,
    /// Keep searching from this simplex along this direction.
    Continue(Simplex, Pt),
}

/// Final classification of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The Minkowski difference contains the origin (touching counts).
    Intersecting,
    /// A support point failed to pass the origin; the shapes are disjoint.
    Separated,
    /// The depth bound ran out before either of the above was established.
    Inconclusive,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Intersecting => "intersecting",
            Verdict::Separated => "separated",
            Verdict::Inconclusive => "inconclusive",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a search plus how many support queries the loop made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub verdict: Verdict,
    pub iterations: usize,
}

impl Report {
    /// Boolean view: only `Intersecting` counts as a hit.
    #[inline]
    pub fn intersects(&self) -> bool {
        self.verdict == Verdict::Intersecting
    }
}
