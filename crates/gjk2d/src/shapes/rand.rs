//! Random convex polygons (radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and take the convex hull. The result is centred near the
//!   origin; `draw_offset_pair` places a second polygon at a random offset.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::Polygon;
use crate::vec2::{pt, Pt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random convex polygon around the origin.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    draw_with(&mut rng, cfg)
}

/// Draw two polygons; the second is shifted by a uniform offset in
/// `[-spread, spread]²`, so pairs range from overlapping to far apart.
pub fn draw_offset_pair(
    cfg: RadialCfg,
    tok: ReplayToken,
    spread: f64,
) -> Option<(Polygon, Polygon)> {
    let mut rng = tok.to_std_rng();
    let a = draw_with(&mut rng, cfg)?;
    let b = draw_with(&mut rng, cfg)?;
    let s = spread.abs();
    let offset = if s > 0.0 {
        pt(rng.gen_range(-s..=s), rng.gen_range(-s..=s))
    } else {
        pt(0.0, 0.0)
    };
    Some((a, b.translated(offset)))
}

fn draw_with(rng: &mut StdRng, cfg: RadialCfg) -> Option<Polygon> {
    let n = cfg.vertex_count.sample(rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = rng.gen::<f64>() * 2.0 * std::f64::consts::PI;
    let pts: Vec<Pt> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            pt(th.cos() * r, th.sin() * r)
        })
        .collect();
    let poly = Polygon::convex_hull(&pts).ok()?;
    if poly.vertices().len() < 3 {
        return None;
    }
    Some(poly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            base_radius: 1.0,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(cfg, tok).expect("poly");
        let p2 = draw_polygon_radial(cfg, tok).expect("poly");
        assert_eq!(p1, p2);
        let other = draw_polygon_radial(cfg, ReplayToken { seed: 42, index: 8 }).expect("poly");
        assert_ne!(p1, other);
    }

    #[test]
    fn draws_are_convex_and_bounded() {
        let cfg = RadialCfg::default();
        for index in 0..50 {
            let p = draw_polygon_radial(cfg, ReplayToken { seed: 3, index }).expect("poly");
            let vs = p.vertices();
            assert!(vs.len() >= 3 && vs.len() <= 12);
            for v in vs {
                assert!(v.norm() <= cfg.base_radius * (1.0 + cfg.radial_jitter) + 1e-12);
            }
            // hull output is CCW: every consecutive turn is left
            for k in 0..vs.len() {
                let a = vs[k];
                let b = vs[(k + 1) % vs.len()];
                let c = vs[(k + 2) % vs.len()];
                assert!(crate::vec2::cross2d(b - a, c - a) > 0.0);
            }
        }
    }

    #[test]
    fn offset_pair_respects_spread() {
        let cfg = RadialCfg::default();
        let tok = ReplayToken { seed: 9, index: 1 };
        let (a, b) = draw_offset_pair(cfg, tok, 0.0).expect("pair");
        assert!(a.vertices().iter().all(|v| v.norm() <= 1.25 + 1e-12));
        assert!(b.vertices().iter().all(|v| v.norm() <= 1.25 + 1e-12));
        let (_, far) = draw_offset_pair(cfg, tok, 10.0).expect("pair");
        assert!(far.vertices().iter().all(|v| v.x.abs() <= 11.25 && v.y.abs() <= 11.25));
    }
}
