//! Intersection queries on a few hand-picked shape pairs.
//!
//! Usage:
//!   cargo run -p gjk2d --example triangles
//!   cargo run -p gjk2d --example triangles -- 0     (custom depth limit)

use gjk2d::prelude::*;

fn boxed<S: SupportMap + 'static>(shape: S) -> Box<dyn SupportMap> {
    Box::new(shape)
}

fn main() {
    let limit = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);

    let pairs: Vec<(&str, Box<dyn SupportMap>, Box<dyn SupportMap>)> = vec![
        (
            "overlapping triangles",
            boxed(Polygon::from_coords(&[(-15.0, -10.0), (0.0, 15.0), (12.0, -5.0)]).unwrap()),
            boxed(Polygon::from_coords(&[(-9.0, 13.0), (6.0, 13.0), (-2.0, 22.0)]).unwrap()),
        ),
        (
            "distant triangles",
            boxed(Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap()),
            boxed(Polygon::from_coords(&[(10.0, 10.0), (11.0, 10.0), (10.0, 11.0)]).unwrap()),
        ),
        (
            "touching triangles",
            boxed(Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0)]).unwrap()),
            boxed(Polygon::from_coords(&[(2.0, 0.0), (4.0, 0.0), (3.0, 2.0)]).unwrap()),
        ),
        (
            "circle vs point",
            boxed(Circle::new(pt(0.0, 0.0), 1.0).unwrap()),
            boxed(PointShape(pt(0.6, 0.6))),
        ),
    ];

    for (name, a, b) in &pairs {
        let r = collision_report(limit, &**a, &**b);
        println!(
            "{name}: {} ({} iterations, limit {limit})",
            r.verdict, r.iterations
        );
    }
}
