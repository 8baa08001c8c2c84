use anyhow::{Context, Result};
use gjk2d::shapes::{Circle, PointShape, Polygon, ShapeError};
use gjk2d::{pt, SupportMap};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk shape description, tagged by `kind`.
///
/// ```json
/// {"kind": "polygon", "vertices": [[0, 0], [1, 0], [0, 1]]}
/// {"kind": "circle", "center": [0, 0], "radius": 2}
/// {"kind": "point", "at": [3, 4]}
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Polygon { vertices: Vec<[f64; 2]> },
    Circle { center: [f64; 2], radius: f64 },
    Point { at: [f64; 2] },
}

impl ShapeSpec {
    pub fn build(&self) -> Result<Box<dyn SupportMap>, ShapeError> {
        Ok(match self {
            ShapeSpec::Polygon { vertices } => Box::new(Polygon::new(
                vertices.iter().map(|[x, y]| pt(*x, *y)).collect(),
            )?),
            ShapeSpec::Circle { center, radius } => {
                Box::new(Circle::new(pt(center[0], center[1]), *radius)?)
            }
            ShapeSpec::Point { at } => Box::new(PointShape(pt(at[0], at[1]))),
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ShapeSpec::Polygon { .. } => "polygon",
            ShapeSpec::Circle { .. } => "circle",
            ShapeSpec::Point { .. } => "point",
        }
    }
}

/// Read and validate a shape file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<(ShapeSpec, Box<dyn SupportMap>)> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let spec: ShapeSpec =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    let shape = spec
        .build()
        .with_context(|| format!("invalid shape in {}", path.display()))?;
    Ok((spec, shape))
}
