use crate::vec2::{pt, triple, Pt};

/// Direction perpendicular to `p`, facing `q`'s half-plane.
///
/// In the search, `p` is a segment direction and `q` the vector from its
/// endpoint to the origin. When the two are collinear the triple product
/// vanishes and we fall back to `p × ẑ = (p.y, −p.x)`, which is non-zero unless
/// `p` itself is.
pub fn select_direction(p: Pt, q: Pt) -> Pt {
    let d = triple(p, q, p);
    if d == pt(0.0, 0.0) {
        pt(p.y, -p.x)
    } else {
        d
    }
}
