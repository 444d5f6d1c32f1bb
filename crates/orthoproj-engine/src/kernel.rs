//! Pure plane geometry shared by every case engine.

use itertools::Itertools;
use nalgebra::{Point2, Rotation2, Vector2};
use orthoproj_core::geom::Vec2;
use std::collections::HashSet;

/// Orientation values closer to zero than this count as collinear.
pub const ORIENTATION_EPS: f64 = 1e-9;

/// Absolute coordinate tolerance when matching an edge against hull vertices.
pub const HULL_EDGE_TOLERANCE: f64 = 1.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

fn to_point(p: Vec2) -> Point2<f64> {
    Point2::new(p.x, p.y)
}

fn perp_dot(v1: Vector2<f64>, v2: Vector2<f64>) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Cross product of `o->a` and `o->b`; positive for a left turn.
pub fn cross(o: Vec2, a: Vec2, b: Vec2) -> f64 {
    let o = to_point(o);
    perp_dot(to_point(a) - o, to_point(b) - o)
}

/// Rotates `point` about `pivot` by `angle` radians (counter-clockwise in a
/// y-up frame). A zero angle or a coincident pivot returns `point` exactly.
pub fn rotate(point: Vec2, pivot: Vec2, angle: f64) -> Vec2 {
    if angle == 0.0 || point == pivot {
        return point;
    }
    let rotated = Rotation2::new(angle) * (to_point(point) - to_point(pivot));
    Vec2::new(pivot.x + rotated.x, pivot.y + rotated.y)
}

/// Monotone-chain hull in counter-clockwise order. Collinear boundary points
/// are dropped; inputs of two points or fewer come back sorted but otherwise
/// untouched.
pub fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    if pts.len() <= 2 {
        return pts;
    }

    let mut lower: Vec<Vec2> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Vec2> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Hull vertices keyed by coordinates rounded to two decimals.
#[derive(Debug, Clone, Default)]
pub struct HullSet {
    keys: HashSet<(i64, i64)>,
}

impl HullSet {
    /// Computes the hull of `points` and indexes its vertices.
    pub fn from_points(points: &[Vec2]) -> Self {
        Self::from_hull(&convex_hull(points))
    }

    pub fn from_hull(hull: &[Vec2]) -> Self {
        Self {
            keys: hull.iter().map(|p| Self::key(*p)).collect(),
        }
    }

    fn key(p: Vec2) -> (i64, i64) {
        ((p.x * 100.0).round() as i64, (p.y * 100.0).round() as i64)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.keys.contains(&Self::key(point))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

fn near(p: Vec2, q: Vec2, eps: f64) -> bool {
    (p.x - q.x).abs() < eps && (p.y - q.y).abs() < eps
}

/// True when `a`-`b` matches two cyclically consecutive hull vertices, in
/// either direction.
pub fn is_edge_on_hull(a: Vec2, b: Vec2, hull: &[Vec2], eps: f64) -> bool {
    if hull.len() < 2 {
        return false;
    }
    hull.iter()
        .circular_tuple_windows()
        .any(|(&h0, &h1)| (near(a, h0, eps) && near(b, h1, eps)) || (near(a, h1, eps) && near(b, h0, eps)))
}

/// Proper crossing only: shared endpoints, T-junctions and collinear
/// overlaps all return false.
pub fn segments_properly_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let d1 = cross(p3, p4, p1);
    let d2 = cross(p3, p4, p2);
    let d3 = cross(p1, p2, p3);
    let d4 = cross(p1, p2, p4);
    strictly_opposite(d1, d2) && strictly_opposite(d3, d4)
}

fn strictly_opposite(a: f64, b: f64) -> bool {
    (a > ORIENTATION_EPS && b < -ORIENTATION_EPS) || (a < -ORIENTATION_EPS && b > ORIENTATION_EPS)
}

/// Ray casting with the half-open `(yi > y) != (yj > y)` edge rule.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let mut inside = false;
    let n = polygon.len();
    if n == 0 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// True when segment `a`-`b` properly crosses any edge of the closed
/// polygon.
pub fn crosses_polygon(a: Vec2, b: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 2 {
        return false;
    }
    polygon
        .iter()
        .circular_tuple_windows()
        .any(|(&p, &q)| segments_properly_intersect(a, b, p, q))
}
