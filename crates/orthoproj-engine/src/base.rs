use orthoproj_core::geom::Vec2;
use std::f64::consts::PI;

/// A regular polygon laid out by walking its edges, plus the mean of its
/// corners. For a prism the anchor is the axis centre; for a pyramid it is
/// the apex seen end-on.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularBase {
    pub vertices: Vec<Vec2>,
    pub anchor: Vec2,
}

impl RegularBase {
    pub fn sides(&self) -> usize {
        self.vertices.len()
    }
}

pub fn interior_angle(sides: usize) -> f64 {
    PI * (1.0 - 2.0 / sides as f64)
}

/// Walks `sides` edges of length `edge` from `start`, first heading along
/// `heading` radians and turning by the exterior angle after each edge.
pub fn generate_base(start: Vec2, edge: f64, heading: f64, sides: usize) -> RegularBase {
    let turn = PI - interior_angle(sides);
    let mut vertices = Vec::with_capacity(sides);
    vertices.push(start);
    let mut current = start;
    let mut angle = heading;
    for _ in 1..sides {
        current = current.offset(edge * angle.cos(), edge * angle.sin());
        vertices.push(current);
        angle += turn;
    }
    let anchor = Vec2::mean(vertices.iter().copied()).unwrap_or(start);
    RegularBase { vertices, anchor }
}
