use crate::geom::{BBox2, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Visible,
    Hidden,
    Construction,
}

impl LineStyle {
    pub fn edge(hidden: bool) -> Self {
        if hidden {
            LineStyle::Hidden
        } else {
            LineStyle::Visible
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeg2D {
    pub a: Vec2,
    pub b: Vec2,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon2D {
    pub points: Vec<Vec2>,
    pub style: LineStyle,
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMark {
    pub at: Vec2,
    pub label: String,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub at: Vec2,
    pub text: String,
    pub font_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc2D {
    pub center: Vec2,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow2D {
    pub from: Vec2,
    pub to: Vec2,
}

/// One drawing instruction. Renderers draw these in order without doing
/// any geometry of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Line(LineSeg2D),
    Polygon(Polygon2D),
    Point(PointMark),
    Label(TextLabel),
    Arc(Arc2D),
    Arrow(Arrow2D),
}

impl Primitive {
    pub fn bbox(&self) -> BBox2 {
        match self {
            Primitive::Line(line) => BBox2::from_points([line.a, line.b]),
            Primitive::Polygon(poly) => BBox2::from_points(poly.points.iter().copied()),
            Primitive::Point(point) => {
                let r = point.radius;
                BBox2::new(point.at.offset(-r, -r), point.at.offset(r, r))
            }
            Primitive::Label(label) => BBox2::from_points([label.at]),
            Primitive::Arc(arc) => {
                let r = arc.radius;
                BBox2::new(arc.center.offset(-r, -r), arc.center.offset(r, r))
            }
            Primitive::Arrow(arrow) => BBox2::from_points([arrow.from, arrow.to]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub number: usize,
    pub title: String,
    pub description: String,
    pub primitives: Vec<Primitive>,
}

impl Step {
    pub fn extents(&self) -> Option<BBox2> {
        let mut bbox = BBox2::empty();
        let mut any = false;
        for p in &self.primitives {
            bbox = bbox.union(&p.bbox());
            any = true;
        }
        if any { Some(bbox) } else { None }
    }

    /// Number of line primitives drawn in `style`.
    pub fn count_lines(&self, style: LineStyle) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line(line) if line.style == style))
            .count()
    }
}
