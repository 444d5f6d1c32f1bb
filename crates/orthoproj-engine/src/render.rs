use orthoproj_core::geom::Vec2;
use orthoproj_core::layout::LayoutConfig;
use orthoproj_core::model::{
    Arc2D, Arrow2D, LineSeg2D, LineStyle, PointMark, Polygon2D, Primitive, TextLabel,
};

/// Where a point's label sits relative to the point.
pub const LABEL_DEFAULT: Vec2 = Vec2::new(5.0, -5.0);
pub const LABEL_BELOW: Vec2 = Vec2::new(5.0, 15.0);
pub const LABEL_ABOVE: Vec2 = Vec2::new(5.0, -8.0);

const ARROW_LENGTH: f64 = 10.0;

/// Collects primitives for one group of a step plan.
///
/// A sketch is local to the function that fills it; groups are combined
/// only by [`crate::plan::StepPlan`].
pub struct Sketch<'a> {
    layout: &'a LayoutConfig,
    primitives: Vec<Primitive>,
}

impl<'a> Sketch<'a> {
    pub fn new(layout: &'a LayoutConfig) -> Self {
        Self {
            layout,
            primitives: Vec::new(),
        }
    }

    pub fn line(&mut self, a: Vec2, b: Vec2, style: LineStyle) -> &mut Self {
        self.primitives.push(Primitive::Line(LineSeg2D { a, b, style }));
        self
    }

    pub fn construction(&mut self, a: Vec2, b: Vec2) -> &mut Self {
        self.line(a, b, LineStyle::Construction)
    }

    pub fn polygon(&mut self, points: Vec<Vec2>, style: LineStyle, closed: bool) -> &mut Self {
        self.primitives.push(Primitive::Polygon(Polygon2D {
            points,
            style,
            closed,
        }));
        self
    }

    /// A marked point followed by its label at `at + offset`.
    pub fn point(&mut self, at: Vec2, label: impl Into<String>, offset: Vec2) -> &mut Self {
        let label = label.into();
        self.primitives.push(Primitive::Point(PointMark {
            at,
            label: label.clone(),
            radius: self.layout.point_radius,
        }));
        self.label(at.translate(offset), label)
    }

    pub fn label(&mut self, at: Vec2, text: impl Into<String>) -> &mut Self {
        self.primitives.push(Primitive::Label(TextLabel {
            at,
            text: text.into(),
            font_size: self.layout.font_size,
        }));
        self
    }

    pub fn arc(&mut self, center: Vec2, radius: f64, start_deg: f64, end_deg: f64) -> &mut Self {
        self.primitives.push(Primitive::Arc(Arc2D {
            center,
            radius,
            start_angle_deg: start_deg,
            end_angle_deg: end_deg,
        }));
        self
    }

    pub fn arrow(&mut self, from: Vec2, to: Vec2) -> &mut Self {
        self.primitives.push(Primitive::Arrow(Arrow2D { from, to }));
        self
    }

    /// The XY line with its end labels and outward arrows.
    pub fn reference_line(&mut self) -> &mut Self {
        let y = self.layout.reference_y;
        let start = Vec2::new(self.layout.reference_start_x, y);
        let end = Vec2::new(self.layout.reference_end_x(), y);
        self.line(start, end, LineStyle::Visible)
            .label(start.offset(-15.0, 5.0), "X")
            .label(end.offset(10.0, 5.0), "Y")
            .arrow(start, start.offset(-ARROW_LENGTH, 0.0))
            .arrow(end, end.offset(ARROW_LENGTH, 0.0))
    }

    /// Two lines of text to the right of the XY line stating the edge
    /// angle and the plane it is measured from.
    pub fn angle_indicator(&mut self, angle_deg: f64, plane: &str) -> &mut Self {
        let note = Vec2::new(self.layout.reference_end_x() + 20.0, self.layout.reference_y + 30.0);
        self.label(note, format!("Edge angle β = {angle_deg}°"))
            .label(note.offset(0.0, 15.0), format!("(Angle between base edge and {plane})"))
    }

    pub fn finish(self) -> Vec<Primitive> {
        self.primitives
    }
}
