//! Axis perpendicular to the vertical plane: the mirror of case A with the
//! true shape above the XY line and the top view projected below it.

use super::{project_true_shape, TRUE_SHAPE_INSET};
use crate::base::{generate_base, RegularBase};
use crate::kernel::deg_to_rad;
use crate::plan::StepPlan;
use crate::render::{Sketch, LABEL_BELOW, LABEL_DEFAULT};
use crate::structs::{corner_letter, LabelScheme, ViewCorners};
use crate::visibility;
use orthoproj_core::geom::Vec2;
use orthoproj_core::layout::LayoutConfig;
use orthoproj_core::model::{LineStyle, Primitive};
use orthoproj_core::solid::Solid;
use tracing::debug;

const TOP_VIEW: LabelScheme = LabelScheme::new("");

#[derive(Debug, Clone, PartialEq)]
pub struct CaseB {
    pub solid: Solid,
    pub edge_angle: f64,
    pub axis_length: f64,
    pub front_view: RegularBase,
    pub top_view: ViewCorners,
    pub hidden: Vec<bool>,
}

impl CaseB {
    pub fn build(solid: Solid, layout: &LayoutConfig, base_edge: f64, axis_length: f64, edge_angle: f64) -> Self {
        let start = Vec2::new(
            layout.reference_start_x + TRUE_SHAPE_INSET.x,
            layout.reference_y - TRUE_SHAPE_INSET.y - base_edge,
        );
        let front_view = generate_base(start, base_edge, deg_to_rad(edge_angle), solid.sides());
        let top_view = project_true_shape(
            solid,
            &front_view,
            TOP_VIEW,
            layout.reference_y,
            layout.reference_y + axis_length,
            |p| p.x,
        );
        let centre_x = front_view.anchor.x;
        let hidden = visibility::classify_threshold(&top_view, top_view.bbox(), |i| top_view.base()[i].depth > centre_x);
        debug!(sides = solid.sides(), edge_angle, "case B views computed");
        Self {
            solid,
            edge_angle,
            axis_length,
            front_view,
            top_view,
            hidden,
        }
    }

    pub fn true_shape(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        let vertices = &self.front_view.vertices;
        let anchor = self.front_view.anchor;
        sketch.polygon(vertices.clone(), LineStyle::Visible, true);
        if self.solid.is_prism() {
            for (i, &v) in vertices.iter().enumerate() {
                sketch.point(v, format!("{}'({}')", corner_letter(i), i + 1), LABEL_DEFAULT);
            }
            sketch.point(anchor, "O'", LABEL_DEFAULT);
        } else {
            for &v in vertices {
                sketch.line(v, anchor, LineStyle::Visible);
            }
            for (i, &v) in vertices.iter().enumerate() {
                sketch.point(v, format!("{}'", i + 1), LABEL_DEFAULT);
            }
            sketch.point(anchor, "o'", LABEL_DEFAULT);
        }

        // The edge angle opens upward from the XY line.
        let y = layout.reference_y;
        if let Some(&first) = vertices.first() {
            let foot = Vec2::new(first.x, y);
            sketch
                .construction(first, foot)
                .construction(foot, foot.offset(30.0, 0.0))
                .arc(foot, 20.0, -self.edge_angle, 0.0)
                .label(foot.offset(25.0, -15.0), format!("{}°", self.edge_angle));
        }
        sketch.finish()
    }

    pub fn projectors(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        let bottom_y = layout.reference_y + self.axis_length;
        let vertices = &self.front_view.vertices;
        for &v in vertices.iter().chain(std::iter::once(&self.front_view.anchor)) {
            sketch.construction(v, Vec2::new(v.x, bottom_y));
        }
        for (i, &v) in vertices.iter().enumerate() {
            sketch.point(Vec2::new(v.x, layout.reference_y), TOP_VIEW.base(i), LABEL_BELOW);
        }
        sketch.finish()
    }

    pub fn top_view(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        visibility::draw_threshold_view(&mut sketch, &self.top_view, &self.hidden, LABEL_BELOW, LABEL_BELOW);
        if let Some((from, to)) = self.top_view.axis() {
            sketch.construction(from, to);
        }
        sketch.finish()
    }

    pub fn plan(&self, layout: &LayoutConfig) -> StepPlan {
        let mut reference = Sketch::new(layout);
        reference.reference_line();
        let mut indicator = Sketch::new(layout);
        indicator.angle_indicator(self.edge_angle, "HP");

        let mut plan = StepPlan::new();
        plan.push(
            "Step 1: Draw XY Reference Line",
            "Drawing the reference line (XY line) for first angle projection. \
             Front View will be above this line, Top View below.",
            reference.finish(),
        )
        .push(
            "Step 2: Determine Base Orientation",
            format!(
                "The solid axis is perpendicular to VP. One base edge will be at {}° to HP (XY line).",
                self.edge_angle
            ),
            indicator.finish(),
        )
        .push(
            "Step 3: Draw True Shape in Front View",
            format!(
                "Drawing the {} base ({}-sided polygon) above the XY line. \
                 This is the true shape in the Front View.",
                self.solid,
                self.solid.sides()
            ),
            self.true_shape(layout),
        )
        .push(
            "Step 4: Project to Top View",
            "Drawing vertical projectors from each corner in the front view \
             to create the top view below the XY line.",
            self.projectors(layout),
        )
        .push(
            "Step 5: Complete Projection with Visible and Hidden Edges",
            "Completing the top view by identifying visible edges (solid lines) \
             and hidden edges (dashed lines).",
            self.top_view(layout),
        );
        plan
    }
}
