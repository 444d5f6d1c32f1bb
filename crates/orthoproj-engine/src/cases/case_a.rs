//! Axis perpendicular to the horizontal plane.
//!
//! The base shows in true shape below the XY line; the front view is a
//! set of vertical edges projected straight up from it.

use super::{project_true_shape, TRUE_SHAPE_INSET};
use crate::base::{generate_base, RegularBase};
use crate::kernel::deg_to_rad;
use crate::plan::StepPlan;
use crate::render::{Sketch, LABEL_ABOVE, LABEL_BELOW, LABEL_DEFAULT};
use crate::structs::{corner_letter, LabelScheme, ViewCorners};
use crate::visibility;
use orthoproj_core::geom::Vec2;
use orthoproj_core::layout::LayoutConfig;
use orthoproj_core::model::{LineStyle, Primitive};
use orthoproj_core::solid::Solid;
use tracing::debug;

const FRONT_VIEW: LabelScheme = LabelScheme::new("'");

/// Top view in true shape and the front view projected from it.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseA {
    pub solid: Solid,
    pub edge_angle: f64,
    pub axis_length: f64,
    pub top_view: RegularBase,
    pub front_view: ViewCorners,
    pub hidden: Vec<bool>,
}

impl CaseA {
    pub fn build(solid: Solid, layout: &LayoutConfig, base_edge: f64, axis_length: f64, edge_angle: f64) -> Self {
        let start = Vec2::new(
            layout.reference_start_x + TRUE_SHAPE_INSET.x,
            layout.reference_y + TRUE_SHAPE_INSET.y + base_edge,
        );
        let top_view = generate_base(start, base_edge, deg_to_rad(edge_angle), solid.sides());
        let front_view = project_true_shape(
            solid,
            &top_view,
            FRONT_VIEW,
            layout.reference_y,
            layout.reference_y - axis_length,
            |p| p.y,
        );
        // Corners nearer the XY line than the centre are on the far side.
        let centre_y = top_view.anchor.y;
        let hidden = visibility::classify_threshold(&front_view, front_view.bbox(), |i| front_view.base()[i].depth < centre_y);
        debug!(sides = solid.sides(), edge_angle, "case A views computed");
        Self {
            solid,
            edge_angle,
            axis_length,
            top_view,
            front_view,
            hidden,
        }
    }

    pub fn reference_line(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        sketch.reference_line();
        sketch.finish()
    }

    pub fn angle_indicator(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        sketch.angle_indicator(self.edge_angle, "VP");
        sketch.finish()
    }

    /// Base polygon, corner labels and the edge angle measured at the first
    /// corner against the XY line.
    pub fn true_shape(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        let vertices = &self.top_view.vertices;
        let anchor = self.top_view.anchor;
        sketch.polygon(vertices.clone(), LineStyle::Visible, true);
        if self.solid.is_prism() {
            for (i, &v) in vertices.iter().enumerate() {
                sketch.point(v, format!("{}({})", corner_letter(i), i + 1), LABEL_DEFAULT);
            }
            sketch.point(anchor, "O", LABEL_DEFAULT);
        } else {
            for &v in vertices {
                sketch.line(v, anchor, LineStyle::Visible);
            }
            for (i, &v) in vertices.iter().enumerate() {
                sketch.point(v, (i + 1).to_string(), LABEL_DEFAULT);
            }
            sketch.point(anchor, "o", LABEL_DEFAULT);
        }

        let y = layout.reference_y;
        if let Some(&first) = vertices.first() {
            let foot = Vec2::new(first.x, y);
            sketch
                .construction(foot, foot.offset(30.0, 0.0))
                .construction(first, foot)
                .arc(foot, 20.0, 0.0, self.edge_angle)
                .label(foot.offset(25.0, 15.0), format!("{}°", self.edge_angle));
        }
        sketch.finish()
    }

    /// Vertical projectors from the top view up to the top of the front
    /// view, with the points where they cross the XY line.
    pub fn projectors(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        let top_y = layout.reference_y - self.axis_length;
        let vertices = &self.top_view.vertices;
        for &v in vertices.iter().chain(std::iter::once(&self.top_view.anchor)) {
            sketch.construction(v, Vec2::new(v.x, top_y));
        }
        for (i, &v) in vertices.iter().enumerate() {
            sketch.point(Vec2::new(v.x, layout.reference_y), FRONT_VIEW.base(i), LABEL_ABOVE);
        }
        sketch.finish()
    }

    pub fn front_view(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        visibility::draw_threshold_view(&mut sketch, &self.front_view, &self.hidden, LABEL_BELOW, LABEL_ABOVE);
        if let Some((from, to)) = self.front_view.axis() {
            sketch.construction(from, to);
        }
        sketch.finish()
    }

    /// Primitive groups of steps 1 to 5, in order.
    pub fn groups(&self, layout: &LayoutConfig) -> [Vec<Primitive>; 5] {
        [
            self.reference_line(layout),
            self.angle_indicator(layout),
            self.true_shape(layout),
            self.projectors(layout),
            self.front_view(layout),
        ]
    }

    pub fn plan(&self, layout: &LayoutConfig) -> StepPlan {
        let descriptions = [
            "Drawing the reference line (XY line) for first angle projection. \
             Top View will be below this line, Front View above."
                .to_string(),
            format!(
                "The solid axis is perpendicular to HP. One base edge will be at {}° to VP (XY line).",
                self.edge_angle
            ),
            format!(
                "Drawing the {} base ({}-sided polygon) below the XY line. This is the true shape.",
                self.solid,
                self.solid.sides()
            ),
            "Drawing vertical projectors from each corner in the top view to create the front view."
                .to_string(),
            "Completing the front view by identifying visible edges (solid lines) \
             and hidden edges (dashed lines)."
                .to_string(),
        ];
        let titles = [
            "Step 1: Draw XY Reference Line",
            "Step 2: Determine Base Orientation",
            "Step 3: Draw True Shape in Top View",
            "Step 4: Project to Front View",
            "Step 5: Complete Projection with Visible and Hidden Edges",
        ];
        let mut plan = StepPlan::new();
        for ((title, description), primitives) in titles.into_iter().zip(descriptions).zip(self.groups(layout)) {
            plan.push(title, description, primitives);
        }
        plan
    }
}
