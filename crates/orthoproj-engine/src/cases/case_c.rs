//! Axis inclined to the horizontal plane.
//!
//! Phase I draws case A with an edge angle chosen from the resting
//! condition. Phase II tilts that front view about its lowest right corner
//! and recovers the top view from projectors and loci.

use super::case_a::CaseA;
use super::{intersect_loci, phase_offset, rotate_view};
use crate::kernel::deg_to_rad;
use crate::plan::StepPlan;
use crate::render::{Sketch, LABEL_ABOVE, LABEL_BELOW, LABEL_DEFAULT};
use crate::structs::{LabelScheme, ViewCorners};
use crate::visibility::{self, HullVisibility};
use orthoproj_core::geom::Vec2;
use orthoproj_core::layout::LayoutConfig;
use orthoproj_core::model::Primitive;
use orthoproj_core::solid::{RestingOn, Solid};
use tracing::debug;

const ROTATED_FRONT: LabelScheme = LabelScheme::new("₁'");
const DERIVED_TOP: LabelScheme = LabelScheme::new("₁");

/// How far projectors run past the lowest top-view point.
pub const PROJECTOR_OVERSHOOT: f64 = 20.0;
/// How far loci run past the rightmost point they are aimed at.
pub const LOCUS_OVERSHOOT: f64 = 30.0;

/// Initial edge angle in degrees for a solid resting on the ground plane.
///
/// Resting on a corner uses a fixed per-shape convention rather than a
/// formula in the number of sides.
pub fn resting_beta(solid: Solid, resting_on: RestingOn) -> f64 {
    match resting_on {
        RestingOn::BaseEdge => 90.0,
        RestingOn::BaseCorner => match solid.sides() {
            3 | 5 => 270.0,
            4 => 45.0,
            _ => 0.0,
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseC {
    pub beta: f64,
    pub axis_angle: f64,
    pub resting_on: RestingOn,
    pub initial: CaseA,
    pub pivot: Vec2,
    pub rotated_front: ViewCorners,
    pub rotated_hidden: Vec<bool>,
    pub top_view: ViewCorners,
    pub top_visibility: HullVisibility,
}

impl CaseC {
    pub fn build(
        solid: Solid,
        layout: &LayoutConfig,
        base_edge: f64,
        axis_length: f64,
        axis_angle: f64,
        resting_on: RestingOn,
    ) -> Self {
        let beta = resting_beta(solid, resting_on);
        let initial = CaseA::build(solid, layout, base_edge, axis_length, beta);

        let pivot = initial.front_view.pivot().unwrap_or(initial.top_view.anchor);
        let rotated_front = rotate_view(
            &initial.front_view,
            pivot,
            deg_to_rad(axis_angle),
            phase_offset(base_edge),
            ROTATED_FRONT,
        );
        // Depth still refers to the initial top view, so the case A test
        // applies. A tilted apex can overhang the base, so the outline is
        // taken from base and top corners only.
        let centre_y = initial.top_view.anchor.y;
        let rotated_hidden = visibility::classify_threshold(&rotated_front, rotated_front.rim_bbox(), |i| {
            rotated_front.base()[i].depth < centre_y
        });

        let top_view = intersect_loci(&rotated_front, DERIVED_TOP);
        let top_visibility = HullVisibility::classify(&top_view);
        debug!(beta, axis_angle, pivot_x = pivot.x, pivot_y = pivot.y, "case C phase II computed");

        Self {
            beta,
            axis_angle,
            resting_on,
            initial,
            pivot,
            rotated_front,
            rotated_hidden,
            top_view,
            top_visibility,
        }
    }

    pub fn rotated_front_view(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        visibility::draw_threshold_view(
            &mut sketch,
            &self.rotated_front,
            &self.rotated_hidden,
            LABEL_BELOW,
            LABEL_ABOVE,
        );
        if let Some((from, to)) = self.rotated_front.axis() {
            sketch.construction(from, to);
        }
        sketch.finish()
    }

    /// Vertical projectors from the tilted front view, horizontal loci from
    /// the initial top view, and the points where each pair meets.
    pub fn projectors_and_loci(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        let shape = &self.initial.top_view;
        let shape_points: Vec<Vec2> = shape
            .vertices
            .iter()
            .copied()
            .chain(std::iter::once(shape.anchor))
            .collect();

        let projector_end = shape_points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max) + PROJECTOR_OVERSHOOT;
        let locus_end = self.rotated_front.bbox().max.x + LOCUS_OVERSHOOT;

        for p in self.rotated_front.points() {
            sketch.construction(p, Vec2::new(p.x, projector_end));
        }
        for &p in &shape_points {
            sketch.construction(p, Vec2::new(locus_end, p.y));
        }

        match &self.top_view {
            ViewCorners::Prism { base, top } => {
                for c in base {
                    sketch.point(c.at, c.label.clone(), LABEL_DEFAULT);
                }
                for c in top {
                    sketch.point(c.at, c.label.clone(), LABEL_BELOW);
                }
            }
            ViewCorners::Pyramid { base, apex } => {
                for c in base {
                    sketch.point(c.at, c.label.clone(), LABEL_DEFAULT);
                }
                sketch.point(apex.at, apex.label.clone(), LABEL_DEFAULT);
            }
        }
        sketch.finish()
    }

    pub fn final_top_view(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        self.top_visibility.draw(&mut sketch, &self.top_view, LABEL_BELOW, LABEL_ABOVE);
        sketch.finish()
    }

    /// Primitive groups of steps 1 to 8, in order.
    pub fn groups(&self, layout: &LayoutConfig) -> [Vec<Primitive>; 8] {
        let [reference, indicator, true_shape, projectors, front] = self.initial.groups(layout);
        [
            reference,
            indicator,
            true_shape,
            projectors,
            front,
            self.rotated_front_view(layout),
            self.projectors_and_loci(layout),
            self.final_top_view(layout),
        ]
    }

    pub fn plan(&self, layout: &LayoutConfig) -> StepPlan {
        let beta = self.beta;
        let resting = self.resting_on;
        let titles = [
            "Phase I - Step 1: Draw XY Reference Line",
            "Phase I - Step 2: Determine Base Orientation",
            "Phase I - Step 3: Draw Initial Top View (True Shape)",
            "Phase I - Step 4: Project to Initial Front View",
            "Phase I - Step 5: Complete Initial Front View",
            "Phase II - Step 6: Draw Final Front View (Axis Inclined)",
            "Phase II - Step 7: Project to Final Top View",
            "Phase II - Step 8: Complete Final Top View",
        ];
        let descriptions = [
            "Drawing the XY line. Phase I places the solid with axis ⊥ HP to get the initial views.".to_string(),
            format!("Initial position: edge angle β = {beta}° (auto-determined from resting condition: {resting})."),
            format!("Drawing the solid base with β = {beta}°. This is the true shape in the initial position."),
            "Drawing projectors from initial TV to get the initial FV.".to_string(),
            "Initial FV complete with visible and hidden edges. The axis is vertical (⊥ HP) here.".to_string(),
            format!(
                "Rotating the initial FV by {}° about the lower-right pivot so the axis is inclined to HP.",
                self.axis_angle
            ),
            "Drawing vertical projectors from final FV and horizontal loci from initial TV \
             to find intersection points."
                .to_string(),
            "Joining the intersection points to get the final TV with visible and hidden edges.".to_string(),
        ];
        let mut plan = StepPlan::new();
        for ((title, description), primitives) in titles.into_iter().zip(descriptions).zip(self.groups(layout)) {
            plan.push(title, description, primitives);
        }
        plan
    }
}
