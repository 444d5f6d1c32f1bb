//! Axis inclined to both planes.
//!
//! Phases I and II are case C. Phase III turns case C's top view by the
//! angle to the vertical plane and projects the final front view from it.

use super::case_c::CaseC;
use super::{intersect_loci, phase_offset, rotate_view};
use crate::kernel::deg_to_rad;
use crate::plan::StepPlan;
use crate::render::{Sketch, LABEL_ABOVE, LABEL_BELOW, LABEL_DEFAULT};
use crate::structs::{Corner, LabelScheme, ViewCorners};
use crate::visibility;
use orthoproj_core::geom::Vec2;
use orthoproj_core::layout::LayoutConfig;
use orthoproj_core::model::Primitive;
use orthoproj_core::request::ProjectionRequest;
use tracing::debug;

const ROTATED_TOP: LabelScheme = LabelScheme::new("₂");
const FINAL_FRONT: LabelScheme = LabelScheme::new("₂'");

/// Projectors of the last phase stop this far above the XY line.
pub const FRONT_BAND_HEIGHT: f64 = 150.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CaseD {
    pub axis_angle_vp: f64,
    pub phase_two: CaseC,
    pub pivot: Vec2,
    pub rotated_top: ViewCorners,
    pub front_view: ViewCorners,
    pub hidden: Vec<bool>,
}

impl CaseD {
    pub fn build(request: &ProjectionRequest, layout: &LayoutConfig) -> Self {
        let phase_two = CaseC::build(
            request.solid,
            layout,
            request.base_edge,
            request.axis_length,
            request.axis_angle_hp,
            request.resting_on,
        );
        let axis_angle_vp = request.axis_angle_vp;

        let previous = &phase_two.top_view;
        let pivot = previous.pivot().unwrap_or(phase_two.pivot);
        let rotated_top = rotate_view(
            previous,
            pivot,
            deg_to_rad(axis_angle_vp),
            phase_offset(request.base_edge),
            ROTATED_TOP,
        );
        let front_view = intersect_loci(&rotated_top, FINAL_FRONT);

        // Corners further from the XY line than the mean of the turned top
        // view are behind it.
        let mean_y = |corners: &[Corner]| {
            Vec2::mean(corners.iter().map(|c| c.at)).map_or(0.0, |p| p.y)
        };
        let mut centre_y = mean_y(rotated_top.base());
        if let Some(top) = rotated_top.top() {
            centre_y = (centre_y + mean_y(top)) / 2.0;
        }
        let hidden = visibility::classify_threshold(&front_view, front_view.bbox(), |i| {
            rotated_top.base()[i].at.y > centre_y
        });
        debug!(axis_angle_vp, centre_y, "case D phase III computed");

        Self {
            axis_angle_vp,
            phase_two,
            pivot,
            rotated_top,
            front_view,
            hidden,
        }
    }

    pub fn rotated_top_view(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        visibility::draw_plain_view(&mut sketch, &self.rotated_top, LABEL_BELOW, LABEL_ABOVE);
        sketch.finish()
    }

    pub fn projectors_and_loci(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        let projector_end = layout.reference_y - FRONT_BAND_HEIGHT;
        let locus_end = self.rotated_top.bbox().max.x + super::case_c::LOCUS_OVERSHOOT;

        for p in self.rotated_top.points() {
            sketch.construction(p, Vec2::new(p.x, projector_end));
        }
        for p in self.phase_two.rotated_front.points() {
            sketch.construction(p, Vec2::new(locus_end, p.y));
        }
        for corner in self.front_view.base() {
            sketch.point(corner.at, corner.label.clone(), LABEL_DEFAULT);
        }
        for corner in self.front_view.corners().skip(self.front_view.sides()) {
            sketch.point(corner.at, corner.label.clone(), LABEL_ABOVE);
        }
        sketch.finish()
    }

    pub fn final_front_view(&self, layout: &LayoutConfig) -> Vec<Primitive> {
        let mut sketch = Sketch::new(layout);
        visibility::draw_threshold_view(&mut sketch, &self.front_view, &self.hidden, LABEL_BELOW, LABEL_ABOVE);
        if let Some((from, to)) = self.front_view.axis() {
            sketch.construction(from, to);
        }
        sketch.finish()
    }

    pub fn plan(&self, layout: &LayoutConfig) -> StepPlan {
        let c = &self.phase_two;
        let (beta, resting, alpha, phi) = (c.beta, c.resting_on, c.axis_angle, self.axis_angle_vp);
        let titles = [
            "Phase I - Step 1: Draw XY Reference Line",
            "Phase I - Step 2: Determine Base Orientation",
            "Phase I - Step 3: Draw Initial Top View (True Shape)",
            "Phase I - Step 4: Project to Initial Front View",
            "Phase I - Step 5: Complete Initial Front View",
            "Phase II - Step 6: Draw Final FV (Axis Inclined to HP)",
            "Phase II - Step 7: Project to Intermediate Top View",
            "Phase II - Step 8: Complete Intermediate Top View",
            "Phase III - Step 9: Rotate TV for VP Inclination",
            "Phase III - Step 10: Project to Final Front View",
            "Phase III - Step 11: Complete Final Front View",
        ];
        let descriptions = [
            "Drawing the XY line. Phase I places the solid with axis ⊥ HP.".to_string(),
            format!("Initial position: β = {beta}° (from resting condition: {resting})."),
            format!("Drawing initial true shape with β = {beta}°."),
            "Drawing projectors from initial TV to initial FV.".to_string(),
            "Initial FV complete. Axis is vertical (⊥ HP) in this position.".to_string(),
            format!("Rotating FV by {alpha}° so axis inclines to HP at α = {alpha}°."),
            "Drawing projectors and loci to find intermediate TV.".to_string(),
            "Intermediate TV complete (axis inclined to HP only).".to_string(),
            format!("Rotating intermediate TV by {phi}° so axis inclines to VP at φ = {phi}°."),
            "Drawing projectors from rotated TV and loci from Phase II FV to find final FV.".to_string(),
            "Final FV complete with visible and hidden edges. Axis is now inclined to both HP and VP."
                .to_string(),
        ];

        let phase_two = c.groups(layout);
        let phase_three = [
            self.rotated_top_view(layout),
            self.projectors_and_loci(layout),
            self.final_front_view(layout),
        ];
        let groups = phase_two.into_iter().chain(phase_three);

        let mut plan = StepPlan::new();
        for ((title, description), primitives) in titles.into_iter().zip(descriptions).zip(groups) {
            plan.push(title, description, primitives);
        }
        plan
    }
}
