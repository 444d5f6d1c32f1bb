use orthoproj_core::error::Result;
use orthoproj_core::layout::LayoutConfig;
use orthoproj_core::report::{ProjectionMetadata, ProjectionReport, SolidProperties};
use orthoproj_core::request::ProjectionRequest;
use orthoproj_core::solid::CaseKind;
use tracing::{info, instrument};

pub mod base;
pub mod cases;
pub mod kernel;
pub mod plan;
pub mod render;
pub mod structs;
pub mod visibility;

use cases::case_a::CaseA;
use cases::case_b::CaseB;
use cases::case_c::{resting_beta, CaseC};
use cases::case_d::CaseD;
use plan::StepPlan;

/// Computes every construction step for `request` on the layout derived
/// from its canvas.
pub fn project(request: &ProjectionRequest) -> Result<ProjectionReport> {
    project_with_layout(request, &LayoutConfig::for_request(request))
}

#[instrument(skip_all, fields(solid = %request.solid, case = %request.case))]
pub fn project_with_layout(request: &ProjectionRequest, layout: &LayoutConfig) -> Result<ProjectionReport> {
    // 1. Reject bad input before any geometry
    request.validate()?;

    // 2. Run the phases and lay them out as steps
    let plan = build_plan(request, layout);
    let steps = plan.into_steps();

    // 3. Metadata
    let computed_beta = request
        .case
        .is_inclined()
        .then(|| resting_beta(request.solid, request.resting_on));
    let metadata = ProjectionMetadata {
        computed_beta,
        reference_line_length: layout.reference_length,
        solid_properties: SolidProperties::new(request.solid, request.base_edge),
    };

    info!(steps = steps.len(), "projection complete");
    Ok(ProjectionReport {
        total_steps: steps.len(),
        steps,
        metadata,
    })
}

/// The step plan for an already validated request.
pub fn build_plan(request: &ProjectionRequest, layout: &LayoutConfig) -> StepPlan {
    let solid = request.solid;
    match request.case {
        CaseKind::A => CaseA::build(solid, layout, request.base_edge, request.axis_length, request.edge_angle)
            .plan(layout),
        CaseKind::B => CaseB::build(solid, layout, request.base_edge, request.axis_length, request.edge_angle)
            .plan(layout),
        CaseKind::C => CaseC::build(
            solid,
            layout,
            request.base_edge,
            request.axis_length,
            request.axis_angle_hp,
            request.resting_on,
        )
        .plan(layout),
        CaseKind::D => CaseD::build(request, layout).plan(layout),
    }
}
