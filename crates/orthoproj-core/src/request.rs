use crate::error::{ProjectionError, Result};
use crate::solid::{CaseKind, RestingOn, Solid};
use serde::{Deserialize, Serialize};

/// Inputs for one projection run.
///
/// Angles are in degrees. `edge_angle` drives cases A and B; cases C and D
/// derive their initial edge angle from `resting_on` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionRequest {
    pub solid: Solid,
    pub case: CaseKind,
    pub base_edge: f64,
    pub axis_length: f64,
    pub edge_angle: f64,
    pub axis_angle_hp: f64,
    pub axis_angle_vp: f64,
    pub resting_on: RestingOn,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for ProjectionRequest {
    fn default() -> Self {
        Self {
            solid: Solid::HEXAGONAL_PRISM,
            case: CaseKind::A,
            base_edge: 40.0,
            axis_length: 80.0,
            edge_angle: 30.0,
            axis_angle_hp: 45.0,
            axis_angle_vp: 0.0,
            resting_on: RestingOn::BaseEdge,
            canvas_width: 1200.0,
            canvas_height: 700.0,
        }
    }
}

impl ProjectionRequest {
    pub fn new(solid: Solid, case: CaseKind) -> Self {
        Self {
            solid,
            case,
            ..Self::default()
        }
    }

    /// Checks the numeric ranges a caller is expected to respect.
    pub fn validate(&self) -> Result<()> {
        check_open_closed("base_edge", self.base_edge, 200.0, "(0, 200]")?;
        check_open_closed("axis_length", self.axis_length, 400.0, "(0, 400]")?;
        check_angle("edge_angle", self.edge_angle)?;
        check_angle("axis_angle_hp", self.axis_angle_hp)?;
        check_angle("axis_angle_vp", self.axis_angle_vp)?;
        check_positive("canvas_width", self.canvas_width)?;
        check_positive("canvas_height", self.canvas_height)?;
        Ok(())
    }
}

fn check_open_closed(
    parameter: &'static str,
    value: f64,
    max: f64,
    range: &'static str,
) -> Result<()> {
    if value > 0.0 && value <= max {
        return Ok(());
    }
    Err(ProjectionError::OutOfRange {
        parameter,
        value,
        range,
    })
}

fn check_angle(parameter: &'static str, value: f64) -> Result<()> {
    if (0.0..=90.0).contains(&value) {
        return Ok(());
    }
    Err(ProjectionError::OutOfRange {
        parameter,
        value,
        range: "[0, 90]",
    })
}

fn check_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        return Ok(());
    }
    Err(ProjectionError::OutOfRange {
        parameter,
        value,
        range: "(0, inf)",
    })
}
