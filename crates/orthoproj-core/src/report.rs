use crate::model::Step;
use crate::solid::Solid;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidProperties {
    pub sides: usize,
    pub is_prism: bool,
    pub is_pyramid: bool,
    pub circumradius: f64,
}

impl SolidProperties {
    pub fn new(solid: Solid, base_edge: f64) -> Self {
        Self {
            sides: solid.sides(),
            is_prism: solid.is_prism(),
            is_pyramid: solid.is_pyramid(),
            circumradius: solid.circumradius(base_edge),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMetadata {
    /// Initial edge angle picked from the resting condition; only set for
    /// the inclined cases.
    pub computed_beta: Option<f64>,
    pub reference_line_length: f64,
    pub solid_properties: SolidProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub total_steps: usize,
    pub steps: Vec<Step>,
    pub metadata: ProjectionMetadata,
}

impl ProjectionReport {
    /// Looks a step up by its 1-based number.
    pub fn step(&self, number: usize) -> Option<&Step> {
        self.steps.iter().find(|s| s.number == number)
    }

    pub fn final_step(&self) -> Option<&Step> {
        self.steps.last()
    }
}
