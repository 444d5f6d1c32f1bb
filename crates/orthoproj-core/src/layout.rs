use crate::request::ProjectionRequest;
use serde::{Deserialize, Serialize};

/// Where the shared reference line sits on the canvas, plus the text and
/// marker sizes every primitive uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub reference_y: f64,
    pub reference_start_x: f64,
    pub reference_length: f64,
    pub font_size: f64,
    pub point_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::for_canvas(1200.0, 700.0, 300.0)
    }
}

impl LayoutConfig {
    pub fn for_canvas(canvas_width: f64, canvas_height: f64, reference_length: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            reference_y: canvas_height / 2.0,
            reference_start_x: (canvas_width - reference_length) / 2.0,
            reference_length,
            font_size: 12.0,
            point_radius: 2.0,
        }
    }

    /// Inclined cases need room for two extra views, so their reference
    /// line is stretched further.
    pub fn for_request(request: &ProjectionRequest) -> Self {
        let length = if request.case.is_inclined() {
            (8.0 * request.axis_length).max(500.0)
        } else {
            (5.0 * request.axis_length).max(300.0)
        };
        Self::for_canvas(request.canvas_width, request.canvas_height, length)
    }

    pub fn reference_end_x(&self) -> f64 {
        self.reference_start_x + self.reference_length
    }
}
