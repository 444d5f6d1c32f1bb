//! The four classical positions of the solid's axis.
//!
//! Each case computes its views once, phase by phase, and then lays the
//! resulting primitive groups out as a [`StepPlan`](crate::plan::StepPlan).

pub mod case_a;
pub mod case_b;
pub mod case_c;
pub mod case_d;

use crate::base::RegularBase;
use crate::structs::{Corner, LabelScheme, ViewCorners};
use orthoproj_core::geom::Vec2;
use orthoproj_core::solid::Solid;

/// Distance from the left end of the XY line to the first true-shape
/// corner, and the gap kept between that shape and the XY line.
pub const TRUE_SHAPE_INSET: Vec2 = Vec2::new(40.0, 30.0);

/// Horizontal shift applied to a rotated view so it clears the view it was
/// rotated from.
pub fn phase_offset(base_edge: f64) -> f64 {
    45.0 + 2.0 * base_edge
}

/// Projects a true shape straight across the XY line.
///
/// Every corner keeps its x. Base corners land on `near_y`; top corners of
/// a prism, or the apex of a pyramid, land on `far_y`. `depth` picks the
/// coordinate of the true-shape point that each new corner remembers.
pub fn project_true_shape<D>(
    solid: Solid,
    shape: &RegularBase,
    labels: LabelScheme,
    near_y: f64,
    far_y: f64,
    depth: D,
) -> ViewCorners
where
    D: Fn(Vec2) -> f64,
{
    let corner = |p: Vec2, y: f64, label: String| Corner {
        at: Vec2::new(p.x, y),
        label,
        depth: depth(p),
    };
    let base: Vec<Corner> = shape
        .vertices
        .iter()
        .enumerate()
        .map(|(i, &v)| corner(v, near_y, labels.base(i)))
        .collect();
    if solid.is_prism() {
        ViewCorners::Prism {
            base,
            top: shape
                .vertices
                .iter()
                .enumerate()
                .map(|(i, &v)| corner(v, far_y, labels.top(i)))
                .collect(),
        }
    } else {
        ViewCorners::Pyramid {
            base,
            apex: corner(shape.anchor, far_y, labels.apex()),
        }
    }
}

/// Rotates every corner of `view` about `pivot` and shifts the result right
/// by `offset`. Depths are carried over unchanged.
pub fn rotate_view(view: &ViewCorners, pivot: Vec2, angle: f64, offset: f64, labels: LabelScheme) -> ViewCorners {
    view.derive(labels, |c| {
        (crate::kernel::rotate(c.at, pivot, angle).offset(offset, 0.0), c.depth)
    })
}

/// Meets each projector from `view` with the locus at that corner's depth.
/// The new corners remember the y they came from.
pub fn intersect_loci(view: &ViewCorners, labels: LabelScheme) -> ViewCorners {
    view.derive(labels, |c| (Vec2::new(c.at.x, c.depth), c.at.y))
}
