//! Edge visibility for derived views.
//!
//! Two classifiers exist. The threshold classifier hides a corner that
//! lies behind a reference depth and then forces outline corners visible.
//! The hull classifier decides per edge from the convex outline of the
//! view and the way its edges cross the top face.

use crate::kernel::{self, HullSet, HULL_EDGE_TOLERANCE};
use crate::render::Sketch;
use crate::structs::{EdgeKind, ViewCorners, ViewEdge};
use orthoproj_core::geom::{BBox2, Vec2};
use orthoproj_core::model::LineStyle;
use tracing::debug;

/// Tolerance for a corner to count as lying on the view's outline.
pub const SILHOUETTE_EPS: f64 = 0.5;

/// Clears the hidden flag of every corner index whose base or top corner
/// touches the left or right side of `extents`.
pub fn apply_silhouette(view: &ViewCorners, extents: BBox2, hidden: &mut [bool]) {
    let on_outline = |p: Vec2| extents.touches_x(p.x, SILHOUETTE_EPS);
    for (i, flag) in hidden.iter_mut().enumerate() {
        let base = view.base().get(i).map(|c| c.at);
        let top = view.top().and_then(|t| t.get(i)).map(|c| c.at);
        if base.is_some_and(on_outline) || top.is_some_and(on_outline) {
            *flag = false;
        }
    }
}

/// Per-corner threshold test followed by the silhouette override against
/// `extents`, usually [`ViewCorners::bbox`] or [`ViewCorners::rim_bbox`].
pub fn classify_threshold<F>(view: &ViewCorners, extents: BBox2, mut is_behind: F) -> Vec<bool>
where
    F: FnMut(usize) -> bool,
{
    let mut hidden: Vec<bool> = (0..view.sides()).map(&mut is_behind).collect();
    apply_silhouette(view, extents, &mut hidden);
    debug!(
        hidden = hidden.iter().filter(|h| **h).count(),
        sides = view.sides(),
        "threshold visibility"
    );
    hidden
}

/// An edge is hidden when both ends are hidden; a side edge follows its
/// corner.
pub fn threshold_edge_hidden(kind: EdgeKind, hidden: &[bool]) -> bool {
    let n = hidden.len();
    match kind {
        EdgeKind::Base(i) | EdgeKind::Top(i) => hidden[i] && hidden[(i + 1) % n],
        EdgeKind::Side(i) => hidden[i],
    }
}

/// Draws every edge, hidden ones first so visible strokes land on top.
pub fn draw_edges<F>(sketch: &mut Sketch<'_>, edges: &[ViewEdge], mut is_hidden: F)
where
    F: FnMut(&ViewEdge) -> bool,
{
    let flags: Vec<bool> = edges.iter().map(&mut is_hidden).collect();
    for pass_hidden in [true, false] {
        for (edge, &hidden) in edges.iter().zip(&flags) {
            if hidden == pass_hidden {
                sketch.line(edge.a, edge.b, LineStyle::edge(hidden));
            }
        }
    }
}

/// Labels every corner: base with `base_offset`, top and apex with
/// `far_offset`.
pub fn label_corners(sketch: &mut Sketch<'_>, view: &ViewCorners, base_offset: Vec2, far_offset: Vec2) {
    match view {
        ViewCorners::Prism { base, top } => {
            for (b, t) in base.iter().zip(top) {
                sketch.point(b.at, b.label.clone(), base_offset);
                sketch.point(t.at, t.label.clone(), far_offset);
            }
        }
        ViewCorners::Pyramid { base, apex } => {
            for b in base {
                sketch.point(b.at, b.label.clone(), base_offset);
            }
            sketch.point(apex.at, apex.label.clone(), far_offset);
        }
    }
}

/// Threshold-classified view: two-pass edges, then labels.
pub fn draw_threshold_view(sketch: &mut Sketch<'_>, view: &ViewCorners, hidden: &[bool], base_offset: Vec2, far_offset: Vec2) {
    draw_edges(sketch, &view.edges(), |e| threshold_edge_hidden(e.kind, hidden));
    label_corners(sketch, view, base_offset, far_offset);
}

/// Every edge visible, then labels.
pub fn draw_plain_view(sketch: &mut Sketch<'_>, view: &ViewCorners, base_offset: Vec2, far_offset: Vec2) {
    draw_edges(sketch, &view.edges(), |_| false);
    label_corners(sketch, view, base_offset, far_offset);
}

/// Hidden flags for the edges of a view, decided from its convex outline.
#[derive(Debug, Clone, PartialEq)]
pub struct HullVisibility {
    pub hull: Vec<Vec2>,
    pub base_hidden: Vec<bool>,
    pub side_hidden: Vec<bool>,
}

impl HullVisibility {
    pub fn classify(view: &ViewCorners) -> Self {
        let points = view.points();
        let hull = kernel::convex_hull(&points);
        let base: Vec<Vec2> = view.base().iter().map(|c| c.at).collect();
        let n = base.len();
        let on_hull = |a: Vec2, b: Vec2| kernel::is_edge_on_hull(a, b, &hull, HULL_EDGE_TOLERANCE);

        let base_hidden: Vec<bool> = match view {
            ViewCorners::Prism { top, .. } => {
                let top_face: Vec<Vec2> = top.iter().map(|c| c.at).collect();
                (0..n)
                    .map(|i| {
                        let (a, b) = (base[i], base[(i + 1) % n]);
                        !on_hull(a, b)
                            && (kernel::crosses_polygon(a, b, &top_face)
                                || kernel::point_in_polygon(a.midpoint(b), &top_face))
                    })
                    .collect()
            }
            ViewCorners::Pyramid { .. } => {
                let set = HullSet::from_hull(&hull);
                (0..n)
                    .map(|i| {
                        let (a, b) = (base[i], base[(i + 1) % n]);
                        !on_hull(a, b) && !set.contains(a) && !set.contains(b)
                    })
                    .collect()
            }
        };

        let both_neighbours_hidden = |i: usize| base_hidden[(i + n - 1) % n] && base_hidden[i];
        let side_hidden: Vec<bool> = match view {
            ViewCorners::Prism { top, .. } => {
                let top_face: Vec<Vec2> = top.iter().map(|c| c.at).collect();
                (0..n)
                    .map(|i| {
                        let (a, b) = (base[i], top_face[i]);
                        !on_hull(a, b)
                            && (kernel::crosses_polygon(a, b, &top_face) || both_neighbours_hidden(i))
                    })
                    .collect()
            }
            ViewCorners::Pyramid { apex, .. } => (0..n)
                .map(|i| !on_hull(base[i], apex.at) && both_neighbours_hidden(i))
                .collect(),
        };

        debug!(
            hull = hull.len(),
            hidden_base = base_hidden.iter().filter(|h| **h).count(),
            hidden_side = side_hidden.iter().filter(|h| **h).count(),
            "hull visibility"
        );
        Self {
            hull,
            base_hidden,
            side_hidden,
        }
    }

    /// Top-face edges are never hidden.
    pub fn edge_hidden(&self, kind: EdgeKind) -> bool {
        match kind {
            EdgeKind::Base(i) => self.base_hidden[i],
            EdgeKind::Top(_) => false,
            EdgeKind::Side(i) => self.side_hidden[i],
        }
    }

    pub fn draw(&self, sketch: &mut Sketch<'_>, view: &ViewCorners, base_offset: Vec2, far_offset: Vec2) {
        draw_edges(sketch, &view.edges(), |e| self.edge_hidden(e.kind));
        label_corners(sketch, view, base_offset, far_offset);
    }
}
