use approx::assert_abs_diff_eq;
use orthoproj_core::geom::Vec2;
use orthoproj_core::layout::LayoutConfig;
use orthoproj_core::request::ProjectionRequest;
use orthoproj_core::solid::{CaseKind, RestingOn, Solid};
use orthoproj_engine::cases::case_a::CaseA;
use orthoproj_engine::cases::case_b::CaseB;
use orthoproj_engine::cases::case_c::{resting_beta, CaseC};
use orthoproj_engine::cases::case_d::CaseD;
use orthoproj_engine::cases::phase_offset;
use orthoproj_engine::kernel::{convex_hull, is_edge_on_hull, HULL_EDGE_TOLERANCE};
use orthoproj_engine::structs::ViewCorners;
use orthoproj_engine::visibility::SILHOUETTE_EPS;

fn solid(id: &str) -> Solid {
    id.parse().unwrap()
}

/// Corners touching the view's left or right extent must never be hidden.
fn assert_silhouette_visible(view: &ViewCorners, hidden: &[bool], what: &str) {
    let bbox = view.bbox();
    for i in 0..view.sides() {
        let mut xs = vec![view.base()[i].at.x];
        if let Some(top) = view.top() {
            xs.push(top[i].at.x);
        }
        if xs.iter().any(|&x| bbox.touches_x(x, SILHOUETTE_EPS)) {
            assert!(!hidden[i], "{what}: outline corner {i} classified hidden");
        }
    }
}

#[test]
fn beta_from_resting_condition() {
    for s in Solid::all() {
        assert_eq!(resting_beta(s, RestingOn::BaseEdge), 90.0);
    }
    let table = [("triangular", 270.0), ("square", 45.0), ("pentagonal", 270.0), ("hexagonal", 0.0)];
    for (name, beta) in table {
        for kind in ["prism", "pyramid"] {
            let s = solid(&format!("{name}-{kind}"));
            assert_eq!(resting_beta(s, RestingOn::BaseCorner), beta, "{s}");
        }
    }
}

#[test]
fn case_a_front_view_sits_on_the_reference_line() {
    let layout = LayoutConfig::default();
    let a = CaseA::build(solid("pentagonal-prism"), &layout, 30.0, 70.0, 20.0);
    let ViewCorners::Prism { base, top } = &a.front_view else {
        panic!("prism expected");
    };
    for (i, (b, t)) in base.iter().zip(top).enumerate() {
        assert_eq!(b.at.y, layout.reference_y);
        assert_eq!(t.at.y, layout.reference_y - 70.0);
        assert_eq!(b.at.x, a.top_view.vertices[i].x);
        assert_eq!(b.depth, a.top_view.vertices[i].y);
    }
    assert_eq!(base[0].label, "1'");
    assert_eq!(top[4].label, "e'");
}

#[test]
fn case_a_pyramid_apex_is_above_the_centre() {
    let layout = LayoutConfig::default();
    let a = CaseA::build(solid("square-pyramid"), &layout, 40.0, 90.0, 15.0);
    let apex = a.front_view.apex().unwrap();
    assert_eq!(apex.at, Vec2::new(a.top_view.anchor.x, layout.reference_y - 90.0));
    assert_eq!(apex.label, "o'");
}

#[test]
fn case_a_hexagonal_prism_hides_only_the_back_lateral() {
    let layout = LayoutConfig::default();
    let a = CaseA::build(solid("hexagonal-prism"), &layout, 40.0, 80.0, 30.0);
    assert_eq!(a.hidden, vec![true, false, false, false, false, false]);
}

#[test]
fn case_b_top_view_hangs_below_the_reference_line() {
    let layout = LayoutConfig::default();
    let b = CaseB::build(solid("hexagonal-pyramid"), &layout, 40.0, 80.0, 30.0);
    assert!(b.front_view.vertices[0].y < layout.reference_y);
    for c in b.top_view.base() {
        assert_eq!(c.at.y, layout.reference_y);
    }
    let apex = b.top_view.apex().unwrap();
    assert_eq!(apex.at.y, layout.reference_y + 80.0);
    assert_eq!(apex.label, "o");
    assert_eq!(b.top_view.base()[2].label, "3");
}

#[test]
fn silhouette_invariant_holds_for_every_threshold_pass() {
    let layout = LayoutConfig::for_request(&ProjectionRequest {
        case: CaseKind::D,
        ..Default::default()
    });
    for s in Solid::all() {
        for angle in [0.0, 15.0, 30.0, 45.0, 60.0, 90.0] {
            let a = CaseA::build(s, &layout, 35.0, 75.0, angle);
            assert_silhouette_visible(&a.front_view, &a.hidden, "case A");

            let b = CaseB::build(s, &layout, 35.0, 75.0, angle);
            assert_silhouette_visible(&b.top_view, &b.hidden, "case B");

            for resting_on in [RestingOn::BaseEdge, RestingOn::BaseCorner] {
                let req = ProjectionRequest {
                    solid: s,
                    case: CaseKind::D,
                    base_edge: 35.0,
                    axis_length: 75.0,
                    axis_angle_hp: angle,
                    axis_angle_vp: 90.0 - angle,
                    resting_on,
                    ..Default::default()
                };
                let d = CaseD::build(&req, &layout);
                assert_silhouette_visible(&d.phase_two.rotated_front, &d.phase_two.rotated_hidden, "case C");
                assert_silhouette_visible(&d.front_view, &d.hidden, "case D");
            }
        }
    }
}

#[test]
fn case_c_rotates_about_the_lowest_right_corner() {
    let layout = LayoutConfig::default();
    let c = CaseC::build(solid("square-prism"), &layout, 40.0, 80.0, 30.0, RestingOn::BaseEdge);
    assert_eq!(c.beta, 90.0);

    let base = c.initial.front_view.base();
    let idx = (0..base.len())
        .max_by(|&i, &j| {
            let (p, q) = (base[i].at, base[j].at);
            p.x.total_cmp(&q.x).then(p.y.total_cmp(&q.y))
        })
        .unwrap();
    assert_eq!(c.pivot, base[idx].at);

    let moved = c.rotated_front.base()[idx].at;
    assert_abs_diff_eq!(moved.x, c.pivot.x + phase_offset(40.0), epsilon = 1e-9);
    assert_abs_diff_eq!(moved.y, c.pivot.y, epsilon = 1e-9);
    assert_eq!(c.rotated_front.base()[0].label, "1₁'");
    assert_eq!(c.rotated_front.top().unwrap()[1].label, "b₁'");
}

#[test]
fn case_c_top_view_meets_projectors_and_loci() {
    let layout = LayoutConfig::default();
    let c = CaseC::build(solid("pentagonal-pyramid"), &layout, 30.0, 70.0, 40.0, RestingOn::BaseCorner);
    for (i, corner) in c.top_view.base().iter().enumerate() {
        assert_eq!(corner.at.x, c.rotated_front.base()[i].at.x);
        assert_eq!(corner.at.y, c.initial.top_view.vertices[i].y);
        assert_eq!(corner.label, format!("{}₁", i + 1));
    }
    let apex = c.top_view.apex().unwrap();
    assert_eq!(apex.at.x, c.rotated_front.apex().unwrap().at.x);
    assert_eq!(apex.at.y, c.initial.top_view.anchor.y);
}

#[test]
fn case_c_hull_classification_covers_every_edge() {
    let layout = LayoutConfig::default();
    for s in Solid::all() {
        let c = CaseC::build(s, &layout, 40.0, 80.0, 45.0, RestingOn::BaseEdge);
        assert_eq!(c.top_visibility.base_hidden.len(), s.sides());
        assert_eq!(c.top_visibility.side_hidden.len(), s.sides());
        assert!(c.top_visibility.hull.len() >= 3);
    }
}

#[test]
fn case_c_square_prism_on_a_corner_hides_edges_under_the_top_face() {
    let layout = LayoutConfig::default();
    let c = CaseC::build(solid("square-prism"), &layout, 40.0, 80.0, 30.0, RestingOn::BaseCorner);
    let vis = &c.top_visibility;
    assert_eq!(vis.hull.len(), 6);
    assert_eq!(vis.base_hidden, vec![true, true, false, false]);
    assert_eq!(vis.side_hidden, vec![false, true, false, false]);
}

#[test]
fn case_c_hexagonal_prism_on_an_edge_hides_the_far_corner() {
    let layout = LayoutConfig::default();
    let c = CaseC::build(solid("hexagonal-prism"), &layout, 40.0, 80.0, 30.0, RestingOn::BaseEdge);
    let vis = &c.top_visibility;
    assert_eq!(vis.hull.len(), 8);
    assert_eq!(vis.base_hidden, vec![true, true, false, false, false, true]);
    assert_eq!(vis.side_hidden, vec![true, true, false, false, false, false]);
}

#[test]
fn case_c_pentagonal_pyramid_hides_one_base_edge() {
    let layout = LayoutConfig::default();
    let c = CaseC::build(solid("pentagonal-pyramid"), &layout, 40.0, 80.0, 60.0, RestingOn::BaseEdge);
    let vis = &c.top_visibility;
    assert_eq!(vis.hull.len(), 4);
    assert_eq!(vis.base_hidden, vec![true, false, false, false, false]);
    assert_eq!(vis.side_hidden, vec![false; 5]);
}

#[test]
fn case_c_outline_slant_edges_stay_visible_when_the_apex_overhangs() {
    let layout = LayoutConfig::default();
    let pyramids = Solid::all().filter(|s| s.is_pyramid());
    for s in pyramids {
        for resting_on in [RestingOn::BaseEdge, RestingOn::BaseCorner] {
            for step in 0..=18 {
                let angle = 5.0 * step as f64;
                let c = CaseC::build(s, &layout, 40.0, 80.0, angle, resting_on);
                let hull = convex_hull(&c.rotated_front.points());
                let apex = c.rotated_front.apex().unwrap().at;
                for (i, corner) in c.rotated_front.base().iter().enumerate() {
                    if is_edge_on_hull(corner.at, apex, &hull, HULL_EDGE_TOLERANCE) {
                        assert!(
                            !c.rotated_hidden[i],
                            "{s} {resting_on} at {angle}°: outline slant edge {i} hidden"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn case_d_final_front_view_takes_heights_from_phase_two() {
    let req = ProjectionRequest {
        solid: solid("hexagonal-prism"),
        case: CaseKind::D,
        axis_angle_hp: 45.0,
        axis_angle_vp: 30.0,
        ..Default::default()
    };
    let layout = LayoutConfig::for_request(&req);
    let d = CaseD::build(&req, &layout);
    let phase_two = &d.phase_two;

    for i in 0..6 {
        let corner = &d.front_view.base()[i];
        assert_eq!(corner.at.x, d.rotated_top.base()[i].at.x);
        assert_eq!(corner.at.y, phase_two.rotated_front.base()[i].at.y);
        assert_eq!(corner.label, format!("{}₂'", i + 1));
        assert_eq!(d.rotated_top.base()[i].label, format!("{}₂", i + 1));
    }
    assert_eq!(d.pivot, phase_two.top_view.pivot().unwrap());
}

#[test]
fn zero_vp_angle_only_shifts_the_intermediate_top_view() {
    let req = ProjectionRequest {
        solid: solid("triangular-prism"),
        case: CaseKind::D,
        axis_angle_vp: 0.0,
        ..Default::default()
    };
    let layout = LayoutConfig::for_request(&req);
    let d = CaseD::build(&req, &layout);
    let shift = phase_offset(req.base_edge);
    for (before, after) in d.phase_two.top_view.corners().zip(d.rotated_top.corners()) {
        assert_eq!(after.at, before.at.offset(shift, 0.0));
    }
}
