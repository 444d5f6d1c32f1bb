use approx::assert_abs_diff_eq;
use orthoproj_core::geom::Vec2;
use orthoproj_engine::kernel::{
    convex_hull, crosses_polygon, is_edge_on_hull, point_in_polygon, rotate, segments_properly_intersect, HullSet,
    HULL_EDGE_TOLERANCE,
};
use std::f64::consts::PI;

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn zero_rotation_is_exact_identity() {
    let samples = [(v(3.7, -1.2), v(0.0, 0.0)), (v(-5.0, 8.25), v(100.0, 42.0)), (v(1.0, 1.0), v(1.0, 1.0))];
    for (p, pivot) in samples {
        assert_eq!(rotate(p, pivot, 0.0), p);
    }
}

#[test]
fn full_turn_returns_to_start() {
    let p = v(12.5, -7.0);
    let pivot = v(-3.0, 4.0);
    let q = rotate(p, pivot, 2.0 * PI);
    assert_abs_diff_eq!(q.x, p.x, epsilon = 1e-9);
    assert_abs_diff_eq!(q.y, p.y, epsilon = 1e-9);
}

#[test]
fn rotation_preserves_distance_to_pivot() {
    let pivot = v(10.0, 20.0);
    for k in 0..12 {
        let angle = k as f64 * 0.7;
        let p = v(17.0 + k as f64, -4.0);
        let q = rotate(p, pivot, angle);
        assert_abs_diff_eq!(q.distance_to(pivot), p.distance_to(pivot), epsilon = 1e-9);
    }
}

#[test]
fn quarter_turn_matches_standard_matrix() {
    let q = rotate(v(1.0, 0.0), v(0.0, 0.0), PI / 2.0);
    assert_abs_diff_eq!(q.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(q.y, 1.0, epsilon = 1e-12);
}

#[test]
fn pivot_on_point_is_a_no_op() {
    let p = v(4.0, 4.0);
    assert_eq!(rotate(p, p, 1.234), p);
}

#[test]
fn hull_of_unit_square_is_the_square() {
    let square = [v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)];
    let hull = convex_hull(&square);
    assert_eq!(hull.len(), 4);
    for p in square {
        assert!(hull.contains(&p));
    }
}

#[test]
fn hull_ignores_interior_point() {
    let pts = [v(0.0, 0.0), v(4.0, 0.0), v(4.0, 4.0), v(0.0, 4.0), v(2.0, 2.0)];
    let hull = convex_hull(&pts);
    assert_eq!(hull.len(), 4);
    assert!(!hull.contains(&v(2.0, 2.0)));
}

#[test]
fn hull_is_counter_clockwise() {
    let pts = [v(0.0, 0.0), v(4.0, 0.0), v(4.0, 4.0), v(0.0, 4.0)];
    let hull = convex_hull(&pts);
    let area2: f64 = (0..hull.len())
        .map(|i| {
            let (a, b) = (hull[i], hull[(i + 1) % hull.len()]);
            a.x * b.y - b.x * a.y
        })
        .sum();
    assert!(area2 > 0.0);
}

#[test]
fn collinear_points_collapse_to_extremes() {
    let hull = convex_hull(&[v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0)]);
    assert_eq!(hull.len(), 2);
    assert!(hull.contains(&v(0.0, 0.0)));
    assert!(hull.contains(&v(2.0, 2.0)));
}

#[test]
fn tiny_inputs_pass_through() {
    assert!(convex_hull(&[]).is_empty());
    assert_eq!(convex_hull(&[v(1.0, 2.0)]), vec![v(1.0, 2.0)]);
    assert_eq!(convex_hull(&[v(3.0, 0.0), v(1.0, 0.0)]).len(), 2);
}

#[test]
fn hull_edges_match_in_either_direction() {
    let hull = convex_hull(&[v(0.0, 0.0), v(4.0, 0.0), v(4.0, 4.0), v(0.0, 4.0)]);
    assert!(is_edge_on_hull(v(0.0, 0.0), v(4.0, 0.0), &hull, HULL_EDGE_TOLERANCE));
    assert!(is_edge_on_hull(v(4.0, 0.0), v(0.0, 0.0), &hull, HULL_EDGE_TOLERANCE));
    assert!(is_edge_on_hull(v(0.3, 4.2), v(0.0, 0.0), &hull, HULL_EDGE_TOLERANCE));
    // A diagonal joins hull vertices that are not consecutive.
    assert!(!is_edge_on_hull(v(0.0, 0.0), v(4.0, 4.0), &hull, HULL_EDGE_TOLERANCE));
}

#[test]
fn hull_set_rounds_to_two_decimals() {
    let set = HullSet::from_points(&[v(0.0, 0.0), v(4.0, 0.0), v(4.0, 4.0), v(0.0, 4.0), v(2.0, 2.0)]);
    assert_eq!(set.len(), 4);
    assert!(set.contains(v(4.001, 3.999)));
    assert!(!set.contains(v(4.02, 4.0)));
    assert!(!set.contains(v(2.0, 2.0)));
}

#[test]
fn proper_intersection_cases() {
    // Crossing diagonals of a square.
    assert!(segments_properly_intersect(v(0.0, 0.0), v(4.0, 4.0), v(0.0, 4.0), v(4.0, 0.0)));
    // Parallel.
    assert!(!segments_properly_intersect(v(0.0, 0.0), v(4.0, 0.0), v(0.0, 1.0), v(4.0, 1.0)));
    // Shared endpoint.
    assert!(!segments_properly_intersect(v(0.0, 0.0), v(4.0, 0.0), v(4.0, 0.0), v(4.0, 4.0)));
    // T-junction.
    assert!(!segments_properly_intersect(v(0.0, 0.0), v(4.0, 0.0), v(2.0, 0.0), v(2.0, 3.0)));
    // Collinear overlap.
    assert!(!segments_properly_intersect(v(0.0, 0.0), v(4.0, 0.0), v(2.0, 0.0), v(6.0, 0.0)));
    // Disjoint.
    assert!(!segments_properly_intersect(v(0.0, 0.0), v(1.0, 1.0), v(3.0, 0.0), v(4.0, -1.0)));
}

#[test]
fn point_in_polygon_inside_and_outside() {
    let square = [v(0.0, 0.0), v(4.0, 0.0), v(4.0, 4.0), v(0.0, 4.0)];
    assert!(point_in_polygon(v(2.0, 2.0), &square));
    assert!(!point_in_polygon(v(100.0, -50.0), &square));
    assert!(!point_in_polygon(v(2.0, 2.0), &[]));
}

#[test]
fn segment_crossing_polygon() {
    let square = [v(0.0, 0.0), v(4.0, 0.0), v(4.0, 4.0), v(0.0, 4.0)];
    assert!(crosses_polygon(v(2.0, 2.0), v(6.0, 2.0), &square));
    assert!(!crosses_polygon(v(1.0, 1.0), v(3.0, 3.0), &square));
    // Ending on a corner is not a crossing.
    assert!(!crosses_polygon(v(4.0, 4.0), v(6.0, 6.0), &square));
}
