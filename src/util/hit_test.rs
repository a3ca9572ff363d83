// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Point-in-polygon hit testing.
//!
//! A click is inside a link's polygon when a horizontal ray cast from the
//! click crosses the polygon boundary an odd number of times. Orientation
//! and on-segment checks both work on coordinates snapped to the nearest
//! whole pixel, so a click within half a pixel of an edge counts as on it.
//! Earlier versions of the tool compared raw coordinates in the on-segment
//! check; near-edge clicks such as (10.3, 5) against a 10 pixel square now
//! land inside where they used to miss.

use crate::models::geometry::{Point, Polygon};

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

fn snap(p: Point) -> Point {
    Point::new(p.x.round(), p.y.round())
}

fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let (p, q, r) = (snap(p), snap(q), snap(r));
    let cross = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if cross == 0.0 {
        Orientation::Collinear
    } else if cross > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Whether `q` lies within the bounding box of segment `p`-`r`.
/// Only meaningful when the three points are already known to be collinear.
fn on_segment(p: Point, q: Point, r: Point) -> bool {
    let (p, q, r) = (snap(p), snap(q), snap(r));
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Whether segment `p1`-`q1` intersects segment `p2`-`q2`.
fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// Check whether `point` lies inside or on the boundary of `polygon`.
///
/// Degenerate polygons (fewer than three vertices) never contain anything.
pub fn contains(point: Point, polygon: &Polygon) -> bool {
    if polygon.is_degenerate() {
        return false;
    }

    let far = Point::new(f64::MAX, point.y);
    let vertices = polygon.vertices();
    let n = vertices.len();
    let mut crossings = 0usize;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];

        if !segments_intersect(a, b, point, far) {
            continue;
        }

        // The ray runs along this edge; the answer is whether the point is on it.
        if orientation(a, b, point) == Orientation::Collinear {
            return on_segment(a, point, b);
        }

        crossings += 1;
    }

    crossings % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
    }

    #[test]
    fn test_square_inside_outside() {
        let square = unit_square();
        assert!(contains(Point::new(5.0, 5.0), &square));
        assert!(!contains(Point::new(15.0, 5.0), &square));
        assert!(!contains(Point::new(-3.0, 5.0), &square));
        assert!(!contains(Point::new(5.0, 12.0), &square));
    }

    #[test]
    fn test_boundary_counts_as_inside() {
        let square = unit_square();
        assert!(contains(Point::new(10.0, 5.0), &square));
        assert!(contains(Point::new(0.0, 5.0), &square));
        assert!(contains(Point::new(5.0, 0.0), &square));
        assert!(contains(Point::new(5.0, 10.0), &square));
    }

    #[test]
    fn test_ray_along_edge_outside_polygon() {
        // The ray from (-5, 10) runs along the top edge but never touches the shape.
        assert!(!contains(Point::new(-5.0, 10.0), &unit_square()));
    }

    #[test]
    fn test_degenerate_never_contains() {
        let line = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        assert!(!contains(Point::new(5.0, 5.0), &line));
        assert!(!contains(Point::new(0.0, 0.0), &line));

        let single = Polygon::new(vec![Point::new(1.0, 1.0)]);
        assert!(!contains(Point::new(1.0, 1.0), &single));
        assert!(!contains(Point::new(0.0, 0.0), &Polygon::default()));
    }

    #[test]
    fn test_triangle() {
        let triangle = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(40.0, 0.0),
            Point::new(20.0, 40.0),
        ]);
        assert!(contains(Point::new(20.0, 10.0), &triangle));
        assert!(!contains(Point::new(5.0, 30.0), &triangle));
        assert!(!contains(Point::new(35.0, 30.0), &triangle));
    }

    #[test]
    fn test_concave_notch() {
        // A "U" shape: the notch between the arms is outside.
        let u_shape = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(30.0, 30.0),
            Point::new(20.0, 30.0),
            Point::new(20.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 30.0),
            Point::new(0.0, 30.0),
        ]);
        assert!(contains(Point::new(5.0, 20.0), &u_shape));
        assert!(contains(Point::new(25.0, 20.0), &u_shape));
        assert!(contains(Point::new(15.0, 5.0), &u_shape));
        assert!(!contains(Point::new(15.0, 20.0), &u_shape));
    }

    #[test]
    fn test_orientation_snaps_to_pixels() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(10.0, 0.0);
        // 0.4 px off the line rounds onto it.
        assert_eq!(orientation(p, q, Point::new(20.0, 0.4)), Orientation::Collinear);
        assert_eq!(orientation(p, q, Point::new(20.0, 0.6)), Orientation::CounterClockwise);
        assert_eq!(orientation(p, q, Point::new(20.0, -0.6)), Orientation::Clockwise);
    }

    #[test]
    fn test_sub_pixel_edge_snaps() {
        // 9.7 and 10.3 both snap onto the right edge at x = 10.
        let square = unit_square();
        assert!(contains(Point::new(9.7, 5.0), &square));
        assert!(contains(Point::new(10.3, 5.0), &square));
        assert!(!contains(Point::new(10.6, 5.0), &square));
    }
}
