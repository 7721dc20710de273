//! Segment builders for each curve style.
//!
//! Each builder receives at least two finite points and returns the
//! commands that follow the initial `MoveTo`, one per consecutive pair.

use crate::geometry::Point;

use super::PathCommand;

/// Bow of a simple-curve control point, as a fraction of the chord length
const SIMPLE_CURVE_BOW: f64 = 0.15;

/// Handle length of cubic-bezier control points, as a fraction of the chord
const CUBIC_SMOOTHING: f64 = 0.3;

pub(super) fn linear(points: &[Point]) -> Vec<PathCommand> {
    points[1..].iter().map(|&p| PathCommand::LineTo(p)).collect()
}

pub(super) fn simple_curve(points: &[Point]) -> Vec<PathCommand> {
    points
        .windows(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            PathCommand::QuadraticTo {
                control: bowed_control_point(start, end),
                end,
            }
        })
        .collect()
}

/// Midpoint of the chord pushed sideways along its left-hand normal.
///
/// Zero-length chords keep the plain midpoint.
fn bowed_control_point(start: Point, end: Point) -> Point {
    let chord = end - start;
    let midpoint = start.midpoint(end);

    if chord.length() < f64::EPSILON {
        return midpoint;
    }

    midpoint + chord.perpendicular() * SIMPLE_CURVE_BOW
}

pub(super) fn quadratic_bezier(points: &[Point]) -> Vec<PathCommand> {
    (0..points.len() - 1)
        .map(|i| {
            let (p0, p1, p2, p3) = clamped_window(points, i);
            let (c1, c2) = catmull_rom_controls(p0, p1, p2, p3);
            // Best single-control fit of the cubic (c1, c2) between p1 and p2
            let control = ((c1 + c2) * 3.0 - p1 - p2) / 4.0;
            PathCommand::QuadraticTo { control, end: p2 }
        })
        .collect()
}

pub(super) fn cubic_bezier(points: &[Point]) -> Vec<PathCommand> {
    (0..points.len() - 1)
        .map(|i| {
            let (p0, p1, p2, p3) = clamped_window(points, i);
            let handle = p1.distance(p2) * CUBIC_SMOOTHING;
            let t1 = (p2 - p0).normalized();
            let t2 = (p3 - p1).normalized();
            PathCommand::CubicTo {
                control1: p1 + t1 * handle,
                control2: p2 - t2 * handle,
                end: p2,
            }
        })
        .collect()
}

pub(super) fn catmull_rom(points: &[Point]) -> Vec<PathCommand> {
    let n = points.len();
    // Virtual neighbors mirror the nearest real neighbor across the end point
    let before = points[1].reflect_through(points[0]);
    let after = points[n - 2].reflect_through(points[n - 1]);

    (0..n - 1)
        .map(|i| {
            let p0 = if i == 0 { before } else { points[i - 1] };
            let p3 = if i + 2 >= n { after } else { points[i + 2] };
            let (p1, p2) = (points[i], points[i + 1]);
            let (control1, control2) = catmull_rom_controls(p0, p1, p2, p3);
            PathCommand::CubicTo {
                control1,
                control2,
                end: p2,
            }
        })
        .collect()
}

/// Bezier controls of the uniform Catmull-Rom segment from `p1` to `p2`
fn catmull_rom_controls(p0: Point, p1: Point, p2: Point, p3: Point) -> (Point, Point) {
    (p1 + (p2 - p0) / 6.0, p2 - (p3 - p1) / 6.0)
}

/// The four points around segment `i`, clamping out-of-range neighbors to
/// the sequence ends
fn clamped_window(points: &[Point], i: usize) -> (Point, Point, Point, Point) {
    let last = points.len() - 1;
    (
        points[i.saturating_sub(1)],
        points[i],
        points[i + 1],
        points[(i + 2).min(last)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_point(actual: Point, expected: (f64, f64)) {
        assert!(
            actual.approx_eq(Point::from(expected), TOLERANCE),
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_simple_curve_bows_left_of_chord() {
        let segments = simple_curve(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        assert_eq!(segments.len(), 1);
        match segments[0] {
            PathCommand::QuadraticTo { control, end } => {
                assert_point(control, (50.0, 15.0));
                assert_point(end, (100.0, 0.0));
            }
            other => panic!("Expected QuadraticTo, got {:?}", other),
        }
    }

    #[test]
    fn test_simple_curve_zero_length_uses_midpoint() {
        let p = Point::new(5.0, 5.0);
        assert_eq!(bowed_control_point(p, p), p);
    }

    #[test]
    fn test_catmull_rom_two_points_reflects_neighbors() {
        let segments = catmull_rom(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        assert_eq!(segments.len(), 1);
        match segments[0] {
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => {
                // Virtual neighbors (-10,-10) and (20,20)
                assert_point(control1, (10.0 / 3.0, 10.0 / 3.0));
                assert_point(control2, (20.0 / 3.0, 20.0 / 3.0));
                assert_point(end, (10.0, 10.0));
            }
            other => panic!("Expected CubicTo, got {:?}", other),
        }
    }

    #[test]
    fn test_catmull_rom_interior_controls() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let segments = catmull_rom(&points);
        match segments[1] {
            PathCommand::CubicTo {
                control1, control2, ..
            } => {
                // c1 = p1 + (p2 - p0) / 6, c2 = p2 - (p3 - p1) / 6
                assert_point(control1, (10.0 + 10.0 / 6.0, 10.0 / 6.0));
                assert_point(control2, (10.0 + 10.0 / 6.0, 10.0 - 10.0 / 6.0));
            }
            other => panic!("Expected CubicTo, got {:?}", other),
        }
    }

    #[test]
    fn test_catmull_rom_tangent_continuity() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(30.0, 20.0),
            Point::new(60.0, -5.0),
        ];
        let segments = catmull_rom(&points);
        let (incoming, joint) = match segments[0] {
            PathCommand::CubicTo { control2, end, .. } => (control2, end),
            ref other => panic!("Expected CubicTo, got {:?}", other),
        };
        let outgoing = match segments[1] {
            PathCommand::CubicTo { control1, .. } => control1,
            ref other => panic!("Expected CubicTo, got {:?}", other),
        };
        // The joint sits midway between the adjoining handles
        assert!(joint.approx_eq(incoming.midpoint(outgoing), TOLERANCE));
    }

    #[test]
    fn test_cubic_bezier_two_points() {
        let segments = cubic_bezier(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        assert_eq!(segments.len(), 1);
        match segments[0] {
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => {
                assert_point(control1, (3.0, 3.0));
                assert_point(control2, (7.0, 7.0));
                assert_point(end, (10.0, 10.0));
            }
            other => panic!("Expected CubicTo, got {:?}", other),
        }
    }

    #[test]
    fn test_cubic_bezier_duplicate_points_stay_finite() {
        let p = Point::new(5.0, 5.0);
        let segments = cubic_bezier(&[p, p, p]);
        for seg in segments {
            match seg {
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    assert_eq!(control1, p);
                    assert_eq!(control2, p);
                    assert_eq!(end, p);
                }
                other => panic!("Expected CubicTo, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_quadratic_bezier_two_points_uses_midpoint() {
        let segments = quadratic_bezier(&[Point::new(0.0, 0.0), Point::new(10.0, 4.0)]);
        match segments[0] {
            PathCommand::QuadraticTo { control, end } => {
                assert_point(control, (5.0, 2.0));
                assert_point(end, (10.0, 4.0));
            }
            other => panic!("Expected QuadraticTo, got {:?}", other),
        }
    }

    #[test]
    fn test_quadratic_bezier_collinear_stays_on_line() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 0.0),
        ];
        for seg in quadratic_bezier(&points) {
            match seg {
                PathCommand::QuadraticTo { control, .. } => {
                    assert!(control.y.abs() < TOLERANCE)
                }
                other => panic!("Expected QuadraticTo, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_clamped_window_at_boundaries() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let (p0, p1, p2, p3) = clamped_window(&points, 0);
        assert_eq!(p0, points[0]);
        assert_eq!(p1, points[0]);
        assert_eq!(p2, points[1]);
        assert_eq!(p3, points[1]);
    }
}
