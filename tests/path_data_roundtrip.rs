//! Generated path data parses back into the commands it was written from

use keyboard_signature::{
    generate_path, parse_path_data, CurveStyle, PathCommand, PathDataError, Point,
};
use pretty_assertions::assert_eq;

const TOLERANCE: f64 = 0.005 + 1e-9;

fn points_of(cmd: &PathCommand) -> Vec<Point> {
    let mut points = cmd.control_points();
    points.push(cmd.end_point());
    points
}

fn same_kind(a: &PathCommand, b: &PathCommand) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

#[test]
fn test_generated_paths_reparse() {
    let anchors = vec![
        Point::new(28.0, 43.0),
        Point::new(118.0, 103.0),
        Point::new(388.0, 163.0),
        Point::new(328.0, 43.0),
        Point::new(28.0, 43.0),
    ];

    for style in CurveStyle::ALL {
        let path = generate_path(&anchors, style).unwrap();
        let d = path.to_svg_d();
        let parsed = parse_path_data(&d).unwrap_or_else(|e| panic!("{style}: {d}: {e:?}"));

        assert_eq!(parsed.len(), path.len(), "{style}");
        for (got, want) in parsed.iter().zip(path.iter()) {
            assert!(same_kind(got, want), "{style}: {got:?} vs {want:?}");
            for (g, w) in points_of(got).into_iter().zip(points_of(want)) {
                assert!(g.approx_eq(w, TOLERANCE), "{style}: {g:?} vs {w:?}");
            }
        }
    }
}

#[test]
fn test_parse_is_stable_after_one_pass() {
    let anchors = vec![
        Point::new(0.0, 0.0),
        Point::new(13.37, -4.2),
        Point::new(20.0, 20.0),
    ];
    let d = generate_path(&anchors, CurveStyle::CubicBezier)
        .unwrap()
        .to_svg_d();
    let once = parse_path_data(&d).unwrap().to_svg_d();
    assert_eq!(once, d);
}

#[test]
fn test_parse_accepts_commas_and_compact_numbers() {
    let path = parse_path_data("M0,0 L.5,-1.25 Q1 2 3 4").unwrap();
    assert_eq!(
        path.commands(),
        &[
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(0.5, -1.25)),
            PathCommand::QuadraticTo {
                control: Point::new(1.0, 2.0),
                end: Point::new(3.0, 4.0),
            },
        ]
    );
}

#[test]
fn test_parse_empty_input() {
    assert!(parse_path_data("").unwrap().is_empty());
    assert!(parse_path_data("  \n").unwrap().is_empty());
}

#[test]
fn test_parse_errors_carry_spans() {
    let errors = parse_path_data("M 0 0 L 1").unwrap_err();
    assert_eq!(errors.len(), 1);

    let errors = parse_path_data("M 0 0 L 1 # 1").unwrap_err();
    assert_eq!(errors[0].span(), &(10..11));

    let report = errors[0].format("M 0 0 L 1 # 1", "<path>");
    assert!(report.contains("<path>"));
}

#[test]
fn test_parse_rejects_relative_commands() {
    let errors = parse_path_data("M0 0 l10 10").unwrap_err();
    assert!(matches!(errors[0], PathDataError::Syntax { .. }));
}

#[test]
fn test_parse_rejects_numbers_that_overflow() {
    let huge = "1".repeat(400);
    let d = format!("M0 0 L{huge} 1");
    let errors = parse_path_data(&d).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].span(), &(6..406));
    assert!(errors[0].to_string().contains("out of range"));
}
