//! Signature path generation
//!
//! Turns an ordered sequence of anchor points into a sequence of drawing
//! commands (move, line, quadratic and cubic Bezier) according to a
//! [`CurveStyle`]. Every style interpolates: the stroke passes through each
//! anchor point in order.

mod curves;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{BoundingBox, Point};

/// Default number of decimals used when serializing coordinates
pub const DEFAULT_PRECISION: usize = 2;

/// Errors raised by [`generate_path`]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathError {
    /// A coordinate was NaN or infinite
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinitePoint { index: usize, x: f64, y: f64 },

    /// Finite input whose curve geometry overflowed
    #[error("{style} segment {segment} overflowed to a non-finite control point")]
    NonFiniteOutput { style: CurveStyle, segment: usize },
}

/// Error for an unrecognized curve style tag
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown curve style '{0}' (expected one of: linear, catmull-rom, quadratic-bezier, cubic-bezier, simple-curve)")]
pub struct UnknownCurveStyle(pub String);

/// Algorithm used to connect consecutive anchor points
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CurveStyle {
    /// Straight segments between anchors
    #[default]
    Linear,
    /// Uniform Catmull-Rom spline emitted as cubic segments
    CatmullRom,
    /// One quadratic segment per anchor pair
    QuadraticBezier,
    /// Cubic segments with normalized neighbor tangents
    CubicBezier,
    /// Quadratic segments that bow slightly off each chord
    SimpleCurve,
}

impl CurveStyle {
    /// All styles, in presentation order
    pub const ALL: [CurveStyle; 5] = [
        CurveStyle::Linear,
        CurveStyle::CatmullRom,
        CurveStyle::QuadraticBezier,
        CurveStyle::CubicBezier,
        CurveStyle::SimpleCurve,
    ];

    /// The textual tag for this style
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveStyle::Linear => "linear",
            CurveStyle::CatmullRom => "catmull-rom",
            CurveStyle::QuadraticBezier => "quadratic-bezier",
            CurveStyle::CubicBezier => "cubic-bezier",
            CurveStyle::SimpleCurve => "simple-curve",
        }
    }
}

impl fmt::Display for CurveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveStyle {
    type Err = UnknownCurveStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        CurveStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == tag)
            .ok_or_else(|| UnknownCurveStyle(s.to_string()))
    }
}

/// A single drawing instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at a point
    MoveTo(Point),
    /// Straight line to a point
    LineTo(Point),
    /// Quadratic Bezier curve
    QuadraticTo { control: Point, end: Point },
    /// Cubic Bezier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
}

impl PathCommand {
    /// The on-curve point this command finishes at
    pub fn end_point(&self) -> Point {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p,
            PathCommand::QuadraticTo { end, .. } | PathCommand::CubicTo { end, .. } => *end,
        }
    }

    /// Off-curve control points, in order
    pub fn control_points(&self) -> Vec<Point> {
        match self {
            PathCommand::MoveTo(_) | PathCommand::LineTo(_) => vec![],
            PathCommand::QuadraticTo { control, .. } => vec![*control],
            PathCommand::CubicTo {
                control1, control2, ..
            } => vec![*control1, *control2],
        }
    }

    /// Every point referenced by the command (controls first, then the end)
    fn points(&self) -> impl Iterator<Item = Point> {
        let end = self.end_point();
        self.control_points().into_iter().chain(std::iter::once(end))
    }

    fn write_svg(&self, out: &mut String, precision: usize) {
        match self {
            PathCommand::MoveTo(p) => {
                out.push('M');
                push_point(out, *p, precision);
            }
            PathCommand::LineTo(p) => {
                out.push('L');
                push_point(out, *p, precision);
            }
            PathCommand::QuadraticTo { control, end } => {
                out.push('Q');
                push_point(out, *control, precision);
                out.push(' ');
                push_point(out, *end, precision);
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => {
                out.push('C');
                push_point(out, *control1, precision);
                out.push(' ');
                push_point(out, *control2, precision);
                out.push(' ');
                push_point(out, *end, precision);
            }
        }
    }
}

/// An ordered sequence of drawing commands
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// An empty path (nothing to stroke)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    /// The points the stroke actually passes through, in order
    pub fn endpoints(&self) -> Vec<Point> {
        self.commands.iter().map(PathCommand::end_point).collect()
    }

    /// Bounding box of every point, control points included
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.commands.iter().flat_map(PathCommand::points))
    }

    /// Serialize to an SVG path `d` attribute with two decimals
    pub fn to_svg_d(&self) -> String {
        self.to_svg_d_with_precision(DEFAULT_PRECISION)
    }

    /// Serialize to an SVG path `d` attribute with the given number of decimals
    pub fn to_svg_d_with_precision(&self, precision: usize) -> String {
        let mut d = String::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            cmd.write_svg(&mut d, precision);
        }
        d
    }

    fn push(&mut self, cmd: PathCommand) {
        self.commands.push(cmd);
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_d())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

fn push_point(out: &mut String, p: Point, precision: usize) {
    out.push_str(&format_coord(p.x, precision));
    out.push(' ');
    out.push_str(&format_coord(p.y, precision));
}

/// Format a coordinate, printing values that round to zero as plain zero
fn format_coord(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}

/// Build the drawing commands connecting `points` in `style`.
///
/// Fewer than two points yield an empty path. Non-finite coordinates are
/// rejected before any geometry is computed, and a segment whose controls
/// overflow is reported instead of being serialized as `NaN`.
pub fn generate_path(points: &[Point], style: CurveStyle) -> Result<Path, PathError> {
    if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(PathError::NonFinitePoint {
            index,
            x: p.x,
            y: p.y,
        });
    }

    if points.len() < 2 {
        return Ok(Path::empty());
    }

    let mut path = Path::empty();
    path.push(PathCommand::MoveTo(points[0]));

    let segments = match style {
        CurveStyle::Linear => curves::linear(points),
        CurveStyle::CatmullRom => curves::catmull_rom(points),
        CurveStyle::QuadraticBezier => curves::quadratic_bezier(points),
        CurveStyle::CubicBezier => curves::cubic_bezier(points),
        CurveStyle::SimpleCurve => curves::simple_curve(points),
    };
    for (segment, cmd) in segments.into_iter().enumerate() {
        if !cmd.points().all(|p| p.is_finite()) {
            return Err(PathError::NonFiniteOutput { style, segment });
        }
        path.push(cmd);
    }

    log::trace!(
        "generated {} path: {} anchors, {} commands",
        style,
        points.len(),
        path.len()
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_empty_and_single_point_yield_empty_path() {
        for style in CurveStyle::ALL {
            assert!(generate_path(&[], style).unwrap().is_empty());
            assert!(generate_path(&pts(&[(3.0, 4.0)]), style)
                .unwrap()
                .is_empty());
        }
    }

    #[test]
    fn test_linear_commands() {
        let path = generate_path(
            &pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]),
            CurveStyle::Linear,
        )
        .unwrap();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(10.0, 0.0)),
                PathCommand::LineTo(Point::new(10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn test_single_move_to_first() {
        let points = pts(&[(1.0, 2.0), (3.0, 5.0), (8.0, 1.0), (2.0, 2.0)]);
        for style in CurveStyle::ALL {
            let path = generate_path(&points, style).unwrap();
            assert_eq!(path.commands()[0], PathCommand::MoveTo(points[0]));
            let moves = path
                .iter()
                .filter(|c| matches!(c, PathCommand::MoveTo(_)))
                .count();
            assert_eq!(moves, 1, "{style} should emit exactly one MoveTo");
            assert_eq!(path.len(), points.len());
        }
    }

    #[test]
    fn test_non_finite_point_rejected() {
        let points = pts(&[(0.0, 0.0), (f64::NAN, 1.0), (2.0, 2.0)]);
        let err = generate_path(&points, CurveStyle::CatmullRom).unwrap_err();
        assert!(matches!(err, PathError::NonFinitePoint { index: 1, .. }));

        let lonely = pts(&[(f64::INFINITY, 0.0)]);
        assert!(generate_path(&lonely, CurveStyle::Linear).is_err());
    }

    #[test]
    fn test_to_svg_d() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(100.0, 0.0)),
            PathCommand::QuadraticTo {
                control: Point::new(50.0, -30.0),
                end: Point::new(100.0, 0.0),
            },
            PathCommand::CubicTo {
                control1: Point::new(1.0, 2.0),
                control2: Point::new(3.0, 4.0),
                end: Point::new(5.5, 6.25),
            },
        ]);
        assert_eq!(
            path.to_svg_d(),
            "M0.00 0.00 L100.00 0.00 Q50.00 -30.00 100.00 0.00 C1.00 2.00 3.00 4.00 5.50 6.25"
        );
        assert_eq!(path.to_string(), path.to_svg_d());
    }

    #[test]
    fn test_to_svg_d_precision_and_negative_zero() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(Point::new(-0.0, -0.001)),
            PathCommand::LineTo(Point::new(1.23456, -7.5)),
        ]);
        assert_eq!(path.to_svg_d(), "M0.00 0.00 L1.23 -7.50");
        assert_eq!(path.to_svg_d_with_precision(0), "M0 0 L1 -8");
    }

    #[test]
    fn test_empty_path_serializes_to_empty_string() {
        assert_eq!(Path::empty().to_svg_d(), "");
        assert!(Path::empty().bounds().is_none());
    }

    #[test]
    fn test_bounds_include_control_points() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::QuadraticTo {
                control: Point::new(5.0, -10.0),
                end: Point::new(10.0, 0.0),
            },
        ]);
        assert_eq!(
            path.bounds(),
            Some(BoundingBox::new(0.0, -10.0, 10.0, 10.0))
        );
    }

    #[test]
    fn test_curve_style_tags() {
        for style in CurveStyle::ALL {
            assert_eq!(style.as_str().parse::<CurveStyle>(), Ok(style));
        }
        assert_eq!(
            " Catmull-Rom ".parse::<CurveStyle>(),
            Ok(CurveStyle::CatmullRom)
        );
        assert!("spiral".parse::<CurveStyle>().is_err());
        assert_eq!(CurveStyle::default(), CurveStyle::Linear);
    }
}
