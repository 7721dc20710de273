//! Core geometric types shared by the generator, layouts and renderer

use std::ops::{Add, Div, Mul, Sub};

/// A 2D point (or vector) in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite (neither NaN nor infinite)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean length when treated as a vector
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (other - *self).length()
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Unit vector in the same direction.
    ///
    /// Zero-length vectors normalize to the zero vector instead of NaN, so
    /// repeated anchor points never poison downstream arithmetic.
    pub fn normalized(&self) -> Point {
        let len = self.length();
        if len < f64::EPSILON {
            Point::ZERO
        } else {
            *self / len
        }
    }

    /// Left-hand perpendicular (counterclockwise rotation by 90°)
    pub fn perpendicular(&self) -> Point {
        Point::new(-self.y, self.x)
    }

    /// Reflect `self` through `center`
    pub fn reflect_through(&self, center: Point) -> Point {
        center * 2.0 - *self
    }

    /// Approximate equality with an absolute tolerance
    pub fn approx_eq(&self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized box located at a single point
    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    /// Smallest box containing every point, or `None` for an empty iterator
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::at(first), |bounds, p| bounds.expand_to_include(p)))
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        BoundingBox::new(x, y, right - x, bottom - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a + b, Point::new(5.0, 8.0));
        assert_eq!(b - a, Point::new(3.0, 4.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(b / 2.0, Point::new(2.0, 3.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_eq!((b - a).length(), 5.0);
    }

    #[test]
    fn test_normalized_zero_vector_stays_zero() {
        let n = Point::ZERO.normalized();
        assert_eq!(n, Point::ZERO);
        assert!(n.is_finite());
    }

    #[test]
    fn test_normalized_unit_length() {
        let n = Point::new(3.0, 4.0).normalized();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!(n.approx_eq(Point::new(0.6, 0.8), 1e-12));
    }

    #[test]
    fn test_reflect_through() {
        let p = Point::new(10.0, 10.0);
        assert_eq!(p.reflect_through(Point::ZERO), Point::new(-10.0, -10.0));
    }

    #[test]
    fn test_perpendicular_is_counterclockwise() {
        assert_eq!(Point::new(1.0, 0.0).perpendicular(), Point::new(-0.0, 1.0));
    }

    #[test]
    fn test_length_of_huge_vector_is_finite() {
        let len = Point::new(1e200, 1e200).length();
        assert!(len.is_finite());
        assert!(Point::new(1e200, 0.0).normalized().approx_eq(Point::new(1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(1.0, -1.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = BoundingBox::from_points([
            Point::new(28.0, 88.0),
            Point::new(88.0, 28.0),
            Point::new(50.0, 50.0),
        ])
        .unwrap();
        assert_eq!(bounds, BoundingBox::new(28.0, 28.0, 60.0, 60.0));
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }
}
