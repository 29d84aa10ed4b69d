//! Board squares and piece facings.
//!
//! Squares use board-centered integer coordinates: on an 8x8 board the
//! columns run from -4 to 3. A facing is a unit vector in the board plane,
//! rotated about the board's vertical axis in degrees.

use std::fmt;
use std::ops::{Add, Neg};

/// Decimal places kept when comparing two facings.
///
/// Repeated rotation accumulates floating point noise; facings that agree to
/// this many places are the same facing.
pub const FACING_PRECISION: i32 = 2;

/// A square on the board in board-centered coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, centered on the board.
    pub x: i32,
    /// Row, centered on the board.
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert corner-origin file coordinates (`0..width`) to a centered
    /// position.
    ///
    /// Saturates, so coordinates far off the board stay off the board.
    #[must_use]
    pub const fn from_file(x: i32, y: i32, bounds: Bounds) -> Self {
        Self {
            x: x.saturating_sub(bounds.half_width()),
            y: y.saturating_sub(bounds.half_height()),
        }
    }

    /// Convert back to corner-origin file coordinates.
    #[must_use]
    pub const fn to_file(self, bounds: Bounds) -> (i32, i32) {
        (
            self.x.saturating_add(bounds.half_width()),
            self.y.saturating_add(bounds.half_height()),
        )
    }

    /// The center of this square in board units, for renderers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn square_center(self) -> (f32, f32) {
        (self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single-square step, each axis in `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    /// Column delta.
    pub dx: i32,
    /// Row delta.
    pub dy: i32,
}

impl Add<Step> for Position {
    type Output = Position;

    fn add(self, step: Step) -> Position {
        Position::new(self.x + step.dx, self.y + step.dy)
    }
}

/// Board extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Width in squares.
    pub width: u16,
    /// Height in squares.
    pub height: u16,
}

impl Bounds {
    /// Create new bounds.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    #[allow(clippy::cast_lossless)]
    const fn half_width(self) -> i32 {
        self.width as i32 / 2
    }

    #[allow(clippy::cast_lossless)]
    const fn half_height(self) -> i32 {
        self.height as i32 / 2
    }

    /// Check whether a square lies on the board.
    ///
    /// The board spans `-width/2 <= x < width/2`, likewise for y.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.x >= -self.half_width()
            && pos.x < self.half_width()
            && pos.y >= -self.half_height()
            && pos.y < self.half_height()
    }
}

/// A piece facing: a unit vector in the board plane.
#[derive(Debug, Clone, Copy)]
pub struct Direction {
    x: f64,
    y: f64,
}

impl Direction {
    /// Facing along +x (zero degrees).
    pub const EAST: Self = Self { x: 1.0, y: 0.0 };

    /// Build a facing from an angle in degrees, counter-clockwise from +x.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { x: cos, y: sin }
    }

    /// X component.
    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    /// Y component.
    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }

    /// Angle in degrees in `(-180, 180]`.
    #[must_use]
    pub fn degrees(self) -> f64 {
        if self.x == 0.0 && self.y == 0.0 {
            return 0.0;
        }
        self.y.atan2(self.x).to_degrees()
    }

    /// Rotate by `degrees` about the board's vertical axis.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Round each component to the nearest integer.
    ///
    /// Lossy on purpose: a diagonal facing becomes a diagonal step, and any
    /// noise from rotation disappears.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_unit_step(self) -> Step {
        Step {
            dx: self.x.round() as i32,
            dy: self.y.round() as i32,
        }
    }

    /// Components scaled and rounded to `precision` decimal places.
    #[allow(clippy::cast_possible_truncation)]
    fn quantized(self, precision: i32) -> (i64, i64) {
        let scale = 10f64.powi(precision);
        (
            (self.x * scale).round() as i64,
            (self.y * scale).round() as i64,
        )
    }

    /// Equality after rounding both facings to `precision` decimal places.
    #[must_use]
    pub fn approx_eq(self, other: Self, precision: i32) -> bool {
        self.quantized(precision) == other.quantized(precision)
    }

    /// Whether `other` points exactly the other way.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        self.approx_eq(-other, FACING_PRECISION)
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extreme_file_coordinates_stay_off_board() {
        let bounds = Bounds::new(8, 8);
        assert_eq!(Position::from_file(0, 0, bounds), Position::new(-4, -4));
        assert_eq!(Position::from_file(7, 7, bounds), Position::new(3, 3));

        let far = Position::from_file(i32::MIN, i32::MAX, bounds);
        assert_eq!(far, Position::new(i32::MIN, i32::MAX - 4));
        assert!(!bounds.contains(far));
        assert!(!bounds.contains(Position::from_file(8, 0, bounds)));
    }

    #[test]
    fn test_unit_steps_axis_aligned() {
        assert_eq!(Direction::from_degrees(0.0).to_unit_step(), Step { dx: 1, dy: 0 });
        assert_eq!(Direction::from_degrees(90.0).to_unit_step(), Step { dx: 0, dy: 1 });
        assert_eq!(Direction::from_degrees(180.0).to_unit_step(), Step { dx: -1, dy: 0 });
        assert_eq!(Direction::from_degrees(270.0).to_unit_step(), Step { dx: 0, dy: -1 });
    }

    #[test]
    fn test_unit_steps_diagonal() {
        assert_eq!(Direction::from_degrees(45.0).to_unit_step(), Step { dx: 1, dy: 1 });
        assert_eq!(Direction::from_degrees(-135.0).to_unit_step(), Step { dx: -1, dy: -1 });
    }

    #[test]
    fn test_rotation_noise_compares_equal() {
        let mut facing = Direction::EAST;
        for _ in 0..40 {
            facing = facing.rotate(90.0);
        }
        // 40 quarter turns is a full number of revolutions
        assert!(facing.approx_eq(Direction::EAST, FACING_PRECISION));
        assert!(!facing.approx_eq(Direction::from_degrees(90.0), FACING_PRECISION));
    }

    #[test]
    fn test_negative_zero_matches_zero() {
        let a = Direction::from_degrees(90.0);
        let b = Direction::from_degrees(-270.0);
        assert!(a.approx_eq(b, FACING_PRECISION));
    }

    #[test]
    fn test_opposite() {
        let east = Direction::EAST;
        let west = Direction::from_degrees(180.0);
        assert!(east.is_opposite(west));
        assert!(!east.is_opposite(Direction::from_degrees(90.0)));
        assert!(Direction::from_degrees(45.0).is_opposite(Direction::from_degrees(225.0)));
    }

    #[test]
    fn test_degrees_roundtrip() {
        let facing = Direction::from_degrees(135.0);
        assert!((facing.degrees() - 135.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_footprint() {
        let bounds = Bounds::new(8, 8);
        assert!(bounds.contains(Position::new(-4, -4)));
        assert!(bounds.contains(Position::new(3, 3)));
        assert!(!bounds.contains(Position::new(4, 0)));
        assert!(!bounds.contains(Position::new(0, -5)));
    }

    #[test]
    fn test_file_coordinates() {
        let bounds = Bounds::new(8, 8);
        let pos = Position::from_file(0, 7, bounds);
        assert_eq!(pos, Position::new(-4, 3));
        assert_eq!(pos.to_file(bounds), (0, 7));
        let (cx, cy) = pos.square_center();
        assert!((cx + 3.5).abs() < f32::EPSILON);
        assert!((cy - 3.5).abs() < f32::EPSILON);
    }
}
