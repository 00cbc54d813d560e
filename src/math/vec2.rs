use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    /// No componentwise upper speed limit.
    pub const MAX: Vec2 = Vec2 {
        x: f64::INFINITY,
        y: f64::INFINITY,
    };
    /// No componentwise lower speed limit.
    pub const MIN: Vec2 = Vec2 {
        x: f64::NEG_INFINITY,
        y: f64::NEG_INFINITY,
    };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (scalar z-component of the 3D cross product).
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Calculates the squared magnitude of the vector.
    /// Useful for comparisons as it avoids a square root.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a normalized (unit length) copy of the vector.
    /// A zero vector normalizes to the zero vector.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            Self::ZERO
        } else {
            self * (1.0 / mag)
        }
    }

    /// Calculates the squared distance between two points.
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).magnitude_squared()
    }

    /// Calculates the distance between two points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Returns the vector rotated 90 degrees counter-clockwise.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotates the vector by a given angle (in radians).
    pub fn rotate(self, angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        Self::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Clamps each component into `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }

    /// True if both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// True if either component is NaN.
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_vec2_arithmetic() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
        assert_eq!(v1 * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(3.0 * v1, Vec2::new(3.0, 6.0));
        assert_eq!(v2 / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_vec2_dot_and_cross() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert!((v1.dot(v2) - 11.0).abs() < EPSILON);
        assert!((v1.cross(v2) - -2.0).abs() < EPSILON);
        // Cross of a vector with itself is zero
        assert!(v1.cross(v1).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude_squared() - 25.0).abs() < EPSILON);
        assert!((v.magnitude() - 5.0).abs() < EPSILON);
        assert!(Vec2::ZERO.magnitude().abs() < EPSILON);
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(3.0, 4.0);
        let unit = v.normalize();
        assert_relative_eq!(unit.magnitude(), 1.0, epsilon = EPSILON);
        assert_relative_eq!(unit.x, 0.6, epsilon = EPSILON);
        assert_relative_eq!(unit.y, 0.8, epsilon = EPSILON);

        // Zero vector stays zero instead of producing NaN
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_vec2_distance() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(4.0, 6.0);
        assert!((v1.distance_squared(v2) - 25.0).abs() < EPSILON);
        assert!((v1.distance(v2) - 5.0).abs() < EPSILON);
        assert!((v2.distance(v1) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_perpendicular() {
        let v = Vec2::new(3.0, 4.0);
        let perp = v.perpendicular();
        assert_eq!(perp, Vec2::new(-4.0, 3.0));
        assert!(v.dot(perp).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_rotate() {
        let v = Vec2::new(1.0, 0.0);

        let v90 = v.rotate(PI / 2.0);
        assert_relative_eq!(v90.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(v90.y, 1.0, epsilon = EPSILON);

        let v180 = v.rotate(PI);
        assert_relative_eq!(v180.x, -1.0, epsilon = EPSILON);
        assert_relative_eq!(v180.y, 0.0, epsilon = EPSILON);

        let v_neg90 = v.rotate(-PI / 2.0);
        assert_relative_eq!(v_neg90.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(v_neg90.y, -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_vec2_clamp() {
        let min = Vec2::new(-1.0, -2.0);
        let max = Vec2::new(1.0, 2.0);
        assert_eq!(Vec2::new(5.0, 0.5).clamp(min, max), Vec2::new(1.0, 0.5));
        assert_eq!(Vec2::new(-5.0, -5.0).clamp(min, max), Vec2::new(-1.0, -2.0));
        // Unbounded limits leave the vector unchanged
        assert_eq!(
            Vec2::new(1e9, -1e9).clamp(Vec2::MIN, Vec2::MAX),
            Vec2::new(1e9, -1e9)
        );
    }

    #[test]
    fn test_vec2_is_finite() {
        assert!(Vec2::new(1.0, 2.0).is_finite());
        assert!(!Vec2::new(f64::NAN, 0.0).is_finite());
        assert!(!Vec2::MAX.is_finite());
    }

    #[test]
    fn test_vec2_is_nan() {
        assert!(!Vec2::new(1.0, 2.0).is_nan());
        assert!(!Vec2::MAX.is_nan());
        assert!(Vec2::new(f64::NAN, 0.0).is_nan());
        assert!(Vec2::new(0.0, f64::NAN).is_nan());
    }
}
