use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle with the given radius.
    pub fn new(radius: f64) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        Ok(Self { radius })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(5.0).unwrap();
        assert_eq!(c.radius, 5.0);
    }

    #[test]
    fn test_circle_new_negative_radius() {
        assert_eq!(
            Circle::new(-1.0),
            Err(ConfigError::InvalidRadius(-1.0))
        );
    }

    #[test]
    fn test_circle_new_non_finite_radius() {
        assert!(Circle::new(f64::NAN).is_err());
        assert!(Circle::new(f64::INFINITY).is_err());
    }
}
