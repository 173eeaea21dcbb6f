use crate::error::{IkError, IkResult};
use glam::Vec3;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Closed `[min, max]` range for one Euler angle, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationLimit {
    min: f32,
    max: f32,
}

impl Default for RotationLimit {
    fn default() -> Self {
        Self::FREE
    }
}

impl RotationLimit {
    /// Unconstrained: the pair of opposite sentinel values.
    pub const FREE: Self = Self {
        min: -f32::MAX,
        max: f32::MAX,
    };

    /// Axis disabled, the angle is pinned to zero.
    pub const LOCKED: Self = Self { min: 0.0, max: 0.0 };

    pub fn new(min: f32, max: f32) -> IkResult<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(IkError::InvalidLimit { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn degrees(min: f32, max: f32) -> IkResult<Self> {
        Self::new(min.to_radians(), max.to_radians())
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_free(&self) -> bool {
        *self == Self::FREE
    }

    pub fn contains(&self, angle: f32) -> bool {
        angle >= self.min && angle <= self.max
    }

    pub fn clamp(&self, angle: f32) -> f32 {
        angle.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            RotationLimit::new(1.0, -1.0),
            Err(IkError::InvalidLimit { min: 1.0, max: -1.0 })
        );
        assert!(RotationLimit::new(f32::NAN, 0.0).is_err());
        assert!(RotationLimit::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn degrees_are_converted() {
        let limit = RotationLimit::degrees(-45.0, 90.0).unwrap();
        assert!((limit.min() + std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert!((limit.max() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn clamp_respects_bounds() {
        let limit = RotationLimit::new(-0.5, 0.25).unwrap();
        assert_eq!(limit.clamp(3.0), 0.25);
        assert_eq!(limit.clamp(-3.0), -0.5);
        assert_eq!(limit.clamp(0.1), 0.1);
        assert_eq!(RotationLimit::LOCKED.clamp(1.0), 0.0);
        assert_eq!(RotationLimit::FREE.clamp(1.0e6), 1.0e6);
        assert!(RotationLimit::default().is_free());
    }

    #[test]
    fn axis_units() {
        let units: Vec<Vec3> = Axis::ALL.iter().map(|a| a.unit()).collect();
        assert_eq!(units, vec![Vec3::X, Vec3::Y, Vec3::Z]);
        assert_eq!(Axis::Z.index(), 2);
        assert_eq!(Axis::Y.to_string(), "y");
    }
}
