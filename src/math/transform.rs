use glam::{Mat3, Mat4, Vec3};

/// Local affine transform of a scene node.
///
/// `rotation` holds XYZ Euler angles in radians. The matrix is always composed
/// as `T * Rx * Ry * Rz * S`; the IK Jacobian relies on this order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn from_position_rotation(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn rotation_matrix(&self) -> Mat3 {
        Mat3::from_rotation_x(self.rotation.x)
            * Mat3::from_rotation_y(self.rotation.y)
            * Mat3::from_rotation_z(self.rotation.z)
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_mat3(self.rotation_matrix())
            * Mat4::from_scale(self.scale)
    }

    /// Decomposes an affine matrix without shear back into translation,
    /// XYZ Euler angles and scale.
    ///
    /// At gimbal lock (`|y| == 90°`) the Z angle is folded into X and reported as 0.
    pub fn from_matrix(matrix: Mat4) -> Self {
        let (scale, _, position) = matrix.to_scale_rotation_translation();

        let safe = |s: f32| if s.abs() > f32::EPSILON { s } else { 1.0 };
        let r = Mat3::from_cols(
            matrix.x_axis.truncate() / safe(scale.x),
            matrix.y_axis.truncate() / safe(scale.y),
            matrix.z_axis.truncate() / safe(scale.z),
        );

        // R = Rx(a) * Ry(b) * Rz(c):
        //   row 0 = [cb*cc, -cb*sc, sb]
        //   col 2 = [sb, -sa*cb, ca*cb]
        let sin_b = r.z_axis.x.clamp(-1.0, 1.0);
        let b = sin_b.asin();
        let (a, c) = if sin_b.abs() < 1.0 - 1e-6 {
            (
                (-r.z_axis.y).atan2(r.z_axis.z),
                (-r.y_axis.x).atan2(r.x_axis.x),
            )
        } else {
            (r.y_axis.z.atan2(r.y_axis.y), 0.0)
        };

        Self {
            position,
            rotation: Vec3::new(a, b, c),
            scale,
        }
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation_matrix() * (point * self.scale) + self.position
    }

    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation_matrix() * direction
    }
}
