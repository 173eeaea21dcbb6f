use glam::{Mat4, Vec3};

const WORLD_UP: Vec3 = Vec3::Y;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMode {
    /// Looks from its position along its heading.
    FirstPerson,
    /// Orbits the point `distance` units in front of it when rotated.
    ThirdPerson { distance: f32 },
}

impl CameraMode {
    fn max_pitch(self) -> f32 {
        match self {
            CameraMode::FirstPerson => 90.0,
            CameraMode::ThirdPerson { .. } => 89.0,
        }
    }
}

/// Pitch/yaw camera. Angles are in degrees; yaw 0 looks down +X.
#[derive(Debug, Clone)]
pub struct Camera {
    pub mode: CameraMode,
    pub translate_speed: f32,
    pub rotate_speed: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    position: Vec3,
    pitch: f32,
    yaw: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::first_person(Vec3::new(0.0, 2.0, 5.0), 0.0, 270.0)
    }
}

impl Camera {
    fn with_mode(mode: CameraMode, position: Vec3, pitch: f32, yaw: f32) -> Self {
        let mut camera = Self {
            mode,
            translate_speed: 50.0,
            rotate_speed: 50.0,
            fov: 45.0_f32.to_radians(),
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            position,
            pitch,
            yaw,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.update_vectors();
        camera
    }

    pub fn first_person(position: Vec3, pitch: f32, yaw: f32) -> Self {
        Self::with_mode(CameraMode::FirstPerson, position, pitch, yaw)
    }

    /// The orbit distance is the initial distance from the world origin.
    pub fn third_person(position: Vec3, pitch: f32, yaw: f32) -> Self {
        let distance = position.length();
        Self::with_mode(CameraMode::ThirdPerson { distance }, position, pitch, yaw)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, pitch: f32, yaw: f32) {
        self.pitch = pitch;
        self.yaw = yaw;
        self.update_vectors();
    }

    /// Moves along the camera's own axes, scaled by `translate_speed`.
    pub fn translate(&mut self, forward: f32, right: f32, up: f32) {
        let velocity = self.front * forward + self.right * right + self.up * up;
        self.position += velocity * self.translate_speed;
    }

    pub fn rotate(&mut self, pitch_offset: f32, yaw_offset: f32) {
        let orbit_center = match self.mode {
            CameraMode::ThirdPerson { distance } => Some((self.position + self.front * distance, distance)),
            CameraMode::FirstPerson => None,
        };

        let max_pitch = self.mode.max_pitch();
        self.pitch = (self.pitch + pitch_offset * self.rotate_speed).clamp(-max_pitch, max_pitch);
        self.yaw += yaw_offset * self.rotate_speed;
        if self.yaw > 360.0 {
            self.yaw -= 360.0;
        }
        if self.yaw < 0.0 {
            self.yaw += 360.0;
        }

        self.update_vectors();

        if let Some((center, distance)) = orbit_center {
            self.position = center - self.front * distance;
        }
    }

    fn update_vectors(&mut self) {
        let (pitch, yaw) = (self.pitch.to_radians(), self.yaw.to_radians());
        self.front = Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin()).normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn yaw_zero_looks_down_positive_x() {
        let camera = Camera::first_person(Vec3::ZERO, 0.0, 0.0);
        assert_abs_diff_eq!(camera.front(), Vec3::X, epsilon = 1e-6);
        assert_abs_diff_eq!(camera.right(), Vec3::Z, epsilon = 1e-6);
        assert_abs_diff_eq!(camera.up(), Vec3::Y, epsilon = 1e-6);
    }

    #[test]
    fn translate_moves_along_front() {
        let mut camera = Camera::first_person(Vec3::ZERO, 0.0, 0.0);
        camera.translate_speed = 2.0;
        camera.translate(1.0, 0.0, 0.5);
        assert_abs_diff_eq!(camera.position(), Vec3::new(2.0, 1.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn pitch_is_clamped_and_yaw_wraps() {
        let mut camera = Camera::first_person(Vec3::ZERO, 0.0, 350.0);
        camera.rotate_speed = 1.0;
        camera.rotate(200.0, 20.0);
        assert_eq!(camera.pitch(), 90.0);
        assert_abs_diff_eq!(camera.yaw(), 10.0, epsilon = 1e-4);

        let mut orbit = Camera::third_person(Vec3::new(0.0, 0.0, 10.0), 0.0, 270.0);
        orbit.rotate_speed = 1.0;
        orbit.rotate(-200.0, 0.0);
        assert_eq!(orbit.pitch(), -89.0);
    }

    #[test]
    fn third_person_orbits_its_focus_point() {
        // Starts at +Z looking toward the origin (yaw 270 looks down -Z).
        let mut camera = Camera::third_person(Vec3::new(0.0, 0.0, 10.0), 0.0, 270.0);
        let focus = camera.position() + camera.front() * 10.0;
        assert_abs_diff_eq!(focus, Vec3::ZERO, epsilon = 1e-4);

        camera.rotate_speed = 1.0;
        camera.rotate(0.0, -90.0);

        // Now at yaw 180, looking down -X from +X.
        assert_abs_diff_eq!(camera.position(), Vec3::new(10.0, 0.0, 0.0), epsilon = 1e-3);
        assert_abs_diff_eq!(camera.position() + camera.front() * 10.0, Vec3::ZERO, epsilon = 1e-3);
    }

    #[test]
    fn view_matrix_maps_focus_in_front() {
        let camera = Camera::first_person(Vec3::new(0.0, 0.0, 5.0), 0.0, 270.0);
        let p = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert_abs_diff_eq!(p, Vec3::new(0.0, 0.0, -5.0), epsilon = 1e-5);
    }
}
