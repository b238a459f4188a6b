//! View, projection and model matrices for the spinning-model demo.
//!
//! Conventions: right-handed, +Y up, camera looks down -Z, clip-space depth in
//! `[0, 1]` (wgpu).

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Offset applied after the spin so the model sits below the eye line.
pub const MODEL_OFFSET: Vec3 = Vec3::new(0.0, -2.0, 0.0);

/// World-to-camera matrix for a camera at `eye` looking along `direction`.
///
/// `direction` must not be parallel to +Y.
pub fn look_at(direction: Vec3, eye: Vec3) -> Mat4 {
    let forward = direction.normalize();
    let right = forward.cross(Vec3::Y).normalize();
    let up = right.cross(forward).normalize();

    let camera_to_world = Mat4::from_cols(
        right.extend(0.0),
        up.extend(0.0),
        (-forward).extend(0.0),
        eye.extend(1.0),
    );

    camera_to_world.inverse()
}

/// Right-handed perspective projection with `[0, 1]` depth.
///
/// `fovy` is the full vertical field of view in radians.
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (0.5 * fovy).tan();
    let depth = far / (near - far);

    #[rustfmt::skip]
    let cols = [
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, depth, -1.0,
        0.0, 0.0, near * depth, 0.0,
    ];
    Mat4::from_cols_array(&cols)
}

/// Rotation about +Y that advances with frame time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spin {
    angle: f32,
    /// Radians per second.
    speed: f32,
}

impl Spin {
    pub fn new(speed: f32) -> Self {
        Self { angle: 0.0, speed }
    }

    /// Current angle, always in `[0, 2π)`.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn advance(&mut self, dt: f32) {
        let angle = (self.angle + dt * self.speed).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs.
        self.angle = if angle >= TAU { 0.0 } else { angle };
    }

    /// Spin about the model origin, then move the model to `MODEL_OFFSET`.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(MODEL_OFFSET) * Mat4::from_rotation_y(self.angle)
    }
}

/// Uniform block consumed by the model shader.
///
/// `model_view` is used to bring normals into view space for lighting.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Matrices {
    pub model_view_projection: Mat4,
    pub model_view: Mat4,
}

impl Matrices {
    pub fn new(projection: Mat4, view: Mat4, model: Mat4) -> Self {
        let model_view = view * model;
        Self {
            model_view_projection: projection * model_view,
            model_view,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f32 = 1e-5;

    // ── look_at ───────────────────────────────────────────────────────────

    #[test]
    fn look_at_matches_glam_look_to() {
        let dir = Vec3::new(0.0, -0.5, -1.0);
        let eye = Vec3::new(0.0, 2.0, 5.0);
        let ours = look_at(dir, eye);
        let glams = Mat4::look_to_rh(eye, dir.normalize(), Vec3::Y);
        assert!(ours.abs_diff_eq(glams, EPS), "{ours:?} != {glams:?}");
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vec3::new(3.0, 1.0, -2.0);
        let view = look_at(Vec3::new(1.0, 0.2, 0.5), eye);
        assert!(view.transform_point3(eye).length() < EPS);
    }

    #[test]
    fn look_at_puts_target_on_negative_z() {
        let dir = Vec3::new(0.0, -0.5, -1.0);
        let eye = Vec3::new(0.0, 2.0, 5.0);
        let target = eye + dir.normalize() * 4.0;
        let p = look_at(dir, eye).transform_point3(target);
        assert!((p - Vec3::new(0.0, 0.0, -4.0)).length() < EPS);
    }

    // ── perspective ───────────────────────────────────────────────────────

    #[test]
    fn perspective_matches_glam() {
        let ours = perspective(FRAC_PI_2, 16.0 / 9.0, 0.1, 10.0);
        let glams = Mat4::perspective_rh(FRAC_PI_2, 16.0 / 9.0, 0.1, 10.0);
        assert!(ours.abs_diff_eq(glams, EPS));
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let proj = perspective(FRAC_PI_2, 1.0, 0.1, 10.0);
        let near = proj.project_point3(Vec3::new(0.0, 0.0, -0.1));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -10.0));
        assert!(near.z.abs() < EPS);
        assert!((far.z - 1.0).abs() < EPS);
    }

    #[test]
    fn perspective_ninety_degrees_reaches_frustum_edge() {
        // With a 90 degree fov the top edge sits at y == -z.
        let proj = perspective(FRAC_PI_2, 2.0, 0.1, 10.0);
        let top = proj.project_point3(Vec3::new(0.0, 1.0, -1.0));
        let right = proj.project_point3(Vec3::new(2.0, 0.0, -1.0));
        assert!((top.y - 1.0).abs() < EPS);
        assert!((right.x - 1.0).abs() < EPS);
    }

    // ── spin ──────────────────────────────────────────────────────────────

    #[test]
    fn spin_advances_by_speed() {
        let mut spin = Spin::new(0.5);
        spin.advance(0.25);
        assert!((spin.angle() - 0.125).abs() < EPS);
    }

    #[test]
    fn spin_wraps_forward() {
        let mut spin = Spin::new(1.0);
        spin.advance(TAU + 0.5);
        assert!((spin.angle() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn spin_wraps_backward() {
        let mut spin = Spin::new(-1.0);
        spin.advance(0.5);
        assert!(spin.angle() >= 0.0 && spin.angle() < TAU);
        assert!((spin.angle() - (TAU - 0.5)).abs() < 1e-4);
    }

    #[test]
    fn spin_angle_stays_in_range_for_tiny_steps() {
        let mut spin = Spin::new(-1.0);
        spin.advance(1e-9);
        assert!(spin.angle() < TAU);
    }

    #[test]
    fn model_matrix_rotates_then_offsets() {
        let mut spin = Spin::new(1.0);
        spin.advance(PI / 2.0);
        let p = spin.model_matrix().transform_point3(Vec3::X);
        // +X rotated a quarter turn about +Y lands on -Z.
        assert!((p - (Vec3::NEG_Z + MODEL_OFFSET)).length() < EPS);
    }

    // ── matrices ──────────────────────────────────────────────────────────

    #[test]
    fn matrices_compose_in_order() {
        let proj = perspective(FRAC_PI_2, 1.0, 0.1, 10.0);
        let view = look_at(Vec3::NEG_Z, Vec3::new(0.0, 0.0, 5.0));
        let model = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let m = Matrices::new(proj, view, model);

        assert!(m.model_view.abs_diff_eq(view * model, EPS));
        assert!(m.model_view_projection.abs_diff_eq(proj * view * model, EPS));
    }

    #[test]
    fn matrices_block_is_two_mat4() {
        assert_eq!(std::mem::size_of::<Matrices>(), 128);
        assert_eq!(bytemuck::bytes_of(&Matrices::zeroed()).len(), 128);
    }
}
