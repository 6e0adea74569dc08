use nalgebra::{Matrix4, Perspective3, Point3, Rotation3, Vector3};

use crate::Screen;

const FIELD_OF_VIEW_DEG: f32 = 70.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

/// Free walk camera: position plus pitch/yaw orientation.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Point3<f32>,
    pitch: f32,
    yaw: f32,
}

impl Camera {
    pub fn new(position: Point3<f32>, pitch: f32, yaw: f32) -> Self {
        Camera { position, pitch, yaw }
    }

    pub fn from_origin() -> Self {
        Camera::new(Point3::new(0.0, 0.0, 0.0), 0.0, 0.0)
    }

    pub fn position(&self) -> &Point3<f32> {
        &self.position
    }
    pub fn angles(&self) -> (f32, f32) {
        (self.pitch, self.yaw)
    }

    /// Displaces by an offset expressed in the camera's yaw-rotated frame.
    pub fn move_at(self, x: f32, y: f32, z: f32) -> Self {
        let offset =
            Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw) * Vector3::new(x, y, z);
        Camera::new(self.position + offset, self.pitch, self.yaw)
    }

    pub fn rotate(self, pitch: f32, yaw: f32) -> Self {
        Camera::new(self.position, self.pitch + pitch, self.yaw + yaw)
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Rotation3::from_axis_angle(&Vector3::x_axis(), -self.pitch).to_homogeneous()
            * Rotation3::from_axis_angle(&Vector3::y_axis(), -self.yaw).to_homogeneous()
            * Matrix4::new_translation(&(-self.position.coords))
    }

    pub fn projection_matrix(&self, screen: &Screen) -> Matrix4<f32> {
        Perspective3::new(
            screen.aspect_ratio(),
            FIELD_OF_VIEW_DEG.to_radians(),
            NEAR_PLANE,
            FAR_PLANE,
        )
        .to_homogeneous()
    }
}
