use std::f32::consts::PI;

use nalgebra::{Matrix4, Point3, Rotation3, Vector3};

pub const BRAKING_FORCE: f32 = 4.0;
pub const LOW_SPEED_THRESHOLD: f32 = 0.1;
pub const WHEELBASE: f32 = 2.7;
pub const WHEEL_RADIUS: f32 = 0.2;
pub const BLINKER_PERIOD: f32 = 0.5;

const BRAKE_APPLIED_SPEED_THRESHOLD: f32 = 0.01;

/// Pose and control state of the single drivable car. Control fields are
/// written by the host between frames; `update` advances everything else.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub position: Point3<f32>,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    /// Always in (-pi, pi].
    pub wheel_roll: f32,
    /// Degrees; the host clamps the slider range.
    pub steering_angle: f32,
    pub headlight_on: bool,
    pub braking: bool,
    pub left_blinker: bool,
    pub right_blinker: bool,
    pub blinker_lit: bool,
    pub blinker_timer: f32,
}

impl Vehicle {
    pub fn new() -> Self {
        Vehicle {
            position: Point3::new(0.0, 0.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            speed: 0.0,
            wheel_roll: 0.0,
            steering_angle: 0.0,
            headlight_on: false,
            braking: false,
            left_blinker: false,
            right_blinker: false,
            blinker_lit: false,
            blinker_timer: 0.0,
        }
    }

    /// Advances the pose by `delta` seconds. Bicycle-model steering: yaw rate
    /// is speed * sin(-steering) / wheelbase.
    pub fn update(&mut self, delta: f32) {
        if self.braking {
            if self.speed.abs() < LOW_SPEED_THRESHOLD {
                self.speed = 0.0;
            }
            if self.speed > BRAKE_APPLIED_SPEED_THRESHOLD {
                self.speed -= BRAKING_FORCE * delta;
            } else if self.speed < -BRAKE_APPLIED_SPEED_THRESHOLD {
                self.speed += BRAKING_FORCE * delta;
            }
        }

        let angular_speed = self.speed * (-self.steering_angle.to_radians()).sin() / WHEELBASE;
        self.yaw += angular_speed * delta;

        let heading = Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw);
        self.position += heading * Vector3::new(-self.speed, 0.0, 0.0) * delta;

        self.wheel_roll += self.speed / (2.0 * PI * WHEEL_RADIUS) * delta;
        if self.wheel_roll > PI {
            self.wheel_roll -= 2.0 * PI;
        } else if self.wheel_roll < -PI {
            self.wheel_roll += 2.0 * PI;
        }

        if self.left_blinker || self.right_blinker {
            self.blinker_timer += delta;
            if self.blinker_timer > BLINKER_PERIOD {
                self.blinker_timer = 0.0;
                self.blinker_lit = !self.blinker_lit;
            }
        } else {
            // A freshly activated blinker starts lit.
            self.blinker_lit = true;
            self.blinker_timer = 0.0;
        }
    }

    pub fn world_transform(&self) -> Matrix4<f32> {
        Matrix4::new_translation(&self.position.coords)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), self.yaw).to_homogeneous()
            * Rotation3::from_axis_angle(&Vector3::x_axis(), self.pitch).to_homogeneous()
    }
}
