use nalgebra::{Point3, Vector3};

use crate::{scene::TimeOfDay, Vehicle};

use super::{DirectionalLight, DirectionalLightUniform, SpotLight, SpotLightUniform};

pub const MAX_SPOT_LIGHTS: usize = 16;
pub const GLOBAL_AMBIENT: f32 = 0.05;

const STREETLIGHT_EXPONENT: f32 = 6.0;
const STREETLIGHT_OPENING_ANGLE: f32 = 60.0;

const HEADLIGHT_LOCAL_POSITIONS: [[f32; 3]; 2] = [[-1.6, 0.64, -0.45], [-1.6, 0.64, 0.45]];
const HEADLIGHT_DIRECTION: [f32; 3] = [-10.0, -1.0, 0.0];
const BRAKE_LIGHT_LOCAL_POSITIONS: [[f32; 3]; 2] = [[1.6, 0.64, -0.45], [1.6, 0.64, 0.45]];
const BRAKE_LIGHT_DIRECTION: [f32; 3] = [10.0, -1.0, 0.0];

fn splat(value: f32) -> Vector3<f32> {
    Vector3::new(value, value, value)
}

/// Static lighting configuration: the sun plus one spot per streetlight
/// lamp. The four vehicle spots are derived per frame by `block`.
#[derive(Debug, Clone)]
pub struct LightRig {
    pub sun: DirectionalLight,
    pub streetlights: Vec<SpotLight>,
}

impl LightRig {
    pub fn new(lamp_positions: &[Point3<f32>]) -> Self {
        let streetlights = lamp_positions
            .iter()
            .map(|lamp| {
                SpotLight::dark(
                    *lamp,
                    Vector3::new(0.0, -1.0, 0.0),
                    STREETLIGHT_EXPONENT,
                    STREETLIGHT_OPENING_ANGLE,
                )
            })
            .collect();
        let mut rig = LightRig { sun: DirectionalLight::daylight(), streetlights };
        rig.set_time_of_day(TimeOfDay::Day);
        rig
    }

    pub fn set_time_of_day(&mut self, time_of_day: TimeOfDay) {
        match time_of_day {
            TimeOfDay::Day => {
                self.sun = DirectionalLight::daylight();
                for spot in &mut self.streetlights {
                    spot.ambient = Vector3::zeros();
                    spot.diffuse = Vector3::zeros();
                    spot.specular = Vector3::zeros();
                }
            }
            TimeOfDay::Night => {
                self.sun = DirectionalLight::moonless();
                for spot in &mut self.streetlights {
                    spot.ambient = splat(0.02);
                    spot.diffuse = splat(0.8);
                    spot.specular = splat(0.4);
                }
            }
        }
    }

    /// The frame's full spot set: streetlights plus the four vehicle spots,
    /// recomputed from the vehicle's current world transform.
    pub fn block(&self, vehicle: &Vehicle) -> LightsBlock {
        let body = vehicle.world_transform();
        let mut spots = self.streetlights.clone();

        for local in &HEADLIGHT_LOCAL_POSITIONS {
            let mut spot = SpotLight::dark(
                body.transform_point(&Point3::from(*local)),
                body.transform_vector(&Vector3::from(HEADLIGHT_DIRECTION)),
                4.0,
                30.0,
            );
            if vehicle.headlight_on {
                spot = spot.with_colors(splat(0.01), splat(1.0), splat(0.4));
            }
            spots.push(spot);
        }

        for local in &BRAKE_LIGHT_LOCAL_POSITIONS {
            let mut spot = SpotLight::dark(
                body.transform_point(&Point3::from(*local)),
                body.transform_vector(&Vector3::from(BRAKE_LIGHT_DIRECTION)),
                4.0,
                60.0,
            );
            if vehicle.braking {
                spot = spot.with_colors(
                    Vector3::new(0.01, 0.0, 0.0),
                    Vector3::new(0.9, 0.1, 0.1),
                    Vector3::new(0.35, 0.05, 0.05),
                );
            }
            spots.push(spot);
        }

        LightsBlock { sun: self.sun.clone(), spots }
    }
}

#[derive(Debug, Clone)]
pub struct LightsBlock {
    pub sun: DirectionalLight,
    pub spots: Vec<SpotLight>,
}

impl LightsBlock {
    pub fn into_uniform(self) -> LightsBlockUniform {
        let spot_count = self.spots.len().min(MAX_SPOT_LIGHTS) as u32;
        let mut spots = [SpotLightUniform::zeroed(); MAX_SPOT_LIGHTS];
        for (slot, spot) in spots.iter_mut().zip(self.spots.into_iter()) {
            *slot = spot.into_uniform();
        }
        LightsBlockUniform {
            sun: self.sun.into_uniform(),
            spots,
            spot_count,
            global_ambient: GLOBAL_AMBIENT,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LightsBlockUniform {
    pub sun: DirectionalLightUniform,
    pub spots: [SpotLightUniform; MAX_SPOT_LIGHTS],
    pub spot_count: u32,
    pub global_ambient: f32,
}
