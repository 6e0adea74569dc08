use nalgebra::{Point3, Vector3};

use super::padded;

#[derive(Debug, Clone)]
pub struct SpotLight {
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub position: Point3<f32>,
    pub direction: Vector3<f32>,
    pub exponent: f32,
    /// Degrees, full cone.
    pub opening_angle: f32,
}

impl SpotLight {
    /// A positioned spot that contributes no light until given colors.
    pub fn dark(
        position: Point3<f32>,
        direction: Vector3<f32>,
        exponent: f32,
        opening_angle: f32,
    ) -> Self {
        SpotLight {
            ambient: Vector3::zeros(),
            diffuse: Vector3::zeros(),
            specular: Vector3::zeros(),
            position,
            direction,
            exponent,
            opening_angle,
        }
    }

    pub fn with_colors(
        mut self,
        ambient: Vector3<f32>,
        diffuse: Vector3<f32>,
        specular: Vector3<f32>,
    ) -> Self {
        self.ambient = ambient;
        self.diffuse = diffuse;
        self.specular = specular;
        self
    }

    pub fn into_uniform(self) -> SpotLightUniform {
        SpotLightUniform {
            ambient: padded(self.ambient),
            diffuse: padded(self.diffuse),
            specular: padded(self.specular),
            position: padded(self.position.coords),
            direction: self.direction.into(),
            exponent: self.exponent,
            opening_angle: self.opening_angle,
            _padding: [0.0; 3],
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SpotLightUniform {
    pub ambient: mint::Vector4<f32>,
    pub diffuse: mint::Vector4<f32>,
    pub specular: mint::Vector4<f32>,
    pub position: mint::Vector4<f32>,
    pub direction: mint::Vector3<f32>,
    pub exponent: f32,
    pub opening_angle: f32,
    _padding: [f32; 3],
}

impl SpotLightUniform {
    pub fn zeroed() -> Self {
        SpotLightUniform {
            ambient: [0.0; 4].into(),
            diffuse: [0.0; 4].into(),
            specular: [0.0; 4].into(),
            position: [0.0; 4].into(),
            direction: [0.0; 3].into(),
            exponent: 0.0,
            opening_angle: 0.0,
            _padding: [0.0; 3],
        }
    }
}
