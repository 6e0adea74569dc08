use nalgebra::Vector3;

use super::padded;

/// The scene's single directional light (the sun).
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub direction: Vector3<f32>,
}

impl DirectionalLight {
    pub fn daylight() -> Self {
        DirectionalLight {
            ambient: Vector3::new(0.2, 0.2, 0.2),
            diffuse: Vector3::new(1.0, 1.0, 1.0),
            specular: Vector3::new(0.5, 0.5, 0.5),
            direction: Vector3::new(0.5, -1.0, 0.5),
        }
    }

    /// Night keeps the direction but contributes nothing.
    pub fn moonless() -> Self {
        DirectionalLight {
            ambient: Vector3::zeros(),
            diffuse: Vector3::zeros(),
            specular: Vector3::zeros(),
            direction: Vector3::new(0.5, -1.0, 0.5),
        }
    }

    pub fn into_uniform(self) -> DirectionalLightUniform {
        DirectionalLightUniform {
            ambient: padded(self.ambient),
            diffuse: padded(self.diffuse),
            specular: padded(self.specular),
            direction: padded(self.direction),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLightUniform {
    pub ambient: mint::Vector4<f32>,
    pub diffuse: mint::Vector4<f32>,
    pub specular: mint::Vector4<f32>,
    pub direction: mint::Vector4<f32>,
}
