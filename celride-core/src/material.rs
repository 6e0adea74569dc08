use crevice::std140::AsStd140;
use nalgebra::Vector3;

/// Phong-style appearance record consumed by the cel shading pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub emission: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub shininess: f32,
}

fn splat(value: f32) -> Vector3<f32> {
    Vector3::new(value, value, value)
}

impl Material {
    pub fn new(
        ambient: Vector3<f32>,
        diffuse: Vector3<f32>,
        specular: Vector3<f32>,
        shininess: f32,
    ) -> Self {
        Material { emission: Vector3::zeros(), ambient, diffuse, specular, shininess }
    }

    pub fn with_emission(mut self, emission: Vector3<f32>) -> Self {
        self.emission = emission;
        self
    }

    pub fn body() -> Self {
        Material::new(splat(1.0), splat(1.0), splat(0.7), 10.0)
    }

    pub fn grass() -> Self {
        Material::new(splat(0.8), splat(1.0), splat(0.05), 100.0)
    }

    pub fn street() -> Self {
        Material::new(splat(0.7), splat(1.0), splat(0.025), 300.0)
    }

    pub fn streetlight() -> Self {
        Material::new(splat(0.8), splat(1.0), splat(0.7), 10.0)
    }

    pub fn streetlight_lamp() -> Self {
        Material::new(splat(1.0), splat(1.0), splat(0.7), 10.0)
            .with_emission(Vector3::new(0.8, 0.7, 0.5))
    }

    pub fn window_glass() -> Self {
        Material::new(splat(1.0), splat(1.0), splat(1.0), 2.0)
    }

    pub fn into_uniform(self) -> MaterialUniform {
        MaterialUniform {
            emission: self.emission.into(),
            ambient: self.ambient.into(),
            diffuse: self.diffuse.into(),
            specular: self.specular.into(),
            shininess: self.shininess,
        }
    }
}

#[derive(AsStd140)]
pub struct MaterialUniform {
    pub emission: mint::Vector3<f32>,
    pub ambient: mint::Vector3<f32>,
    pub diffuse: mint::Vector3<f32>,
    pub specular: mint::Vector3<f32>,
    pub shininess: f32,
}

impl MaterialUniform {
    pub fn as_std140(&self) -> <Self as AsStd140>::Std140Type {
        AsStd140::as_std140(self)
    }
}
