mod direction;
mod rig;
mod spot;

pub use direction::{DirectionalLight, DirectionalLightUniform};
pub use rig::{LightRig, LightsBlock, LightsBlockUniform, GLOBAL_AMBIENT, MAX_SPOT_LIGHTS};
pub use spot::{SpotLight, SpotLightUniform};

use nalgebra::Vector3;

// std140 vec3 slots are padded out to vec4.
pub(crate) fn padded(v: Vector3<f32>) -> mint::Vector4<f32> {
    [v.x, v.y, v.z, 0.0].into()
}
