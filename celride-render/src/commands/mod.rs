mod ground;
mod skybox;
mod streetlights;
mod trees;
mod vehicle;
mod windows;

pub use ground::GroundCommandFactory;
pub use skybox::SkyboxCommandFactory;
pub use streetlights::StreetlightsCommandFactory;
pub use trees::TreesCommandFactory;
pub use vehicle::VehicleCommandFactory;
pub use windows::WindowsCommandFactory;

use celride_core::{
    DrawCommand, Material, MeshId, PipelineState, StencilMode, Technique, TextureId,
    OUTLINE_STENCIL_REF,
};
use nalgebra::Matrix4;

pub(crate) const BODY_LIFT: [f32; 3] = [0.0, 0.25, 0.0];

/// The silhouette contract: a shaded pass that writes the stencil reference,
/// then the same mesh through the outline technique drawn only where the
/// reference is absent, with depth writes off.
pub(crate) fn push_outline_pair(
    commands: &mut Vec<DrawCommand>,
    mesh: MeshId,
    texture: TextureId,
    material: Material,
    model: Matrix4<f32>,
    mvp: Matrix4<f32>,
    state: PipelineState,
) {
    commands.push(DrawCommand {
        mesh,
        technique: Technique::CelShaded,
        texture: Some(texture),
        material: Some(material),
        model,
        mvp,
        state: PipelineState { stencil: StencilMode::Write(OUTLINE_STENCIL_REF), ..state.clone() },
    });
    commands.push(DrawCommand {
        mesh,
        technique: Technique::EdgeOutline,
        texture: None,
        material: None,
        model,
        mvp,
        state: PipelineState {
            stencil: StencilMode::IfNotEqual(OUTLINE_STENCIL_REF),
            depth_write: false,
            ..state
        },
    });
}
