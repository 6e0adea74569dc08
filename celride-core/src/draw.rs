use crevice::std140::AsStd140;
use nalgebra::Matrix4;

use crate::{Material, MeshId, TextureId};

/// Stencil reference written by the shaded pass and tested by the outline
/// pass. Both passes of a pair must agree on it.
pub const OUTLINE_STENCIL_REF: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    CelShaded,
    EdgeOutline,
    Skybox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StencilMode {
    Off,
    /// Write the reference value wherever the fragment passes.
    Write(u8),
    /// Draw only where the stored value differs from the reference.
    IfNotEqual(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthCompare {
    Less,
    LessOrEqual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineState {
    pub stencil: StencilMode,
    pub depth_write: bool,
    pub depth_compare: DepthCompare,
    pub blend: bool,
    pub double_sided: bool,
}

impl Default for PipelineState {
    fn default() -> Self {
        PipelineState {
            stencil: StencilMode::Off,
            depth_write: true,
            depth_compare: DepthCompare::Less,
            blend: false,
            double_sided: false,
        }
    }
}

/// One host draw call: bind the pipeline state, upload the appearance and
/// transform blocks, then draw `mesh`. Produced fresh every frame.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    pub mesh: MeshId,
    pub technique: Technique,
    pub texture: Option<TextureId>,
    pub material: Option<Material>,
    pub model: Matrix4<f32>,
    pub mvp: Matrix4<f32>,
    pub state: PipelineState,
}

impl DrawCommand {
    pub fn transforms_uniform(&self) -> TransformsUniform {
        TransformsUniform { model: self.model.into(), mvp: self.mvp.into() }
    }
}

#[derive(AsStd140)]
pub struct TransformsUniform {
    pub model: mint::ColumnMatrix4<f32>,
    pub mvp: mint::ColumnMatrix4<f32>,
}

impl TransformsUniform {
    pub fn as_std140(&self) -> <Self as AsStd140>::Std140Type {
        AsStd140::as_std140(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_plain_opaque() {
        let state = PipelineState::default();
        assert_eq!(state.stencil, StencilMode::Off);
        assert_eq!(state.depth_compare, DepthCompare::Less);
        assert!(state.depth_write);
        assert!(!state.blend);
        assert!(!state.double_sided);
    }

    #[test]
    fn transforms_uniform_carries_both_matrices() {
        let command = DrawCommand {
            mesh: MeshId::Frame,
            technique: Technique::CelShaded,
            texture: None,
            material: None,
            model: Matrix4::new_scaling(2.0),
            mvp: Matrix4::identity(),
            state: PipelineState::default(),
        };
        let uniform = command.transforms_uniform();
        assert_eq!(uniform.model.x.x, 2.0);
        assert_eq!(uniform.mvp.y.y, 1.0);
    }
}
