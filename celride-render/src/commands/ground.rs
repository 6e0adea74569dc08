use celride_core::{
    CommandFactory, CommandFactoryContext, DrawCommand, Material, MeshId, PipelineState, Technique,
    TextureId,
};
use nalgebra::{Matrix4, Vector3};

const STREET_SCALE: [f32; 3] = [100.0, 1.0, 5.0];
const GRASS_SCALE: [f32; 3] = [100.0, 1.0, 50.0];
const GRASS_SINK: f32 = -0.1;

pub struct GroundCommandFactory;

impl GroundCommandFactory {
    pub fn new() -> Self {
        GroundCommandFactory
    }
}

impl CommandFactory for GroundCommandFactory {
    fn make_command(&mut self, ctx: CommandFactoryContext, commands: &mut Vec<DrawCommand>) {
        let street_model = Matrix4::new_nonuniform_scaling(&Vector3::from(STREET_SCALE));
        commands.push(DrawCommand {
            mesh: MeshId::Street,
            technique: Technique::CelShaded,
            texture: Some(TextureId::Street),
            material: Some(Material::street()),
            model: street_model,
            mvp: ctx.proj_view() * street_model,
            state: PipelineState::default(),
        });

        // The grass plane sits slightly below the street to avoid z-fighting.
        let grass_model = Matrix4::new_translation(&Vector3::new(0.0, GRASS_SINK, 0.0))
            * Matrix4::new_nonuniform_scaling(&Vector3::from(GRASS_SCALE));
        commands.push(DrawCommand {
            mesh: MeshId::Grass,
            technique: Technique::CelShaded,
            texture: Some(TextureId::Grass),
            material: Some(Material::grass()),
            model: grass_model,
            mvp: ctx.proj_view() * grass_model,
            state: PipelineState::default(),
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{compose_with, test_camera, test_scene, test_screen};

    use super::*;

    #[test]
    fn street_draws_over_grass() {
        let scene = test_scene();
        let commands =
            compose_with(&mut GroundCommandFactory::new(), &scene, &test_camera(), &test_screen());
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].mesh, MeshId::Street);
        assert_eq!(commands[1].mesh, MeshId::Grass);
        assert!(commands[1].model[(1, 3)] < commands[0].model[(1, 3)]);
        assert!(commands.iter().all(|c| c.state.stencil == celride_core::StencilMode::Off));
    }
}
