use celride_core::{
    CommandFactory, CommandFactoryContext, DrawCommand, Material, MeshId, PipelineState,
};

use super::push_outline_pair;

pub struct TreesCommandFactory;

impl TreesCommandFactory {
    pub fn new() -> Self {
        TreesCommandFactory
    }
}

impl CommandFactory for TreesCommandFactory {
    fn make_command(&mut self, ctx: CommandFactoryContext, commands: &mut Vec<DrawCommand>) {
        for prop in ctx.scene.layout.props.iter().filter(|p| p.mesh == MeshId::Tree) {
            push_outline_pair(
                commands,
                prop.mesh,
                prop.texture,
                Material::grass(),
                prop.transform,
                ctx.proj_view() * prop.transform,
                PipelineState::default(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use celride_core::{layout::N_TREES, StencilMode, Technique, OUTLINE_STENCIL_REF};

    use crate::test_utils::{compose_with, test_camera, test_scene, test_screen};

    use super::*;

    #[test]
    fn every_tree_gets_an_outline_pair() {
        let scene = test_scene();
        let commands =
            compose_with(&mut TreesCommandFactory::new(), &scene, &test_camera(), &test_screen());
        assert_eq!(commands.len(), 2 * N_TREES);

        for pair in commands.chunks(2) {
            assert_eq!(pair[0].technique, Technique::CelShaded);
            assert_eq!(pair[0].state.stencil, StencilMode::Write(OUTLINE_STENCIL_REF));
            assert!(pair[0].state.depth_write);

            assert_eq!(pair[1].technique, Technique::EdgeOutline);
            assert_eq!(pair[1].state.stencil, StencilMode::IfNotEqual(OUTLINE_STENCIL_REF));
            assert!(!pair[1].state.depth_write);
            assert!(pair[1].material.is_none());

            assert_eq!(pair[0].mesh, pair[1].mesh);
            assert_eq!(pair[0].model, pair[1].model);
        }
    }
}
