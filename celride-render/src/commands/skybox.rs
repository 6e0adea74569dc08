use celride_core::{
    CommandFactory, CommandFactoryContext, DepthCompare, DrawCommand, MeshId, PipelineState,
    Technique, TextureId, TimeOfDay,
};
use nalgebra::Matrix4;

pub struct SkyboxCommandFactory;

impl SkyboxCommandFactory {
    pub fn new() -> Self {
        SkyboxCommandFactory
    }
}

impl CommandFactory for SkyboxCommandFactory {
    fn make_command(&mut self, ctx: CommandFactoryContext, commands: &mut Vec<DrawCommand>) {
        // The box follows the camera: rotation only, translation zeroed.
        let mut rotation_only = *ctx.view();
        rotation_only[(0, 3)] = 0.0;
        rotation_only[(1, 3)] = 0.0;
        rotation_only[(2, 3)] = 0.0;

        let texture = match ctx.scene.time_of_day {
            TimeOfDay::Day => TextureId::SkyboxDay,
            TimeOfDay::Night => TextureId::SkyboxNight,
        };

        commands.push(DrawCommand {
            mesh: MeshId::Skybox,
            technique: Technique::Skybox,
            texture: Some(texture),
            material: None,
            model: Matrix4::identity(),
            mvp: ctx.projection() * rotation_only,
            state: PipelineState {
                depth_compare: DepthCompare::LessOrEqual,
                ..PipelineState::default()
            },
        });
    }
}
