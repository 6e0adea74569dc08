use celride_core::{
    CommandFactory, CommandFactoryContext, DrawCommand, Material, MeshId, PipelineState, Technique,
    TextureId, TimeOfDay,
};

use super::push_outline_pair;

pub struct StreetlightsCommandFactory;

impl StreetlightsCommandFactory {
    pub fn new() -> Self {
        StreetlightsCommandFactory
    }
}

impl CommandFactory for StreetlightsCommandFactory {
    fn make_command(&mut self, ctx: CommandFactoryContext, commands: &mut Vec<DrawCommand>) {
        let lamp_material = match ctx.scene.time_of_day {
            TimeOfDay::Night => Material::streetlight_lamp(),
            TimeOfDay::Day => Material::streetlight(),
        };

        for prop in ctx.scene.layout.props.iter().filter(|p| p.mesh == MeshId::Streetlight) {
            let mvp = ctx.proj_view() * prop.transform;

            commands.push(DrawCommand {
                mesh: MeshId::StreetlightLamp,
                technique: Technique::CelShaded,
                texture: Some(TextureId::StreetlightLamp),
                material: Some(lamp_material.clone()),
                model: prop.transform,
                mvp,
                state: PipelineState::default(),
            });

            push_outline_pair(
                commands,
                prop.mesh,
                prop.texture,
                Material::streetlight(),
                prop.transform,
                mvp,
                PipelineState::default(),
            );
        }
    }
}
