use celride_core::AppBuilder;

use crate::commands;

pub trait AppBuilderSceneExt: Sized {
    /// Registers the full scene in draw order: skybox, ground, props,
    /// vehicle, then the transparent windows.
    fn then_main_scene(self) -> Self;
}

impl AppBuilderSceneExt for AppBuilder {
    fn then_main_scene(self) -> Self {
        self.then_command(Box::new(commands::SkyboxCommandFactory::new()))
            .then_command(Box::new(commands::GroundCommandFactory::new()))
            .then_command(Box::new(commands::TreesCommandFactory::new()))
            .then_command(Box::new(commands::StreetlightsCommandFactory::new()))
            .then_command(Box::new(commands::VehicleCommandFactory::new()))
            .then_command(Box::new(commands::WindowsCommandFactory::new()))
    }
}
