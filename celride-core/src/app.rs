use crate::{
    light::LightsBlockUniform, Camera, CommandFactory, CommandFactoryContext, DrawCommand, Scene,
    Screen,
};

/// One composed frame: the light block to upload plus the ordered draw list.
pub struct Frame {
    pub lights: LightsBlockUniform,
    pub commands: Vec<DrawCommand>,
}

pub struct App {
    commands: Vec<Box<dyn CommandFactory>>,
}

impl App {
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self { commands }
    }

    /// Pure function of (scene, camera, screen): factories append their
    /// commands in registration order.
    pub fn compose_frame(&mut self, scene: &Scene, camera: &Camera, screen: &Screen) -> Frame {
        let ctx = CommandFactoryContext::new(scene, camera, screen);
        let mut commands = Vec::new();
        for factory in self.commands.iter_mut() {
            factory.make_command(ctx.clone(), &mut commands);
        }
        Frame { lights: scene.lights.block(&scene.vehicle).into_uniform(), commands }
    }
}

pub struct AppBuilder {
    commands: Vec<Box<dyn CommandFactory>>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self { commands: vec![] }
    }
    pub fn commands(&self) -> &Vec<Box<dyn CommandFactory>> {
        &self.commands
    }
    pub fn then_command(mut self, f: Box<dyn CommandFactory>) -> Self {
        self.commands.push(f);
        self
    }
    pub fn build(self) -> App {
        App::new(self.commands)
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        AppBuilder::new()
    }
}
