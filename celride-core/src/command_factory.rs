use nalgebra::{Matrix4, Point3};

use crate::{Camera, DrawCommand, Scene, Screen};

pub trait CommandFactory {
    fn make_command(&mut self, ctx: CommandFactoryContext, commands: &mut Vec<DrawCommand>);
}

#[derive(Clone)]
pub struct CommandFactoryContext<'a> {
    pub scene: &'a Scene,
    pub camera: &'a Camera,
    pub screen: &'a Screen,
    view: Matrix4<f32>,
    projection: Matrix4<f32>,
    proj_view: Matrix4<f32>,
}

impl<'a> CommandFactoryContext<'a> {
    pub fn new(scene: &'a Scene, camera: &'a Camera, screen: &'a Screen) -> Self {
        let view = camera.view_matrix();
        let projection = camera.projection_matrix(screen);
        CommandFactoryContext { scene, camera, screen, view, projection, proj_view: projection * view }
    }

    pub fn view(&self) -> &Matrix4<f32> {
        &self.view
    }
    pub fn projection(&self) -> &Matrix4<f32> {
        &self.projection
    }
    pub fn proj_view(&self) -> &Matrix4<f32> {
        &self.proj_view
    }
    pub fn camera_position(&self) -> Point3<f32> {
        *self.camera.position()
    }
}
