use celride_core::{Camera, CommandFactory, CommandFactoryContext, DrawCommand, Scene, Screen};
use nalgebra::Point3;

pub fn test_scene() -> Scene {
    Scene::new(7)
}

pub fn test_camera() -> Camera {
    Camera::new(Point3::new(0.0, 2.0, 10.0), 0.0, 0.0)
}

pub fn test_screen() -> Screen {
    Screen::new(800, 600)
}

pub fn compose_with(
    factory: &mut dyn CommandFactory,
    scene: &Scene,
    camera: &Camera,
    screen: &Screen,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    factory.make_command(CommandFactoryContext::new(scene, camera, screen), &mut commands);
    commands
}
