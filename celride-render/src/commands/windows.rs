use std::cmp::Ordering;
use std::collections::BTreeMap;

use celride_core::{
    CommandFactory, CommandFactoryContext, DrawCommand, Material, MeshId, PipelineState, TextureId,
    WindowPanel,
};
use nalgebra::{Matrix4, Point3, Vector3};

use super::{push_outline_pair, BODY_LIFT};

// Sort anchors only; the panel meshes are modeled in place and all share
// the lifted body transform.
const WINDOW_ANCHORS: [(WindowPanel, [f32; 3]); 6] = [
    (WindowPanel::Front, [-0.813, 0.755, 0.0]),
    (WindowPanel::Rear, [1.092, 0.761, 0.0]),
    (WindowPanel::FrontLeft, [-0.3412, 0.757, 0.51]),
    (WindowPanel::FrontRight, [-0.3412, 0.757, -0.51]),
    (WindowPanel::RearLeft, [0.643, 0.756, 0.508]),
    (WindowPanel::RearRight, [0.643, 0.756, -0.508]),
];

// Distance-keyed map: panels at numerically identical distances collapse to
// one entry, which is tolerated.
#[derive(PartialEq)]
struct Distance(f32);

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

pub struct WindowsCommandFactory;

impl WindowsCommandFactory {
    pub fn new() -> Self {
        WindowsCommandFactory
    }
}

impl CommandFactory for WindowsCommandFactory {
    fn make_command(&mut self, ctx: CommandFactoryContext, commands: &mut Vec<DrawCommand>) {
        let model = ctx.scene.vehicle.world_transform()
            * Matrix4::new_translation(&Vector3::from(BODY_LIFT));
        let camera = ctx.camera_position();

        let mut back_to_front = BTreeMap::new();
        for (panel, anchor) in &WINDOW_ANCHORS {
            let world = model * Matrix4::new_translation(&Vector3::from(*anchor));
            let anchor_world = Point3::new(world[(0, 3)], world[(1, 3)], world[(2, 3)]);
            back_to_front.insert(Distance((camera - anchor_world).norm()), *panel);
        }

        let mvp = ctx.proj_view() * model;
        for (_, panel) in back_to_front.iter().rev() {
            push_outline_pair(
                commands,
                MeshId::Window(*panel),
                TextureId::CarWindow,
                Material::window_glass(),
                model,
                mvp,
                PipelineState {
                    depth_write: false,
                    blend: true,
                    double_sided: true,
                    ..PipelineState::default()
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use celride_core::{Camera, Screen};

    use crate::test_utils::{compose_with, test_scene};

    use super::*;

    fn panel_distance(panel: WindowPanel, model: &Matrix4<f32>, camera: &Point3<f32>) -> f32 {
        let anchor = WINDOW_ANCHORS.iter().find(|(p, _)| *p == panel).map(|(_, a)| a).unwrap();
        let world = model * Matrix4::new_translation(&Vector3::from(*anchor));
        (camera - Point3::new(world[(0, 3)], world[(1, 3)], world[(2, 3)])).norm()
    }

    #[test]
    fn panels_emit_back_to_front() {
        let scene = test_scene();
        let camera = Camera::new(Point3::new(-5.0, 1.0, 2.0), 0.0, 0.0);
        let screen = Screen::new(800, 600);

        let commands = compose_with(&mut WindowsCommandFactory::new(), &scene, &camera, &screen);
        assert_eq!(commands.len(), 12);

        let model = scene.vehicle.world_transform()
            * Matrix4::new_translation(&Vector3::from(BODY_LIFT));
        let distances: Vec<f32> = commands
            .iter()
            .step_by(2)
            .map(|c| match c.mesh {
                MeshId::Window(panel) => panel_distance(panel, &model, camera.position()),
                other => panic!("unexpected mesh {:?}", other),
            })
            .collect();
        for pair in distances.windows(2) {
            assert!(pair[0] >= pair[1], "panels out of order: {} before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn glass_passes_blend_without_depth_writes() {
        let scene = test_scene();
        let camera = Camera::new(Point3::new(0.0, 2.0, 8.0), 0.0, 0.0);
        let screen = Screen::new(800, 600);

        let commands = compose_with(&mut WindowsCommandFactory::new(), &scene, &camera, &screen);
        assert!(commands.iter().all(|c| c.state.blend));
        assert!(commands.iter().all(|c| !c.state.depth_write));
        assert!(commands.iter().all(|c| c.state.double_sided));
    }
}
