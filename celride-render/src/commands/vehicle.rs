use celride_core::{
    CommandFactory, CommandFactoryContext, DrawCommand, Material, MeshId, PipelineState, Technique,
    TextureId, Vehicle,
};
use nalgebra::{Matrix4, Rotation3, Vector3};

use super::{push_outline_pair, BODY_LIFT};

const WHEEL_POSITIONS: [[f32; 3]; 4] = [
    [-1.29, 0.245, -0.57],
    [-1.29, 0.245, 0.57],
    [1.4, 0.245, -0.57],
    [1.4, 0.245, 0.57],
];
const WHEEL_PIVOT_OFFSET: f32 = 0.10124;

const HEADLIGHT_POSITIONS: [[f32; 3]; 4] = [
    [-2.0019, 0.64, -0.45],
    [-2.0019, 0.64, 0.45],
    [2.0019, 0.64, -0.45],
    [2.0019, 0.64, 0.45],
];
const LAMP_Z_OFFSET: f32 = 0.029;
const BLINKER_Z_OFFSET: f32 = -0.06065;

const FRONT_ON_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const FRONT_OFF_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
const REAR_ON_COLOR: [f32; 3] = [1.0, 0.1, 0.1];
const REAR_OFF_COLOR: [f32; 3] = [0.5, 0.1, 0.1];
const BLINKER_ON_COLOR: [f32; 3] = [1.0, 0.7, 0.3];
const BLINKER_OFF_COLOR: [f32; 3] = [0.5, 0.35, 0.15];

pub struct VehicleCommandFactory;

impl VehicleCommandFactory {
    pub fn new() -> Self {
        VehicleCommandFactory
    }
}

impl CommandFactory for VehicleCommandFactory {
    fn make_command(&mut self, ctx: CommandFactoryContext, commands: &mut Vec<DrawCommand>) {
        let vehicle = &ctx.scene.vehicle;
        let body = vehicle.world_transform();

        let frame_model = body * Matrix4::new_translation(&Vector3::from(BODY_LIFT));
        push_outline_pair(
            commands,
            MeshId::Frame,
            TextureId::Car,
            Material::body(),
            frame_model,
            ctx.proj_view() * frame_model,
            PipelineState::default(),
        );

        // Mirrored wheels flip winding, so both faces stay visible.
        for local in &WHEEL_POSITIONS {
            let model = body * wheel_transform(vehicle, local);
            push_outline_pair(
                commands,
                MeshId::Wheel,
                TextureId::Car,
                Material::body(),
                model,
                ctx.proj_view() * model,
                PipelineState { double_sided: true, ..PipelineState::default() },
            );
        }

        for local in &HEADLIGHT_POSITIONS {
            push_lamp(commands, &ctx, vehicle, &body, local);
            push_blinker(commands, &ctx, vehicle, &body, local);
        }
    }
}

/// Contact-point pivot, then steering (front axle only), then continuous
/// roll, then back out, then the left-side mirror. Order is load-bearing.
fn wheel_transform(vehicle: &Vehicle, local: &[f32; 3]) -> Matrix4<f32> {
    let is_front = local[0] < 0.0;
    let is_left = local[2] > 0.0;

    let pivot_in = Matrix4::new_translation(&Vector3::new(0.0, 0.0, -WHEEL_PIVOT_OFFSET));
    let place = Matrix4::new_translation(&Vector3::from(*local));
    let steer = if is_front {
        Rotation3::from_axis_angle(&Vector3::y_axis(), -vehicle.steering_angle.to_radians())
            .to_homogeneous()
    } else {
        Matrix4::identity()
    };
    let roll = Rotation3::from_axis_angle(&Vector3::z_axis(), vehicle.wheel_roll).to_homogeneous();
    let pivot_out = Matrix4::new_translation(&Vector3::new(0.0, 0.0, WHEEL_PIVOT_OFFSET));
    let mirror = if is_left {
        Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, 1.0, -1.0))
    } else {
        Matrix4::identity()
    };

    pivot_in * place * steer * roll * pivot_out * mirror
}

fn lamp_assembly_model(body: &Matrix4<f32>, local: &[f32; 3], z_offset: f32) -> Matrix4<f32> {
    let side = if local[2] > 0.0 { -1.0 } else { 1.0 };
    body * Matrix4::new_translation(&Vector3::new(0.0, 0.0, side * z_offset))
        * Matrix4::new_translation(&Vector3::from(*local))
}

fn push_lamp(
    commands: &mut Vec<DrawCommand>,
    ctx: &CommandFactoryContext,
    vehicle: &Vehicle,
    body: &Matrix4<f32>,
    local: &[f32; 3],
) {
    let is_front = local[0] < 0.0;
    let (base, lit, on) = if is_front {
        (FRONT_OFF_COLOR, FRONT_ON_COLOR, vehicle.headlight_on)
    } else {
        (REAR_OFF_COLOR, REAR_ON_COLOR, vehicle.braking)
    };
    let emission = if on { Vector3::from(lit) } else { Vector3::zeros() };
    let material = Material::new(base.into(), base.into(), base.into(), 10.0)
        .with_emission(emission);

    let model = lamp_assembly_model(body, local, LAMP_Z_OFFSET);
    commands.push(DrawCommand {
        mesh: MeshId::Lamp,
        technique: Technique::CelShaded,
        texture: Some(TextureId::Car),
        material: Some(material),
        model,
        mvp: ctx.proj_view() * model,
        state: PipelineState::default(),
    });
}

fn push_blinker(
    commands: &mut Vec<DrawCommand>,
    ctx: &CommandFactoryContext,
    vehicle: &Vehicle,
    body: &Matrix4<f32>,
    local: &[f32; 3],
) {
    let is_left = local[2] > 0.0;
    let active = (is_left && vehicle.left_blinker) || (!is_left && vehicle.right_blinker);
    let color = if vehicle.blinker_lit && active { BLINKER_ON_COLOR } else { BLINKER_OFF_COLOR };
    let material = Material::new(
        BLINKER_OFF_COLOR.into(),
        BLINKER_OFF_COLOR.into(),
        BLINKER_OFF_COLOR.into(),
        10.0,
    )
    .with_emission(Vector3::from(color));

    let model = lamp_assembly_model(body, local, BLINKER_Z_OFFSET);
    commands.push(DrawCommand {
        mesh: MeshId::Blinker,
        technique: Technique::CelShaded,
        texture: Some(TextureId::Car),
        material: Some(material),
        model,
        mvp: ctx.proj_view() * model,
        state: PipelineState::default(),
    });
}

#[cfg(test)]
mod tests {
    use celride_core::{StencilMode, OUTLINE_STENCIL_REF};

    use crate::test_utils::{compose_with, test_camera, test_scene, test_screen};

    use super::*;

    #[test]
    fn emits_frame_wheels_and_lamp_assemblies() {
        let scene = test_scene();
        let commands =
            compose_with(&mut VehicleCommandFactory::new(), &scene, &test_camera(), &test_screen());
        // Frame pair, four wheel pairs, four lamp + blinker singles.
        assert_eq!(commands.len(), 2 + 8 + 8);
        assert_eq!(commands[0].mesh, MeshId::Frame);
        assert_eq!(commands[0].state.stencil, StencilMode::Write(OUTLINE_STENCIL_REF));
        assert!(commands[2..10].iter().all(|c| c.state.double_sided));
        assert!(commands[10..].iter().all(|c| c.technique == Technique::CelShaded));
    }

    #[test]
    fn only_front_wheels_steer() {
        let mut vehicle = Vehicle::new();
        vehicle.steering_angle = 20.0;
        let steered_front = wheel_transform(&vehicle, &WHEEL_POSITIONS[0]);
        let steered_rear = wheel_transform(&vehicle, &WHEEL_POSITIONS[2]);

        vehicle.steering_angle = 0.0;
        assert_ne!(steered_front, wheel_transform(&vehicle, &WHEEL_POSITIONS[0]));
        assert_eq!(steered_rear, wheel_transform(&vehicle, &WHEEL_POSITIONS[2]));
    }

    #[test]
    fn left_wheels_are_mirrored() {
        let vehicle = Vehicle::new();
        assert!(wheel_transform(&vehicle, &WHEEL_POSITIONS[1]).determinant() < 0.0);
        assert!(wheel_transform(&vehicle, &WHEEL_POSITIONS[0]).determinant() > 0.0);
    }

    #[test]
    fn blinker_emission_gates_on_side_and_phase() {
        let mut scene = test_scene();
        scene.vehicle.left_blinker = true;
        scene.vehicle.blinker_lit = true;

        let commands =
            compose_with(&mut VehicleCommandFactory::new(), &scene, &test_camera(), &test_screen());
        let blinkers: Vec<_> =
            commands.iter().filter(|c| c.mesh == MeshId::Blinker).collect();
        assert_eq!(blinkers.len(), 4);
        // Anchors alternate right (z < 0) then left (z > 0).
        let on = Vector3::from(BLINKER_ON_COLOR);
        let off = Vector3::from(BLINKER_OFF_COLOR);
        assert_eq!(blinkers[0].material.as_ref().unwrap().emission, off);
        assert_eq!(blinkers[1].material.as_ref().unwrap().emission, on);
        assert_eq!(blinkers[2].material.as_ref().unwrap().emission, off);
        assert_eq!(blinkers[3].material.as_ref().unwrap().emission, on);

        scene.vehicle.blinker_lit = false;
        let dark =
            compose_with(&mut VehicleCommandFactory::new(), &scene, &test_camera(), &test_screen());
        assert!(dark
            .iter()
            .filter(|c| c.mesh == MeshId::Blinker)
            .all(|c| c.material.as_ref().unwrap().emission == off));
    }

    #[test]
    fn lamp_emission_follows_switches() {
        let mut scene = test_scene();
        scene.vehicle.headlight_on = true;
        let commands =
            compose_with(&mut VehicleCommandFactory::new(), &scene, &test_camera(), &test_screen());
        let lamps: Vec<_> = commands.iter().filter(|c| c.mesh == MeshId::Lamp).collect();
        let white = lamps
            .iter()
            .filter(|c| c.material.as_ref().unwrap().emission == Vector3::from(FRONT_ON_COLOR))
            .count();
        let dark = lamps
            .iter()
            .filter(|c| c.material.as_ref().unwrap().emission == Vector3::zeros())
            .count();
        assert_eq!((white, dark), (2, 2));

        scene.vehicle.braking = true;
        let commands =
            compose_with(&mut VehicleCommandFactory::new(), &scene, &test_camera(), &test_screen());
        let red = commands
            .iter()
            .filter(|c| c.mesh == MeshId::Lamp)
            .filter(|c| c.material.as_ref().unwrap().emission == Vector3::from(REAR_ON_COLOR))
            .count();
        assert_eq!(red, 2);
    }
}
