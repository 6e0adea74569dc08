use celride_render::core::{Camera, Scene, Screen, TimeOfDay};
use celride_render::{AppBuilder, AppBuilderSceneExt};

const STEP: f32 = 1.0 / 60.0;
const FRAMES: u32 = 600;

fn main() {
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    let mut scene = Scene::new(42);
    let camera = Camera::from_origin().move_at(0.0, 2.0, 12.0).rotate(-0.1, 0.0);
    let screen = Screen::new(1280, 720);

    let mut app = AppBuilder::new().then_main_scene().build();

    scene.vehicle.speed = 6.0;
    scene.vehicle.headlight_on = true;
    log::info!("starting a {} second scripted drive", FRAMES as f32 * STEP);

    for frame in 0..FRAMES {
        match frame {
            120 => {
                scene.vehicle.left_blinker = true;
                scene.vehicle.steering_angle = 15.0;
            }
            300 => {
                scene.vehicle.left_blinker = false;
                scene.vehicle.steering_angle = 0.0;
                scene.set_time_of_day(TimeOfDay::Night);
                log::info!("night falls");
            }
            480 => scene.vehicle.braking = true,
            _ => {}
        }

        scene.update(STEP);
        let composed = app.compose_frame(&scene, &camera, &screen);

        if frame % 60 == 0 {
            log::info!(
                "t={:.1}s position=({:.2}, {:.2}, {:.2}) yaw={:.2} speed={:.2} commands={} spots={}",
                frame as f32 * STEP,
                scene.vehicle.position.x,
                scene.vehicle.position.y,
                scene.vehicle.position.z,
                scene.vehicle.yaw,
                scene.vehicle.speed,
                composed.commands.len(),
                composed.lights.spot_count,
            );
        }
    }

    log::info!("drive complete, final speed {:.2}", scene.vehicle.speed);
}
