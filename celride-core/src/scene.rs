use crate::{layout::Layout, light::LightRig, Vehicle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Day,
    Night,
}

/// Everything the composer reads. Constructed once at scene init, mutated
/// only between frames by the host; composition never writes it.
pub struct Scene {
    pub vehicle: Vehicle,
    pub layout: Layout,
    pub lights: LightRig,
    pub time_of_day: TimeOfDay,
}

impl Scene {
    pub fn new(seed: u64) -> Self {
        let layout = Layout::generate(seed);
        let lights = LightRig::new(&layout.lamp_positions);
        Scene { vehicle: Vehicle::new(), layout, lights, time_of_day: TimeOfDay::Day }
    }

    pub fn set_time_of_day(&mut self, time_of_day: TimeOfDay) {
        self.time_of_day = time_of_day;
        self.lights.set_time_of_day(time_of_day);
    }

    pub fn update(&mut self, delta: f32) {
        self.vehicle.update(delta);
    }
}
