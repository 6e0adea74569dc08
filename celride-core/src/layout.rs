use std::f32::consts::{FRAC_PI_2, PI};

use nalgebra::{Matrix4, Point3, Rotation3, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{MeshId, TextureId};

pub const N_TREES: usize = 12;
pub const N_STREETLIGHTS: usize = 5;

const ROAD_START_X: f32 = -50.0;
const GROUND_LEVEL_Y: f32 = -0.15;
const MIN_STREET_CLEARANCE_Z: f32 = 2.5;
const LAMP_LOCAL_OFFSET: [f32; 3] = [-2.77, 5.2, 0.0];

/// Immutable after placement; reused as a pure transform every frame.
#[derive(Debug, Clone)]
pub struct StaticProp {
    pub mesh: MeshId,
    pub texture: TextureId,
    pub transform: Matrix4<f32>,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub props: Vec<StaticProp>,
    /// World position of each streetlight's lamp, for the light rig.
    pub lamp_positions: Vec<Point3<f32>>,
}

impl Layout {
    /// Seeded placement along the road: same seed, same layout.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut props = Vec::with_capacity(N_TREES + N_STREETLIGHTS);

        let mut x = ROAD_START_X;
        for _ in 0..N_TREES {
            x += rng.gen_range(5.0..11.0);
            let z = MIN_STREET_CLEARANCE_Z + rng.gen_range(1.5..3.5);
            let angle = rng.gen_range(0.0..2.0 * PI);
            let scale = rng.gen_range(0.8..1.2);
            let transform = Matrix4::new_translation(&Vector3::new(x, GROUND_LEVEL_Y, z))
                * Rotation3::from_axis_angle(&Vector3::y_axis(), angle).to_homogeneous()
                * Matrix4::new_scaling(scale);
            props.push(StaticProp { mesh: MeshId::Tree, texture: TextureId::Tree, transform });
        }

        let mut lamp_positions = Vec::with_capacity(N_STREETLIGHTS);
        let mut x = ROAD_START_X;
        for _ in 0..N_STREETLIGHTS {
            x += rng.gen_range(10.0..20.0);
            let z = -(MIN_STREET_CLEARANCE_Z + 0.5);
            let transform = Matrix4::new_translation(&Vector3::new(x, GROUND_LEVEL_Y, z))
                * Rotation3::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2).to_homogeneous();
            lamp_positions.push(transform.transform_point(&Point3::from(LAMP_LOCAL_OFFSET)));
            props.push(StaticProp {
                mesh: MeshId::Streetlight,
                texture: TextureId::Streetlight,
                transform,
            });
        }

        log::debug!("placed {} trees and {} streetlights along the road", N_TREES, N_STREETLIGHTS);

        Layout { props, lamp_positions }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn same_seed_reproduces_layout() {
        let a = Layout::generate(17);
        let b = Layout::generate(17);
        assert_eq!(a.props.len(), b.props.len());
        for (x, y) in a.props.iter().zip(b.props.iter()) {
            assert_eq!(x.mesh, y.mesh);
            assert_eq!(x.transform, y.transform);
        }
        assert_eq!(a.lamp_positions, b.lamp_positions);
    }

    #[test]
    fn seeds_vary_placement() {
        let a = Layout::generate(1);
        let b = Layout::generate(2);
        assert_ne!(a.props[0].transform, b.props[0].transform);
    }

    #[test]
    fn places_expected_prop_counts() {
        let layout = Layout::generate(5);
        let trees = layout.props.iter().filter(|p| p.mesh == MeshId::Tree).count();
        let poles = layout.props.iter().filter(|p| p.mesh == MeshId::Streetlight).count();
        assert_eq!(trees, N_TREES);
        assert_eq!(poles, N_STREETLIGHTS);
        assert_eq!(layout.lamp_positions.len(), N_STREETLIGHTS);
    }

    #[test]
    fn props_keep_street_clearance() {
        let layout = Layout::generate(11);
        for prop in &layout.props {
            let z = prop.transform[(2, 3)];
            match prop.mesh {
                MeshId::Tree => assert!(z >= 4.0 && z < 6.0),
                MeshId::Streetlight => assert_relative_eq!(z, -3.0),
                _ => unreachable!(),
            }
        }
        for lamp in &layout.lamp_positions {
            assert!(lamp.y > GROUND_LEVEL_Y);
        }
    }
}
