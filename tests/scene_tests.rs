// Host-side tests for scene construction and the ocean surface.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::constants::*;
use crate::core::scene::*;
use glam::Vec3;
use std::collections::HashSet;

fn seeded(seed: u64) -> SceneAssets {
    SceneAssets::build(&SceneParams {
        seed: Some(seed),
        ..SceneParams::default()
    })
}

#[test]
fn default_counts() {
    let assets = seeded(7);
    assert_eq!(assets.crystals.len(), 100);
    assert_eq!(assets.particles.len(), 10_000);
    assert_eq!(assets.crystal_mesh.len(), 24);
}

#[test]
fn crystals_stay_inside_their_volume() {
    for c in seeded(11).crystals {
        assert!(c.position.x >= -20.0 && c.position.x < 20.0);
        assert!(c.position.y >= -20.0 && c.position.y < 20.0);
        assert!(c.position.z <= 0.0 && c.position.z > -40.0);
        assert!(c.scale.x >= 0.5 && c.scale.x < 2.5);
        assert!((c.scale.y - c.scale.x * 3.0).abs() < 1e-5);
        assert_eq!(c.scale.x, c.scale.z);
    }
}

#[test]
fn particles_stay_inside_their_volume() {
    for p in seeded(12).particles {
        assert!(p[0] >= -50.0 && p[0] < 50.0);
        assert!(p[1] >= -70.0 && p[1] < 30.0);
        assert!(p[2] <= -30.0 && p[2] > -130.0);
    }
}

#[test]
fn same_seed_same_scene() {
    let a = seeded(42);
    let b = seeded(42);
    let c = seeded(43);
    let pos = |s: &SceneAssets| s.crystals.iter().map(|c| c.position).collect::<Vec<Vec3>>();
    assert_eq!(pos(&a), pos(&b));
    assert_eq!(a.particles, b.particles);
    assert_ne!(pos(&a), pos(&c));
}

#[test]
fn custom_counts_are_honoured() {
    let assets = SceneAssets::build(&SceneParams {
        crystal_count: 3,
        particle_count: 0,
        seed: Some(1),
    });
    assert_eq!(assets.crystals.len(), 3);
    assert!(assets.particles.is_empty());
}

#[test]
fn plane_edges_follow_the_grid_formula() {
    for n in [1u32, 2, 5, 100] {
        let mesh = plane(200.0, 200.0, n, n);
        let n = n as usize;
        assert_eq!(mesh.positions.len(), (n + 1) * (n + 1));
        assert_eq!(mesh.lines.len() / 2, 3 * n * n + 2 * n);
    }
}

#[test]
fn wireframe_edges_are_unique() {
    let mesh = torus(10.0, 0.5, 16, 100);
    let mut seen = HashSet::new();
    for pair in mesh.lines.chunks_exact(2) {
        let key = (pair[0].min(pair[1]), pair[0].max(pair[1]));
        assert!(seen.insert(key), "duplicate edge {key:?}");
    }
    assert_eq!(mesh.positions.len(), 17 * 101);
    assert_eq!(seen.len(), 17 * 100 + 101 * 16 + 16 * 100);
}

#[test]
fn shared_triangle_edge_is_emitted_once() {
    let lines = wireframe_edges(&[0, 1, 2, 2, 1, 3]);
    assert_eq!(lines.len() / 2, 5);
}

#[test]
fn torus_vertices_lie_on_the_tube() {
    let mesh = torus(10.0, 0.5, 16, 100);
    for p in &mesh.positions {
        let ring = (p[0] * p[0] + p[1] * p[1]).sqrt();
        let d = ((ring - 10.0).powi(2) + p[2] * p[2]).sqrt();
        assert!((d - 0.5).abs() < 1e-3);
    }
}

#[test]
fn wave_height_formula() {
    assert!((wave_height(0.0, 0.0, 0.0) - 2.0).abs() < 1e-6);
    let (u, v, t) = (0.3_f32, 0.7_f32, 1.25_f32);
    let expected = (10.0 * u + t).sin() * 2.0 + (10.0 * v + 0.8 * t).cos() * 2.0;
    assert!((wave_height(u, v, t) - expected).abs() < 1e-5);
}

#[test]
fn ocean_displacement_only_moves_height() {
    let mut ocean = Ocean::new();
    let before = ocean.mesh.positions.clone();
    ocean.displace(2.5);
    for ((a, b), uv) in before.iter().zip(&ocean.mesh.positions).zip(&ocean.mesh.uvs) {
        assert_eq!(a[0], b[0]);
        assert_eq!(a[1], b[1]);
        assert_eq!(b[2], wave_height(uv[0], uv[1], 2.5));
    }
}

#[test]
fn ocean_lies_flat_below_the_scene() {
    let m = Ocean::model_matrix();
    let origin = m.transform_point3(Vec3::ZERO);
    assert!((origin - OCEAN_POSITION).length() < 1e-5);
    // Local z (wave height) becomes world up
    let up = m.transform_vector3(Vec3::Z);
    assert!((up - Vec3::Y).length() < 1e-5);
}

#[test]
fn octahedron_faces_point_outward() {
    for tri in octahedron().chunks_exact(3) {
        let n = Vec3::from(tri[0].normal);
        assert!((n.length() - 1.0).abs() < 1e-5);
        let centroid = tri
            .iter()
            .fold(Vec3::ZERO, |acc, v| acc + Vec3::from(v.position));
        assert!(n.dot(centroid) > 0.0);
    }
}

#[test]
fn srgb_conversion_endpoints() {
    for c in srgb_hex_to_linear(0xffffff) {
        assert!((c - 1.0).abs() < 1e-6);
    }
    assert_eq!(srgb_hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    let pink = srgb_hex_to_linear(0xff80b3);
    assert!((pink[0] - 1.0).abs() < 1e-6);
    assert!(pink[1] > 0.2 && pink[1] < 0.23);
}

#[test]
fn lighting_premultiplies_intensity() {
    let l = Lighting::default();
    for c in l.ambient {
        assert!((c - 0.5).abs() < 1e-6);
    }
    assert!((l.point_color[0] - 5.0).abs() < 1e-5);
    assert_eq!(l.point_range, 50.0);
}
