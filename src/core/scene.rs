use super::constants::*;
use fnv::FnvHashSet;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Build-time knobs for the scene. `seed: None` draws from entropy.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub crystal_count: usize,
    pub particle_count: usize,
    pub seed: Option<u64>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            crystal_count: CRYSTAL_COUNT,
            particle_count: PARTICLE_COUNT,
            seed: None,
        }
    }
}

/// Convert a `0xRRGGBB` sRGB color to linear RGB.
pub fn srgb_hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}

#[derive(Clone, Copy, Debug)]
pub struct Crystal {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Crystal {
    pub fn model_matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rot, self.position)
    }
}

pub fn scatter_crystals(rng: &mut impl Rng, count: usize) -> Vec<Crystal> {
    (0..count)
        .map(|_| {
            let position = Vec3::new(
                (rng.gen::<f32>() - 0.5) * CRYSTAL_SPREAD,
                (rng.gen::<f32>() - 0.5) * CRYSTAL_SPREAD,
                -rng.gen::<f32>() * CRYSTAL_DEPTH,
            );
            let rotation = Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0);
            let s = rng.gen::<f32>() * CRYSTAL_SCALE_SPAN + CRYSTAL_SCALE_MIN;
            Crystal {
                position,
                rotation,
                scale: Vec3::new(s, s * CRYSTAL_STRETCH, s),
            }
        })
        .collect()
}

/// Particle positions packed with their bobbing phase in `w`.
pub fn scatter_particles(rng: &mut impl Rng, count: usize) -> Vec<[f32; 4]> {
    (0..count)
        .map(|_| {
            [
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD + PARTICLE_Y_OFFSET,
                PARTICLE_NEAR_Z - rng.gen::<f32>() * PARTICLE_DEPTH,
                rng.gen::<f32>() * TAU,
            ]
        })
        .collect()
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Unit octahedron, flat shaded (one normal per face).
pub fn octahedron() -> Vec<MeshVertex> {
    const CORNERS: [[f32; 3]; 6] = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    const FACES: [[usize; 3]; 8] = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    let mut out = Vec::with_capacity(FACES.len() * 3);
    for face in FACES {
        let centroid = face
            .iter()
            .fold(Vec3::ZERO, |acc, &i| acc + Vec3::from(CORNERS[i]));
        let normal = centroid.normalize().to_array();
        for i in face {
            out.push(MeshVertex {
                position: CORNERS[i],
                normal,
            });
        }
    }
    out
}

/// Line-list indices covering every unique triangle edge once.
pub fn wireframe_edges(triangles: &[u32]) -> Vec<u32> {
    let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
    let mut lines = Vec::with_capacity(triangles.len() * 2);
    for tri in triangles.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = (a.min(b), a.max(b));
            if seen.insert(key) {
                lines.push(a);
                lines.push(b);
            }
        }
    }
    lines
}

/// Wireframe geometry: vertex positions, their uvs and line indices.
#[derive(Clone, Debug, Default)]
pub struct WireMesh {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub lines: Vec<u32>,
}

/// Segmented plane in the XY plane, rows laid out from the top edge.
pub fn plane(width: f32, height: f32, seg_x: u32, seg_y: u32) -> WireMesh {
    let cols = seg_x + 1;
    let rows = seg_y + 1;
    let seg_w = width / seg_x as f32;
    let seg_h = height / seg_y as f32;
    let mut positions = Vec::with_capacity((cols * rows) as usize);
    let mut uvs = Vec::with_capacity((cols * rows) as usize);
    for iy in 0..rows {
        let y = iy as f32 * seg_h - height / 2.0;
        for ix in 0..cols {
            let x = ix as f32 * seg_w - width / 2.0;
            positions.push([x, -y, 0.0]);
            uvs.push([ix as f32 / seg_x as f32, 1.0 - iy as f32 / seg_y as f32]);
        }
    }
    let mut triangles = Vec::with_capacity((seg_x * seg_y * 6) as usize);
    for iy in 0..seg_y {
        for ix in 0..seg_x {
            let a = ix + cols * iy;
            let b = ix + cols * (iy + 1);
            let c = (ix + 1) + cols * (iy + 1);
            let d = (ix + 1) + cols * iy;
            triangles.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    WireMesh {
        positions,
        uvs,
        lines: wireframe_edges(&triangles),
    }
}

pub fn torus(radius: f32, tube: f32, radial: u32, tubular: u32) -> WireMesh {
    let mut positions = Vec::with_capacity(((radial + 1) * (tubular + 1)) as usize);
    let mut uvs = Vec::with_capacity(positions.capacity());
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let ring = radius + tube * v.cos();
            positions.push([ring * u.cos(), ring * u.sin(), tube * v.sin()]);
            uvs.push([i as f32 / tubular as f32, j as f32 / radial as f32]);
        }
    }
    let stride = tubular + 1;
    let mut triangles = Vec::with_capacity((radial * tubular * 6) as usize);
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            triangles.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    WireMesh {
        positions,
        uvs,
        lines: wireframe_edges(&triangles),
    }
}

/// Height of the ocean surface at texture coordinate `(u, v)` and time `t`.
#[inline]
pub fn wave_height(u: f32, v: f32, t: f32) -> f32 {
    (u * OCEAN_WAVE_FREQ + t).sin() * OCEAN_WAVE_AMPLITUDE
        + (v * OCEAN_WAVE_FREQ + t * OCEAN_WAVE_V_SPEED).cos() * OCEAN_WAVE_AMPLITUDE
}

/// The animated ocean plane. Only the local z of each vertex changes.
#[derive(Clone, Debug)]
pub struct Ocean {
    pub mesh: WireMesh,
}

impl Ocean {
    pub fn new() -> Self {
        Self {
            mesh: plane(OCEAN_SIZE, OCEAN_SIZE, OCEAN_SEGMENTS, OCEAN_SEGMENTS),
        }
    }

    /// Recompute every vertex height for time `t`.
    pub fn displace(&mut self, t: f32) {
        for (pos, uv) in self.mesh.positions.iter_mut().zip(&self.mesh.uvs) {
            pos[2] = wave_height(uv[0], uv[1], t);
        }
    }

    pub fn model_matrix() -> Mat4 {
        Mat4::from_translation(OCEAN_POSITION) * Mat4::from_rotation_x(-FRAC_PI_2)
    }
}

impl Default for Ocean {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Lighting {
    pub ambient: [f32; 3],
    pub point_color: [f32; 3],
    pub point_range: f32,
    pub point_decay: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        let scale = |c: [f32; 3], k: f32| [c[0] * k, c[1] * k, c[2] * k];
        Self {
            ambient: scale(srgb_hex_to_linear(AMBIENT_HEX), AMBIENT_INTENSITY),
            point_color: scale(srgb_hex_to_linear(POINT_LIGHT_HEX), POINT_LIGHT_INTENSITY),
            point_range: POINT_LIGHT_RANGE,
            point_decay: POINT_LIGHT_DECAY,
        }
    }
}

/// Everything built once at startup and handed to the renderer.
pub struct SceneAssets {
    pub crystals: Vec<Crystal>,
    pub crystal_mesh: Vec<MeshVertex>,
    pub particles: Vec<[f32; 4]>,
    pub ocean: Ocean,
    pub torus: WireMesh,
    pub lighting: Lighting,
}

impl SceneAssets {
    pub fn build(params: &SceneParams) -> Self {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let crystals = scatter_crystals(&mut rng, params.crystal_count);
        let particles = scatter_particles(&mut rng, params.particle_count);
        Self {
            crystals,
            crystal_mesh: octahedron(),
            particles,
            ocean: Ocean::new(),
            torus: torus(
                TORUS_RADIUS,
                TORUS_TUBE,
                TORUS_RADIAL_SEGMENTS,
                TORUS_TUBULAR_SEGMENTS,
            ),
            lighting: Lighting::default(),
        }
    }
}
