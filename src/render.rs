use crate::core::constants::*;
use crate::core::scene::{srgb_hex_to_linear, Lighting, Ocean, SceneAssets};
use glam::{Mat4, Vec3};
use web_sys as web;

mod crystals;
mod helpers;
mod lines;
mod particles;

use crystals::{create_crystal_resources, CrystalResources};
use helpers::UniformSlot;
use lines::{create_lines_pipeline, create_wire_resources, WireResources};
use particles::{create_particle_resources, ParticleResources};

// Transmissive crystals are approximated with plain alpha blending
const CRYSTAL_ALPHA: f32 = 1.0 - CRYSTAL_TRANSMISSION * 0.6;

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    fog: [f32; 4],
    ambient: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
    viewport: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
}

impl ObjectUniforms {
    fn new(model: Mat4, color: [f32; 3], alpha: f32, emissive: [f32; 3]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], alpha],
            emissive: [emissive[0], emissive[1], emissive[2], 0.0],
        }
    }
}

/// What the renderer needs from the session for one frame.
pub struct FrameView<'f> {
    pub view: Mat4,
    pub proj: Mat4,
    pub camera_pos: Vec3,
    pub time: f32,
    pub light_pos: Vec3,
    pub crystal_group: Mat4,
    pub crystal_emissive: [f32; 3],
    pub torus_model: Mat4,
    pub ocean_positions: &'f [[f32; 3]],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    scene: UniformSlot,
    lines_pipeline: wgpu::RenderPipeline,
    crystals: CrystalResources,
    particles: ParticleResources,
    ocean: WireResources,
    torus: WireResources,

    lighting: Lighting,
    crystal_color: [f32; 3],
    fog_color: [f32; 3],
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
    pixel_ratio: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        assets: &SceneAssets,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let scene_bgl = helpers::uniform_layout(
            &device,
            "scene_bgl",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );
        let object_bgl = helpers::uniform_layout(
            &device,
            "object_bgl",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let scene = UniformSlot::new(&device, &scene_bgl, "scene_uniforms", &SceneUniforms::default());

        let crystals = create_crystal_resources(
            &device,
            &layout,
            &object_bgl,
            format,
            &assets.crystal_mesh,
            &assets.crystals,
        );
        let particles = create_particle_resources(
            &device,
            &layout,
            &object_bgl,
            format,
            &assets.particles,
            &ObjectUniforms::new(
                Mat4::IDENTITY,
                srgb_hex_to_linear(PARTICLE_HEX),
                1.0,
                [0.0; 3],
            ),
        );

        let lines_pipeline = create_lines_pipeline(&device, &layout, format);
        let ambient = assets.lighting.ambient;
        let ocean_base = srgb_hex_to_linear(OCEAN_HEX);
        let ocean_lit = [
            ocean_base[0] * ambient[0] * (1.0 - OCEAN_METALNESS),
            ocean_base[1] * ambient[1] * (1.0 - OCEAN_METALNESS),
            ocean_base[2] * ambient[2] * (1.0 - OCEAN_METALNESS),
        ];
        let ocean = create_wire_resources(
            &device,
            &object_bgl,
            "ocean",
            &assets.ocean.mesh,
            true,
            &ObjectUniforms::new(
                Ocean::model_matrix(),
                ocean_lit,
                1.0,
                srgb_hex_to_linear(OCEAN_EMISSIVE_HEX),
            ),
        );
        let torus = create_wire_resources(
            &device,
            &object_bgl,
            "torus",
            &assets.torus,
            false,
            &ObjectUniforms::new(
                Mat4::from_translation(TORUS_POSITION),
                srgb_hex_to_linear(TORUS_HEX),
                1.0,
                [0.0; 3],
            ),
        );

        let bg = srgb_hex_to_linear(BACKGROUND_HEX);
        log::info!(
            "[gpu] {:?} {}x{} crystals={} particles={}",
            format,
            width,
            height,
            assets.crystals.len(),
            assets.particles.len()
        );
        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_tex,
            depth_view,
            scene,
            lines_pipeline,
            crystals,
            particles,
            ocean,
            torus,
            lighting: assets.lighting,
            crystal_color: srgb_hex_to_linear(CRYSTAL_HEX),
            fog_color: srgb_hex_to_linear(FOG_HEX),
            clear_color: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: 1.0,
            },
            width,
            height,
            pixel_ratio: 1.0,
        })
    }

    pub fn set_pixel_ratio(&mut self, pixel_ratio: f32) {
        self.pixel_ratio = pixel_ratio.max(0.1);
    }

    /// Reconfigure the surface for a new backing size. Same size is a no-op.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Re-apply the current configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        (self.depth_tex, self.depth_view) =
            helpers::create_depth_texture(&self.device, self.width, self.height);
    }

    fn write_uniforms(&self, frame: &FrameView<'_>) {
        let l = &self.lighting;
        let scene = SceneUniforms {
            view_proj: (frame.proj * frame.view).to_cols_array_2d(),
            view: frame.view.to_cols_array_2d(),
            proj: frame.proj.to_cols_array_2d(),
            camera_pos: frame.camera_pos.extend(frame.time).to_array(),
            fog: [
                self.fog_color[0],
                self.fog_color[1],
                self.fog_color[2],
                FOG_DENSITY,
            ],
            ambient: [l.ambient[0], l.ambient[1], l.ambient[2], 0.0],
            light_pos: frame.light_pos.extend(l.point_range).to_array(),
            light_color: [
                l.point_color[0],
                l.point_color[1],
                l.point_color[2],
                l.point_decay,
            ],
            viewport: [
                self.width as f32,
                self.height as f32,
                self.pixel_ratio,
                0.0,
            ],
        };
        self.scene.write(&self.queue, &scene);
        self.crystals.object.write(
            &self.queue,
            &ObjectUniforms::new(
                frame.crystal_group,
                self.crystal_color,
                CRYSTAL_ALPHA,
                frame.crystal_emissive,
            ),
        );
        self.torus.object.write(
            &self.queue,
            &ObjectUniforms::new(
                frame.torus_model,
                srgb_hex_to_linear(TORUS_HEX),
                1.0,
                [0.0; 3],
            ),
        );
        self.ocean.write_positions(&self.queue, frame.ocean_positions);
    }

    pub fn render(&mut self, frame: &FrameView<'_>) -> Result<(), wgpu::SurfaceError> {
        self.write_uniforms(frame);
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);

            // Opaque wireframes first, then the blended crystals and glow
            rpass.set_pipeline(&self.lines_pipeline);
            self.ocean.draw(&mut rpass);
            self.torus.draw(&mut rpass);
            self.crystals.draw(&mut rpass);
            self.particles.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
