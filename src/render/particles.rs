use super::helpers::{self, PipelineSpec, UniformSlot};
use super::ObjectUniforms;

const POINT_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];

// Additive: src * src_alpha + dst
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

/// One instance per particle (`xyz` + phase), expanded to a quad in the
/// vertex shader since WebGPU points are fixed at one pixel.
pub(crate) struct ParticleResources {
    pipeline: wgpu::RenderPipeline,
    points: wgpu::Buffer,
    count: u32,
    pub(crate) object: UniformSlot,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    object_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    points: &[[f32; 4]],
    object: &ObjectUniforms,
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &POINT_ATTRS,
    }];
    let pipeline = helpers::make_pipeline(
        device,
        layout,
        color_format,
        PipelineSpec {
            label: "particles_pipeline",
            shader: &shader,
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
            blend: Some(ADDITIVE),
            depth_write: false,
        },
    );
    ParticleResources {
        pipeline,
        points: helpers::vertex_buffer(device, "particle_points", points, wgpu::BufferUsages::empty()),
        count: points.len() as u32,
        object: UniformSlot::new(device, object_bgl, "particle_object", object),
    }
}

impl ParticleResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(1, &self.object.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.points.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
