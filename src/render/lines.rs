use super::helpers::{self, PipelineSpec, UniformSlot};
use super::ObjectUniforms;
use crate::core::scene::WireMesh;

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

pub(crate) fn create_lines_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("lines_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::LINES_WGSL.into()),
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }];
    helpers::make_pipeline(
        device,
        layout,
        color_format,
        PipelineSpec {
            label: "lines_pipeline",
            shader: &shader,
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::LineList,
            blend: None,
            depth_write: true,
        },
    )
}

/// GPU copy of a [`WireMesh`]. Positions can be rewritten every frame when
/// the mesh is created `dynamic`.
pub(crate) struct WireResources {
    positions: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
    pub(crate) object: UniformSlot,
}

pub(crate) fn create_wire_resources(
    device: &wgpu::Device,
    object_bgl: &wgpu::BindGroupLayout,
    label: &str,
    mesh: &WireMesh,
    dynamic: bool,
    object: &ObjectUniforms,
) -> WireResources {
    let usage = if dynamic {
        wgpu::BufferUsages::COPY_DST
    } else {
        wgpu::BufferUsages::empty()
    };
    WireResources {
        positions: helpers::vertex_buffer(device, label, &mesh.positions, usage),
        indices: helpers::index_buffer(device, label, &mesh.lines),
        index_count: mesh.lines.len() as u32,
        object: UniformSlot::new(device, object_bgl, label, object),
    }
}

impl WireResources {
    pub(crate) fn write_positions(&self, queue: &wgpu::Queue, positions: &[[f32; 3]]) {
        queue.write_buffer(&self.positions, 0, bytemuck::cast_slice(positions));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(1, &self.object.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.positions.slice(..));
        rpass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
