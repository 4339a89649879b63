use super::helpers::{self, PipelineSpec, UniformSlot};
use super::ObjectUniforms;
use crate::core::scene::{Crystal, MeshVertex};

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 4] =
    wgpu::vertex_attr_array![2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4];

/// Instanced octahedra sharing one material; the group transform and the
/// emissive flash live in `object`.
pub(crate) struct CrystalResources {
    pipeline: wgpu::RenderPipeline,
    vertices: wgpu::Buffer,
    vertex_count: u32,
    instances: wgpu::Buffer,
    instance_count: u32,
    pub(crate) object: UniformSlot,
}

pub(crate) fn create_crystal_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    object_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    mesh: &[MeshVertex],
    crystals: &[Crystal],
) -> CrystalResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("crystals_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::CRYSTALS_WGSL.into()),
    });
    let buffers = [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[[f32; 4]; 4]>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ];
    let pipeline = helpers::make_pipeline(
        device,
        layout,
        color_format,
        PipelineSpec {
            label: "crystals_pipeline",
            shader: &shader,
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth_write: true,
        },
    );
    let matrices: Vec<[[f32; 4]; 4]> = crystals
        .iter()
        .map(|c| c.model_matrix().to_cols_array_2d())
        .collect();
    CrystalResources {
        pipeline,
        vertices: helpers::vertex_buffer(
            device,
            "crystal_vertices",
            mesh,
            wgpu::BufferUsages::empty(),
        ),
        vertex_count: mesh.len() as u32,
        instances: helpers::vertex_buffer(
            device,
            "crystal_instances",
            &matrices,
            wgpu::BufferUsages::empty(),
        ),
        instance_count: matrices.len() as u32,
        object: UniformSlot::new(
            device,
            object_bgl,
            "crystal_object",
            &ObjectUniforms::default(),
        ),
    }
}

impl CrystalResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(1, &self.object.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertices.slice(..));
        rpass.set_vertex_buffer(1, self.instances.slice(..));
        rpass.draw(0..self.vertex_count, 0..self.instance_count);
    }
}
