use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use lumen_engine::render::{DepthTarget, RenderCtx, RenderTarget, load_color_attachment};
use lumen_mesh::{Matrices, Mesh, MeshVertex, look_at, perspective};

pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 2.0, 5.0);
pub const CAMERA_DIRECTION: Vec3 = Vec3::new(0.0, -0.5, -1.0);

pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_2;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 10.0;

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // normal
    ];

    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

/// Draws one mesh with depth testing.
///
/// The mesh is kept on the CPU until the first frame uploads it. The
/// projection follows the drawable size; it is rebuilt together with the depth
/// buffer.
pub struct ModelRenderer {
    mesh: Mesh,
    view: Mat4,
    projection: Mat4,
    depth: DepthTarget,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    matrices_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    ibo: Option<wgpu::Buffer>,
    index_count: u32,
}

impl ModelRenderer {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            view: look_at(CAMERA_DIRECTION, CAMERA_EYE),
            projection: Mat4::IDENTITY,
            depth: DepthTarget::new(),
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            matrices_ubo: None,
            vbo: None,
            ibo: None,
            index_count: 0,
        }
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, model: Mat4) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.ensure_mesh_buffers(ctx);

        if self.depth.ensure(ctx.device, ctx.size) {
            self.projection = projection_for(ctx.aspect_ratio());
        }

        let Some(ubo) = self.matrices_ubo.as_ref() else { return };
        let matrices = Matrices::new(self.projection, self.view, model);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&matrices));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("lumen model pass"),
            color_attachments: &[Some(load_color_attachment(target.color_view))],
            depth_stencil_attachment: self.depth.attachment(),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lumen model shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/model.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("lumen model bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<Matrices>() as u64,
                            ),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lumen model pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("lumen model pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(DepthTarget::depth_stencil_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("model pipeline created for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.matrices_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.matrices_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let matrices_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lumen model matrices ubo"),
            size: std::mem::size_of::<Matrices>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lumen model bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: matrices_ubo.as_entire_binding(),
            }],
        });

        self.matrices_ubo = Some(matrices_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_mesh_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.vbo.is_some() && self.ibo.is_some() {
            return;
        }

        self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lumen model vbo"),
            contents: bytemuck::cast_slice(&self.mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lumen model ibo"),
            contents: bytemuck::cast_slice(&self.mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        }));

        self.index_count = self.mesh.indices.len() as u32;
        log::debug!(
            "model buffers uploaded: {} vertices, {} indices",
            self.mesh.vertices.len(),
            self.index_count
        );
    }
}

/// Projection for a drawable with the given width / height ratio.
pub fn projection_for(aspect: f32) -> Mat4 {
    perspective(FOV_Y, aspect, Z_NEAR, Z_FAR)
}

#[cfg(test)]
mod tests {
    use glam::Vec4;
    use lumen_engine::render::aspect_ratio;
    use winit::dpi::PhysicalSize;

    use super::*;

    fn clip(model: Mat4, position: Vec3, size: PhysicalSize<u32>) -> Vec4 {
        let view = look_at(CAMERA_DIRECTION, CAMERA_EYE);
        let m = Matrices::new(projection_for(aspect_ratio(size)), view, model);
        m.model_view_projection * position.extend(1.0)
    }

    #[test]
    fn vertex_layout_matches_mesh_vertex() {
        let layout = vertex_layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }

    #[test]
    fn model_origin_lands_inside_the_view_volume() {
        let model = lumen_mesh::Spin::new(0.5).model_matrix();
        let c = clip(model, Vec3::ZERO, PhysicalSize::new(800, 600));
        let ndc = c.truncate() / c.w;
        assert!(c.w > 0.0);
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn projection_tracks_the_aspect_ratio() {
        let wide = projection_for(aspect_ratio(PhysicalSize::new(1600, 800)));
        let square = projection_for(aspect_ratio(PhysicalSize::new(800, 800)));
        // x scale is f / aspect, y scale is f.
        assert!((wide.x_axis.x * 2.0 - square.x_axis.x).abs() < 1e-6);
        assert_eq!(wide.y_axis.y, square.y_axis.y);
    }

    #[test]
    fn zero_sized_drawable_does_not_produce_nan() {
        let p = projection_for(aspect_ratio(PhysicalSize::new(0, 0)));
        assert!(!p.is_nan());
    }
}
