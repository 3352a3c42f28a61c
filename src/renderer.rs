use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use glam::{EulerRot, Mat4, Vec3};
use log::info;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::camera::Camera;
use crate::geometry::{MeshData, Vertex};
use crate::scene::{SceneAssembly, Spiral};
use crate::types::{LineUniform, Material, ObjectUniform};

/// Renderer output resolution never exceeds 2x the logical size,
/// whatever the monitor's density
const MAX_PIXEL_RATIO: f64 = 2.0;

/// World-space width of the spiral ribbon
const LINE_WIDTH: f32 = 1.0;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Spiral ribbon vertex: two per polyline point, pushed apart in the
/// vertex stage by `side * width / 2`
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct LineVertex {
    position: [f32; 3],
    direction: [f32; 3],
    side: f32,
    color: [f32; 3],
}

/// Particle quad params
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct ParticleParams {
    color: [f32; 3],
    size: f32,
}

struct MeshDraw {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Rasterizes the assembled scene to a window surface
///
/// Geometry is uploaded once at construction; per-frame work is limited to
/// uniform writes and draw calls.
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    device: wgpu::Device,
    queue: wgpu::Queue,
    depth_view: wgpu::TextureView,

    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,

    mesh_pipeline: wgpu::RenderPipeline,
    meshes: Vec<MeshDraw>,

    particle_pipeline: wgpu::RenderPipeline,
    particle_corner_buffer: wgpu::Buffer,
    particle_instance_buffer: wgpu::Buffer,
    particle_count: u32,
    particle_bind_group: wgpu::BindGroup,

    line_pipeline: wgpu::RenderPipeline,
    line_vertex_buffer: wgpu::Buffer,
    line_vertex_count: u32,
    line_uniform_buffer: wgpu::Buffer,
    line_bind_group: wgpu::BindGroup,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, scene: &SceneAssembly) -> Result<Self> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let (width, height) = capped_render_size(size, scale_factor);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("Failed to find appropriate adapter: {e:?}"))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Backdrop Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| anyhow!("Failed to create device: {e:?}"))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let depth_view = create_depth_texture(&device, width, height);

        info!(
            "renderer: {}x{} {:?} on {}",
            width,
            height,
            surface_format,
            adapter.get_info().name
        );

        // One camera uniform shared by every pipeline
        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Uniform"),
            size: std::mem::size_of::<crate::types::CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_layout = uniform_bind_group_layout(&device, "Camera Bind Group Layout");
        let object_layout = uniform_bind_group_layout(&device, "Object Bind Group Layout");

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        // Shaped meshes
        let mesh_pipeline = create_mesh_pipeline(
            &device,
            surface_format,
            &camera_layout,
            &object_layout,
        );

        let meshes = scene
            .shapes
            .iter()
            .map(|shape| {
                let mesh = MeshData::from_kind(shape.geometry);
                let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Shape Vertices"),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Shape Indices"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("Shape Uniform"),
                    size: std::mem::size_of::<ObjectUniform>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Shape Bind Group"),
                    layout: &object_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });

                MeshDraw {
                    vertex_buffer,
                    index_buffer,
                    index_count: mesh.indices.len() as u32,
                    uniform_buffer,
                    bind_group,
                }
            })
            .collect();

        // Particle cloud: one quad instanced per point
        let particle_pipeline = create_particle_pipeline(
            &device,
            surface_format,
            &camera_layout,
            &object_layout,
        );

        let corners: [[f32; 2]; 4] = [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]];
        let particle_corner_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Particle Corners"),
            contents: bytemuck::cast_slice(&corners),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_data: Vec<[f32; 3]> = scene
            .particles
            .positions
            .iter()
            .map(|p| p.to_array())
            .collect();
        let particle_instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Particle Instances"),
            contents: bytemuck::cast_slice(&instance_data),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let particle_params_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Particle Params"),
            contents: bytemuck::cast_slice(&[ParticleParams {
                color: scene.particles.color,
                size: scene.particles.size,
            }]),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let particle_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Particle Bind Group"),
            layout: &object_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: particle_params_buffer.as_entire_binding(),
            }],
        });

        // Spiral ribbon
        let line_pipeline = create_line_pipeline(
            &device,
            surface_format,
            &camera_layout,
            &object_layout,
        );

        let line_vertices = build_ribbon_vertices(&scene.spiral);
        let line_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Spiral Vertices"),
            contents: bytemuck::cast_slice(&line_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let line_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Spiral Uniform"),
            size: std::mem::size_of::<LineUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let line_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Spiral Bind Group"),
            layout: &object_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: line_uniform_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            surface,
            surface_config,
            device,
            queue,
            depth_view,
            camera_buffer,
            camera_bind_group,
            mesh_pipeline,
            meshes,
            particle_pipeline,
            particle_corner_buffer,
            particle_instance_buffer,
            particle_count: instance_data.len() as u32,
            particle_bind_group,
            line_pipeline,
            line_vertex_buffer,
            line_vertex_count: line_vertices.len() as u32,
            line_uniform_buffer,
            line_bind_group,
        })
    }

    /// Reconfigure the surface for a new window size, with the render
    /// resolution capped at 2x logical density
    pub fn resize(&mut self, size: PhysicalSize<u32>, scale_factor: f64) {
        let (width, height) = capped_render_size(size, scale_factor);
        if width == 0 || height == 0 {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        self.depth_view = create_depth_texture(&self.device, width, height);
    }

    /// Draw one frame of the scene from the camera
    pub fn render(&mut self, scene: &SceneAssembly, camera: &Camera) -> Result<()> {
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&camera.to_uniform()),
        );

        for (shape, draw) in scene.shapes.iter().zip(&self.meshes) {
            let model = Mat4::from_translation(shape.position)
                * Mat4::from_euler(
                    EulerRot::XYZ,
                    shape.rotation.x,
                    shape.rotation.y,
                    shape.rotation.z,
                );
            let uniform = ObjectUniform {
                model: model.to_cols_array_2d(),
                color: crate::scene::OBJECT_COLOR,
                time: shape.material.time().unwrap_or(0.0),
                material: material_id(shape.material),
                _pad: [0; 3],
            };
            self.queue
                .write_buffer(&draw.uniform_buffer, 0, bytemuck::bytes_of(&uniform));
        }

        let spiral_model = Mat4::from_translation(scene.spiral.position)
            * Mat4::from_rotation_y(scene.spiral.rotation_y)
            * Mat4::from_scale(scene.spiral.scale);
        self.queue.write_buffer(
            &self.line_uniform_buffer,
            0,
            bytemuck::bytes_of(&LineUniform {
                model: spiral_model.to_cols_array_2d(),
                width: LINE_WIDTH,
                _pad: [0.0; 3],
            }),
        );

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e) => return Err(anyhow!("Surface error: {e:?}")),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

            render_pass.set_pipeline(&self.mesh_pipeline);
            for draw in &self.meshes {
                render_pass.set_bind_group(1, &draw.bind_group, &[]);
                render_pass.set_vertex_buffer(0, draw.vertex_buffer.slice(..));
                render_pass.set_index_buffer(draw.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..draw.index_count, 0, 0..1);
            }

            render_pass.set_pipeline(&self.line_pipeline);
            render_pass.set_bind_group(1, &self.line_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.line_vertex_buffer.slice(..));
            render_pass.draw(0..self.line_vertex_count, 0..1);

            render_pass.set_pipeline(&self.particle_pipeline);
            render_pass.set_bind_group(1, &self.particle_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.particle_corner_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.particle_instance_buffer.slice(..));
            render_pass.draw(0..4, 0..self.particle_count);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();

        Ok(())
    }
}

fn material_id(material: Material) -> u32 {
    match material {
        Material::Toon => 0,
        Material::Hologram { .. } => 1,
        Material::TimeShader { .. } => 2,
    }
}

/// Physical render size with pixel density capped at MAX_PIXEL_RATIO
fn capped_render_size(size: PhysicalSize<u32>, scale_factor: f64) -> (u32, u32) {
    if scale_factor <= MAX_PIXEL_RATIO {
        return (size.width, size.height);
    }
    (
        (size.width as f64 * MAX_PIXEL_RATIO / scale_factor).round() as u32,
        (size.height as f64 * MAX_PIXEL_RATIO / scale_factor).round() as u32,
    )
}

/// Expand the spiral polyline into a triangle-strip ribbon: two vertices
/// per point carrying the local tangent for view-facing extrusion
fn build_ribbon_vertices(spiral: &Spiral) -> Vec<LineVertex> {
    let points = &spiral.points;
    let mut vertices = Vec::with_capacity(points.len() * 2);

    for i in 0..points.len() {
        let previous = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(points.len() - 1)];
        let direction = (next - previous).normalize_or(Vec3::Y);

        for side in [1.0f32, -1.0] {
            vertices.push(LineVertex {
                position: points[i].to_array(),
                direction: direction.to_array(),
                side,
                color: spiral.colors[i],
            });
        }
    }

    vertices
}

fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn uniform_bind_group_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

fn depth_stencil_state(depth_write_enabled: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

fn create_mesh_pipeline(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    camera_layout: &wgpu::BindGroupLayout,
    object_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Shapes Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shapes.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Mesh Pipeline Layout"),
        bind_group_layouts: &[camera_layout, object_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Mesh Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 0,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 12,
                        shader_location: 1,
                    },
                ],
            }],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(depth_stencil_state(true)),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_particle_pipeline(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    camera_layout: &wgpu::BindGroupLayout,
    object_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Particles Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("particles.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Particle Pipeline Layout"),
        bind_group_layouts: &[camera_layout, object_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Particle Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: 8,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 0,
                        shader_location: 0,
                    }],
                },
                wgpu::VertexBufferLayout {
                    array_stride: 12,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    }],
                },
            ],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleStrip,
            cull_mode: None,
            ..Default::default()
        },
        // Particles read depth but never write it, so draw order between
        // them stays irrelevant
        depth_stencil: Some(depth_stencil_state(false)),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_line_pipeline(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    camera_layout: &wgpu::BindGroupLayout,
    object_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Spiral Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("spiral.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Spiral Pipeline Layout"),
        bind_group_layouts: &[camera_layout, object_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Spiral Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 0,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 12,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 24,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 28,
                        shader_location: 3,
                    },
                ],
            }],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleStrip,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(depth_stencil_state(true)),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn test_capped_render_size_passes_low_density_through() {
        let size = PhysicalSize::new(1280, 720);
        assert_eq!(capped_render_size(size, 1.0), (1280, 720));
        assert_eq!(capped_render_size(size, 2.0), (1280, 720));
    }

    #[test]
    fn test_capped_render_size_limits_high_density() {
        // 3x display: physical 3840x2160 for logical 1280x720, capped to 2x
        let size = PhysicalSize::new(3840, 2160);
        assert_eq!(capped_render_size(size, 3.0), (2560, 1440));
    }

    #[test]
    fn test_ribbon_doubles_point_count() {
        let spiral = crate::scene::Spiral {
            points: vec![vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), vec3(1.0, 2.0, 0.0)],
            colors: vec![[1.0, 0.0, 0.0]; 3],
            distances: vec![0.0, 1.0, 1.0 + 2f32.sqrt()],
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation_y: 0.0,
        };

        let vertices = build_ribbon_vertices(&spiral);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].side, 1.0);
        assert_eq!(vertices[1].side, -1.0);
        assert_eq!(vertices[0].position, vertices[1].position);
    }

    #[test]
    fn test_ribbon_tangents_are_unit_length() {
        let spiral = crate::scene::Spiral {
            points: vec![vec3(0.0, 0.0, 0.0), vec3(0.0, 3.0, 0.0), vec3(4.0, 3.0, 0.0)],
            colors: vec![[0.0, 1.0, 0.0]; 3],
            distances: vec![0.0, 3.0, 7.0],
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation_y: 0.0,
        };

        for vertex in build_ribbon_vertices(&spiral) {
            let length = Vec3::from_array(vertex.direction).length();
            assert!((length - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_material_ids_are_stable() {
        assert_eq!(material_id(Material::Toon), 0);
        assert_eq!(material_id(Material::Hologram { time: 1.0 }), 1);
        assert_eq!(material_id(Material::TimeShader { time: 1.0 }), 2);
    }
}
