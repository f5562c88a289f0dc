use crate::geometry::uv_sphere;
use crate::palette::Rgb;
use crate::scene::NetworkScene;
use thiserror::Error;
use wgpu::util::DeviceExt;

mod pipelines;
use pipelines::{make_pipeline, PipelineSpec, LINE_BUFFERS, MARKER_BUFFERS};

#[derive(Debug, Error)]
pub enum GpuError {
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("request_device error: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    points_model: [[f32; 4]; 4],
    lines_model: [[f32; 4]; 4],
    point_color: [f32; 4],
    line_color: [f32; 4],
}

/// GPU mirror of the line batch currently held by the scene.
struct LineBuffer {
    buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
    generation: u64,
}

pub struct SceneRenderer<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    srgb_surface: bool,

    marker_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    // Markers: one sphere mesh drawn once per point
    marker_vb: wgpu::Buffer,
    marker_ib: wgpu::Buffer,
    marker_index_count: u32,
    instance_vb: wgpu::Buffer,
    instance_count: u32,

    lines: LineBuffer,

    width: u32,
    height: u32,
}

/// Adapter, device and queue negotiated for one surface.
pub struct GpuDevice {
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

/// WebGL2 floor, raised to the adapter's texture size so large canvases fit.
fn device_limits(adapter: &wgpu::Limits) -> wgpu::Limits {
    wgpu::Limits::downlevel_webgl2_defaults().using_resolution(adapter.clone())
}

impl GpuDevice {
    pub async fn request(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<Self, GpuError> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: device_limits(&adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;
        Ok(Self {
            adapter,
            device,
            queue,
        })
    }
}

impl<'a> SceneRenderer<'a> {
    /// Configure `surface` and upload the scene's static geometry. Sized to
    /// the scene's current viewport.
    pub fn new(gpu: GpuDevice, surface: wgpu::Surface<'a>, scene: &NetworkScene) -> Self {
        let GpuDevice {
            adapter,
            device,
            queue,
        } = gpu;
        let viewport = scene.viewport();
        let (width, height) = (viewport.width, viewport.height);
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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {:?} {}x{}", format, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let marker_pipeline = make_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            PipelineSpec {
                label: "marker_pipeline",
                vs_entry: "vs_marker",
                fs_entry: "fs_marker",
                buffers: &MARKER_BUFFERS,
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: None,
            },
        );
        let line_pipeline = make_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            PipelineSpec {
                label: "line_pipeline",
                vs_entry: "vs_line",
                fs_entry: "fs_line",
                buffers: &LINE_BUFFERS,
                topology: wgpu::PrimitiveTopology::LineList,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            },
        );

        let cfg = scene.config();
        let sphere = uv_sphere(cfg.marker_radius, cfg.marker_segments.0, cfg.marker_segments.1);
        let marker_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("marker_vb"),
            contents: bytemuck::cast_slice(&sphere.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let marker_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("marker_ib"),
            contents: bytemuck::cast_slice(&sphere.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        // Positions never change, so the instance buffer is written once.
        let offsets: Vec<[f32; 3]> = scene
            .field()
            .points()
            .iter()
            .map(|p| p.to_array())
            .collect();
        let instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("instance_vb"),
            contents: bytemuck::cast_slice(&offsets),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let mut renderer = Self {
            surface,
            device,
            queue,
            config,
            srgb_surface: format.is_srgb(),
            marker_pipeline,
            line_pipeline,
            uniform_buffer,
            bind_group,
            marker_vb,
            marker_ib,
            marker_index_count: sphere.indices.len() as u32,
            instance_vb,
            instance_count: offsets.len() as u32,
            lines: LineBuffer {
                buffer: None,
                vertex_count: 0,
                generation: 0,
            },
            width,
            height,
        };
        renderer.sync_lines(scene);
        renderer
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure with the current size after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload the scene's line batch if it was rebuilt since the last upload.
    /// The previous vertex buffer is dropped first.
    fn sync_lines(&mut self, scene: &NetworkScene) {
        let Some(batch) = scene.lines() else {
            self.lines.buffer = None;
            self.lines.vertex_count = 0;
            return;
        };
        if batch.generation() == self.lines.generation {
            return;
        }
        if let Some(old) = self.lines.buffer.take() {
            old.destroy();
        }
        let vertices = batch.vertices();
        self.lines.vertex_count = vertices.len() as u32;
        self.lines.generation = batch.generation();
        if vertices.is_empty() {
            return;
        }
        self.lines.buffer = Some(self.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("line_vb"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
    }

    fn surface_color(&self, rgb: Rgb, alpha: f32) -> [f32; 4] {
        rgb.to_surface_rgba(alpha, self.srgb_surface)
    }

    pub fn render(&mut self, scene: &NetworkScene) -> Result<(), wgpu::SurfaceError> {
        self.sync_lines(scene);

        let palette = scene.palette();
        let line_color = scene
            .lines()
            .map(|l| self.surface_color(l.color(), l.opacity()))
            .unwrap_or([0.0; 4]);
        let uniforms = SceneUniforms {
            view_proj: scene.camera().view_proj().to_cols_array_2d(),
            points_model: scene.points_model().to_cols_array_2d(),
            lines_model: scene.lines_model().to_cols_array_2d(),
            point_color: self.surface_color(scene.point_color(), 1.0),
            line_color,
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let bg = self.surface_color(palette.background, 1.0);
        let clear = wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: 1.0,
        };

        let frame = self.surface.get_current_texture()?;
        let view = frame
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
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            if let Some(lines) = &self.lines.buffer {
                rpass.set_pipeline(&self.line_pipeline);
                rpass.set_vertex_buffer(0, lines.slice(..));
                rpass.draw(0..self.lines.vertex_count, 0..1);
            }
            rpass.set_pipeline(&self.marker_pipeline);
            rpass.set_vertex_buffer(0, self.marker_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.set_index_buffer(self.marker_ib.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..self.marker_index_count, 0, 0..self.instance_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_limits_fit_a_webgl2_adapter() {
        let webgl2 = wgpu::Limits::downlevel_webgl2_defaults();
        assert!(device_limits(&webgl2).check_limits(&webgl2));
    }

    #[test]
    fn requested_limits_follow_adapter_resolution() {
        let adapter = wgpu::Limits {
            max_texture_dimension_2d: 16384,
            ..wgpu::Limits::default()
        };
        let limits = device_limits(&adapter);
        assert_eq!(limits.max_texture_dimension_2d, 16384);
        assert!(limits.check_limits(&adapter));
    }
}
