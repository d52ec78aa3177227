//! wgpu sprite pipeline setup

use wgpu::util::DeviceExt;

use super::scene::{DrawCmd, TextureKey, batch};
use super::text::LabelBitmap;
use super::vertex::SpriteVertex;
use crate::assets::{Assets, Sprite};
use crate::consts::CLEAR_RGB;
use crate::error::InitError;

/// A texture plus the bind group that samples it
struct GpuTexture {
    bind_group: wgpu::BindGroup,
    size: (u32, u32),
}

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    sprites: [Option<GpuTexture>; 4],
    label: Option<GpuTexture>,
    white: GpuTexture,
    clear: wgpu::Color,
    /// Viewport size in pixels
    pub size: (u32, u32),
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        assets: &Assets,
    ) -> Result<Self, InitError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("casteroids-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(adapter);
        log::debug!("Surface formats: {:?}", surface_caps.formats);

        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or(surface_caps.formats.first())
            .copied()
            .ok_or(InitError::UnsupportedSurface)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .ok_or(InitError::UnsupportedSurface)?;

        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprite_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sprite_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite_pipeline_layout"),
            bind_group_layouts: &[&texture_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sprite_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[SpriteVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
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
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        // Nearest filtering keeps sprite pixels crisp
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sprite_sampler"),
            ..Default::default()
        });

        let mut state = Self {
            white: upload_texture(
                &device,
                &queue,
                &texture_layout,
                &sampler,
                "white",
                (1, 1),
                &[255; 4],
            ),
            sprites: Default::default(),
            label: None,
            clear: clear_color(CLEAR_RGB, surface_format.is_srgb()),
            surface,
            device,
            queue,
            config,
            pipeline,
            texture_layout,
            sampler,
            size: (width, height),
        };

        for sprite in Sprite::ALL {
            if let Some(image) = assets.sprite(sprite) {
                state.sprites[sprite.index()] = Some(state.upload(
                    sprite.path(),
                    (image.width, image.height),
                    &image.rgba,
                ));
            }
        }

        Ok(state)
    }

    fn upload(&self, label: &str, size: (u32, u32), rgba: &[u8]) -> GpuTexture {
        upload_texture(
            &self.device,
            &self.queue,
            &self.texture_layout,
            &self.sampler,
            label,
            size,
            rgba,
        )
    }

    /// Replace the score label texture
    pub fn set_label(&mut self, bitmap: &LabelBitmap) {
        self.label = Some(self.upload("score_label", (bitmap.width, bitmap.height), &bitmap.rgba));
    }

    /// Size of the current label texture, if any
    pub fn label_size(&self) -> Option<(u32, u32)> {
        self.label.as_ref().map(|t| t.size)
    }

    fn texture(&self, key: TextureKey) -> Option<&GpuTexture> {
        match key {
            TextureKey::Sprite(sprite) => self.sprites[sprite.index()].as_ref(),
            TextureKey::Label => self.label.as_ref(),
            TextureKey::White => Some(&self.white),
        }
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure after the surface was lost
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Clear, then draw the commands in order. Commands whose texture is
    /// missing are skipped.
    pub fn render(&mut self, cmds: &[DrawCmd]) -> Result<(), wgpu::SurfaceError> {
        let (vertices, batches) = batch(cmds, |key| self.texture(key).is_some());

        let vertex_buffer = (!vertices.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("vertex_buffer"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let Some(vertex_buffer) = &vertex_buffer {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                for run in &batches {
                    if let Some(texture) = self.texture(run.texture) {
                        render_pass.set_bind_group(0, &texture.bind_group, &[]);
                        render_pass.draw(run.vertices.clone(), 0..1);
                    }
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn upload_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    label: &str,
    (width, height): (u32, u32),
    rgba: &[u8],
) -> GpuTexture {
    let texture = device.create_texture_with_data(
        queue,
        &wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        },
        wgpu::util::TextureDataOrder::LayerMajor,
        rgba,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });

    GpuTexture {
        bind_group,
        size: (width, height),
    }
}

/// Clear color for an 8-bit sRGB triple. An sRGB surface expects linear
/// values and encodes them on write.
fn clear_color([r, g, b]: [u8; 3], srgb_surface: bool) -> wgpu::Color {
    let channel = |c: u8| {
        let c = c as f64 / 255.0;
        if !srgb_surface {
            c
        } else if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    wgpu::Color {
        r: channel(r),
        g: channel(g),
        b: channel(b),
        a: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_color_plain_surface() {
        let color = clear_color([255, 0, 51], false);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.2).abs() < 1e-9);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_clear_color_srgb_surface_is_linearized() {
        let color = clear_color(CLEAR_RGB, true);
        let plain = clear_color(CLEAR_RGB, false);
        // Dark sRGB values map to even darker linear values
        assert!(color.r < plain.r);
        assert!(color.b < plain.b);
        assert!((clear_color([255, 255, 255], true).r - 1.0).abs() < 1e-9);
    }
}
