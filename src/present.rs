//! GPU presentation of a particle [`Surface`].
//!
//! The surface is uploaded as a texture every frame and drawn with one
//! fullscreen triangle. The fragment shader letterboxes it inside the
//! window and fills the margins with the background colour.

use std::sync::Arc;

use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::error::HostError;
use crate::surface::{DisplayBounds, Surface};

const SHADER_SOURCE: &str = include_str!("present.wgsl");

/// Colour behind transparent pixels.
const BACKGROUND: [f32; 4] = [0.05, 0.05, 0.08, 1.0];

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Params {
    background: [f32; 4],
    extent: [f32; 2],
    _pad: [f32; 2],
}

/// Where a `surface` sized image lands inside a `window` sized viewport.
///
/// Scales by the largest whole factor that fits, or by the exact fit when
/// the window is smaller than the surface, and centers the result.
pub(crate) fn letterbox(window: PhysicalSize<u32>, surface: (u32, u32)) -> DisplayBounds {
    let (sw, sh) = (surface.0.max(1) as f32, surface.1.max(1) as f32);
    let (ww, wh) = (window.width as f32, window.height as f32);

    let fit = (ww / sw).min(wh / sh);
    let scale = if fit >= 1.0 { fit.floor() } else { fit };
    let (width, height) = (sw * scale, sh * scale);
    DisplayBounds::new((ww - width) / 2.0, (wh - height) / 2.0, width, height)
}

/// Owns the wgpu objects needed to show one surface in one window.
pub(crate) struct Presenter {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    params_buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    texture_size: (u32, u32),
}

impl Presenter {
    pub async fn new(window: Arc<Window>, texture_size: (u32, u32)) -> Result<Self, HostError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(HostError::NoAdapter)?;
        log::info!("using adapter {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let (surface_format, alpha_mode) =
            pick_surface_format(&surface_caps.formats, &surface_caps.alpha_modes)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Present Params"),
            size: std::mem::size_of::<Params>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Present Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        // Nearest filtering keeps sprite pixels square at any scale
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Present Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let texture = create_surface_texture(&device, texture_size);
        let bind_group = create_bind_group(&device, &bind_group_layout, &params_buffer, &texture, &sampler);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Present Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Present Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Present Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            params_buffer,
            bind_group_layout,
            sampler,
            texture,
            bind_group,
            texture_size,
        })
    }

    /// Current size of the swapchain.
    pub fn size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.config.width, self.config.height)
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Upload `frame` and draw it. Headless surfaces only clear the window.
    pub fn present(&mut self, frame: &Surface) -> Result<(), wgpu::SurfaceError> {
        let size = (frame.width(), frame.height());
        if size != self.texture_size {
            log::debug!("surface resized to {}x{}, recreating texture", size.0, size.1);
            self.texture = create_surface_texture(&self.device, size);
            self.bind_group = create_bind_group(
                &self.device,
                &self.bind_group_layout,
                &self.params_buffer,
                &self.texture,
                &self.sampler,
            );
            self.texture_size = size;
        }

        if let Some(pixels) = frame.pixels() {
            self.queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &self.texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                pixels.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * pixels.width()),
                    rows_per_image: Some(pixels.height()),
                },
                extent(size),
            );
        }

        let bounds = letterbox(self.size(), size);
        let params = Params {
            background: BACKGROUND,
            extent: [
                bounds.width / self.config.width as f32,
                bounds.height / self.config.height as f32,
            ],
            _pad: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.params_buffer, 0, bytemuck::cast_slice(&[params]));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Present Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Present Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: BACKGROUND[0] as f64,
                            g: BACKGROUND[1] as f64,
                            b: BACKGROUND[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !frame.is_headless() {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_bind_group(0, &self.bind_group, &[]);
                render_pass.draw(0..3, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Prefer an sRGB format; fall back to the first the adapter offers.
fn pick_surface_format(
    formats: &[wgpu::TextureFormat],
    alpha_modes: &[wgpu::CompositeAlphaMode],
) -> Result<(wgpu::TextureFormat, wgpu::CompositeAlphaMode), HostError> {
    let format = formats
        .iter()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first())
        .copied()
        .ok_or(HostError::UnsupportedSurface)?;
    let alpha_mode = alpha_modes
        .first()
        .copied()
        .ok_or(HostError::UnsupportedSurface)?;
    Ok((format, alpha_mode))
}

fn extent((width, height): (u32, u32)) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: width.max(1),
        height: height.max(1),
        depth_or_array_layers: 1,
    }
}

fn create_surface_texture(device: &wgpu::Device, size: (u32, u32)) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Particle Surface"),
        size: extent(size),
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        // Sprite colours are authored in sRGB
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    })
}

fn create_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    params: &wgpu::Buffer,
    texture: &wgpu::Texture,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Present Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: params.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterbox_whole_scale() {
        let bounds = letterbox(PhysicalSize::new(320, 300), (100, 100));
        assert_eq!(bounds, DisplayBounds::new(10.0, 0.0, 300.0, 300.0));
    }

    #[test]
    fn test_letterbox_wide_window() {
        let bounds = letterbox(PhysicalSize::new(800, 90), (100, 30));
        assert_eq!(bounds, DisplayBounds::new(250.0, 0.0, 300.0, 90.0));
    }

    #[test]
    fn test_letterbox_shrinks_below_one() {
        let bounds = letterbox(PhysicalSize::new(50, 100), (100, 100));
        assert_eq!(bounds, DisplayBounds::new(0.0, 25.0, 50.0, 50.0));
    }

    #[test]
    fn test_surface_format_prefers_srgb() {
        let (format, alpha) = pick_surface_format(
            &[wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Bgra8UnormSrgb],
            &[wgpu::CompositeAlphaMode::Opaque],
        )
        .unwrap();
        assert_eq!(format, wgpu::TextureFormat::Bgra8UnormSrgb);
        assert_eq!(alpha, wgpu::CompositeAlphaMode::Opaque);

        let (format, _) = pick_surface_format(
            &[wgpu::TextureFormat::Rgba8Unorm],
            &[wgpu::CompositeAlphaMode::Auto],
        )
        .unwrap();
        assert_eq!(format, wgpu::TextureFormat::Rgba8Unorm);
    }

    #[test]
    fn test_surface_without_capabilities_is_an_error() {
        let err = pick_surface_format(&[], &[wgpu::CompositeAlphaMode::Opaque]).unwrap_err();
        assert!(matches!(err, HostError::UnsupportedSurface));

        let err = pick_surface_format(&[wgpu::TextureFormat::Rgba8Unorm], &[]).unwrap_err();
        assert!(matches!(err, HostError::UnsupportedSurface));
    }

    #[test]
    fn test_params_layout() {
        // Matches the WGSL uniform struct
        assert_eq!(std::mem::size_of::<Params>(), 32);
    }
}
