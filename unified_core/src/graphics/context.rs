// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;

use super::wgpu_color;
use crate::math::{Color, Point2};
use crate::window::UnifiedWindow;

/// Holds the core WGPU state objects required for rendering.
///
/// The context owns the surface (swapchain) for one window together with
/// the logical device and command queue. It is the render target of the
/// engine: [`clear`](Self::clear) records and submits one clear pass and
/// presents the frame.
#[derive(Debug)]
pub struct GraphicsContext {
    surface: wgpu::Surface<'static>,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    vsync: bool,
}

impl GraphicsContext {
    /// Initializes the graphics context for rendering to `window`.
    ///
    /// ## Arguments
    /// * `window` - The window whose surface will be rendered to.
    /// * `vsync` - Whether presentation waits for the display refresh.
    ///
    /// ## Returns
    /// The initialized context, or an error if no suitable adapter or
    /// device is available.
    pub fn new(window: &UnifiedWindow, vsync: bool) -> Result<Self> {
        log::info!("Initializing graphics context...");
        pollster::block_on(Self::initialize_async(window, vsync))
    }

    async fn initialize_async(window: &UnifiedWindow, vsync: bool) -> Result<Self> {
        let window_arc = window.winit_window_arc().clone();
        let size = window.size();
        log::debug!("Window size for initial graphics setup: {size}");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window_arc)?;
        log::debug!("WGPU surface created for the window.");

        // Request an adapter compatible with the surface, preferring the
        // discrete GPU where one exists.
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let adapter_info = adapter.get_info();
        log::info!(
            "Selected GPU: \"{}\", Backend: {:?}",
            adapter_info.name,
            adapter_info.backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Unified Logical Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await?;
        log::info!("Logical device and command queue created.");

        let surface_caps = surface.get_capabilities(&adapter);

        // Prefer an sRGB swapchain format for correct gamma.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|format| format.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.x.max(1),
            height: size.y.max(1),
            present_mode: present_mode_for(&surface_caps, vsync),
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        log::info!(
            "Surface configured: Format={:?}, Size={}x{}, PresentMode={:?}",
            surface_config.format,
            surface_config.width,
            surface_config.height,
            surface_config.present_mode
        );

        Ok(Self {
            surface,
            adapter,
            device,
            queue,
            surface_config,
            vsync,
        })
    }

    /// Reconfigures the surface when the window is resized.
    ///
    /// Zero-sized requests (minimized windows) are ignored; configuring a
    /// surface with a zero dimension is invalid.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("Ignoring resize request to zero dimensions: {width}x{height}");
            return;
        }

        log::debug!("Resizing graphics surface configuration to {width}x{height}");
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Switches vsync on or off, reconfiguring the surface if it changed.
    pub fn set_vsync(&mut self, vsync: bool) {
        if vsync == self.vsync {
            return;
        }

        let surface_caps = self.surface.get_capabilities(&self.adapter);
        self.surface_config.present_mode = present_mode_for(&surface_caps, vsync);
        self.surface.configure(&self.device, &self.surface_config);
        self.vsync = vsync;
        log::info!(
            "Vsync set to {} (present mode {:?})",
            vsync,
            self.surface_config.present_mode
        );
    }

    /// Returns whether presentation currently waits for the display
    /// refresh.
    pub fn vsync(&self) -> bool {
        self.vsync
    }

    /// Clears the next frame to `color` and presents it.
    ///
    /// ## Returns
    /// `Err(wgpu::SurfaceError)` when the swapchain cannot provide a
    /// frame; `Lost` and `Outdated` are recoverable by reconfiguring via
    /// [`resize`](Self::resize).
    pub fn clear(&self, color: Color) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Unified Clear Encoder"),
            });

        {
            let _render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Screen Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu_color(color)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
        } // Dropping the pass ends it and releases the encoder borrow.

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        log::trace!("Frame cleared and presented.");

        Ok(())
    }

    /// Returns the physical size of the configured surface.
    pub fn surface_size(&self) -> Point2<u32> {
        Point2::new(self.surface_config.width, self.surface_config.height)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_configuration(&self) -> &wgpu::SurfaceConfiguration {
        &self.surface_config
    }
}

/// Picks the present mode for the requested vsync setting from what the
/// surface supports.
fn present_mode_for(caps: &wgpu::SurfaceCapabilities, vsync: bool) -> wgpu::PresentMode {
    if vsync {
        // Fifo is the standard vsync mode and always supported.
        return wgpu::PresentMode::Fifo;
    }

    for preferred in [wgpu::PresentMode::Immediate, wgpu::PresentMode::Mailbox] {
        if caps.present_modes.contains(&preferred) {
            return preferred;
        }
    }
    wgpu::PresentMode::Fifo
}
