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

use anyhow::{ensure, Context, Result};

use crate::math::Point2;

/// A 2D RGBA texture uploaded to the GPU, with its view and sampler.
#[derive(Debug)]
pub struct Texture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    size: Point2<u32>,
}

impl Texture {
    /// Decodes an encoded image (PNG, JPEG) and uploads it as an sRGB
    /// texture.
    ///
    /// ## Arguments
    /// * `flip_vertically` - Flips rows during decode, for conventions
    ///   that place the origin at the bottom-left.
    pub fn from_encoded_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        bytes: &[u8],
        flip_vertically: bool,
    ) -> Result<Self> {
        let (pixels, width, height) = decode_rgba8(bytes, flip_vertically)?;
        Self::from_rgba8(device, queue, label, width, height, &pixels)
    }

    /// Uploads raw RGBA8 pixel data as an sRGB texture.
    ///
    /// `pixels` must hold exactly `width * height * 4` bytes.
    pub fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<Self> {
        ensure!(width > 0 && height > 0, "texture '{label}' has a zero dimension");
        ensure!(
            pixels.len() as u64 == u64::from(width) * u64::from(height) * 4,
            "texture '{label}' pixel data length {} does not match {}x{} RGBA8",
            pixels.len(),
            width,
            height
        );

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        log::debug!("Uploaded texture '{label}' ({width}x{height})");
        Ok(Self {
            texture,
            view,
            sampler,
            size: Point2::new(width, height),
        })
    }

    /// Returns the texture dimensions in pixels.
    pub fn size(&self) -> Point2<u32> {
        self.size
    }

    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}

/// Decodes an encoded image into tightly packed RGBA8 rows.
fn decode_rgba8(bytes: &[u8], flip_vertically: bool) -> Result<(Vec<u8>, u32, u32)> {
    let image = image::load_from_memory(bytes).context("failed to decode image from memory")?;
    let image = if flip_vertically { image.flipv() } else { image };
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((rgba.into_raw(), width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};
    use std::io::Cursor;

    fn encode_png(pixels: ImageBuffer<Rgba<u8>, Vec<u8>>) -> Vec<u8> {
        let mut bytes = Vec::new();
        pixels
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("encoding a PNG in-memory should succeed");
        bytes
    }

    /// Decoding produces tightly packed RGBA8 with the source dimensions.
    #[test]
    fn decode_preserves_dimensions_and_pixels() {
        let mut source = ImageBuffer::new(2, 1);
        source.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        source.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        let bytes = encode_png(source);

        let (pixels, width, height) = decode_rgba8(&bytes, false).expect("decode should succeed");
        assert_eq!((width, height), (2, 1));
        assert_eq!(pixels, vec![255, 0, 0, 255, 0, 0, 255, 255]);
    }

    /// Vertical flip reverses row order.
    #[test]
    fn decode_flips_rows_when_requested() {
        let mut source = ImageBuffer::new(1, 2);
        source.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        source.put_pixel(0, 1, Rgba([40, 50, 60, 255]));
        let bytes = encode_png(source);

        let (pixels, _, _) = decode_rgba8(&bytes, true).expect("decode should succeed");
        assert_eq!(&pixels[0..4], &[40, 50, 60, 255], "bottom row comes first");
        assert_eq!(&pixels[4..8], &[10, 20, 30, 255]);
    }

    /// Garbage bytes surface as an error, not a panic.
    #[test]
    fn decode_rejects_garbage() {
        let result = decode_rgba8(&[0xDE, 0xAD, 0xBE, 0xEF], false);
        assert!(result.is_err());
    }
}
