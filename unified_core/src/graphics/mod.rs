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

//! Thin GPU layer over wgpu: surface management and clearing, shader
//! module creation, and texture upload. Pipeline assembly stays with the
//! caller.

pub mod context;
pub mod shader;
pub mod texture;

pub use context::GraphicsContext;
pub use shader::Shader;
pub use texture::Texture;

use crate::math::Color;

/// Converts an engine [`Color`] into the wgpu clear-color type.
pub(crate) fn wgpu_color(color: Color) -> wgpu::Color {
    wgpu::Color {
        r: f64::from(color.r),
        g: f64::from(color.g),
        b: f64::from(color.b),
        a: f64::from(color.a),
    }
}
