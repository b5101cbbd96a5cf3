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

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// A labelled WGSL shader module.
///
/// Thin wrapper over `wgpu::ShaderModule`; pipeline assembly is left to
/// the caller.
#[derive(Debug)]
pub struct Shader {
    label: String,
    module: wgpu::ShaderModule,
}

impl Shader {
    /// Compiles a shader module from WGSL source text.
    ///
    /// ## Arguments
    /// * `device` - The logical device the module is created on.
    /// * `label` - A debug label attached to the module.
    /// * `source` - WGSL source text.
    pub fn from_wgsl(device: &wgpu::Device, label: &str, source: &str) -> Self {
        log::debug!("Creating shader module '{label}'");
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
        });
        Self {
            label: label.to_string(),
            module,
        }
    }

    /// Compiles a shader module from a WGSL file, labelled by file name.
    pub fn from_path(device: &wgpu::Device, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read shader source {}", path.display()))?;
        let label = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("shader");
        Ok(Self::from_wgsl(device, label, &source))
    }

    /// Returns the debug label this module was created with.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the underlying module for pipeline creation.
    pub fn module(&self) -> &wgpu::ShaderModule {
        &self.module
    }
}
