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

//! Application, windowing, and event dispatch core for the Unified engine.
//!
//! The crate wires four pieces together: an [`Application`] frame loop
//! driven by winit, a [`UnifiedWindow`] wrapper owning the single event
//! callback, the closed [`Event`] taxonomy with its type-checked
//! [`EventDispatcher`], and a thin wgpu layer for clearing frames and
//! creating shader modules and textures.

pub mod core;
pub mod event;
pub mod graphics;
pub mod math;
pub mod window;

pub use crate::core::application::{Application, Engine, EngineContext};
pub use crate::core::clock::Clock;
pub use crate::core::config::{EngineConfig, WindowConfig};
pub use crate::event::{Event, EventDispatcher, EventKind};
pub use crate::window::UnifiedWindow;
