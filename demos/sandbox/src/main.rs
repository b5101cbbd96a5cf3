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

// Unified sandbox
// Minimal application demonstrating the event dispatch chain.

use anyhow::Result;
use unified_core::event::{
    CursorMove, EventDispatcher, KeyAction, KeyPress, MousePress, WindowClose, WindowResize,
};
use unified_core::{Application, Engine, EngineConfig, EngineContext};

struct SandboxApp {
    cursor: (f64, f64),
    frames: u64,
    elapsed: f32,
}

impl Application for SandboxApp {
    fn new(context: EngineContext<'_>) -> Self {
        let size = context.window.size();
        log::info!("Sandbox starting with a {size} window");
        Self {
            cursor: (0.0, 0.0),
            frames: 0,
            elapsed: 0.0,
        }
    }

    fn on_event(&mut self, dispatcher: &mut EventDispatcher<'_>) {
        dispatcher.dispatch::<WindowClose, _>(|_| {
            log::info!("Close requested, shutting down");
            false
        });

        dispatcher.dispatch::<WindowResize, _>(|resize| {
            log::info!("Resized to {}x{}", resize.width, resize.height);
            false
        });

        // Claims key presses; releases and repeats pass through unhandled.
        dispatcher.dispatch::<KeyPress, _>(|key| {
            if key.action == KeyAction::Press {
                log::info!("Key {} pressed", key.key_code);
                true
            } else {
                false
            }
        });

        if dispatcher.is_handled() {
            log::debug!("Key event was claimed by the primary handler");
        }

        // The chain does not stop once handled: this second KeyPress
        // handler still observes every key event.
        dispatcher.dispatch::<KeyPress, _>(|key| {
            log::debug!("Key chain tail saw key {} ({:?})", key.key_code, key.action);
            false
        });

        dispatcher.dispatch::<CursorMove, _>(|cursor| {
            self.cursor = (cursor.x, cursor.y);
            false
        });

        dispatcher.dispatch::<MousePress, _>(|press| {
            log::info!(
                "Mouse {:?} {:?} at ({:.0}, {:.0})",
                press.button,
                press.action,
                self.cursor.0,
                self.cursor.1
            );
            false
        });
    }

    fn update(&mut self, dt: f32) {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed >= 5.0 {
            log::info!(
                "{} frames over {:.1}s ({:.0} fps)",
                self.frames,
                self.elapsed,
                self.frames as f32 / self.elapsed
            );
            self.frames = 0;
            self.elapsed = 0.0;
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut config = EngineConfig::default();
    config.window.title = "Unified Sandbox".to_string();
    config.window.resizable = true;
    config.window.always_on_top = false;
    config.clear_color = unified_core::math::Color::rgb(0.1, 0.2, 0.3);

    Engine::run_with_config::<SandboxApp>(config)
}
