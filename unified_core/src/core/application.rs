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

//! The application runner: window, graphics, and frame loop wiring.
//!
//! [`Engine::run`] drives a winit event loop. At startup it builds the
//! window and graphics context, constructs the user's [`Application`], and
//! installs the application's [`on_event`](Application::on_event) as the
//! window's single event callback. From then on every native callback is
//! bridged synchronously into one dispatch cycle, and every redraw advances
//! the frame clock, updates the application, and clears the frame.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::WindowId;

use crate::core::clock::Clock;
use crate::core::config::EngineConfig;
use crate::event::EventDispatcher;
use crate::graphics::GraphicsContext;
use crate::window::{UnifiedWindow, WindowBuilder};

/// Borrowed engine systems handed to [`Application::new`].
pub struct EngineContext<'a> {
    pub window: &'a UnifiedWindow,
    pub graphics: &'a GraphicsContext,
}

/// User-side application logic hosted by the engine.
pub trait Application: Sized + 'static {
    /// Called once at startup to create the application state.
    fn new(context: EngineContext<'_>) -> Self;

    /// Called once per dispatched event, with the dispatcher wrapping it.
    ///
    /// This is the single registered event callback: chain
    /// `dispatcher.dispatch::<Kind, _>(...)` calls here, one per event kind
    /// of interest.
    fn on_event(&mut self, dispatcher: &mut EventDispatcher<'_>) {
        let _ = dispatcher;
    }

    /// Called every frame with the elapsed time since the previous frame,
    /// in seconds.
    fn update(&mut self, dt: f32) {
        let _ = dt;
    }
}

/// The internal state of the running engine, managed by the winit event
/// loop.
///
/// The application lives behind `Rc<RefCell<_>>` so the window's event
/// callback and the frame loop can share it; everything runs on the event
/// loop thread, so the refcell is never contended.
struct EngineState<A: Application> {
    config: EngineConfig,
    app: Option<Rc<RefCell<A>>>,
    window: Option<UnifiedWindow>,
    graphics: Option<GraphicsContext>,
    frame_clock: Clock,
}

impl<A: Application> EngineState<A> {
    fn new(config: EngineConfig) -> Self {
        Self {
            config,
            app: None,
            window: None,
            graphics: None,
            frame_clock: Clock::new(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.frame_clock.restart().as_secs_f32();
        if let Some(app) = self.app.as_ref() {
            app.borrow_mut().update(dt);
        }

        let (Some(window), Some(graphics)) = (self.window.as_ref(), self.graphics.as_mut())
        else {
            return;
        };
        match graphics.clear(self.config.clear_color) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = window.size();
                log::warn!("Surface lost or outdated; reconfiguring to {size}");
                graphics.resize(size.x, size.y);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory; exiting event loop.");
                event_loop.exit();
            }
            Err(error) => log::warn!("Frame skipped: {error}"),
        }
    }
}

impl<A: Application> ApplicationHandler for EngineState<A> {
    /// Called when the event loop is ready to process events. This is where
    /// everything that needs a live window gets initialized.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Avoid re-initializing if the app is resumed multiple times.
        }

        log::info!("Application resumed. Initializing window and engine systems...");

        let mut window = WindowBuilder::from_config(&self.config.window)
            .build(event_loop)
            .expect("failed to create the application window");

        let graphics = GraphicsContext::new(&window, self.config.window.vsync)
            .expect("failed to initialize the graphics context");

        let app = Rc::new(RefCell::new(A::new(EngineContext {
            window: &window,
            graphics: &graphics,
        })));

        // The application's on_event becomes the window's single callback.
        let callback_app = Rc::clone(&app);
        window.set_event_callback(Box::new(move |dispatcher| {
            callback_app.borrow_mut().on_event(dispatcher);
        }));

        self.window = Some(window);
        self.graphics = Some(graphics);
        self.app = Some(app);
        self.frame_clock.restart();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                // Let the application observe the close before the loop ends.
                window.pump_native_event(&event);
                log::info!("Window close requested; exiting event loop...");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(graphics) = self.graphics.as_mut() {
                    graphics.resize(size.width, size.height);
                }
                window.pump_native_event(&event);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => window.pump_native_event(&event),
        }
    }

    /// Requests the next frame once all pending events are processed,
    /// keeping the loop continuous.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl<A: Application> Drop for EngineState<A> {
    fn drop(&mut self) {
        log::info!("Engine state dropping; shutting down...");
        self.app = None;
        self.graphics = None;
        self.window = None;
        log::info!("Engine shutdown complete.");
    }
}

/// The public entry point for the engine.
pub struct Engine;

impl Engine {
    /// Runs an application with the default configuration.
    ///
    /// Blocks the current thread until the window is closed.
    pub fn run<A: Application>() -> Result<()> {
        Self::run_with_config::<A>(EngineConfig::default())
    }

    /// Runs an application with an explicit configuration.
    ///
    /// Creates the event loop, drives the engine state machine, and
    /// returns once the loop exits.
    pub fn run_with_config<A: Application>(config: EngineConfig) -> Result<()> {
        log::info!("Unified engine starting...");
        let event_loop = EventLoop::new()?;

        let mut state = EngineState::<A>::new(config);
        event_loop.run_app(&mut state)?;

        Ok(())
    }
}
