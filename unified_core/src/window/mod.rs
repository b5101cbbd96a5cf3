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

//! A `winit`-backed window wrapper and the native-callback-to-event bridge.
//!
//! [`UnifiedWindow`] owns the single application event-callback slot. Native
//! winit callbacks are funneled through [`UnifiedWindow::pump_native_event`],
//! which translates each one into at most one engine [`Event`] and runs one
//! synchronous dispatch cycle before returning. There is no batching and no
//! queue; everything happens on the event-loop thread.

mod translate;

pub use self::translate::translate_window_event;

use std::sync::Arc;

use winit::{
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    error::OsError,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId, WindowLevel},
};

#[cfg(feature = "raw-window-handle")]
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::core::config::WindowConfig;
use crate::event::{CallbackSlot, Event, EventCallback, WindowMaximize};
use crate::math::Point2;

/// A builder for creating [`UnifiedWindow`] instances.
#[derive(Debug, Clone)]
pub struct WindowBuilder {
    title: String,
    width: u32,
    height: u32,
    resizable: bool,
    maximized: bool,
    always_on_top: bool,
}

impl WindowBuilder {
    /// Creates a new builder with the engine's default window settings:
    /// a floating, fixed-size 800x600 window.
    pub fn new() -> Self {
        Self {
            title: "Unified".to_string(),
            width: 800,
            height: 600,
            resizable: false,
            maximized: false,
            always_on_top: true,
        }
    }

    /// Creates a builder pre-filled from a [`WindowConfig`].
    pub fn from_config(config: &WindowConfig) -> Self {
        Self {
            title: config.title.clone(),
            width: config.width,
            height: config.height,
            resizable: config.resizable,
            maximized: config.maximized,
            always_on_top: config.always_on_top,
        }
    }

    /// Sets the title of the window to be built.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial inner dimensions of the window to be built.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets whether the window can be resized by the user.
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Sets whether the window starts maximized.
    pub fn maximized(mut self, maximized: bool) -> Self {
        self.maximized = maximized;
        self
    }

    /// Sets whether the window floats above ordinary windows.
    pub fn always_on_top(mut self, always_on_top: bool) -> Self {
        self.always_on_top = always_on_top;
        self
    }

    /// Builds the [`UnifiedWindow`] using the provided winit event loop.
    ///
    /// ## Errors
    /// Returns an `OsError` if the underlying winit window creation fails.
    pub fn build(self, event_loop: &ActiveEventLoop) -> Result<UnifiedWindow, OsError> {
        log::info!(
            "Building window '{}' at {}x{}",
            self.title,
            self.width,
            self.height
        );

        let level = if self.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        let attributes = Window::default_attributes()
            .with_title(self.title)
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_resizable(self.resizable)
            .with_maximized(self.maximized)
            .with_window_level(level)
            .with_visible(true);

        let window = event_loop.create_window(attributes)?;
        log::info!("Window created (id: {:?}).", window.id());

        let was_maximized = window.is_maximized();
        Ok(UnifiedWindow {
            inner: Arc::new(window),
            events: CallbackSlot::new(),
            was_maximized,
        })
    }
}

impl Default for WindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A wrapper around a winit window, providing controlled access and the
/// engine's event bridge.
#[derive(Debug)]
pub struct UnifiedWindow {
    inner: Arc<Window>,
    events: CallbackSlot,
    was_maximized: bool,
}

impl UnifiedWindow {
    /// Returns the unique identifier of the underlying window.
    pub fn id(&self) -> WindowId {
        self.inner.id()
    }

    /// Requests that a redraw event be emitted for this window.
    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    /// Returns the physical size of the window's client area.
    pub fn size(&self) -> Point2<u32> {
        let size = self.inner.inner_size();
        Point2::new(size.width, size.height)
    }

    /// Asks the platform to resize the window's client area.
    ///
    /// The platform may clamp or ignore the request; the authoritative size
    /// arrives through a `WindowResize` event.
    pub fn request_size(&self, size: Point2<u32>) {
        let _ = self
            .inner
            .request_inner_size(PhysicalSize::new(size.x, size.y));
    }

    /// Returns the window's position on the desktop, if the backend
    /// reports one (Wayland does not).
    pub fn position(&self) -> Option<Point2<i32>> {
        self.inner
            .outer_position()
            .map(|position| Point2::new(position.x, position.y))
            .ok()
    }

    /// Moves the window to the given desktop position.
    pub fn set_position(&self, position: Point2<i32>) {
        self.inner
            .set_outer_position(PhysicalPosition::new(position.x, position.y));
    }

    /// Returns the current window title.
    pub fn title(&self) -> String {
        self.inner.title()
    }

    /// Replaces the window title.
    pub fn set_title(&self, title: &str) {
        self.inner.set_title(title);
    }

    /// Returns the display scale factor associated with this window.
    pub fn scale_factor(&self) -> f64 {
        self.inner.scale_factor()
    }

    /// Returns whether the window is currently maximized.
    pub fn is_maximized(&self) -> bool {
        self.inner.is_maximized()
    }

    /// Returns whether the window currently holds input focus.
    pub fn is_focused(&self) -> bool {
        self.inner.has_focus()
    }

    /// Installs the application's event callback.
    ///
    /// The window holds at most one callback; installing a new one replaces
    /// the previous one. Events arriving while no callback is installed are
    /// silently dropped.
    pub fn set_event_callback(&mut self, callback: EventCallback) {
        self.events.install(callback);
    }

    /// Bridges one native winit callback into the engine's event dispatch.
    ///
    /// Translates `native` into at most one [`Event`] and runs one
    /// synchronous dispatch cycle for it. Resize callbacks additionally
    /// check for a maximize-state transition, since winit reports
    /// maximization only through the resulting resize; a transition runs a
    /// second cycle carrying a `WindowMaximize` event.
    pub fn pump_native_event(&mut self, native: &WindowEvent) {
        if let Some(event) = translate_window_event(native) {
            self.emit(&event);
        }

        if matches!(native, WindowEvent::Resized(_)) {
            let maximized = self.inner.is_maximized();
            if let Some(payload) = maximize_transition(&mut self.was_maximized, maximized) {
                self.emit(&Event::from(payload));
            }
        }
    }

    /// Returns the window handle required by graphics backends.
    #[cfg(feature = "raw-window-handle")]
    pub fn raw_window_handle(
        &self,
    ) -> Result<raw_window_handle::RawWindowHandle, raw_window_handle::HandleError> {
        self.inner.window_handle().map(|handle| handle.as_raw())
    }

    /// Returns the display handle required by graphics backends.
    #[cfg(feature = "raw-window-handle")]
    pub fn raw_display_handle(
        &self,
    ) -> Result<raw_window_handle::RawDisplayHandle, raw_window_handle::HandleError> {
        self.inner.display_handle().map(|handle| handle.as_raw())
    }

    /// Returns a reference to the underlying winit window.
    pub(crate) fn winit_window_arc(&self) -> &Arc<Window> {
        &self.inner
    }

    fn emit(&mut self, event: &Event) {
        let handled = self.events.emit(event);
        log::trace!("{} event dispatched (handled: {handled})", event.name());
    }
}

/// Records a maximize-state observation, yielding an event payload only on
/// a transition.
fn maximize_transition(was_maximized: &mut bool, maximized: bool) -> Option<WindowMaximize> {
    if maximized == *was_maximized {
        return None;
    }
    *was_maximized = maximized;
    Some(WindowMaximize { maximized })
}
