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

//! Window and input event taxonomy.
//!
//! Every occurrence the windowing layer can report is one variant of the
//! closed [`Event`] sum type. Each variant wraps its own plain-data payload
//! struct so that a variant can be named as a *type* and handed to
//! [`EventDispatcher::dispatch`](crate::event::EventDispatcher::dispatch).
//! Payloads are immutable facts about something that already happened;
//! handlers only ever observe them by shared reference.
//!
//! The runtime kind tag is available both from an instance
//! ([`Event::kind`]) and statically from a payload type
//! ([`EventVariant::KIND`]), which is what lets the dispatcher match "the
//! event I am holding" against "the handler type I am trying" with a single
//! tag comparison.

mod dispatcher;

pub use self::dispatcher::{CallbackSlot, EventCallback, EventDispatcher};

/// Runtime tag identifying one concrete event variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    WindowClose,
    WindowMove,
    WindowResize,
    WindowFocus,
    WindowMaximize,
    KeyPress,
    CursorMove,
    MousePress,
}

impl EventKind {
    /// Returns the human-readable name of this kind, for logging.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::WindowClose => "WindowClose",
            EventKind::WindowMove => "WindowMove",
            EventKind::WindowResize => "WindowResize",
            EventKind::WindowFocus => "WindowFocus",
            EventKind::WindowMaximize => "WindowMaximize",
            EventKind::KeyPress => "KeyPress",
            EventKind::CursorMove => "CursorMove",
            EventKind::MousePress => "MousePress",
        }
    }
}

/// Key transition reported by a [`KeyPress`] event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Press,
    Release,
    Repeat,
}

/// Button transition reported by a [`MousePress`] event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    Press,
    Release,
}

/// An engine-internal representation of a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left mouse button.
    Left,
    /// The right mouse button.
    Right,
    /// The middle mouse button.
    Middle,
    /// The back mouse button (typically on the side).
    Back,
    /// The forward mouse button (typically on the side).
    Forward,
    /// Another mouse button, identified by a numeric code.
    Other(u16),
}

/// The window was asked to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowClose;

/// The window moved to a new position on the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMove {
    pub x: i32,
    pub y: i32,
}

/// The window's client area changed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResize {
    pub width: u32,
    pub height: u32,
}

/// The window gained or lost input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFocus {
    pub focused: bool,
}

/// The window was maximized or restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMaximize {
    pub maximized: bool,
}

/// A keyboard key changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// Platform scancode of the physical key.
    pub key_code: u32,
    pub action: KeyAction,
}

/// The cursor moved over the window's client area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorMove {
    pub x: f64,
    pub y: f64,
}

/// A mouse button changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MousePress {
    pub button: MouseButton,
    pub action: ButtonAction,
}

/// A window or input occurrence, tagged by kind.
///
/// The kind tag is fixed at construction (it is the enum discriminant) and
/// the payload is read-only once wrapped: dispatch hands out `&` references
/// only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    WindowClose(WindowClose),
    WindowMove(WindowMove),
    WindowResize(WindowResize),
    WindowFocus(WindowFocus),
    WindowMaximize(WindowMaximize),
    KeyPress(KeyPress),
    CursorMove(CursorMove),
    MousePress(MousePress),
}

impl Event {
    /// Returns the runtime kind tag of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::WindowClose(_) => EventKind::WindowClose,
            Event::WindowMove(_) => EventKind::WindowMove,
            Event::WindowResize(_) => EventKind::WindowResize,
            Event::WindowFocus(_) => EventKind::WindowFocus,
            Event::WindowMaximize(_) => EventKind::WindowMaximize,
            Event::KeyPress(_) => EventKind::KeyPress,
            Event::CursorMove(_) => EventKind::CursorMove,
            Event::MousePress(_) => EventKind::MousePress,
        }
    }

    /// Returns the human-readable name of this event, for logging.
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Typed view onto one [`Event`] variant.
///
/// Implemented by every payload struct of the closed event set. `KIND` is
/// the static counterpart of [`Event::kind`]; `extract` is a tag match
/// followed by a payload borrow, so a mismatched kind yields `None` without
/// any side effect.
pub trait EventVariant: Sized {
    /// Static kind tag of this variant.
    const KIND: EventKind;

    /// Borrows the payload if `event` carries this variant.
    fn extract(event: &Event) -> Option<&Self>;
}

impl EventVariant for WindowClose {
    const KIND: EventKind = EventKind::WindowClose;

    fn extract(event: &Event) -> Option<&Self> {
        match event {
            Event::WindowClose(payload) => Some(payload),
            _ => None,
        }
    }
}

impl EventVariant for WindowMove {
    const KIND: EventKind = EventKind::WindowMove;

    fn extract(event: &Event) -> Option<&Self> {
        match event {
            Event::WindowMove(payload) => Some(payload),
            _ => None,
        }
    }
}

impl EventVariant for WindowResize {
    const KIND: EventKind = EventKind::WindowResize;

    fn extract(event: &Event) -> Option<&Self> {
        match event {
            Event::WindowResize(payload) => Some(payload),
            _ => None,
        }
    }
}

impl EventVariant for WindowFocus {
    const KIND: EventKind = EventKind::WindowFocus;

    fn extract(event: &Event) -> Option<&Self> {
        match event {
            Event::WindowFocus(payload) => Some(payload),
            _ => None,
        }
    }
}

impl EventVariant for WindowMaximize {
    const KIND: EventKind = EventKind::WindowMaximize;

    fn extract(event: &Event) -> Option<&Self> {
        match event {
            Event::WindowMaximize(payload) => Some(payload),
            _ => None,
        }
    }
}

impl EventVariant for KeyPress {
    const KIND: EventKind = EventKind::KeyPress;

    fn extract(event: &Event) -> Option<&Self> {
        match event {
            Event::KeyPress(payload) => Some(payload),
            _ => None,
        }
    }
}

impl EventVariant for CursorMove {
    const KIND: EventKind = EventKind::CursorMove;

    fn extract(event: &Event) -> Option<&Self> {
        match event {
            Event::CursorMove(payload) => Some(payload),
            _ => None,
        }
    }
}

impl EventVariant for MousePress {
    const KIND: EventKind = EventKind::MousePress;

    fn extract(event: &Event) -> Option<&Self> {
        match event {
            Event::MousePress(payload) => Some(payload),
            _ => None,
        }
    }
}

impl From<WindowClose> for Event {
    fn from(payload: WindowClose) -> Self {
        Event::WindowClose(payload)
    }
}

impl From<WindowMove> for Event {
    fn from(payload: WindowMove) -> Self {
        Event::WindowMove(payload)
    }
}

impl From<WindowResize> for Event {
    fn from(payload: WindowResize) -> Self {
        Event::WindowResize(payload)
    }
}

impl From<WindowFocus> for Event {
    fn from(payload: WindowFocus) -> Self {
        Event::WindowFocus(payload)
    }
}

impl From<WindowMaximize> for Event {
    fn from(payload: WindowMaximize) -> Self {
        Event::WindowMaximize(payload)
    }
}

impl From<KeyPress> for Event {
    fn from(payload: KeyPress) -> Self {
        Event::KeyPress(payload)
    }
}

impl From<CursorMove> for Event {
    fn from(payload: CursorMove) -> Self {
        Event::CursorMove(payload)
    }
}

impl From<MousePress> for Event {
    fn from(payload: MousePress) -> Self {
        Event::MousePress(payload)
    }
}
