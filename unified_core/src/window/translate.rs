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

//! Translation from winit's native window events to the engine taxonomy.
//!
//! This module acts as an adapter layer, decoupling the rest of the engine
//! from the specific event format of the `winit` crate. One native event
//! maps to at most one [`Event`]; native occurrences the taxonomy does not
//! model translate to `None` and are dropped by the caller.

use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::platform::scancode::PhysicalKeyExtScancode;

use crate::event::{
    ButtonAction, CursorMove, Event, KeyAction, KeyPress, MouseButton, MousePress, WindowClose,
    WindowFocus, WindowMove, WindowResize,
};

/// Translates a `winit::event::WindowEvent` into the engine's [`Event`].
///
/// ## Arguments
/// * `event` - A reference to a `WindowEvent` delivered by `winit`.
///
/// ## Returns
/// `Some(Event)` for native events the taxonomy models, `None` otherwise.
/// Key events whose physical key has no platform scancode are dropped.
pub fn translate_window_event(event: &WindowEvent) -> Option<Event> {
    match event {
        WindowEvent::CloseRequested => Some(WindowClose.into()),
        WindowEvent::Moved(position) => Some(
            WindowMove {
                x: position.x,
                y: position.y,
            }
            .into(),
        ),
        WindowEvent::Resized(size) => Some(
            WindowResize {
                width: size.width,
                height: size.height,
            }
            .into(),
        ),
        WindowEvent::Focused(focused) => Some(WindowFocus { focused: *focused }.into()),
        WindowEvent::KeyboardInput {
            event: key_event, ..
        } => {
            let Some(key_code) = key_event.physical_key.to_scancode() else {
                log::trace!(
                    "dropping key event without a scancode: {:?}",
                    key_event.physical_key
                );
                return None;
            };
            Some(
                KeyPress {
                    key_code,
                    action: map_key_action(key_event.state, key_event.repeat),
                }
                .into(),
            )
        }
        WindowEvent::CursorMoved { position, .. } => Some(
            CursorMove {
                x: position.x,
                y: position.y,
            }
            .into(),
        ),
        WindowEvent::MouseInput { state, button, .. } => Some(
            MousePress {
                button: map_mouse_button(*button),
                action: map_button_action(*state),
            }
            .into(),
        ),
        _ => None,
    }
}

/// (Internal) Maps a key element state plus winit's repeat flag to [`KeyAction`].
fn map_key_action(state: ElementState, repeat: bool) -> KeyAction {
    match state {
        ElementState::Pressed if repeat => KeyAction::Repeat,
        ElementState::Pressed => KeyAction::Press,
        ElementState::Released => KeyAction::Release,
    }
}

/// (Internal) Maps a mouse element state to [`ButtonAction`].
fn map_button_action(state: ElementState) -> ButtonAction {
    match state {
        ElementState::Pressed => ButtonAction::Press,
        ElementState::Released => ButtonAction::Release,
    }
}

/// (Internal) Maps a `winit::event::MouseButton` to the engine's [`MouseButton`].
fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(id) => MouseButton::Other(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};

    /// Close requests map to the payload-free WindowClose variant.
    #[test]
    fn translate_close_requested() {
        assert_eq!(
            translate_window_event(&WindowEvent::CloseRequested),
            Some(Event::from(WindowClose))
        );
    }

    /// Window moves carry the new desktop position.
    #[test]
    fn translate_moved() {
        let native = WindowEvent::Moved(PhysicalPosition::new(-8, 42));
        assert_eq!(
            translate_window_event(&native),
            Some(Event::from(WindowMove { x: -8, y: 42 }))
        );
    }

    /// Resizes carry the new client-area dimensions.
    #[test]
    fn translate_resized() {
        let native = WindowEvent::Resized(PhysicalSize::new(1024, 768));
        assert_eq!(
            translate_window_event(&native),
            Some(Event::from(WindowResize {
                width: 1024,
                height: 768,
            }))
        );
    }

    /// Focus changes carry the focused flag in both directions.
    #[test]
    fn translate_focused() {
        assert_eq!(
            translate_window_event(&WindowEvent::Focused(true)),
            Some(Event::from(WindowFocus { focused: true }))
        );
        assert_eq!(
            translate_window_event(&WindowEvent::Focused(false)),
            Some(Event::from(WindowFocus { focused: false }))
        );
    }

    /// Cursor movement carries the position in physical pixels.
    #[test]
    fn translate_cursor_moved() {
        let native = WindowEvent::CursorMoved {
            device_id: winit::event::DeviceId::dummy(),
            position: PhysicalPosition::new(100.5, 200.75),
        };
        assert_eq!(
            translate_window_event(&native),
            Some(Event::from(CursorMove { x: 100.5, y: 200.75 }))
        );
    }

    /// Mouse presses carry button identity and transition.
    #[test]
    fn translate_mouse_input() {
        let native = WindowEvent::MouseInput {
            device_id: winit::event::DeviceId::dummy(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Left,
        };
        assert_eq!(
            translate_window_event(&native),
            Some(Event::from(MousePress {
                button: MouseButton::Left,
                action: ButtonAction::Press,
            }))
        );

        let native = WindowEvent::MouseInput {
            device_id: winit::event::DeviceId::dummy(),
            state: ElementState::Released,
            button: WinitMouseButton::Other(9),
        };
        assert_eq!(
            translate_window_event(&native),
            Some(Event::from(MousePress {
                button: MouseButton::Other(9),
                action: ButtonAction::Release,
            }))
        );
    }

    /// Native events outside the taxonomy translate to None.
    #[test]
    fn translate_unmodeled_returns_none() {
        assert_eq!(translate_window_event(&WindowEvent::Destroyed), None);
        assert_eq!(translate_window_event(&WindowEvent::RedrawRequested), None);
        assert_eq!(
            translate_window_event(&WindowEvent::Occluded(true)),
            None
        );
    }

    /// Key transitions map through state and the repeat flag.
    #[test]
    fn key_action_mapping() {
        assert_eq!(map_key_action(ElementState::Pressed, false), KeyAction::Press);
        assert_eq!(map_key_action(ElementState::Pressed, true), KeyAction::Repeat);
        assert_eq!(
            map_key_action(ElementState::Released, false),
            KeyAction::Release
        );
        // A release reported with the repeat flag still counts as a release.
        assert_eq!(
            map_key_action(ElementState::Released, true),
            KeyAction::Release
        );
    }

    /// All standard buttons and the numeric escape hatch map one-to-one.
    #[test]
    fn mouse_button_mapping() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(WinitMouseButton::Right), MouseButton::Right);
        assert_eq!(
            map_mouse_button(WinitMouseButton::Middle),
            MouseButton::Middle
        );
        assert_eq!(map_mouse_button(WinitMouseButton::Back), MouseButton::Back);
        assert_eq!(
            map_mouse_button(WinitMouseButton::Forward),
            MouseButton::Forward
        );
        assert_eq!(
            map_mouse_button(WinitMouseButton::Other(15)),
            MouseButton::Other(15)
        );
    }
}
