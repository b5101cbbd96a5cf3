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

//! Type-checked delivery of one event to interested handlers.

use std::fmt;

use super::{Event, EventVariant};

/// Transient coordinator for one dispatch cycle.
///
/// A dispatcher wraps exactly one borrowed [`Event`] plus a "handled" flag
/// that starts `false`. It lives on the stack of a single callback
/// invocation: created right before the registered [`EventCallback`] runs,
/// passed to every [`dispatch`](Self::dispatch) attempt inside it, and
/// discarded when the callback returns. It is never stored and never
/// crosses threads.
#[derive(Debug)]
pub struct EventDispatcher<'a> {
    event: &'a Event,
    handled: bool,
}

impl<'a> EventDispatcher<'a> {
    /// Wraps `event` for one dispatch cycle, with the handled flag cleared.
    pub fn new(event: &'a Event) -> Self {
        Self {
            event,
            handled: false,
        }
    }

    /// Returns the wrapped event.
    pub fn event(&self) -> &Event {
        self.event
    }

    /// Returns whether some handler has claimed this event so far.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Offers the event to `handler` if the wrapped event is an `E`.
    ///
    /// The handler runs exactly when the wrapped event's kind tag equals
    /// [`E::KIND`](EventVariant::KIND); a mismatch is a no-op. A handler
    /// returning `true` claims the event and sets the handled flag. The
    /// flag is sticky: a later handler returning `false`, or a mismatched
    /// `dispatch`, never clears it.
    ///
    /// Chained calls against the same dispatcher are evaluated
    /// independently. An earlier handler claiming the event does NOT stop a
    /// later matching call from running; callers that want occlusion check
    /// [`is_handled`](Self::is_handled) themselves.
    pub fn dispatch<E, F>(&mut self, handler: F)
    where
        E: EventVariant,
        F: FnOnce(&E) -> bool,
    {
        if let Some(payload) = E::extract(self.event) {
            if handler(payload) {
                self.handled = true;
            }
        }
    }
}

/// The single application-registered event callback.
///
/// Routing to multiple interested systems is the callback's own business;
/// the dispatch layer never fans out.
pub type EventCallback = Box<dyn FnMut(&mut EventDispatcher<'_>)>;

/// Holder for at most one active [`EventCallback`].
///
/// [`install`](Self::install) overwrites any previous callback. With the
/// slot empty, [`emit`](Self::emit) silently drops the event, which is the
/// normal state before an application has registered interest.
#[derive(Default)]
pub struct CallbackSlot {
    callback: Option<EventCallback>,
}

impl CallbackSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self { callback: None }
    }

    /// Installs `callback`, replacing any previously installed one.
    pub fn install(&mut self, callback: EventCallback) {
        self.callback = Some(callback);
    }

    /// Returns whether a callback is currently installed.
    pub fn is_installed(&self) -> bool {
        self.callback.is_some()
    }

    /// Runs one dispatch cycle for `event`.
    ///
    /// Wraps the event in a fresh [`EventDispatcher`], invokes the
    /// installed callback with it, and reports the final handled flag.
    /// An empty slot drops the event and reports `false`; no error is
    /// raised.
    pub fn emit(&mut self, event: &Event) -> bool {
        let Some(callback) = self.callback.as_mut() else {
            log::trace!("no event callback installed, dropping {} event", event.name());
            return false;
        };
        let mut dispatcher = EventDispatcher::new(event);
        callback(&mut dispatcher);
        dispatcher.is_handled()
    }
}

impl fmt::Debug for CallbackSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSlot")
            .field("installed", &self.is_installed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{
        ButtonAction, CursorMove, EventKind, EventVariant, KeyAction, KeyPress, MouseButton,
        MousePress, WindowClose, WindowFocus, WindowMaximize, WindowMove, WindowResize,
    };

    fn all_events() -> Vec<Event> {
        vec![
            Event::from(WindowClose),
            Event::from(WindowMove { x: -4, y: 9 }),
            Event::from(WindowResize {
                width: 800,
                height: 600,
            }),
            Event::from(WindowFocus { focused: false }),
            Event::from(WindowMaximize { maximized: true }),
            Event::from(KeyPress {
                key_code: 30,
                action: KeyAction::Press,
            }),
            Event::from(CursorMove { x: 12.0, y: 34.0 }),
            Event::from(MousePress {
                button: MouseButton::Right,
                action: ButtonAction::Release,
            }),
        ]
    }

    fn count_matches<E: EventVariant>(event: &Event) -> usize {
        let mut invoked = 0;
        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch::<E, _>(|_| {
            invoked += 1;
            false
        });
        invoked
    }

    /// dispatch::<V> invokes the handler iff the wrapped event is a V.
    #[test]
    fn dispatch_matches_exactly_one_variant() {
        for event in &all_events() {
            let matches = [
                (EventKind::WindowClose, count_matches::<WindowClose>(event)),
                (EventKind::WindowMove, count_matches::<WindowMove>(event)),
                (EventKind::WindowResize, count_matches::<WindowResize>(event)),
                (EventKind::WindowFocus, count_matches::<WindowFocus>(event)),
                (
                    EventKind::WindowMaximize,
                    count_matches::<WindowMaximize>(event),
                ),
                (EventKind::KeyPress, count_matches::<KeyPress>(event)),
                (EventKind::CursorMove, count_matches::<CursorMove>(event)),
                (EventKind::MousePress, count_matches::<MousePress>(event)),
            ];

            for (kind, invoked) in matches {
                let expected = usize::from(kind == event.kind());
                assert_eq!(
                    invoked, expected,
                    "dispatch::<{}> on a {} event ran {} time(s)",
                    kind.name(),
                    event.name(),
                    invoked
                );
            }
        }
    }

    /// A mismatched dispatch never touches the handled flag.
    #[test]
    fn mismatched_dispatch_leaves_handled_untouched() {
        let event = Event::from(WindowMove { x: 1, y: 2 });
        let mut dispatcher = EventDispatcher::new(&event);
        assert!(!dispatcher.is_handled());

        dispatcher.dispatch::<WindowClose, _>(|_| true);
        assert!(!dispatcher.is_handled(), "mismatch must not set the flag");

        dispatcher.dispatch::<WindowMove, _>(|_| true);
        assert!(dispatcher.is_handled());

        dispatcher.dispatch::<WindowResize, _>(|_| true);
        assert!(dispatcher.is_handled(), "mismatch must not clear the flag");
    }

    /// The handled flag starts false, is set by a true-returning handler,
    /// and never reverts.
    #[test]
    fn handled_flag_is_sticky() {
        let event = Event::from(KeyPress {
            key_code: 16,
            action: KeyAction::Press,
        });
        let mut dispatcher = EventDispatcher::new(&event);

        dispatcher.dispatch::<KeyPress, _>(|_| false);
        assert!(!dispatcher.is_handled(), "false return must not set the flag");

        dispatcher.dispatch::<KeyPress, _>(|_| true);
        assert!(dispatcher.is_handled());

        dispatcher.dispatch::<KeyPress, _>(|_| false);
        assert!(dispatcher.is_handled(), "flag must never revert to false");
    }

    /// A claimed event is still offered to later matching handlers: the
    /// chain does not short-circuit on handled.
    #[test]
    fn chain_does_not_short_circuit_on_handled() {
        let event = Event::from(KeyPress {
            key_code: 44,
            action: KeyAction::Release,
        });
        let mut dispatcher = EventDispatcher::new(&event);
        let mut second_ran = false;

        dispatcher.dispatch::<KeyPress, _>(|_| true);
        dispatcher.dispatch::<KeyPress, _>(|_| {
            second_ran = true;
            false
        });

        assert!(second_ran, "later matching dispatch must still run");
        assert!(dispatcher.is_handled());
    }

    /// Handlers receive the payload the event was constructed with.
    #[test]
    fn handler_sees_constructed_payload() {
        let event = Event::from(WindowResize {
            width: 1024,
            height: 768,
        });
        let mut dispatcher = EventDispatcher::new(&event);
        let mut seen = None;

        dispatcher.dispatch::<WindowResize, _>(|resize| {
            seen = Some((resize.width, resize.height));
            true
        });
        dispatcher.dispatch::<WindowClose, _>(|_| {
            panic!("WindowClose handler must not run for a resize event")
        });

        assert_eq!(seen, Some((1024, 768)));
        assert!(dispatcher.is_handled());
    }

    /// Emitting into an empty slot is a silent no-op.
    #[test]
    fn empty_slot_drops_event() {
        let mut slot = CallbackSlot::new();
        assert!(!slot.is_installed());

        let event = Event::from(KeyPress {
            key_code: 2,
            action: KeyAction::Press,
        });
        assert!(!slot.emit(&event), "empty slot must report unhandled");
    }

    /// emit reports the handled flag of the cycle it ran.
    #[test]
    fn emit_reports_handled_flag() {
        let mut slot = CallbackSlot::new();
        slot.install(Box::new(|dispatcher| {
            dispatcher.dispatch::<CursorMove, _>(|_| true);
        }));

        let cursor = Event::from(CursorMove { x: 3.0, y: 4.0 });
        let close = Event::from(WindowClose);
        assert!(slot.emit(&cursor));
        assert!(!slot.emit(&close), "non-matching cycle must report false");
    }

    /// install overwrites the previous callback; there is no fan-out.
    #[test]
    fn install_overwrites_previous_callback() {
        use std::cell::Cell;
        use std::rc::Rc;

        let first_hits = Rc::new(Cell::new(0));
        let second_hits = Rc::new(Cell::new(0));

        let mut slot = CallbackSlot::new();
        let hits = Rc::clone(&first_hits);
        slot.install(Box::new(move |_| hits.set(hits.get() + 1)));
        let hits = Rc::clone(&second_hits);
        slot.install(Box::new(move |_| hits.set(hits.get() + 1)));

        slot.emit(&Event::from(WindowClose));
        assert_eq!(first_hits.get(), 0, "replaced callback must not run");
        assert_eq!(second_hits.get(), 1);
    }
}
