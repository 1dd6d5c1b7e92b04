//! Interaction events and the per-view handler table.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

/// The fixed set of interaction slots a view can bind one handler to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventSlot {
    Click,
    MouseEnter,
    MouseLeave,
    TouchStart,
    TouchMove,
    TouchEnd,
    DragStart,
    DragOver,
    Drop,
}

impl EventSlot {
    pub const ALL: [EventSlot; 9] = [
        EventSlot::Click,
        EventSlot::MouseEnter,
        EventSlot::MouseLeave,
        EventSlot::TouchStart,
        EventSlot::TouchMove,
        EventSlot::TouchEnd,
        EventSlot::DragStart,
        EventSlot::DragOver,
        EventSlot::Drop,
    ];

    /// Lower-case platform event name, e.g. `mouseenter`.
    pub fn name(self) -> &'static str {
        match self {
            EventSlot::Click => "click",
            EventSlot::MouseEnter => "mouseenter",
            EventSlot::MouseLeave => "mouseleave",
            EventSlot::TouchStart => "touchstart",
            EventSlot::TouchMove => "touchmove",
            EventSlot::TouchEnd => "touchend",
            EventSlot::DragStart => "dragstart",
            EventSlot::DragOver => "dragover",
            EventSlot::Drop => "drop",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub client_x: f64,
    pub client_y: f64,
}

/// All touches currently on the surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchEvent {
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    pub fn new(touches: Vec<TouchPoint>) -> Self {
        Self { touches }
    }

    /// The two touch points, if exactly two are down.
    pub fn pair(&self) -> Option<(TouchPoint, TouchPoint)> {
        match self.touches.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }
}

/// Typed payloads carried along a drag operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataTransfer {
    entries: IndexMap<String, String>,
}

impl DataTransfer {
    pub fn set_data(&mut self, format: impl Into<String>, data: impl Into<String>) {
        self.entries.insert(format.into(), data.into());
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.entries.get(format).map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragEvent {
    pub data_transfer: DataTransfer,
    default_prevented: bool,
}

impl DragEvent {
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Pointer(PointerEvent),
    Touch(TouchEvent),
    Drag(DragEvent),
}

impl Event {
    pub fn as_touch(&self) -> Option<&TouchEvent> {
        match self {
            Event::Touch(touch) => Some(touch),
            _ => None,
        }
    }

    pub fn as_drag(&self) -> Option<&DragEvent> {
        match self {
            Event::Drag(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn as_drag_mut(&mut self) -> Option<&mut DragEvent> {
        match self {
            Event::Drag(drag) => Some(drag),
            _ => None,
        }
    }
}

pub type EventHandler = Rc<dyn Fn(&mut Event)>;

/// At most one handler per [`EventSlot`]. Setting a slot replaces its handler.
#[derive(Clone, Default)]
pub struct EventHandlers {
    slots: [Option<EventHandler>; 9],
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, slot: EventSlot, handler: EventHandler) {
        self.slots[slot.index()] = Some(handler);
    }

    pub fn set_fn(&mut self, slot: EventSlot, handler: impl Fn(&mut Event) + 'static) {
        self.set(slot, Rc::new(handler));
    }

    pub fn get(&self, slot: EventSlot) -> Option<EventHandler> {
        self.slots[slot.index()].clone()
    }

    pub fn remove(&mut self, slot: EventSlot) -> Option<EventHandler> {
        self.slots[slot.index()].take()
    }

    pub fn contains(&self, slot: EventSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Slots that currently have a handler, in declaration order.
    pub fn registered(&self) -> impl Iterator<Item = EventSlot> + '_ {
        EventSlot::ALL
            .into_iter()
            .filter(move |slot| self.contains(*slot))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes the handler bound to `slot`. Returns whether one was bound.
    ///
    /// The handler is cloned out first so it may freely reach back into the
    /// view that owns this table.
    pub fn dispatch(&self, slot: EventSlot, event: &mut Event) -> bool {
        match self.get(slot) {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.registered()).finish()
    }
}
