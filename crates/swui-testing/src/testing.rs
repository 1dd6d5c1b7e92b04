//! Event builders, call recorders and a bare probe view.

use std::cell::RefCell;
use std::rc::Rc;

use swui_core::{
    create_view, BundleSet, DragEvent, Event, PointerEvent, RenderStrategy, Renderable,
    TouchEvent, TouchPoint, UiNode, View, ViewKind, ViewOverrides,
};

pub fn touch(id: u64, x: f64, y: f64) -> TouchPoint {
    TouchPoint {
        id,
        client_x: x,
        client_y: y,
    }
}

/// A touch event with one touch per `(x, y)` pair, ids counting from zero.
pub fn touches(points: &[(f64, f64)]) -> Event {
    Event::Touch(TouchEvent::new(
        points
            .iter()
            .enumerate()
            .map(|(id, (x, y))| touch(id as u64, *x, *y))
            .collect(),
    ))
}

pub fn pointer_event() -> Event {
    Event::Pointer(PointerEvent::default())
}

pub fn drag_event() -> Event {
    Event::Drag(DragEvent::default())
}

/// Drag event already carrying `data` as its `text/plain` payload.
pub fn drag_event_with(data: &str) -> Event {
    let mut drag = DragEvent::default();
    drag.data_transfer.set_data("text/plain", data);
    Event::Drag(drag)
}

/// Records values passed to callbacks under test.
pub struct CallLog<T> {
    calls: Rc<RefCell<Vec<T>>>,
}

impl<T> CallLog<T> {
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn record(&self, value: T) {
        self.calls.borrow_mut().push(value);
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

impl<T: 'static> CallLog<T> {
    /// A callback that appends its argument to this log.
    pub fn recorder(&self) -> impl Fn(T) + 'static {
        let calls = Rc::clone(&self.calls);
        move |value| calls.borrow_mut().push(value)
    }
}

impl<T: Clone> CallLog<T> {
    pub fn calls(&self) -> Vec<T> {
        self.calls.borrow().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.calls.borrow().last().cloned()
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Rc::clone(&self.calls),
        }
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A view kind with no fields that renders as a plain `div`.
pub struct Probe;

impl ViewKind for Probe {
    const NAME: &'static str = "Probe";
}

pub fn probe_view<B: BundleSet>(bundles: B) -> View<Probe, B> {
    create_view(
        RenderStrategy::new(|_: &Probe, state| UiNode::for_view("div", state)),
        Probe,
        ViewOverrides::new(),
        bundles,
    )
}

/// Markup of whatever `view` renders to right now.
pub fn markup(view: &dyn Renderable) -> String {
    view.render().to_string()
}
