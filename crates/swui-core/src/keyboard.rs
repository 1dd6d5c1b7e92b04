//! Keyboard shortcut hub with owned subscriptions.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use ahash::RandomState;
use hashbrown::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

struct Listener {
    key: String,
    action: Rc<dyn Fn()>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: HashMap<u64, Listener, RandomState>,
}

/// A keyboard event source views can subscribe shortcuts on.
///
/// Cloning yields another handle to the same hub. Listeners stay attached
/// exactly as long as their [`Subscription`] is alive.
#[derive(Clone, Default)]
pub struct Keyboard {
    registry: Rc<RefCell<Registry>>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, key: impl Into<String>, action: impl Fn() + 'static) -> Subscription {
        let key = key.into();
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        log::debug!("keyboard: subscribed #{id} to {key:?}");
        registry.listeners.insert(
            id,
            Listener {
                key,
                action: Rc::new(action),
            },
        );
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id: Some(id),
        }
    }

    /// Runs every action subscribed to `event.key`, oldest first, and returns how many ran.
    pub fn dispatch(&self, event: &KeyEvent) -> usize {
        let mut matching: Vec<(u64, Rc<dyn Fn()>)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, listener)| listener.key == event.key)
            .map(|(id, listener)| (*id, Rc::clone(&listener.action)))
            .collect();
        matching.sort_by_key(|(id, _)| *id);
        for (_, action) in &matching {
            action();
        }
        matching.len()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl fmt::Debug for Keyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyboard")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Keeps one keyboard listener attached. Dropping it detaches the listener.
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: Option<u64>,
}

impl Subscription {
    /// Detaches the listener now.
    pub fn cancel(mut self) {
        self.detach();
    }

    pub fn is_active(&self) -> bool {
        match (self.id, self.registry.upgrade()) {
            (Some(id), Some(registry)) => registry.borrow().listeners.contains_key(&id),
            _ => false,
        }
    }

    fn detach(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&id);
            log::debug!("keyboard: unsubscribed #{id}");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
