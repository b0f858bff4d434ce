use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::mpsc::{Sender, WeakSender};
use tracing::{debug, trace, warn};

use crate::events::{CarouselEvent, Navigation};

/// A key press, named the way browsers name `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl FromStr for Key {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(match raw {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            other => Key::Other(other.to_owned()),
        })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowLeft => f.write_str("ArrowLeft"),
            Key::ArrowRight => f.write_str("ArrowRight"),
            Key::Other(name) => f.write_str(name),
        }
    }
}

/// The fixed key map: left arrow goes back, right arrow goes forward.
pub fn binding_for(key: &Key) -> Option<Navigation> {
    match key {
        Key::ArrowLeft => Some(Navigation::Previous),
        Key::ArrowRight => Some(Navigation::Next),
        Key::Other(_) => None,
    }
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, WeakSender<CarouselEvent>>,
}

/// Host-owned source of key presses, shared by every mounted carousel.
///
/// A bound key is pushed straight into each attached carousel's event queue,
/// so it is handled in order with that carousel's other events. The bus only
/// holds weak senders; it never keeps a carousel alive.
#[derive(Debug, Clone, Default)]
pub struct KeyBus {
    registry: Arc<Mutex<Registry>>,
}

impl KeyBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `key` to every attached carousel; returns how many queued it.
    pub fn press(&self, key: Key) -> usize {
        let Some(nav) = binding_for(&key) else {
            trace!(%key, "unbound key ignored");
            return 0;
        };
        let registry = self.registry.lock();
        let mut delivered = 0;
        for (id, weak) in &registry.listeners {
            let Some(events) = weak.upgrade() else {
                continue;
            };
            match events.try_send(CarouselEvent::Key(nav)) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!(listener = *id, %key, "event queue full; dropping key press");
                }
                Err(TrySendError::Closed(_)) => {}
            }
        }
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.registry.lock().listeners.len()
    }

    /// Binds the arrow keys to `events` until the returned listener drops.
    pub fn attach(&self, events: &Sender<CarouselEvent>) -> KeyListener {
        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, events.downgrade());
        debug!(listener = id, listeners = registry.listeners.len(), "key listener attached");
        KeyListener {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }
}

/// One carousel's binding on a [`KeyBus`]. Detaches on drop.
#[derive(Debug)]
pub struct KeyListener {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().listeners.remove(&self.id);
            debug!(listener = self.id, "key listener detached");
        }
    }
}
