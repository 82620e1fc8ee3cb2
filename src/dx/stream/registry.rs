//! Event registry module.
//!
//! This module contains the [`EventRegistry`] type: the ordered mapping from
//! event names to their listeners which backs every stream adapter. Each
//! adapter owns its own registry, so listeners attached to one never see
//! events of another.

use log::error;
use spin::RwLock;
use std::{
    any::Any,
    collections::HashMap,
    fmt::{Debug, Formatter},
    panic::{catch_unwind, AssertUnwindSafe},
    sync::Arc,
};
use uuid::Uuid;

use crate::dx::stream::{EventName, StreamEvent};

/// Callback invoked with the payload each time an event it was registered
/// for fires.
pub type Listener = Arc<dyn Fn(&StreamEvent) + Send + Sync>;

/// Callback invoked when a listener panics while handling an event.
pub type FaultHandler = Arc<dyn Fn(&ListenerFault) + Send + Sync>;

/// Handle to a single listener registration.
///
/// Keeps the event name and the registration id needed to remove the
/// listener later with [`EventRegistry::remove`]. Dropping the handle does
/// not remove the listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerHandle {
    pub(crate) event: EventName,
    pub(crate) id: Uuid,
}

impl ListenerHandle {
    /// Event name the listener behind this handle was registered for.
    pub fn event(&self) -> EventName {
        self.event
    }
}

/// Report of a listener which panicked while handling an event.
///
/// Handed to the fault handler of the registry whose listener panicked; the
/// remaining listeners of the firing still run.
#[derive(Debug, Clone)]
pub struct ListenerFault {
    /// Event the listener was invoked for.
    pub event: EventName,

    /// Registration id of the listener (same id its [`ListenerHandle`]
    /// carries).
    pub listener_id: Uuid,

    /// Panic message, when one could be extracted.
    pub details: Option<String>,
}

#[derive(Clone)]
struct RegisteredListener {
    id: Uuid,
    listener: Listener,
}

/// Ordered registry of event listeners.
///
/// Listeners are kept per event name in registration order and invoked
/// synchronously, one after another, when the event fires. Registration
/// never deduplicates: the same closure registered twice is invoked twice
/// per firing.
///
/// A panicking listener doesn't take its neighbours down: the panic is
/// caught at the listener boundary, reported through the fault handler (or
/// logged when none is set) and the remaining listeners still run.
pub struct EventRegistry {
    listeners: RwLock<HashMap<EventName, Vec<RegisteredListener>>>,
    fault_handler: RwLock<Option<FaultHandler>>,
}

impl EventRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
            fault_handler: RwLock::new(None),
        }
    }

    /// Append `listener` to the list kept for `event`.
    ///
    /// Registration always succeeds and makes `event` known to the registry
    /// from now on, even after all of its listeners are removed again.
    pub fn register(&self, event: EventName, listener: Listener) -> ListenerHandle {
        let id = Uuid::new_v4();
        self.listeners
            .write()
            .entry(event)
            .or_default()
            .push(RegisteredListener { id, listener });

        ListenerHandle { event, id }
    }

    /// Remove the registration behind `handle`.
    ///
    /// Returns whether a listener was removed. The event name stays known to
    /// the registry even when its last listener is gone.
    pub fn remove(&self, handle: &ListenerHandle) -> bool {
        let mut listeners = self.listeners.write();
        let Some(entries) = listeners.get_mut(&handle.event) else {
            return false;
        };

        let before = entries.len();
        entries.retain(|entry| entry.id != handle.id);
        before != entries.len()
    }

    /// Number of listeners currently registered for `event`.
    pub fn listener_count(&self, event: EventName) -> usize {
        self.listeners.read().get(&event).map_or(0, Vec::len)
    }

    /// Invoke every listener registered for `event`, in registration order.
    ///
    /// Returns `false` only when `event` was never registered on this
    /// registry; an event whose listeners were all removed is still known
    /// and fires as a no-op `true`.
    ///
    /// Listeners registered or removed by a listener during the firing take
    /// effect from the next firing on.
    pub fn fire(&self, event: EventName, payload: &StreamEvent) -> bool {
        let snapshot = {
            let listeners = self.listeners.read();
            match listeners.get(&event) {
                Some(entries) => entries.clone(),
                None => return false,
            }
        };

        for entry in &snapshot {
            let outcome = catch_unwind(AssertUnwindSafe(|| (entry.listener)(payload)));
            if let Err(panic) = outcome {
                self.report_fault(ListenerFault {
                    event,
                    listener_id: entry.id,
                    details: panic_details(panic.as_ref()),
                });
            }
        }

        true
    }

    /// Replace the handler notified when a listener panics.
    ///
    /// Without a handler the fault is logged on the `error` level.
    pub fn set_fault_handler(&self, handler: FaultHandler) {
        *self.fault_handler.write() = Some(handler);
    }

    fn report_fault(&self, fault: ListenerFault) {
        let handler = self.fault_handler.read().clone();
        match handler {
            Some(handler) => handler(&fault),
            None => error!(
                "Listener {} for '{}' event panicked: {}",
                fault.listener_id,
                fault.event,
                fault.details.as_deref().unwrap_or("no details")
            ),
        }
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for EventRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let listeners = self.listeners.read();
        f.debug_struct("EventRegistry")
            .field("events", &listeners.len())
            .field("listeners", &listeners.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}

fn panic_details(panic: &(dyn Any + Send)) -> Option<String> {
    panic
        .downcast_ref::<&str>()
        .map(|message| message.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
}

#[cfg(test)]
mod should {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    fn payload() -> StreamEvent {
        StreamEvent::Raw(Arc::new(json!({"id": 1})))
    }

    fn recording_listener(calls: &Arc<Mutex<Vec<u32>>>, tag: u32) -> Listener {
        let calls = calls.clone();
        Arc::new(move |_| calls.lock().unwrap().push(tag))
    }

    #[test]
    fn invoke_listeners_in_registration_order() {
        let registry = EventRegistry::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        registry.register(EventName::Tweet, recording_listener(&calls, 1));
        registry.register(EventName::Tweet, recording_listener(&calls, 2));
        registry.register(EventName::Tweet, recording_listener(&calls, 3));

        assert!(registry.fire(EventName::Tweet, &payload()));
        assert_eq!(*calls.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn keep_listener_lists_independent_between_events() {
        let registry = EventRegistry::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        registry.register(EventName::Tweet, recording_listener(&calls, 1));
        registry.register(EventName::Follow, recording_listener(&calls, 2));

        assert!(registry.fire(EventName::Tweet, &payload()));
        assert_eq!(*calls.lock().unwrap(), vec![1]);
    }

    #[test]
    fn report_never_registered_events() {
        let registry = EventRegistry::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        registry.register(EventName::Tweet, recording_listener(&calls, 1));

        assert!(!registry.fire(EventName::Delete, &payload()));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn invoke_every_registration_of_the_same_listener() {
        let registry = EventRegistry::new();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let listener = recording_listener(&calls, 7);

        registry.register(EventName::Favorite, listener.clone());
        registry.register(EventName::Favorite, listener.clone());
        registry.register(EventName::Favorite, listener);

        assert!(registry.fire(EventName::Favorite, &payload()));
        assert_eq!(calls.lock().unwrap().len(), 3);
    }

    #[test]
    fn keep_event_known_after_removing_all_listeners() {
        let registry = EventRegistry::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let handle = registry.register(EventName::Tweet, recording_listener(&calls, 1));
        assert!(registry.remove(&handle));

        assert!(registry.fire(EventName::Tweet, &payload()));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn remove_only_the_handled_registration() {
        let registry = EventRegistry::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let first = registry.register(EventName::Tweet, recording_listener(&calls, 1));
        registry.register(EventName::Tweet, recording_listener(&calls, 2));

        assert!(registry.remove(&first));
        assert!(!registry.remove(&first));
        assert_eq!(registry.listener_count(EventName::Tweet), 1);

        registry.fire(EventName::Tweet, &payload());
        assert_eq!(*calls.lock().unwrap(), vec![2]);
    }

    #[test]
    fn count_listeners_per_event() {
        let registry = EventRegistry::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        assert_eq!(registry.listener_count(EventName::Tweet), 0);

        registry.register(EventName::Tweet, recording_listener(&calls, 1));
        registry.register(EventName::Tweet, recording_listener(&calls, 2));
        registry.register(EventName::Delete, recording_listener(&calls, 3));

        assert_eq!(registry.listener_count(EventName::Tweet), 2);
        assert_eq!(registry.listener_count(EventName::Delete), 1);
    }

    #[test]
    fn isolate_a_panicking_listener() {
        let registry = EventRegistry::new();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let faults = Arc::new(Mutex::new(Vec::new()));

        {
            let faults = faults.clone();
            registry.set_fault_handler(Arc::new(move |fault: &ListenerFault| {
                faults.lock().unwrap().push(fault.clone());
            }));
        }

        registry.register(EventName::Tweet, recording_listener(&calls, 1));
        let panicking = registry.register(
            EventName::Tweet,
            Arc::new(|_| panic!("listener went sideways")),
        );
        registry.register(EventName::Tweet, recording_listener(&calls, 3));

        assert!(registry.fire(EventName::Tweet, &payload()));

        assert_eq!(*calls.lock().unwrap(), vec![1, 3]);
        let faults = faults.lock().unwrap();
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].event, EventName::Tweet);
        assert_eq!(faults[0].listener_id, panicking.id);
        assert_eq!(faults[0].details.as_deref(), Some("listener went sideways"));
    }
}
