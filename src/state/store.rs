//! Observable store for [`ApplicationState`].
//!
//! `StateManager` is a cheap, clonable handle to a single store. Views receive
//! a clone at construction time and subscribe to it; only the router writes.
//! Everything runs on one thread: notification is a synchronous fan-out in
//! subscription order, with no batching and no deduplication.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use super::app_state::{ApplicationState, StatePatch};

type Callback = Rc<dyn Fn(&ApplicationState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SubscriberId(u64);

struct Inner {
    state: RefCell<ApplicationState>,
    subscribers: RefCell<Vec<(SubscriberId, Callback)>>,
    next_id: Cell<u64>,
    // States merged while a fan-out is running, delivered in order after it.
    pending: RefCell<VecDeque<ApplicationState>>,
    notifying: Cell<bool>,
}

impl Inner {
    fn is_subscribed(&self, id: SubscriberId) -> bool {
        self.subscribers.borrow().iter().any(|(sid, _)| *sid == id)
    }

    fn remove(&self, id: SubscriberId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }
}

/// Handle to the shared application state store.
#[derive(Clone)]
pub struct StateManager {
    inner: Rc<Inner>,
}

impl StateManager {
    /// Create a store holding the default (idle, Korean, home) state.
    pub fn new() -> Self {
        Self::with_state(ApplicationState::default())
    }

    /// Create a store with an explicit initial state.
    pub fn with_state(state: ApplicationState) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn get_state(&self) -> ApplicationState {
        self.inner.state.borrow().clone()
    }

    /// Merge `patch` into the current state and notify every subscriber.
    ///
    /// Subscribers are called in subscription order with the merged state.
    /// The subscriber list is captured before the first call: callbacks
    /// added during notification wait for the next `set_state`, callbacks
    /// removed during notification are skipped. A panicking subscriber is
    /// logged and the rest are still notified.
    ///
    /// A `set_state` made from inside a subscriber is merged at once, but
    /// its notification is delivered after the current fan-out finishes.
    /// Every subscriber therefore sees states in the order they were set,
    /// and the last state it sees is the one the store holds.
    pub fn set_state(&self, patch: StatePatch) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            state.apply(patch);
            state.clone()
        };
        self.inner.pending.borrow_mut().push_back(snapshot);

        if self.inner.notifying.replace(true) {
            return;
        }
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(state) = next else {
                break;
            };
            self.notify(&state);
        }
        self.inner.notifying.set(false);
    }

    fn notify(&self, state: &ApplicationState) {
        let subscribers: Vec<(SubscriberId, Callback)> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in subscribers {
            if !self.inner.is_subscribed(id) {
                continue;
            }
            let result = panic::catch_unwind(AssertUnwindSafe(|| callback(state)));
            if let Err(payload) = result {
                tracing::error!(
                    subscriber = id.0,
                    "State subscriber panicked: {}",
                    panic_message(payload.as_ref())
                );
            }
        }
    }

    /// Register `callback` for every future [`set_state`](Self::set_state).
    ///
    /// The callback is not invoked with the current state; call
    /// [`get_state`](Self::get_state) for the initial value.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ApplicationState) + 'static,
    {
        let id = SubscriberId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        let callback: Callback = Rc::new(callback);
        self.inner.subscribers.borrow_mut().push((id, callback));

        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateManager")
            .field("state", &*self.inner.state.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Registration returned by [`StateManager::subscribe`].
///
/// Dropping the handle does not unsubscribe; call
/// [`unsubscribe`](Self::unsubscribe).
#[derive(Debug, Clone)]
pub struct Subscription {
    id: SubscriberId,
    store: Weak<Inner>,
}

impl Subscription {
    /// Stop receiving updates. Safe to call more than once, and after the
    /// store itself is gone.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.store.upgrade() {
            inner.remove(self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.store
            .upgrade()
            .map(|inner| inner.is_subscribed(self.id))
            .unwrap_or(false)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
