use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{ApplicationState, StateManager, Subscription};

/// One published state, with the state it replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateChangeEvent {
    /// When the store notified its subscribers
    pub timestamp: DateTime<Utc>,
    /// Position in the session, starting at 0
    pub sequence: u64,
    /// State before the update
    pub previous: ApplicationState,
    /// State after the update
    pub current: ApplicationState,
}

impl StateChangeEvent {
    /// Whether anything other than the animation phase changed.
    pub fn route_changed(&self) -> bool {
        self.previous.route() != self.current.route()
    }

    /// One-line description for logs.
    pub fn summary(&self) -> String {
        format!(
            "#{} {} -> {} ({})",
            self.sequence,
            self.previous.route(),
            self.current.route(),
            self.current.app_phase
        )
    }
}

/// Records every state change of a [`StateManager`].
#[derive(Debug)]
pub struct TransitionRecorder {
    events: Rc<RefCell<Vec<StateChangeEvent>>>,
    subscription: Subscription,
}

impl TransitionRecorder {
    /// Subscribe to `store`. Only changes after this call are recorded.
    pub fn attach(store: &StateManager) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let previous = RefCell::new(store.get_state());

        let sink = Rc::clone(&events);
        let subscription = store.subscribe(move |state| {
            let before = previous.replace(state.clone());
            let mut events = sink.borrow_mut();
            let sequence = events.len() as u64;
            events.push(StateChangeEvent {
                timestamp: Utc::now(),
                sequence,
                previous: before,
                current: state.clone(),
            });
        });

        Self {
            events,
            subscription,
        }
    }

    pub fn events(&self) -> Vec<StateChangeEvent> {
        self.events.borrow().clone()
    }

    pub fn last(&self) -> Option<StateChangeEvent> {
        self.events.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stop recording. Already recorded events are kept.
    pub fn detach(&self) {
        self.subscription.unsubscribe();
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&*self.events.borrow())
    }
}
