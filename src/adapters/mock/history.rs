//! In-memory history stack.
//!
//! Behaves like `window.history` for a single tab: pushing drops any forward
//! entries, `back`/`forward` move the cursor and fire pop-state listeners,
//! push/replace never fire them.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::NavigationError;
use crate::models::Route;
use crate::traits::{NavigationProvider, PopStateListener};

/// One history entry: the path and the JSON state stored with it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub path: String,
    pub state: Option<serde_json::Value>,
}

impl HistoryEntry {
    /// The route stored in this entry's state, if it holds one.
    pub fn route(&self) -> Option<Route> {
        self.state
            .as_ref()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

#[derive(Debug)]
struct Inner {
    entries: Vec<HistoryEntry>,
    index: usize,
    manual_scroll_restoration: bool,
    push_should_fail: bool,
    replace_should_fail: bool,
}

/// In-memory [`NavigationProvider`].
///
/// # Example
///
/// ```ignore
/// use quadrant::adapters::MemoryHistory;
///
/// let history = MemoryHistory::new("/");
/// history.push_state(&route, "/about")?;
/// assert_eq!(history.current_path(), "/about");
///
/// history.back();
/// assert_eq!(history.current_path(), "/");
/// ```
#[derive(Clone)]
pub struct MemoryHistory {
    inner: Rc<RefCell<Inner>>,
    listeners: Rc<RefCell<Vec<PopStateListener>>>,
}

impl MemoryHistory {
    /// Create a history whose only entry is `initial_path` with no state.
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                entries: vec![HistoryEntry {
                    path: initial_path.into(),
                    state: None,
                }],
                index: 0,
                manual_scroll_restoration: false,
                push_should_fail: false,
                replace_should_fail: false,
            })),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.inner.borrow().entries.clone()
    }

    /// Path of the current entry.
    pub fn current_path(&self) -> String {
        self.current_entry().path
    }

    pub fn current_entry(&self) -> HistoryEntry {
        let inner = self.inner.borrow();
        inner.entries[inner.index].clone()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the current entry.
    pub fn index(&self) -> usize {
        self.inner.borrow().index
    }

    /// Move `delta` entries through history and fire pop-state listeners.
    ///
    /// Returns `false` (and fires nothing) when the target is out of range
    /// or `delta` is zero.
    pub fn go(&self, delta: isize) -> bool {
        let moved = {
            let mut inner = self.inner.borrow_mut();
            let target = inner
                .index
                .checked_add_signed(delta)
                .filter(|target| delta != 0 && *target < inner.entries.len());
            match target {
                Some(target) => {
                    inner.index = target;
                    true
                }
                None => false,
            }
        };

        if moved {
            self.fire_pop_state();
        }
        moved
    }

    pub fn back(&self) -> bool {
        self.go(-1)
    }

    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Make the next `push_state` calls fail.
    pub fn set_push_should_fail(&self, should_fail: bool) {
        self.inner.borrow_mut().push_should_fail = should_fail;
    }

    /// Make the next `replace_state` calls fail.
    pub fn set_replace_should_fail(&self, should_fail: bool) {
        self.inner.borrow_mut().replace_should_fail = should_fail;
    }

    pub fn is_scroll_restoration_manual(&self) -> bool {
        self.inner.borrow().manual_scroll_restoration
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn fire_pop_state(&self) {
        // Listeners may navigate or register more listeners while running.
        let mut running = std::mem::take(&mut *self.listeners.borrow_mut());
        for listener in running.iter_mut() {
            listener();
        }
        let mut slot = self.listeners.borrow_mut();
        let added = std::mem::take(&mut *slot);
        *slot = running;
        slot.extend(added);
    }
}

impl NavigationProvider for MemoryHistory {
    fn current_path(&self) -> String {
        MemoryHistory::current_path(self)
    }

    fn push_state(&self, route: &Route, path: &str) -> Result<(), NavigationError> {
        let mut inner = self.inner.borrow_mut();
        if inner.push_should_fail {
            return Err(NavigationError::PushFailed {
                path: path.to_string(),
                message: "Mock push failure".to_string(),
            });
        }

        let state = serde_json::to_value(route)?;
        let keep = inner.index + 1;
        inner.entries.truncate(keep);
        inner.entries.push(HistoryEntry {
            path: path.to_string(),
            state: Some(state),
        });
        inner.index = inner.entries.len() - 1;
        Ok(())
    }

    fn replace_state(&self, route: &Route, path: &str) -> Result<(), NavigationError> {
        let mut inner = self.inner.borrow_mut();
        if inner.replace_should_fail {
            return Err(NavigationError::ReplaceFailed {
                path: path.to_string(),
                message: "Mock replace failure".to_string(),
            });
        }

        let state = serde_json::to_value(route)?;
        let index = inner.index;
        inner.entries[index] = HistoryEntry {
            path: path.to_string(),
            state: Some(state),
        };
        Ok(())
    }

    fn on_pop_state(&self, listener: PopStateListener) -> Result<(), NavigationError> {
        self.listeners.borrow_mut().push(listener);
        Ok(())
    }

    fn set_manual_scroll_restoration(&self) -> Result<(), NavigationError> {
        self.inner.borrow_mut().manual_scroll_restoration = true;
        Ok(())
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHistory")
            .field("inner", &*self.inner.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
