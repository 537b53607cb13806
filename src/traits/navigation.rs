//! Navigation provider trait abstraction.
//!
//! Wraps the parts of the History API the router needs: reading the current
//! path, pushing and replacing entries, and hearing about back/forward.

use crate::error::NavigationError;
use crate::models::Route;

/// Callback fired when the user moves through history (`popstate`).
pub type PopStateListener = Box<dyn FnMut()>;

/// History stack and location of the hosting page.
///
/// Methods take `&self`; implementations own their mutable state the way
/// the browser does. All calls happen on one thread.
///
/// # Example
///
/// ```ignore
/// use quadrant::traits::NavigationProvider;
///
/// fn open<P: NavigationProvider>(history: &P, route: &Route) -> Result<(), NavigationError> {
///     history.push_state(route, &route.path())?;
///     assert_eq!(history.current_path(), route.path());
///     Ok(())
/// }
/// ```
pub trait NavigationProvider {
    /// The current `location.pathname`.
    fn current_path(&self) -> String;

    /// Push a new history entry for `path` carrying `route` as its state.
    fn push_state(&self, route: &Route, path: &str) -> Result<(), NavigationError>;

    /// Replace the current history entry with `path` and `route`.
    fn replace_state(&self, route: &Route, path: &str) -> Result<(), NavigationError>;

    /// Register a listener for back/forward navigation.
    ///
    /// Listeners are not called for `push_state`/`replace_state`.
    fn on_pop_state(&self, listener: PopStateListener) -> Result<(), NavigationError>;

    /// Stop the host from restoring scroll positions on history moves.
    fn set_manual_scroll_restoration(&self) -> Result<(), NavigationError> {
        Ok(())
    }
}
