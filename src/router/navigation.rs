//! The router: history in, application state out.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use super::path::{build_path, parse_route};
use super::transition::classify;
use crate::config::RouterConfig;
use crate::error::QuadrantResult;
use crate::models::{Language, Route};
use crate::state::{ApplicationState, StateManager, StatePatch};
use crate::traits::{DocumentHost, NavigationProvider};

/// Maps the URL to application state and owns history manipulation.
///
/// The router is the only writer of the [`StateManager`] it is given.
/// Everything is synchronous: `navigate` returns after every subscriber
/// has seen the new state.
///
/// # Example
///
/// ```ignore
/// let history = MemoryHistory::new("/");
/// let router = Rc::new(Router::new(
///     Rc::new(history.clone()),
///     Rc::new(MemoryDocument::with_browser_language("ko-KR")),
///     StateManager::new(),
/// ));
/// router.init();
/// router.navigate("/about", false)?;
/// assert_eq!(router.state().get_state().app_phase, AppPhase::Expanding);
/// ```
pub struct Router {
    history: Rc<dyn NavigationProvider>,
    document: Rc<dyn DocumentHost>,
    state: StateManager,
    config: RouterConfig,
    is_initial_load: Cell<bool>,
    has_detected_language: Cell<bool>,
    initialized: Cell<bool>,
}

impl Router {
    pub fn new(
        history: Rc<dyn NavigationProvider>,
        document: Rc<dyn DocumentHost>,
        state: StateManager,
    ) -> Self {
        Self {
            history,
            document,
            state,
            config: RouterConfig::default(),
            is_initial_load: Cell::new(true),
            has_detected_language: Cell::new(false),
            initialized: Cell::new(false),
        }
    }

    pub fn with_config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// The store this router writes to.
    pub fn state(&self) -> &StateManager {
        &self.state
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// True until the first route has been handled.
    pub fn is_initial_load(&self) -> bool {
        self.is_initial_load.get()
    }

    /// The route for the host's current path.
    pub fn current_route(&self) -> Route {
        parse_route(&self.history.current_path())
    }

    /// Start routing: scroll restoration, the one-shot language redirect,
    /// the back/forward listener, then the first route.
    ///
    /// Host failures here are logged, not returned; the page still renders
    /// whatever route the host reports. Calling `init` again only
    /// re-resolves the current route.
    pub fn init(self: &Rc<Self>) -> ApplicationState {
        if self.initialized.replace(true) {
            tracing::warn!("Router already initialized; re-resolving current route");
            return self.handle_route();
        }

        if self.config.manual_scroll_restoration {
            if let Err(err) = self.history.set_manual_scroll_restoration() {
                tracing::warn!("Failed to disable scroll restoration: {}", err);
            }
        }

        if let Err(err) = self.detect_initial_language() {
            tracing::warn!("Language redirect failed: {}", err);
        }

        let router = Rc::downgrade(self);
        let registered = self.history.on_pop_state(Box::new(move || {
            if let Some(router) = router.upgrade() {
                router.handle_pop_state();
            }
        }));
        if let Err(err) = registered {
            tracing::warn!("Back/forward navigation will not update state: {}", err);
        }

        self.handle_route()
    }

    /// Redirect the bare root to `/en/` once per session when the browser
    /// language is not Korean. Returns whether a redirect happened.
    pub fn detect_initial_language(&self) -> QuadrantResult<bool> {
        if !self.config.detect_browser_language || self.has_detected_language.get() {
            return Ok(false);
        }

        let path = self.history.current_path();
        if !path.is_empty() && path != "/" {
            return Ok(false);
        }

        let browser_language = self.document.browser_language();
        let is_korean = browser_language
            .as_deref()
            .map(Language::is_korean_tag)
            .unwrap_or(false);
        if is_korean {
            return Ok(false);
        }

        self.has_detected_language.set(true);
        tracing::info!(
            browser_language = browser_language.as_deref().unwrap_or("unknown"),
            "Redirecting to English home"
        );
        self.navigate(&build_path(None, Language::En, None), true)?;
        Ok(true)
    }

    /// Push (or replace) a history entry for `path` and resolve it.
    ///
    /// If the host rejects the entry nothing is resolved and the state is
    /// left untouched.
    pub fn navigate(&self, path: &str, replace: bool) -> QuadrantResult<()> {
        let route = parse_route(path);
        if replace {
            self.history.replace_state(&route, path)?;
        } else {
            self.history.push_state(&route, path)?;
        }
        self.handle_route();
        Ok(())
    }

    /// Navigate to a route's canonical path.
    pub fn navigate_to(&self, route: &Route, replace: bool) -> QuadrantResult<()> {
        self.navigate(&route.path(), replace)
    }

    /// Resolve the host's current path into application state.
    pub fn handle_route(&self) -> ApplicationState {
        let path = self.history.current_path();
        let route = parse_route(&path);
        let previous = self.state.get_state();

        if let Err(err) = self.document.set_language_attribute(route.language().code()) {
            tracing::warn!("Failed to set document language: {}", err);
        }

        let transition = classify(&previous, &route, self.is_initial_load.get());
        let phase = transition.phase();
        tracing::debug!(
            path = %path,
            transition = transition.as_str(),
            phase = phase.as_str(),
            "Route resolved"
        );

        self.state.set_state(StatePatch::from_route(&route, phase));
        self.is_initial_load.set(false);

        self.state.get_state()
    }

    /// Entry point for back/forward navigation.
    pub fn handle_pop_state(&self) -> ApplicationState {
        tracing::debug!("popstate");
        self.handle_route()
    }

    /// Show the current section (and portfolio item) in another language.
    pub fn switch_language(&self, language: Language) -> QuadrantResult<()> {
        let current = self.state.get_state();
        let path = build_path(
            current.current_section,
            language,
            current.portfolio_slug.as_deref(),
        );
        self.navigate(&path, false)
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("is_initial_load", &self.is_initial_load.get())
            .field("has_detected_language", &self.has_detected_language.get())
            .field("initialized", &self.initialized.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryDocument, MemoryHistory};
    use crate::error::{NavigationError, QuadrantError};
    use crate::models::Section;
    use crate::state::AppPhase;

    fn setup(path: &str, browser: &str) -> (Rc<Router>, MemoryHistory, MemoryDocument) {
        let history = MemoryHistory::new(path);
        let document = MemoryDocument::with_browser_language(browser);
        let router = Rc::new(Router::new(
            Rc::new(history.clone()),
            Rc::new(document.clone()),
            StateManager::new(),
        ));
        (router, history, document)
    }

    #[test]
    fn test_first_route_deep_link_is_expanded() {
        let (router, _, _) = setup("/about", "ko-KR");
        assert!(router.is_initial_load());

        let state = router.handle_route();

        assert_eq!(state.current_section, Some(Section::About));
        assert_eq!(state.app_phase, AppPhase::Expanded);
        assert!(!router.is_initial_load());
    }

    #[test]
    fn test_navigate_from_home_to_section_is_expanding() {
        let (router, history, _) = setup("/", "ko-KR");
        router.init();

        router.navigate("/portfolio", false).unwrap();

        let state = router.state().get_state();
        assert_eq!(state.current_section, Some(Section::Portfolio));
        assert_eq!(state.app_phase, AppPhase::Expanding);
        assert_eq!(history.len(), 2);
        assert_eq!(
            history.current_entry().route(),
            Some(Route::section(Section::Portfolio, Language::Ko))
        );
    }

    #[test]
    fn test_switch_language_keeps_section_and_skips_animation() {
        let (router, history, document) = setup("/about", "ko-KR");
        router.init();

        router.switch_language(Language::En).unwrap();

        let state = router.state().get_state();
        assert_eq!(history.current_path(), "/en/about");
        assert_eq!(state.language, Language::En);
        assert_eq!(state.current_section, Some(Section::About));
        assert_eq!(state.app_phase, AppPhase::Expanded);
        assert_eq!(document.lang_attribute().as_deref(), Some("en"));
    }

    #[test]
    fn test_switch_language_keeps_portfolio_slug() {
        let (router, history, _) = setup("/portfolio/acme", "ko");
        router.init();

        router.switch_language(Language::En).unwrap();
        assert_eq!(history.current_path(), "/en/portfolio/acme");
        assert_eq!(
            router.state().get_state().portfolio_slug.as_deref(),
            Some("acme")
        );
    }

    #[test]
    fn test_replace_does_not_grow_history() {
        let (router, history, _) = setup("/", "ko");
        router.init();

        router.navigate("/clients", true).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_path(), "/clients");
    }

    #[test]
    fn test_push_failure_leaves_state_untouched() {
        let (router, history, _) = setup("/", "ko");
        router.init();
        let before = router.state().get_state();

        history.set_push_should_fail(true);
        let err = router.navigate("/about", false).unwrap_err();

        assert!(matches!(
            err,
            QuadrantError::Navigation(NavigationError::PushFailed { .. })
        ));
        assert_eq!(router.state().get_state(), before);
    }

    #[test]
    fn test_redirects_non_korean_browser_once() {
        let (router, history, _) = setup("/", "en-US");

        let state = router.init();

        assert_eq!(history.current_path(), "/en/");
        assert_eq!(history.len(), 1);
        assert_eq!(state.language, Language::En);
        assert_eq!(state.app_phase, AppPhase::Idle);

        history.replace_state(&Route::home(Language::Ko), "/").unwrap();
        assert!(!router.detect_initial_language().unwrap());
        assert_eq!(history.current_path(), "/");
    }

    #[test]
    fn test_no_redirect_for_korean_browser() {
        let (router, history, _) = setup("/", "ko-KR");
        router.init();
        assert_eq!(history.current_path(), "/");
        assert_eq!(router.state().get_state().language, Language::Ko);
    }

    #[test]
    fn test_no_redirect_away_from_root() {
        let (router, history, _) = setup("/about", "en-US");
        router.init();
        assert_eq!(history.current_path(), "/about");
    }

    #[test]
    fn test_unknown_browser_language_redirects() {
        let history = MemoryHistory::new("/");
        let router = Rc::new(Router::new(
            Rc::new(history.clone()),
            Rc::new(MemoryDocument::new()),
            StateManager::new(),
        ));
        router.init();
        assert_eq!(history.current_path(), "/en/");
    }

    #[test]
    fn test_detection_disabled_by_config() {
        let history = MemoryHistory::new("/");
        let router = Rc::new(
            Router::new(
                Rc::new(history.clone()),
                Rc::new(MemoryDocument::with_browser_language("en-US")),
                StateManager::new(),
            )
            .with_config(RouterConfig::new().with_language_detection(false)),
        );
        router.init();
        assert_eq!(history.current_path(), "/");
    }

    #[test]
    fn test_init_sets_manual_scroll_restoration() {
        let (router, history, _) = setup("/", "ko");
        router.init();
        assert!(history.is_scroll_restoration_manual());
    }

    #[test]
    fn test_back_button_resolves_previous_route() {
        let (router, history, _) = setup("/", "ko");
        router.init();
        router.navigate("/about", false).unwrap();
        router.navigate("/services", false).unwrap();

        assert!(history.back());
        let state = router.state().get_state();
        assert_eq!(state.current_section, Some(Section::About));
        assert_eq!(state.app_phase, AppPhase::Expanding);

        assert!(history.back());
        assert_eq!(router.state().get_state().app_phase, AppPhase::Idle);
    }

    #[test]
    fn test_second_init_does_not_register_twice() {
        let (router, history, _) = setup("/", "ko");
        router.init();
        router.init();
        assert_eq!(history.listener_count(), 1);
    }

    #[test]
    fn test_pop_state_after_router_dropped_is_ignored() {
        let (router, history, _) = setup("/", "ko");
        router.init();
        router.navigate("/about", false).unwrap();
        let state = router.state().clone();
        drop(router);

        assert!(history.back());
        assert_eq!(state.get_state().current_section, Some(Section::About));
    }

    #[test]
    fn test_document_failure_does_not_block_routing() {
        let (router, _, document) = setup("/about", "ko");
        document.set_lang_should_fail(true);

        let state = router.handle_route();
        assert_eq!(state.current_section, Some(Section::About));
    }
}
