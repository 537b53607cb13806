//! Common test utilities for integration tests.
//!
//! Builds a router wired to in-memory hosts, the way a page would wire it
//! to `window.history` and `document`.
//!
//! # Example
//!
//! ```ignore
//! use common::TestSite;
//!
//! let site = TestSite::at("/en/about").browser("en-US").start();
//! assert_eq!(site.state().app_phase, AppPhase::Expanded);
//! ```

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use quadrant::prelude::*;

/// A started router plus handles on its hosts.
pub struct TestSite {
    pub router: Rc<Router>,
    pub history: MemoryHistory,
    pub document: MemoryDocument,
}

impl TestSite {
    pub fn at(path: &str) -> TestSiteBuilder {
        TestSiteBuilder {
            path: path.to_string(),
            browser_language: Some("ko-KR".to_string()),
            config: RouterConfig::default(),
        }
    }

    pub fn state(&self) -> ApplicationState {
        self.router.state().get_state()
    }

    pub fn path(&self) -> String {
        self.history.current_path()
    }

    pub fn go(&self, path: &str) {
        self.router
            .navigate(path, false)
            .expect("navigation should succeed");
    }
}

/// Builder for [`TestSite`].
pub struct TestSiteBuilder {
    path: String,
    browser_language: Option<String>,
    config: RouterConfig,
}

impl TestSiteBuilder {
    pub fn browser(mut self, tag: &str) -> Self {
        self.browser_language = Some(tag.to_string());
        self
    }

    pub fn unknown_browser(mut self) -> Self {
        self.browser_language = None;
        self
    }

    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Wire everything up without calling `init`.
    pub fn build(self) -> TestSite {
        let history = MemoryHistory::new(self.path);
        let document = match self.browser_language {
            Some(tag) => MemoryDocument::with_browser_language(tag),
            None => MemoryDocument::new(),
        };
        let router = Rc::new(
            Router::new(
                Rc::new(history.clone()),
                Rc::new(document.clone()),
                StateManager::new(),
            )
            .with_config(self.config),
        );
        TestSite {
            router,
            history,
            document,
        }
    }

    /// Build and `init` the router.
    pub fn start(self) -> TestSite {
        let site = self.build();
        site.router.init();
        site
    }
}

/// Subscribe a recorder of every published state.
pub fn record_states(store: &StateManager) -> (Rc<RefCell<Vec<ApplicationState>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = store.subscribe(move |state| sink.borrow_mut().push(state.clone()));
    (seen, subscription)
}
