//! Browser host built on `web-sys`.
//!
//! Only compiled with the `web` feature, for `wasm32-unknown-unknown`.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ScrollRestoration, Window};

use crate::error::NavigationError;
use crate::models::Route;
use crate::traits::{DocumentHost, NavigationProvider, PopStateListener};

/// `window.history` and `window.location`.
pub struct WebHistory {
    window: Window,
    // Keeps the popstate closures alive for as long as the router is.
    listeners: RefCell<Vec<Closure<dyn FnMut()>>>,
}

impl WebHistory {
    pub fn new() -> Result<Self, NavigationError> {
        let window = web_sys::window().ok_or_else(|| NavigationError::HistoryUnavailable {
            message: "no global window".to_string(),
        })?;
        Ok(Self {
            window,
            listeners: RefCell::new(Vec::new()),
        })
    }

    fn history(&self) -> Result<web_sys::History, NavigationError> {
        self.window
            .history()
            .map_err(|err| NavigationError::HistoryUnavailable {
                message: js_message(&err),
            })
    }
}

impl NavigationProvider for WebHistory {
    fn current_path(&self) -> String {
        self.window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }

    fn push_state(&self, route: &Route, path: &str) -> Result<(), NavigationError> {
        let payload = route_payload(route)?;
        self.history()?
            .push_state_with_url(&payload, "", Some(path))
            .map_err(|err| NavigationError::PushFailed {
                path: path.to_string(),
                message: js_message(&err),
            })
    }

    fn replace_state(&self, route: &Route, path: &str) -> Result<(), NavigationError> {
        let payload = route_payload(route)?;
        self.history()?
            .replace_state_with_url(&payload, "", Some(path))
            .map_err(|err| NavigationError::ReplaceFailed {
                path: path.to_string(),
                message: js_message(&err),
            })
    }

    fn on_pop_state(&self, mut listener: PopStateListener) -> Result<(), NavigationError> {
        let closure = Closure::<dyn FnMut()>::new(move || listener());
        self.window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .map_err(|err| NavigationError::ListenerFailed {
                message: js_message(&err),
            })?;
        self.listeners.borrow_mut().push(closure);
        Ok(())
    }

    fn set_manual_scroll_restoration(&self) -> Result<(), NavigationError> {
        self.history()?
            .set_scroll_restoration(ScrollRestoration::Manual)
            .map_err(|err| NavigationError::HistoryUnavailable {
                message: js_message(&err),
            })
    }
}

/// `document.documentElement` and `navigator.language`.
pub struct WebDocument {
    window: Window,
}

impl WebDocument {
    pub fn new() -> Result<Self, NavigationError> {
        let window = web_sys::window().ok_or_else(|| NavigationError::DocumentUnavailable {
            message: "no global window".to_string(),
        })?;
        Ok(Self { window })
    }
}

impl DocumentHost for WebDocument {
    fn set_language_attribute(&self, code: &str) -> Result<(), NavigationError> {
        let root = self
            .window
            .document()
            .and_then(|document| document.document_element())
            .ok_or_else(|| NavigationError::DocumentUnavailable {
                message: "no document element".to_string(),
            })?;
        root.set_attribute("lang", code)
            .map_err(|err| NavigationError::DocumentUnavailable {
                message: js_message(&err),
            })
    }

    fn browser_language(&self) -> Option<String> {
        self.window.navigator().language()
    }
}

fn route_payload(route: &Route) -> Result<JsValue, NavigationError> {
    let json = serde_json::to_string(route)?;
    js_sys::JSON::parse(&json).map_err(|err| NavigationError::StatePayload {
        message: js_message(&err),
    })
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
