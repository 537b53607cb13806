//! Single-key shortcuts.
//!
//! | Key | Action |
//! |-----|--------|
//! | `e` / `k` / `l` | English / Korean / toggle language |
//! | `a` / `s` / `p` / `c` | about / services / portfolio / clients |
//! | `b` | back to the home view |
//! | `m` | mute or unmute audio |
//!
//! Navigation goes through the [`Router`]; muting is a view concern and is
//! handed back to the caller as [`KeyOutcome::ToggleMute`].

use crate::error::QuadrantResult;
use crate::models::{Language, Section};
use crate::router::{build_path, Router};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    English,
    Korean,
    ToggleLanguage,
    Open(Section),
    Home,
    ToggleMute,
}

impl Shortcut {
    pub const ALL: [Shortcut; 9] = [
        Shortcut::English,
        Shortcut::Korean,
        Shortcut::ToggleLanguage,
        Shortcut::Open(Section::About),
        Shortcut::Open(Section::Services),
        Shortcut::Open(Section::Portfolio),
        Shortcut::Open(Section::Clients),
        Shortcut::Home,
        Shortcut::ToggleMute,
    ];

    /// Map a `KeyboardEvent.key` value to a shortcut, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "e" => Some(Shortcut::English),
            "k" => Some(Shortcut::Korean),
            "l" => Some(Shortcut::ToggleLanguage),
            "a" => Some(Shortcut::Open(Section::About)),
            "s" => Some(Shortcut::Open(Section::Services)),
            "p" => Some(Shortcut::Open(Section::Portfolio)),
            "c" => Some(Shortcut::Open(Section::Clients)),
            "b" => Some(Shortcut::Home),
            "m" => Some(Shortcut::ToggleMute),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            Shortcut::English => 'e',
            Shortcut::Korean => 'k',
            Shortcut::ToggleLanguage => 'l',
            Shortcut::Open(Section::About) => 'a',
            Shortcut::Open(Section::Services) => 's',
            Shortcut::Open(Section::Portfolio) => 'p',
            Shortcut::Open(Section::Clients) => 'c',
            Shortcut::Home => 'b',
            Shortcut::ToggleMute => 'm',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Shortcut::English => "English",
            Shortcut::Korean => "Korean",
            Shortcut::ToggleLanguage => "Toggle language",
            Shortcut::Open(Section::About) => "About",
            Shortcut::Open(Section::Services) => "Services",
            Shortcut::Open(Section::Portfolio) => "Portfolio",
            Shortcut::Open(Section::Clients) => "Clients",
            Shortcut::Home => "Back to main",
            Shortcut::ToggleMute => "Mute / unmute",
        }
    }
}

/// What the page is doing when the key arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// Focus is in an input, textarea or contenteditable element
    pub typing_in_field: bool,
    /// The shortcut help modal is open and handles its own keys
    pub hotkey_modal_open: bool,
    /// The portfolio modal is open; `b` closes it instead
    pub portfolio_modal_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a shortcut here; let the browser have the key.
    Ignored,
    Navigated,
    /// The caller should flip the audio mute state.
    ToggleMute,
}

impl KeyOutcome {
    /// Whether the caller should `preventDefault()` the key event.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// Handle one key press against `router`.
pub fn dispatch(router: &Router, key: &str, ctx: KeyContext) -> QuadrantResult<KeyOutcome> {
    if ctx.typing_in_field || ctx.hotkey_modal_open {
        return Ok(KeyOutcome::Ignored);
    }

    let Some(shortcut) = Shortcut::from_key(key) else {
        return Ok(KeyOutcome::Ignored);
    };

    let language = router.state().get_state().language;
    tracing::debug!(key, ?shortcut, "Keyboard shortcut");

    match shortcut {
        Shortcut::English => router.switch_language(Language::En)?,
        Shortcut::Korean => router.switch_language(Language::Ko)?,
        Shortcut::ToggleLanguage => router.switch_language(language.toggled())?,
        Shortcut::Open(section) => router.navigate(&build_path(Some(section), language, None), false)?,
        Shortcut::Home => {
            if ctx.portfolio_modal_open {
                return Ok(KeyOutcome::Ignored);
            }
            router.navigate(&build_path(None, language, None), false)?
        }
        Shortcut::ToggleMute => return Ok(KeyOutcome::ToggleMute),
    }

    Ok(KeyOutcome::Navigated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryDocument, MemoryHistory};
    use crate::state::{AppPhase, StateManager};
    use std::rc::Rc;

    fn router_at(path: &str) -> (Rc<Router>, MemoryHistory) {
        let history = MemoryHistory::new(path);
        let router = Rc::new(Router::new(
            Rc::new(history.clone()),
            Rc::new(MemoryDocument::with_browser_language("ko-KR")),
            StateManager::new(),
        ));
        router.init();
        (router, history)
    }

    #[test]
    fn test_from_key_is_case_insensitive() {
        assert_eq!(Shortcut::from_key("E"), Some(Shortcut::English));
        assert_eq!(Shortcut::from_key("p"), Some(Shortcut::Open(Section::Portfolio)));
        assert_eq!(Shortcut::from_key("Escape"), None);
        assert_eq!(Shortcut::from_key(""), None);
    }

    #[test]
    fn test_key_round_trips() {
        for shortcut in Shortcut::ALL {
            assert_eq!(Shortcut::from_key(&shortcut.key().to_string()), Some(shortcut));
            assert!(!shortcut.description().is_empty());
        }
    }

    #[test]
    fn test_section_key_navigates_in_current_language() {
        let (router, history) = router_at("/en/");
        let outcome = dispatch(&router, "s", KeyContext::default()).unwrap();

        assert_eq!(outcome, KeyOutcome::Navigated);
        assert!(outcome.prevents_default());
        assert_eq!(history.current_path(), "/en/services");
        assert_eq!(router.state().get_state().app_phase, AppPhase::Expanding);
    }

    #[test]
    fn test_section_key_drops_portfolio_slug() {
        let (router, history) = router_at("/portfolio/acme");
        dispatch(&router, "p", KeyContext::default()).unwrap();
        assert_eq!(history.current_path(), "/portfolio");
    }

    #[test]
    fn test_toggle_language_preserves_slug() {
        let (router, history) = router_at("/portfolio/acme");
        dispatch(&router, "l", KeyContext::default()).unwrap();
        assert_eq!(history.current_path(), "/en/portfolio/acme");

        dispatch(&router, "L", KeyContext::default()).unwrap();
        assert_eq!(history.current_path(), "/portfolio/acme");
    }

    #[test]
    fn test_explicit_language_keys() {
        let (router, history) = router_at("/about");
        dispatch(&router, "e", KeyContext::default()).unwrap();
        assert_eq!(history.current_path(), "/en/about");
        dispatch(&router, "k", KeyContext::default()).unwrap();
        assert_eq!(history.current_path(), "/about");
    }

    #[test]
    fn test_home_key() {
        let (router, history) = router_at("/en/clients");
        dispatch(&router, "b", KeyContext::default()).unwrap();
        assert_eq!(history.current_path(), "/en/");
        assert_eq!(router.state().get_state().app_phase, AppPhase::Idle);
    }

    #[test]
    fn test_home_key_left_to_open_portfolio_modal() {
        let (router, history) = router_at("/portfolio/acme");
        let ctx = KeyContext {
            portfolio_modal_open: true,
            ..Default::default()
        };
        assert_eq!(dispatch(&router, "b", ctx).unwrap(), KeyOutcome::Ignored);
        assert_eq!(history.current_path(), "/portfolio/acme");
    }

    #[test]
    fn test_keys_ignored_while_typing_or_in_hotkey_modal() {
        let (router, history) = router_at("/");
        let typing = KeyContext {
            typing_in_field: true,
            ..Default::default()
        };
        let modal = KeyContext {
            hotkey_modal_open: true,
            ..Default::default()
        };

        assert_eq!(dispatch(&router, "a", typing).unwrap(), KeyOutcome::Ignored);
        assert_eq!(dispatch(&router, "a", modal).unwrap(), KeyOutcome::Ignored);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_mute_is_returned_to_caller() {
        let (router, history) = router_at("/about");
        let outcome = dispatch(&router, "m", KeyContext::default()).unwrap();
        assert_eq!(outcome, KeyOutcome::ToggleMute);
        assert!(outcome.prevents_default());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let (router, _) = router_at("/");
        let outcome = dispatch(&router, "x", KeyContext::default()).unwrap();
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert!(!outcome.prevents_default());
    }
}
