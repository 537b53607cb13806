//! In-memory document host.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::NavigationError;
use crate::traits::DocumentHost;

#[derive(Debug, Default)]
struct Inner {
    lang_attribute: Option<String>,
    lang_updates: usize,
    browser_language: Option<String>,
    set_lang_should_fail: bool,
}

/// In-memory [`DocumentHost`] that records the `lang` attribute.
///
/// Clones share the same document.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryDocument {
    /// A document with no known browser language.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document whose browser reports `tag` (e.g. `ko-KR`, `en-US`).
    pub fn with_browser_language(tag: impl Into<String>) -> Self {
        let document = Self::new();
        document.inner.borrow_mut().browser_language = Some(tag.into());
        document
    }

    /// Current value of the `lang` attribute.
    pub fn lang_attribute(&self) -> Option<String> {
        self.inner.borrow().lang_attribute.clone()
    }

    /// How many times the `lang` attribute was written.
    pub fn lang_updates(&self) -> usize {
        self.inner.borrow().lang_updates
    }

    /// Make attribute writes fail.
    pub fn set_lang_should_fail(&self, should_fail: bool) {
        self.inner.borrow_mut().set_lang_should_fail = should_fail;
    }
}

impl DocumentHost for MemoryDocument {
    fn set_language_attribute(&self, code: &str) -> Result<(), NavigationError> {
        let mut inner = self.inner.borrow_mut();
        if inner.set_lang_should_fail {
            return Err(NavigationError::DocumentUnavailable {
                message: "Mock document failure".to_string(),
            });
        }
        inner.lang_attribute = Some(code.to_string());
        inner.lang_updates += 1;
        Ok(())
    }

    fn browser_language(&self) -> Option<String> {
        self.inner.borrow().browser_language.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_blank() {
        let document = MemoryDocument::new();
        assert_eq!(document.lang_attribute(), None);
        assert_eq!(document.browser_language(), None);
        assert_eq!(document.lang_updates(), 0);
    }

    #[test]
    fn test_set_language_attribute_records_writes() {
        let document = MemoryDocument::with_browser_language("en-US");
        document.set_language_attribute("en").unwrap();
        document.set_language_attribute("en").unwrap();

        assert_eq!(document.lang_attribute().as_deref(), Some("en"));
        assert_eq!(document.lang_updates(), 2);
        assert_eq!(document.browser_language().as_deref(), Some("en-US"));
    }

    #[test]
    fn test_clones_share_document() {
        let document = MemoryDocument::new();
        let clone = document.clone();
        clone.set_language_attribute("ko").unwrap();
        assert_eq!(document.lang_attribute().as_deref(), Some("ko"));
    }

    #[test]
    fn test_failure_injection() {
        let document = MemoryDocument::new();
        document.set_lang_should_fail(true);
        assert!(document.set_language_attribute("ko").is_err());
        assert_eq!(document.lang_attribute(), None);
    }
}
