//! Document host trait abstraction.

use crate::error::NavigationError;

/// The document and navigator of the hosting page.
pub trait DocumentHost {
    /// Set the root element's `lang` attribute. Stylesheets key font
    /// selection off it.
    fn set_language_attribute(&self, code: &str) -> Result<(), NavigationError>;

    /// The browser's negotiated language tag (`navigator.language`), if any.
    fn browser_language(&self) -> Option<String>;
}
