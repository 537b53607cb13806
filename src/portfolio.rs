//! Portfolio modal navigation.
//!
//! The modal is driven entirely by the URL: opening an item navigates to
//! `/portfolio/<slug>`, closing navigates back to `/portfolio`. Moving
//! between items is a slug-only transition, so the section does not
//! re-animate.

use serde::{Deserialize, Serialize};

use crate::error::QuadrantResult;
use crate::models::Section;
use crate::router::{build_path, Router};

/// Ordered list of portfolio item slugs, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioCatalog {
    slugs: Vec<String>,
}

#[derive(Deserialize)]
struct ItemId {
    id: String,
}

impl PortfolioCatalog {
    pub fn new<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slugs: slugs.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a catalog from portfolio data: a JSON array of objects with an
    /// `id` field. Other fields are ignored.
    pub fn from_items_json(json: &str) -> serde_json::Result<Self> {
        let items: Vec<ItemId> = serde_json::from_str(json)?;
        Ok(Self::new(items.into_iter().map(|item| item.id)))
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slugs.get(index).map(String::as_str)
    }

    pub fn index_of(&self, slug: &str) -> Option<usize> {
        self.slugs.iter().position(|s| s == slug)
    }

    pub fn slugs(&self) -> &[String] {
        &self.slugs
    }
}

/// Opens, steps through and closes portfolio items via the router.
pub struct PortfolioNavigator<'a> {
    router: &'a Router,
    catalog: &'a PortfolioCatalog,
}

impl<'a> PortfolioNavigator<'a> {
    pub fn new(router: &'a Router, catalog: &'a PortfolioCatalog) -> Self {
        Self { router, catalog }
    }

    /// Catalog position of the item currently shown, if the modal is open
    /// on a known item.
    pub fn current_index(&self) -> Option<usize> {
        let state = self.router.state().get_state();
        if state.current_section != Some(Section::Portfolio) {
            return None;
        }
        state
            .portfolio_slug
            .as_deref()
            .and_then(|slug| self.catalog.index_of(slug))
    }

    /// Open the item at `index`. Returns `false` when out of range.
    pub fn open(&self, index: usize) -> QuadrantResult<bool> {
        let Some(slug) = self.catalog.get(index) else {
            return Ok(false);
        };
        let language = self.router.state().get_state().language;
        self.router.navigate(
            &build_path(Some(Section::Portfolio), language, Some(slug)),
            false,
        )?;
        Ok(true)
    }

    /// Whether [`step`](Self::step) in `direction` would move.
    pub fn can_step(&self, direction: isize) -> bool {
        self.target(direction).is_some()
    }

    /// Move to the previous (`-1`) or next (`1`) item. Does not wrap; with
    /// no item open or at either end this is a no-op returning `false`.
    pub fn step(&self, direction: isize) -> QuadrantResult<bool> {
        match self.target(direction) {
            Some(index) => self.open(index),
            None => Ok(false),
        }
    }

    /// Close the modal by returning to the portfolio listing.
    pub fn close(&self) -> QuadrantResult<()> {
        let language = self.router.state().get_state().language;
        self.router
            .navigate(&build_path(Some(Section::Portfolio), language, None), false)
    }

    fn target(&self, direction: isize) -> Option<usize> {
        let current = self.current_index()?;
        let target = current.checked_add_signed(direction)?;
        (direction != 0 && target < self.catalog.len()).then_some(target)
    }
}
