use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Language, Route, Section};

/// Animation phase of the quadrant grid.
///
/// `Expanding` plays the section enter animation (and its audio cue);
/// `Expanded` shows the section without replaying either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppPhase {
    #[default]
    Idle,
    Expanding,
    Expanded,
}

impl AppPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppPhase::Idle => "idle",
            AppPhase::Expanding => "expanding",
            AppPhase::Expanded => "expanded",
        }
    }

    /// Whether views should play enter animations for this phase.
    pub fn should_animate(&self) -> bool {
        matches!(self, AppPhase::Expanding)
    }

    /// Whether a section is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, AppPhase::Idle)
    }
}

impl fmt::Display for AppPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the page-session state handed to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationState {
    pub current_section: Option<Section>,
    pub language: Language,
    #[serde(rename = "appState")]
    pub app_phase: AppPhase,
    pub portfolio_slug: Option<String>,
}

impl ApplicationState {
    /// The route this state mirrors.
    pub fn route(&self) -> Route {
        Route::new(
            self.current_section,
            self.language,
            self.portfolio_slug.clone(),
        )
    }

    /// Merge a patch into this state. Fields the patch leaves unset are kept.
    pub fn apply(&mut self, patch: StatePatch) {
        if let Some(section) = patch.current_section {
            self.current_section = section;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(phase) = patch.app_phase {
            self.app_phase = phase;
        }
        if let Some(slug) = patch.portfolio_slug {
            self.portfolio_slug = slug;
        }
    }
}

/// Partial update for [`ApplicationState`].
///
/// The outer `Option` of each field means "set this field"; for the
/// section and slug the inner `Option` is the value, so `Some(None)`
/// clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub current_section: Option<Option<Section>>,
    pub language: Option<Language>,
    pub app_phase: Option<AppPhase>,
    pub portfolio_slug: Option<Option<String>>,
}

impl StatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch that sets every field from a resolved route.
    pub fn from_route(route: &Route, phase: AppPhase) -> Self {
        Self {
            current_section: Some(route.current_section()),
            language: Some(route.language()),
            app_phase: Some(phase),
            portfolio_slug: Some(route.portfolio_slug().map(str::to_string)),
        }
    }

    pub fn with_section(mut self, section: Option<Section>) -> Self {
        self.current_section = Some(section);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_app_phase(mut self, phase: AppPhase) -> Self {
        self.app_phase = Some(phase);
        self
    }

    pub fn with_portfolio_slug(mut self, slug: Option<String>) -> Self {
        self.portfolio_slug = Some(slug);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
