//! Section transition classification.
//!
//! Decides the animation phase for each route resolution from the previous
//! state, the new route, and whether this is the first resolution since the
//! page loaded. Nothing older than the previous state is consulted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Route, Section};
use crate::state::{AppPhase, ApplicationState};

/// Why a route resolution produced its phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// No section: the landing view.
    Home,
    /// First resolution after load (deep link); no enter animation.
    Initial,
    /// Same section, different language.
    LanguageOnly,
    /// Portfolio item changed within the portfolio section.
    SlugOnly,
    /// A real move into or within a section.
    Section,
}

impl TransitionKind {
    pub fn phase(&self) -> AppPhase {
        match self {
            TransitionKind::Home => AppPhase::Idle,
            TransitionKind::Initial
            | TransitionKind::LanguageOnly
            | TransitionKind::SlugOnly => AppPhase::Expanded,
            TransitionKind::Section => AppPhase::Expanding,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionKind::Home => "home",
            TransitionKind::Initial => "initial",
            TransitionKind::LanguageOnly => "language_only",
            TransitionKind::SlugOnly => "slug_only",
            TransitionKind::Section => "section",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the move from `prev` to `next`.
pub fn classify(prev: &ApplicationState, next: &Route, is_initial_load: bool) -> TransitionKind {
    if next.is_home() {
        return TransitionKind::Home;
    }
    if is_initial_load {
        return TransitionKind::Initial;
    }

    let same_section = prev.current_section == next.current_section();
    if same_section && prev.language != next.language() {
        return TransitionKind::LanguageOnly;
    }

    let both_portfolio = prev.current_section == Some(Section::Portfolio)
        && next.current_section() == Some(Section::Portfolio);
    if both_portfolio
        && prev.language == next.language()
        && prev.portfolio_slug.as_deref() != next.portfolio_slug()
    {
        return TransitionKind::SlugOnly;
    }

    TransitionKind::Section
}

/// The animation phase for the move from `prev` to `next`.
pub fn classify_transition(prev: &ApplicationState, next: &Route, is_initial_load: bool) -> AppPhase {
    classify(prev, next, is_initial_load).phase()
}
