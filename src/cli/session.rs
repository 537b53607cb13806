//! Replays a navigation session against in-memory hosts.
//!
//! The first step, if it is a path, is the page the browser loads; every
//! later step is a user action. Each step reports the URL and application
//! state it left behind.

use std::fmt::Write as _;
use std::rc::Rc;

use serde::Serialize;

use super::args::{ReplayOptions, Step};
use crate::adapters::{MemoryDocument, MemoryHistory};
use crate::config::RouterConfig;
use crate::debug::{StateChangeEvent, TransitionRecorder};
use crate::error::QuadrantResult;
use crate::keyboard::{self, KeyContext, KeyOutcome};
use crate::models::Section;
use crate::router::Router;
use crate::state::{ApplicationState, StateManager};

/// Result of one replayed step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    /// The step as typed on the command line
    pub step: String,
    /// What the step did
    pub outcome: &'static str,
    /// Browser URL after the step
    pub path: String,
    pub state: ApplicationState,
}

/// Everything a replay produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub steps: Vec<StepReport>,
    /// Every state the store published, in order
    pub events: Vec<StateChangeEvent>,
}

impl SessionReport {
    /// One line per step, followed by the state change log.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for report in &self.steps {
            let section = report
                .state
                .current_section
                .map(|s| s.as_str())
                .unwrap_or("home");
            let _ = write!(
                out,
                "{:<20} {:<10} {:<28} section={} lang={} phase={}",
                report.step,
                report.outcome,
                report.path,
                section,
                report.state.language,
                report.state.app_phase,
            );
            if let Some(slug) = &report.state.portfolio_slug {
                let _ = write!(out, " slug={}", slug);
            }
            out.push('\n');
        }

        if !self.events.is_empty() {
            out.push_str("\nstate changes:\n");
            for event in &self.events {
                let _ = writeln!(out, "  {}", event.summary());
            }
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Run `options` and collect a report.
///
/// `--browser-lang` sets the simulated `navigator.language`, and
/// `--no-detect` overrides whatever `config` says about the redirect.
pub fn run_replay(options: &ReplayOptions, config: RouterConfig) -> QuadrantResult<SessionReport> {
    let config = if options.no_detect {
        config.with_language_detection(false)
    } else {
        config
    };

    let history = MemoryHistory::new(options.initial_path());
    let document = match &options.browser_language {
        Some(tag) => MemoryDocument::with_browser_language(tag.as_str()),
        None => MemoryDocument::new(),
    };
    let state = StateManager::new();
    let recorder = TransitionRecorder::attach(&state);

    let router = Rc::new(
        Router::new(Rc::new(history.clone()), Rc::new(document), state).with_config(config),
    );

    let mut steps = Vec::with_capacity(options.steps.len() + 1);
    let initial = router.init();
    steps.push(StepReport {
        step: format!("load {}", options.initial_path()),
        outcome: "loaded",
        path: history.current_path(),
        state: initial,
    });

    for step in options.remaining_steps() {
        let outcome = apply_step(&router, &history, step)?;
        steps.push(StepReport {
            step: step.to_string(),
            outcome,
            path: history.current_path(),
            state: router.state().get_state(),
        });
    }

    recorder.detach();
    tracing::debug!(
        steps = steps.len(),
        events = recorder.len(),
        "Replay finished"
    );

    Ok(SessionReport {
        steps,
        events: recorder.events(),
    })
}

fn apply_step(router: &Router, history: &MemoryHistory, step: &Step) -> QuadrantResult<&'static str> {
    let outcome = match step {
        Step::Visit(path) => {
            router.navigate(path, false)?;
            "navigated"
        }
        Step::Back => moved(history.back()),
        Step::Forward => moved(history.forward()),
        Step::Key(key) => {
            let state = router.state().get_state();
            let ctx = KeyContext {
                portfolio_modal_open: state.current_section == Some(Section::Portfolio)
                    && state.portfolio_slug.is_some(),
                ..Default::default()
            };
            match keyboard::dispatch(router, key, ctx)? {
                KeyOutcome::Ignored => "ignored",
                KeyOutcome::Navigated => "navigated",
                KeyOutcome::ToggleMute => "mute",
            }
        }
        Step::Language(language) => {
            router.switch_language(*language)?;
            "navigated"
        }
    };
    Ok(outcome)
}

fn moved(moved: bool) -> &'static str {
    if moved {
        "popstate"
    } else {
        "no-entry"
    }
}
