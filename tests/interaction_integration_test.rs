//! Keyboard shortcuts, the portfolio modal and session replay on top of a
//! running router.

mod common;

use common::TestSite;
use quadrant::cli::{parse_args, run_replay, CliCommand};
use quadrant::debug::TransitionRecorder;
use quadrant::keyboard::{dispatch, KeyContext, KeyOutcome};
use quadrant::portfolio::{PortfolioCatalog, PortfolioNavigator};
use quadrant::prelude::*;

fn catalog() -> PortfolioCatalog {
    PortfolioCatalog::new(["acme", "globex", "initech"])
}

#[test]
fn test_keyboard_tour_of_the_site() {
    let site = TestSite::at("/").start();
    let ctx = KeyContext::default();

    assert_eq!(dispatch(&site.router, "a", ctx).unwrap(), KeyOutcome::Navigated);
    assert_eq!(site.path(), "/about");
    assert_eq!(site.state().app_phase, AppPhase::Expanding);

    dispatch(&site.router, "l", ctx).unwrap();
    assert_eq!(site.path(), "/en/about");
    assert_eq!(site.state().app_phase, AppPhase::Expanded);

    dispatch(&site.router, "c", ctx).unwrap();
    assert_eq!(site.path(), "/en/clients");
    assert_eq!(site.state().app_phase, AppPhase::Expanding);

    dispatch(&site.router, "b", ctx).unwrap();
    assert_eq!(site.path(), "/en/");
    assert_eq!(site.state().app_phase, AppPhase::Idle);
}

#[test]
fn test_portfolio_modal_walkthrough() {
    let site = TestSite::at("/en/portfolio").start();
    let catalog = catalog();
    let nav = PortfolioNavigator::new(&site.router, &catalog);
    let recorder = TransitionRecorder::attach(site.router.state());

    assert!(nav.open(0).unwrap());
    assert!(nav.step(1).unwrap());
    assert_eq!(site.path(), "/en/portfolio/globex");

    // Language toggle keeps the open item.
    dispatch(&site.router, "k", KeyContext::default()).unwrap();
    assert_eq!(site.path(), "/portfolio/globex");
    assert_eq!(nav.current_index(), Some(1));

    nav.close().unwrap();
    assert_eq!(site.path(), "/portfolio");

    let phases: Vec<AppPhase> = recorder.events().iter().map(|e| e.current.app_phase).collect();
    assert!(phases.iter().all(|phase| *phase == AppPhase::Expanded));
    assert_eq!(phases.len(), 4);
}

#[test]
fn test_back_button_closes_portfolio_item() {
    let site = TestSite::at("/portfolio").start();
    let catalog = catalog();
    let nav = PortfolioNavigator::new(&site.router, &catalog);

    nav.open(2).unwrap();
    assert!(site.history.back());

    let state = site.state();
    assert_eq!(state.current_section, Some(Section::Portfolio));
    assert_eq!(state.portfolio_slug, None);
    assert_eq!(nav.current_index(), None);
}

#[test]
fn test_replay_from_parsed_arguments() {
    let args = ["quadrant", "--browser-lang", "ko", "/", "key:p", "/portfolio/acme", "back"]
        .iter()
        .map(|s| s.to_string());
    let CliCommand::Replay(options) = parse_args(args).unwrap() else {
        panic!("expected a replay command");
    };

    let report = run_replay(&options, RouterConfig::default()).unwrap();
    let paths: Vec<&str> = report.steps.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(paths, vec!["/", "/portfolio", "/portfolio/acme", "/portfolio"]);
    assert_eq!(report.events.len(), 4);
    assert!(report.events.windows(2).all(|w| w[0].sequence < w[1].sequence));
}
