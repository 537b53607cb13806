//! CLI module for the `quadrant` route inspector.
//!
//! The binary replays a navigation session (page load, clicks, key presses,
//! back/forward) against in-memory hosts and prints the state the router
//! produced after each step:
//!
//! ```text
//! quadrant --browser-lang en-US / key:a lang:ko back
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use quadrant::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let output = run_cli_command(command, RouterConfig::from_env()?)?;
//! print!("{}", output);
//! ```

pub mod args;
pub mod session;
pub mod version;

pub use args::{parse_args, CliCommand, ReplayOptions, Step};
pub use session::{run_replay, SessionReport, StepReport};
pub use version::{version_line, VERSION};

use crate::config::RouterConfig;
use crate::error::QuadrantResult;

/// Text printed for `--help`.
pub const USAGE: &str = "\
Usage: quadrant [OPTIONS] [STEP]...

Replays a navigation session and prints the resulting application state.

Steps:
  /<path>            Navigate to a path (the first one is the page load)
  back | forward     Browser history buttons
  key:<k>            Keyboard shortcut (e k l a s p c b m)
  lang:<ko|en>       Switch language, keeping the section

Options:
  --json                 Print steps and state changes as JSON
  --browser-lang <tag>   navigator.language of the simulated browser
  --no-detect            Disable the root-path language redirect
  -V, --version          Print version
  -h, --help             Print this help

Environment:
  QUADRANT_DETECT_LANGUAGE      0/false/off disables the redirect
  QUADRANT_SCROLL_RESTORATION   manual (default) or auto
  RUST_LOG                      Log filter for stderr output (default: warn)
";

/// Run a parsed command and return what should be printed to stdout.
pub fn run_cli_command(command: CliCommand, config: RouterConfig) -> QuadrantResult<String> {
    match command {
        CliCommand::Version => Ok(format!("{}\n", version_line())),
        CliCommand::Help => Ok(USAGE.to_string()),
        CliCommand::Replay(options) => {
            let report = run_replay(&options, config)?;
            if options.json {
                let mut json = report.to_json().map_err(crate::error::NavigationError::from)?;
                json.push('\n');
                Ok(json)
            } else {
                Ok(report.render_text())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_command_output() {
        let out = run_cli_command(CliCommand::Version, RouterConfig::default()).unwrap();
        assert_eq!(out, format!("quadrant {}\n", VERSION));
    }

    #[test]
    fn test_help_mentions_every_step_kind() {
        let out = run_cli_command(CliCommand::Help, RouterConfig::default()).unwrap();
        for needle in ["back | forward", "key:<k>", "lang:<ko|en>", "--json"] {
            assert!(out.contains(needle), "missing {}", needle);
        }
    }

    #[test]
    fn test_replay_json_output_parses() {
        let options = ReplayOptions {
            json: true,
            browser_language: Some("ko".to_string()),
            steps: vec![Step::Visit("/clients".to_string())],
            ..Default::default()
        };
        let out = run_cli_command(CliCommand::Replay(options), RouterConfig::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["steps"][0]["state"]["currentSection"], "clients");
    }
}
