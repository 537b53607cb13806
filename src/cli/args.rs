//! Command-line argument parsing for the route inspector.

use std::str::FromStr;

use crate::error::CliError;
use crate::models::Language;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Replay a navigation session
    Replay(ReplayOptions),
}

/// Options for a replayed navigation session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayOptions {
    /// Print JSON instead of one line per step
    pub json: bool,
    /// `navigator.language` for the simulated browser
    pub browser_language: Option<String>,
    /// Turn off the root-path language redirect
    pub no_detect: bool,
    pub steps: Vec<Step>,
}

impl ReplayOptions {
    /// The path the simulated page loads with: the first step if it is a
    /// visit, otherwise `/`.
    pub fn initial_path(&self) -> &str {
        match self.steps.first() {
            Some(Step::Visit(path)) => path,
            _ => "/",
        }
    }

    /// Steps after the initial page load.
    pub fn remaining_steps(&self) -> &[Step] {
        match self.steps.first() {
            Some(Step::Visit(_)) => &self.steps[1..],
            _ => &self.steps,
        }
    }
}

/// One user action in a replayed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Navigate to a path (`/en/about`)
    Visit(String),
    /// Browser back button
    Back,
    /// Browser forward button
    Forward,
    /// Keyboard shortcut (`key:l`)
    Key(String),
    /// Language toggle (`lang:en`)
    Language(Language),
}

impl FromStr for Step {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('/') {
            return Ok(Step::Visit(s.to_string()));
        }
        match s {
            "back" => return Ok(Step::Back),
            "forward" => return Ok(Step::Forward),
            _ => {}
        }
        if let Some(key) = s.strip_prefix("key:") {
            if key.is_empty() {
                return Err(CliError::InvalidStep {
                    step: s.to_string(),
                    reason: "missing key".to_string(),
                });
            }
            return Ok(Step::Key(key.to_string()));
        }
        if let Some(code) = s.strip_prefix("lang:") {
            return Language::from_code(code)
                .map(Step::Language)
                .ok_or_else(|| CliError::InvalidLanguage {
                    value: code.to_string(),
                });
        }
        Err(CliError::InvalidStep {
            step: s.to_string(),
            reason: "expected a path, back, forward, key:<k> or lang:<ko|en>".to_string(),
        })
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Visit(path) => write!(f, "{}", path),
            Step::Back => write!(f, "back"),
            Step::Forward => write!(f, "forward"),
            Step::Key(key) => write!(f, "key:{}", key),
            Step::Language(language) => write!(f, "lang:{}", language),
        }
    }
}

/// Parse command-line arguments and return the command to run.
///
/// # Examples
///
/// ```
/// use quadrant::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["quadrant".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = ReplayOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--json" => options.json = true,
            "--no-detect" => options.no_detect = true,
            "--browser-lang" => {
                let value = args.next().ok_or_else(|| CliError::MissingValue {
                    flag: arg.clone(),
                })?;
                options.browser_language = Some(value);
            }
            flag if flag.starts_with("--") => {
                return Err(CliError::UnknownFlag {
                    flag: flag.to_string(),
                })
            }
            step => options.steps.push(step.parse()?),
        }
    }

    Ok(CliCommand::Replay(options))
}
