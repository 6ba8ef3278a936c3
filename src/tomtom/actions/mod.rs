//! # Action Plugins
//!
//! Every verb tomtom understands (`list`, `display`, `search`, `version`) is an
//! [`ActionPlugin`]. A plugin owns three things:
//!
//! 1. **Its option grammar**, as a `clap::Command` ([`ActionPlugin::options`]).
//!    Detailed help is rendered from it, so help and parsing never drift apart.
//! 2. **Argument parsing** ([`ActionPlugin::parse`]), which either asks for the
//!    detailed help or yields validated `ArgMatches`.
//! 3. **Execution** ([`ActionPlugin::execute`]), which calls into the command
//!    layer and renders the result to text.
//!
//! The dispatcher only ever sees the trait. Plugins are found through the
//! [`registry`], never by matching on names.

use crate::dispatch::PROGRAM_NAME;
use crate::error::{Result, TomtomError};
use crate::render::DateZone;
use crate::service::{Application, NoteService};
use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod display;
pub mod list;
pub mod registry;
pub mod search;
pub mod version;

/// Shown in the global help for plugins without a short description.
pub const NO_DESCRIPTION: &str = "No description available.";

const HELP_ARG: &str = "help";
const GNOTE_ARG: &str = "gnote";

/// What a plugin needs at run time.
pub struct ActionContext<'a> {
    pub service: &'a dyn NoteService,
    pub application: Application,
    pub dates: DateZone,
}

/// Result of parsing an action's own arguments.
#[derive(Debug)]
pub enum Parsed {
    /// `-h`/`--help` was given; carries the detailed help text
    Help(String),
    Run(ArgMatches),
}

pub trait ActionPlugin {
    fn name(&self) -> &'static str;

    fn short_description(&self) -> Option<&'static str> {
        None
    }

    /// The option grammar. Build it with [`action_command`] so the shared
    /// `-h`/`--help` and `--gnote` flags are present.
    fn options(&self) -> Command;

    fn detailed_help(&self) -> String {
        let mut cmd = self.options();
        cmd.render_help().to_string().trim_end().to_string()
    }

    /// Parse the arguments following the action name.
    fn parse(&self, args: &[String]) -> Result<Parsed> {
        let matches = self
            .options()
            .try_get_matches_from(args)
            .map_err(usage_error)?;
        if flag(&matches, HELP_ARG) {
            return Ok(Parsed::Help(self.detailed_help()));
        }
        self.validate(&matches)?;
        Ok(Parsed::Run(matches))
    }

    /// Checks clap cannot express, run after a successful parse.
    fn validate(&self, _matches: &ArgMatches) -> Result<()> {
        Ok(())
    }

    fn execute(&self, matches: &ArgMatches, ctx: &ActionContext<'_>) -> Result<String>;
}

/// Base grammar shared by every action.
pub fn action_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .bin_name(format!("{} {}", PROGRAM_NAME, name))
        .about(about)
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .color(clap::ColorChoice::Never)
        .arg(
            Arg::new(HELP_ARG)
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Show this help message and exit"),
        )
        .arg(
            Arg::new(GNOTE_ARG)
                .long("gnote")
                .action(ArgAction::SetTrue)
                .help("Query Gnote instead of the configured application"),
        )
}

/// Application an action should talk to: Gnote when `--gnote` was given,
/// otherwise `default`.
pub fn requested_application(matches: &ArgMatches, default: Application) -> Application {
    if flag(matches, GNOTE_ARG) {
        Application::Gnote
    } else {
        default
    }
}

pub(crate) fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches!(matches.try_get_one::<bool>(id), Ok(Some(&true)))
}

pub(crate) fn values(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .try_get_many::<String>(id)
        .ok()
        .flatten()
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default()
}

fn usage_error(err: clap::Error) -> TomtomError {
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    TomtomError::Usage(first.trim_start_matches("error: ").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl ActionPlugin for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn options(&self) -> Command {
            action_command("echo", "Print the arguments back")
                .arg(Arg::new("words").num_args(0..).action(ArgAction::Append))
        }

        fn execute(&self, matches: &ArgMatches, _ctx: &ActionContext<'_>) -> Result<String> {
            Ok(values(matches, "words").join(" "))
        }
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn help_flag_anywhere_requests_help() {
        let parsed = Echo.parse(&args(&["a", "--help"])).unwrap();
        match parsed {
            Parsed::Help(text) => assert!(text.contains("Usage: tomtom echo")),
            Parsed::Run(_) => panic!("expected help"),
        }
    }

    #[test]
    fn unknown_option_is_a_usage_error() {
        let err = Echo.parse(&args(&["--bogus"])).unwrap_err();
        match err {
            TomtomError::Usage(msg) => {
                assert!(msg.contains("--bogus"));
                assert!(!msg.starts_with("error:"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn gnote_flag_overrides_default_application() {
        let Parsed::Run(matches) = Echo.parse(&args(&["--gnote"])).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(
            requested_application(&matches, Application::Tomboy),
            Application::Gnote
        );

        let Parsed::Run(matches) = Echo.parse(&args(&[])).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(
            requested_application(&matches, Application::Tomboy),
            Application::Tomboy
        );
    }

    #[test]
    fn default_description_is_absent() {
        assert!(Echo.short_description().is_none());
    }
}
