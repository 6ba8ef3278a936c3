//! # Dispatch
//!
//! Resolves the raw argument list into a [`State`], then drives that state to
//! an [`Outcome`]. Nothing here prints or exits: `main` turns the outcome into
//! output and a process exit code.
//!
//! The service connection is made through a caller-supplied closure, and only
//! once an action's arguments have been parsed and validated. Help and usage
//! errors therefore never touch the note application.

use crate::actions::registry::ActionRegistry;
use crate::actions::{requested_application, ActionContext, Parsed, NO_DESCRIPTION};
use crate::config::TomtomConfig;
use crate::error::{Result, TomtomError};
use crate::exitcode;
use crate::service::{Application, NoteService};
use tracing::debug;

pub const PROGRAM_NAME: &str = "tomtom";

const USAGE_LINES: &str = "Usage: tomtom (-h|--help) [action]\n       tomtom <action> [-h|--help] [options]";

const HELP_TOKENS: [&str; 3] = ["-h", "--help", "help"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    NoArgs,
    GlobalHelp,
    HelpBeforeAction(String),
    RunAction(String),
    UnknownAction(String),
}

pub fn resolve(args: &[String], registry: &ActionRegistry) -> State {
    let Some(first) = args.first() else {
        return State::NoArgs;
    };
    if HELP_TOKENS.contains(&first.as_str()) {
        return match args.get(1) {
            Some(name) if registry.contains(name) => State::HelpBeforeAction(name.clone()),
            _ => State::GlobalHelp,
        };
    }
    if registry.contains(first) {
        State::RunAction(first.clone())
    } else {
        State::UnknownAction(first.clone())
    }
}

/// Short usage, shown when no arguments are given.
pub fn usage() -> String {
    format!("{}\n\nFor more details, use option -h", USAGE_LINES)
}

/// Program header followed by one `  name : description` line per action.
pub fn global_help(registry: &ActionRegistry) -> String {
    let mut out = format!(
        "{}\n\n\
         Options depend on what action you are taking. To obtain details on options \
         for a particular action, combine -h or --help and the action name.\n\n\
         Here is a list of all the available actions:",
        USAGE_LINES
    );
    for (name, plugin) in registry.iter() {
        let desc = plugin.short_description().unwrap_or(NO_DESCRIPTION);
        out.push_str(&format!("\n  {} : {}", name, desc));
    }
    out
}

/// How an invocation ended.
#[derive(Debug)]
pub enum Outcome {
    /// Action output, for stdout
    Success(String),
    /// Help text, for stdout
    Help(String),
    /// Usage summary, for stderr
    Usage(String),
    Failure(TomtomError),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success(_) | Outcome::Help(_) => exitcode::OK,
            Outcome::Usage(_) => exitcode::USAGE,
            Outcome::Failure(err) => err.exit_code(),
        }
    }
}

pub struct Dispatcher<'a> {
    registry: &'a ActionRegistry,
    config: &'a TomtomConfig,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a ActionRegistry, config: &'a TomtomConfig) -> Self {
        Self { registry, config }
    }

    pub fn run<F>(&self, args: &[String], connect: F) -> Outcome
    where
        F: FnOnce(Application) -> Result<Box<dyn NoteService>>,
    {
        let state = resolve(args, self.registry);
        debug!(?state, "resolved invocation");

        match state {
            State::NoArgs => Outcome::Usage(usage()),
            State::GlobalHelp => Outcome::Help(global_help(self.registry)),
            State::HelpBeforeAction(name) => match self.registry.get(&name) {
                Some(plugin) => Outcome::Help(plugin.detailed_help()),
                None => Outcome::Help(global_help(self.registry)),
            },
            State::UnknownAction(name) => Outcome::Failure(TomtomError::UnknownAction(name)),
            State::RunAction(name) => match self.run_action(&name, &args[1..], connect) {
                Ok(outcome) => outcome,
                Err(err) => Outcome::Failure(err),
            },
        }
    }

    fn run_action<F>(&self, name: &str, args: &[String], connect: F) -> Result<Outcome>
    where
        F: FnOnce(Application) -> Result<Box<dyn NoteService>>,
    {
        let plugin = self
            .registry
            .get(name)
            .ok_or_else(|| TomtomError::UnknownAction(name.to_string()))?;

        let matches = match plugin.parse(args)? {
            Parsed::Help(text) => return Ok(Outcome::Help(text)),
            Parsed::Run(matches) => matches,
        };

        let application = requested_application(&matches, self.config.application);
        debug!(action = name, %application, "connecting to note service");
        let service = connect(application)?;

        let ctx = ActionContext {
            service: service.as_ref(),
            application,
            dates: self.config.dates,
        };
        plugin.execute(&matches, &ctx).map(Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DateZone;
    use crate::service::memory::fixtures::sample_service;
    use crate::service::memory::InMemoryService;
    use std::cell::{Cell, RefCell};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn utc_config() -> TomtomConfig {
        TomtomConfig {
            dates: DateZone::Utc,
            ..Default::default()
        }
    }

    fn run(values: &[&str]) -> Outcome {
        let registry = ActionRegistry::builtin();
        let config = utc_config();
        Dispatcher::new(&registry, &config).run(&args(values), |_| {
            Ok(Box::new(sample_service()) as Box<dyn NoteService>)
        })
    }

    /// Runs and asserts the service was never contacted.
    fn run_offline(values: &[&str]) -> Outcome {
        let registry = ActionRegistry::builtin();
        let config = utc_config();
        let connected = Cell::new(false);
        let outcome = Dispatcher::new(&registry, &config).run(&args(values), |_| {
            connected.set(true);
            Ok(Box::new(sample_service()) as Box<dyn NoteService>)
        });
        assert!(!connected.get(), "service contacted for {values:?}");
        outcome
    }

    fn success(outcome: Outcome) -> String {
        match outcome {
            Outcome::Success(out) => out,
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn resolves_states_in_order() {
        let registry = ActionRegistry::builtin();
        assert_eq!(resolve(&[], &registry), State::NoArgs);
        assert_eq!(resolve(&args(&["-h"]), &registry), State::GlobalHelp);
        assert_eq!(resolve(&args(&["help", "bogus"]), &registry), State::GlobalHelp);
        assert_eq!(
            resolve(&args(&["--help", "list"]), &registry),
            State::HelpBeforeAction("list".into())
        );
        assert_eq!(
            resolve(&args(&["list", "-h"]), &registry),
            State::RunAction("list".into())
        );
        assert_eq!(
            resolve(&args(&["frobnicate"]), &registry),
            State::UnknownAction("frobnicate".into())
        );
    }

    #[test]
    fn no_args_is_a_usage_error() {
        let outcome = run_offline(&[]);
        assert_eq!(outcome.exit_code(), exitcode::USAGE);
        match outcome {
            Outcome::Usage(text) => {
                assert!(text.starts_with("Usage: tomtom (-h|--help) [action]\n"));
                assert!(text.ends_with("\n\nFor more details, use option -h"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn global_help_lists_every_action() {
        for flag in ["-h", "--help", "help"] {
            let outcome = run_offline(&[flag]);
            assert_eq!(outcome.exit_code(), exitcode::OK);
            let Outcome::Help(text) = outcome else {
                panic!("expected help");
            };
            assert!(text.contains("Here is a list of all the available actions:"));
            for name in ["display", "list", "search", "version"] {
                assert!(text.contains(&format!("\n  {} : ", name)), "missing {name}");
            }
        }
    }

    #[test]
    fn help_before_or_after_action_shows_action_help() {
        for values in [["-h", "list"], ["list", "--help"]] {
            let Outcome::Help(text) = run_offline(&values) else {
                panic!("expected help for {values:?}");
            };
            assert!(text.contains("Usage: tomtom list"));
            assert!(text.contains("--with-templates"));
        }
    }

    #[test]
    fn help_wins_over_missing_arguments() {
        assert!(matches!(run_offline(&["search", "-h"]), Outcome::Help(_)));
    }

    #[test]
    fn unknown_action_fails_with_usage_code() {
        let outcome = run_offline(&["frobnicate"]);
        assert_eq!(outcome.exit_code(), exitcode::USAGE);
        assert!(matches!(
            outcome,
            Outcome::Failure(TomtomError::UnknownAction(name)) if name == "frobnicate"
        ));
    }

    #[test]
    fn argument_errors_never_connect() {
        let outcome = run_offline(&["search"]);
        assert!(matches!(outcome, Outcome::Failure(TomtomError::SearchArgument(_))));
        assert_eq!(outcome.exit_code(), exitcode::USAGE);

        let outcome = run_offline(&["display"]);
        assert!(matches!(outcome, Outcome::Failure(TomtomError::Usage(_))));

        let outcome = run_offline(&["list", "--bogus"]);
        assert!(matches!(outcome, Outcome::Failure(TomtomError::Usage(_))));
    }

    #[test]
    fn list_limited_to_ten() {
        let out = success(run(&["list", "-n", "10"]));
        assert_eq!(out.lines().count(), 10);
        assert!(out.starts_with("2009-11-09 | addressbook  (pim)\n2009-11-02 | TODO-list  (reminders, pim)"));
    }

    #[test]
    fn list_hides_templates_unless_asked() {
        let out = success(run(&["list"]));
        assert_eq!(out.lines().count(), 12);
        let out = success(run(&["list", "--with-templates"]));
        assert_eq!(out.lines().count(), 13);
        assert!(out.ends_with("| recipes"));
    }

    #[test]
    fn display_prints_notes_with_separator() {
        let out = success(run(&["display", "TODO-list", "python-work"]));
        assert!(out.starts_with("TODO-list  (reminders, pim)\n\n"));
        assert!(out.contains("\n==========================\npython-work\n\n"));
    }

    #[test]
    fn display_of_missing_note_fails_with_data_error() {
        let outcome = run(&["display", "unexistant"]);
        assert_eq!(outcome.exit_code(), exitcode::DATAERR);
        let Outcome::Failure(err) = outcome else {
            panic!("expected failure");
        };
        assert_eq!(err.to_string(), "Note named \"unexistant\" not found.");
    }

    #[test]
    fn missing_note_produces_no_output() {
        for values in [
            &["display", "TODO-list", "unexistant"][..],
            &["search", "python", "dell 750", "unexistant"][..],
        ] {
            let outcome = run(values);
            assert_eq!(outcome.exit_code(), exitcode::DATAERR);
            assert!(
                matches!(outcome, Outcome::Failure(TomtomError::NoteNotFound(ref t)) if t == "unexistant"),
                "unexpected {outcome:?}"
            );
        }
    }

    #[test]
    fn search_pattern_after_double_dash() {
        let out = success(run(&["search", "--", "-5512"]));
        assert_eq!(out, "addressbook : 3 : John Doe (cell) - 555-5512");

        let outcome = run_offline(&["search", "-5512"]);
        assert!(matches!(outcome, Outcome::Failure(TomtomError::Usage(_))));
    }

    #[test]
    fn search_reports_hits() {
        let out = success(run(&["search", "JOHN DOE"]));
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("addressbook : 3 : "));
    }

    #[test]
    fn offline_service_is_unavailable() {
        let registry = ActionRegistry::builtin();
        let config = TomtomConfig::default();
        let outcome = Dispatcher::new(&registry, &config).run(&args(&["version"]), |_| {
            Ok(Box::new(InMemoryService::unavailable()) as Box<dyn NoteService>)
        });
        assert_eq!(outcome.exit_code(), exitcode::UNAVAILABLE);
    }

    #[test]
    fn connection_failure_is_reported() {
        let registry = ActionRegistry::builtin();
        let config = TomtomConfig::default();
        let outcome = Dispatcher::new(&registry, &config).run(&args(&["list"]), |_| {
            Err(TomtomError::ServiceUnavailable("no session bus".into()))
        });
        assert!(matches!(outcome, Outcome::Failure(TomtomError::ServiceUnavailable(_))));
    }

    #[test]
    fn gnote_flag_selects_gnote() {
        let registry = ActionRegistry::builtin();
        let config = TomtomConfig::default();
        let requested = RefCell::new(Vec::new());
        let dispatcher = Dispatcher::new(&registry, &config);

        for values in [&["version"][..], &["version", "--gnote"][..]] {
            let outcome = dispatcher.run(&args(values), |app| {
                requested.borrow_mut().push(app);
                Ok(Box::new(InMemoryService::new()) as Box<dyn NoteService>)
            });
            assert!(matches!(outcome, Outcome::Success(_)));
        }
        assert_eq!(
            *requested.borrow(),
            vec![Application::Tomboy, Application::Gnote]
        );
    }

    #[test]
    fn version_names_the_application() {
        let out = success(run(&["version", "--gnote"]));
        assert_eq!(out, "Gnote version 1.0.1");
    }
}
