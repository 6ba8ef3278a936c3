use super::{action_command, values, ActionContext, ActionPlugin};
use crate::commands;
use crate::error::{Result, TomtomError};
use crate::render::render_search_hits;
use clap::{Arg, ArgAction, ArgMatches, Command};

const MISSING_PATTERN: &str = "You must specify a pattern to perform a search";

pub struct SearchAction;

impl ActionPlugin for SearchAction {
    fn name(&self) -> &'static str {
        "search"
    }

    fn short_description(&self) -> Option<&'static str> {
        Some("Search the content of notes, ignoring case")
    }

    fn options(&self) -> Command {
        action_command("search", "Search the content of notes, ignoring case")
            .arg(
                Arg::new("pattern")
                    .value_name("SEARCH_PATTERN")
                    .help("Text to look for"),
            )
            .arg(
                Arg::new("titles")
                    .value_name("NOTE_NAME")
                    .num_args(0..)
                    .action(ArgAction::Append)
                    .help("Only search these notes (default: every note but templates)"),
            )
    }

    fn validate(&self, matches: &ArgMatches) -> Result<()> {
        if matches.get_one::<String>("pattern").is_none() {
            return Err(TomtomError::SearchArgument(MISSING_PATTERN.to_string()));
        }
        Ok(())
    }

    fn execute(&self, matches: &ArgMatches, ctx: &ActionContext<'_>) -> Result<String> {
        let pattern = matches
            .get_one::<String>("pattern")
            .map(String::as_str)
            .unwrap_or_default();
        let titles = values(matches, "titles");
        let result = commands::search::run(ctx.service, pattern, &titles)?;
        Ok(render_search_hits(&result.search_hits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Parsed;
    use crate::render::DateZone;
    use crate::service::memory::fixtures::sample_service;
    use crate::service::Application;

    fn run(args: &[&str]) -> Result<String> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let Parsed::Run(matches) = SearchAction.parse(&args)? else {
            panic!("unexpected help");
        };
        let service = sample_service();
        let ctx = ActionContext {
            service: &service,
            application: Application::Tomboy,
            dates: DateZone::Utc,
        };
        SearchAction.execute(&matches, &ctx)
    }

    #[test]
    fn searches_everything() {
        assert_eq!(
            run(&["john doe"]).unwrap(),
            "addressbook : 3 : John Doe (cell) - 555-5512\n\
             business contacts : 3 : John Doe Sr. (office) - 555-5534"
        );
    }

    #[test]
    fn searches_named_notes_only() {
        assert_eq!(
            run(&["python", "dell 750", "python-work", "OpenSource Conference X"]).unwrap(),
            "dell 750 : 3 : Install python 2.5\n\
             python-work : 0 : python-work\n\
             OpenSource Conference X : 3 : Presentation: Python by all means"
        );
    }

    #[test]
    fn no_pattern_is_a_search_argument_error() {
        let err = run(&[]).unwrap_err();
        assert!(matches!(err, TomtomError::SearchArgument(_)));
        assert_eq!(
            err.to_string(),
            "You must specify a pattern to perform a search"
        );
    }

    #[test]
    fn pattern_may_start_with_a_dash_after_separator() {
        assert_eq!(
            run(&["--", "-5512"]).unwrap(),
            "addressbook : 3 : John Doe (cell) - 555-5512"
        );
    }

    #[test]
    fn dash_pattern_without_separator_is_an_option() {
        assert!(matches!(run(&["-5512"]), Err(TomtomError::Usage(_))));
    }

    #[test]
    fn no_match_prints_nothing() {
        assert_eq!(run(&["no such phrase anywhere"]).unwrap(), "");
    }
}
