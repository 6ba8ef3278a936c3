use super::{action_command, values, ActionContext, ActionPlugin};
use crate::commands;
use crate::error::{Result, TomtomError};
use crate::render::render_full_notes;
use clap::{Arg, ArgAction, ArgMatches, Command};

pub struct DisplayAction;

impl ActionPlugin for DisplayAction {
    fn name(&self) -> &'static str {
        "display"
    }

    fn short_description(&self) -> Option<&'static str> {
        Some("Display the content of one or more notes")
    }

    fn options(&self) -> Command {
        action_command("display", "Display the content of one or more notes").arg(
            Arg::new("titles")
                .value_name("NOTE_NAME")
                .num_args(0..)
                .action(ArgAction::Append)
                .help("Exact titles of the notes to display, in order"),
        )
    }

    fn validate(&self, matches: &ArgMatches) -> Result<()> {
        if values(matches, "titles").is_empty() {
            return Err(TomtomError::Usage(
                "You need to specify a note name to display it".to_string(),
            ));
        }
        Ok(())
    }

    fn execute(&self, matches: &ArgMatches, ctx: &ActionContext<'_>) -> Result<String> {
        let titles = values(matches, "titles");
        let result = commands::display::run(ctx.service, &titles)?;
        Ok(render_full_notes(&result.listed_notes))
    }
}
