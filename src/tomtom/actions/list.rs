use super::{action_command, flag, values, ActionContext, ActionPlugin};
use crate::commands;
use crate::error::Result;
use crate::query::{NoteFilter, TemplateMode};
use crate::render::render_note_list;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

pub struct ListAction;

impl ListAction {
    fn filter(matches: &ArgMatches) -> NoteFilter {
        NoteFilter {
            tags: values(matches, "tag"),
            notebooks: values(matches, "book"),
            templates: if flag(matches, "with-templates") {
                TemplateMode::Include
            } else {
                TemplateMode::Exclude
            },
            limit: matches.get_one::<usize>("number").copied(),
        }
    }
}

impl ActionPlugin for ListAction {
    fn name(&self) -> &'static str {
        "list"
    }

    fn short_description(&self) -> Option<&'static str> {
        Some("List notes, most recently changed first")
    }

    fn options(&self) -> Command {
        action_command("list", "List notes, most recently changed first")
            .arg(
                Arg::new("book")
                    .short('b')
                    .long("book")
                    .value_name("NOTEBOOK")
                    .action(ArgAction::Append)
                    .help("Only list notes filed in this notebook (repeatable; any one matches)"),
            )
            .arg(
                Arg::new("tag")
                    .short('t')
                    .long("tag")
                    .value_name("TAG")
                    .action(ArgAction::Append)
                    .help("Only list notes carrying this tag (repeatable; all must match)"),
            )
            .arg(
                Arg::new("with-templates")
                    .long("with-templates")
                    .action(ArgAction::SetTrue)
                    .help("Also list templates, after the other notes"),
            )
            .arg(
                Arg::new("number")
                    .short('n')
                    .long("number")
                    .value_name("N")
                    .value_parser(value_parser!(usize))
                    .help("Only list the N most recent notes"),
            )
    }

    fn execute(&self, matches: &ArgMatches, ctx: &ActionContext<'_>) -> Result<String> {
        let result = commands::list::run(ctx.service, &Self::filter(matches))?;
        Ok(render_note_list(&result.listed_notes, ctx.dates))
    }
}
