use super::{action_command, ActionContext, ActionPlugin};
use crate::commands;
use crate::error::Result;
use crate::render::render_version;
use clap::{ArgMatches, Command};

pub struct VersionAction;

impl ActionPlugin for VersionAction {
    fn name(&self) -> &'static str {
        "version"
    }

    fn short_description(&self) -> Option<&'static str> {
        Some("Print the version of the note application")
    }

    fn options(&self) -> Command {
        action_command("version", "Print the version of the note application")
    }

    fn execute(&self, _matches: &ArgMatches, ctx: &ActionContext<'_>) -> Result<String> {
        let result = commands::version::run(ctx.service)?;
        let version = result.version.unwrap_or_default();
        Ok(render_version(ctx.application, &version))
    }
}
