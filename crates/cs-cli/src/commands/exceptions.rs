use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExceptionsCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExceptionCheck<'a> {
    name: &'a str,
    filtered: bool,
    matched: Option<&'a str>,
}

/// Handle `certsync exceptions`.
pub fn handle(
    action: &ExceptionsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ExceptionsCommands::List { exceptions } => {
            let list = ctx.exceptions(exceptions.as_deref())?;
            output(&list, flags.format)
        }
        ExceptionsCommands::Check { name, exceptions } => {
            let list = ctx.exceptions(exceptions.as_deref())?;
            let matched = list.matching(name);
            output(
                &ExceptionCheck {
                    name,
                    filtered: matched.is_some(),
                    matched,
                },
                flags.format,
            )
        }
    }
}
