use anyhow::Result;

use super::{CheckSummary, CommandResult, CommandSummary, helper::finish};
use crate::{
    cli::CheckCommand,
    commands::{
        context::CheckContext,
        runner::{CheckRunner, CheckType},
    },
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let checks = if cmd.rules.is_empty() {
        CheckType::all()
    } else {
        cmd.rules
    };

    let runner = checks
        .into_iter()
        .fold(CheckRunner::new(ctx), |runner, check| runner.add(check));
    let result = runner.run()?;

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            files_checked: result.files_checked,
            parse_error_count: result.parse_error_count,
        }),
        result.issues,
    ))
}
