use anyhow::Result;

use super::{
    CommandResult, CommandSummary, ContextRow, ContextsSummary,
    helper::{finish, load_catalog},
};
use crate::cli::ContextsCommand;

pub fn contexts(cmd: ContextsCommand) -> Result<CommandResult> {
    let catalog = load_catalog(&cmd.file.file)?;

    let rows = catalog
        .groups()
        .iter()
        .map(|context| ContextRow {
            name: context.name.clone(),
            stats: context.stats(),
        })
        .collect();

    Ok(finish(
        CommandSummary::Contexts(ContextsSummary {
            language: catalog.language().map(str::to_string),
            rows,
        }),
        Vec::new(),
    ))
}
