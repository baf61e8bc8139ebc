use std::fs;

use anyhow::{Context, Result};

use super::{
    CommandResult, CommandSummary, ExportSummary,
    helper::{finish, load_catalog},
};
use crate::cli::{ExportCommand, ExportFormat};

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let catalog = load_catalog(&cmd.file.file)?;

    let content = match cmd.format {
        ExportFormat::Ts => catalog.to_ts_string(),
        ExportFormat::Json => {
            let mut json = catalog.to_json_string()?;
            json.push('\n');
            json
        }
    };

    if let Some(output) = &cmd.output {
        fs::write(output, &content)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    Ok(finish(
        CommandSummary::Export(ExportSummary {
            content,
            output: cmd.output,
        }),
        Vec::new(),
    ))
}
