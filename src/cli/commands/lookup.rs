use anyhow::Result;

use super::{
    CommandResult, CommandSummary, LookupSummary,
    helper::{finish, load_catalog},
};
use crate::cli::LookupCommand;

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let catalog = load_catalog(&cmd.file.file)?;
    let context = cmd.context.as_str();
    let source = cmd.source.as_str();
    let comment = cmd.comment.as_deref().unwrap_or("");

    let translated = catalog.live_message(context, source, comment).is_some()
        || (!comment.is_empty() && catalog.live_message(context, source, "").is_some());

    let text = match cmd.count {
        Some(n) => catalog.translate_plural(context, source, comment, n),
        None if comment.is_empty() => catalog.lookup(context, source).to_string(),
        None => catalog.lookup_disambiguated(context, source, comment).to_string(),
    };

    tracing::debug!(context, source, translated, "lookup");

    Ok(finish(
        CommandSummary::Lookup(LookupSummary { text, translated }),
        Vec::new(),
    ))
}
