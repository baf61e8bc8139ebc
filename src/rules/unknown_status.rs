//! Unknown status detection rule.
//!
//! The loader keeps entries with an unrecognised `type` attribute as
//! unfinished and records a warning; this rule surfaces those warnings.

use crate::{
    catalog::{Catalog, LoadWarning},
    issues::{EntryContext, UnknownStatusIssue},
};

pub fn check_unknown_status(
    file_path: &str,
    catalog: &Catalog,
    ignore_contexts: &[String],
) -> Vec<UnknownStatusIssue> {
    catalog
        .warnings()
        .iter()
        .filter_map(|warning| match warning {
            LoadWarning::UnknownStatus {
                context,
                source,
                value,
                line,
            } if !ignore_contexts.contains(context) => Some(UnknownStatusIssue {
                entry: EntryContext::new(file_path, *line, context, source),
                value: value.clone(),
            }),
            _ => None,
        })
        .collect()
}
