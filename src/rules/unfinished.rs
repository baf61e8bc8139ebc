//! Unfinished entry detection rule.
//!
//! Reports live entries marked `type="unfinished"` whose source contains
//! real text. Vanished entries are never reported.

use crate::{
    catalog::{Catalog, TranslationStatus},
    issues::UnfinishedIssue,
    rules::helpers::{checked_messages, entry_context},
    utils::contains_alphabetic,
};

/// Check one catalog for unfinished entries.
///
/// Entries whose `type` attribute was not recognised are left to the
/// unknown-status rule.
pub fn check_unfinished(
    file_path: &str,
    catalog: &Catalog,
    ignore_contexts: &[String],
) -> Vec<UnfinishedIssue> {
    checked_messages(catalog, ignore_contexts)
        .filter(|(_, message)| message.status == TranslationStatus::Unfinished)
        // Skip "%1 / %2", "←" and similar
        .filter(|(_, message)| contains_alphabetic(&message.source))
        .filter(|(_, message)| message.unknown_type.is_none())
        .map(|(context, message)| UnfinishedIssue {
            entry: entry_context(file_path, context, message),
            translation: if message.numerus {
                message.numerus_forms.join(" | ")
            } else {
                message.translation.clone()
            },
        })
        .collect()
}
