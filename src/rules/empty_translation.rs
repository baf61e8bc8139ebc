//! Empty translation detection rule.
//!
//! A finished entry with no text silently falls back to the source at
//! runtime, which is almost always a mistake in the translation file.

use crate::{
    catalog::{Catalog, NumerusRule, TranslationStatus},
    issues::EmptyTranslationIssue,
    rules::helpers::{checked_messages, entry_context},
};

/// Check one catalog for finished entries without translation text.
///
/// Numerus entries are reported when any of their forms is empty or when
/// they carry fewer forms than the catalog language needs.
pub fn check_empty_translations(
    file_path: &str,
    catalog: &Catalog,
    ignore_contexts: &[String],
) -> Vec<EmptyTranslationIssue> {
    let forms_needed = NumerusRule::for_header(catalog.language()).form_count();
    checked_messages(catalog, ignore_contexts)
        .filter(|(_, message)| message.status == TranslationStatus::Finished)
        .filter(|(_, message)| {
            if message.numerus {
                message.numerus_forms.len() < forms_needed
                    || message.numerus_forms.iter().any(String::is_empty)
            } else {
                message.translation.is_empty()
            }
        })
        .map(|(context, message)| EmptyTranslationIssue {
            entry: entry_context(file_path, context, message),
        })
        .collect()
}
