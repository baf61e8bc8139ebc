//! Place marker mismatch detection rule.
//!
//! Qt substitutes `%1`..`%99` through `QString::arg()` and `%n` through
//! `tr(..., n)`. A finished translation that drops or invents a marker
//! renders wrong text, so the marker sets of source and translation must
//! agree. `%L1` is the locale-aware form of `%1` and counts as the same
//! marker.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    catalog::{Catalog, Message, TranslationStatus},
    issues::PlaceholderMismatchIssue,
    rules::helpers::{checked_messages, entry_context},
};

static PLACE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?(n|[1-9][0-9]?)").unwrap());

/// Sorted place markers in `text`, normalised to `%1` / `%n`.
pub fn place_markers(text: &str) -> Vec<String> {
    let mut markers: Vec<String> = PLACE_MARKER_REGEX
        .captures_iter(text)
        .map(|caps| format!("%{}", &caps[1]))
        .collect();
    markers.sort();
    markers.dedup();
    markers
}

/// Check one catalog for finished translations whose markers differ from
/// their source.
///
/// Numerus forms are compared one by one, without `%n`: languages may
/// spell out the count in some forms ("one file").
pub fn check_placeholders(
    file_path: &str,
    catalog: &Catalog,
    ignore_contexts: &[String],
) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for (context, message) in checked_messages(catalog, ignore_contexts) {
        if message.status != TranslationStatus::Finished {
            continue;
        }
        for text in translated_texts(message) {
            let mut expected = place_markers(&message.source);
            let mut found = place_markers(text);
            if message.numerus {
                expected.retain(|marker| marker != "%n");
                found.retain(|marker| marker != "%n");
            }

            let missing: Vec<String> = expected
                .iter()
                .filter(|marker| !found.contains(marker))
                .cloned()
                .collect();
            let extra: Vec<String> = found
                .iter()
                .filter(|marker| !expected.contains(marker))
                .cloned()
                .collect();

            if !missing.is_empty() || !extra.is_empty() {
                issues.push(PlaceholderMismatchIssue {
                    entry: entry_context(file_path, context, message),
                    translation: text.to_string(),
                    missing,
                    extra,
                });
                // One report per entry is enough
                break;
            }
        }
    }

    issues
}

fn translated_texts(message: &Message) -> Vec<&str> {
    if message.numerus {
        message
            .numerus_forms
            .iter()
            .map(String::as_str)
            .filter(|form| !form.is_empty())
            .collect()
    } else if message.translation.is_empty() {
        Vec::new()
    } else {
        vec![message.translation.as_str()]
    }
}
