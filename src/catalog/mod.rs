//! In-memory translation catalog.
//!
//! A [`Catalog`] is built once from a Qt Linguist `.ts` document and is
//! read-only afterwards, so it can be shared between threads without locking.
//!
//! # Lookup rules
//!
//! - Only `finished` entries with a non-empty translation are retrievable.
//! - Anything else (unfinished, vanished, empty, unknown) falls back to the
//!   source string unchanged.
//! - Duplicate entries resolve to the first retrievable one in file order.
//!
//! Vanished entries stay in the catalog for tooling and are written back by
//! the writer, but never reach the live index.

mod error;
pub mod numerus;
mod types;

use std::{collections::HashMap, fs, path::Path, str::FromStr};

use serde::Serialize;

pub use error::{CatalogError, ParseError, ParseErrorKind};
pub use numerus::{NumerusRule, numerus_form};
pub use types::{
    CatalogStats, Context, Extra, LoadWarning, Location, Message, TranslationStatus,
};

/// Position of a message inside `Catalog::contexts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MessageRef {
    context: usize,
    message: usize,
}

/// context name -> source -> retrievable messages, in file order.
type LiveIndex = HashMap<String, HashMap<String, Vec<MessageRef>>>;

/// Document header attributes of the `<TS>` root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    /// `<defaultcodec>`, written by Qt 4 era tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_codec: Option<String>,
    /// `catalog` names from `<dependencies>`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    /// Document-level `<extra-*>` elements.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<Extra>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(flatten)]
    header: Header,
    contexts: Vec<Context>,
    #[serde(skip)]
    live: LiveIndex,
    #[serde(skip)]
    warnings: Vec<LoadWarning>,
}

impl Catalog {
    /// Assemble a catalog from already parsed parts and build its live index.
    pub fn from_parts(header: Header, contexts: Vec<Context>, warnings: Vec<LoadWarning>) -> Self {
        let live = build_live_index(&contexts);
        Self {
            header,
            contexts,
            live,
            warnings,
        }
    }

    /// Parse a `.ts` document.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        crate::parsers::ts::parse(input)
    }

    /// Read and parse a `.ts` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|error| CatalogError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        let catalog = Self::parse(&content).map_err(|error| CatalogError::Parse {
            path: path.to_path_buf(),
            error,
        })?;

        for warning in &catalog.warnings {
            tracing::warn!(
                file = %path.display(),
                line = warning.line(),
                "{}",
                warning
            );
        }
        tracing::debug!(
            file = %path.display(),
            contexts = catalog.contexts.len(),
            messages = catalog.stats().total(),
            "loaded catalog"
        );

        Ok(catalog)
    }

    /// Translation for `source` in `context`, or `source` itself when no
    /// finished, non-empty translation exists.
    ///
    /// Only entries without a disambiguation comment are considered; use
    /// [`Catalog::lookup_disambiguated`] for commented entries.
    pub fn lookup<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.find_live(context, source, "")
            .and_then(|message| message.text_for_form(0))
            .unwrap_or(source)
    }

    /// Like [`Catalog::lookup`], but prefers entries whose disambiguation
    /// comment equals `comment` and then falls back to uncommented entries.
    pub fn lookup_disambiguated<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        comment: &str,
    ) -> &'a str {
        self.find_live_with_fallback(context, source, comment)
            .and_then(|message| message.text_for_form(0))
            .unwrap_or(source)
    }

    /// Plural-aware translation. Picks the numerus form for `n` using the
    /// catalog language and replaces `%n` with `n` in the result.
    ///
    /// Falls back to `source` (with `%n` replaced) under the same rules as
    /// [`Catalog::lookup`]. An empty form for `n` also falls back.
    pub fn translate_plural(&self, context: &str, source: &str, comment: &str, n: u64) -> String {
        let form = numerus_form(self.language(), n);
        let text = self
            .find_live_with_fallback(context, source, comment)
            .and_then(|message| message.text_for_form(form))
            .unwrap_or(source);
        text.replace("%n", &n.to_string())
    }

    /// Lazy iterator over context names in file order. Each call starts over.
    pub fn contexts(&self) -> Contexts<'_> {
        Contexts {
            inner: self.contexts.iter(),
        }
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|context| context.name == name)
    }

    /// All contexts, including every message regardless of status.
    pub fn groups(&self) -> &[Context] {
        &self.contexts
    }

    /// Every message paired with its context name, vanished ones included.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts.iter().flat_map(|context| {
            context
                .messages
                .iter()
                .map(move |message| (context.name.as_str(), message))
        })
    }

    /// The entry a live lookup would return, if any.
    pub fn live_message(&self, context: &str, source: &str, comment: &str) -> Option<&Message> {
        self.find_live(context, source, comment)
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();
        for context in &self.contexts {
            stats += context.stats();
        }
        stats
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn version(&self) -> Option<&str> {
        self.header.version.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.header.language.as_deref()
    }

    pub fn source_language(&self) -> Option<&str> {
        self.header.source_language.as_deref()
    }

    /// Non-fatal problems found while loading.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    fn find_live(&self, context: &str, source: &str, comment: &str) -> Option<&Message> {
        self.live
            .get(context)?
            .get(source)?
            .iter()
            .map(|r| &self.contexts[r.context].messages[r.message])
            .find(|message| message.disambiguation() == comment)
    }

    fn find_live_with_fallback(
        &self,
        context: &str,
        source: &str,
        comment: &str,
    ) -> Option<&Message> {
        self.find_live(context, source, comment).or_else(|| {
            if comment.is_empty() {
                None
            } else {
                self.find_live(context, source, "")
            }
        })
    }
}

impl FromStr for Catalog {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Iterator returned by [`Catalog::contexts`].
#[derive(Debug, Clone)]
pub struct Contexts<'a> {
    inner: std::slice::Iter<'a, Context>,
}

impl<'a> Iterator for Contexts<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|context| context.name.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Contexts<'_> {}

fn build_live_index(contexts: &[Context]) -> LiveIndex {
    let mut live = LiveIndex::new();
    for (context_idx, context) in contexts.iter().enumerate() {
        for (message_idx, message) in context.messages.iter().enumerate() {
            if !message.is_retrievable() {
                continue;
            }
            live.entry(context.name.clone())
                .or_default()
                .entry(message.source.clone())
                .or_default()
                .push(MessageRef {
                    context: context_idx,
                    message: message_idx,
                });
        }
    }
    live
}
