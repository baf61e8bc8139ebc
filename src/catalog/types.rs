use std::fmt;

use serde::Serialize;

/// Lifecycle marker of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    /// Translation is current and should be used.
    Finished,
    /// Translation is pending; the value may be empty.
    Unfinished,
    /// Source string is no longer referenced by the UI.
    Vanished,
}

impl TranslationStatus {
    /// Map the `type` attribute of a `<translation>` element to a status.
    ///
    /// A missing attribute means finished. Returns `None` for values this
    /// crate does not know; callers treat those as unfinished.
    pub fn from_attribute(value: Option<&str>) -> Option<Self> {
        match value {
            None => Some(Self::Finished),
            Some("unfinished") => Some(Self::Unfinished),
            // Older Qt releases wrote `obsolete` for what is now `vanished`.
            Some("vanished") | Some("obsolete") => Some(Self::Vanished),
            Some(_) => None,
        }
    }

    /// Value of the `type` attribute written for this status.
    pub fn as_attribute(&self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Vanished => Some("vanished"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finished => "finished",
            Self::Unfinished => "unfinished",
            Self::Vanished => "vanished",
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `<location>` hint. Informational only, never consulted by lookups.
///
/// `line` keeps the raw attribute so relative forms like `+2` survive a
/// round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            line: Some(line.into()),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.filename, &self.line) {
            (Some(file), Some(line)) => write!(f, "{}:{}", file, line),
            (Some(file), None) => write!(f, "{}", file),
            (None, Some(line)) => write!(f, "line {}", line),
            (None, None) => write!(f, "<unknown>"),
        }
    }
}

/// An `<extra-*>` element kept verbatim for writing back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extra {
    /// Full element name, including the `extra-` prefix.
    pub name: String,
    pub value: String,
}

impl Extra {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One `<message>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_source: Option<String>,
    /// Disambiguation comment (`<comment>`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator_comment: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    pub status: TranslationStatus,
    /// Raw `type` attribute when it was not a known status. The entry is
    /// then loaded as unfinished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_type: Option<String>,
    /// Translation text. Empty for numerus messages. With length variants
    /// this is the first (longest) one.
    pub translation: String,
    /// Every `<lengthvariant>` of the translation, longest first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
    /// Set when the message was declared with `numerus="yes"`.
    pub numerus: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub numerus_forms: Vec<String>,
    /// Length variants per numerus form; empty when no form has any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub numerus_variants: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userdata: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<Extra>,
    /// 1-based line of the `<message>` tag in the source file.
    #[serde(skip)]
    pub line: usize,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id: None,
            source: source.into(),
            old_source: None,
            comment: None,
            old_comment: None,
            extra_comment: None,
            translator_comment: None,
            locations: Vec::new(),
            status: TranslationStatus::Finished,
            unknown_type: None,
            translation: translation.into(),
            variants: Vec::new(),
            numerus: false,
            numerus_forms: Vec::new(),
            numerus_variants: Vec::new(),
            userdata: None,
            extras: Vec::new(),
            line: 0,
        }
    }

    /// Disambiguation comment, with an absent comment read as empty.
    pub fn disambiguation(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// True when the message carries at least one non-empty translated text.
    pub fn has_translation(&self) -> bool {
        if self.numerus {
            self.numerus_forms.iter().any(|form| !form.is_empty())
        } else {
            !self.translation.is_empty()
        }
    }

    /// True when this entry may be surfaced by live lookups.
    pub fn is_retrievable(&self) -> bool {
        self.status == TranslationStatus::Finished && self.has_translation()
    }

    /// Translated text for a numerus form, or the plain translation for
    /// non-numerus messages. Empty texts yield `None`.
    ///
    /// Numerus form indexes past the end clamp to the last form.
    pub fn text_for_form(&self, form: usize) -> Option<&str> {
        let text = if self.numerus {
            let last = self.numerus_forms.len().checked_sub(1)?;
            self.numerus_forms[form.min(last)].as_str()
        } else {
            self.translation.as_str()
        };
        (!text.is_empty()).then_some(text)
    }
}

/// A named group of messages, typically one screen or component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<Extra>,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            extras: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();
        for message in &self.messages {
            stats.record(message);
        }
        stats
    }
}

/// Per-status message counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
}

impl CatalogStats {
    fn record(&mut self, message: &Message) {
        match message.status {
            TranslationStatus::Finished => self.finished += 1,
            TranslationStatus::Unfinished => self.unfinished += 1,
            TranslationStatus::Vanished => self.vanished += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.finished + self.unfinished + self.vanished
    }

    /// Messages still referenced by the UI.
    pub fn live(&self) -> usize {
        self.finished + self.unfinished
    }
}

impl std::ops::AddAssign for CatalogStats {
    fn add_assign(&mut self, other: Self) {
        self.finished += other.finished;
        self.unfinished += other.unfinished;
        self.vanished += other.vanished;
    }
}

/// A non-fatal problem found while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A `type` attribute value that is not a known status. The entry was
    /// loaded as unfinished.
    UnknownStatus {
        context: String,
        source: String,
        value: String,
        line: usize,
    },
    /// A context name seen more than once; the groups were merged.
    DuplicateContext { name: String, line: usize },
}

impl LoadWarning {
    pub fn line(&self) -> usize {
        match self {
            Self::UnknownStatus { line, .. } | Self::DuplicateContext { line, .. } => *line,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStatus {
                context,
                source,
                value,
                ..
            } => write!(
                f,
                "unknown translation type \"{}\" for \"{}\" in context {}",
                value, source, context
            ),
            Self::DuplicateContext { name, .. } => {
                write!(f, "context {} appears more than once", name)
            }
        }
    }
}
