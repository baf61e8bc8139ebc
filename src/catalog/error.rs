use std::path::PathBuf;

use thiserror::Error;

/// Why a translation document could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("malformed XML: {0}")]
    Xml(String),
    #[error("expected root element <TS>, found <{0}>")]
    UnexpectedRoot(String),
    #[error("document has no <TS> root element")]
    MissingRoot,
    #[error("<{element}> is missing required <{child}>")]
    MissingElement {
        element: &'static str,
        child: &'static str,
    },
    #[error("<{element}> appears more than once in <{parent}>")]
    RepeatedElement {
        element: &'static str,
        parent: &'static str,
    },
    #[error("unexpected <{found}> inside <{parent}>")]
    UnexpectedElement { found: String, parent: &'static str },
    #[error("invalid value \"{value}\" for attribute {attribute}")]
    InvalidAttribute {
        attribute: &'static str,
        value: String,
    },
    #[error("document ended inside <{0}>")]
    UnexpectedEof(&'static str),
}

/// A load failure with the 1-based line it was detected on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Failure to load a catalog from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {error}", path.display())]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error("failed to parse {}: {error}", path.display())]
    Parse { path: PathBuf, error: ParseError },
}

impl CatalogError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    /// Line of the parse failure, if the file was readable.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io { .. } => None,
            Self::Parse { error, .. } => Some(error.line),
        }
    }
}
