//! Conversion of load failures into reportable issues.

use crate::{catalog::CatalogError, issues::ParseErrorIssue};

pub fn parse_error_issue(err: &CatalogError) -> ParseErrorIssue {
    let error = match err {
        CatalogError::Io { error, .. } => format!("cannot read file: {}", error),
        CatalogError::Parse { error, .. } => error.kind.to_string(),
    };
    ParseErrorIssue {
        file_path: err.path().display().to_string(),
        line: err.line(),
        error,
    }
}
