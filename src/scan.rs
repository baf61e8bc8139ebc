//! Discovery and loading of `.ts` files below a translations directory.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::catalog::{Catalog, CatalogError};

/// A successfully loaded translation file.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub path: PathBuf,
    /// Locale taken from the file name, e.g. `en_GB` for `ui_en_GB.ts`.
    pub locale: Option<String>,
    pub catalog: Catalog,
}

#[derive(Debug, Default)]
pub struct ScanCatalogsResult {
    pub catalogs: Vec<LoadedCatalog>,
    /// Files that failed to load.
    pub failures: Vec<CatalogError>,
}

impl ScanCatalogsResult {
    pub fn file_count(&self) -> usize {
        self.catalogs.len() + self.failures.len()
    }
}

/// Extracts the locale suffix from a Qt translation file name.
///
/// Examples:
/// - "ui_en_GB.ts" -> Some("en_GB")
/// - "app_de.ts" -> Some("de")
/// - "/path/to/i18n/fr.ts" -> Some("fr")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let stem = path.as_ref().file_stem()?.to_str()?;
    let parts: Vec<&str> = stem.split('_').collect();
    let is_language = |s: &str| (2..=3).contains(&s.len()) && s.chars().all(|c| c.is_ascii_lowercase());
    let is_region = |s: &str| {
        (s.len() == 2 && s.chars().all(|c| c.is_ascii_uppercase()))
            || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
    };

    match parts.as_slice() {
        [.., lang, region] if is_language(*lang) && is_region(*region) => {
            Some(format!("{}_{}", lang, region))
        }
        [.., lang] if is_language(*lang) => Some(lang.to_string()),
        _ => None,
    }
}

/// Recursively list `.ts` files below `dir`, sorted, skipping paths that
/// match any of `ignores` (relative to `dir`).
pub fn find_translation_files(dir: &Path, ignores: &[Pattern]) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        bail!(
            "Translations directory '{}' does not exist.\n\
             Hint: Check your .tscatrc.json 'translationsDir' setting.",
            dir.display()
        );
    }

    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("ts")
        {
            continue;
        }
        let relative = path.strip_prefix(dir).unwrap_or(path);
        if ignores.iter().any(|pattern| pattern.matches_path(relative)) {
            tracing::debug!(path = %path.display(), "ignored");
            continue;
        }
        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Load every translation file below `dir` in parallel.
///
/// Individual load failures are collected instead of aborting the scan.
pub fn scan_catalogs(dir: &Path, ignores: &[Pattern]) -> Result<ScanCatalogsResult> {
    let files = find_translation_files(dir, ignores)?;

    let loaded: Vec<Result<LoadedCatalog, CatalogError>> = files
        .par_iter()
        .map(|path| {
            Catalog::load(path).map(|catalog| LoadedCatalog {
                path: path.clone(),
                locale: catalog
                    .language()
                    .map(str::to_string)
                    .or_else(|| extract_locale(path)),
                catalog,
            })
        })
        .collect();

    let mut result = ScanCatalogsResult::default();
    for item in loaded {
        match item {
            Ok(catalog) => result.catalogs.push(catalog),
            Err(err) => {
                tracing::debug!(error = %err, "catalog skipped");
                result.failures.push(err);
            }
        }
    }
    Ok(result)
}
