use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::{
    cli::CommonArgs,
    config::{Config, load_config},
    scan::{ScanCatalogsResult, scan_catalogs},
};

/// Data container for check operations.
///
/// Holds the resolved configuration; catalogs are loaded on first use and
/// cached for the lifetime of the context.
pub struct CheckContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub translations_dir: PathBuf,
    pub verbose: bool,

    catalogs: OnceCell<ScanCatalogsResult>,
}

impl CheckContext {
    /// Create a new CheckContext from command line args.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let config_result = load_config(&args.path)?;

        if args.verbose && !config_result.from_file {
            eprintln!("Note: No .tscatrc.json found, using default configuration");
        }

        let translations_dir = match &args.translations_dir {
            Some(dir) => args.path.join(dir),
            None => config_result.translations_dir(),
        };
        tracing::debug!(dir = %translations_dir.display(), "translations directory");

        Ok(Self {
            root_dir: config_result.root,
            config: config_result.config,
            translations_dir,
            verbose: args.verbose,
            catalogs: OnceCell::new(),
        })
    }

    /// Load every catalog below the translations directory, once.
    pub fn ensure_catalogs(&self) -> Result<&ScanCatalogsResult> {
        if let Some(catalogs) = self.catalogs.get() {
            return Ok(catalogs);
        }
        let scanned = scan_catalogs(&self.translations_dir, &self.config.ignore_patterns())?;
        Ok(self.catalogs.get_or_init(|| scanned))
    }

    /// Path as shown in reports: relative to the project root when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
