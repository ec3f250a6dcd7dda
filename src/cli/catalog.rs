//! Catalog loading.
//!
//! Catalogs come either from a JSON file in the [`CatalogSet`] format or from the builtin set shipped with
//! `sqldoc_core`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sqldoc_core::CatalogSet;

/// Errors while reading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a catalog set from JSON text.
pub fn parse_catalogs(json: &str) -> Result<CatalogSet, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load the catalogs for a run: `path` when given, the builtin catalogs otherwise.
pub fn load_catalogs(path: Option<&Path>) -> Result<CatalogSet, CatalogLoadError> {
    let Some(path) = path else {
        tracing::debug!("using builtin catalogs");
        return Ok(CatalogSet::builtin());
    };

    let text = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalogs = parse_catalogs(&text).map_err(|source| CatalogLoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        functions = catalogs.functions.len(),
        aggregates = catalogs.aggregates.len(),
        operators = catalogs.operators.overload_count(),
        "loaded catalog file"
    );
    Ok(catalogs)
}
