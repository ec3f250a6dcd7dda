//! Generation configuration for the `functions` command

use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "docs/generated/sql";

/// File names written into the output directory.
pub const FUNCTIONS_FILE: &str = "functions.md";
pub const AGGREGATES_FILE: &str = "aggregates.md";
pub const OPERATORS_FILE: &str = "operators.md";

/// Where reference docs are written and which catalogs they are built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Existing directory that receives the generated files
    pub out_dir: PathBuf,
    /// JSON catalog file; the builtin catalog is used when absent
    pub catalog: Option<PathBuf>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            catalog: None,
        }
    }
}

impl GenerateConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Read catalogs from a JSON file instead of the builtin set
    pub fn with_catalog(mut self, catalog: impl Into<PathBuf>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    pub fn functions_path(&self) -> PathBuf {
        self.out_dir.join(FUNCTIONS_FILE)
    }

    pub fn aggregates_path(&self) -> PathBuf {
        self.out_dir.join(AGGREGATES_FILE)
    }

    pub fn operators_path(&self) -> PathBuf {
        self.out_dir.join(OPERATORS_FILE)
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_out_dir() {
        let config = GenerateConfig::default();
        assert_eq!(config.out_dir, Path::new("docs").join("generated").join("sql"));
    }

    #[test]
    fn test_default_uses_builtin_catalog() {
        let config = GenerateConfig::default();
        assert!(config.catalog_path().is_none());
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(GenerateConfig::new(), GenerateConfig::default());
    }

    // ========================================
    // Builder tests
    // ========================================

    #[test]
    fn test_with_out_dir() {
        let config = GenerateConfig::new().with_out_dir("out");
        assert_eq!(config.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_with_catalog() {
        let config = GenerateConfig::new().with_catalog("catalog.json");
        assert_eq!(config.catalog_path(), Some(Path::new("catalog.json")));
    }

    #[test]
    fn test_builder_chain() {
        let config = GenerateConfig::new().with_catalog("c.json").with_out_dir("site");
        assert_eq!(config.out_dir, PathBuf::from("site"));
        assert_eq!(config.catalog, Some(PathBuf::from("c.json")));
    }

    // ========================================
    // Output paths
    // ========================================

    #[test]
    fn test_output_paths_live_in_out_dir() {
        let config = GenerateConfig::new().with_out_dir("site");
        assert_eq!(config.functions_path(), Path::new("site").join("functions.md"));
        assert_eq!(config.aggregates_path(), Path::new("site").join("aggregates.md"));
        assert_eq!(config.operators_path(), Path::new("site").join("operators.md"));
    }
}
