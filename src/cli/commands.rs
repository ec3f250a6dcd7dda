//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::docgen::{generate_functions, generate_operators};

use super::catalog::load_catalogs;
use super::config::GenerateConfig;
use super::{CliError, CliResult, ExitCode};

/// Write `functions.md`, `aggregates.md` and `operators.md` into the configured output directory.
///
/// The output directory must already exist; it is never created.
#[tracing::instrument(skip_all, fields(out_dir = %config.out_dir.display()))]
pub fn generate_docs(config: &GenerateConfig) -> CliResult<ExitCode> {
    validate_output_dir(&config.out_dir)?;

    let catalogs = load_catalogs(config.catalog_path()).map_err(|e| CliError::failure(e.to_string()))?;

    write_output(&config.functions_path(), &generate_functions(&catalogs.functions, true))?;
    write_output(&config.aggregates_path(), &generate_functions(&catalogs.aggregates, false))?;
    write_output(&config.operators_path(), &generate_operators(&catalogs.operators))?;

    tracing::info!("generated builtin reference docs");
    Ok(ExitCode::SUCCESS)
}

/// Validate that the output directory exists and is a directory.
fn validate_output_dir(out_dir: &Path) -> CliResult<()> {
    if !out_dir.is_dir() {
        return Err(CliError::failure(format!("{} does not exist", out_dir.display())));
    }
    Ok(())
}

fn write_output(path: &Path, contents: &[u8]) -> CliResult<()> {
    fs::write(path, contents).map_err(|e| CliError::failure(format!("Error writing {}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote reference file");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sqldoc_core::CatalogSet;

    #[test]
    fn writes_all_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig::new().with_out_dir(dir.path());

        assert_eq!(generate_docs(&config).unwrap(), ExitCode::SUCCESS);

        let builtin = CatalogSet::builtin();
        assert_eq!(
            fs::read(dir.path().join("functions.md")).unwrap(),
            generate_functions(&builtin.functions, true)
        );
        assert_eq!(
            fs::read(dir.path().join("aggregates.md")).unwrap(),
            generate_functions(&builtin.aggregates, false)
        );
        assert_eq!(
            fs::read(dir.path().join("operators.md")).unwrap(),
            generate_operators(&builtin.operators)
        );
    }

    #[test]
    fn missing_out_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = generate_docs(&GenerateConfig::new().with_out_dir(&missing)).unwrap_err();
        assert_eq!(err.message, format!("{} does not exist", missing.display()));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(!missing.exists());
    }

    #[test]
    fn out_dir_that_is_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("functions.md");
        fs::write(&file, "").unwrap();
        let err = generate_docs(&GenerateConfig::new().with_out_dir(&file)).unwrap_err();
        assert!(err.message.ends_with("does not exist"));
    }

    #[test]
    fn catalog_file_drives_output() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.json");
        fs::write(
            &catalog,
            r#"{ "functions": [{ "name": "lower", "overloads": [
                { "types": { "args": [{ "type": "string" }] }, "return_type": "string" }
            ] }] }"#,
        )
        .unwrap();

        let config = GenerateConfig::new().with_out_dir(dir.path()).with_catalog(&catalog);
        generate_docs(&config).unwrap();

        let functions = fs::read_to_string(dir.path().join("functions.md")).unwrap();
        assert!(functions.starts_with("### string Functions\n\n"));
        assert!(functions.contains("<code>lower(<a href=\"string.html\">string</a>)"));
        assert!(fs::read(dir.path().join("aggregates.md")).unwrap().is_empty());
        assert!(fs::read(dir.path().join("operators.md")).unwrap().is_empty());
    }

    #[test]
    fn bad_catalog_file_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.json");
        fs::write(&catalog, r#"{ "functions": 5 }"#).unwrap();

        let config = GenerateConfig::new().with_out_dir(dir.path()).with_catalog(&catalog);
        let err = generate_docs(&config).unwrap_err();
        assert!(err.message.contains("invalid catalog"));
        assert!(!dir.path().join("functions.md").exists());
    }
}
