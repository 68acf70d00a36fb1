use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON in '{file}'")]
#[diagnostic(
    code(workspace_cycles::manifest_parse_error),
    help("Check the JSON syntax near the highlighted position")
)]
pub struct ManifestParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum WorkspaceCyclesError {
    #[error("Missing package.json in '{path}'")]
    #[diagnostic(
        code(workspace_cycles::missing_root_manifest),
        help("Run from a workspace root, or pass the path to one")
    )]
    MissingRootManifest { path: PathBuf },

    #[error("Missing workspace definition in '{path}'")]
    #[diagnostic(
        code(workspace_cycles::missing_workspace_definition),
        help(
            "Declare a \"workspaces\" field in package.json or provide a pnpm-workspace.yaml \
             with a \"packages\" list"
        )
    )]
    MissingWorkspaceDefinition { path: PathBuf },

    #[error("Failed to read manifest '{path}'")]
    #[diagnostic(
        code(workspace_cycles::manifest_read_error),
        help("Check if the file exists and you have read permissions")
    )]
    ManifestReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ManifestParseError(Box<ManifestParseError>),

    #[error("Invalid workspace pattern '{pattern}'")]
    #[diagnostic(
        code(workspace_cycles::invalid_pattern),
        help("Check the glob syntax of the workspace patterns")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(workspace_cycles::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(workspace_cycles::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(workspace_cycles::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(workspace_cycles::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_manifest_parse_error_display() {
        let source_code = "{ not json }";
        let json_err = serde_json::from_str::<serde_json::Value>(source_code).unwrap_err();

        let error = ManifestParseError {
            file: "package.json".to_string(),
            source_code: NamedSource::new("package.json", source_code.to_string()),
            span: Some((2, 3).into()),
            source: json_err,
        };

        assert_eq!(error.to_string(), "Invalid JSON in 'package.json'");
    }

    #[test]
    fn test_manifest_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = WorkspaceCyclesError::ManifestReadError {
            path: PathBuf::from("packages/a/package.json"),
            source: io_err,
        };

        assert_eq!(
            error.to_string(),
            "Failed to read manifest 'packages/a/package.json'"
        );
    }

    #[test]
    fn test_missing_workspace_definition() {
        let error = WorkspaceCyclesError::MissingWorkspaceDefinition {
            path: PathBuf::from("/repo"),
        };

        assert_eq!(error.to_string(), "Missing workspace definition in '/repo'");
    }

    #[test]
    fn test_error_codes() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let read_err = WorkspaceCyclesError::ManifestReadError {
            path: PathBuf::from("package.json"),
            source: io_err,
        };

        use miette::Diagnostic;
        assert!(read_err.code().is_some());
        assert!(read_err.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: WorkspaceCyclesError = io_err.into();

        match err {
            WorkspaceCyclesError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: WorkspaceCyclesError = json_err.into();

        match err {
            WorkspaceCyclesError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
