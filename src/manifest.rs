//! Typed view of a package.json manifest.
//!
//! Only the fields the dependency graph cares about are modeled: the package
//! name and the two dependency groups. Everything else in the manifest is
//! ignored. Declaration order of dependencies matters downstream, so the
//! groups deserialize into insertion-ordered maps.

use std::path::Path;

use indexmap::IndexMap;
use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ManifestParseError, WorkspaceCyclesError};

#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    pub fn parse_str(content: &str, file: &Path) -> Result<Self, WorkspaceCyclesError> {
        parse_json(content, file)
    }

    /// All declared dependency names: runtime first, then development, each
    /// group in declaration order. Names appearing in both groups are kept
    /// twice.
    pub fn declared_dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .map(String::as_str)
    }
}

/// Parse a JSON document, wrapping failures in a diagnostic that points at
/// the offending position in the source.
pub(crate) fn parse_json<T: DeserializeOwned>(
    content: &str,
    file: &Path,
) -> Result<T, WorkspaceCyclesError> {
    serde_json::from_str(content).map_err(|e| {
        let span = span_for(content, &e);

        WorkspaceCyclesError::ManifestParseError(Box::new(ManifestParseError {
            file: file.display().to_string(),
            source_code: NamedSource::new(file.display().to_string(), content.to_string()),
            span,
            source: e,
        }))
    })
}

/// Translate serde_json's line/column error position into a byte span.
fn span_for(content: &str, err: &serde_json::Error) -> Option<SourceSpan> {
    let line = err.line();
    if line == 0 {
        return None;
    }

    let offset: usize = content
        .lines()
        .take(line - 1)
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + err.column().saturating_sub(1);

    Some(SourceSpan::new(offset.min(content.len()).into(), 1))
}
