//! Manifest reading stage.
//!
//! Reads every workspace member manifest and produces the name-keyed record
//! map the graph builder consumes. Reads fan out across a thread pool, one
//! task per file, and join all-or-nothing: the first failed read or parse
//! aborts the whole batch, so a partial map is never returned.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::error::WorkspaceCyclesError;
use crate::manifest::PackageManifest;
use crate::progress::ProgressReporter;

/// One workspace package, as read from its manifest. Immutable once built;
/// discarded after the graph is built.
#[derive(Debug, Clone)]
pub struct PackageRecord {
    pub name: String,
    /// Manifest location, relative to the workspace root.
    pub manifest_path: PathBuf,
    /// Runtime dependencies first, then development dependencies, each group
    /// in declaration order. Not de-duplicated across groups.
    pub declared_dependencies: Vec<String>,
}

pub struct ManifestReader {
    root: PathBuf,
}

impl ManifestReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read and parse all manifests, returning records keyed by package
    /// name in input order.
    ///
    /// If two manifests declare the same name, the later one in input order
    /// silently replaces the earlier one.
    pub fn read_all(
        &self,
        manifest_paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<IndexMap<String, PackageRecord>, WorkspaceCyclesError> {
        let records: Vec<PackageRecord> = manifest_paths
            .par_iter()
            .map(|path| {
                let record = self.read_one(path)?;
                if let Some(p) = progress {
                    p.manifest_read(path);
                }
                Ok(record)
            })
            .collect::<Result<_, WorkspaceCyclesError>>()?;

        let mut map = IndexMap::with_capacity(records.len());
        for record in records {
            map.insert(record.name.clone(), record);
        }

        Ok(map)
    }

    fn read_one(&self, manifest_path: &Path) -> Result<PackageRecord, WorkspaceCyclesError> {
        let absolute = self.root.join(manifest_path);

        let content = std::fs::read_to_string(&absolute).map_err(|e| {
            WorkspaceCyclesError::ManifestReadError {
                path: manifest_path.to_path_buf(),
                source: e,
            }
        })?;

        let manifest = PackageManifest::parse_str(&content, manifest_path)?;

        Ok(PackageRecord {
            name: manifest.name.clone(),
            manifest_path: manifest_path.to_path_buf(),
            declared_dependencies: manifest
                .declared_dependencies()
                .map(str::to_string)
                .collect(),
        })
    }
}
