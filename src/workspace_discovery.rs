use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::WorkspaceCyclesError;
use crate::manifest::parse_json;
use crate::progress::ProgressReporter;

/// The subset of the root package.json that defines the workspace.
#[derive(Debug, Deserialize)]
struct RootManifest {
    workspaces: Option<WorkspacesField>,
}

/// npm accepts either a bare pattern list or an object with a `packages`
/// list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WorkspacesField {
    Patterns(Vec<String>),
    Detailed { packages: Vec<String> },
}

#[derive(Debug, Deserialize)]
struct PnpmWorkspace {
    packages: Vec<String>,
}

/// Locates the workspace member manifests under a workspace root.
///
/// The workspace definition comes from the root package.json `workspaces`
/// field, falling back to `pnpm-workspace.yaml`. Member patterns are glob
/// expanded, `!`-prefixed patterns subtract matches, and anything under a
/// `node_modules` directory is skipped.
pub struct WorkspaceDiscovery {
    root: PathBuf,
}

impl WorkspaceDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the member package.json paths, relative to the workspace
    /// root, in pattern order with duplicates removed.
    pub fn member_manifests(
        &self,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<PathBuf>, WorkspaceCyclesError> {
        let patterns = self.workspace_patterns()?;
        self.expand_patterns(&patterns, progress)
    }

    fn workspace_patterns(&self) -> Result<Vec<String>, WorkspaceCyclesError> {
        let root_manifest = self.root.join("package.json");
        let content = match std::fs::read_to_string(&root_manifest) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(WorkspaceCyclesError::MissingRootManifest {
                    path: self.root.clone(),
                });
            }
            Err(e) => {
                return Err(WorkspaceCyclesError::ManifestReadError {
                    path: root_manifest,
                    source: e,
                });
            }
        };

        let root: RootManifest = parse_json(&content, &root_manifest)?;

        match root.workspaces {
            Some(WorkspacesField::Patterns(patterns)) => Ok(patterns),
            Some(WorkspacesField::Detailed { packages }) => Ok(packages),
            None => self.pnpm_patterns(),
        }
    }

    /// pnpm keeps the workspace definition out of package.json entirely.
    /// Any failure to read or parse it means there is no usable workspace
    /// definition.
    fn pnpm_patterns(&self) -> Result<Vec<String>, WorkspaceCyclesError> {
        let path = self.root.join("pnpm-workspace.yaml");

        let missing = || WorkspaceCyclesError::MissingWorkspaceDefinition {
            path: self.root.clone(),
        };

        let content = std::fs::read_to_string(&path).map_err(|_| missing())?;
        let parsed: PnpmWorkspace = serde_yaml::from_str(&content).map_err(|_| missing())?;

        Ok(parsed.packages)
    }

    fn expand_patterns(
        &self,
        patterns: &[String],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<PathBuf>, WorkspaceCyclesError> {
        let (includes, excludes): (Vec<&String>, Vec<&String>) =
            patterns.iter().partition(|p| !p.starts_with('!'));

        let exclude_matchers: Vec<glob::Pattern> = excludes
            .iter()
            .map(|p| {
                let trimmed = p.trim_start_matches('!');
                glob::Pattern::new(trimmed).map_err(|e| WorkspaceCyclesError::InvalidPattern {
                    pattern: (*p).clone(),
                    source: e,
                })
            })
            .collect::<Result<_, _>>()?;

        let mut seen = HashSet::new();
        let mut manifests = Vec::new();

        for pattern in includes {
            let glob_pattern = self.root.join(pattern).join("package.json");
            let glob_str = glob_pattern.to_string_lossy();

            let paths = glob::glob(&glob_str).map_err(|e| WorkspaceCyclesError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;

            // glob yields matches for one pattern in sorted order; unreadable
            // directories are skipped rather than failing discovery.
            for path in paths.flatten() {
                if !path.is_file() {
                    continue;
                }

                if let Some(p) = progress {
                    p.checking_manifest(&path);
                }

                let Ok(relative) = path.strip_prefix(&self.root) else {
                    continue;
                };

                if relative
                    .components()
                    .any(|c| c.as_os_str() == "node_modules")
                {
                    continue;
                }

                let package_dir = relative.parent().unwrap_or(Path::new(""));
                if exclude_matchers.iter().any(|m| m.matches_path(package_dir)) {
                    continue;
                }

                if seen.insert(relative.to_path_buf()) {
                    manifests.push(relative.to_path_buf());
                }
            }
        }

        Ok(manifests)
    }
}
