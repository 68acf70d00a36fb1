//! Package graph construction.

use indexmap::IndexMap;

use crate::graph::{DependencyEdge, PackageGraph, PackageNode};
use crate::progress::ProgressReporter;
use crate::reader::PackageRecord;

/// Builds a [`PackageGraph`] from the manifest reader's record map.
///
/// A declared dependency becomes an edge only when its name matches another
/// workspace package; external dependencies are dropped silently. Edges keep
/// declaration order and are not de-duplicated, so a name listed under both
/// runtime and development dependencies produces two edges.
pub struct PackageGraphBuilder {
    graph: PackageGraph,
}

impl Default for PackageGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: PackageGraph::new(),
        }
    }

    /// Build the graph. Total over any record map; an empty map yields an
    /// empty graph.
    pub fn build(
        &mut self,
        records: &IndexMap<String, PackageRecord>,
        progress: Option<&ProgressReporter>,
    ) {
        for record in records.values() {
            if let Some(p) = progress {
                p.update_graph_progress(&record.name);
            }

            let dependencies = record
                .declared_dependencies
                .iter()
                .filter_map(|dep_name| {
                    records.get(dep_name).map(|target| DependencyEdge {
                        name: dep_name.clone(),
                        manifest_path: target.manifest_path.clone(),
                    })
                })
                .collect();

            self.graph.insert(
                record.name.clone(),
                PackageNode {
                    manifest_path: record.manifest_path.clone(),
                    dependencies,
                },
            );
        }
    }

    pub fn graph(&self) -> &PackageGraph {
        &self.graph
    }

    pub fn into_graph(self) -> PackageGraph {
        self.graph
    }
}
