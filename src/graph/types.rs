//! Core graph types
//!
//! The package graph is a name-keyed adjacency map rather than an index
//! based structure: the detector addresses nodes by package name and relies
//! on insertion and declaration order being preserved.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// A dependency reference that resolved to another workspace package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub name: String,
    /// Manifest path of the target package, relative to the workspace root.
    pub manifest_path: PathBuf,
}

/// One package's entry in the graph.
#[derive(Debug, Clone)]
pub struct PackageNode {
    pub manifest_path: PathBuf,
    /// Outgoing edges in declared order: runtime dependencies first, then
    /// development dependencies. Not de-duplicated.
    pub dependencies: Vec<DependencyEdge>,
}

/// Directed graph of intra-workspace package dependencies.
///
/// Nodes iterate in insertion order. Self-loops are representable; a package
/// that lists itself keeps that edge.
#[derive(Debug, Clone, Default)]
pub struct PackageGraph {
    nodes: IndexMap<String, PackageNode>,
}

impl PackageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, node: PackageNode) {
        self.nodes.insert(name, node);
    }

    pub fn get(&self, name: &str) -> Option<&PackageNode> {
        self.nodes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PackageNode)> {
        self.nodes.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn manifest_path(&self, name: &str) -> Option<&Path> {
        self.nodes.get(name).map(|n| n.manifest_path.as_path())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.dependencies.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
