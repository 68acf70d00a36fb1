//! # Cycle Detection Module
//!
//! Finds every circular dependency in the workspace package graph.
//!
//! ## Algorithm
//!
//! Three-color depth-first search: nodes start unvisited, are in-progress
//! while they sit on the active DFS path, and are done once fully explored.
//! An edge into an in-progress node is a back edge, and the ancestor path
//! from that node to the current one is a cycle. Roots are processed in
//! lexicographic name order, so output is deterministic regardless of input
//! iteration order. Each node is visited exactly once, giving O(V + E)
//! overall.
//!
//! The search is iterative with an explicit stack; a deep dependency chain
//! cannot overflow the call stack.
//!
//! ## Example
//!
//! ```
//! use workspace_cycles::detector::CycleDetector;
//! use workspace_cycles::graph::{DependencyEdge, PackageGraph, PackageNode};
//!
//! let mut graph = PackageGraph::new();
//!
//! // Create a cycle: a -> b -> a
//! graph.insert(
//!     "a".to_string(),
//!     PackageNode {
//!         manifest_path: "a/package.json".into(),
//!         dependencies: vec![DependencyEdge {
//!             name: "b".to_string(),
//!             manifest_path: "b/package.json".into(),
//!         }],
//!     },
//! );
//! graph.insert(
//!     "b".to_string(),
//!     PackageNode {
//!         manifest_path: "b/package.json".into(),
//!         dependencies: vec![DependencyEdge {
//!             name: "a".to_string(),
//!             manifest_path: "a/package.json".into(),
//!         }],
//!     },
//! );
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph);
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cycles()[0].nodes(), ["a", "b", "a"]);
//! ```

mod detector_impl;

pub use detector_impl::*;
