use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::graph::{PackageGraph, PackageNode};

/// DFS node state. An edge into an `InProgress` node is a back edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// A detected circular dependency path.
///
/// `nodes` starts and ends with the same package name; the shortest form is
/// the self-loop `[X, X]`. `manifest_paths` is index-aligned with `nodes`:
/// entry `i` is the manifest of the package declaring the edge into
/// `nodes[i + 1]`, and the final entry is the cycle target's own manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    nodes: Vec<String>,
    manifest_paths: Vec<PathBuf>,
}

impl Cycle {
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn manifest_paths(&self) -> &[PathBuf] {
        &self.manifest_paths
    }

    /// The package the reported cycle is rooted at: the first ancestor-path
    /// node that was on the DFS path when the back edge was found. Not
    /// necessarily the lexicographically smallest member of the cycle.
    pub fn entry(&self) -> &str {
        &self.nodes[0]
    }

    /// Number of edges in the cycle.
    pub fn edge_count(&self) -> usize {
        self.nodes.len() - 1
    }
}

/// Detector for circular dependencies in a [`PackageGraph`].
///
/// Enumerates every back-edge-induced cycle, including overlapping cycles
/// that share nodes. Cycles are reported rooted wherever the DFS first
/// closed them; rotations are deliberately not canonicalized.
pub struct CycleDetector {
    cycles: Vec<Cycle>,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    pub fn new() -> Self {
        Self { cycles: Vec::new() }
    }

    /// Find all cycles in the graph.
    ///
    /// Roots are taken in sorted name order so results are deterministic
    /// regardless of the graph's insertion order. Total over any graph; an
    /// empty graph yields no cycles.
    pub fn detect_cycles(&mut self, graph: &PackageGraph) {
        let mut colors: HashMap<&str, Color> =
            graph.names().map(|name| (name, Color::Unvisited)).collect();

        let mut roots: Vec<&str> = graph.names().collect();
        roots.sort_unstable();

        for root in roots {
            if colors.get(root) == Some(&Color::Unvisited) {
                self.visit(graph, root, &mut colors);
            }
        }
    }

    /// Explore one DFS tree rooted at `root`.
    ///
    /// Iterative with an explicit frame stack; `path` and `path_manifests`
    /// mirror the ancestors of the node on top of the stack.
    fn visit<'g>(
        &mut self,
        graph: &'g PackageGraph,
        root: &'g str,
        colors: &mut HashMap<&'g str, Color>,
    ) {
        struct Frame<'g> {
            name: &'g str,
            node: &'g PackageNode,
            next_edge: usize,
        }

        let Some(root_node) = graph.get(root) else {
            return;
        };

        colors.insert(root, Color::InProgress);
        let mut stack = vec![Frame {
            name: root,
            node: root_node,
            next_edge: 0,
        }];
        let mut path: Vec<&'g str> = Vec::new();
        let mut path_manifests: Vec<&'g Path> = Vec::new();

        while !stack.is_empty() {
            let top = stack.len() - 1;
            let current = stack[top].name;
            let current_node = stack[top].node;
            let edge_index = stack[top].next_edge;

            let Some(edge) = current_node.dependencies.get(edge_index) else {
                // All outgoing edges handled.
                colors.insert(current, Color::Done);
                stack.pop();
                if !stack.is_empty() {
                    path.pop();
                    path_manifests.pop();
                }
                continue;
            };
            stack[top].next_edge += 1;

            match colors.get(edge.name.as_str()).copied() {
                Some(Color::Unvisited) => {
                    let Some(child) = graph.get(&edge.name) else {
                        continue;
                    };
                    colors.insert(edge.name.as_str(), Color::InProgress);
                    path.push(current);
                    path_manifests.push(&current_node.manifest_path);
                    stack.push(Frame {
                        name: edge.name.as_str(),
                        node: child,
                        next_edge: 0,
                    });
                }
                Some(Color::InProgress) => {
                    // Back edge. The target is an ancestor on the current
                    // path, except for a self-loop, where it is the current
                    // node itself and the slice below is empty.
                    let start = path
                        .iter()
                        .position(|&n| n == edge.name.as_str())
                        .unwrap_or(path.len());

                    let mut nodes: Vec<String> =
                        path[start..].iter().map(|&n| n.to_string()).collect();
                    nodes.push(current.to_string());
                    nodes.push(edge.name.clone());

                    let mut manifest_paths: Vec<PathBuf> = path_manifests[start..]
                        .iter()
                        .map(|p| p.to_path_buf())
                        .collect();
                    manifest_paths.push(current_node.manifest_path.clone());
                    manifest_paths.push(edge.manifest_path.clone());

                    self.cycles.push(Cycle {
                        nodes,
                        manifest_paths,
                    });
                }
                // Done: fully explored, any cycle through it was already
                // reported. None: edge to a name outside the graph, which
                // the builder's filtering makes unreachable.
                _ => {}
            }
        }
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }
}
