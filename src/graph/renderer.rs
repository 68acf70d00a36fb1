//! Graph rendering in DOT and Mermaid formats.

use std::collections::HashSet;
use std::io::Write;

use indexmap::IndexMap;

use crate::detector::Cycle;
use crate::error::WorkspaceCyclesError;
use crate::graph::PackageGraph;

mod colors {
    pub const CYCLE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const CYCLE_FILL: &str = "#FFF3E0"; // Light orange
}

// Write helper that converts IO errors into the crate error type
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(WorkspaceCyclesError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(WorkspaceCyclesError::from)
    };
}

pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    /// Render a Graphviz digraph. When cycle highlighting is on, each cycle
    /// becomes its own labeled cluster and the remaining edges follow at the
    /// top level.
    pub fn render_dot(
        &self,
        graph: &PackageGraph,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<(), WorkspaceCyclesError> {
        writeln_out!(output, "digraph workspace_dependencies {{")?;
        writeln_out!(output, "  rankdir=LR;")?;
        writeln_out!(output, "  node [shape=box, style=rounded];")?;

        let mut cycle_pairs: HashSet<(&str, &str)> = HashSet::new();

        if self.highlight_cycles {
            for (index, cycle) in cycles.iter().enumerate() {
                writeln_out!(output)?;
                writeln_out!(output, "  subgraph cluster_{index} {{")?;
                writeln_out!(output, "    label=\"Cycle {}\";", index + 1)?;
                writeln_out!(output, "    color=\"{}\";", colors::CYCLE_STROKE)?;

                for pair in cycle.nodes().windows(2) {
                    cycle_pairs.insert((pair[0].as_str(), pair[1].as_str()));
                    writeln_out!(
                        output,
                        "    \"{}\" -> \"{}\";",
                        escape_dot(&pair[0]),
                        escape_dot(&pair[1])
                    )?;
                }

                writeln_out!(output, "  }}")?;
            }
        }

        writeln_out!(output)?;

        for (name, node) in graph.iter() {
            if node.dependencies.is_empty() {
                writeln_out!(output, "  \"{}\";", escape_dot(name))?;
                continue;
            }

            for edge in &node.dependencies {
                if cycle_pairs.contains(&(name, edge.name.as_str())) {
                    continue;
                }
                writeln_out!(
                    output,
                    "  \"{}\" -> \"{}\";",
                    escape_dot(name),
                    escape_dot(&edge.name)
                )?;
            }
        }

        writeln_out!(output, "}}")?;

        Ok(())
    }

    /// Render a Mermaid `graph TD` diagram. Package names can contain
    /// characters Mermaid identifiers cannot, so nodes get synthetic ids
    /// with the real name as the label.
    pub fn render_mermaid(
        &self,
        graph: &PackageGraph,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<(), WorkspaceCyclesError> {
        writeln_out!(output, "graph TD")?;

        let ids: IndexMap<&str, String> = graph
            .names()
            .enumerate()
            .map(|(i, name)| (name, format!("n{i}")))
            .collect();

        for (name, node) in graph.iter() {
            let from_id = &ids[name];

            if node.dependencies.is_empty() {
                writeln_out!(output, "    {}[\"{}\"]", from_id, escape_mermaid(name))?;
                continue;
            }

            for edge in &node.dependencies {
                let Some(to_id) = ids.get(edge.name.as_str()) else {
                    continue;
                };
                writeln_out!(
                    output,
                    "    {}[\"{}\"] --> {}[\"{}\"]",
                    from_id,
                    escape_mermaid(name),
                    to_id,
                    escape_mermaid(&edge.name)
                )?;
            }
        }

        if self.highlight_cycles && !cycles.is_empty() {
            writeln_out!(output)?;
            writeln_out!(
                output,
                "    classDef cycle fill:{},stroke:{}",
                colors::CYCLE_FILL,
                colors::CYCLE_STROKE
            )?;

            let mut cycle_ids: Vec<&str> = Vec::new();
            let mut seen: HashSet<&str> = HashSet::new();
            for cycle in cycles {
                for name in cycle.nodes() {
                    if let Some(id) = ids.get(name.as_str())
                        && seen.insert(id.as_str())
                    {
                        cycle_ids.push(id.as_str());
                    }
                }
            }

            writeln_out!(output, "    class {} cycle", cycle_ids.join(","))?;
        }

        Ok(())
    }
}

fn escape_dot(name: &str) -> String {
    name.replace('"', "\\\"")
}

fn escape_mermaid(name: &str) -> String {
    name.replace('"', "#quot;")
}
