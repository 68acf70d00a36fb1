use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "workspace-cycles",
    about = "Detect circular dependencies between packages in a JavaScript monorepo",
    long_about = "workspace-cycles reads the workspace definition of an npm or pnpm monorepo, \
                  builds a directed graph of the dependencies declared between workspace \
                  packages, and reports every circular dependency it finds.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the workspace for circular package dependencies
    ///
    /// Reads every workspace package manifest, builds the intra-workspace
    /// dependency graph, and reports each cycle with the packages and
    /// manifest files involved. Use --reject to fail CI builds when cycles
    /// exist.
    #[command(
        long_about = "Detect circular dependencies between workspace packages. This command \
                      expands the workspace patterns from package.json (or \
                      pnpm-workspace.yaml), parses each member's package.json, builds a \
                      dependency graph restricted to intra-workspace references, and \
                      enumerates every cycle with a deterministic depth-first search. With \
                      --reject the process exits non-zero when at least one cycle is found, \
                      which makes it suitable as a CI gate."
    )]
    Check {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with a non-zero status if any cycle is found
        #[arg(long, env = "WORKSPACE_CYCLES_REJECT")]
        reject: bool,
    },

    /// Render the workspace dependency graph
    ///
    /// Generates a visual representation of the package graph in DOT or
    /// Mermaid format, with detected cycles highlighted. Useful for
    /// documentation and for understanding how a cycle came to be.
    #[command(
        long_about = "Render the workspace dependency graph as a Graphviz DOT file or a \
                      Mermaid diagram. Cycles are highlighted by default: DOT output groups \
                      each cycle into its own cluster, Mermaid output styles the involved \
                      nodes. Pipe the DOT output through `dot -Tpng` to produce an image."
    )]
    Graph {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "dot",
            env = "WORKSPACE_CYCLES_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "WORKSPACE_CYCLES_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(
            long,
            default_value = "true",
            env = "WORKSPACE_CYCLES_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum GraphFormat {
    Dot,
    Mermaid,
}
