//! # Workspace Cycles - Detect Circular Dependencies in JavaScript Monorepos
//!
//! workspace-cycles finds circular dependencies between the packages of an
//! npm or pnpm workspace. It reads each member's package.json, builds a
//! directed graph of the dependencies that point at other workspace
//! packages, and enumerates every cycle in that graph.
//!
//! ## Main Components
//!
//! - **WorkspaceDiscovery**: expands the workspace definition into member
//!   manifest paths
//! - **ManifestReader**: reads and parses the member manifests concurrently
//! - **PackageGraphBuilder**: builds the intra-workspace dependency graph
//! - **CycleDetector**: enumerates cycles with a deterministic three-color
//!   DFS
//! - **Reports**: human-readable, JSON, and GitHub Actions output
//!
//! ## Usage
//!
//! ### Checking a monorepo for cycles
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use workspace_cycles::detector::CycleDetector;
//! use workspace_cycles::graph::PackageGraphBuilder;
//! use workspace_cycles::reader::ManifestReader;
//! use workspace_cycles::reports::{HumanReportGenerator, ReportGenerator};
//! use workspace_cycles::workspace_discovery::WorkspaceDiscovery;
//!
//! # fn main() -> miette::Result<()> {
//! let root = PathBuf::from("/path/to/your/monorepo");
//!
//! // Step 1: Resolve the workspace member manifests
//! let discovery = WorkspaceDiscovery::new(&root);
//! let manifests = discovery.member_manifests(None)?;
//!
//! println!("Found {} packages", manifests.len());
//!
//! // Step 2: Read the manifests and build the dependency graph
//! let reader = ManifestReader::new(&root);
//! let records = reader.read_all(&manifests, None)?;
//!
//! let mut graph_builder = PackageGraphBuilder::new();
//! graph_builder.build(&records, None);
//!
//! // Step 3: Detect circular dependencies
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(graph_builder.graph());
//!
//! // Step 4: Report
//! if detector.has_cycles() {
//!     println!("⚠️  Found {} circular dependencies!", detector.cycle_count());
//!
//!     let report = HumanReportGenerator::new(None);
//!     println!("{}", report.generate_report(&detector)?);
//! } else {
//!     println!("✅ No circular dependencies found!");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Visualizing the dependency graph
//!
//! ```no_run
//! use workspace_cycles::graph::GraphRenderer;
//! use miette::IntoDiagnostic;
//! # use std::path::PathBuf;
//! # use workspace_cycles::detector::CycleDetector;
//! # use workspace_cycles::graph::PackageGraphBuilder;
//! # use workspace_cycles::reader::ManifestReader;
//! # use workspace_cycles::workspace_discovery::WorkspaceDiscovery;
//!
//! # fn main() -> miette::Result<()> {
//! # let root = PathBuf::from(".");
//! # let discovery = WorkspaceDiscovery::new(&root);
//! # let manifests = discovery.member_manifests(None)?;
//! # let reader = ManifestReader::new(&root);
//! # let records = reader.read_all(&manifests, None)?;
//! # let mut graph_builder = PackageGraphBuilder::new();
//! # graph_builder.build(&records, None);
//! # let mut detector = CycleDetector::new();
//! # detector.detect_cycles(graph_builder.graph());
//! // Render the graph with cycles highlighted
//! let renderer = GraphRenderer::new(true);
//!
//! // A DOT file for Graphviz
//! let mut dot_output = Vec::new();
//! renderer.render_dot(graph_builder.graph(), detector.cycles(), &mut dot_output)?;
//! std::fs::write("dependencies.dot", dot_output).into_diagnostic()?;
//!
//! // Or a Mermaid diagram for documentation
//! let mut mermaid_output = Vec::new();
//! renderer.render_mermaid(graph_builder.graph(), detector.cycles(), &mut mermaid_output)?;
//! std::fs::write("dependencies.mmd", mermaid_output).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod manifest;
pub mod progress;
pub mod reader;
pub mod reports;
pub mod workspace_discovery;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
