//! Graph command executor

use std::fs::File;
use std::io::{self, BufWriter};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::GraphOptions;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, PackageGraphBuilder};
use crate::reader::ManifestReader;
use crate::workspace_discovery::WorkspaceDiscovery;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} dependency graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        // Discover and read the workspace
        let discovery = WorkspaceDiscovery::new(&config.root);
        let manifests = discovery
            .member_manifests(None)
            .wrap_err("Failed to discover workspace packages")?;

        if manifests.is_empty() {
            eprintln!(
                "{} No workspace packages found to visualize",
                style("ℹ").blue()
            );
            return Ok(());
        }

        let reader = ManifestReader::new(&config.root);
        let records = reader
            .read_all(&manifests, None)
            .wrap_err("Failed to read package manifests")?;

        // Build dependency graph
        let mut graph_builder = PackageGraphBuilder::new();
        graph_builder.build(&records, None);

        // Detect cycles if highlighting is requested
        let cycles = if config.highlight_cycles {
            let mut detector = CycleDetector::new();
            detector.detect_cycles(graph_builder.graph());
            detector.cycles().to_vec()
        } else {
            Vec::new()
        };

        let renderer = GraphRenderer::new(config.highlight_cycles);

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        // Render based on format
        match config.format {
            GraphFormat::Dot => {
                renderer
                    .render_dot(graph_builder.graph(), &cycles, output_writer.as_mut())
                    .wrap_err("Failed to render DOT graph")?;
            }
            GraphFormat::Mermaid => {
                renderer
                    .render_mermaid(graph_builder.graph(), &cycles, output_writer.as_mut())
                    .wrap_err("Failed to render Mermaid graph")?;
            }
        }

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
