//! Check command executor

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::CheckCyclesConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::PackageGraphBuilder;
use crate::progress::ProgressReporter;
use crate::reader::ManifestReader;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};
use crate::workspace_discovery::WorkspaceDiscovery;

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckCyclesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking for cyclic dependencies in '{}'...\n",
            style("🔎").cyan(),
            style(config.root.display()).bold()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        // Discover workspace member manifests
        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }

        let discovery = WorkspaceDiscovery::new(&config.root);
        let manifests = discovery
            .member_manifests(progress.as_ref())
            .wrap_err("Failed to discover workspace packages")?;

        if let Some(p) = progress.as_mut() {
            p.finish_discovery(manifests.len());
        }

        if manifests.is_empty() {
            eprintln!(
                "{} No workspace packages found to analyze",
                style("ℹ").blue()
            );
            return Ok(());
        }

        // Read and parse the manifests
        if let Some(p) = progress.as_mut() {
            p.start_manifest_reading(manifests.len());
        }

        let reader = ManifestReader::new(&config.root);
        let records = reader
            .read_all(&manifests, progress.as_ref())
            .wrap_err("Failed to read package manifests")?;

        if let Some(p) = progress.as_mut() {
            p.finish_manifest_reading();
        }

        // Build dependency graph
        let mut graph_builder = PackageGraphBuilder::new();
        graph_builder.build(&records, progress.as_ref());

        // Detect cycles
        if let Some(p) = progress.as_mut() {
            p.start_cycle_detection();
        }

        let mut detector = CycleDetector::new();
        detector.detect_cycles(graph_builder.graph());

        if let Some(p) = progress.as_ref() {
            p.finish_cycle_detection(detector.cycle_count());
        }

        // Generate report based on format
        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(config.max_cycles);
                generator.generate_report(&detector)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new();
                generator.generate_report(&detector)
            }
            OutputFormat::GitHub => {
                let generator = GitHubReportGenerator::new();
                generator.generate_report(&detector)
            }
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e).wrap_err("Failed to generate report");
            }
        }

        // Exit with error code if cycles found and requested
        if config.reject && detector.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
