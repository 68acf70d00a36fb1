//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::WorkspaceCyclesError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, WorkspaceCyclesError> {
        let mut output = String::new();

        if !detector.has_cycles() {
            write!(
                output,
                "\n{} No cyclic dependencies found in workspace\n",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        write!(
            output,
            "\n{} Found {} cyclic {} in workspace:\n\n",
            style("❌").red().bold(),
            style(detector.cycle_count()).red().bold(),
            pluralize("dependency", detector.cycle_count())
        )?;

        let total_cycles = detector.cycle_count();
        let showing_all = self.max_cycles.is_none_or(|limit| limit >= total_cycles);

        let cycles_to_show = match self.max_cycles {
            Some(limit) => &detector.cycles()[..limit.min(total_cycles)],
            None => detector.cycles(),
        };

        for (i, cycle) in cycles_to_show.iter().enumerate() {
            writeln!(
                output,
                "{} Cycle #{}: {}",
                style("🔄").yellow(),
                i + 1,
                style(cycle.entry()).bold()
            )?;

            writeln!(output, "  {} Modules:", style("📦").blue())?;
            writeln!(
                output,
                "    {}",
                cycle
                    .nodes()
                    .iter()
                    .map(|n| style(n).yellow().to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ")
            )?;

            writeln!(output, "  {} Files:", style("📄").cyan())?;
            for path in cycle.manifest_paths() {
                writeln!(
                    output,
                    "    {} {}",
                    style("→").dim(),
                    style(path.display()).dim()
                )?;
            }
            writeln!(output)?;
        }

        if !showing_all {
            writeln!(
                output,
                "{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(cycles_to_show.len()).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        writeln!(
            output,
            "\n{} To break a cycle, remove at least one of its dependency declarations.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Consider extracting shared code into a package both sides can depend on.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
