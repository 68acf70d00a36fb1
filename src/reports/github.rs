//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::WorkspaceCyclesError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, WorkspaceCyclesError> {
        let mut output = String::new();

        if !detector.has_cycles() {
            writeln!(
                output,
                "::notice title=Dependency Check::No cyclic dependencies found in workspace ✅"
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Cyclic Dependencies::Found {} cyclic {} in workspace",
            detector.cycle_count(),
            pluralize("dependency", detector.cycle_count())
        )?;

        for (i, cycle) in detector.cycles().iter().enumerate() {
            writeln!(
                output,
                "::warning title=Cycle {}::{}",
                i + 1,
                cycle.nodes().join(" → ")
            )?;

            for path in cycle.manifest_paths() {
                writeln!(output, "::notice::  {}", path.display())?;
            }
        }

        writeln!(
            output,
            "::notice title=Recommendation::To break a cycle, remove at least one of its \
             dependency declarations, or extract shared code into a separate package."
        )?;

        Ok(output)
    }
}
