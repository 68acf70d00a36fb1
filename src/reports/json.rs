//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::WorkspaceCyclesError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, WorkspaceCyclesError> {
        // Detection output is already deterministic (sorted DFS roots), so
        // cycles are emitted in detection order.
        let cycles: Vec<_> = detector
            .cycles()
            .iter()
            .map(|cycle| {
                json!({
                    "entry": cycle.entry(),
                    "nodes": cycle.nodes(),
                    "files": cycle
                        .manifest_paths()
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect::<Vec<_>>(),
                })
            })
            .collect();

        let report = json!({
            "has_cycles": detector.has_cycles(),
            "cycle_count": detector.cycle_count(),
            "cycles": cycles,
        });

        serde_json::to_string_pretty(&report).map_err(WorkspaceCyclesError::Json)
    }
}
