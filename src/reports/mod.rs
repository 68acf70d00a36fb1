//! Report generation modules for different output formats
//!
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - github: GitHub Actions annotations for CI

pub mod github;
pub mod human;
pub mod json;

use crate::detector::CycleDetector;
use crate::error::WorkspaceCyclesError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from cycle detection results
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, WorkspaceCyclesError>;
}

pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
