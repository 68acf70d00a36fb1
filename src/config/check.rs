//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the check command
///
/// This struct contains all options for detecting and reporting circular
/// dependencies in a workspace.
#[derive(Debug, Clone)]
pub struct CheckCyclesConfig {
    /// Workspace root to analyze
    pub root: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with a non-zero status if cycles are found
    pub reject: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
}

impl CheckCyclesConfig {
    pub fn builder() -> CheckCyclesConfigBuilder {
        CheckCyclesConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckCyclesConfigBuilder {
    root: Option<PathBuf>,
    format: Option<OutputFormat>,
    reject: Option<bool>,
    max_cycles: Option<Option<usize>>,
}

impl CheckCyclesConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_reject(mut self, reject: bool) -> Self {
        self.reject = Some(reject);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for CheckCyclesConfigBuilder {
    type Config = CheckCyclesConfig;

    fn build(self) -> Result<Self::Config, crate::error::WorkspaceCyclesError> {
        Ok(CheckCyclesConfig {
            root: self.root.ok_or_else(|| {
                crate::error::WorkspaceCyclesError::ConfigurationError {
                    message: "Missing required field: root".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::WorkspaceCyclesError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            reject: self.reject.ok_or_else(|| {
                crate::error::WorkspaceCyclesError::ConfigurationError {
                    message: "Missing required field: reject".to_string(),
                }
            })?,
            max_cycles: self.max_cycles.ok_or_else(|| {
                crate::error::WorkspaceCyclesError::ConfigurationError {
                    message: "Missing required field: max_cycles".to_string(),
                }
            })?,
        })
    }
}
