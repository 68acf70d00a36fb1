//! Graph command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;

/// Configuration for the graph command
#[derive(Debug, Clone)]
pub struct GraphOptions {
    /// Workspace root to analyze
    pub root: PathBuf,
    /// Graph output format
    pub format: GraphFormat,
    /// Output file (stdout if None)
    pub output: Option<PathBuf>,
    /// Highlight cycles in the rendered graph
    pub highlight_cycles: bool,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    root: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_cycles: Option<bool>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, crate::error::WorkspaceCyclesError> {
        Ok(GraphOptions {
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
            output: self.output.ok_or_else(|| {
                crate::error::WorkspaceCyclesError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                }
            })?,
            highlight_cycles: self.highlight_cycles.ok_or_else(|| {
                crate::error::WorkspaceCyclesError::ConfigurationError {
                    message: "Missing required field: highlight_cycles".to_string(),
                }
            })?,
        })
    }
}
