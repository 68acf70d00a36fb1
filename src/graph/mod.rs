//! # Graph Construction and Rendering Module
//!
//! Builds the workspace package graph and renders it for visualization.
//!
//! ## Components
//!
//! - **PackageGraphBuilder**: turns the manifest reader's records into a
//!   [`PackageGraph`]
//! - **PackageGraph** / **PackageNode** / **DependencyEdge**: the name-keyed
//!   adjacency representation, preserving declaration order
//! - **GraphRenderer**: DOT and Mermaid output, with optional cycle
//!   highlighting

mod builder;
mod renderer;
mod types;

pub use builder::PackageGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::{DependencyEdge, PackageGraph, PackageNode};
