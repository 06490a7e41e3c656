//! RegelRecht Registry - Load XML documents into a dotted-path key/value tree.
//!
//! This crate reads an XML document and turns it into an in-memory registry:
//! every element and attribute becomes a node, text content becomes the
//! value of the element that owns it, and nodes are addressed by the
//! dot-joined path from a synthetic `root` node.
//!
//! # Example
//!
//! ```
//! use regelrecht_registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.read_str(r#"<a x="1"><b>42</b></a>"#).unwrap();
//!
//! let nodes = registry.get_nodes("root.a.b");
//! assert_eq!(nodes.len(), 1);
//! assert_eq!(nodes[0].value(), Some("42"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and load options
//! - [`error`]: Error types and Result alias
//! - [`diagnostics`]: Injected diagnostic sink
//! - [`xml`]: Classification of parsed XML nodes
//! - [`registry`]: The node arena, population engine and registry container
//! - [`snapshot`]: Serializable view of a subtree
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod registry;
pub mod snapshot;
pub mod xml;

// Re-export commonly used items
pub use config::LoadOptions;
pub use diagnostics::{DiagnosticSink, Level, NoopSink, TracingSink};
pub use error::{LoadCause, RegistryError, Result};
pub use registry::{NodeId, NodeRef, PopulationEngine, Registry, RegistryNode, RegistryTree};
pub use snapshot::NodeSnapshot;
