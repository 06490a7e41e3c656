//! Registry tree and the machinery that fills it from XML.
//!
//! The tree is an arena of [`RegistryNode`]s addressed by [`NodeId`];
//! [`NodeRef`] is the read handle used for navigation and key lookup.
//! [`PopulationEngine`] converts a parsed document into nodes and
//! [`Registry`] ties loading, querying and dumping together.

mod core;
mod engine;
mod node;
mod tree;

pub use self::core::Registry;
pub use engine::PopulationEngine;
pub use node::{NodeId, NodeRef, RegistryNode};
pub use tree::RegistryTree;
