//! Reverse-mode automatic differentiation over dynamically built scalar graphs.
//!
//! A [`Graph`] owns every node. Leaves are created with [`Graph::leaf`], the
//! primitives in [`ops`] append new nodes, and [`Graph::backward`] fills in the
//! gradient of a chosen output with respect to every node it depends on.

pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;

pub use error::ScalarGradError;
pub use graph::Graph;
pub use node::{Node, NodeId};
// Re-export traits required by public functions/structs
pub use num_traits;
