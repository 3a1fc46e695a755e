// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use num_traits::Float;
use std::fmt::Debug;

/// Creates the node `a + b`.
///
/// # Errors
/// `ForeignNode` if either operand belongs to another graph.
pub fn add_op<T: Float + Debug>(
    graph: &mut Graph<T>,
    a: NodeId,
    b: NodeId,
) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value(a)?;
    let b_value = graph.value(b)?;
    Ok(graph.push(BackwardOp::Add, a_value + b_value, vec![a, b]))
}

/// d(a + b)/da = d(a + b)/db = 1, so both operands receive `grad_output`.
pub(crate) fn add_backward<T: Float>(grad_output: T) -> [T; 2] {
    [grad_output, grad_output]
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
