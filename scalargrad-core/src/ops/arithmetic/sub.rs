// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use num_traits::Float;
use std::fmt::Debug;

/// Creates the node `a - b`.
pub fn sub_op<T: Float + Debug>(
    graph: &mut Graph<T>,
    a: NodeId,
    b: NodeId,
) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value(a)?;
    let b_value = graph.value(b)?;
    Ok(graph.push(BackwardOp::Sub, a_value - b_value, vec![a, b]))
}

/// grad(a) = grad_output, grad(b) = -grad_output
pub(crate) fn sub_backward<T: Float>(grad_output: T) -> [T; 2] {
    [grad_output, -grad_output]
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
