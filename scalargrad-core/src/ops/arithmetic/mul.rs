// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use num_traits::Float;
use std::fmt::Debug;

/// Creates the node `a * b`.
pub fn mul_op<T: Float + Debug>(
    graph: &mut Graph<T>,
    a: NodeId,
    b: NodeId,
) -> Result<NodeId, ScalarGradError> {
    let a_value = graph.value(a)?;
    let b_value = graph.value(b)?;
    Ok(graph.push(BackwardOp::Mul, a_value * b_value, vec![a, b]))
}

/// Product rule.
pub(crate) fn mul_backward<T: Float>(grad_output: T, a_value: T, b_value: T) -> [T; 2] {
    // grad_a = grad_output * b
    // grad_b = grad_output * a
    [b_value * grad_output, a_value * grad_output]
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
