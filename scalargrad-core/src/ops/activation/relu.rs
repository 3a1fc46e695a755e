use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use num_traits::Float;
use std::fmt::Debug;

/// Applies the Rectified Linear Unit: ReLU(x) = max(0, x).
///
/// A NaN input maps to 0, matching `Float::max`.
pub fn relu_op<T: Float + Debug>(
    graph: &mut Graph<T>,
    input: NodeId,
) -> Result<NodeId, ScalarGradError> {
    let input_value = graph.value(input)?;
    Ok(graph.push(
        BackwardOp::Relu,
        input_value.max(T::zero()),
        vec![input],
    ))
}

/// Passes `grad_output` through where the output is positive, zero elsewhere.
pub(crate) fn relu_backward<T: Float>(grad_output: T, output_value: T) -> T {
    if output_value > T::zero() {
        grad_output
    } else {
        T::zero()
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
