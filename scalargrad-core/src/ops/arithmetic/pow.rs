// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use num_traits::Float;
use std::fmt::Debug;

/// Raises `base` to the scalar power `exponent`.
///
/// No domain check is made: a negative base with a fractional exponent, or a
/// zero base with a negative exponent, yields NaN or infinity as IEEE float
/// arithmetic dictates.
pub fn pow_op<T: Float + Debug>(
    graph: &mut Graph<T>,
    base: NodeId,
    exponent: T,
) -> Result<NodeId, ScalarGradError> {
    let base_value = graph.value(base)?;
    Ok(graph.push(
        BackwardOp::Pow { exponent },
        base_value.powf(exponent),
        vec![base],
    ))
}

/// d(x^n)/dx = n * x^(n-1), evaluated at the base, not at the output.
pub(crate) fn pow_backward<T: Float>(grad_output: T, base_value: T, exponent: T) -> T {
    let grad_factor = exponent * base_value.powf(exponent - T::one());
    grad_factor * grad_output
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
