// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use num_traits::Float;
use std::fmt::Debug;

/// Creates `a / b` as `a * b^-1`.
///
/// Two nodes are appended: the reciprocal `b^-1` (tag `"^"`) and the product
/// returned to the caller (tag `"*"`). Gradients flow back to `b` through the
/// reciprocal. A zero divisor gives an infinite reciprocal, not an error.
pub fn div_op<T: Float + Debug>(
    graph: &mut Graph<T>,
    a: NodeId,
    b: NodeId,
) -> Result<NodeId, ScalarGradError> {
    // Validate `a` before anything is appended for `b`.
    graph.node(a)?;
    let reciprocal = pow_op(graph, b, -T::one())?;
    mul_op(graph, a, reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
