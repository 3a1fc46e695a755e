// Backward rules of the primitive operations.

use crate::error::ScalarGradError;
use crate::ops::activation::relu::relu_backward;
use crate::ops::arithmetic::{
    add::add_backward, mul::mul_backward, pow::pow_backward, sub::sub_backward,
};
use num_traits::Float;
use std::fmt::Debug;

/// The operation that produced a node, carrying whatever the local derivative
/// needs beyond the operand values.
///
/// Every non-leaf node stores one of these in place of a captured closure. The
/// backward driver dispatches on the variant. Division has no variant of its
/// own: it is built from [`BackwardOp::Mul`] and [`BackwardOp::Pow`] with an
/// exponent of `-1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp<T> {
    /// Caller-supplied input. Its backward rule is a no-op.
    Leaf,
    Add,
    Sub,
    Mul,
    Pow { exponent: T },
    Relu,
}

impl<T: Float + Debug> BackwardOp<T> {
    /// Diagnostic tag of the operation.
    pub fn tag(&self) -> &'static str {
        match self {
            BackwardOp::Leaf => "",
            BackwardOp::Add => "+",
            BackwardOp::Sub => "-",
            BackwardOp::Mul => "*",
            BackwardOp::Pow { .. } => "^",
            BackwardOp::Relu => "ReLU",
        }
    }

    /// Number of operands the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Leaf => 0,
            BackwardOp::Pow { .. } | BackwardOp::Relu => 1,
            BackwardOp::Add | BackwardOp::Sub | BackwardOp::Mul => 2,
        }
    }

    /// Computes the contribution of `grad_output` (dL/dOutput) to each operand.
    ///
    /// `output_value` is the node's own forward value and `inputs` holds the
    /// forward values of its operands. The returned gradients are in the same
    /// order as `inputs`; a leaf returns an empty `Vec`.
    ///
    /// # Errors
    /// `ArityMismatch` if `inputs` does not hold exactly [`arity`](Self::arity)
    /// values.
    pub fn backward(
        &self,
        grad_output: T,
        output_value: T,
        inputs: &[T],
    ) -> Result<Vec<T>, ScalarGradError> {
        if inputs.len() != self.arity() {
            return Err(ScalarGradError::ArityMismatch {
                op: self.tag(),
                expected: self.arity(),
                actual: inputs.len(),
            });
        }

        let grads = match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add => add_backward(grad_output).to_vec(),
            BackwardOp::Sub => sub_backward(grad_output).to_vec(),
            BackwardOp::Mul => mul_backward(grad_output, inputs[0], inputs[1]).to_vec(),
            BackwardOp::Pow { exponent } => vec![pow_backward(grad_output, inputs[0], exponent)],
            BackwardOp::Relu => vec![relu_backward(grad_output, output_value)],
        };
        Ok(grads)
    }
}
