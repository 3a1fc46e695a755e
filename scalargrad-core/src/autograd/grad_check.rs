use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use log::{trace, warn};
use num_traits::Float;
use std::fmt::Debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check needs at least one input")]
    EmptyInputs,
    #[error("Value {0:?} cannot be represented in the graph's scalar type")]
    UnrepresentableValue(f64),
    #[error("Graph error during gradient check: {0}")]
    GraphError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives a fresh graph together with one leaf per entry of `inputs`
/// and must return the output node. It is called once for the analytical
/// pass and twice per input for the perturbed evaluations, so it must build
/// the same expression every time.
///
/// The analytical and numerical derivative of each input must agree within
/// `tolerance`, either absolutely or relative to the larger magnitude.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    T: Float + Debug,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    if inputs.is_empty() {
        return Err(GradCheckError::EmptyInputs);
    }
    let eps = T::from(epsilon).ok_or(GradCheckError::UnrepresentableValue(epsilon))?;

    // --- 1. Analytical pass ---
    let mut graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<NodeId> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&mut graph, &leaves)?;
    graph.backward(output)?;

    // --- 2. Numerical pass, one input at a time ---
    for (input_index, &leaf) in leaves.iter().enumerate() {
        let analytical_grad = to_f64(graph.grad(leaf)?)?;
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut perturbed = inputs.to_vec();
        perturbed[input_index] = inputs[input_index] + eps;
        let loss_plus = to_f64(evaluate(&func, &perturbed)?)?;
        perturbed[input_index] = inputs[input_index] - eps;
        let loss_minus = to_f64(evaluate(&func, &perturbed)?)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        trace!(
            "grad_check: input {} analytical {} numerical {}",
            input_index,
            analytical_grad,
            numerical_grad
        );
        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            let difference = (analytical_grad - numerical_grad).abs();
            warn!(
                "grad_check: mismatch on input {}: analytical {} numerical {} (diff {})",
                input_index, analytical_grad, numerical_grad, difference
            );
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

/// Forward-only evaluation of `func` at `values` on a throwaway graph.
fn evaluate<T, F>(func: &F, values: &[T]) -> Result<T, ScalarGradError>
where
    T: Float + Debug,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, ScalarGradError>,
{
    let mut graph = Graph::with_capacity(values.len());
    let leaves: Vec<NodeId> = values.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&mut graph, &leaves)?;
    graph.value(output)
}

fn to_f64<T: Float>(value: T) -> Result<f64, GradCheckError> {
    value.to_f64().ok_or_else(|| {
        GradCheckError::GraphError(ScalarGradError::InternalError(
            "scalar is not convertible to f64".to_string(),
        ))
    })
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
