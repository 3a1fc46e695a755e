use super::*;
use approx::assert_relative_eq;

#[test]
fn test_mul_forward() -> Result<(), ScalarGradError> {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.leaf(-2.0);
    let c = mul_op(&mut graph, a, b)?;

    assert_relative_eq!(graph.value(c)?, -6.0);
    assert_eq!(graph.node(c)?.op_tag(), "*");
    Ok(())
}

#[test]
fn test_mul_backward_product_rule() -> Result<(), ScalarGradError> {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.leaf(-2.0);
    let out = mul_op(&mut graph, a, b)?;
    graph.backward(out)?;

    assert_relative_eq!(graph.grad(a)?, graph.value(b)?);
    assert_relative_eq!(graph.grad(b)?, graph.value(a)?);
    Ok(())
}

#[test]
fn test_mul_square() -> Result<(), ScalarGradError> {
    // x * x has derivative 2x
    let mut graph: Graph = Graph::new();
    let x = graph.leaf(4.0);
    let out = mul_op(&mut graph, x, x)?;
    graph.backward(out)?;

    assert_relative_eq!(graph.value(out)?, 16.0);
    assert_relative_eq!(graph.grad(x)?, 8.0);
    Ok(())
}

#[test]
fn test_mul_backward_f32() -> Result<(), ScalarGradError> {
    let mut graph: Graph<f32> = Graph::new();
    let a = graph.leaf(1.5);
    let b = graph.leaf(2.0);
    let out = mul_op(&mut graph, a, b)?;
    graph.backward_with_grad(out, 0.5)?;

    assert_relative_eq!(graph.grad(a)?, 1.0_f32, epsilon = 1e-6);
    assert_relative_eq!(graph.grad(b)?, 0.75_f32, epsilon = 1e-6);
    Ok(())
}
