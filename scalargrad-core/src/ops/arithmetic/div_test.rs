use super::*;
use approx::assert_relative_eq;

#[test]
fn test_div_forward_structure() -> Result<(), ScalarGradError> {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(6.0);
    let b = graph.leaf(3.0);
    let out = div_op(&mut graph, a, b)?;

    assert_relative_eq!(graph.value(out)?, 2.0, epsilon = 1e-12);
    let node = graph.node(out)?;
    assert_eq!(node.op_tag(), "*");
    assert_eq!(node.operands()[0], a);

    let reciprocal = graph.node(node.operands()[1])?;
    assert_eq!(reciprocal.op_tag(), "^");
    assert_eq!(reciprocal.operands(), &[b]);
    assert_relative_eq!(reciprocal.value(), 1.0 / 3.0, epsilon = 1e-12);
    assert_eq!(graph.len(), 4);
    Ok(())
}

#[test]
fn test_div_backward() -> Result<(), ScalarGradError> {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(6.0);
    let b = graph.leaf(3.0);
    let out = div_op(&mut graph, a, b)?;
    graph.backward(out)?;

    // d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
    assert_relative_eq!(graph.grad(a)?, 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(b)?, -6.0 / 9.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_div_by_zero_is_infinite() -> Result<(), ScalarGradError> {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(0.0);
    let out = div_op(&mut graph, a, b)?;

    let value = graph.value(out)?;
    assert!(value.is_infinite() && value > 0.0);
    Ok(())
}

#[test]
fn test_div_foreign_numerator_appends_nothing() {
    let mut graph: Graph = Graph::new();
    let mut other: Graph = Graph::new();
    let x = other.leaf(1.0);
    let b = graph.leaf(2.0);

    let result = div_op(&mut graph, x, b);
    assert!(matches!(result, Err(ScalarGradError::ForeignNode { .. })));
    assert_eq!(graph.len(), 1);
}
