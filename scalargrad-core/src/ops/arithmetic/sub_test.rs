use super::*;
use approx::assert_relative_eq;

#[test]
fn test_sub_forward() -> Result<(), ScalarGradError> {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(10.0);
    let b = graph.leaf(4.0);
    let c = sub_op(&mut graph, a, b)?;

    assert_relative_eq!(graph.value(c)?, 6.0);
    assert_eq!(graph.node(c)?.op_tag(), "-");
    Ok(())
}

#[test]
fn test_sub_backward() -> Result<(), ScalarGradError> {
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(10.0);
    let b = graph.leaf(4.0);
    let out = sub_op(&mut graph, a, b)?;
    graph.backward(out)?;

    assert_relative_eq!(graph.grad(a)?, 1.0);
    assert_relative_eq!(graph.grad(b)?, -1.0);
    Ok(())
}

#[test]
fn test_sub_self_cancels() -> Result<(), ScalarGradError> {
    // out = a - a is constant, so both contributions cancel.
    let mut graph: Graph = Graph::new();
    let a = graph.leaf(3.0);
    let out = sub_op(&mut graph, a, a)?;
    graph.backward(out)?;

    assert_relative_eq!(graph.value(out)?, 0.0);
    assert_relative_eq!(graph.grad(a)?, 0.0);
    Ok(())
}
