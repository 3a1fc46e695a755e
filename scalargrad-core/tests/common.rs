use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::{Graph, NodeId, ScalarGradError};

// Builds a random DAG on top of `inputs` using add/sub/mul (and relu unless
// `smooth` is set), reusing earlier nodes freely so that shared
// sub-expressions are common. The same seed always produces the same
// expression, so the builder can be replayed on perturbed inputs. Returns the
// last node created.
#[allow(dead_code)]
pub(crate) fn build_random_expression(
    graph: &mut Graph,
    inputs: &[NodeId],
    seed: u64,
    ops: usize,
    smooth: bool,
) -> Result<NodeId, ScalarGradError> {
    debug_assert!(!inputs.is_empty(), "random expressions need at least one input");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pool: Vec<NodeId> = inputs.to_vec();

    for _ in 0..ops {
        let a = pool[rng.gen_range(0..pool.len())];
        let b = pool[rng.gen_range(0..pool.len())];
        let kinds = if smooth { 3 } else { 4 };
        let node = match rng.gen_range(0..kinds) {
            0 => graph.add(a, b)?,
            1 => graph.sub(a, b)?,
            2 => graph.mul(a, b)?,
            _ => graph.relu(a)?,
        };
        pool.push(node);
    }
    pool.last().copied().ok_or_else(|| {
        ScalarGradError::InternalError("random expression built without inputs".to_string())
    })
}

// Creates one leaf per value.
#[allow(dead_code)]
pub(crate) fn leaves(graph: &mut Graph, values: &[f64]) -> Vec<NodeId> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}
