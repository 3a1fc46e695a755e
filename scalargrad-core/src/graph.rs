//! The arena that owns every node of a computation and drives the backward pass.

use crate::autograd::graph::topological_sort;
use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::node::{Node, NodeId};
use crate::ops::activation::relu::relu_op;
use crate::ops::arithmetic::{add_op, div_op, mul_op, pow_op, sub_op};
use log::{debug, trace};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_GRAPH_ID: AtomicUsize = AtomicUsize::new(0);

/// A dynamically built scalar computation graph.
///
/// The graph is the sole owner of its nodes. Nodes are appended in creation
/// order and refer to their operands by [`NodeId`], so an operand always sits
/// at a lower index than any of its consumers and no ownership cycle can form.
/// Dropping the graph releases every node at once.
///
/// ```
/// use scalargrad_core::Graph;
///
/// let mut graph: Graph = Graph::new();
/// let a = graph.leaf(1.0);
/// let b = graph.leaf(2.0);
/// let c = graph.add(a, b)?;
/// let d = graph.mul(c, c)?;
/// let loss = graph.add(d, d)?;
/// graph.backward(loss)?;
///
/// assert_eq!(graph.grad(a)?, 12.0);
/// assert_eq!(graph.grad(b)?, 12.0);
/// # Ok::<(), scalargrad_core::ScalarGradError>(())
/// ```
#[derive(Debug)]
pub struct Graph<T = f64> {
    id: usize,
    nodes: Vec<Node<T>>,
}

impl<T: Float + Debug> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> Graph<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over the nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.iter()
    }

    /// Creates an input node holding `value`.
    pub fn leaf(&mut self, value: T) -> NodeId {
        self.push(BackwardOp::Leaf, value, Vec::new())
    }

    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        add_op(self, a, b)
    }

    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        sub_op(self, a, b)
    }

    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        mul_op(self, a, b)
    }

    /// `a / b`, built as `a * b^-1`. Creates two nodes.
    pub fn div(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, ScalarGradError> {
        div_op(self, a, b)
    }

    pub fn pow(&mut self, base: NodeId, exponent: T) -> Result<NodeId, ScalarGradError> {
        pow_op(self, base, exponent)
    }

    /// Rectified linear unit, `max(0, a)`.
    pub fn relu(&mut self, a: NodeId) -> Result<NodeId, ScalarGradError> {
        relu_op(self, a)
    }

    /// Returns the node behind `id`.
    ///
    /// # Errors
    /// `ForeignNode` if `id` was issued by another graph.
    pub fn node(&self, id: NodeId) -> Result<&Node<T>, ScalarGradError> {
        if id.graph != self.id {
            return Err(ScalarGradError::ForeignNode {
                node: id,
                graph: self.id,
            });
        }
        // Ids are only minted by `push` on this graph and nodes are never removed.
        self.nodes.get(id.index).ok_or_else(|| {
            ScalarGradError::InternalError(format!(
                "node {:?} is missing from graph {} ({} nodes)",
                id,
                self.id,
                self.nodes.len()
            ))
        })
    }

    pub fn value(&self, id: NodeId) -> Result<T, ScalarGradError> {
        Ok(self.node(id)?.value)
    }

    pub fn grad(&self, id: NodeId) -> Result<T, ScalarGradError> {
        Ok(self.node(id)?.grad)
    }

    /// Every node reachable from `root`, each listed after all of its operands.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        self.node(root)?;
        topological_sort(&self.nodes, root)
    }

    /// Backpropagates from `root` with a seed gradient of one.
    ///
    /// Afterwards `root` holds exactly one and every other node reachable from
    /// it holds dRoot/dNode added on top of whatever was already there.
    /// Running the pass twice without [`zero_grad`](Self::zero_grad) doubles
    /// every gradient except the root's.
    pub fn backward(&mut self, root: NodeId) -> Result<(), ScalarGradError> {
        self.backward_with_grad(root, T::one())
    }

    /// Backpropagates from `root`, seeding it with `gradient` (dL/dRoot).
    ///
    /// The pass accumulates into its own buffer keyed by node identity, so a
    /// node's backward rule always sees the fully summed gradient of the
    /// current pass. The root's stored gradient is set to `gradient`; the
    /// result for every other node is added into its stored gradient.
    pub fn backward_with_grad(&mut self, root: NodeId, gradient: T) -> Result<(), ScalarGradError> {
        let sorted = self.topological_order(root)?;
        debug!(
            "backward: graph {} root {:?}, {} reachable node(s)",
            self.id,
            root,
            sorted.len()
        );

        let mut grad_map: HashMap<NodeId, T> = HashMap::with_capacity(sorted.len());
        grad_map.insert(root, gradient);

        let mut inputs = Vec::with_capacity(2);
        for &id in sorted.iter().rev() {
            let upstream = grad_map.get(&id).copied().unwrap_or_else(T::zero);
            let node = &self.nodes[id.index];
            trace!(
                "backward: {:?} op '{}' value {:?} grad {:?}",
                id,
                node.op.tag(),
                node.value,
                upstream
            );

            inputs.clear();
            inputs.extend(node.operands.iter().map(|operand| self.nodes[operand.index].value));
            let input_grads = node.op.backward(upstream, node.value, &inputs)?;

            for (&operand, grad_to_add) in node.operands.iter().zip(input_grads) {
                let acc = grad_map.entry(operand).or_insert_with(T::zero);
                *acc = *acc + grad_to_add;
            }
        }

        for (id, grad) in grad_map {
            let node = &mut self.nodes[id.index];
            node.grad = if id == root { gradient } else { node.grad + grad };
        }
        Ok(())
    }

    /// Resets every gradient in the graph to zero.
    pub fn zero_grad(&mut self) {
        debug!("zero_grad: graph {} ({} nodes)", self.id, self.nodes.len());
        for node in &mut self.nodes {
            node.grad = T::zero();
        }
    }

    pub(crate) fn push(&mut self, op: BackwardOp<T>, value: T, operands: Vec<NodeId>) -> NodeId {
        let id = NodeId {
            graph: self.id,
            index: self.nodes.len(),
        };
        self.nodes.push(Node::new(id, value, op, operands));
        id
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
