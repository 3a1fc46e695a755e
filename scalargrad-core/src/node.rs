// scalargrad-core/src/node.rs

use crate::autograd::BackwardOp;
use num_traits::Float;
use std::fmt::{self, Debug};

/// Stable identity of a node inside a [`Graph`](crate::graph::Graph).
///
/// The handle is the node's creation index in the graph's arena, tagged with
/// the id of the graph that created it. Two nodes holding the same value and
/// produced by the same operation still have distinct `NodeId`s, which is what
/// the topological sort keys its visited set on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) graph: usize,
    pub(crate) index: usize,
}

impl NodeId {
    /// Creation-order index of this node within its graph.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Id of the graph that owns this node.
    pub fn graph_id(&self) -> usize {
        self.graph
    }
}

impl Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}:{})", self.graph, self.index)
    }
}

/// One scalar in the computation graph together with its provenance.
///
/// `value`, `op` and `operands` are fixed when the node is pushed into the
/// arena. Only `grad` changes afterwards, and only through `Graph::backward*`
/// or `Graph::zero_grad`.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) id: NodeId,
    pub(crate) value: T,
    pub(crate) grad: T,
    pub(crate) op: BackwardOp<T>,
    pub(crate) operands: Vec<NodeId>,
}

impl<T: Float + Debug> Node<T> {
    pub(crate) fn new(id: NodeId, value: T, op: BackwardOp<T>, operands: Vec<NodeId>) -> Self {
        Node {
            id,
            value,
            grad: T::zero(),
            op,
            operands,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Forward value computed when the node was created.
    pub fn value(&self) -> T {
        self.value
    }

    /// Gradient accumulated by the backward passes run so far.
    pub fn grad(&self) -> T {
        self.grad
    }

    pub fn op(&self) -> &BackwardOp<T> {
        &self.op
    }

    /// Diagnostic tag of the producing operation (`""` for leaves).
    pub fn op_tag(&self) -> &'static str {
        self.op.tag()
    }

    /// Operand handles in the order they were passed to the constructor.
    pub fn operands(&self) -> &[NodeId] {
        &self.operands
    }

    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }
}
