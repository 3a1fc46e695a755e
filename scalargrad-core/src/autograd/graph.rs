use crate::error::ScalarGradError;
use crate::node::{Node, NodeId};

/// Builds a topological order of every node reachable from `root`.
///
/// Depth-first post-order over `operands`: each node is emitted once, after
/// all of its operands, and `root` comes last. The visited set is indexed by
/// arena position, so distinct nodes never alias even when they share a value
/// and an operation tag.
///
/// The traversal uses an explicit stack, so deep chains do not grow the call
/// stack.
pub(crate) fn topological_sort<T>(
    nodes: &[Node<T>],
    root: NodeId,
) -> Result<Vec<NodeId>, ScalarGradError> {
    let mut visited = vec![false; nodes.len()];
    let mut sorted = Vec::new();
    // (node, operands already scheduled)
    let mut stack = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            sorted.push(id);
            continue;
        }
        let seen = visited.get_mut(id.index).ok_or_else(|| {
            ScalarGradError::InternalError(format!(
                "node {:?} is outside the arena ({} nodes) during topological sort",
                id,
                nodes.len()
            ))
        })?;
        if *seen {
            continue;
        }
        *seen = true;

        stack.push((id, true));
        // Reversed so the first operand is finished first.
        for &operand in nodes[id.index].operands.iter().rev() {
            if operand.index >= id.index {
                return Err(ScalarGradError::InternalError(format!(
                    "operand {:?} of {:?} does not precede its consumer",
                    operand, id
                )));
            }
            if !visited[operand.index] {
                stack.push((operand, false));
            }
        }
    }

    Ok(sorted)
}
