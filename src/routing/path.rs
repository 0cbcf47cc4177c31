use crate::core::node::NodeId;

/// Reconstruct the route from `source` to `target` out of a predecessor map.
///
/// Walks backward from the target through predecessors and reverses the
/// result. If the walk does not terminate at the source the target is
/// unreachable and the path is empty. The source's own path is `[source]`.
pub fn reconstruct_path(
    predecessors: &[Option<NodeId>],
    source: NodeId,
    target: NodeId,
) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut cursor = Some(target);
    while let Some(node) = cursor {
        path.push(node);
        cursor = predecessors[node.index()];
    }
    path.reverse();

    if path.first() == Some(&source) {
        path
    } else {
        Vec::new()
    }
}
