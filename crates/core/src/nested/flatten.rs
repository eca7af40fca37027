//! Flattening of nested, possibly cyclic, integer lists.
//!
//! Both strategies walk the structure depth-first and left-to-right, mark
//! each list visited by its [`ListId`] before descending, and skip any list
//! already visited in the same call. They differ only in where the work list
//! lives:
//!
//! - [`flatten_recursive`] uses one call frame per nesting level. Its depth
//!   is bounded by the thread's stack; tens of thousands of levels overflow
//!   the stack and abort the process. That limit is not guarded.
//! - [`flatten_iterative`] keeps pending nodes in a heap-allocated stack and
//!   handles any depth that fits in memory.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::node::{ListId, NestedArena, Node};

/// Traversal strategy used by [`flatten`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlattenStrategy {
    /// Direct recursion, bounded by the call stack.
    Recursive,
    /// Explicit heap stack.
    #[default]
    Iterative,
}

/// Flattens `root` with the chosen strategy.
///
/// A `Null` root or an empty list yields an empty vector, an `Int` root yields
/// that single value.
pub fn flatten(arena: &NestedArena, root: &Node, strategy: FlattenStrategy) -> Vec<i64> {
    match strategy {
        FlattenStrategy::Recursive => flatten_recursive(arena, root),
        FlattenStrategy::Iterative => flatten_iterative(arena, root),
    }
}

/// Flattens `root` by recursing once per nested list,
/// e.g. converting `[[1, 2, [3]], 4]` to `[1, 2, 3, 4]`.
///
/// Recursion depth equals the nesting depth of the input, so deeply nested
/// input exhausts the stack. Use [`flatten_iterative`] for untrusted depth.
pub fn flatten_recursive(arena: &NestedArena, root: &Node) -> Vec<i64> {
    let mut flattened = Vec::new();
    match root {
        Node::Int(value) => flattened.push(*value),
        Node::List(id) => {
            let mut visited = FxHashSet::default();
            recurse_list(arena, *id, &mut visited, &mut flattened);
        }
        other => trace!(kind = other.type_name(), "ignoring non-list root"),
    }
    flattened
}

fn recurse_list(
    arena: &NestedArena,
    id: ListId,
    visited: &mut FxHashSet<ListId>,
    flattened: &mut Vec<i64>,
) {
    visited.insert(id);
    let Some(items) = arena.get(id) else {
        debug!(list = %id, "skipping list handle not owned by this arena");
        return;
    };

    for item in items {
        match item {
            Node::Int(value) => flattened.push(*value),
            Node::List(child) => {
                if visited.contains(child) {
                    trace!(list = %child, "skipping visited list");
                } else {
                    recurse_list(arena, *child, visited, flattened);
                }
            }
            other => trace!(kind = other.type_name(), "skipping malformed element"),
        }
    }
}

/// Flattens `root` with an explicit stack instead of recursion,
/// e.g. converting `[[1, 2, [3]], 4]` to `[1, 2, 3, 4]`.
///
/// Output is identical to [`flatten_recursive`] for every input, including
/// cyclic and shared lists.
pub fn flatten_iterative(arena: &NestedArena, root: &Node) -> Vec<i64> {
    let mut flattened = Vec::new();
    let mut visited = FxHashSet::default();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        match node {
            Node::Int(value) => flattened.push(*value),
            Node::List(id) => {
                // Siblings may both hold the same unvisited list; the second
                // pop must not expand it again.
                if !visited.insert(*id) {
                    continue;
                }
                let Some(items) = arena.get(*id) else {
                    debug!(list = %id, "skipping list handle not owned by this arena");
                    continue;
                };

                // Reverse push so the leftmost child is popped first.
                for item in items.iter().rev() {
                    match item {
                        Node::Int(_) => stack.push(item),
                        Node::List(child) => {
                            if visited.contains(child) {
                                trace!(list = %child, "skipping visited list");
                            } else {
                                stack.push(item);
                            }
                        }
                        other => trace!(kind = other.type_name(), "skipping malformed element"),
                    }
                }
            }
            other => trace!(kind = other.type_name(), "ignoring non-list root"),
        }
    }

    flattened
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(arena: &NestedArena, root: &Node) -> (Vec<i64>, Vec<i64>) {
        (
            flatten_recursive(arena, root),
            flatten_iterative(arena, root),
        )
    }

    #[test]
    fn int_root_yields_itself() {
        let arena = NestedArena::new();
        assert_eq!(both(&arena, &Node::Int(9)), (vec![9], vec![9]));
    }

    #[test]
    fn malformed_root_yields_nothing() {
        let arena = NestedArena::new();
        for root in [Node::Null, Node::Bool(true), Node::Real(1.0), Node::from("x")] {
            assert_eq!(both(&arena, &root), (vec![], vec![]));
        }
    }

    #[test]
    fn strategy_dispatch() {
        let mut arena = NestedArena::new();
        let inner = arena.list([Node::Int(2)]);
        let root = arena.list([Node::Int(1), inner]);
        assert_eq!(
            flatten(&arena, &root, FlattenStrategy::Recursive),
            vec![1, 2]
        );
        assert_eq!(flatten(&arena, &root, FlattenStrategy::default()), vec![1, 2]);
    }

    #[test]
    fn same_list_twice_in_one_parent_is_emitted_once() {
        let mut arena = NestedArena::new();
        let shared = arena.alloc(vec![Node::Int(5), Node::Int(6)]);
        let root = arena.list([Node::List(shared), Node::Int(0), Node::List(shared)]);
        assert_eq!(both(&arena, &root), (vec![5, 6, 0], vec![5, 6, 0]));
    }
}
