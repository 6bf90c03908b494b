//! Full structural check of an [`AvlTree`].

use crate::arena::Arena;
use crate::error::InvariantError;
use crate::node::AvlNode;
use crate::tree::AvlTree;
use crate::types::Node;
use crate::util::{first, next};

impl<V, C> AvlTree<V, C>
where
    C: Fn(&V, &V) -> i32,
{
    /// Checks parent links, balance indicators, strict ordering and the
    /// recorded size. O(n).
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        let Some(root) = self.root else {
            return check_size(self.size, 0, self.arena.len());
        };

        if self.arena[root].p().is_some() {
            return Err(InvariantError::RootHasParent { node: root });
        }

        let mut reachable = 0;
        validate_links_and_balance(&self.arena, root, &mut reachable)?;

        let mut prev_node: Option<u32> = None;
        let mut curr = first(&self.arena, Some(root));
        while let Some(i) = curr {
            if let Some(prev) = prev_node {
                if (self.comparator)(&self.arena[prev].v, &self.arena[i].v) >= 0 {
                    return Err(InvariantError::OrderViolated { node: i });
                }
            }
            prev_node = Some(i);
            curr = next(&self.arena, i);
        }

        check_size(self.size, reachable, self.arena.len())
    }
}

fn check_size(recorded: usize, reachable: usize, live: usize) -> Result<(), InvariantError> {
    if recorded != reachable {
        return Err(InvariantError::SizeMismatch {
            recorded,
            reachable,
        });
    }
    if live != reachable {
        return Err(InvariantError::LeakedSlots { live, reachable });
    }
    Ok(())
}

/// Returns the height of the subtree at `node`.
fn validate_links_and_balance<V>(
    arena: &Arena<AvlNode<V>>,
    node: u32,
    count: &mut usize,
) -> Result<i64, InvariantError> {
    *count += 1;
    let mut heights = [0i64; 2];
    for (h, child) in heights.iter_mut().zip(arena[node].c) {
        let Some(child) = child else {
            continue;
        };
        if arena[child].p() != Some(node) {
            return Err(InvariantError::BrokenParentLink {
                node: child,
                parent: node,
            });
        }
        *h = validate_links_and_balance(arena, child, count)?;
    }

    let expected = heights[1] - heights[0];
    let actual = arena[node].b;
    if i64::from(actual) != expected {
        return Err(InvariantError::BalanceMismatch {
            node,
            expected,
            actual,
        });
    }
    if !(-1..=1).contains(&actual) {
        return Err(InvariantError::BalanceOutOfRange {
            node,
            balance: actual,
        });
    }

    Ok(1 + heights[0].max(heights[1]))
}
