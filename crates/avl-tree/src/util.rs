//! In-order traversal over parent-linked nodes.
//!
//! None of these functions allocate; the current node index is the only
//! iteration state.

use crate::arena::Arena;
use crate::types::{Node, Side};

/// Outermost node on `side` of the subtree rooted at `root`.
pub fn extreme<N: Node>(arena: &Arena<N>, root: Option<u32>, side: Side) -> Option<u32> {
    let mut curr = root?;
    while let Some(c) = arena[curr].child(side) {
        curr = c;
    }
    Some(curr)
}

/// Leftmost node in the tree.
#[inline]
pub fn first<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    extreme(arena, root, Side::Left)
}

/// Rightmost node in the tree.
#[inline]
pub fn last<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    extreme(arena, root, Side::Right)
}

/// Neighbor of `curr` in the in-order sequence: the successor for
/// [`Side::Right`], the predecessor for [`Side::Left`].
pub fn step<N: Node>(arena: &Arena<N>, mut curr: u32, side: Side) -> Option<u32> {
    if let Some(c) = arena[curr].child(side) {
        return extreme(arena, Some(c), side.opposite());
    }
    let mut p = arena[curr].p();
    while let Some(pi) = p {
        if arena[pi].child(side) != Some(curr) {
            return Some(pi);
        }
        curr = pi;
        p = arena[pi].p();
    }
    None
}

/// In-order successor.
#[inline]
pub fn next<N: Node>(arena: &Arena<N>, curr: u32) -> Option<u32> {
    step(arena, curr, Side::Right)
}

/// In-order predecessor.
#[inline]
pub fn prev<N: Node>(arena: &Arena<N>, curr: u32) -> Option<u32> {
    step(arena, curr, Side::Left)
}

/// Number of levels below and including `root`; `0` for an empty subtree.
pub fn height<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    root.map_or(0, |i| {
        1 + height(arena, arena[i].l()).max(height(arena, arena[i].r()))
    })
}
