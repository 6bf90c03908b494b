//! Insertion engine: comparator descent followed by a bottom-up fixup that
//! performs at most one (single or double) rotation.

use crate::arena::Arena;
use crate::node::AvlNode;
use crate::rotate::{double_rotation, single_rotation};
use crate::types::{Balanced, Node, Side};

/// Result of [`insert`].
#[derive(Debug)]
pub struct Insertion<V> {
    /// Root of the tree after the insertion.
    pub root: u32,
    /// Previous value of an equal node, replaced in place.
    pub replaced: Option<V>,
}

enum Growth<V> {
    /// The subtree got one level taller.
    Grew,
    /// The subtree kept its height.
    Absorbed,
    Replaced(V),
}

/// Inserts `value` into the tree rooted at `root`, or overwrites the value
/// of the node comparing equal to it without touching the shape.
pub fn insert<V, C>(
    arena: &mut Arena<AvlNode<V>>,
    root: Option<u32>,
    value: V,
    comparator: &C,
) -> Insertion<V>
where
    C: Fn(&V, &V) -> i32,
{
    let Some(root) = root else {
        return Insertion {
            root: arena.alloc(AvlNode::leaf(value, None)),
            replaced: None,
        };
    };

    let (root, growth) = insert_below(arena, root, value, comparator);
    Insertion {
        root,
        replaced: match growth {
            Growth::Replaced(old) => Some(old),
            Growth::Grew | Growth::Absorbed => None,
        },
    }
}

/// Returns the root of the subtree formerly rooted at `s`.
fn insert_below<V, C>(
    arena: &mut Arena<AvlNode<V>>,
    s: u32,
    value: V,
    comparator: &C,
) -> (u32, Growth<V>)
where
    C: Fn(&V, &V) -> i32,
{
    let Some(side) = Side::from_cmp(comparator(&value, &arena[s].v)) else {
        let old = std::mem::replace(&mut arena[s].v, value);
        return (s, Growth::Replaced(old));
    };

    let growth = match arena[s].child(side) {
        Some(child) => insert_below(arena, child, value, comparator).1,
        None => {
            let leaf = arena.alloc(AvlNode::leaf(value, Some(s)));
            arena[s].set_child(side, Some(leaf));
            Growth::Grew
        }
    };

    match growth {
        Growth::Grew => insert_fix(arena, side, s),
        other => (s, other),
    }
}

/// Fixup at `s` after its subtree on `side` grew.
fn insert_fix<N: Balanced, V>(arena: &mut Arena<N>, side: Side, s: u32) -> (u32, Growth<V>) {
    let c = side.sign();
    let b = arena[s].balance();
    if b == 0 {
        arena[s].set_balance(c);
        return (s, Growth::Grew);
    }
    if b == -c {
        arena[s].set_balance(0);
        return (s, Growth::Absorbed);
    }

    let a = arena[s].child(side).expect("heavy side has a child");
    let top = if arena[a].balance() == c {
        single_rotation(arena, side, s)
    } else {
        double_rotation(arena, side, s)
    };
    (top, Growth::Absorbed)
}

// ── Tests ─────────────────────────────────────────────────────────────────
