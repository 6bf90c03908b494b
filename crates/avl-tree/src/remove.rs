//! Deletion engine.
//!
//! A node with no right child is spliced out directly. Otherwise the value of
//! its in-order successor is moved into it and the successor's slot is freed
//! instead. Unlike insertion, the fixup may rotate at every level on the way
//! back to the root.

use crate::arena::Arena;
use crate::node::AvlNode;
use crate::rotate::{double_rotation, replace_child, rotate, single_rotation};
use crate::types::{Balanced, Node, Side};

/// Result of [`remove`].
#[derive(Debug)]
pub struct Removal<V> {
    /// Root of the tree after the removal; `None` once it is empty.
    pub root: Option<u32>,
    pub value: V,
}

/// (subtree root, subtree got shorter, removed value)
type Step<V> = (Option<u32>, bool, V);

/// Removes the node comparing equal to `key` from the tree rooted at `root`.
/// Returns `None`, leaving the tree untouched, when there is no such node.
pub fn remove<V, C>(
    arena: &mut Arena<AvlNode<V>>,
    root: Option<u32>,
    key: &V,
    comparator: &C,
) -> Option<Removal<V>>
where
    C: Fn(&V, &V) -> i32,
{
    let (root, _, value) = remove_below(arena, root?, key, comparator)?;
    Some(Removal { root, value })
}

fn remove_below<V, C>(
    arena: &mut Arena<AvlNode<V>>,
    s: u32,
    key: &V,
    comparator: &C,
) -> Option<Step<V>>
where
    C: Fn(&V, &V) -> i32,
{
    let Some(side) = Side::from_cmp(comparator(key, &arena[s].v)) else {
        return Some(remove_at(arena, s));
    };

    let child = arena[s].child(side)?;
    let (_, shrank, value) = remove_below(arena, child, key, comparator)?;
    if !shrank {
        return Some((Some(s), false, value));
    }
    let (top, shrank) = delete_fix(arena, side.opposite(), s);
    Some((Some(top), shrank, value))
}

fn remove_at<V>(arena: &mut Arena<AvlNode<V>>, n: u32) -> Step<V> {
    let Some(r) = arena[n].r() else {
        let l = arena[n].l();
        return (l, true, splice(arena, n, l));
    };

    let (_, shrank, successor) = remove_min(arena, r);
    let value = std::mem::replace(&mut arena[n].v, successor);
    if !shrank {
        return (Some(n), false, value);
    }
    let (top, shrank) = delete_fix(arena, Side::Left, n);
    (Some(top), shrank, value)
}

/// Unlinks the leftmost node below `s` and returns its value.
fn remove_min<V>(arena: &mut Arena<AvlNode<V>>, s: u32) -> Step<V> {
    let Some(l) = arena[s].l() else {
        let r = arena[s].r();
        return (r, true, splice(arena, s, r));
    };

    let (_, shrank, value) = remove_min(arena, l);
    if !shrank {
        return (Some(s), false, value);
    }
    let (top, shrank) = delete_fix(arena, Side::Right, s);
    (Some(top), shrank, value)
}

/// Puts `child` (the only subtree of `n`) in `n`'s place and frees `n`.
fn splice<V>(arena: &mut Arena<AvlNode<V>>, n: u32, child: Option<u32>) -> V {
    let p = arena[n].p();
    if let Some(child) = child {
        arena[child].set_p(p);
    }
    replace_child(arena, p, n, child);
    arena.free(n).into_value()
}

/// Fixup at `s` after the subtree opposite `side` got shorter, leaving `side`
/// relatively heavier. Returns the new subtree root and whether the subtree
/// as a whole got shorter.
fn delete_fix<N: Balanced>(arena: &mut Arena<N>, side: Side, s: u32) -> (u32, bool) {
    let c = side.sign();
    let b = arena[s].balance();
    if b == 0 {
        arena[s].set_balance(c);
        return (s, false);
    }
    if b == -c {
        arena[s].set_balance(0);
        return (s, true);
    }

    let a = arena[s].child(side).expect("heavy side has a child");
    match arena[a].balance() {
        0 => {
            // s keeps leaning `c`; the height is unchanged.
            let top = rotate(arena, side, s);
            arena[top].set_balance(-c);
            (top, false)
        }
        ab if ab == c => (single_rotation(arena, side, s), true),
        _ => (double_rotation(arena, side, s), true),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
