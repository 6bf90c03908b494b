//! Rotation primitives.
//!
//! [`rotate`] is the only function in the crate that reshapes the tree; the
//! insertion and deletion fixups go through [`single_rotation`] and
//! [`double_rotation`], which additionally reassign balance indicators.

use crate::arena::Arena;
use crate::types::{Balanced, Node, Side};

/// Replaces `old` with `new` in the child slot of `parent` that holds `old`.
#[inline]
pub(crate) fn replace_child<N: Node>(
    arena: &mut Arena<N>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    let Some(p) = parent else {
        return;
    };
    let side = arena[p]
        .side_of(old)
        .unwrap_or_else(|| panic!("node {old} is not a child of its parent {p}"));
    arena[p].set_child(side, new);
}

/// Pivots `s` around its child on `side` and returns that child, which now
/// roots the subtree in `s`'s former place (including `s`'s slot in its
/// parent). Balance indicators are left untouched.
pub fn rotate<N: Node>(arena: &mut Arena<N>, side: Side, s: u32) -> u32 {
    let r = arena[s].child(side).expect("rotation pivot exists");
    let inner = arena[r].child(side.opposite());
    let p = arena[s].p();

    arena[s].set_child(side, inner);
    if let Some(inner) = inner {
        arena[inner].set_p(Some(s));
    }
    arena[r].set_child(side.opposite(), Some(s));
    arena[r].set_p(p);
    replace_child(arena, p, s, Some(r));
    arena[s].set_p(Some(r));

    debug_assert!(
        arena[s].p() == Some(r) && arena[r].child(side.opposite()) == Some(s),
        "rotate: inconsistent links between {s} and {r}"
    );
    debug_assert!(
        p.map_or(true, |p| arena[p].side_of(r).is_some()),
        "rotate: parent of {r} does not point back at it"
    );
    r
}

/// Rotation for the case where the overloaded child leans the same way as
/// the imbalance. Both nodes end up balanced.
pub fn single_rotation<N: Balanced>(arena: &mut Arena<N>, side: Side, s: u32) -> u32 {
    let r = arena[s].child(side).expect("rotation pivot exists");
    arena[s].set_balance(0);
    arena[r].set_balance(0);
    rotate(arena, side, s)
}

/// Zig-zag rotation: first around `s`'s child on `side` in the opposite
/// direction, then around `s`.
pub fn double_rotation<N: Balanced>(arena: &mut Arena<N>, side: Side, s: u32) -> u32 {
    let r = arena[s].child(side).expect("rotation pivot exists");
    rotate(arena, side.opposite(), r);
    let p = rotate(arena, side, s);
    debug_assert!(
        arena[r].p() == Some(p) && arena[s].p() == Some(p),
        "double_rotation: bad parents"
    );

    let c = side.sign();
    let (sb, rb) = match arena[p].balance() {
        b if b == c => (-c, 0),
        b if b == -c => (0, c),
        _ => (0, 0),
    };
    arena[s].set_balance(sb);
    arena[r].set_balance(rb);
    arena[p].set_balance(0);
    p
}

// ── Tests ─────────────────────────────────────────────────────────────────
