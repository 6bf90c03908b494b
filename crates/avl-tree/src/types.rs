//! Link and balance traits shared by the tree engines.
//!
//! Nodes live in an [`Arena`](crate::arena::Arena) and refer to each other by
//! `u32` slot index. Every "pointer" is an `Option<u32>`; the engines in
//! [`rotate`](crate::rotate), [`insert`](crate::insert),
//! [`remove`](crate::remove) and [`util`](crate::util) only touch nodes
//! through these traits.

/// Three-way comparator: negative, zero, or positive as `a` is less than,
/// equal to, or greater than `b`.
pub type Comparator<V> = fn(&V, &V) -> i32;

/// Child slot of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left = 0,
    Right = 1,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// `-1` for left, `+1` for right. Matches the sign convention of the
    /// balance indicator.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }

    /// Maps a comparator result onto the branch to descend into; `None` on
    /// equality.
    #[inline]
    pub fn from_cmp(cmp: i32) -> Option<Side> {
        match cmp.signum() {
            -1 => Some(Side::Left),
            1 => Some(Side::Right),
            _ => None,
        }
    }
}

/// Parent/child links (`p`, `c[0]`, `c[1]`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn child(&self, side: Side) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_child(&mut self, side: Side, v: Option<u32>);

    #[inline]
    fn l(&self) -> Option<u32> {
        self.child(Side::Left)
    }

    #[inline]
    fn r(&self) -> Option<u32> {
        self.child(Side::Right)
    }

    /// Which child slot of `self` holds `idx`, if any.
    #[inline]
    fn side_of(&self, idx: u32) -> Option<Side> {
        if self.l() == Some(idx) {
            Some(Side::Left)
        } else if self.r() == Some(idx) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Per-node balance indicator, `height(right) - height(left)`.
pub trait Balanced: Node {
    fn balance(&self) -> i8;
    fn set_balance(&mut self, b: i8);
}
