use crate::types::{Balanced, Node, Side};

/// A node of the AVL tree.
#[derive(Clone, Debug)]
pub struct AvlNode<V> {
    pub p: Option<u32>,
    /// Children, indexed by [`Side`].
    pub c: [Option<u32>; 2],
    pub v: V,
    /// Balance indicator, `height(right) - height(left)`.
    pub b: i8,
}

impl<V> AvlNode<V> {
    /// A fresh leaf hanging under `p`.
    pub fn leaf(v: V, p: Option<u32>) -> Self {
        Self {
            p,
            c: [None, None],
            v,
            b: 0,
        }
    }

    pub fn value(&self) -> &V {
        &self.v
    }

    pub fn into_value(self) -> V {
        self.v
    }

    pub fn is_leaf(&self) -> bool {
        self.c == [None, None]
    }
}

impl<V> Node for AvlNode<V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn child(&self, side: Side) -> Option<u32> {
        self.c[side as usize]
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_child(&mut self, side: Side, v: Option<u32>) {
        self.c[side as usize] = v;
    }
}

impl<V> Balanced for AvlNode<V> {
    fn balance(&self) -> i8 {
        self.b
    }

    fn set_balance(&mut self, b: i8) {
        self.b = b;
    }
}
