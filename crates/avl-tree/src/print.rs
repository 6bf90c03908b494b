use std::fmt::Debug;

use crate::arena::Arena;
use crate::node::AvlNode;
use crate::tree::AvlTree;

impl<V, C> AvlTree<V, C>
where
    V: Debug,
    C: Fn(&V, &V) -> i32,
{
    /// Indented dump of the tree shape, one node per line.
    ///
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<i32> = [2, 1].into_iter().collect();
    /// assert_eq!(tree.print(), "Node[0] [b=-1] 2\nL=Node[1] [b=0] 1\n  L=∅\n  R=∅\nR=∅");
    /// ```
    pub fn print(&self) -> String {
        print(&self.arena, self.root, "")
    }
}

fn print<V: Debug>(arena: &Arena<AvlNode<V>>, node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            let left = print(arena, n.c[0], &format!("{tab}  "));
            let right = print(arena, n.c[1], &format!("{tab}  "));
            format!("Node[{i}] [b={}] {:?}\n{tab}L={left}\n{tab}R={right}", n.b, n.v)
        }
    }
}
