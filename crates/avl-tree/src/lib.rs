//! Arena-based AVL tree.
//!
//! [`AvlTree`] is an ordered set with O(log n) insert, delete and lookup for
//! any insertion order. Ordering comes from a three-way comparator
//! (`Fn(&V, &V) -> i32`) fixed at construction.
//!
//! Nodes live in a `Vec`-backed [`Arena`](arena::Arena) and link to each other
//! through `Option<u32>` slot indices, parents included. That makes in-order
//! traversal stateless: [`NodeRef::successor`] and [`NodeRef::predecessor`]
//! follow child and parent links from any node, before and after any mix of
//! insertions, deletions and rotations.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Side`], [`Node`] / [`Balanced`] link traits |
//! [`node`] | [`AvlNode`] |
//! [`arena`] | slot storage with a free list |
//! [`rotate`] | `rotate`, `single_rotation`, `double_rotation` |
//! [`insert`] | insertion descent + fixup |
//! [`remove`] | deletion descent + successor splice + fixup |
//! [`util`] | `first`, `last`, `next`, `prev`, `height` |
//! [`tree`] | [`AvlTree`], [`NodeRef`] |
//! [`config`] | [`TreeConfig`], [`AvlTreeBuilder`] |

pub mod arena;
pub mod config;
pub mod error;
pub mod insert;
pub mod iter;
pub mod node;
mod print;
pub mod remove;
pub mod rotate;
pub mod tree;
pub mod types;
pub mod util;
mod validate;

pub use config::{AvlTreeBuilder, TreeConfig};
pub use error::{BuildError, InvariantError};
pub use iter::Iter;
pub use node::AvlNode;
pub use tree::{AvlTree, NodeRef};
pub use types::{Balanced, Comparator, Node, Side};
