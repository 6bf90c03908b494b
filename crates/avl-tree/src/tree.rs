use std::fmt;

use crate::arena::Arena;
use crate::config::{AvlTreeBuilder, TreeConfig};
use crate::insert::insert;
use crate::iter::Iter;
use crate::node::AvlNode;
use crate::remove::remove;
use crate::types::{Balanced, Comparator, Node, Side};
use crate::util::{first, height, last, next, prev};

pub(crate) fn default_comparator<V: Ord>(a: &V, b: &V) -> i32 {
    a.cmp(b) as i32
}

/// Ordered set backed by an AVL tree.
///
/// Values are ordered by a three-way comparator fixed at construction. Two
/// values comparing equal occupy a single node: inserting the second one
/// replaces the first in place.
///
/// ```
/// use avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for v in [3, 1, 4, 1, 5, 9, 2, 6] {
///     tree.insert(v);
/// }
/// assert_eq!(tree.size(), 7);
/// assert_eq!(tree.min().map(|n| *n.value()), Some(1));
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 9]);
/// ```
#[derive(Clone)]
pub struct AvlTree<V, C = Comparator<V>>
where
    C: Fn(&V, &V) -> i32,
{
    pub(crate) root: Option<u32>,
    pub(crate) size: usize,
    pub(crate) comparator: C,
    pub(crate) config: TreeConfig,
    pub(crate) arena: Arena<AvlNode<V>>,
}

impl<V> AvlTree<V, Comparator<V>>
where
    V: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<V>)
    }
}

impl<V> AvlTree<V, Comparator<V>> {
    pub fn builder() -> AvlTreeBuilder<V> {
        AvlTreeBuilder::new()
    }
}

impl<V> Default for AvlTree<V, Comparator<V>>
where
    V: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C> AvlTree<V, C>
where
    C: Fn(&V, &V) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_config(TreeConfig::default(), comparator)
    }

    /// Unchecked construction; see [`AvlTree::builder`] for the variant that
    /// validates `config`.
    pub fn with_config(config: TreeConfig, comparator: C) -> Self {
        tracing::debug!(
            capacity = config.capacity,
            check_invariants = config.check_invariants,
            "creating avl tree"
        );
        Self {
            root: None,
            size: 0,
            comparator,
            config,
            arena: Arena::with_capacity(config.capacity),
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Inserts `value`. If an equal value is already stored it is replaced
    /// in place and returned; the tree shape does not change.
    pub fn insert(&mut self, value: V) -> Option<V> {
        let out = insert(&mut self.arena, self.root, value, &self.comparator);
        self.root = Some(out.root);
        if out.replaced.is_none() {
            self.size += 1;
            tracing::trace!(size = self.size, "inserted value");
        } else {
            tracing::trace!(size = self.size, "replaced value in place");
        }
        self.check("insert");
        out.replaced
    }

    /// Removes the value equal to `value` and returns it. No-op when absent.
    pub fn delete(&mut self, value: &V) -> Option<V> {
        let out = remove(&mut self.arena, self.root, value, &self.comparator)?;
        self.root = out.root;
        self.size -= 1;
        tracing::trace!(size = self.size, "deleted value");
        self.check("delete");
        Some(out.value)
    }

    /// Node holding the value equal to `value`.
    pub fn find(&self, value: &V) -> Option<NodeRef<'_, V, C>> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = &self.arena[i];
            match Side::from_cmp((self.comparator)(value, &node.v)) {
                None => return Some(self.node_ref(i)),
                Some(side) => curr = node.child(side),
            }
        }
        None
    }

    pub fn get(&self, value: &V) -> Option<&V> {
        self.find(value).map(|n| n.value())
    }

    pub fn contains(&self, value: &V) -> bool {
        self.find(value).is_some()
    }

    /// Stored value equal to `value` and `true`, or `V::default()` and
    /// `false`.
    pub fn lookup(&self, value: &V) -> (V, bool)
    where
        V: Default + Clone,
    {
        match self.get(value) {
            Some(v) => (v.clone(), true),
            None => (V::default(), false),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of levels; `0` for an empty tree.
    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn clear(&mut self) {
        tracing::debug!(size = self.size, "clearing avl tree");
        self.root = None;
        self.size = 0;
        self.arena.clear();
    }

    pub fn root(&self) -> Option<NodeRef<'_, V, C>> {
        self.root.map(|i| self.node_ref(i))
    }

    pub fn min(&self) -> Option<NodeRef<'_, V, C>> {
        first(&self.arena, self.root).map(|i| self.node_ref(i))
    }

    pub fn max(&self) -> Option<NodeRef<'_, V, C>> {
        last(&self.arena, self.root).map(|i| self.node_ref(i))
    }

    /// Handle for the live node in slot `index`, as returned by
    /// [`NodeRef::index`].
    pub fn node(&self, index: u32) -> Option<NodeRef<'_, V, C>> {
        self.arena.get(index).map(|_| self.node_ref(index))
    }

    /// Values in ascending order.
    pub fn iter(&self) -> Iter<'_, V, C> {
        Iter::new(self)
    }

    #[inline]
    fn node_ref(&self, idx: u32) -> NodeRef<'_, V, C> {
        NodeRef { tree: self, idx }
    }

    fn check(&self, op: &str) {
        if !self.config.check_invariants {
            return;
        }
        if let Err(err) = self.assert_valid() {
            tracing::error!(%err, op, "avl tree invariant violated");
            panic!("avl tree invariant violated after {op}: {err}");
        }
    }
}

impl<V, C> Extend<V> for AvlTree<V, C>
where
    C: Fn(&V, &V) -> i32,
{
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<V> FromIterator<V> for AvlTree<V, Comparator<V>>
where
    V: Ord,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, V, C> IntoIterator for &'a AvlTree<V, C>
where
    C: Fn(&V, &V) -> i32,
{
    type Item = &'a V;
    type IntoIter = Iter<'a, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V, C> fmt::Debug for AvlTree<V, C>
where
    V: fmt::Debug,
    C: Fn(&V, &V) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Borrowed handle to one node of an [`AvlTree`].
///
/// Walking [`NodeRef::successor`] from [`AvlTree::min`] visits every value
/// once, in ascending order, without any other iteration state.
pub struct NodeRef<'a, V, C = Comparator<V>>
where
    C: Fn(&V, &V) -> i32,
{
    tree: &'a AvlTree<V, C>,
    idx: u32,
}

impl<V, C> Clone for NodeRef<'_, V, C>
where
    C: Fn(&V, &V) -> i32,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, C> Copy for NodeRef<'_, V, C> where C: Fn(&V, &V) -> i32 {}

impl<'a, V, C> NodeRef<'a, V, C>
where
    C: Fn(&V, &V) -> i32,
{
    pub fn value(&self) -> &'a V {
        &self.tree.arena[self.idx].v
    }

    /// Arena slot of the node; stable until the node is deleted.
    pub fn index(&self) -> u32 {
        self.idx
    }

    /// `height(right) - height(left)`.
    pub fn balance(&self) -> i8 {
        self.tree.arena[self.idx].balance()
    }

    pub fn successor(&self) -> Option<NodeRef<'a, V, C>> {
        next(&self.tree.arena, self.idx).map(|i| self.tree.node_ref(i))
    }

    pub fn predecessor(&self) -> Option<NodeRef<'a, V, C>> {
        prev(&self.tree.arena, self.idx).map(|i| self.tree.node_ref(i))
    }
}

impl<V, C> PartialEq for NodeRef<'_, V, C>
where
    C: Fn(&V, &V) -> i32,
{
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.idx == other.idx
    }
}

impl<V, C> Eq for NodeRef<'_, V, C> where C: Fn(&V, &V) -> i32 {}

impl<V, C> fmt::Debug for NodeRef<'_, V, C>
where
    V: fmt::Debug,
    C: Fn(&V, &V) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.idx)
            .field("value", self.value())
            .field("balance", &self.balance())
            .finish()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
