use std::iter::FusedIterator;

use crate::tree::AvlTree;
use crate::types::Comparator;
use crate::util::{first, last, next, prev};

/// Ascending iterator over the values of an [`AvlTree`].
///
/// Walks parent links from both ends; holds two slot indices and a count.
pub struct Iter<'a, V, C = Comparator<V>>
where
    C: Fn(&V, &V) -> i32,
{
    tree: &'a AvlTree<V, C>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, V, C> Iter<'a, V, C>
where
    C: Fn(&V, &V) -> i32,
{
    pub(crate) fn new(tree: &'a AvlTree<V, C>) -> Self {
        Self {
            tree,
            front: first(&tree.arena, tree.root),
            back: last(&tree.arena, tree.root),
            remaining: tree.size,
        }
    }
}

impl<V, C> Clone for Iter<'_, V, C>
where
    C: Fn(&V, &V) -> i32,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, V, C> Iterator for Iter<'a, V, C>
where
    C: Fn(&V, &V) -> i32,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        self.remaining -= 1;
        self.front = next(&self.tree.arena, idx);
        Some(&self.tree.arena[idx].v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V, C> DoubleEndedIterator for Iter<'a, V, C>
where
    C: Fn(&V, &V) -> i32,
{
    fn next_back(&mut self) -> Option<&'a V> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        self.remaining -= 1;
        self.back = prev(&self.tree.arena, idx);
        Some(&self.tree.arena[idx].v)
    }
}

impl<V, C> ExactSizeIterator for Iter<'_, V, C> where C: Fn(&V, &V) -> i32 {}

impl<V, C> FusedIterator for Iter<'_, V, C> where C: Fn(&V, &V) -> i32 {}
