//! Tree configuration and the checked builder.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::error::BuildError;
use crate::tree::{default_comparator, AvlTree};
use crate::types::Comparator;

/// Largest capacity accepted by [`TreeConfig::validate`].
pub const MAX_CAPACITY: usize = u32::MAX as usize;

/// Tunables fixed at construction.
///
/// Every field has a default, so a partial TOML/JSON document deserializes:
///
/// ```
/// use avl_tree::TreeConfig;
///
/// let config: TreeConfig = toml::from_str("capacity = 128").unwrap();
/// assert_eq!(config.capacity, 128);
/// assert!(!config.check_invariants);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Node slots reserved up front.
    pub capacity: usize,
    /// Validate every invariant after each mutation and panic on failure.
    /// Costs O(n) per operation.
    pub check_invariants: bool,
}

impl TreeConfig {
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.capacity > MAX_CAPACITY {
            return Err(BuildError::CapacityTooLarge {
                requested: self.capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

/// Builder for [`AvlTree`] that reports configuration errors instead of
/// panicking.
///
/// ```
/// use avl_tree::{AvlTree, BuildError};
///
/// let tree = AvlTree::<u32>::builder()
///     .capacity(16)
///     .comparator(|a: &u32, b: &u32| b.cmp(a) as i32)
///     .build()
///     .unwrap();
/// assert!(tree.is_empty());
///
/// let err = AvlTree::<u32>::builder().build().unwrap_err();
/// assert_eq!(err, BuildError::MissingComparator);
/// ```
pub struct AvlTreeBuilder<V, C = Comparator<V>> {
    config: TreeConfig,
    comparator: Option<C>,
    _values: PhantomData<fn(&V)>,
}

impl<V> AvlTreeBuilder<V, Comparator<V>> {
    pub(crate) fn new() -> Self {
        Self {
            config: TreeConfig::default(),
            comparator: None,
            _values: PhantomData,
        }
    }
}

impl<V, C> AvlTreeBuilder<V, C>
where
    C: Fn(&V, &V) -> i32,
{
    pub fn config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    pub fn check_invariants(mut self, on: bool) -> Self {
        self.config.check_invariants = on;
        self
    }

    /// Binds the three-way comparator used for every ordering decision.
    pub fn comparator<C2>(self, comparator: C2) -> AvlTreeBuilder<V, C2>
    where
        C2: Fn(&V, &V) -> i32,
    {
        AvlTreeBuilder {
            config: self.config,
            comparator: Some(comparator),
            _values: PhantomData,
        }
    }

    pub fn build(self) -> Result<AvlTree<V, C>, BuildError> {
        self.config.validate()?;
        let comparator = self.comparator.ok_or(BuildError::MissingComparator)?;
        Ok(AvlTree::with_config(self.config, comparator))
    }
}

impl<V, C> AvlTreeBuilder<V, C>
where
    V: Ord,
    C: Fn(&V, &V) -> i32,
{
    /// Binds the natural order of `V`.
    pub fn ordered(self) -> AvlTreeBuilder<V, Comparator<V>> {
        self.comparator(default_comparator::<V> as Comparator<V>)
    }
}
