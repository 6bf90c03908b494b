use thiserror::Error;

/// Construction-time configuration errors reported by
/// [`AvlTreeBuilder::build`](crate::AvlTreeBuilder::build).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("no comparator bound to the tree")]
    MissingComparator,
    #[error("capacity {requested} exceeds the arena index space ({max} slots)")]
    CapacityTooLarge { requested: usize, max: usize },
}

/// A broken structural invariant, found by
/// [`AvlTree::assert_valid`](crate::AvlTree::assert_valid).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root node {node} has a parent")]
    RootHasParent { node: u32 },
    #[error("node {node} does not point back at its parent {parent}")]
    BrokenParentLink { node: u32, parent: u32 },
    #[error("balance mismatch at node {node}: expected {expected}, got {actual}")]
    BalanceMismatch { node: u32, expected: i64, actual: i8 },
    #[error("AVL balance violated at node {node}: {balance}")]
    BalanceOutOfRange { node: u32, balance: i8 },
    #[error("node order violated at node {node}")]
    OrderViolated { node: u32 },
    #[error("size mismatch: recorded {recorded}, reachable {reachable}")]
    SizeMismatch { recorded: usize, reachable: usize },
    #[error("{live} live arena slots but only {reachable} reachable nodes")]
    LeakedSlots { live: usize, reachable: usize },
}
