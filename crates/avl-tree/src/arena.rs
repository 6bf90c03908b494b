//! Index-addressed node storage.
//!
//! Slots are addressed by `u32`. Freed slots are threaded onto an intrusive
//! free list and handed out again by [`Arena::alloc`], so a slot index stays
//! stable for as long as its node is alive.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug)]
enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Option<u32> },
}

#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Option<u32>,
    live: usize,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            live: 0,
        }
    }

    /// Stores `node` and returns its slot index.
    ///
    /// Panics when the `u32` index space is exhausted.
    pub fn alloc(&mut self, node: N) -> u32 {
        self.live += 1;
        if let Some(idx) = self.free {
            let slot = &mut self.slots[idx as usize];
            let Slot::Vacant { next_free } = *slot else {
                unreachable!("free list points at occupied slot {idx}");
            };
            self.free = next_free;
            *slot = Slot::Occupied(node);
            return idx;
        }
        let idx = u32::try_from(self.slots.len()).expect("arena index space exhausted");
        self.slots.push(Slot::Occupied(node));
        idx
    }

    /// Releases slot `idx` and returns the node it held.
    pub fn free(&mut self, idx: u32) -> N {
        let slot = std::mem::replace(
            &mut self.slots[idx as usize],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        match slot {
            Slot::Occupied(node) => {
                self.free = Some(idx);
                self.live -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("double free of arena slot {idx}"),
        }
    }

    pub fn get(&self, idx: u32) -> Option<&N> {
        match self.slots.get(idx as usize)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of slots ever handed out, live or vacant.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.live = 0;
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, idx: u32) -> &N {
        match &self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling node index {idx}"),
        }
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, idx: u32) -> &mut N {
        match &mut self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling node index {idx}"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
