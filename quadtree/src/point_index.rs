//! AVL tree over [`Place`]s keyed by `(x, y)`, stored in a node arena.
//!
//! Nodes live in a `Vec` and refer to each other by `u32` slot; slot 0 is a sentinel standing
//! in for "no node" with height 0. Parent links are plain slots, so rotations only rewrite
//! indices. Removed slots go onto a free list and are reused by later inserts.

mod balance;
mod collect;
mod node;

use common::{Place, Rectangle, ServiceMask};
use std::cmp::Ordering;

pub use collect::Iter;
use node::{Node, NIL};

/// Slot of a live node. Invalidated when the node is removed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IndexInsert {
    Inserted(NodeId),
    /// The coordinate was already taken; the stored place is left untouched.
    Occupied(NodeId),
}

impl IndexInsert {
    pub fn node(self) -> NodeId {
        match self {
            IndexInsert::Inserted(id) | IndexInsert::Occupied(id) => id,
        }
    }

    pub fn is_inserted(self) -> bool {
        matches!(self, IndexInsert::Inserted(_))
    }
}

#[derive(Clone)]
pub struct BalancedPointIndex {
    nodes: Vec<Node>,
    root: u32,
    free_node: u32,
    len: usize,
}

impl BalancedPointIndex {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(Node::sentinel());
        Self {
            nodes,
            root: NIL,
            free_node: NIL,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the root; 0 for an empty index.
    pub fn height(&self) -> u32 {
        self.nodes[self.root as usize].height
    }

    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.root = NIL;
        self.free_node = NIL;
        self.len = 0;
    }

    pub fn insert(&mut self, place: Place) -> IndexInsert {
        if self.root == NIL {
            let id = self.alloc(place, NIL);
            self.root = id;
            self.len += 1;
            return IndexInsert::Inserted(NodeId(id));
        }

        let mut current = self.root;
        let (parent, goes_left) = loop {
            let node = &self.nodes[current as usize];
            match place.cmp(&node.place) {
                Ordering::Less if node.left == NIL => break (current, true),
                Ordering::Less => current = node.left,
                Ordering::Greater if node.right == NIL => break (current, false),
                Ordering::Greater => current = node.right,
                Ordering::Equal => return IndexInsert::Occupied(NodeId(current)),
            }
        };

        let id = self.alloc(place, parent);
        if goes_left {
            self.nodes[parent as usize].left = id;
        } else {
            self.nodes[parent as usize].right = id;
        }
        self.len += 1;
        self.rebalance_from(parent);
        IndexInsert::Inserted(NodeId(id))
    }

    /// Removes the place at `(x, y)`.
    ///
    /// A node with two children takes over its in-order successor's place, and the
    /// successor's slot is spliced out instead.
    pub fn delete(&mut self, x: i32, y: i32) -> Option<Place> {
        let found = self.find(x, y);
        if found == NIL {
            return None;
        }
        let removed = self.nodes[found as usize].place;

        let (left, right) = {
            let node = &self.nodes[found as usize];
            (node.left, node.right)
        };
        let target = if left != NIL && right != NIL {
            let successor = self.min_node(right);
            self.nodes[found as usize].place = self.nodes[successor as usize].place;
            successor
        } else {
            found
        };

        let (child, parent) = {
            let node = &self.nodes[target as usize];
            let child = if node.left != NIL {
                node.left
            } else {
                node.right
            };
            (child, node.parent)
        };
        self.replace_child(parent, target, child);
        if child != NIL {
            self.nodes[child as usize].parent = parent;
        }
        self.release(target);
        self.len -= 1;
        self.rebalance_from(parent);
        Some(removed)
    }

    pub fn search(&self, x: i32, y: i32) -> Option<&Place> {
        match self.find(x, y) {
            NIL => None,
            id => Some(&self.nodes[id as usize].place),
        }
    }

    /// Mutable access for in-place service edits. Coordinates cannot change through it,
    /// so the ordering stays intact.
    pub fn search_mut(&mut self, x: i32, y: i32) -> Option<&mut Place> {
        match self.find(x, y) {
            NIL => None,
            id => Some(&mut self.nodes[id as usize].place),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Place> {
        let slot = self.live(id)?;
        Some(&self.nodes[slot].place)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Place> {
        let slot = self.live(id)?;
        Some(&mut self.nodes[slot].place)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.find(x, y) != NIL
    }

    /// Appends every place inside `range` that offers all services in `filter`, in
    /// ascending `(x, y)` order.
    pub fn range_collect(&self, range: &Rectangle, filter: ServiceMask, out: &mut Vec<Place>) {
        self.range_collect_with(range, filter, |place| out.push(*place));
    }

    fn live(&self, id: NodeId) -> Option<usize> {
        let slot = id.0 as usize;
        match self.nodes.get(slot) {
            Some(node) if slot != NIL as usize && node.height != 0 => Some(slot),
            _ => None,
        }
    }

    fn find(&self, x: i32, y: i32) -> u32 {
        let mut current = self.root;
        while current != NIL {
            let node = &self.nodes[current as usize];
            current = match node.place.cmp_coords(x, y) {
                Ordering::Greater => node.left,
                Ordering::Less => node.right,
                Ordering::Equal => return current,
            };
        }
        NIL
    }
}

impl Default for BalancedPointIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BalancedPointIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BalancedPointIndex")
            .field("len", &self.len)
            .field("height", &self.height())
            .finish()
    }
}
