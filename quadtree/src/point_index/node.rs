use super::BalancedPointIndex;
use common::Place;

pub(super) const NIL: u32 = 0;

#[derive(Clone, Copy)]
pub(super) struct Node {
    pub(super) place: Place,
    pub(super) left: u32,
    pub(super) right: u32,
    pub(super) parent: u32,
    /// 0 marks the sentinel and freed slots.
    pub(super) height: u32,
    pub(super) next_free: u32,
}

impl Node {
    pub(super) fn sentinel() -> Self {
        Self {
            place: Place::default(),
            left: NIL,
            right: NIL,
            parent: NIL,
            height: 0,
            next_free: NIL,
        }
    }

    fn new_leaf(place: Place, parent: u32) -> Self {
        Self {
            place,
            left: NIL,
            right: NIL,
            parent,
            height: 1,
            next_free: NIL,
        }
    }
}

impl BalancedPointIndex {
    pub(super) fn alloc(&mut self, place: Place, parent: u32) -> u32 {
        if self.free_node != NIL {
            let id = self.free_node;
            self.free_node = self.nodes[id as usize].next_free;
            self.nodes[id as usize] = Node::new_leaf(place, parent);
            return id;
        }
        let id = self.nodes.len();
        debug_assert!(
            id < u32::MAX as usize,
            "node slot {} exceeds max {}",
            id,
            u32::MAX
        );
        self.nodes.push(Node::new_leaf(place, parent));
        id as u32
    }

    pub(super) fn release(&mut self, id: u32) {
        let node = &mut self.nodes[id as usize];
        *node = Node::sentinel();
        node.next_free = self.free_node;
        self.free_node = id;
    }

    #[inline(always)]
    pub(super) fn height_of(&self, id: u32) -> u32 {
        self.nodes[id as usize].height
    }

    pub(super) fn update_height(&mut self, id: u32) {
        let node = &self.nodes[id as usize];
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.nodes[id as usize].height = height;
    }

    /// `height(right) - height(left)`; 0 for the sentinel.
    pub(super) fn balance_factor(&self, id: u32) -> i64 {
        if id == NIL {
            return 0;
        }
        let node = &self.nodes[id as usize];
        self.height_of(node.right) as i64 - self.height_of(node.left) as i64
    }

    /// Points `parent`'s link to `old` at `new`, or makes `new` the root.
    pub(super) fn replace_child(&mut self, parent: u32, old: u32, new: u32) {
        if parent == NIL {
            self.root = new;
            return;
        }
        let parent = &mut self.nodes[parent as usize];
        if parent.left == old {
            parent.left = new;
        } else {
            debug_assert_eq!(parent.right, old, "slot {} is not a child of its parent", old);
            parent.right = new;
        }
    }

    pub(super) fn min_node(&self, mut id: u32) -> u32 {
        while self.nodes[id as usize].left != NIL {
            id = self.nodes[id as usize].left;
        }
        id
    }
}
