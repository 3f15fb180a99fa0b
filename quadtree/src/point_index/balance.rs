use super::node::NIL;
use super::BalancedPointIndex;

impl BalancedPointIndex {
    /// Walks from `node` to the root, refreshing heights and rotating wherever the balance
    /// factor leaves `-1..=1`.
    pub(super) fn rebalance_from(&mut self, mut node: u32) {
        while node != NIL {
            self.update_height(node);
            node = self.balance(node);
            node = self.nodes[node as usize].parent;
        }
    }

    /// Returns the node now sitting where `node` was.
    fn balance(&mut self, node: u32) -> u32 {
        let balance = self.balance_factor(node);
        if balance > 1 {
            let right = self.nodes[node as usize].right;
            if self.balance_factor(right) < 0 {
                self.rotate_right(right);
            }
            self.rotate_left(node)
        } else if balance < -1 {
            let left = self.nodes[node as usize].left;
            if self.balance_factor(left) > 0 {
                self.rotate_left(left);
            }
            self.rotate_right(node)
        } else {
            node
        }
    }

    /// Lifts `y`'s left child into `y`'s position. Returns the new subtree root.
    pub(super) fn rotate_right(&mut self, y: u32) -> u32 {
        let x = self.nodes[y as usize].left;
        debug_assert_ne!(x, NIL, "right rotation needs a left child");
        let t2 = self.nodes[x as usize].right;
        let parent = self.nodes[y as usize].parent;

        self.nodes[x as usize].right = y;
        self.nodes[y as usize].left = t2;
        if t2 != NIL {
            self.nodes[t2 as usize].parent = y;
        }

        self.nodes[x as usize].parent = parent;
        self.nodes[y as usize].parent = x;
        self.replace_child(parent, y, x);

        self.update_height(y);
        self.update_height(x);
        x
    }

    /// Mirror of [`Self::rotate_right`].
    pub(super) fn rotate_left(&mut self, x: u32) -> u32 {
        let y = self.nodes[x as usize].right;
        debug_assert_ne!(y, NIL, "left rotation needs a right child");
        let t2 = self.nodes[y as usize].left;
        let parent = self.nodes[x as usize].parent;

        self.nodes[y as usize].left = x;
        self.nodes[x as usize].right = t2;
        if t2 != NIL {
            self.nodes[t2 as usize].parent = x;
        }

        self.nodes[y as usize].parent = parent;
        self.nodes[x as usize].parent = y;
        self.replace_child(parent, x, y);

        self.update_height(x);
        self.update_height(y);
        y
    }
}
