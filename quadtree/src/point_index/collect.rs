use super::node::NIL;
use super::BalancedPointIndex;
use common::{Place, Rectangle, ServiceMask};
use smallvec::SmallVec;

// AVL height stays under 1.45 * log2(n), so 64 slots cover any u32-addressed arena.
type NodeStack = SmallVec<[u32; 64]>;

impl BalancedPointIndex {
    /// In-order walk over places inside `range` that offer every service in `filter`.
    ///
    /// The key is `(x, y)` lexicographic, so only the x axis can cut subtrees: a node left of
    /// `range` has nothing useful on its left, a node right of it nothing on its right.
    /// Returns the number of nodes visited.
    pub fn range_collect_with<F>(&self, range: &Rectangle, filter: ServiceMask, mut f: F) -> usize
    where
        F: FnMut(&Place),
    {
        let mut visited = 0;
        let mut stack = NodeStack::new();
        let mut current = self.root;
        loop {
            while current != NIL {
                let node = &self.nodes[current as usize];
                stack.push(current);
                current = if (node.place.x() as i64) < range.left() {
                    NIL
                } else {
                    node.left
                };
            }
            let Some(id) = stack.pop() else {
                break;
            };
            visited += 1;
            let node = &self.nodes[id as usize];
            let place = &node.place;
            if range.contains_point(place.x(), place.y()) && place.services.contains_all(filter) {
                f(place);
            }
            current = if (place.x() as i64) >= range.right() {
                NIL
            } else {
                node.right
            };
        }
        visited
    }

    /// Ascending `(x, y)` iteration over every stored place.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            index: self,
            stack: NodeStack::new(),
            remaining: self.len,
        };
        iter.push_left(self.root);
        iter
    }
}

pub struct Iter<'a> {
    index: &'a BalancedPointIndex,
    stack: NodeStack,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut id: u32) {
        while id != NIL {
            self.stack.push(id);
            id = self.index.nodes[id as usize].left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Place;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let index = self.index;
        let node = &index.nodes[id as usize];
        self.push_left(node.right);
        self.remaining -= 1;
        Some(&node.place)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BalancedPointIndex {
    type Item = &'a Place;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
