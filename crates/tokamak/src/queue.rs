//! Pending-node queue
//!
//! Native nodes a template node has built but no parent has claimed yet.
//! Draining is destructive: once a node leaves the queue, the queue no longer
//! refers to it.

use std::collections::VecDeque;
use tokamak_dom::NodeId;

/// FIFO buffer of native nodes awaiting a parent
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DomNodeQueue {
    nodes: VecDeque<NodeId>,
}

impl DomNodeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a node at the back
    pub fn push(&mut self, node: NodeId) {
        self.nodes.push_back(node);
    }

    /// Dequeue the oldest node
    pub fn pop(&mut self) -> Option<NodeId> {
        self.nodes.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Move every pending node out, leaving this queue empty
    pub fn take(&mut self) -> DomNodeQueue {
        std::mem::take(self)
    }

    /// Move all of `other`'s nodes to the back of this queue
    pub fn extend(&mut self, mut other: DomNodeQueue) {
        self.nodes.append(&mut other.nodes);
    }
}

impl IntoIterator for DomNodeQueue {
    type Item = NodeId;
    type IntoIter = std::collections::vec_deque::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokamak_dom::DomTree;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut tree = DomTree::new();
        (0..n).map(|_| tree.create_text("").unwrap()).collect()
    }

    #[test]
    fn test_fifo_order() {
        let ids = ids(3);
        let mut queue = DomNodeQueue::new();
        for &id in &ids {
            queue.push(id);
        }
        assert_eq!(queue.pop(), Some(ids[0]));
        assert_eq!(queue.into_iter().collect::<Vec<_>>(), [ids[1], ids[2]]);
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let mut queue = DomNodeQueue::new();
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_take_and_extend() {
        let ids = ids(3);
        let mut first = DomNodeQueue::new();
        first.push(ids[0]);
        let mut second = DomNodeQueue::new();
        second.push(ids[1]);
        second.push(ids[2]);

        let taken = second.take();
        assert!(second.is_empty());

        first.extend(taken);
        assert_eq!(first.len(), 3);
        assert_eq!(first.into_iter().collect::<Vec<_>>(), ids);
    }
}
