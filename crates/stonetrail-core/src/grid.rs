//! Grid coordinate system for nodes and sticks.
//!
//! This module provides the foundational coordinate types for the game board:
//! - `Node`: Identifies a grid-cell center where stones are placed
//! - `Stick`: Identifies an undirected edge between two adjacent nodes
//!
//! Coordinates are signed so that out-of-range requests from a front end
//! (including negatives) are representable and can be rejected cleanly.

use serde::{Deserialize, Serialize};

/// A grid-cell coordinate where a stone may be placed.
///
/// Nodes are not stored anywhere; they are derived from the grid size and
/// identified purely by their coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Node {
    /// Column (increases going right)
    pub x: i32,
    /// Row (increases going down)
    pub y: i32,
}

impl Node {
    /// Create a new node coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this node lies on a grid of the given size
    pub fn in_bounds(&self, grid_size: i32) -> bool {
        (0..grid_size).contains(&self.x) && (0..grid_size).contains(&self.y)
    }

    /// Whether another node is orthogonally adjacent (differs by exactly 1
    /// in one axis and 0 in the other; no diagonals)
    pub fn is_adjacent_to(&self, other: &Node) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx + dy == 1
    }
}

/// An undirected edge connecting two orthogonally adjacent nodes.
///
/// Each stick can be described with its endpoints in either order. We store
/// a canonical form (smaller endpoint first) so that equality, hashing, and
/// set membership are structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stick {
    /// First endpoint (in canonical form)
    pub a: Node,
    /// Second endpoint (in canonical form)
    pub b: Node,
}

impl Stick {
    /// Create a new stick (automatically canonicalized)
    pub fn new(a: Node, b: Node) -> Self {
        Self { a, b }.canonical()
    }

    /// Get the canonical form of this stick.
    ///
    /// The same edge can be described with its endpoints in two orders. We
    /// pick the one whose first endpoint has the smaller (x, y) tuple.
    pub fn canonical(self) -> Self {
        if (self.a.x, self.a.y) <= (self.b.x, self.b.y) {
            self
        } else {
            Self { a: self.b, b: self.a }
        }
    }

    /// The two endpoints of this stick
    pub fn endpoints(&self) -> [Node; 2] {
        [self.a, self.b]
    }

    /// Whether this stick connects the two given nodes, in either order
    pub fn connects(&self, m: Node, n: Node) -> bool {
        (self.a == m && self.b == n) || (self.a == n && self.b == m)
    }

    /// Whether the given node is one of this stick's endpoints
    pub fn touches(&self, node: Node) -> bool {
        self.a == node || self.b == node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_bounds() {
        assert!(Node::new(0, 0).in_bounds(5));
        assert!(Node::new(4, 4).in_bounds(5));
        assert!(!Node::new(5, 0).in_bounds(5));
        assert!(!Node::new(0, -1).in_bounds(5));
        assert!(!Node::new(-1, 2).in_bounds(5));
    }

    #[test]
    fn test_node_adjacency() {
        let center = Node::new(2, 2);

        for neighbor in [
            Node::new(3, 2),
            Node::new(1, 2),
            Node::new(2, 3),
            Node::new(2, 1),
        ] {
            assert!(center.is_adjacent_to(&neighbor));
        }

        // Diagonals and self are not adjacent
        assert!(!center.is_adjacent_to(&Node::new(3, 3)));
        assert!(!center.is_adjacent_to(&Node::new(1, 1)));
        assert!(!center.is_adjacent_to(&center));
        assert!(!center.is_adjacent_to(&Node::new(4, 2)));
    }

    #[test]
    fn test_stick_canonical_equality() {
        // Same edge described with endpoints in both orders
        let s1 = Stick::new(Node::new(1, 1), Node::new(1, 2));
        let s2 = Stick::new(Node::new(1, 2), Node::new(1, 1));

        assert_eq!(s1, s2, "Same stick from either endpoint should be equal");

        let mut set = HashSet::new();
        set.insert(s1);
        assert!(set.contains(&s2));
    }

    #[test]
    fn test_stick_canonical_idempotent() {
        let s = Stick::new(Node::new(3, 0), Node::new(2, 0));
        assert_eq!(s.canonical(), s.canonical().canonical());
        assert_eq!(s.a, Node::new(2, 0));
    }

    #[test]
    fn test_stick_connects() {
        let s = Stick::new(Node::new(0, 0), Node::new(0, 1));
        assert!(s.connects(Node::new(0, 0), Node::new(0, 1)));
        assert!(s.connects(Node::new(0, 1), Node::new(0, 0)));
        assert!(!s.connects(Node::new(0, 0), Node::new(1, 0)));
    }

    #[test]
    fn test_stick_touches() {
        let s = Stick::new(Node::new(2, 1), Node::new(2, 2));
        assert!(s.touches(Node::new(2, 1)));
        assert!(s.touches(Node::new(2, 2)));
        assert!(!s.touches(Node::new(1, 1)));
    }
}
