//! Board graph generation and queries.
//!
//! The board is a randomly-generated grid graph: for every pair of
//! orthogonally adjacent nodes, the connecting stick is included with
//! probability one half. The generated stick set is the board's only
//! geometry state and is immutable for the lifetime of a game.

use crate::grid::{Node, Stick};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The game board: a grid size and the set of generated sticks.
///
/// No connectivity is guaranteed; a board may contain isolated nodes. Such
/// nodes simply offer no legal follow-up move, which is intentional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGraph {
    grid_size: i32,
    sticks: Vec<Stick>,
}

impl BoardGraph {
    /// Generate a board from the thread-local random source
    pub fn generate(grid_size: i32) -> Self {
        let mut rng = rand::thread_rng();
        Self::generate_with_rng(grid_size, &mut rng)
    }

    /// Generate a board from a provided RNG.
    ///
    /// Deterministic given a fixed seed: candidate sticks are visited in a
    /// fixed order (all vertical sticks column by column, then all
    /// horizontal sticks), with one fair coin flip per candidate.
    pub fn generate_with_rng<R: Rng>(grid_size: i32, rng: &mut R) -> Self {
        let mut sticks = Vec::new();

        for x in 0..grid_size {
            for y in 0..grid_size - 1 {
                if rng.gen::<bool>() {
                    sticks.push(Stick::new(Node::new(x, y), Node::new(x, y + 1)));
                }
            }
        }
        for x in 0..grid_size - 1 {
            for y in 0..grid_size {
                if rng.gen::<bool>() {
                    sticks.push(Stick::new(Node::new(x, y), Node::new(x + 1, y)));
                }
            }
        }

        Self { grid_size, sticks }
    }

    /// Build a board from an explicit stick list (used by save/load and tests)
    pub fn from_sticks(grid_size: i32, sticks: Vec<Stick>) -> Self {
        Self { grid_size, sticks }
    }

    /// The grid size (nodes run 0..grid_size on each axis)
    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// The generated sticks, in generation order
    pub fn sticks(&self) -> &[Stick] {
        &self.sticks
    }

    /// Whether the given node lies on this board
    pub fn contains(&self, node: Node) -> bool {
        node.in_bounds(self.grid_size)
    }

    /// Whether a stick connects the two given nodes (undirected membership test)
    pub fn has_stick_between(&self, a: Node, b: Node) -> bool {
        self.sticks.iter().any(|stick| stick.connects(a, b))
    }

    /// All nodes of the board in row-major scan order:
    /// (0,0), (0,1), ..., (grid_size-1, grid_size-1)
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.grid_size)
            .flat_map(move |x| (0..self.grid_size).map(move |y| Node::new(x, y)))
    }
}
