//! Core game state and rules.
//!
//! This module contains the main `GameState` struct with move validation,
//! turn alternation, and terminal-state detection.

use crate::board::BoardGraph;
use crate::grid::Node;
use crate::player::Player;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when placing a stone
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Node ({0}, {1}) is outside the board")]
    OutOfBounds(i32, i32),

    #[error("Invalid move: node is occupied or not adjacent to the last stone")]
    InvalidMove,
}

/// A placed, player-tagged marker occupying exactly one node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stone {
    /// Where the stone sits
    pub node: Node,
    /// Who placed it
    pub player: Player,
}

/// The complete game state.
///
/// All mutation goes through [`GameState::place_stone`] or wholesale
/// replacement from a [`crate::save::Snapshot`]; the board geometry and the
/// stone sequence are append-only for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: BoardGraph,
    player1_turn: bool,
    stones: Vec<Stone>,
}

impl GameState {
    /// Start a new game on a freshly generated board, player one to move
    pub fn new(grid_size: i32) -> Self {
        let mut rng = rand::thread_rng();
        Self::new_with_rng(grid_size, &mut rng)
    }

    /// Start a new game with a provided RNG, for reproducible boards
    pub fn new_with_rng<R: Rng>(grid_size: i32, rng: &mut R) -> Self {
        Self {
            board: BoardGraph::generate_with_rng(grid_size, rng),
            player1_turn: true,
            stones: Vec::new(),
        }
    }

    /// Assemble a state from its parts (save/load and in-crate tests)
    pub(crate) fn from_parts(board: BoardGraph, player1_turn: bool, stones: Vec<Stone>) -> Self {
        Self {
            board,
            player1_turn,
            stones,
        }
    }

    /// The board geometry
    pub fn board(&self) -> &BoardGraph {
        &self.board
    }

    /// The grid size
    pub fn grid_size(&self) -> i32 {
        self.board.grid_size()
    }

    /// Whether it is player one's turn
    pub fn is_player1_turn(&self) -> bool {
        self.player1_turn
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> Player {
        if self.player1_turn {
            Player::One
        } else {
            Player::Two
        }
    }

    /// The placed stones, in placement order
    pub fn stones(&self) -> &[Stone] {
        &self.stones
    }

    /// Whether a stone occupies the given node
    pub fn is_occupied(&self, node: Node) -> bool {
        self.stones.iter().any(|stone| stone.node == node)
    }

    /// Check if a stone may be placed at the given node.
    ///
    /// A stone can be placed if:
    /// 1. The node is in bounds, and
    /// 2. The board is empty (the first move is unconstrained), or
    /// 3. The node is unoccupied and a stick connects it to the most
    ///    recently placed stone.
    ///
    /// Pure predicate; no side effects.
    pub fn is_valid_move(&self, node: Node) -> bool {
        if !self.board.contains(node) {
            return false;
        }

        let last = match self.stones.last() {
            Some(stone) => stone,
            None => return true,
        };

        if self.is_occupied(node) {
            return false;
        }

        self.board.has_stick_between(last.node, node)
    }

    /// Place a stone for the current player and flip the turn.
    ///
    /// On success returns the placed stone; on failure the state is
    /// unchanged. Out-of-bounds nodes are reported separately from
    /// rule-invalid ones so the caller can word its message.
    pub fn place_stone(&mut self, node: Node) -> Result<Stone, GameError> {
        if !self.board.contains(node) {
            return Err(GameError::OutOfBounds(node.x, node.y));
        }
        if !self.is_valid_move(node) {
            return Err(GameError::InvalidMove);
        }

        let stone = Stone {
            node,
            player: self.current_player(),
        };
        self.stones.push(stone);
        self.player1_turn = !self.player1_turn;
        Ok(stone)
    }

    /// Whether the game has ended.
    ///
    /// Terminal iff no stick's either endpoint is currently a valid move.
    /// Every stick endpoint is treated as a move candidate; this is the
    /// original rule as written, a global dead-end check rather than a scan
    /// of the last stone's neighbors only.
    pub fn is_game_over(&self) -> bool {
        !self.board.sticks().iter().any(|stick| {
            self.is_valid_move(stick.a) || self.is_valid_move(stick.b)
        })
    }

    /// The winner, if the game has ended with at least one stone placed.
    ///
    /// The player who placed the last stone wins; the player now to move
    /// has no legal move and loses.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_game_over() {
            return None;
        }
        self.stones.last().map(|stone| stone.player)
    }

    /// Every currently legal node, in row-major scan order
    pub fn valid_moves(&self) -> Vec<Node> {
        self.board
            .nodes()
            .filter(|node| self.is_valid_move(*node))
            .collect()
    }
}
