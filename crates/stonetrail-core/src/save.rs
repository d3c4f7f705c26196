//! Save/load snapshots of the game state.
//!
//! A [`Snapshot`] is the persistence image of a [`GameState`]: the four
//! fields grid size, turn flag, stick list, and stone list, declared in
//! that fixed order. Sticks flatten to `[x1, y1, x2, y2]` and stones to
//! `{x, y, player}`. Restoring validates the payload and produces a whole
//! new state, so a failed load never touches the running game.

use crate::board::BoardGraph;
use crate::game::{GameState, Stone};
use crate::grid::{Node, Stick};
use crate::player::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when restoring a snapshot
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("malformed save data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("grid size {0} is not positive")]
    GridSize(i32),

    #[error("stick ({0}, {1})-({2}, {3}) is not a board edge")]
    BadStick(i32, i32, i32, i32),

    #[error("stone at ({0}, {1}) is outside the board")]
    StoneOutOfBounds(i32, i32),
}

/// A stone as stored in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneRecord {
    pub x: i32,
    pub y: i32,
    pub player: Player,
}

/// The four-field persistence image of a game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid_size: i32,
    pub player1_turn: bool,
    pub sticks: Vec<[i32; 4]>,
    pub stones: Vec<StoneRecord>,
}

impl Snapshot {
    /// Capture the current state of a game
    pub fn capture(game: &GameState) -> Self {
        Self {
            grid_size: game.grid_size(),
            player1_turn: game.is_player1_turn(),
            sticks: game
                .board()
                .sticks()
                .iter()
                .map(|stick| [stick.a.x, stick.a.y, stick.b.x, stick.b.y])
                .collect(),
            stones: game
                .stones()
                .iter()
                .map(|stone| StoneRecord {
                    x: stone.node.x,
                    y: stone.node.y,
                    player: stone.player,
                })
                .collect(),
        }
    }

    /// Validate this snapshot and build the game state it describes.
    ///
    /// Checks structural and geometric integrity only: sticks must connect
    /// orthogonally adjacent in-bounds nodes and stones must be in bounds.
    pub fn restore(self) -> Result<GameState, SaveError> {
        if self.grid_size < 1 {
            return Err(SaveError::GridSize(self.grid_size));
        }

        let mut sticks = Vec::with_capacity(self.sticks.len());
        for [x1, y1, x2, y2] in self.sticks {
            let a = Node::new(x1, y1);
            let b = Node::new(x2, y2);
            if !a.in_bounds(self.grid_size)
                || !b.in_bounds(self.grid_size)
                || !a.is_adjacent_to(&b)
            {
                return Err(SaveError::BadStick(x1, y1, x2, y2));
            }
            sticks.push(Stick::new(a, b));
        }

        let mut stones = Vec::with_capacity(self.stones.len());
        for record in self.stones {
            let node = Node::new(record.x, record.y);
            if !node.in_bounds(self.grid_size) {
                return Err(SaveError::StoneOutOfBounds(record.x, record.y));
            }
            stones.push(Stone {
                node,
                player: record.player,
            });
        }

        Ok(GameState::from_parts(
            BoardGraph::from_sticks(self.grid_size, sticks),
            self.player1_turn,
            stones,
        ))
    }

    /// Encode as JSON
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON
    pub fn from_json(payload: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(payload)?)
    }
}
