//! Trivial move advisor.
//!
//! A stand-in for a real AI: it returns the first legal node in row-major
//! scan order, with no lookahead or evaluation. A deterministic tie-break
//! placeholder that a search-based player could later replace.

use crate::game::GameState;
use crate::grid::Node;

/// The first node, scanning (0,0), (0,1), ... row by row, at which a stone
/// may legally be placed; `None` when no node qualifies (the game is over).
pub fn suggest_move(game: &GameState) -> Option<Node> {
    game.board().nodes().find(|node| game.is_valid_move(*node))
}
