//! Terminal board renderer.
//!
//! Draws the node grid with sticks as line segments and stones as the
//! digit of the player who placed them. The renderer only reads engine
//! state; it never mutates it.

use stonetrail_core::{GameState, Node, Player};

fn node_char(game: &GameState, node: Node) -> char {
    for stone in game.stones() {
        if stone.node == node {
            return match stone.player {
                Player::One => '1',
                Player::Two => '2',
            };
        }
    }
    '+'
}

/// Render the full board plus a status line
pub fn render(game: &GameState) -> String {
    let n = game.grid_size();
    let mut out = String::new();

    for y in 0..n {
        // Node row: nodes joined by horizontal sticks
        for x in 0..n {
            out.push(node_char(game, Node::new(x, y)));
            if x < n - 1 {
                if game
                    .board()
                    .has_stick_between(Node::new(x, y), Node::new(x + 1, y))
                {
                    out.push_str("---");
                } else {
                    out.push_str("   ");
                }
            }
        }
        out.push('\n');

        // Stick row: vertical sticks down to the next node row
        if y < n - 1 {
            for x in 0..n {
                if game
                    .board()
                    .has_stick_between(Node::new(x, y), Node::new(x, y + 1))
                {
                    out.push('|');
                } else {
                    out.push(' ');
                }
                if x < n - 1 {
                    out.push_str("   ");
                }
            }
            out.push('\n');
        }
    }

    out.push_str(&status_line(game));
    out.push('\n');
    out
}

/// One-line game status: whose turn, or who won
pub fn status_line(game: &GameState) -> String {
    if game.is_game_over() {
        match game.winner() {
            Some(winner) => format!("Game Over! {} wins!", winner),
            None => "Game Over! No stone was placed.".to_string(),
        }
    } else {
        format!("{} to move", game.current_player())
    }
}
