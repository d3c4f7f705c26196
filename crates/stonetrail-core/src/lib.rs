//! Stonetrail - a two-player stick-and-stone grid game engine
//!
//! This crate provides the core game logic for Stonetrail, including:
//! - Grid coordinate system for nodes and sticks
//! - Board graph generation with a caller-supplied random source
//! - Move validation and turn alternation with full rule enforcement
//! - Save/load snapshots of the complete game state
//!
//! # Architecture
//!
//! The game engine is designed to be front-end-agnostic. It performs no
//! rendering or file I/O; a driver calls into the engine and reads its
//! state back through plain accessors.
//!
//! # Modules
//!
//! - [`grid`]: Coordinate system for nodes and sticks
//! - [`board`]: Board graph generation and queries
//! - [`player`]: Player identity and display colors
//! - [`game`]: Game state, move validation, turn control
//! - [`advisor`]: Trivial first-legal-move finder
//! - [`save`]: Snapshot serialization for save/load

pub mod advisor;
pub mod board;
pub mod game;
pub mod grid;
pub mod player;
pub mod save;

// Re-export commonly used types
pub use advisor::suggest_move;
pub use board::BoardGraph;
pub use game::{GameError, GameState, Stone};
pub use grid::{Node, Stick};
pub use player::Player;
pub use save::{SaveError, Snapshot};
