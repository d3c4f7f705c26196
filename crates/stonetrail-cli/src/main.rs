//! Stonetrail terminal front end.
//!
//! A thin driver around the engine: reads commands from stdin, applies
//! them to the game, and prints the board back. All rules live in
//! `stonetrail-core`; this binary only does I/O.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::Path;
use stonetrail_core::{suggest_move, GameState, Node, SaveError, Snapshot};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod export;
mod render;

use command::Command;

/// Grid size used when `new` is given without one
const DEFAULT_GRID_SIZE: i32 = 5;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let grid_size: i32 = std::env::var("STONETRAIL_GRID_SIZE")
        .unwrap_or_else(|_| DEFAULT_GRID_SIZE.to_string())
        .parse()?;

    info!("Starting Stonetrail with grid size {}", grid_size);

    let mut game = GameState::new(grid_size);
    println!("Stonetrail - type 'help' for commands");
    print!("{}", render::render(&game));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Some(Ok(command)) => command,
            Some(Err(e)) => {
                warn!("Rejected input '{}': {}", line.trim(), e);
                println!("{}", e);
                println!("{}", command::USAGE);
                continue;
            }
            None => continue,
        };

        if command == Command::Quit {
            info!("Session ended");
            break;
        }
        apply(&mut game, command);
    }

    Ok(())
}

/// Apply one command to the running game, printing the outcome
fn apply(game: &mut GameState, command: Command) {
    match command {
        Command::New(size) => {
            let grid_size = size.unwrap_or(DEFAULT_GRID_SIZE);
            *game = GameState::new(grid_size);
            info!("New game on a {0}x{0} grid", grid_size);
            print!("{}", render::render(game));
        }
        Command::Place(x, y) => {
            place(game, Node::new(x, y));
        }
        Command::Show => {
            print!("{}", render::render(game));
        }
        Command::Hint => match suggest_move(game) {
            Some(node) => println!("Try ({}, {})", node.x, node.y),
            None => println!("No legal move remains."),
        },
        Command::Auto => match suggest_move(game) {
            Some(node) => place(game, node),
            None => println!("No legal move remains."),
        },
        Command::Save(path) => match save_game(&path, game) {
            Ok(()) => {
                info!("Saved game to {}", path.display());
                println!("Game saved successfully!");
            }
            Err(e) => {
                warn!("Save to {} failed: {}", path.display(), e);
                println!("Failed to save the game: {}", e);
            }
        },
        Command::Load(path) => match load_game(&path) {
            Ok(loaded) => {
                *game = loaded;
                info!("Loaded game from {}", path.display());
                println!("Game loaded successfully!");
                print!("{}", render::render(game));
            }
            Err(e) => {
                // The running game is untouched on any load failure
                warn!("Load from {} failed: {}", path.display(), e);
                println!("Failed to load the game: {}", e);
            }
        },
        Command::Export(path) => match export::export_svg(&path, game) {
            Ok(()) => {
                info!("Exported board to {}", path.display());
                println!("Board exported successfully as SVG image.");
            }
            Err(e) => {
                warn!("Export to {} failed: {}", path.display(), e);
                println!("Error exporting board as SVG image: {}", e);
            }
        },
        Command::Help => println!("{}", command::USAGE),
        // Quit is handled by the session loop
        Command::Quit => {}
    }
}

/// Place a stone and report the move, the board, and any game-over
fn place(game: &mut GameState, node: Node) {
    match game.place_stone(node) {
        Ok(stone) => {
            println!(
                "{} placed a stone at ({}, {})",
                stone.player, stone.node.x, stone.node.y
            );
            // The rendered status line announces a win, if any
            print!("{}", render::render(game));
        }
        Err(e) => {
            warn!("Rejected move at ({}, {}): {}", node.x, node.y, e);
            println!("Invalid move! Stone cannot be placed there.");
        }
    }
}

fn save_game(path: &Path, game: &GameState) -> anyhow::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &Snapshot::capture(game))?;
    Ok(())
}

fn load_game(path: &Path) -> anyhow::Result<GameState> {
    let file = File::open(path)?;
    let snapshot: Snapshot =
        serde_json::from_reader(BufReader::new(file)).map_err(SaveError::Malformed)?;
    Ok(snapshot.restore()?)
}
