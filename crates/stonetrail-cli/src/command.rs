//! Parsing of terminal input lines into session commands.

use std::path::PathBuf;
use thiserror::Error;

/// One line of usage text per command
pub const USAGE: &str = "\
Commands:
  new [size]       start a new game (default grid size 5)
  place <x> <y>    place a stone for the current player
  show             redraw the board
  hint             show a legal move, if one exists
  auto             play the first legal move
  save <path>      save the game to a file
  load <path>      load a game from a file
  export <path>    export the board as an SVG image
  help             show this message
  quit             exit";

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New(Option<i32>),
    Place(i32, i32),
    Show,
    Hint,
    Auto,
    Save(PathBuf),
    Load(PathBuf),
    Export(PathBuf),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl Command {
    /// Parse one input line. Empty lines yield `None`.
    pub fn parse(line: &str) -> Option<Result<Command, ParseError>> {
        let mut words = line.split_whitespace();
        let keyword = words.next()?;
        let args: Vec<&str> = words.collect();

        let command = match keyword {
            "new" => match args.as_slice() {
                [] => Ok(Command::New(None)),
                [size] => size
                    .parse()
                    .map(|n| Command::New(Some(n)))
                    .map_err(|_| ParseError::Usage("new [size]")),
                _ => Err(ParseError::Usage("new [size]")),
            },
            "place" => match args.as_slice() {
                [x, y] => match (x.parse(), y.parse()) {
                    (Ok(x), Ok(y)) => Ok(Command::Place(x, y)),
                    _ => Err(ParseError::Usage("place <x> <y>")),
                },
                _ => Err(ParseError::Usage("place <x> <y>")),
            },
            "show" => Ok(Command::Show),
            "hint" => Ok(Command::Hint),
            "auto" => Ok(Command::Auto),
            "save" => match args.as_slice() {
                [path] => Ok(Command::Save(PathBuf::from(path))),
                _ => Err(ParseError::Usage("save <path>")),
            },
            "load" => match args.as_slice() {
                [path] => Ok(Command::Load(PathBuf::from(path))),
                _ => Err(ParseError::Usage("load <path>")),
            },
            "export" => match args.as_slice() {
                [path] => Ok(Command::Export(PathBuf::from(path))),
                _ => Err(ParseError::Usage("export <path>")),
            },
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        };

        Some(command)
    }
}
