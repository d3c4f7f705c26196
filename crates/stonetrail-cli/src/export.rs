//! SVG board exporter.
//!
//! Writes the same scene the terminal renderer describes as a static
//! image: gray grid lines, black stick segments, player-colored stone
//! discs. Geometry follows the original canvas: nodes sit at cell-size
//! multiples on a fixed 400x400 viewport, stones have quarter-cell
//! radius.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use stonetrail_core::GameState;

/// Width and height of the exported image, in pixels
const CANVAS_SIZE: f64 = 400.0;

/// Export the board to an SVG file at the given path
pub fn export_svg(path: &Path, game: &GameState) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_svg(&mut out, game)?;
    out.flush()
}

/// Write the board as an SVG document
pub fn write_svg<W: Write>(out: &mut W, game: &GameState) -> io::Result<()> {
    let cell = CANVAS_SIZE / game.grid_size() as f64;

    writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{0}\" viewBox=\"0 0 {0} {0}\">",
        CANVAS_SIZE
    )?;
    writeln!(out, "  <rect width=\"{0}\" height=\"{0}\" fill=\"white\"/>", CANVAS_SIZE)?;

    // Background grid
    for i in 0..=game.grid_size() {
        let offset = i as f64 * cell;
        writeln!(
            out,
            "  <line x1=\"{offset}\" y1=\"0\" x2=\"{offset}\" y2=\"{CANVAS_SIZE}\" stroke=\"gray\"/>"
        )?;
        writeln!(
            out,
            "  <line x1=\"0\" y1=\"{offset}\" x2=\"{CANVAS_SIZE}\" y2=\"{offset}\" stroke=\"gray\"/>"
        )?;
    }

    // Sticks
    for stick in game.board().sticks() {
        writeln!(
            out,
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"black\" stroke-width=\"2\"/>",
            stick.a.x as f64 * cell,
            stick.a.y as f64 * cell,
            stick.b.x as f64 * cell,
            stick.b.y as f64 * cell,
        )?;
    }

    // Stones
    for stone in game.stones() {
        writeln!(
            out,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            stone.node.x as f64 * cell,
            stone.node.y as f64 * cell,
            cell / 4.0,
            stone.player.hex_code(),
        )?;
    }

    writeln!(out, "</svg>")
}
