//! Plain-text maze output
//!
//! Each cell is drawn as a 3×3 block: `O` posts in the corners, `#` for a
//! closed wall, a space for an open one, and the visited marker in the middle.

use std::fmt;

use super::grid::{Direction, Maze, MazeTile};

const OPEN: char = ' ';
const CLOSED: char = '#';
const POST: char = 'O';

fn side(tile: &MazeTile, dir: Direction) -> char {
    if tile.is_open(dir) { OPEN } else { CLOSED }
}

/// Render the maze, three text lines per grid row
pub fn render_maze(maze: &Maze) -> String {
    let mut out = String::with_capacity(maze.cell_count() * 9 + maze.height() * 3);
    for y in 0..maze.height() {
        let mut top = String::with_capacity(maze.width() * 3);
        let mut middle = String::with_capacity(maze.width() * 3);
        let mut bottom = String::with_capacity(maze.width() * 3);
        for x in 0..maze.width() {
            let tile = maze.tile(x, y);
            top.extend([POST, side(tile, Direction::North), POST]);
            middle.extend([
                side(tile, Direction::West),
                if tile.visited { OPEN } else { CLOSED },
                side(tile, Direction::East),
            ]);
            bottom.extend([POST, side(tile, Direction::South), POST]);
        }
        for line in [top, middle, bottom] {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// One line per row, `1` for visited cells and `0` otherwise
pub fn render_visited(maze: &Maze) -> String {
    let mut out = String::with_capacity(maze.cell_count() + maze.height());
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            out.push(if maze.tile(x, y).visited { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_maze(self))
    }
}
