//! Tile colors

use dg_core::dungeon::TileCode;

/// 8-bit RGB triple
pub type Rgb = [u8; 3];

pub const BLACK: Rgb = [0, 0, 0];
pub const WHITE: Rgb = [255, 255, 255];
pub const BLUE: Rgb = [0, 0, 255];
pub const RED: Rgb = [255, 0, 0];
pub const GREEN: Rgb = [0, 255, 0];

/// Color used for a tile in the output image
pub fn tile_color(code: TileCode) -> Rgb {
    match code {
        TileCode::Border => BLUE,
        TileCode::Interior => WHITE,
        TileCode::Overlap => RED,
        TileCode::Corridor => GREEN,
        TileCode::Empty => BLACK,
    }
}
