//! GameView: maps tile rows (or a gate message) into a framebuffer.
//!
//! This module is pure (no I/O). The playfield is drawn as a bordered
//! 16x2 panel centered in the terminal, one glyph+color pair per tile.

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Tile, TileRows, MAP_COLS, VISIBLE_ROWS};

const PANEL_W: u16 = MAP_COLS as u16 + 2;
const PANEL_H: u16 = VISIBLE_ROWS as u16 + 2;

fn border_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(120, 120, 130),
        bg: Rgb::new(0, 0, 0),
        bold: false,
    }
}

fn text_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(220, 220, 220),
        bg: Rgb::new(10, 14, 24),
        bold: false,
    }
}

fn tile_glyph(tile: Tile) -> (char, CellStyle) {
    let water_bg = Rgb::new(10, 20, 45);
    match tile {
        Tile::Ground => (
            '\u{2592}', // ▒
            CellStyle {
                fg: Rgb::new(110, 170, 90),
                bg: Rgb::new(25, 40, 20),
                bold: false,
            },
        ),
        Tile::Water => (
            '~',
            CellStyle {
                fg: Rgb::new(60, 120, 210),
                bg: water_bg,
                bold: false,
            },
        ),
        Tile::Log => (
            '\u{2588}', // █
            CellStyle {
                fg: Rgb::new(180, 140, 80),
                bg: water_bg,
                bold: false,
            },
        ),
        Tile::Frog => (
            '@',
            CellStyle {
                fg: Rgb::new(130, 255, 110),
                bg: water_bg,
                bold: true,
            },
        ),
    }
}

/// A lightweight terminal view for the 16x2 playfield.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the visible map rows into a `width` x `height` framebuffer.
    pub fn render_playfield(&self, rows: &TileRows, width: u16, height: u16) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        let (x0, y0) = self.draw_panel(&mut fb);

        for (dy, tiles) in rows.iter().enumerate() {
            for (dx, tile) in tiles.iter().enumerate() {
                let (ch, style) = tile_glyph(*tile);
                fb.put_char(x0 + dx as u16, y0 + dy as u16, ch, style);
            }
        }
        fb
    }

    /// Render a two-line gate screen (start / win / fail) into the panel.
    pub fn render_message(&self, line1: &str, line2: &str, width: u16, height: u16) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        let (x0, y0) = self.draw_panel(&mut fb);

        for (dy, line) in [line1, line2].iter().enumerate() {
            let y = y0 + dy as u16;
            for dx in 0..MAP_COLS as u16 {
                fb.put_char(x0 + dx, y, ' ', text_style());
            }
            let len = line.chars().count().min(MAP_COLS as usize) as u16;
            let x = x0 + (MAP_COLS as u16 - len) / 2;
            fb.put_str(x, y, line, text_style());
        }
        fb
    }

    /// Draw the empty bordered panel; returns the interior origin.
    fn draw_panel(&self, fb: &mut FrameBuffer) -> (u16, u16) {
        let px = fb.width().saturating_sub(PANEL_W) / 2;
        let py = fb.height().saturating_sub(PANEL_H) / 2;
        let style = border_style();

        for x in px + 1..px + PANEL_W - 1 {
            fb.put_char(x, py, '\u{2500}', style);
            fb.put_char(x, py + PANEL_H - 1, '\u{2500}', style);
        }
        for y in py + 1..py + PANEL_H - 1 {
            fb.put_char(px, y, '\u{2502}', style);
            fb.put_char(px + PANEL_W - 1, y, '\u{2502}', style);
        }
        fb.put_char(px, py, '\u{250C}', style);
        fb.put_char(px + PANEL_W - 1, py, '\u{2510}', style);
        fb.put_char(px, py + PANEL_H - 1, '\u{2514}', style);
        fb.put_char(px + PANEL_W - 1, py + PANEL_H - 1, '\u{2518}', style);

        (px + 1, py + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> TileRows {
        let mut rows = [[Tile::Water; MAP_COLS as usize]; VISIBLE_ROWS];
        rows[1] = [Tile::Ground; MAP_COLS as usize];
        rows[0][3] = Tile::Log;
        rows[1][8] = Tile::Frog;
        rows
    }

    #[test]
    fn test_playfield_lands_centered_in_the_framebuffer() {
        let view = GameView;
        let fb = view.render_playfield(&sample_rows(), 80, 24);
        let x0 = (80 - PANEL_W) / 2 + 1;
        let y0 = (24 - PANEL_H) / 2 + 1;

        assert_eq!(fb.get(x0 + 3, y0).unwrap().ch, '\u{2588}');
        assert_eq!(fb.get(x0 + 8, y0 + 1).unwrap().ch, '@');
        assert_eq!(fb.get(x0, y0).unwrap().ch, '~');
    }

    #[test]
    fn test_message_is_centered_on_its_line() {
        let view = GameView;
        let fb = view.render_message("YOU WIN!", "Score: 12 +50", 80, 24);
        let x0 = (80 - PANEL_W) / 2 + 1;
        let y0 = (24 - PANEL_H) / 2 + 1;

        // "YOU WIN!" is 8 chars, centered in 16 -> offset 4.
        assert_eq!(fb.get(x0 + 4, y0).unwrap().ch, 'Y');
        assert_eq!(fb.get(x0, y0).unwrap().ch, ' ');
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let view = GameView;
        let fb = view.render_playfield(&sample_rows(), 4, 2);
        assert_eq!(fb.width(), 4);
    }
}
