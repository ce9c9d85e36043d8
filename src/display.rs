use std::io;

use tui::backend::CrosstermBackend;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders};
use tui::Terminal;

use crate::error::Error;
use crate::machine::{DISPLAY_HEIGHT, DISPLAY_PIXELS, DISPLAY_WIDTH};

/// Display is what the driver hands the framebuffer to, once per frame.
/// It should abstract the implementation details, so a variety of kinds
/// of screen would work. The interpreter itself never touches it.
pub trait Display {
    /// present a row-major grid of on/off pixels
    fn draw(&mut self, pixels: &[bool]) -> Result<(), Error>;
}

/// coordinates of every pixel in the given state, in canvas space
/// (y grows upward, hence the flip)
fn plane(pixels: &[bool], lit: bool) -> Vec<(f64, f64)> {
    pixels
        .iter()
        .enumerate()
        .filter(|&(_, &px)| px == lit)
        .map(|(i, _)| ((i % DISPLAY_WIDTH) as f64, -((i / DISPLAY_WIDTH) as f64)))
        .collect()
}

/// monochrome display in a terminal, rendered with TUI over crossterm.
/// foreground green on black, like the machine it grew up on
pub struct MonoTermDisplay {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl MonoTermDisplay {
    pub fn new() -> Result<MonoTermDisplay, Error> {
        let backend = CrosstermBackend::new(io::stdout());
        Ok(MonoTermDisplay {
            terminal: Terminal::new(backend)?,
        })
    }
}

impl Display for MonoTermDisplay {
    fn draw(&mut self, pixels: &[bool]) -> Result<(), Error> {
        // make sure we're given exactly the right amount of data to draw
        assert_eq!(
            pixels.len(),
            DISPLAY_PIXELS,
            "MonoTermDisplay must have correct-sized data to draw"
        );

        self.terminal.draw(|f| {
            let size = Rect::new(0, 0, 2 + DISPLAY_WIDTH as u16, 2 + DISPLAY_HEIGHT as u16);

            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("crisp8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(Color::Black)),
                )
                .x_bounds([0.0, (DISPLAY_WIDTH - 1) as f64])
                .y_bounds([-1.0 * (DISPLAY_HEIGHT - 1) as f64, 0.0])
                .marker(Marker::Block)
                .paint(|ctx| {
                    let off = plane(pixels, false);
                    let on = plane(pixels, true);
                    ctx.draw(&Points {
                        coords: &off,
                        color: Color::Black,
                    });
                    ctx.draw(&Points {
                        coords: &on,
                        color: Color::Green,
                    });
                });
            f.render_widget(canvas, size);
        })?;
        Ok(())
    }
}

/// swallows frames; useful for testing non-display routines
pub struct NullDisplay;

impl NullDisplay {
    pub fn new() -> NullDisplay {
        NullDisplay
    }
}

impl Display for NullDisplay {
    fn draw(&mut self, _pixels: &[bool]) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_maps_row_major_to_canvas() {
        let mut pixels = vec![false; DISPLAY_PIXELS];
        pixels[1] = true; // (1, 0)
        pixels[DISPLAY_WIDTH] = true; // (0, 1)
        let on = plane(&pixels, true);
        assert_eq!(on, vec![(1.0, 0.0), (0.0, -1.0)]);
        assert_eq!(plane(&pixels, false).len(), DISPLAY_PIXELS - 2);
    }

    #[test]
    fn test_null_display_accepts_anything() {
        let mut d = NullDisplay::new();
        assert!(d.draw(&[false; DISPLAY_PIXELS]).is_ok());
    }
}
