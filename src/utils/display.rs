//! Terminal rendering and console styling

use crate::config::DisplayConfig;
use crate::life::LifeEngine;

/// Renders engine state as text frames.
///
/// A pure adapter over `(width, height, cell state, generation)`: it polls
/// the engine read surface and nothing in here feeds back into it. Callers
/// may redraw unchanged grids freely.
pub struct FrameRenderer {
    alive_glyph: char,
    dead_glyph: char,
    show_coords: bool,
}

impl FrameRenderer {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            alive_glyph: display.alive_glyph,
            dead_glyph: display.dead_glyph,
            show_coords: display.show_coords,
        }
    }

    /// Render one frame: a generation header plus the board.
    pub fn render(&self, engine: &LifeEngine) -> String {
        let mut frame = String::with_capacity((engine.width() + 4) * (engine.height() + 2));

        frame.push_str(&format!(
            "Generation {:<6}  Live cells: {:<6}\n",
            engine.generation(),
            engine.live_count()
        ));

        if self.show_coords {
            self.push_board_with_coords(&mut frame, engine);
        } else {
            self.push_board(&mut frame, engine);
        }

        frame
    }

    fn push_board(&self, out: &mut String, engine: &LifeEngine) {
        for y in 0..engine.height() {
            for x in 0..engine.width() {
                out.push(if engine.is_alive(x, y) {
                    self.alive_glyph
                } else {
                    self.dead_glyph
                });
            }
            out.push('\n');
        }
    }

    fn push_board_with_coords(&self, out: &mut String, engine: &LifeEngine) {
        // Header with column digits
        out.push_str("   ");
        for x in 0..engine.width() {
            out.push_str(&format!("{}", x % 10));
        }
        out.push('\n');

        // Rows with row numbers
        for y in 0..engine.height() {
            out.push_str(&format!("{:2} ", y % 100));
            for x in 0..engine.width() {
                out.push(if engine.is_alive(x, y) {
                    self.alive_glyph
                } else {
                    self.dead_glyph
                });
            }
            out.push('\n');
        }
    }
}

/// ANSI escape that moves the cursor to the top-left without clearing,
/// used to redraw animation frames in place.
pub const CURSOR_HOME: &str = "\x1b[H";

/// ANSI escape that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
