//! Terminal rendering and output formatting utilities

use crate::life::{Board, Pattern};

/// Renders board state for the terminal.
pub struct BoardRenderer;

impl BoardRenderer {
    /// Render the board in compact form, one glyph per cell.
    pub fn compact(board: &Board) -> String {
        let (cols, rows) = board.dimensions();
        let mut output = String::with_capacity(rows * (cols + 1));
        for y in 0..rows {
            for x in 0..cols {
                output.push(if board.is_alive(x, y) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Render the board with row/column labels for inspection.
    pub fn with_coords(board: &Board) -> String {
        let (cols, rows) = board.dimensions();
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..cols {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..rows {
            output.push_str(&format!("{:2} ", y));
            for x in 0..cols {
                output.push_str(if board.is_alive(x, y) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One generation frame: header line plus the compact grid.
    pub fn frame(board: &Board, generation: usize) -> String {
        let (cols, rows) = board.dimensions();
        format!(
            "Generation {} ({}x{}, {} alive)\n{}",
            generation,
            cols,
            rows,
            board.population(),
            Self::compact(board)
        )
    }

    /// Preview a pattern on its own bounding box.
    pub fn pattern_preview(pattern: &Pattern) -> String {
        let (width, height) = (pattern.width(), pattern.height());
        let mut rows = vec![vec!['·'; width]; height];
        for &(x, y) in pattern.cells {
            rows[y][x] = '█';
        }
        let mut output = String::new();
        for row in rows {
            output.extend(row);
            output.push('\n');
        }
        output
    }
}

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
