//! Framebuffer and style types for terminal rendering.
//!
//! Writes address cells by grid [`Position`]; anything outside the buffer is
//! reported as a [`RenderError`] rather than silently wrapped or clipped.

use thiserror::Error;

use crate::types::Position;

/// A draw command could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("cell ({row}, {col}) is outside the {height}x{width} screen")]
    OutOfBounds {
        row: i32,
        col: i32,
        height: u16,
        width: u16,
    },
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        if row >= self.height as usize || col >= self.width as usize {
            return None;
        }
        Some(row * self.width as usize + col)
    }

    fn out_of_bounds(&self, pos: Position) -> RenderError {
        RenderError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            height: self.height,
            width: self.width,
        }
    }

    /// Cell at screen coordinates (`x` = column, `y` = row).
    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.at(Position::new(y as i32, x as i32))
    }

    pub fn at(&self, pos: Position) -> Option<Cell> {
        self.idx(pos).map(|i| self.cells[i])
    }

    pub fn put(&mut self, pos: Position, ch: char, style: CellStyle) -> Result<(), RenderError> {
        let i = self.idx(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.cells[i] = Cell { ch, style };
        Ok(())
    }

    pub fn erase(&mut self, pos: Position) -> Result<(), RenderError> {
        self.put(pos, ' ', CellStyle::default())
    }

    /// Write `s` starting at `pos`. Fails on the first cell that does not fit;
    /// characters before it stay written.
    pub fn put_str(&mut self, pos: Position, s: &str, style: CellStyle) -> Result<(), RenderError> {
        for (i, ch) in s.chars().enumerate() {
            self.put(Position::new(pos.row, pos.col + i as i32), ch, style)?;
        }
        Ok(())
    }

    /// Write `s` horizontally centred on `row`.
    pub fn put_str_centered(&mut self, row: i32, s: &str, style: CellStyle) -> Result<(), RenderError> {
        let len = s.chars().count() as i32;
        let col = self.width as i32 / 2 - len / 2;
        self.put_str(Position::new(row, col), s, style)
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Row as a string, for assertions and debugging.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, row))
            .map(|c| c.ch)
            .collect()
    }
}
