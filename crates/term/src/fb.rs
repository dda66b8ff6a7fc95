//! Framebuffer and style types for terminal rendering.
//!
//! The drawing primitives mirror what a pixel canvas offers (clear, line,
//! ellipse, text), with one terminal character standing in for one pixel.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
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
        Self::fg(Rgb::new(220, 220, 220))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
///
/// Writes outside the buffer are clipped silently.
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

    /// Resize, keeping the allocation where possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = width as usize * height as usize;
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x as i32, y as i32).map(|i| self.cells[i])
    }

    /// Plot one character; negative or out-of-range coordinates are clipped.
    pub fn plot(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell::new(ch, style);
        }
    }

    /// Fill every cell, like clearing a canvas to a color.
    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn text(&mut self, x: i32, y: i32, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            self.plot(x + i as i32, y, ch, style);
        }
    }

    /// Text horizontally centered in `[x, x + width)`.
    pub fn text_centered(&mut self, x: i32, width: i32, y: i32, s: &str, style: CellStyle) {
        let len = s.chars().count() as i32;
        self.text(x + (width - len).max(0) / 2, y, s, style);
    }

    pub fn hline(&mut self, x: i32, y: i32, len: i32, ch: char, style: CellStyle) {
        for dx in 0..len {
            self.plot(x + dx, y, ch, style);
        }
    }

    pub fn vline(&mut self, x: i32, y: i32, len: i32, ch: char, style: CellStyle) {
        for dy in 0..len {
            self.plot(x, y + dy, ch, style);
        }
    }

    /// Bresenham line between two inclusive endpoints.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, ch: char, style: CellStyle) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            self.plot(x, y, ch, style);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Outline of an axis-aligned ellipse centered on `(cx, cy)`.
    ///
    /// Separate radii let a circle come out round on non-square glyphs.
    pub fn ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, ch: char, style: CellStyle) {
        if rx <= 0 || ry <= 0 {
            self.plot(cx, cy, ch, style);
            return;
        }
        let steps = 8 * (rx + ry);
        for i in 0..steps {
            let t = (i as f32) * std::f32::consts::TAU / (steps as f32);
            let x = cx + (rx as f32 * t.cos()).round() as i32;
            let y = cy + (ry as f32 * t.sin()).round() as i32;
            self.plot(x, y, ch, style);
        }
    }

    /// Row `y` as a string, for tests and debugging.
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }

    /// Whole buffer as newline-separated rows.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            out.push_str(&self.row_string(y));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_outside_are_clipped() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default();
        fb.plot(-1, 0, 'A', style);
        fb.plot(3, 0, 'A', style);
        fb.plot(0, 2, 'A', style);
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
        fb.text(1, 1, "XYZ", style);
        assert_eq!(fb.row_string(1), " XY");
    }

    #[test]
    fn line_hits_both_endpoints() {
        let mut fb = FrameBuffer::new(10, 5);
        let style = CellStyle::default();
        fb.line(1, 0, 9, 4, '\\', style);
        assert_eq!(fb.get(1, 0).unwrap().ch, '\\');
        assert_eq!(fb.get(9, 4).unwrap().ch, '\\');
        // Every row gets at least one mark.
        for y in 0..5 {
            assert!(fb.row_string(y).contains('\\'), "row {y} empty");
        }
    }

    #[test]
    fn ellipse_touches_extremes_and_leaves_center() {
        let mut fb = FrameBuffer::new(21, 11);
        let style = CellStyle::default();
        fb.ellipse(10, 5, 8, 4, 'o', style);
        assert_eq!(fb.get(18, 5).unwrap().ch, 'o');
        assert_eq!(fb.get(2, 5).unwrap().ch, 'o');
        assert_eq!(fb.get(10, 1).unwrap().ch, 'o');
        assert_eq!(fb.get(10, 9).unwrap().ch, 'o');
        assert_eq!(fb.get(10, 5).unwrap().ch, ' ');
    }

    #[test]
    fn text_centered_in_span() {
        let mut fb = FrameBuffer::new(9, 1);
        fb.text_centered(0, 9, 0, "abc", CellStyle::default());
        assert_eq!(fb.row_string(0), "   abc   ");
    }

    #[test]
    fn resize_keeps_contents_shape() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(4, 3);
        assert_eq!(fb.cells().len(), 12);
        assert_eq!(fb.width(), 4);
        assert_eq!(fb.height(), 3);
    }
}
