/// Surface dimensions match VGA mode 13h, the resolution this style of
/// rasterizer was written for.
pub const WIDTH: u32 = 320;
pub const HEIGHT: u32 = 200;

/// The standard 16-entry VGA text palette. A pixel stores an index into
/// this table; the high nibble of a written color is ignored.
pub const PALETTE: [(u8, u8, u8); 16] = [
    (0, 0, 0),       // 0  black
    (0, 0, 170),     // 1  blue
    (0, 170, 0),     // 2  green
    (0, 170, 170),   // 3  cyan
    (170, 0, 0),     // 4  red
    (170, 0, 170),   // 5  magenta
    (170, 85, 0),    // 6  brown
    (170, 170, 170), // 7  light grey
    (85, 85, 85),    // 8  dark grey
    (85, 85, 255),   // 9  bright blue
    (85, 255, 85),   // 10 bright green
    (85, 255, 255),  // 11 bright cyan
    (255, 85, 85),   // 12 bright red
    (255, 85, 255),  // 13 bright magenta
    (255, 255, 85),  // 14 yellow
    (255, 255, 255), // 15 white
];

// ============================================================================
// Surface
// ============================================================================

/// Indexed-color pixel surface for software rendering
/// This is our canvas - fill and outline primitives render to this
pub struct Surface {
    pixels: Vec<u8>,
}

impl Surface {
    /// Create a new surface cleared to color index 0
    pub fn new() -> Self {
        Self {
            pixels: vec![0; (WIDTH * HEIGHT) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        WIDTH
    }

    #[inline]
    pub fn height(&self) -> u32 {
        HEIGHT
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32
    }

    /// Calculate buffer offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y * WIDTH + x) as usize
    }

    /// Clear to a solid color index
    pub fn clear(&mut self, color: u8) {
        self.pixels.fill(color & 0x0f);
    }

    /// Set a single pixel (bounds checked - out-of-range writes are no-ops)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx] = color & 0x0f;
        }
    }

    /// Read a pixel from the surface (bounds checked)
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u8> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.pixel_index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Draw a horizontal line (the scanline fill primitive)
    /// Endpoints may arrive in either order; the span is clamped to bounds
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32, color: u8) {
        if y < 0 || y >= HEIGHT as i32 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0);
        let end = x2.min(WIDTH as i32 - 1);
        if start > end {
            return;
        }

        let idx = self.pixel_index(start as u32, y as u32);
        let count = (end - start + 1) as usize;
        self.pixels[idx..idx + count].fill(color & 0x0f);
    }

    /// Draw a line using Bresenham's algorithm
    ///
    /// Integer-only: a signed error accumulator decides which axes advance
    /// each step. Every visited pixel goes through the bounds-checked write,
    /// so off-surface portions are dropped pixel by pixel rather than
    /// pre-clipped. The visited set is identical for either endpoint order.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u8) {
        let dx = (x1 - x0).abs();
        let dy = -((y1 - y0).abs());
        let sx = if x0 < x1 { 1i32 } else { -1i32 };
        let sy = if y0 < y1 { 1i32 } else { -1i32 };
        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);
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

    /// Fill a triangle using sorted-vertex scanline interpolation.
    ///
    /// Vertices are sorted by ascending y, then each scanline interpolates
    /// the long edge (v0->v2) against the active short edge (v0->v1 above
    /// the middle vertex, v1->v2 below it). Interpolation fractions are
    /// fixed-point, scaled by 256 and shifted back down - no floats, no
    /// division in the span loop. The fill is inclusive of the boundary.
    ///
    /// A zero-height upper segment routes scanline 0 through the lower
    /// segment (`second_half` also fires when `segment_height == 0`), which
    /// is what keeps flat-topped triangles from dividing by zero.
    pub fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: u8,
    ) {
        let (mut x0, mut y0) = (x0, y0);
        let (mut x1, mut y1) = (x1, y1);
        let (mut x2, mut y2) = (x2, y2);

        // Sort by y, keeping each x paired with its y
        if y0 > y1 {
            std::mem::swap(&mut y0, &mut y1);
            std::mem::swap(&mut x0, &mut x1);
        }
        if y0 > y2 {
            std::mem::swap(&mut y0, &mut y2);
            std::mem::swap(&mut x0, &mut x2);
        }
        if y1 > y2 {
            std::mem::swap(&mut y1, &mut y2);
            std::mem::swap(&mut x1, &mut x2);
        }

        let total_height = y2 - y0;
        if total_height == 0 {
            // All three vertices on one row
            self.hline(x0.min(x1).min(x2), x0.max(x1).max(x2), y0, color);
            return;
        }

        for i in 0..=total_height {
            let segment_height = y1 - y0;
            let second_half = i > segment_height || segment_height == 0;

            let alpha = if second_half {
                (i - segment_height) * 256 / (y2 - y1)
            } else {
                i * 256 / segment_height
            };
            let beta = i * 256 / total_height;

            let sx = x0 + (((x2 - x0) * beta) >> 8);
            let ex = if second_half {
                x1 + (((x2 - x1) * alpha) >> 8)
            } else {
                x0 + (((x1 - x0) * alpha) >> 8)
            };

            // hline swaps when sx > ex, so rows always draw left-to-right
            self.hline(sx, ex, y0 + i, color);
        }
    }

    /// Expand the indexed surface through the palette into an RGBA8888
    /// byte slice for texture upload (ABGR byte order, little-endian)
    pub fn to_rgba(&self, out: &mut [u8]) {
        for (dest, &index) in out.chunks_exact_mut(4).zip(self.pixels.iter()) {
            let (r, g, b) = PALETTE[(index & 0x0f) as usize];
            dest[0] = 255; // A
            dest[1] = b; // B
            dest[2] = g; // G
            dest[3] = r; // R
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}
