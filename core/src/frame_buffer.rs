use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// One row of pixels, `true` meaning on
pub type Row = [bool; DISPLAY_WIDTH];

/// # FrameBuffer
/// The 64x32 monochrome contents of the next frame to be drawn.
///
/// Pixels are toggled rather than set, so drawing the same sprite twice in the
/// same place restores whatever was there before. The buffer is indexed as
/// [y][x].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameBuffer {
    rows: [Row; DISPLAY_HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            rows: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.rows = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// XORs `sprite` onto the buffer with its top left corner at `x`, `y`.
    ///
    /// Only the origin wraps around the edges of the display; any part of the
    /// sprite that then hangs off the right or bottom edge is clipped.
    /// Returns whether any pixel that was on got turned off.
    pub fn draw_sprite(&mut self, x: usize, y: usize, sprite: &[u8]) -> bool {
        let x = x % DISPLAY_WIDTH;
        let y = y % DISPLAY_HEIGHT;
        let mut collided = false;

        for (row, &byte) in self.rows[y..].iter_mut().zip(sprite) {
            for (bit, pixel) in row[x..].iter_mut().take(8).enumerate() {
                if byte & (0x80u8 >> bit) != 0 {
                    collided |= *pixel;
                    *pixel ^= true;
                }
            }
        }

        collided
    }

    /// Whether the pixel at `x`, `y` is on; anything off screen is off
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    pub fn rows(&self) -> &[Row; DISPLAY_HEIGHT] {
        &self.rows
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().flatten().all(|pixel| !pixel)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(frame: &FrameBuffer) -> Vec<(usize, usize)> {
        let mut pixels = Vec::new();
        for (y, row) in frame.rows().iter().enumerate() {
            for (x, &pixel) in row.iter().enumerate() {
                if pixel {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn test_draws_msb_first() {
        let mut frame = FrameBuffer::new();
        let collided = frame.draw_sprite(8, 2, &[0b1000_0001]);
        assert!(!collided);
        assert_eq!(lit(&frame), vec![(8, 2), (15, 2)]);
    }

    #[test]
    fn test_draws_multiple_rows() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(1, 1, &[0xF0, 0x90]);
        assert_eq!(
            lit(&frame),
            vec![(1, 1), (2, 1), (3, 1), (4, 1), (1, 2), (4, 2)]
        );
    }

    #[test]
    fn test_draw_twice_erases_and_collides() {
        let mut frame = FrameBuffer::new();
        assert!(!frame.draw_sprite(0, 0, &[0xFF]));
        assert_eq!(lit(&frame).len(), 8);
        assert!(frame.draw_sprite(0, 0, &[0xFF]));
        assert!(frame.is_blank());
    }

    #[test]
    fn test_xors() {
        let mut frame = FrameBuffer::new();
        // 0 1 0 1 -> Set
        frame.draw_sprite(2, 0, &[0b0101_0000]);
        // 1 1 0 0 -> Draw xor
        let collided = frame.draw_sprite(2, 0, &[0b1100_0000]);
        assert!(collided);
        assert_eq!(lit(&frame), vec![(2, 0), (5, 0)]);
    }

    #[test]
    fn test_no_collision_on_unset_bits() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 0, &[0b1010_1010]);
        assert!(!frame.draw_sprite(0, 0, &[0b0101_0101]));
        assert_eq!(lit(&frame).len(), 8);
    }

    #[test]
    fn test_clips_right_edge() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(60, 0, &[0xFF]);
        assert_eq!(lit(&frame), vec![(60, 0), (61, 0), (62, 0), (63, 0)]);
        assert!(!frame.pixel(0, 0));
        assert!(!frame.pixel(0, 1));
    }

    #[test]
    fn test_clips_bottom_edge() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 30, &[0x80, 0x80, 0x80, 0x80]);
        assert_eq!(lit(&frame), vec![(0, 30), (0, 31)]);
    }

    #[test]
    fn test_clipped_pixels_dont_collide() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 0, &[0x80]);
        // would wrap onto (0, 0) if the sprite body wrapped
        assert!(!frame.draw_sprite(63, 31, &[0xC0, 0xC0]));
        assert!(frame.pixel(0, 0));
        assert!(frame.pixel(63, 31));
        assert_eq!(lit(&frame).len(), 2);
    }

    #[test]
    fn test_origin_wraps() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(64 + 3, 32 + 5, &[0x80]);
        assert_eq!(lit(&frame), vec![(3, 5)]);
    }

    #[test]
    fn test_clear() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(10, 10, &[0xFF, 0xFF]);
        assert!(!frame.is_blank());
        frame.clear();
        assert!(frame.is_blank());
    }

    #[test]
    fn test_pixel_off_screen() {
        let frame = FrameBuffer::new();
        assert!(!frame.pixel(64, 0));
        assert!(!frame.pixel(0, 32));
    }
}
