use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use emu8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use emu8_core::FrameBuffer;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
///
/// It is drawn in a terminal's alternate screen with half-block characters, so
/// each line of text carries two rows of pixels and the picture keeps roughly
/// the right aspect ratio in 64x16 cells.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display {
    out: Stdout,
}

impl Display {
    /// Switches the terminal to its alternate screen and hides the cursor.
    /// Both are restored when the Display is dropped.
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Display { out })
    }

    /// Formats a Chip-8 FrameBuffer as lines of text.
    ///
    /// Pairs of pixel rows are folded into one line, picking the block
    /// character that has the top half, bottom half, both or neither lit.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn frame_to_lines(frame: &FrameBuffer) -> Vec<String> {
        frame
            .rows()
            .chunks(2)
            .map(|pair| {
                (0..DISPLAY_WIDTH)
                    .map(|x| match (pair[0][x], pair.get(1).is_some_and(|row| row[x])) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    })
                    .collect::<String>()
            })
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as text and draws it from the top left.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        for (y, line) in Display::frame_to_lines(frame).iter().enumerate() {
            queue!(self.out, MoveTo(0, y as u16), Print(line))?;
        }
        self.out.flush()
    }

    /// Rings the terminal bell
    pub fn beep(&mut self) -> io::Result<()> {
        execute!(self.out, Print('\u{7}'))
    }

    /// Lines of text the display takes up
    pub fn height() -> usize {
        DISPLAY_HEIGHT.div_ceil(2)
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // nothing useful to do if the terminal has gone away
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
    }
}
