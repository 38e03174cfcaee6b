pub use chip8::Chip8;
pub use constants::CLOCK_SPEED;
pub use error::{Chip8Error, Result};
pub use frame_buffer::{FrameBuffer, Row};
pub use instruction::Instruction;
pub use memory::Memory;
pub use registers::Registers;

mod chip8;
pub mod constants;
mod error;
mod frame_buffer;
mod instruction;
mod keypad;
mod memory;
mod operations;
mod registers;
mod stack;
mod state;
mod timer;
