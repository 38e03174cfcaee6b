use thiserror::Error;

/// Everything that can go wrong while running a Chip-8.
///
/// Every variant is fatal to the `Chip8` that produced it; the caller decides
/// whether to stop or start over with a fresh instance.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("memory access out of bounds at address {addr:#06X}")]
    OutOfBounds { addr: usize },

    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("stack overflow: more than 16 nested subroutine calls")]
    StackOverflow,

    #[error("stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("invalid register V{0:X}")]
    InvalidRegister(u8),

    #[error("invalid key {0:#04X}")]
    InvalidKey(u8),

    #[error("unable to read ROM")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
