use crate::constants::STACK_SIZE;
use crate::error::{Chip8Error, Result};

/// # Stack
/// Return addresses for up to 16 nested subroutine calls.
///
/// `sp` counts the addresses currently held; slot `sp` is the top.
/// A push bumps `sp` and then stores, a pop reads and then drops `sp`, so
/// slot 0 is never used.
#[derive(Clone, Debug, PartialEq)]
pub struct Stack {
    slots: [u16; STACK_SIZE + 1],
    sp: usize,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            slots: [0; STACK_SIZE + 1],
            sp: 0,
        }
    }

    pub fn push(&mut self, addr: u16) -> Result<()> {
        if self.sp == STACK_SIZE {
            return Err(Chip8Error::StackOverflow);
        }
        self.sp += 1;
        self.slots[self.sp] = addr;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow);
        }
        let addr = self.slots[self.sp];
        self.sp -= 1;
        Ok(addr)
    }

    /// The stack pointer
    pub fn depth(&self) -> usize {
        self.sp
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
