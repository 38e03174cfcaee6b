use crate::constants::{PROGRAM_START, REGISTER_COUNT};
use crate::error::{Chip8Error, Result};

/// The VF register doubles as the carry, borrow and collision flag
pub const VF: u8 = 0xF;

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is overwritten by arithmetic and draw instructions
/// - (i) a 16-bit memory address register
/// - (pc) a 16-bit program counter
#[derive(Clone, Debug, PartialEq)]
pub struct Registers {
    v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
        }
    }

    pub fn get(&self, x: u8) -> Result<u8> {
        self.v
            .get(x as usize)
            .copied()
            .ok_or(Chip8Error::InvalidRegister(x))
    }

    pub fn set(&mut self, x: u8, value: u8) -> Result<()> {
        let register = self
            .v
            .get_mut(x as usize)
            .ok_or(Chip8Error::InvalidRegister(x))?;
        *register = value;
        Ok(())
    }

    /// V0..=Vx
    pub fn get_range(&self, x: u8) -> Result<&[u8]> {
        self.v
            .get(..=x as usize)
            .ok_or(Chip8Error::InvalidRegister(x))
    }

    /// Fills V0.. with `values`
    pub fn set_range(&mut self, values: &[u8]) -> Result<()> {
        let len = values.len();
        self.v
            .get_mut(..len)
            .ok_or(Chip8Error::InvalidRegister(len.saturating_sub(1) as u8))?
            .copy_from_slice(values);
        Ok(())
    }

    /// All of V0..VF, for tracing and inspection
    pub fn v(&self) -> &[u8; REGISTER_COUNT] {
        &self.v
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_program() {
        let registers = Registers::new();
        assert_eq!(registers.pc, 0x200);
        assert_eq!(registers.i, 0);
        assert_eq!(registers.v, [0; 16]);
    }

    #[test]
    fn test_get_set() {
        let mut registers = Registers::new();
        registers.set(VF, 0x1).unwrap();
        assert_eq!(registers.get(VF).unwrap(), 0x1);
    }

    #[test]
    fn test_invalid_register() {
        let mut registers = Registers::new();
        assert!(matches!(
            registers.get(0x10),
            Err(Chip8Error::InvalidRegister(0x10))
        ));
        assert!(matches!(
            registers.set(0x10, 1),
            Err(Chip8Error::InvalidRegister(0x10))
        ));
    }

    #[test]
    fn test_ranges() {
        let mut registers = Registers::new();
        registers.set_range(&[1, 2, 3]).unwrap();
        assert_eq!(registers.get_range(0x2).unwrap(), &[1, 2, 3]);
        assert_eq!(registers.get_range(0xF).unwrap().len(), 16);
        assert!(registers.get_range(0x10).is_err());
        assert!(registers.set_range(&[0; 17]).is_err());
    }
}
