use crate::constants::{FONT_START, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET};
use crate::error::{Chip8Error, Result};

/// # Memory
/// 4096 bytes of addressable memory.
///
/// ```text
/// 0x000..0x050  unused
/// 0x050..0x0A0  hex font sprites
/// 0x0A0..0x200  unused
/// 0x200..0x1000 program ROM and work RAM
/// ```
///
/// Every access is bounds checked; an address past the end of memory is an
/// `OutOfBounds` error rather than a panic.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the sprite sheet loaded at `FONT_START`
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let font = FONT_START as usize;
        bytes[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    pub fn read(&self, addr: usize) -> Result<u8> {
        self.bytes
            .get(addr)
            .copied()
            .ok_or(Chip8Error::OutOfBounds { addr })
    }

    pub fn write(&mut self, addr: usize, value: u8) -> Result<()> {
        let byte = self
            .bytes
            .get_mut(addr)
            .ok_or(Chip8Error::OutOfBounds { addr })?;
        *byte = value;
        Ok(())
    }

    /// Opcodes are 16 bits but memory is stored as bytes, so we combine two
    /// subsequent bytes (big-endian).
    pub fn read_word(&self, addr: usize) -> Result<u16> {
        let left = u16::from(self.read(addr)?);
        let right = u16::from(self.read(addr + 1)?);
        Ok(left << 8 | right)
    }

    /// `len` bytes starting at `addr`
    pub fn slice(&self, addr: usize, len: usize) -> Result<&[u8]> {
        self.bytes
            .get(addr..addr + len)
            .ok_or(Chip8Error::OutOfBounds {
                addr: (addr + len).saturating_sub(1),
            })
    }

    /// Copies `data` into memory starting at `addr`; nothing is written unless
    /// the whole range fits.
    pub fn write_slice(&mut self, addr: usize, data: &[u8]) -> Result<()> {
        let end = addr + data.len();
        self.bytes
            .get_mut(addr..end)
            .ok_or(Chip8Error::OutOfBounds {
                addr: end.saturating_sub(1),
            })?
            .copy_from_slice(data);
        Ok(())
    }

    /// Load a ROM at `PROGRAM_START`
    pub fn load_program(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        self.write_slice(PROGRAM_START as usize, rom)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_zeroed_except_font() {
        let memory = Memory::new();
        assert_eq!(memory.bytes[..0x50], [0; 0x50]);
        assert_eq!(memory.bytes[0x50..0xA0], SPRITE_SHEET);
        assert!(memory.bytes[0xA0..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_read_write() {
        let mut memory = Memory::new();
        memory.write(0xFFF, 0xAB).unwrap();
        assert_eq!(memory.read(0xFFF).unwrap(), 0xAB);
    }

    #[test]
    fn test_read_out_of_bounds() {
        let memory = Memory::new();
        assert!(matches!(
            memory.read(0x1000),
            Err(Chip8Error::OutOfBounds { addr: 0x1000 })
        ));
    }

    #[test]
    fn test_write_out_of_bounds() {
        let mut memory = Memory::new();
        assert!(matches!(
            memory.write(0x1000, 1),
            Err(Chip8Error::OutOfBounds { addr: 0x1000 })
        ));
    }

    #[test]
    fn test_read_word() {
        let mut memory = Memory::new();
        memory.write_slice(0x200, &[0xAA, 0xBB]).unwrap();
        assert_eq!(memory.read_word(0x200).unwrap(), 0xAABB);
    }

    #[test]
    fn test_read_word_straddling_end() {
        let memory = Memory::new();
        assert!(matches!(
            memory.read_word(0xFFF),
            Err(Chip8Error::OutOfBounds { addr: 0x1000 })
        ));
    }

    #[test]
    fn test_slice_past_end() {
        let memory = Memory::new();
        assert!(memory.slice(0xFFE, 2).is_ok());
        assert!(memory.slice(0xFFE, 3).is_err());
    }

    #[test]
    fn test_write_slice_past_end_writes_nothing() {
        let mut memory = Memory::new();
        assert!(memory.write_slice(0xFFE, &[1, 2, 3]).is_err());
        assert_eq!(memory.bytes[0xFFE..], [0, 0]);
    }

    #[test]
    fn test_load_program() {
        let mut memory = Memory::new();
        memory.load_program(&[0x00, 0xE0]).unwrap();
        assert_eq!(memory.slice(0x200, 3).unwrap(), &[0x00, 0xE0, 0x00]);
        assert_eq!(memory.bytes[0x50..0xA0], SPRITE_SHEET);
    }

    #[test]
    fn test_load_program_fills_memory() {
        let mut memory = Memory::new();
        let rom = [0xFF; MAX_ROM_SIZE];
        memory.load_program(&rom).unwrap();
        assert_eq!(memory.read(0xFFF).unwrap(), 0xFF);
    }

    #[test]
    fn test_load_program_too_large() {
        let mut memory = Memory::new();
        let rom = [0xFF; MAX_ROM_SIZE + 1];
        assert!(matches!(
            memory.load_program(&rom),
            Err(Chip8Error::RomTooLarge {
                size: 0xE01,
                max: 0xE00
            })
        ));
        assert_eq!(memory.read(0x200).unwrap(), 0);
    }
}
