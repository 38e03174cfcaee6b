use crate::constants::KEY_COUNT;
use crate::error::{Chip8Error, Result};

/// # Keypad
/// Chip-8 input is generated with a 16 key hexadecimal keypad.
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
/// Tracks which keys are held plus a latch of the most recent press, which is
/// what a `Fx0A` key wait consumes. The latch only holds the latest press and
/// is dropped as soon as that key is released.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keypad {
    pressed: [bool; KEY_COUNT],
    latched: Option<u8>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key_down(&mut self, key: u8) -> Result<()> {
        *self.flag(key)? = true;
        self.latched = Some(key);
        Ok(())
    }

    pub fn set_key_up(&mut self, key: u8) -> Result<()> {
        *self.flag(key)? = false;
        if self.latched == Some(key) {
            self.latched = None;
        }
        Ok(())
    }

    pub fn is_down(&self, key: u8) -> Result<bool> {
        self.pressed
            .get(key as usize)
            .copied()
            .ok_or(Chip8Error::InvalidKey(key))
    }

    /// The most recently pressed key if it's still held; doesn't clear it
    pub fn latched(&self) -> Option<u8> {
        self.latched
    }

    pub fn clear_latch(&mut self) {
        self.latched = None;
    }

    fn flag(&mut self, key: u8) -> Result<&mut bool> {
        self.pressed
            .get_mut(key as usize)
            .ok_or(Chip8Error::InvalidKey(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.set_key_down(0xE).unwrap();
        assert!(keypad.is_down(0xE).unwrap());
        assert_eq!(keypad.latched(), Some(0xE));
        keypad.set_key_up(0xE).unwrap();
        assert!(!keypad.is_down(0xE).unwrap());
        assert_eq!(keypad.latched(), None);
    }

    #[test]
    fn test_latest_press_wins() {
        let mut keypad = Keypad::new();
        keypad.set_key_down(0x1).unwrap();
        keypad.set_key_down(0x2).unwrap();
        assert_eq!(keypad.latched(), Some(0x2));
    }

    #[test]
    fn test_releasing_older_key_keeps_latch() {
        let mut keypad = Keypad::new();
        keypad.set_key_down(0x1).unwrap();
        keypad.set_key_down(0x2).unwrap();
        keypad.set_key_up(0x1).unwrap();
        assert_eq!(keypad.latched(), Some(0x2));
    }

    #[test]
    fn test_releasing_latest_key_doesnt_resurrect_older() {
        let mut keypad = Keypad::new();
        keypad.set_key_down(0x1).unwrap();
        keypad.set_key_down(0x2).unwrap();
        keypad.set_key_up(0x2).unwrap();
        assert_eq!(keypad.latched(), None);
        assert!(keypad.is_down(0x1).unwrap());
    }

    #[test]
    fn test_latch_isnt_consumed_by_reading() {
        let mut keypad = Keypad::new();
        keypad.set_key_down(0x0).unwrap();
        assert_eq!(keypad.latched(), Some(0x0));
        assert_eq!(keypad.latched(), Some(0x0));
        keypad.clear_latch();
        assert_eq!(keypad.latched(), None);
        assert!(keypad.is_down(0x0).unwrap());
    }

    #[test]
    fn test_invalid_key() {
        let mut keypad = Keypad::new();
        assert!(matches!(
            keypad.set_key_down(0x10),
            Err(Chip8Error::InvalidKey(0x10))
        ));
        assert!(matches!(
            keypad.set_key_up(0x10),
            Err(Chip8Error::InvalidKey(0x10))
        ));
        assert!(matches!(
            keypad.is_down(0xFF),
            Err(Chip8Error::InvalidKey(0xFF))
        ));
        assert_eq!(keypad.latched(), None);
    }
}
