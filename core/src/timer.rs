/// A countdown byte that stops at 0.
///
/// The Chip-8 has two: the delay timer, which programs read back for timing,
/// and the sound timer, which beeps for as long as it is above 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timer(u8);

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, value: u8) {
        self.0 = value;
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn tick(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.0 > 0
    }
}
