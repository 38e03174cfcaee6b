use std::io::Read;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::frame_buffer::FrameBuffer;
use crate::instruction::Instruction;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::state::State;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the whole machine `state`; separate instances share nothing.
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the machine by a single cycle
/// - inspecting its frame buffer and sound timer so a host can render and beep
///
/// The caller drives the cadence by calling `step` as often as it likes.
pub struct Chip8 {
    state: State,
}

impl Chip8 {
    /// A fresh machine whose random numbers are seeded from the OS
    pub fn new() -> Self {
        Chip8 {
            state: State::new(StdRng::from_entropy()),
        }
    }

    /// A fresh machine whose random numbers are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Chip8 {
            state: State::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Load a rom into memory at 0x200
    ///
    /// # Arguments
    /// * `rom` the raw program, no header
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        self.state.memory.load_program(rom)?;
        debug!("loaded {} byte ROM", rom.len());
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a file reader that contains a ROM
    pub fn load_rom_from(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load_rom(&rom)
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the hex key that was pressed, 0x0..=0xF
    pub fn key_press(&mut self, key: u8) -> Result<()> {
        self.state.keypad.set_key_down(key)
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the hex key that was released, 0x0..=0xF
    pub fn key_release(&mut self, key: u8) -> Result<()> {
        self.state.keypad.set_key_up(key)
    }

    /// Advances the machine by a single cycle
    /// - if waiting on a key, either takes the latched key or does nothing
    /// - otherwise gets, decodes and executes the next opcode
    /// - ticks both timers once an instruction has completed
    pub fn step(&mut self) -> Result<()> {
        if let Some(x) = self.state.waiting_for_key {
            return self.resume_with_key(x);
        }

        let pc = self.state.registers.pc;
        let op = self.state.memory.read_word(pc as usize)?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.registers.v(),
            self.state.registers.i,
            pc
        );
        self.state.registers.pc = pc.wrapping_add(2);
        Instruction::decode(op).execute(&mut self.state)?;

        if self.state.waiting_for_key.is_some() {
            // Hold on the Fx0A until a key arrives
            self.state.registers.pc = pc;
            return Ok(());
        }

        self.state.tick_timers();
        Ok(())
    }

    /// Finishes a pending `Fx0A` if a key has been latched since
    fn resume_with_key(&mut self, x: u8) -> Result<()> {
        let Some(key) = self.state.keypad.latched() else {
            return Ok(());
        };
        debug!("key {:X} pressed for V{:X}", key, x);
        self.state.registers.set(x, key)?;
        self.state.keypad.clear_latch();
        self.state.waiting_for_key = None;
        self.state.skip();
        self.state.tick_timers();
        Ok(())
    }

    /// Whether execution is suspended on a `Fx0A`
    pub fn is_waiting_for_key(&self) -> bool {
        self.state.waiting_for_key.is_some()
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Checks and clears the redraw flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.state.draw_flag)
    }

    /// Whether the host should be making a sound
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer.is_active()
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer.get()
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer.get()
    }

    pub fn registers(&self) -> &Registers {
        &self.state.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    /// Current depth of the call stack
    pub fn stack_depth(&self) -> usize {
        self.state.stack.depth()
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
