use rand::rngs::StdRng;

use crate::frame_buffer::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::stack::Stack;
use crate::timer::Timer;

/// Everything a running Chip-8 owns.
///
/// ## CPU
/// - `registers` V0..VF, I and the program counter
/// - `stack` return addresses for nested subroutine calls
/// - `delay_timer` and `sound_timer`, each ticked once per executed cycle
/// - `rng` the source for `Cxkk`, seeded once when the state is created
///
/// ## Memory
/// - 4096 bytes of addressable `memory`
/// - 64x32 `frame_buffer` holding the next frame to be drawn
///
/// ## Input
/// - `keypad` which keys are held and the most recent press
/// - `waiting_for_key` the register a `Fx0A` is waiting to fill, if any;
///   while set, execution is suspended on that instruction
///
/// ## Output
/// - `draw_flag` set whenever the frame buffer changes
#[derive(Clone)]
pub struct State {
    pub memory: Memory,
    pub registers: Registers,
    pub stack: Stack,
    pub frame_buffer: FrameBuffer,
    pub keypad: Keypad,
    pub delay_timer: Timer,
    pub sound_timer: Timer,
    pub rng: StdRng,
    pub waiting_for_key: Option<u8>,
    pub draw_flag: bool,
}

impl State {
    pub fn new(rng: StdRng) -> Self {
        State {
            memory: Memory::new(),
            registers: Registers::new(),
            stack: Stack::new(),
            frame_buffer: FrameBuffer::new(),
            keypad: Keypad::new(),
            delay_timer: Timer::new(),
            sound_timer: Timer::new(),
            rng,
            waiting_for_key: None,
            draw_flag: false,
        }
    }

    /// Moves past the next instruction
    pub fn skip(&mut self) {
        self.registers.pc = self.registers.pc.wrapping_add(2);
    }

    /// Decrements both timers
    pub fn tick_timers(&mut self) {
        self.delay_timer.tick();
        self.sound_timer.tick();
    }
}
