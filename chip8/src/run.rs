use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use log::{error, info};

use emu8_core::constants::KEY_COUNT;
use emu8_core::{Chip8, CLOCK_SPEED};
use emu8_display::Display;

use crate::keymap::keymap;

/// Most terminals only report presses, so a key counts as held for this many
/// cycles after its last press (or auto-repeat).
const HOLD_CYCLES: u8 = 6;

/// What to run and how
#[derive(Debug, PartialEq)]
pub struct Options {
    pub rom: PathBuf,
    pub seed: Option<u64>,
    /// Nanoseconds per cycle
    pub cycle_time: u64,
}

impl Options {
    pub fn new(rom: PathBuf) -> Self {
        Options {
            rom,
            seed: None,
            cycle_time: CLOCK_SPEED,
        }
    }
}

/// Keeps the terminal in raw mode for as long as it lives
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

pub fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let mut chip8 = match options.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM
    let file = File::open(&options.rom)?;
    let mut reader = BufReader::new(file);
    chip8.load_rom_from(&mut reader)?;
    info!("loaded ROM {}", options.rom.display());

    let _raw_mode = RawMode::enable()?;
    let mut display = Display::new()?;
    display.render(chip8.frame_buffer())?;

    // Set initial timing
    let cycle_time = Duration::from_nanos(options.cycle_time);
    let mut last_cycle = Instant::now();

    // Cycles left before each key is considered released
    let mut held = [0u8; KEY_COUNT];
    let mut beeping = false;

    'event: loop {
        // If the draw flag is set, unset it and render the current frame
        if chip8.take_redraw() {
            display.render(chip8.frame_buffer())?;
        }

        // Handle input
        while event::poll(Duration::ZERO)? {
            let Event::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) = event::read()?
            else {
                continue;
            };
            match (code, keymap(code)) {
                (KeyCode::Esc, _) => break 'event,
                (KeyCode::Char('c'), _) if modifiers.contains(KeyModifiers::CONTROL) => {
                    break 'event
                }
                (_, Some(key)) if kind == KeyEventKind::Release => {
                    chip8.key_release(key)?;
                    held[key as usize] = 0;
                }
                (_, Some(key)) => {
                    chip8.key_press(key)?;
                    held[key as usize] = HOLD_CYCLES;
                }
                _ => continue,
            }
        }
        for (key, cycles) in held.iter_mut().enumerate() {
            if *cycles > 0 {
                *cycles -= 1;
                if *cycles == 0 {
                    chip8.key_release(key as u8)?;
                }
            }
        }

        // Update state
        if let Err(e) = chip8.step() {
            error!("halting at pc {:04X}: {}", chip8.registers().pc, e);
            return Err(e.into());
        }

        // Beep once each time the sound timer starts running
        if chip8.sound_active() && !beeping {
            display.beep()?;
        }
        beeping = chip8.sound_active();

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!("quit");
    Ok(())
}
