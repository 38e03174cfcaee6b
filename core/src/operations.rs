use log::debug;
use rand::Rng;

use crate::constants::{FONT_GLYPH_SIZE, FONT_START};
use crate::error::Result;
use crate::registers::VF;
use crate::state::State;

// By the time any of these run the program counter already points at the next
// instruction, so a skip is one more += 2.

/// clear
pub fn clr(state: &mut State) -> Result<()> {
    state.frame_buffer.clear();
    state.draw_flag = true;
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(state: &mut State) -> Result<()> {
    state.registers.pc = state.stack.pop()?;
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) -> Result<()> {
    state.registers.pc = addr;
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<()> {
    state.stack.push(state.registers.pc)?;
    state.registers.pc = addr;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: u8, kk: u8) -> Result<()> {
    if state.registers.get(x)? == kk {
        state.skip();
    }
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: u8, kk: u8) -> Result<()> {
    if state.registers.get(x)? != kk {
        state.skip();
    }
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) -> Result<()> {
    if state.registers.get(x)? == state.registers.get(y)? {
        state.skip();
    }
    Ok(())
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) -> Result<()> {
    state.registers.set(x, kk)
}

/// Vx += kk
/// Overflow is dropped and VF is left alone
pub fn add(state: &mut State, x: u8, kk: u8) -> Result<()> {
    let res = state.registers.get(x)?.wrapping_add(kk);
    state.registers.set(x, res)
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) -> Result<()> {
    let vy = state.registers.get(y)?;
    state.registers.set(x, vy)
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) -> Result<()> {
    let res = state.registers.get(x)? | state.registers.get(y)?;
    state.registers.set(x, res)
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) -> Result<()> {
    let res = state.registers.get(x)? & state.registers.get(y)?;
    state.registers.set(x, res)
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) -> Result<()> {
    let res = state.registers.get(x)? ^ state.registers.get(y)?;
    state.registers.set(x, res)
}

/// Writes the flag before the result so that a result destined for VF wins
fn set_with_flag(state: &mut State, x: u8, res: u8, flag: bool) -> Result<()> {
    state.registers.set(VF, u8::from(flag))?;
    state.registers.set(x, res)
}

/// Vx += Vy; VF = overflow
pub fn addr(state: &mut State, x: u8, y: u8) -> Result<()> {
    let (res, over) = state.registers.get(x)?.overflowing_add(state.registers.get(y)?);
    set_with_flag(state, x, res, over)
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(state: &mut State, x: u8, y: u8) -> Result<()> {
    let (vx, vy) = (state.registers.get(x)?, state.registers.get(y)?);
    set_with_flag(state, x, vx.wrapping_sub(vy), vx > vy)
}

/// Vx >>= 1; VF = lsb
pub fn shr(state: &mut State, x: u8) -> Result<()> {
    let vx = state.registers.get(x)?;
    set_with_flag(state, x, vx >> 1, vx & 0x1 == 0x1)
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(state: &mut State, x: u8, y: u8) -> Result<()> {
    let (vx, vy) = (state.registers.get(x)?, state.registers.get(y)?);
    set_with_flag(state, x, vy.wrapping_sub(vx), vy > vx)
}

/// Vx <<= 1; VF = msb
pub fn shl(state: &mut State, x: u8) -> Result<()> {
    let vx = state.registers.get(x)?;
    set_with_flag(state, x, vx << 1, vx >> 7 == 0x1)
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: u8, y: u8) -> Result<()> {
    if state.registers.get(x)? != state.registers.get(y)? {
        state.skip();
    }
    Ok(())
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) -> Result<()> {
    state.registers.i = addr;
    Ok(())
}

/// PC = V0 + addr
pub fn jumpi(state: &mut State, addr: u16) -> Result<()> {
    state.registers.pc = addr + u16::from(state.registers.get(0x0)?);
    Ok(())
}

/// Vx = rand_byte & kk
pub fn rand(state: &mut State, x: u8, kk: u8) -> Result<()> {
    let rand_byte: u8 = state.rng.gen();
    state.registers.set(x, rand_byte & kk)
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the n byte sprite at memory I onto the FrameBuffer at Vx, Vy.
/// Sets VF if any pixels were erased
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Result<()> {
    let vx = state.registers.get(x)?;
    let vy = state.registers.get(y)?;
    let sprite = state.memory.slice(state.registers.i as usize, n as usize)?;
    let collided = state
        .frame_buffer
        .draw_sprite(vx as usize, vy as usize, sprite);
    state.registers.set(VF, u8::from(collided))?;
    state.draw_flag = true;
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, x: u8) -> Result<()> {
    if state.keypad.is_down(state.registers.get(x)?)? {
        state.skip();
    }
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, x: u8) -> Result<()> {
    if !state.keypad.is_down(state.registers.get(x)?)? {
        state.skip();
    }
    Ok(())
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) -> Result<()> {
    state.registers.set(x, state.delay_timer.get())
}

/// Vx = latched key, or wait for one
pub fn keyd(state: &mut State, x: u8) -> Result<()> {
    match state.keypad.latched() {
        Some(key) => {
            state.registers.set(x, key)?;
            state.keypad.clear_latch();
        }
        None => {
            debug!("waiting for a key press for V{:X}", x);
            state.waiting_for_key = Some(x);
        }
    }
    Ok(())
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) -> Result<()> {
    state.delay_timer.set(state.registers.get(x)?);
    Ok(())
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) -> Result<()> {
    state.sound_timer.set(state.registers.get(x)?);
    Ok(())
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) -> Result<()> {
    state.registers.i = state
        .registers
        .i
        .wrapping_add(u16::from(state.registers.get(x)?));
    Ok(())
}

/// I = FONT_START + Vx * 5
/// Set I to the memory address of the sprite for the digit in Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(state: &mut State, x: u8) -> Result<()> {
    state.registers.i = FONT_START + u16::from(state.registers.get(x)?) * FONT_GLYPH_SIZE;
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Store the hundreds, tens and ones of Vx in memory starting at address I
pub fn bcd(state: &mut State, x: u8) -> Result<()> {
    let vx = state.registers.get(x)?;
    let bcd = [vx / 100 % 10, vx / 10 % 10, vx % 10];
    state
        .memory
        .write_slice(state.registers.i as usize, &bcd)
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &mut State, x: u8) -> Result<()> {
    let values = state.registers.get_range(x)?;
    state
        .memory
        .write_slice(state.registers.i as usize, values)
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &mut State, x: u8) -> Result<()> {
    let values = state
        .memory
        .slice(state.registers.i as usize, x as usize + 1)?;
    state.registers.set_range(values)
}
