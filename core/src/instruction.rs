use log::warn;

use crate::error::Result;
use crate::operations::*;
use crate::state::State;

/// A decoded opcode: which operation to run and its operands.
///
/// `x` and `y` name registers, `kk` is an immediate byte, `n` a sprite height
/// and `addr` a 12-bit address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Clear,
    /// 00EE
    Return,
    /// 0nnn, a call to a COSMAC VIP machine routine; ignored
    Sys(u16),
    /// 1nnn
    Jump(u16),
    /// 2nnn
    Call(u16),
    /// 3xkk
    SkipEqByte { x: u8, kk: u8 },
    /// 4xkk
    SkipNeByte { x: u8, kk: u8 },
    /// 5xy0
    SkipEqReg { x: u8, y: u8 },
    /// 6xkk
    LoadByte { x: u8, kk: u8 },
    /// 7xkk
    AddByte { x: u8, kk: u8 },
    /// 8xy0
    Move { x: u8, y: u8 },
    /// 8xy1
    Or { x: u8, y: u8 },
    /// 8xy2
    And { x: u8, y: u8 },
    /// 8xy3
    Xor { x: u8, y: u8 },
    /// 8xy4
    AddReg { x: u8, y: u8 },
    /// 8xy5
    Sub { x: u8, y: u8 },
    /// 8xy6
    ShiftRight { x: u8 },
    /// 8xy7
    SubNeg { x: u8, y: u8 },
    /// 8xyE
    ShiftLeft { x: u8 },
    /// 9xy0
    SkipNeReg { x: u8, y: u8 },
    /// Annn
    LoadI(u16),
    /// Bnnn
    JumpV0(u16),
    /// Cxkk
    Random { x: u8, kk: u8 },
    /// Dxyn
    Draw { x: u8, y: u8, n: u8 },
    /// Ex9E
    SkipKeyDown { x: u8 },
    /// ExA1
    SkipKeyUp { x: u8 },
    /// Fx07
    LoadDelay { x: u8 },
    /// Fx0A
    WaitKey { x: u8 },
    /// Fx15
    SetDelay { x: u8 },
    /// Fx18
    SetSound { x: u8 },
    /// Fx1E
    AddI { x: u8 },
    /// Fx29
    LoadFont { x: u8 },
    /// Fx33
    Bcd { x: u8 },
    /// Fx55
    Store { x: u8 },
    /// Fx65
    Read { x: u8 },
    /// Anything else; executes as a no-op
    Unknown(u16),
}

impl Instruction {
    /// Selects the Instruction for a 16-bit opcode.
    ///
    /// The high nibble picks a family; families 0x0, 0x8, 0xE and 0xF pick
    /// the exact instruction from the low nibble or the low byte. The other
    /// nibbles are operands: `_x__`, `__y_`, `___n`, `__kk` and `_nnn`.
    pub fn decode(op: u16) -> Self {
        let nibble = |shift: u16| ((op >> shift) & 0xF) as u8;
        let (x, y, n) = (nibble(8), nibble(4), nibble(0));
        let kk = (op & 0x00FF) as u8;
        let addr = op & 0x0FFF;
        match (nibble(12), x, y, n) {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Clear,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Return,
            (0x0, ..) => Instruction::Sys(addr),
            (0x1, ..) => Instruction::Jump(addr),
            (0x2, ..) => Instruction::Call(addr),
            (0x3, ..) => Instruction::SkipEqByte { x, kk },
            (0x4, ..) => Instruction::SkipNeByte { x, kk },
            (0x5, .., 0x0) => Instruction::SkipEqReg { x, y },
            (0x6, ..) => Instruction::LoadByte { x, kk },
            (0x7, ..) => Instruction::AddByte { x, kk },
            (0x8, .., 0x0) => Instruction::Move { x, y },
            (0x8, .., 0x1) => Instruction::Or { x, y },
            (0x8, .., 0x2) => Instruction::And { x, y },
            (0x8, .., 0x3) => Instruction::Xor { x, y },
            (0x8, .., 0x4) => Instruction::AddReg { x, y },
            (0x8, .., 0x5) => Instruction::Sub { x, y },
            (0x8, .., 0x6) => Instruction::ShiftRight { x },
            (0x8, .., 0x7) => Instruction::SubNeg { x, y },
            (0x8, .., 0xE) => Instruction::ShiftLeft { x },
            (0x9, .., 0x0) => Instruction::SkipNeReg { x, y },
            (0xA, ..) => Instruction::LoadI(addr),
            (0xB, ..) => Instruction::JumpV0(addr),
            (0xC, ..) => Instruction::Random { x, kk },
            (0xD, ..) => Instruction::Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => Instruction::SkipKeyDown { x },
            (0xE, _, 0xA, 0x1) => Instruction::SkipKeyUp { x },
            (0xF, _, 0x0, 0x7) => Instruction::LoadDelay { x },
            (0xF, _, 0x0, 0xA) => Instruction::WaitKey { x },
            (0xF, _, 0x1, 0x5) => Instruction::SetDelay { x },
            (0xF, _, 0x1, 0x8) => Instruction::SetSound { x },
            (0xF, _, 0x1, 0xE) => Instruction::AddI { x },
            (0xF, _, 0x2, 0x9) => Instruction::LoadFont { x },
            (0xF, _, 0x3, 0x3) => Instruction::Bcd { x },
            (0xF, _, 0x5, 0x5) => Instruction::Store { x },
            (0xF, _, 0x6, 0x5) => Instruction::Read { x },
            _ => Instruction::Unknown(op),
        }
    }

    /// Runs the instruction against `state`, whose program counter has
    /// already been moved past it.
    pub fn execute(self, state: &mut State) -> Result<()> {
        match self {
            Instruction::Clear => clr(state),
            Instruction::Return => rts(state),
            Instruction::Sys(_) => Ok(()),
            Instruction::Jump(addr) => jump(state, addr),
            Instruction::Call(addr) => call(state, addr),
            Instruction::SkipEqByte { x, kk } => ske(state, x, kk),
            Instruction::SkipNeByte { x, kk } => skne(state, x, kk),
            Instruction::SkipEqReg { x, y } => skre(state, x, y),
            Instruction::LoadByte { x, kk } => load(state, x, kk),
            Instruction::AddByte { x, kk } => add(state, x, kk),
            Instruction::Move { x, y } => mv(state, x, y),
            Instruction::Or { x, y } => or(state, x, y),
            Instruction::And { x, y } => and(state, x, y),
            Instruction::Xor { x, y } => xor(state, x, y),
            Instruction::AddReg { x, y } => addr(state, x, y),
            Instruction::Sub { x, y } => sub(state, x, y),
            Instruction::ShiftRight { x } => shr(state, x),
            Instruction::SubNeg { x, y } => subn(state, x, y),
            Instruction::ShiftLeft { x } => shl(state, x),
            Instruction::SkipNeReg { x, y } => skrne(state, x, y),
            Instruction::LoadI(addr) => loadi(state, addr),
            Instruction::JumpV0(addr) => jumpi(state, addr),
            Instruction::Random { x, kk } => rand(state, x, kk),
            Instruction::Draw { x, y, n } => draw(state, x, y, n),
            Instruction::SkipKeyDown { x } => skpr(state, x),
            Instruction::SkipKeyUp { x } => skup(state, x),
            Instruction::LoadDelay { x } => moved(state, x),
            Instruction::WaitKey { x } => keyd(state, x),
            Instruction::SetDelay { x } => loads(state, x),
            Instruction::SetSound { x } => ld(state, x),
            Instruction::AddI { x } => addi(state, x),
            Instruction::LoadFont { x } => ldspr(state, x),
            Instruction::Bcd { x } => bcd(state, x),
            Instruction::Store { x } => stor(state, x),
            Instruction::Read { x } => read(state, x),
            Instruction::Unknown(op) => {
                warn!("ignoring unknown opcode {:04X}", op);
                Ok(())
            }
        }
    }
}
