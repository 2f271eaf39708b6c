mod ir_gen;

use std::fmt;

pub use ir_gen::*;

/// Architecture-neutral instruction. Operands are values, never registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    LoadConst(i64),
    Return,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::LoadConst(val) => write!(f, "LOAD_CONST {}", val),
            Instruction::Return => write!(f, "RETURN"),
        }
    }
}
