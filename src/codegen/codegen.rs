use crate::ir::Instruction;

const RETURN_REGISTER: &str = "rax";

#[derive(Debug)]
pub struct Codegen {
    lines: Vec<String>,
}

impl Codegen {
    pub fn new() -> Self {
        Self { lines: vec![] }
    }

    pub fn generate(mut self, ir: &[Instruction]) -> Vec<String> {
        for instruction in ir {
            self.gen_instruction(instruction);
        }
        self.lines
    }

    fn gen_instruction(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::LoadConst(value) => {
                self.lines.push(format!("mov {}, {}", RETURN_REGISTER, value))
            }
            Instruction::Return => self.lines.push("ret".to_string()),
        }
    }
}

/// One assembly line per instruction, newline separated.
pub fn emit(ir: &[Instruction]) -> String {
    Codegen::new().generate(ir).join("\n")
}

/// Same lines as [`emit`], wrapped in the header and label an assembler
/// needs to produce a linkable `main`.
pub fn emit_program(ir: &[Instruction]) -> String {
    let mut out = String::new();
    out.push_str(".intel_syntax noprefix\n");
    out.push_str(".globl main\n");
    out.push_str("main:\n");
    for line in Codegen::new().generate(ir) {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
