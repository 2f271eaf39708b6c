use log::warn;

use crate::parser::{FunctionDeclaration, ReturnStatement, Stmt};

use super::Instruction;

/// Lowers a checked function into IR.
///
/// Only `main` is lowered; anything else yields an empty sequence, so run
/// [`crate::analyzer::check`] first.
pub fn lower(ast: &FunctionDeclaration) -> Vec<Instruction> {
    if ast.name != "main" {
        warn!("refusing to lower unchecked function `{}`", ast.name);
        return vec![];
    }

    let mut instructions = vec![];
    lower_stmt(&ast.body, &mut instructions);
    instructions
}

fn lower_stmt(stmt: &Stmt, out: &mut Vec<Instruction>) {
    match stmt {
        Stmt::Return(ReturnStatement { value }) => {
            out.push(Instruction::LoadConst(*value));
            out.push(Instruction::Return);
        }
    }
}
