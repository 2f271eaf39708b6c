pub mod analyzer;
pub mod codegen;
pub mod error;
pub mod ir;
pub mod lexer;
pub mod parser;

use log::debug;

pub use error::CompileError;

use lexer::Lexer;

/// Runs every stage on `user_input` and returns an assemblable unit.
pub fn compile(user_input: &str) -> Result<String, CompileError> {
    let tokens = Lexer::tokenize(user_input)?;
    debug!("tokens: {:?}", tokens);

    let func = parser::parse(tokens)?;
    debug!("ast: {:?}", func);

    analyzer::check(&func)?;
    debug!("semantic check passed");

    let ir = ir::lower(&func);
    debug!("ir: {:?}", ir);

    Ok(codegen::emit_program(&ir))
}
