use thiserror::Error;

use crate::{
    analyzer::SemanticError,
    lexer::LexicalError,
    parser::{OverflowError, ParseError, SyntaxError},
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("lexical error: {0}")]
    Lexical(#[from] LexicalError),
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("overflow error: {0}")]
    Overflow(#[from] OverflowError),
    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),
}

impl From<ParseError> for CompileError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Syntax(e) => Self::Syntax(e),
            ParseError::Overflow(e) => Self::Overflow(e),
        }
    }
}

impl CompileError {
    /// Byte offset into the source the error points at, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            CompileError::Lexical(LexicalError { offset, .. })
            | CompileError::Overflow(OverflowError { offset, .. })
            | CompileError::Syntax(SyntaxError::UnexpectedToken { offset, .. })
            | CompileError::Syntax(SyntaxError::UnexpectedEof { offset, .. })
            | CompileError::Syntax(SyntaxError::TrailingToken { offset, .. }) => Some(*offset),
            CompileError::Semantic(_) => None,
        }
    }
}
