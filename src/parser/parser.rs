use log::trace;
use thiserror::Error;

use crate::lexer::{Token, TokenKind};

use super::{FunctionDeclaration, ReturnStatement, Stmt};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("expected {expected}, found {found} at offset {offset}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        offset: usize,
    },
    /// `offset` is the end of the last token, or 0 for empty input.
    #[error("expected {expected}, found end of input at offset {offset}")]
    UnexpectedEof { expected: TokenKind, offset: usize },
    #[error("expected end of input, found {found} at offset {offset}")]
    TrailingToken { found: TokenKind, offset: usize },
}

/// Integer literal that does not fit in the 64-bit return register.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("integer literal `{lexeme}` at offset {offset} does not fit in 64 bits")]
pub struct OverflowError {
    pub lexeme: String,
    pub offset: usize,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Overflow(#[from] OverflowError),
}

#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn parse(&mut self) -> Result<FunctionDeclaration, ParseError> {
        let func = self.parse_func()?;

        if let Some(t) = self.tokens.get(self.index) {
            return Err(SyntaxError::TrailingToken {
                found: t.kind,
                offset: t.offset,
            }
            .into());
        }

        Ok(func)
    }

    fn end_offset(&self) -> usize {
        self.tokens
            .last()
            .map_or(0, |t| t.offset + t.lexeme.len())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&Token, SyntaxError> {
        let Some(t) = self.tokens.get(self.index) else {
            return Err(SyntaxError::UnexpectedEof {
                expected: kind,
                offset: self.end_offset(),
            });
        };
        if t.kind != kind {
            return Err(SyntaxError::UnexpectedToken {
                expected: kind,
                found: t.kind,
                offset: t.offset,
            });
        }
        trace!("consumed {:?} at index {}", t.kind, self.index);
        self.index += 1;
        Ok(t)
    }

    /// func = "int" ident "(" ")" "{" stmt "}"
    fn parse_func(&mut self) -> Result<FunctionDeclaration, ParseError> {
        self.expect(TokenKind::Int)?;
        let name = self.expect(TokenKind::Ident)?.lexeme.clone();
        self.expect(TokenKind::OpenParen)?;
        self.expect(TokenKind::CloseParen)?;

        self.expect(TokenKind::OpenCurlyBrace)?;
        let body = self.parse_stmt()?;
        self.expect(TokenKind::CloseCurlyBrace)?;

        Ok(FunctionDeclaration { name, body })
    }

    /// stmt = "return" num ";"
    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        Ok(Stmt::Return(self.parse_return_stmt()?))
    }

    fn parse_return_stmt(&mut self) -> Result<ReturnStatement, ParseError> {
        self.expect(TokenKind::Return)?;
        let num = self.expect(TokenKind::Num)?;
        let value = num.lexeme.parse().map_err(|_| OverflowError {
            lexeme: num.lexeme.clone(),
            offset: num.offset,
        })?;
        self.expect(TokenKind::SemiColon)?;

        Ok(ReturnStatement { value })
    }
}

/// Parses the single function definition a program consists of.
pub fn parse(tokens: Vec<Token>) -> Result<FunctionDeclaration, ParseError> {
    Parser::new(tokens).parse()
}
