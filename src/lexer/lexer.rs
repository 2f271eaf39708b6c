use log::trace;
use thiserror::Error;

use super::{
    token::{KEYWORDS, ONE_SYMBOL_TOKENS},
    Token, TokenKind,
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unexpected character {ch:?} at offset {offset}")]
pub struct LexicalError {
    pub ch: char,
    pub offset: usize,
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    index: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: vec![],
            index: 0,
        }
    }

    fn new_token(&mut self, kind: TokenKind, s: &str) {
        trace!("{:?} {:?} at {}", kind, s, self.index);
        self.tokens.push(Token {
            kind,
            lexeme: s.to_string(),
            offset: self.index,
        });
        self.index += s.len();
    }

    /// Length in bytes of the run at the cursor whose chars satisfy `pred`.
    fn run_len(&self, pred: impl Fn(char) -> bool) -> usize {
        self.source[self.index..]
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map(|(i, _)| i)
            .unwrap_or(self.source.len() - self.index)
    }

    fn parse_number(&mut self, first: char) -> Result<(), LexicalError> {
        let len = self.run_len(|c| c.is_ascii_digit());
        let end = self.index + len;

        // `42abc` is neither a number nor an identifier.
        if self.source[end..].starts_with(is_ident_continue) {
            return Err(LexicalError {
                ch: first,
                offset: self.index,
            });
        }

        let source = self.source;
        self.new_token(TokenKind::Num, &source[self.index..end]);
        Ok(())
    }

    fn parse_identifier(&mut self) {
        let len = self.run_len(is_ident_continue);
        let source = self.source;
        let s = &source[self.index..self.index + len];

        if let Some(kind) = KEYWORDS.get(s) {
            self.new_token(*kind, s);
        } else {
            self.new_token(TokenKind::Ident, s);
        }
    }

    fn _tokenize(&mut self) -> Result<(), LexicalError> {
        while let Some(c) = self.source[self.index..].chars().next() {
            if c.is_whitespace() {
                self.index += c.len_utf8();
            } else if c.is_ascii_digit() {
                self.parse_number(c)?;
            } else if c.is_ascii_alphabetic() || c == '_' {
                self.parse_identifier();
            } else if let Some(kind) = ONE_SYMBOL_TOKENS.get(&c) {
                self.new_token(*kind, &c.to_string());
            } else {
                return Err(LexicalError {
                    ch: c,
                    offset: self.index,
                });
            }
        }

        Ok(())
    }

    /// Splits `source` into tokens, dropping whitespace.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
        let mut lexer = Lexer::new(source);
        lexer._tokenize()?;

        Ok(lexer.tokens)
    }
}
