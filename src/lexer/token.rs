use std::fmt;

use phf::phf_map;

pub static KEYWORDS: phf::Map<&str, TokenKind> = phf_map! {
    "int" => TokenKind::Int,
    "return" => TokenKind::Return,
};

pub static ONE_SYMBOL_TOKENS: phf::Map<char, TokenKind> = phf_map! {
    '{' => TokenKind::OpenCurlyBrace,
    '}' => TokenKind::CloseCurlyBrace,
    '(' => TokenKind::OpenParen,
    ')' => TokenKind::CloseParen,
    ';' => TokenKind::SemiColon,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Int,
    Return,
    Num,
    Ident,
    OpenCurlyBrace,
    CloseCurlyBrace,
    OpenParen,
    CloseParen,
    SemiColon,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Int => "`int`",
            TokenKind::Return => "`return`",
            TokenKind::Num => "integer literal",
            TokenKind::Ident => "identifier",
            TokenKind::OpenCurlyBrace => "`{`",
            TokenKind::CloseCurlyBrace => "`}`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::SemiColon => "`;`",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact slice of the source this token was matched from.
    pub lexeme: String,
    /// Byte offset of the first byte of `lexeme`.
    pub offset: usize,
}
