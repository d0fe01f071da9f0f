use logos::Logos;
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Default, Clone, PartialEq, Eq, Debug)]
pub enum LexErrorKind {
    #[default]
    #[error("unknown character")]
    UnknownCharacter,
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[error("error tokenising lexeme '{lexeme}' at offset {offset}")]
pub struct LexError {
    lexeme: String,
    offset: usize,
    source: LexErrorKind,
}

#[derive(Logos, Hash, PartialEq, Eq, Clone, Copy, Debug)]
#[logos(error = LexErrorKind)]
#[logos(skip r"([ \t\r\n\f]+|#[^\n]*)")]
pub enum Token<'source> {
    #[token("interface")]
    Interface,
    #[token("impl")]
    Impl,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("<")]
    LeftAngle,
    #[token(">")]
    RightAngle,
    #[token(",")]
    Comma,
    #[regex(r"\||∪")]
    Union,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'source str),
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interface => "interface".fmt(f),
            Self::Impl => "impl".fmt(f),
            Self::LeftParen => "(".fmt(f),
            Self::RightParen => ")".fmt(f),
            Self::LeftAngle => "<".fmt(f),
            Self::RightAngle => ">".fmt(f),
            Self::Comma => ",".fmt(f),
            Self::Union => "|".fmt(f),
            Self::Ident(x) => x.fmt(f),
        }
    }
}

pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        tokens.push(token.map_err(|source| LexError {
            lexeme: lexer.slice().to_owned(),
            offset: lexer.span().start,
            source,
        })?);
    }
    Ok(tokens)
}
