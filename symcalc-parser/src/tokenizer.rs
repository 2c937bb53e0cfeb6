use logos::Logos;
use std::{fmt, ops::Range};

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("**")]
    Exp,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+")]
    Float,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        self == TokenKind::Whitespace
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Exp => "`**`",
            TokenKind::Add => "`+`",
            TokenKind::Sub => "`-`",
            TokenKind::Mul => "`*`",
            TokenKind::Div => "`/`",
            TokenKind::Comma => "`,`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Name => "a name",
            TokenKind::Int => "an integer",
            TokenKind::Float => "a decimal number",
            TokenKind::Symbol => "an unknown symbol",
        };
        f.write_str(text)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Characters the lexer cannot classify become [`TokenKind::Symbol`] tokens, so that the parser
/// can point at them.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = TokenKind::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize_complete(input)
            .iter()
            .map(|token| token.kind)
            .filter(|kind| !kind.is_whitespace())
            .collect()
    }

    #[test]
    fn power_is_one_token() {
        assert_eq!(kinds("x**2*y"), vec![
            TokenKind::Name,
            TokenKind::Exp,
            TokenKind::Int,
            TokenKind::Mul,
            TokenKind::Name,
        ]);
    }

    #[test]
    fn numbers() {
        assert_eq!(kinds("3 3. 3.25 .5"), vec![
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Float,
            TokenKind::Float,
        ]);
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(kinds("1e5 2.5E-3 .5e+2 2*E"), vec![
            TokenKind::Float,
            TokenKind::Float,
            TokenKind::Float,
            TokenKind::Int,
            TokenKind::Mul,
            TokenKind::Name,
        ]);
    }

    #[test]
    fn names_with_digits() {
        let tokens = tokenize_complete("x_1 + Ans");
        assert_eq!(tokens[0].lexeme, "x_1");
        assert_eq!(tokens[0].kind, TokenKind::Name);
        assert_eq!(tokens[4].lexeme, "Ans");
    }

    #[test]
    fn unknown_characters() {
        assert_eq!(kinds("2 ^ 3 = x"), vec![
            TokenKind::Int,
            TokenKind::Symbol,
            TokenKind::Int,
            TokenKind::Symbol,
            TokenKind::Name,
        ]);
    }
}
