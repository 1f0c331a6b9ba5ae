use std::fmt;
use std::ops::Range;

use smol_str::SmolStr;

use crate::span::{Position, Spanned};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text. Empty for `Newline` and `EndOfFile`.
    pub text: SmolStr,
    pub pos: Position,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<SmolStr>,
        pos: Position,
        span: Range<usize>,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
            span,
        }
    }

    pub const fn line(&self) -> usize {
        self.pos.line
    }

    pub const fn column(&self) -> usize {
        self.pos.column
    }
}

impl Spanned for Token {
    fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// `[<line>:<column> <kind> <quoted-text>]`
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {:?}]", self.pos, self.kind, self.text.as_str())
    }
}

/// ```text
/// NUMBER      -> DIGIT+ ;
/// IDENTIFIER  -> ALPHA ( ALPHA | DIGIT | "_" )* ;
/// ALPHA       -> "a" ... "z" | "A" ... "Z" ;
/// DIGIT       -> "0" ... "9" ;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Equal,
    /// line break, carries no text
    Newline,
    /// identifier
    Identifier,
    /// integer literal
    Number,
    /// End of file, only emitted on request
    EndOfFile,
}

impl TokenKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Star => "Star",
            Self::Slash => "Slash",
            Self::LParen => "LParen",
            Self::RParen => "RParen",
            Self::Equal => "Equal",
            Self::Newline => "Newline",
            Self::Identifier => "Identifier",
            Self::Number => "Number",
            Self::EndOfFile => "EndOfFile",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let tok = Token::new(TokenKind::Number, "10", Position::new(1, 5), 4..6);
        assert_eq!(tok.to_string(), r#"[1:5 Number "10"]"#);

        let nl = Token::new(TokenKind::Newline, "", Position::new(2, 7), 9..9);
        assert_eq!(nl.to_string(), r#"[2:7 Newline ""]"#);
    }
}
