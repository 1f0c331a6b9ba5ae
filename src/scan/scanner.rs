use std::iter::{FusedIterator, Peekable};
use std::ops::Range;
use std::str::CharIndices;

use thiserror::Error;
use tracing::{debug, trace};

use super::token::{Token, TokenKind};
use crate::span::{Position, Spanned};

/// How the scanner advances its column counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColumnMode {
    /// Every character, whitespace included, occupies one column.
    #[default]
    Exact,
    /// Only token text advances the column; spaces and tabs do not.
    /// Matches the positions reported by the older tokenizer.
    TokenOnly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    pub columns: ColumnMode,
    /// Append an `EndOfFile` token after the last token of a successful scan.
    pub emit_eof: bool,
}

impl ScanOptions {
    pub fn columns(mut self, columns: ColumnMode) -> Self {
        self.columns = columns;
        self
    }

    pub fn emit_eof(mut self, emit_eof: bool) -> Self {
        self.emit_eof = emit_eof;
        self
    }
}

/// Single-pass tokenizer over one source buffer.
///
/// As an iterator it yields tokens lazily and stops for good after the first
/// error. [`Scanner::scan`] drives it to completion.
#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    options: ScanOptions,
    cursor: Range<usize>,
    line: usize,
    column: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    pub fn with_options(source: &'a str, options: ScanOptions) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            options,
            cursor: 0..0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    pub fn scan(mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = vec![];

        for item in self.by_ref() {
            match item {
                Ok(token) => tokens.push(token),
                Err(error) => return Err(ScanError { error, tokens }),
            }
        }

        debug!(tokens = tokens.len(), "scan finished");

        Ok(tokens)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.scan_token() {
            Some(Ok(token)) => {
                trace!(%token, "token");
                Some(Ok(token))
            }
            Some(Err(e)) => {
                debug!(error = %e, "scan aborted");
                self.finished = true;
                Some(Err(e))
            }
            None => {
                self.finished = true;
                self.options.emit_eof.then(|| Ok(self.eof()))
            }
        }
    }
}

impl FusedIterator for Scanner<'_> {}

impl Scanner<'_> {
    const fn here(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn scan_token(&mut self) -> Option<Result<Token, LexError>> {
        if let Some(newline) = self.skip_whitespace() {
            return Some(Ok(newline));
        }

        self.cursor.start = self.cursor.end;
        let c = self.advance()?;

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '=' => TokenKind::Equal,
            c if c.is_ascii_alphabetic() => {
                while self.expect_pred(|c| c.is_ascii_alphanumeric() || c == '_') {}
                TokenKind::Identifier
            }
            c if c.is_ascii_digit() => {
                while self.expect_pred(|c| c.is_ascii_digit()) {}
                TokenKind::Number
            }
            ch => {
                return Some(Err(LexError {
                    pos: self.here(),
                    span: self.cursor.clone(),
                    ch,
                }));
            }
        };

        Some(Ok(self.add_token(kind)))
    }

    /// Skips spaces and tabs. A line break ends the run and comes back as an
    /// empty `Newline` token positioned on the `\n` itself.
    fn skip_whitespace(&mut self) -> Option<Token> {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' => {
                    let _ = self.advance();
                    if self.options.columns == ColumnMode::Exact {
                        self.column += 1;
                    }
                }
                '\n' => {
                    let pos = self.here();
                    let _ = self.advance();
                    let end = self.cursor.end;

                    self.line += 1;
                    self.column = 1;

                    return Some(Token::new(TokenKind::Newline, "", pos, end..end));
                }
                _ => break,
            }
        }

        None
    }

    fn add_token(&mut self, kind: TokenKind) -> Token {
        let text = &self.source[self.cursor.clone()];
        let token = Token::new(kind, text, self.here(), self.cursor.clone());
        self.column += text.chars().count();
        token
    }

    fn eof(&self) -> Token {
        let len = self.source.len();
        Token::new(TokenKind::EndOfFile, "", self.here(), len..len)
    }

    fn advance(&mut self) -> Option<char> {
        let (i, c) = self.chars.next()?;
        self.cursor.end = i + c.len_utf8();
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn expect_pred<F>(&mut self, pred: F) -> bool
    where
        F: FnOnce(char) -> bool,
    {
        if self.peek().is_some_and(pred) {
            let _ = self.advance();
            true
        } else {
            false
        }
    }
}

/// A character no token can start with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{pos}] unknown character '{ch}'")]
pub struct LexError {
    pub pos: Position,
    /// Byte range of the offending character.
    pub span: Range<usize>,
    pub ch: char,
}

impl LexError {
    /// The message without the position prefix.
    pub fn message(&self) -> String {
        format!("unknown character '{}'", self.ch)
    }
}

impl Spanned for LexError {
    fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// A failed scan: the error and every token produced before it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ScanError {
    pub error: LexError,
    pub tokens: Vec<Token>,
}
