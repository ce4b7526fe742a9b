//! Logos-based lexer for bracket notation
//!
//! Fast tokenization using the logos crate. Whitespace is skipped, every other
//! character lands in a token, so lexing never fails.

use crate::base::{TextRange, TextSize};
use logos::Logos;

/// Kind of a lexed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Maximal run of characters other than whitespace, parentheses and `-`
    Word,
    /// A single `-`
    Hyphen,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End-of-input sentinel, always the last token
    Eof,
}

impl TokenKind {
    /// Check if tokens of this kind can form part of a tag or word symbol
    pub fn is_symbol_part(&self) -> bool {
        matches!(self, Self::Word | Self::Hyphen)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Hyphen => "'-'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Eof => "end of input",
        }
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub range: TextRange,
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+")]
enum LogosToken {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("-")]
    Hyphen,

    #[regex(r"[^\s()\-]+")]
    Word,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::LParen => Self::LParen,
            LogosToken::RParen => Self::RParen,
            LogosToken::Hyphen => Self::Hyphen,
            LogosToken::Word => Self::Word,
        }
    }
}

fn text_range(span: std::ops::Range<usize>) -> TextRange {
    TextRange::new(TextSize::new(span.start as u32), TextSize::new(span.end as u32))
}

/// Lexer wrapping the logos-generated tokenizer
///
/// Yields every token followed by exactly one [`TokenKind::Eof`], then `None`.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    input_len: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            input_len: input.len(),
            finished: false,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(result) => {
                // Every non-whitespace character matches some rule; anything
                // logos still rejects is treated as part of a word.
                let kind = result.map(TokenKind::from).unwrap_or(TokenKind::Word);
                Some(Token {
                    kind,
                    text: self.inner.slice(),
                    range: text_range(self.inner.span()),
                })
            }
            None => {
                self.finished = true;
                Some(Token {
                    kind: TokenKind::Eof,
                    text: "",
                    range: text_range(self.input_len..self.input_len),
                })
            }
        }
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Symbol stream over a bracket string
///
/// Glues byte-adjacent `Word`/`Hyphen` tokens into one `Word` token so that
/// hyphenated tags such as `V-fin` come out whole. Parentheses and `Eof` pass
/// through unchanged.
pub struct Symbols<'a> {
    input: &'a str,
    tokens: std::iter::Peekable<Lexer<'a>>,
}

impl<'a> Symbols<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: Lexer::new(input).peekable(),
        }
    }
}

impl<'a> Iterator for Symbols<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.tokens.next()?;
        if !first.kind.is_symbol_part() {
            return Some(first);
        }

        let mut range = first.range;
        while let Some(next) = self.tokens.peek() {
            if !next.kind.is_symbol_part() || next.range.start() != range.end() {
                break;
            }
            range = range.cover(next.range);
            self.tokens.next();
        }

        Some(Token {
            kind: TokenKind::Word,
            text: &self.input[range],
            range,
        })
    }
}
