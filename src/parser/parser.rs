//! Bracket-tree parser
//!
//! Builds a [`Node`] tree from the symbol stream in a single pass.
//! Grammar: `tree := "(" TAG (tree | WORD)* ")"`.
//!
//! Open constituents live on an explicit stack, so nesting depth is bounded
//! only by the input size.

use super::errors::{ErrorCode, TreeError};
use super::lexer::{Symbols, Token, TokenKind};
use crate::base::{TextRange, TextSize};
use crate::syntax::{Category, Node, PartOfSpeech, Sentence};
use smol_str::SmolStr;
use std::str::FromStr;

/// Parse a bracket string holding exactly one tree
pub fn parse_tree(input: &str) -> Result<Node, TreeError> {
    TreeParser::new(input).parse().inspect_err(|err| {
        tracing::debug!(code = %err.code, range = ?err.range, "malformed tree: {}", err.message);
    })
}

impl Sentence {
    /// Parse a bracket string and index the resulting tree
    pub fn parse(input: &str) -> Result<Self, TreeError> {
        parse_tree(input).map(Self::new)
    }
}

impl FromStr for Sentence {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Content collected inside an open `(`
enum Content {
    Word(String),
    Node(Node),
}

/// An open constituent waiting for its `)`
struct Frame {
    tag: SmolStr,
    open: TextRange,
    content: Vec<Content>,
}

impl Frame {
    /// Close the constituent: a lone word makes a leaf, anything else a category
    fn close(mut self) -> Node {
        if matches!(self.content.as_slice(), [Content::Word(_)]) {
            if let Some(Content::Word(word)) = self.content.pop() {
                return PartOfSpeech::new(self.tag, word).into();
            }
        }

        let children = self
            .content
            .into_iter()
            .map(|content| match content {
                Content::Word(word) => PartOfSpeech::new(SmolStr::default(), word).into(),
                Content::Node(node) => node,
            })
            .collect();
        Category::new(self.tag, children).into()
    }
}

/// The parser state
struct TreeParser<'a> {
    symbols: Symbols<'a>,
    stack: Vec<Frame>,
    root: Option<Node>,
    end: TextRange,
}

impl<'a> TreeParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            symbols: Symbols::new(input),
            stack: Vec::new(),
            root: None,
            end: TextRange::empty(TextSize::new(input.len() as u32)),
        }
    }

    /// Next symbol; the stream is fused after `Eof`, so keep reporting `Eof`
    fn bump(&mut self) -> Token<'a> {
        self.symbols.next().unwrap_or(Token {
            kind: TokenKind::Eof,
            text: "",
            range: self.end,
        })
    }

    fn parse(mut self) -> Result<Node, TreeError> {
        loop {
            let token = self.bump();
            match token.kind {
                TokenKind::LParen => self.open(token)?,
                TokenKind::Word | TokenKind::Hyphen => self.word(token)?,
                TokenKind::RParen => self.close(token)?,
                TokenKind::Eof => return self.finish(token),
            }
        }
    }

    fn open(&mut self, paren: Token<'a>) -> Result<(), TreeError> {
        self.ensure_no_root(paren)?;

        let tag = self.bump();
        if tag.kind != TokenKind::Word {
            return Err(TreeError::builder(ErrorCode::E0201)
                .message(format!("expected a tag after '(', found {}", tag.kind.describe()))
                .range(tag.range)
                .related("'(' here", paren.range)
                .hint("every constituent starts with its tag, as in (NP ...)")
                .build());
        }

        self.stack.push(Frame {
            tag: SmolStr::new(tag.text),
            open: paren.range,
            content: Vec::new(),
        });
        Ok(())
    }

    fn word(&mut self, token: Token<'a>) -> Result<(), TreeError> {
        self.ensure_no_root(token)?;

        match self.stack.last_mut() {
            Some(frame) => {
                frame.content.push(Content::Word(token.text.to_string()));
                Ok(())
            }
            None => Err(TreeError::builder(ErrorCode::E0203)
                .message(format!("word '{}' outside of a tree", token.text))
                .range(token.range)
                .build()),
        }
    }

    fn close(&mut self, paren: Token<'a>) -> Result<(), TreeError> {
        let Some(frame) = self.stack.pop() else {
            return Err(TreeError::builder(ErrorCode::E0102)
                .range(paren.range)
                .hint("remove the extra ')'")
                .build());
        };

        let node = frame.close();
        match self.stack.last_mut() {
            Some(parent) => parent.content.push(Content::Node(node)),
            None => self.root = Some(node),
        }
        Ok(())
    }

    fn finish(self, eof: Token<'a>) -> Result<Node, TreeError> {
        if let Some(innermost) = self.stack.last() {
            return Err(TreeError::builder(ErrorCode::E0101)
                .message(format!(
                    "input ended with {} unclosed parenthes{}",
                    self.stack.len(),
                    if self.stack.len() == 1 { "is" } else { "es" }
                ))
                .range(eof.range)
                .related(format!("'({}' opened here", innermost.tag), innermost.open)
                .hint("add ')' to close the tree")
                .build());
        }

        self.root
            .ok_or_else(|| TreeError::builder(ErrorCode::E0202).range(eof.range).build())
    }

    fn ensure_no_root(&self, token: Token<'a>) -> Result<(), TreeError> {
        if self.root.is_some() {
            return Err(TreeError::builder(ErrorCode::E0103)
                .range(token.range)
                .hint("put one sentence per line")
                .build());
        }
        Ok(())
    }
}
