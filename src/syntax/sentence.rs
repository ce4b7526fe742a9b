//! Span-indexed sentences
//!
//! A [`Sentence`] owns one root [`Node`] and an index, built once at
//! construction, that maps every node to the [`Span`] of terminals it covers.
//! Scoring works per word span rather than per node, so lookups go by span.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::fmt;

use crate::base::Span;
use crate::syntax::{Node, PartOfSpeech};

/// A constituent tag paired with the span it covers
///
/// Orders by span first, then by tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagRange {
    pub span: Span,
    pub tag: SmolStr,
}

impl TagRange {
    pub fn new(span: Span, tag: impl Into<SmolStr>) -> Self {
        Self {
            span,
            tag: tag.into(),
        }
    }
}

/// One index entry per node, in post-order
///
/// A subtree occupies the consecutive entries `first..=own index`, so a
/// node's last child sits right before it and each earlier child ends right
/// before its next sibling's `first`.
#[derive(Debug, Clone, Copy)]
struct IndexEntry {
    span: Span,
    first: u32,
}

/// A parsed sentence tree with its span index
///
/// Immutable after construction; build a new sentence to change the tree.
#[derive(Debug, Clone)]
pub struct Sentence {
    root: Node,
    entries: Vec<IndexEntry>,
    /// Deepest (first in post-order) entry of every span
    by_span: FxHashMap<Span, u32>,
}

impl Sentence {
    /// Index `root` in a single post-order walk
    ///
    /// A leaf (a part of speech or a childless category) takes the position
    /// after its predecessor; a parent covers its first to last child.
    pub fn new(root: Node) -> Self {
        let mut entries: Vec<IndexEntry> = Vec::new();
        let mut position = 0;
        // (node, next child to visit, position when entered, first entry)
        let mut stack: Vec<(&Node, usize, usize, u32)> = vec![(&root, 0, 0, 0)];

        while let Some(frame) = stack.last_mut() {
            let (node, next, start, first) = *frame;
            if let Some(child) = node.children().get(next) {
                frame.1 += 1;
                stack.push((child, 0, position, entries.len() as u32));
                continue;
            }

            let span = if node.is_leaf() {
                position += 1;
                Span::unit(start)
            } else {
                Span::new(start, position)
            };
            entries.push(IndexEntry { span, first });
            stack.pop();
        }

        let mut by_span: FxHashMap<Span, u32> = FxHashMap::default();
        for (idx, entry) in entries.iter().enumerate() {
            by_span.entry(entry.span).or_insert(idx as u32);
        }

        Self {
            root,
            entries,
            by_span,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Number of terminal positions, i.e. the end of the root span
    pub fn terminal_count(&self) -> usize {
        self.span_of_root().end
    }

    pub fn span_of_root(&self) -> Span {
        // The root is always the last node in post-order
        self.entries.last().map(|entry| entry.span).unwrap_or_default()
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    /// Every node with its span, in post-order
    pub fn entries(&self) -> impl Iterator<Item = (Span, &Node)> + '_ {
        self.entries
            .iter()
            .map(|entry| entry.span)
            .zip(PostOrder::new(&self.root))
    }

    /// Every node covering exactly `span`, in post-order discovery order
    ///
    /// Several nodes share a span when a unary chain stacks constituents over
    /// the same words. They all lie on the path from the root down to the
    /// deepest of them, which is the only path walked.
    pub fn lookup(&self, span: Span) -> Vec<&Node> {
        let Some(&deepest) = self.by_span.get(&span) else {
            return Vec::new();
        };
        let deepest = deepest as usize;

        let mut found = Vec::new();
        let mut node = &self.root;
        let mut index = self.entries.len() - 1;
        loop {
            if self.entries[index].span == span {
                found.push(node);
            }
            if index == deepest {
                break;
            }
            match self.child_towards(node, index, deepest) {
                Some((child, child_index)) => {
                    node = child;
                    index = child_index;
                }
                None => break,
            }
        }
        found.reverse();
        found
    }

    /// The child of `node` (entry `index`) whose subtree holds entry `target`
    fn child_towards<'a>(
        &self,
        node: &'a Node,
        index: usize,
        target: usize,
    ) -> Option<(&'a Node, usize)> {
        let mut end = index.checked_sub(1)?;
        for child in node.children().iter().rev() {
            let first = self.entries[end].first as usize;
            if first <= target {
                return Some((child, end));
            }
            end = first.checked_sub(1)?;
        }
        None
    }

    /// Nodes grouped by span, where a group is a run of post-order neighbours
    /// sharing the same span
    pub fn each_range(&self) -> Vec<(Span, Vec<&Node>)> {
        let mut ranges: Vec<(Span, Vec<&Node>)> = Vec::new();
        for (span, node) in self.entries() {
            match ranges.last_mut() {
                Some((last, nodes)) if *last == span => nodes.push(node),
                _ => ranges.push((span, vec![node])),
            }
        }
        ranges
    }

    /// Constituent tags with their spans, sorted by span then tag
    ///
    /// Parts of speech are left out; childless categories are included.
    pub fn tag_ranges(&self) -> Vec<TagRange> {
        let mut ranges: Vec<TagRange> = self
            .entries()
            .filter_map(|(span, node)| match node {
                Node::Category(category) => Some(TagRange::new(span, category.tag.clone())),
                Node::PartOfSpeech(_) => None,
            })
            .collect();
        ranges.sort();
        ranges
    }

    /// Parts of speech in left-to-right order, with their spans
    pub fn part_of_speech_sequence(&self) -> Vec<(Span, &PartOfSpeech)> {
        self.entries()
            .filter_map(|(span, node)| node.as_part_of_speech().map(|pos| (span, pos)))
            .collect()
    }

    /// Surface words in order
    pub fn words(&self) -> Vec<&str> {
        self.part_of_speech_sequence()
            .into_iter()
            .map(|(_, pos)| pos.word.as_str())
            .collect()
    }
}

/// Post-order walk over a tree, matching the order of the index entries
struct PostOrder<'a> {
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> PostOrder<'a> {
    fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![(root, 0)],
        }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.0;
            if let Some(child) = node.children().get(frame.1) {
                frame.1 += 1;
                self.stack.push((child, 0));
                continue;
            }
            self.stack.pop();
            return Some(node);
        }
    }
}

impl From<Node> for Sentence {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for Sentence {}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}
