//! Tree node types
//!
//! A sentence tree is made of two kinds of nodes: internal constituents
//! ([`Category`]) and labeled terminals ([`PartOfSpeech`]). [`Node`] is the
//! closed sum over both; tree walks match on it exhaustively.

use indexmap::IndexMap;
use smol_str::SmolStr;
use std::fmt;

use crate::base::constants::LEMMA_KEY;

/// A node of a constituency tree
///
/// Trees can be arbitrarily deep, so cloning, comparing, rendering and
/// dropping all walk the tree with an explicit stack.
#[derive(Debug, Eq)]
pub enum Node {
    /// Internal constituent with ordered children
    Category(Category),
    /// Labeled terminal
    PartOfSpeech(PartOfSpeech),
}

/// An internal constituent: a tag over an ordered list of children
///
/// A category with no children still occupies one terminal position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub tag: SmolStr,
    pub children: Vec<Node>,
}

/// A labeled terminal: a tag over one surface word
///
/// `extra` holds auxiliary attributes (such as a lemma) attached by upstream
/// annotation; it never affects rendering or scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartOfSpeech {
    pub tag: SmolStr,
    pub word: String,
    pub extra: IndexMap<SmolStr, String>,
}

impl Node {
    pub fn tag(&self) -> &str {
        match self {
            Node::Category(category) => &category.tag,
            Node::PartOfSpeech(pos) => &pos.tag,
        }
    }

    /// Children of a category; leaves have none
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Category(category) => &category.children,
            Node::PartOfSpeech(_) => &[],
        }
    }

    /// Check if this node occupies a terminal position itself
    pub fn is_leaf(&self) -> bool {
        match self {
            Node::Category(category) => category.children.is_empty(),
            Node::PartOfSpeech(_) => true,
        }
    }

    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Node::Category(category) => Some(category),
            Node::PartOfSpeech(_) => None,
        }
    }

    pub fn as_part_of_speech(&self) -> Option<&PartOfSpeech> {
        match self {
            Node::Category(_) => None,
            Node::PartOfSpeech(pos) => Some(pos),
        }
    }

    /// Number of terminal positions covered by this node
    pub fn terminal_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        let mut count = 0;
        self.each_descendant(|node, _| count += usize::from(node.is_leaf()));
        count
    }

    /// Visit every node below this one (not the node itself) in pre-order,
    /// with its depth relative to this node's children (0 for children).
    pub fn each_descendant<'a>(&'a self, mut visit: impl FnMut(&'a Node, usize)) {
        let mut stack: Vec<(&'a Node, usize)> =
            self.children().iter().rev().map(|child| (child, 0)).collect();
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            stack.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
        }
    }

    /// Build a copy of this tree with every category tag and leaf mapped
    ///
    /// Children are rebuilt before their parent; the shape never changes.
    pub fn rebuild(
        &self,
        mut category_tag: impl FnMut(&Category) -> SmolStr,
        mut leaf: impl FnMut(&PartOfSpeech) -> PartOfSpeech,
    ) -> Node {
        let root = match self {
            Node::Category(category) => category,
            Node::PartOfSpeech(pos) => return leaf(pos).into(),
        };

        // Finished subtrees, consumed by their parent once it is revisited
        let mut built: Vec<Node> = Vec::new();
        let mut work: Vec<(&Node, bool)> =
            root.children.iter().rev().map(|child| (child, false)).collect();
        while let Some((node, revisit)) = work.pop() {
            match node {
                Node::PartOfSpeech(pos) => built.push(leaf(pos).into()),
                Node::Category(category) if revisit => {
                    let children = built.split_off(built.len() - category.children.len());
                    built.push(Category::new(category_tag(category), children).into());
                }
                Node::Category(category) => {
                    work.push((node, true));
                    work.extend(category.children.iter().rev().map(|child| (child, false)));
                }
            }
        }
        Category::new(category_tag(root), built).into()
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        self.rebuild(|category| category.tag.clone(), PartOfSpeech::clone)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some(pair) = pairs.pop() {
            match pair {
                (Node::Category(left), Node::Category(right)) => {
                    if left.tag != right.tag || left.children.len() != right.children.len() {
                        return false;
                    }
                    pairs.extend(left.children.iter().zip(&right.children));
                }
                (Node::PartOfSpeech(left), Node::PartOfSpeech(right)) => {
                    if left != right {
                        return false;
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl Category {
    pub fn new(tag: impl Into<SmolStr>, children: Vec<Node>) -> Self {
        Self {
            tag: tag.into(),
            children,
        }
    }

    /// A childless category (a leaf-position placeholder)
    pub fn empty(tag: impl Into<SmolStr>) -> Self {
        Self::new(tag, Vec::new())
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }
}

impl Drop for Category {
    fn drop(&mut self) {
        // Detach grandchildren first so no drop runs more than one level deep
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Category(mut category) = node {
                pending.append(&mut category.children);
            }
        }
    }
}

impl PartOfSpeech {
    pub fn new(tag: impl Into<SmolStr>, word: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            word: word.into(),
            extra: IndexMap::new(),
        }
    }

    /// Attach an auxiliary attribute
    pub fn with_extra(mut self, key: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn lemma(&self) -> Option<&str> {
        self.extra.get(LEMMA_KEY).map(String::as_str)
    }

    /// Check if this leaf came from a bare word with no tag of its own
    pub fn is_untagged(&self) -> bool {
        self.tag.is_empty()
    }
}

impl From<Category> for Node {
    fn from(category: Category) -> Self {
        Node::Category(category)
    }
}

impl From<PartOfSpeech> for Node {
    fn from(pos: PartOfSpeech) -> Self {
        Node::PartOfSpeech(pos)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Category(category) => fmt::Display::fmt(category, f),
            Node::PartOfSpeech(pos) => fmt::Display::fmt(pos, f),
        }
    }
}

/// One step of an iterative bracket rendering
enum Step<'a> {
    Enter(&'a Node),
    Close,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.tag)?;
        let mut steps = vec![Step::Close];
        steps.extend(self.children.iter().rev().map(Step::Enter));
        while let Some(step) = steps.pop() {
            match step {
                Step::Close => f.write_str(")")?,
                Step::Enter(Node::PartOfSpeech(pos)) => write!(f, " {pos}")?,
                Step::Enter(Node::Category(category)) => {
                    write!(f, " ({}", category.tag)?;
                    steps.push(Step::Close);
                    steps.extend(category.children.iter().rev().map(Step::Enter));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_untagged() {
            write!(f, "{}", self.word)
        } else {
            write!(f, "({} {})", self.tag, self.word)
        }
    }
}
