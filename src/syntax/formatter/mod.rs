//! Pretty printer for bracket trees
//!
//! Renders one node per line, children indented one level below their parent
//! and closing parentheses kept on the last child's line:
//!
//! ```text
//! (S
//!   (NP
//!     (ART Um)
//!     (N revivalismo)))
//! ```

mod options;

pub use options::FormatOptions;

use crate::syntax::{Node, Sentence};

/// Render a node across multiple indented lines
pub fn pretty_string(node: &Node, options: &FormatOptions) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0, options);
    out
}

/// Render a sentence's tree across multiple indented lines
pub fn pretty_sentence(sentence: &Sentence, options: &FormatOptions) -> String {
    pretty_string(sentence.root(), options)
}

impl Node {
    /// Multi-line rendering, see [`pretty_string`]
    pub fn pretty_string(&self, options: &FormatOptions) -> String {
        pretty_string(self, options)
    }
}

enum Step<'a> {
    Enter(&'a Node, usize),
    Close,
}

fn write_node(out: &mut String, node: &Node, level: usize, options: &FormatOptions) {
    let mut steps = vec![Step::Enter(node, level)];
    while let Some(step) = steps.pop() {
        let (node, level) = match step {
            Step::Close => {
                out.push(')');
                continue;
            }
            Step::Enter(node, level) => (node, level),
        };

        if level > 0 {
            out.push('\n');
            out.push_str(&options.indent(level));
        }
        match node {
            Node::Category(category) => {
                out.push('(');
                out.push_str(&category.tag);
                steps.push(Step::Close);
                steps.extend(
                    category
                        .children
                        .iter()
                        .rev()
                        .map(|child| Step::Enter(child, level + 1)),
                );
            }
            Node::PartOfSpeech(pos) => out.push_str(&pos.to_string()),
        }
    }
}
