use std::io::Write;
use crate::core::error::{Error, ErrorKind, Result};
use crate::store::ternary::{TernaryStore, TstNode};
use crate::store::trie::{TrieNode, TrieStore};

/// Label of the trie root, which holds no character
const ROOT_LABEL: &str = "ROOT";

/// Renders a store's node graph as Graphviz DOT.
///
/// Holds the store's read lock for the whole pass and never mutates nodes.
/// Node ids (`n0`, `n1`, ...) are stable within a single render.
pub trait Visualize {
    fn visualize<W: Write>(&self, out: &mut W) -> Result<()>;

    fn render_dot(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.visualize(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| {
            Error::new(ErrorKind::Parse, format!("rendered graph is not UTF-8: {}", e))
        })
    }
}

/// Sequential id source plus the sink being written to
struct DotWriter<'w, W: Write> {
    out: &'w mut W,
    next_id: usize,
}

impl<'w, W: Write> DotWriter<'w, W> {
    fn new(out: &'w mut W) -> Self {
        DotWriter { out, next_id: 0 }
    }

    fn begin(&mut self, graph_name: &str) -> Result<()> {
        writeln!(self.out, "digraph {} {{", graph_name)?;
        writeln!(self.out, "  node [shape=circle];")?;
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        writeln!(self.out, "}}")?;
        Ok(())
    }

    fn node(&mut self, label: &str, is_end: bool) -> Result<usize> {
        let id = self.next_id;
        self.next_id += 1;

        if is_end {
            writeln!(self.out, "  n{} [label=\"{}\", shape=doublecircle];", id, escape(label))?;
        } else {
            writeln!(self.out, "  n{} [label=\"{}\"];", id, escape(label))?;
        }
        Ok(id)
    }

    fn edge(&mut self, from: usize, to: usize, label: &str) -> Result<()> {
        writeln!(self.out, "  n{} -> n{} [label=\"{}\"];", from, to, escape(label))?;
        Ok(())
    }

    /// Pre-order walk below the trie node `id`, children by ascending char
    fn trie_nodes(&mut self, root: &TrieNode, id: usize) -> Result<()> {
        let mut stack: Vec<(usize, char, &TrieNode)> = Vec::new();
        push_trie_children(&mut stack, id, root);

        while let Some((parent, ch, node)) = stack.pop() {
            let label = ch.to_string();
            let child_id = self.node(&label, node.is_end())?;
            self.edge(parent, child_id, &label)?;
            push_trie_children(&mut stack, child_id, node);
        }
        Ok(())
    }

    /// Pre-order walk of a ternary subtree
    fn tst_nodes(&mut self, root: &TstNode) -> Result<()> {
        let mut stack: Vec<(Option<(usize, &'static str)>, &TstNode)> = vec![(None, root)];

        while let Some((parent, node)) = stack.pop() {
            let id = self.node(&node.ch().to_string(), node.is_end())?;
            if let Some((parent, relation)) = parent {
                self.edge(parent, id, relation)?;
            }

            let links = [("right", node.right()), ("mid", node.mid()), ("left", node.left())];
            for (relation, child) in links {
                if let Some(child) = child {
                    stack.push((Some((id, relation)), child));
                }
            }
        }
        Ok(())
    }
}

fn push_trie_children<'a>(stack: &mut Vec<(usize, char, &'a TrieNode)>, id: usize, node: &'a TrieNode) {
    let children: Vec<(char, &TrieNode)> = node.children().collect();
    for (ch, child) in children.into_iter().rev() {
        stack.push((id, ch, child));
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Visualize for TrieStore {
    fn visualize<W: Write>(&self, out: &mut W) -> Result<()> {
        let root = self.read_root();
        let mut dot = DotWriter::new(out);

        dot.begin("trie")?;
        let root_id = dot.node(ROOT_LABEL, false)?;
        dot.trie_nodes(&root, root_id)?;
        dot.end()
    }
}

impl Visualize for TernaryStore {
    fn visualize<W: Write>(&self, out: &mut W) -> Result<()> {
        let root = self.read_root();
        let Some(first) = root.as_deref() else {
            return Err(Error::new(
                ErrorKind::InvalidState,
                "ternary tree is empty, nothing to render".to_string(),
            ));
        };

        let mut dot = DotWriter::new(out);
        dot.begin("tst")?;
        dot.tst_nodes(first)?;
        dot.end()
    }
}
