//! Incremental builder for the immutable syntax tree.

use text_size::{TextRange, TextSize};

use crate::syntax::{Child, NodeData, TokenData};
use crate::trivia::trivia_len;
use crate::{SyntaxKind, SyntaxTree, TriviaPiece};

struct Opened {
    node: u32,
    /// Where this node's children start in `pending`.
    children_start: usize,
}

/// Builds a `SyntaxTree` from parser events.
pub struct Builder {
    text: Box<str>,
    nodes: Vec<NodeData>,
    tokens: Vec<TokenData>,
    children: Vec<Child>,
    trivia: Vec<TriviaPiece>,

    pending: Vec<Child>,
    opened: Vec<Opened>,
    offset: TextSize,
}

impl Drop for Builder {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.opened.is_empty() {
            panic!("you should call `Builder::finish()`");
        }
    }
}

const DEFAULT_TREE_DEPTH: usize = 128;
const DEFAULT_TREE_SIZE: usize = 1024;

impl Builder {
    /// Creates a new builder for `text`.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.into(),
            nodes: Vec::with_capacity(DEFAULT_TREE_SIZE),
            tokens: Vec::with_capacity(DEFAULT_TREE_SIZE),
            children: Vec::with_capacity(DEFAULT_TREE_SIZE),
            trivia: Vec::new(),

            pending: Vec::with_capacity(DEFAULT_TREE_SIZE),
            opened: Vec::with_capacity(DEFAULT_TREE_DEPTH),
            offset: TextSize::new(0),
        }
    }

    /// Starts a new node of the given kind.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        let index = to_u32(self.nodes.len());
        let parent = self.opened.last().map(|opened| opened.node);
        assert!(parent.is_some() || self.nodes.is_empty(), "a syntax tree has a single root");

        self.nodes.push(NodeData {
            kind,
            parent,
            children: (0, 0),
            tokens: None,
            range: TextRange::empty(self.offset),
        });
        if parent.is_some() {
            self.pending.push(Child::Node(index));
        }
        self.opened.push(Opened { node: index, children_start: self.pending.len() });
    }

    /// Finishes the most recently started node.
    pub fn finish_node(&mut self) {
        let Opened { node, children_start } = self.opened.pop().expect("no opened nodes?");

        let start = to_u32(self.children.len());
        self.children.extend(self.pending.drain(children_start..));
        let end = to_u32(self.children.len());

        let node = &mut self.nodes[node as usize];
        node.children = (start, end);
        node.range = match node.tokens {
            Some((first, last)) => TextRange::new(
                self.tokens[first as usize].range.start(),
                self.tokens[last as usize].range.end(),
            ),
            None => TextRange::empty(self.offset),
        };
    }

    /// Adds a token with its attached trivia to the current node.
    ///
    /// Tokens must be pushed in source order and must cover the text without gaps.
    pub fn token(
        &mut self,
        leading: &[TriviaPiece],
        kind: SyntaxKind,
        kind_range: TextRange,
        trailing: &[TriviaPiece],
    ) {
        let parent = self.opened.last().expect("tokens must be inside a node").node;
        let start = self.offset;
        assert_eq!(
            start + trivia_len(leading),
            kind_range.start(),
            "token {kind:?} does not follow the previous token"
        );
        let end = kind_range.end() + trivia_len(trailing);

        let leading = self.push_trivia(leading);
        let trailing = self.push_trivia(trailing);
        let index = to_u32(self.tokens.len());
        self.tokens.push(TokenData {
            kind,
            parent,
            leading,
            trailing,
            range: TextRange::new(start, end),
            kind_range,
        });
        self.pending.push(Child::Token(index));
        self.offset = end;

        // Walk ancestors, update first and last token.
        for opened in &self.opened {
            let node = &mut self.nodes[opened.node as usize];
            match &mut node.tokens {
                None => node.tokens = Some((index, index)),
                Some((_, last)) => *last = index,
            }
        }
    }

    fn push_trivia(&mut self, pieces: &[TriviaPiece]) -> (u32, u32) {
        let start = to_u32(self.trivia.len());
        self.trivia.extend_from_slice(pieces);
        (start, to_u32(self.trivia.len()))
    }

    /// Finishes building and returns the immutable `SyntaxTree`.
    pub fn finish(mut self) -> SyntaxTree {
        assert!(self.opened.is_empty(), "unfinished nodes");
        assert!(!self.nodes.is_empty(), "empty syntax tree");
        debug_assert_eq!(
            usize::from(self.offset),
            self.text.len(),
            "tokens do not cover the whole text"
        );

        SyntaxTree {
            text: std::mem::take(&mut self.text),
            nodes: std::mem::take(&mut self.nodes),
            tokens: std::mem::take(&mut self.tokens),
            children: std::mem::take(&mut self.children),
            trivia: std::mem::take(&mut self.trivia),
        }
    }
}

#[track_caller]
fn to_u32(len: usize) -> u32 {
    len.try_into().expect("syntax tree too large")
}
