//! Public syntax tree API built on immutable, parent-linked nodes.

use std::fmt::{self, Write as _};

use text_size::{TextRange, TextSize};

use crate::{SyntaxKind, TriviaPiece};

/// Owned syntax tree for a single source text.
///
/// Nodes, tokens and trivia live in flat arenas; handles are an index plus a
/// borrow of the tree, so navigation never allocates.
pub struct SyntaxTree {
    pub(crate) text: Box<str>,
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) tokens: Vec<TokenData>,
    pub(crate) children: Vec<Child>,
    pub(crate) trivia: Vec<TriviaPiece>,
}

pub(crate) struct NodeData {
    pub(crate) kind: SyntaxKind,
    pub(crate) parent: Option<u32>,
    pub(crate) children: (u32, u32),
    /// First and last token index; `None` for nodes that cover no tokens.
    pub(crate) tokens: Option<(u32, u32)>,
    pub(crate) range: TextRange,
}

pub(crate) struct TokenData {
    pub(crate) kind: SyntaxKind,
    pub(crate) parent: u32,
    pub(crate) leading: (u32, u32),
    pub(crate) trailing: (u32, u32),
    /// Range including attached trivia.
    pub(crate) range: TextRange,
    /// Range of the token text proper.
    pub(crate) kind_range: TextRange,
}

#[derive(Clone, Copy)]
pub(crate) enum Child {
    Node(u32),
    Token(u32),
}

impl SyntaxTree {
    /// Returns the root syntax node.
    #[inline]
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode { tree: self, index: 0 }
    }

    /// Returns the full source text for this tree.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the tree one element per line, trivia included.
    pub fn debug_tree(&self) -> String {
        let mut out = String::new();
        write_node(&mut out, self.root(), 0);
        out
    }
}

fn write_node(out: &mut String, node: SyntaxNode<'_>, depth: usize) {
    _ = writeln!(out, "{:indent$}{node:?}", "", indent = depth * 2);
    let indent = (depth + 1) * 2;
    for child in node.children_with_tokens() {
        match child {
            NodeOrToken::Node(node) => write_node(out, node, depth + 1),
            NodeOrToken::Token(token) => {
                let text = token.tree.text();
                write_trivia(out, text, token.position(), token.leading_trivia(), indent);
                _ = writeln!(out, "{:indent$}{token:?} {:?}", "", token.text_trimmed());
                let end = token.trimmed_range().end();
                write_trivia(out, text, end, token.trailing_trivia(), indent);
            }
        }
    }
}

fn write_trivia(
    out: &mut String,
    text: &str,
    mut offset: TextSize,
    pieces: &[TriviaPiece],
    indent: usize,
) {
    for piece in pieces {
        let range = TextRange::at(offset, piece.len);
        let kind = piece.kind.syntax_kind();
        _ = writeln!(out, "{:indent$}{kind:?}@{range:?} {:?}", "", &text[range]);
        offset += piece.len;
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree").field("text_len", &self.text().len()).finish_non_exhaustive()
    }
}

/// Token handle tied to the lifetime of the tree.
#[derive(Clone, Copy)]
pub struct SyntaxToken<'a> {
    tree: &'a SyntaxTree,
    index: u32,
}

impl<'a> SyntaxToken<'a> {
    #[inline]
    fn data(self) -> &'a TokenData {
        &self.tree.tokens[self.index as usize]
    }

    /// Returns this token's kind.
    #[inline]
    pub fn kind(self) -> SyntaxKind {
        self.data().kind
    }

    /// Returns the token text range including attached trivia.
    #[inline]
    pub fn text_range(self) -> TextRange {
        self.data().range
    }

    /// Returns the token text range excluding trivia.
    #[inline]
    pub fn trimmed_range(self) -> TextRange {
        self.data().kind_range
    }

    /// Returns the token text including trivia.
    #[inline]
    pub fn text(self) -> &'a str {
        &self.tree.text[self.text_range()]
    }

    /// Returns the token text excluding trivia.
    #[inline]
    pub fn text_trimmed(self) -> &'a str {
        &self.tree.text[self.trimmed_range()]
    }

    /// Absolute offset of the first byte of leading trivia.
    #[inline]
    pub fn position(self) -> TextSize {
        self.text_range().start()
    }

    /// Absolute offset of the token text, past its leading trivia.
    #[inline]
    pub fn position_after_skipping_leading_trivia(self) -> TextSize {
        self.trimmed_range().start()
    }

    #[inline]
    pub fn leading_trivia(self) -> &'a [TriviaPiece] {
        let (start, end) = self.data().leading;
        &self.tree.trivia[start as usize..end as usize]
    }

    #[inline]
    pub fn trailing_trivia(self) -> &'a [TriviaPiece] {
        let (start, end) = self.data().trailing;
        &self.tree.trivia[start as usize..end as usize]
    }

    /// Returns the previous token if any.
    #[inline]
    pub fn prev_token(self) -> Option<Self> {
        let index = self.index.checked_sub(1)?;
        Some(Self { tree: self.tree, index })
    }

    /// Returns the next token if any.
    #[inline]
    pub fn next_token(self) -> Option<Self> {
        let index = self.index + 1;
        ((index as usize) < self.tree.tokens.len()).then_some(Self { tree: self.tree, index })
    }

    /// Returns the parent node.
    #[inline]
    pub fn parent(self) -> SyntaxNode<'a> {
        SyntaxNode { tree: self.tree, index: self.data().parent }
    }

    /// Returns an iterator of parent nodes, starting from the immediate parent.
    #[inline]
    pub fn parent_ancestors(self) -> impl Iterator<Item = SyntaxNode<'a>> + Clone {
        self.parent().ancestors()
    }
}

impl PartialEq for SyntaxToken<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for SyntaxToken<'_> {}

impl fmt::Debug for SyntaxToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.kind(), self.trimmed_range())
    }
}

/// Node handle tied to the lifetime of the tree.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    tree: &'a SyntaxTree,
    index: u32,
}

impl<'a> SyntaxNode<'a> {
    #[inline]
    fn data(self) -> &'a NodeData {
        &self.tree.nodes[self.index as usize]
    }

    /// Returns this node's kind.
    #[inline]
    pub fn kind(self) -> SyntaxKind {
        self.data().kind
    }

    /// Returns the first token spanned by this node.
    #[inline]
    pub fn first_token(self) -> Option<SyntaxToken<'a>> {
        let (first, _) = self.data().tokens?;
        Some(SyntaxToken { tree: self.tree, index: first })
    }

    /// Returns the last token spanned by this node.
    #[inline]
    pub fn last_token(self) -> Option<SyntaxToken<'a>> {
        let (_, last) = self.data().tokens?;
        Some(SyntaxToken { tree: self.tree, index: last })
    }

    /// Returns the text range covered by this node, trivia included.
    #[inline]
    pub fn text_range(self) -> TextRange {
        self.data().range
    }

    /// Returns the range with leading/trailing trivia trimmed away.
    #[inline]
    pub fn trimmed_range(self) -> TextRange {
        match (self.first_token(), self.last_token()) {
            (Some(first), Some(last)) => {
                TextRange::new(first.trimmed_range().start(), last.trimmed_range().end())
            }
            _ => TextRange::empty(self.text_range().start()),
        }
    }

    /// Returns the text slice covered by this node.
    #[inline]
    pub fn text(self) -> &'a str {
        &self.tree.text[self.text_range()]
    }

    /// Returns the text slice excluding leading/trailing trivia.
    #[inline]
    pub fn text_trimmed(self) -> &'a str {
        &self.tree.text[self.trimmed_range()]
    }

    /// Absolute offset of this node, including the leading trivia of its first token.
    #[inline]
    pub fn position(self) -> TextSize {
        self.text_range().start()
    }

    /// Absolute offset of the first non-trivia byte of this node.
    #[inline]
    pub fn position_after_skipping_leading_trivia(self) -> TextSize {
        self.trimmed_range().start()
    }

    /// Returns the parent node if any.
    #[inline]
    pub fn parent(self) -> Option<Self> {
        Some(Self { tree: self.tree, index: self.data().parent? })
    }

    /// Returns an iterator of ancestors starting from this node.
    #[inline]
    pub fn ancestors(self) -> impl Iterator<Item = SyntaxNode<'a>> + Clone {
        std::iter::successors(Some(self), |it| it.parent())
    }

    /// Iterates children including tokens.
    #[inline]
    pub fn children_with_tokens(self) -> ChildrenWithTokens<'a> {
        let (start, end) = self.data().children;
        ChildrenWithTokens {
            tree: self.tree,
            children: self.tree.children[start as usize..end as usize].iter(),
        }
    }

    /// Iterates child nodes, skipping tokens.
    #[inline]
    pub fn children(self) -> impl DoubleEndedIterator<Item = SyntaxNode<'a>> + Clone {
        self.children_with_tokens().filter_map(NodeOrToken::into_node)
    }

    /// Iterates direct child tokens, skipping nodes.
    #[inline]
    pub fn child_tokens(self) -> impl DoubleEndedIterator<Item = SyntaxToken<'a>> + Clone {
        self.children_with_tokens().filter_map(NodeOrToken::into_token)
    }

    /// Returns the first direct child token of the given kind.
    #[inline]
    pub fn child_token(self, kind: SyntaxKind) -> Option<SyntaxToken<'a>> {
        self.child_tokens().find(|token| token.kind() == kind)
    }

    /// Preorder traversal over this node and all nodes below it.
    pub fn descendants(self) -> impl Iterator<Item = SyntaxNode<'a>> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().rev());
            Some(node)
        })
    }

    /// Iterates every token covered by this node in source order.
    pub fn tokens(self) -> impl Iterator<Item = SyntaxToken<'a>> {
        let tree = self.tree;
        let (first, last) = self.data().tokens.unwrap_or((1, 0));
        (first..=last).map(move |index| SyntaxToken { tree, index })
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for SyntaxNode<'_> {}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.kind(), self.text_range())
    }
}

/// Node or token element inside the tree.
pub type SyntaxElement<'a> = NodeOrToken<SyntaxNode<'a>, SyntaxToken<'a>>;

/// Iterator over children including tokens.
#[derive(Clone)]
pub struct ChildrenWithTokens<'a> {
    tree: &'a SyntaxTree,
    children: std::slice::Iter<'a, Child>,
}

impl<'a> ChildrenWithTokens<'a> {
    #[inline]
    fn map_child(&self, child: &Child) -> SyntaxElement<'a> {
        let tree = self.tree;
        match *child {
            Child::Node(index) => NodeOrToken::Node(SyntaxNode { tree, index }),
            Child::Token(index) => NodeOrToken::Token(SyntaxToken { tree, index }),
        }
    }
}

impl<'a> Iterator for ChildrenWithTokens<'a> {
    type Item = SyntaxElement<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let child = self.children.next()?;
        Some(self.map_child(child))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.children.size_hint()
    }
}

impl DoubleEndedIterator for ChildrenWithTokens<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let child = self.children.next_back()?;
        Some(self.map_child(child))
    }
}

impl ExactSizeIterator for ChildrenWithTokens<'_> {}

/// Node-or-token wrapper used throughout the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeOrToken<N, T> {
    Node(N),
    Token(T),
}

impl<N, T> NodeOrToken<N, T> {
    /// Converts into the node variant, if any.
    pub fn into_node(self) -> Option<N> {
        match self {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(_) => None,
        }
    }

    /// Converts into the token variant, if any.
    pub fn into_token(self) -> Option<T> {
        match self {
            NodeOrToken::Node(_) => None,
            NodeOrToken::Token(token) => Some(token),
        }
    }
}
