use ferrule_errors::Diagnostic;
use ferrule_syntax::{SyntaxTree, ast};

mod grammar;
mod parser;
#[cfg(test)]
mod tests;

/// A lossless syntax tree together with the errors found while building it.
pub struct Parse {
    tree: SyntaxTree,
    diagnostics: Vec<Diagnostic>,
}

impl Parse {
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn module(&self) -> ast::Module<'_> {
        ast::Module::new(self.tree.root()).expect("the root node is always a module")
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

pub fn parse(text: &str) -> Parse {
    let mut parser = parser::Parser::new(text);
    grammar::items::module(&mut parser);
    let (tree, diagnostics) = parser.finish();
    Parse { tree, diagnostics }
}
