use ferrule_errors::Diagnostic;
use ferrule_inputs::File;
use ferrule_span::IntoSymbol as _;
use text_size::TextLen as _;

use crate::arena::Arena;
use crate::nodes::*;
use crate::{BridgedStringRef, Identifier, SourceBuffer, SourceManager};

/// A diagnostic reported against one source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDiagnostic {
    pub buffer: SourceBuffer,
    pub diagnostic: Diagnostic,
}

macro_rules! arenas {
    ($($field:ident: $tag:ident => $data:ty, $alloc:ident, $get:ident;)*) => {
        #[derive(Default)]
        struct Arenas<'db> {
            $($field: Arena<tags::$tag, $data>,)*
        }

        impl<'db> AstContext<'db> {
            $(
                pub fn $alloc(&mut self, data: $data) -> $tag {
                    self.arenas.$field.alloc(data)
                }

                #[track_caller]
                pub fn $get(&self, id: $tag) -> &$data {
                    &self.arenas.$field[id]
                }
            )*
        }
    };
}

arenas! {
    exprs: Expr => ExprData<'db>, alloc_expr, expr;
    stmts: Stmt => StmtData, alloc_stmt, stmt;
    decls: Decl => DeclData<'db>, alloc_decl, decl;
    type_reprs: TypeRepr => TypeReprData<'db>, alloc_type_repr, type_repr;
    patterns: Pattern => PatternData<'db>, alloc_pattern, pattern;
    generic_param_lists: GenericParamList => GenericParamListData<'db>, alloc_generic_param_list, generic_param_list;
    where_clauses: TrailingWhereClause => TrailingWhereClauseData, alloc_trailing_where_clause, trailing_where_clause;
    parameter_lists: ParameterList => ParameterListData<'db>, alloc_parameter_list, parameter_list;
    decl_contexts: DeclContext => DeclContextData<'db>, alloc_decl_context, decl_context;
}

/// Owns everything the AST is made of: nodes, interned identifiers,
/// registered source buffers and reported diagnostics.
pub struct AstContext<'db> {
    db: &'db dyn salsa::Database,
    sources: SourceManager,
    arenas: Arenas<'db>,
    module_context: DeclContext,
    diagnostics: Vec<BufferDiagnostic>,
}

impl<'db> AstContext<'db> {
    pub fn new(db: &'db dyn salsa::Database) -> Self {
        let mut arenas = Arenas::default();
        let module_context = arenas
            .decl_contexts
            .alloc(DeclContextData { kind: DeclContextKind::Module, parent: None });

        Self {
            db,
            sources: SourceManager::default(),
            arenas,
            module_context,
            diagnostics: Vec::new(),
        }
    }

    pub fn db(&self) -> &'db dyn salsa::Database {
        self.db
    }

    pub fn source_manager(&self) -> &SourceManager {
        &self.sources
    }

    /// Registers the text of `file` as a new source buffer.
    pub fn add_buffer(&mut self, file: File) -> SourceBuffer {
        let len = file.text(self.db).text_len();
        self.sources.add_buffer(file, len)
    }

    pub fn buffer_text(&self, buffer: SourceBuffer) -> &'db str {
        self.sources.file(buffer.id()).text(self.db)
    }

    /// Interns `text` and returns its identifier. Interning the same text
    /// twice yields equal identifiers.
    ///
    /// # Panics
    ///
    /// Panics if the referenced bytes are not valid UTF-8.
    pub fn get_identifier(&mut self, text: BridgedStringRef<'_>) -> Identifier<'db> {
        let text = text.to_str().expect("identifier is not valid UTF-8");
        Identifier::new(text.into_symbol(self.db))
    }

    pub fn module_context(&self) -> DeclContext {
        self.module_context
    }

    /// Creates the context owned by the function `name`, nested in `parent`.
    pub fn new_function_context(
        &mut self,
        name: Identifier<'db>,
        parent: DeclContext,
    ) -> DeclContext {
        self.alloc_decl_context(DeclContextData {
            kind: DeclContextKind::Function(name),
            parent: Some(parent),
        })
    }

    pub fn diagnose(&mut self, buffer: SourceBuffer, diagnostic: Diagnostic) {
        self.diagnostics.push(BufferDiagnostic { buffer, diagnostic });
    }

    pub fn diagnostics(&self) -> &[BufferDiagnostic] {
        &self.diagnostics
    }
}
