//! The abstract syntax tree produced for the compiler proper.
//!
//! Nodes live in arenas owned by an [`AstContext`] and are referred to by
//! non-zero [`Id`] handles. Optional children use [`Nullable`] handles, names
//! are interned [`Identifier`]s and positions are absolute [`SourceLoc`]s
//! managed by a [`SourceManager`].

mod arena;
mod bridging;
mod context;
mod dump;
mod identifier;
mod legacy;
pub mod nodes;
mod nullable;
mod source;

pub use arena::Id;
pub use bridging::{BridgedStringRef, OwnedBridgedString};
pub use context::{AstContext, BufferDiagnostic};
pub use dump::dump_source_file;
pub use identifier::Identifier;
pub use legacy::LegacyParse;
pub use nodes::{Decl, DeclContext, Expr, Pattern, Stmt, TypeRepr};
pub use nullable::{AsNullable, BridgedNullable, HasNullable, Nullable};
pub use source::{BufferId, SourceBuffer, SourceLoc, SourceManager, SourceRange};
