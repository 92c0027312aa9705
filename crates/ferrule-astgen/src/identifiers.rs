use ferrule_ast::{AstContext, Identifier, SourceBuffer, SourceLoc};
use ferrule_syntax::SyntaxToken;

use crate::bridge::with_bridged_string;
use crate::locations::BridgedSourceLoc as _;

/// A name together with where it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierAndSourceLoc<'db> {
    pub name: Identifier<'db>,
    pub name_loc: SourceLoc,
}

/// Tokens whose text can be interned as an identifier. A missing token is
/// the empty identifier at the invalid location.
pub trait BridgedIdentifier: Copy {
    fn bridged_identifier<'db>(self, ctx: &mut AstContext<'db>) -> Identifier<'db>;

    fn bridged_identifier_and_source_loc<'db>(
        self,
        ctx: &mut AstContext<'db>,
        buffer: SourceBuffer,
    ) -> (Identifier<'db>, SourceLoc);

    fn identifier_and_source_loc<'db>(
        self,
        ctx: &mut AstContext<'db>,
        buffer: SourceBuffer,
    ) -> IdentifierAndSourceLoc<'db> {
        let (name, name_loc) = self.bridged_identifier_and_source_loc(ctx, buffer);
        IdentifierAndSourceLoc { name, name_loc }
    }
}

impl BridgedIdentifier for SyntaxToken<'_> {
    fn bridged_identifier<'db>(self, ctx: &mut AstContext<'db>) -> Identifier<'db> {
        with_bridged_string(self.text_trimmed(), |text| ctx.get_identifier(text))
    }

    fn bridged_identifier_and_source_loc<'db>(
        self,
        ctx: &mut AstContext<'db>,
        buffer: SourceBuffer,
    ) -> (Identifier<'db>, SourceLoc) {
        (self.bridged_identifier(ctx), self.bridged_source_loc(buffer))
    }
}

impl BridgedIdentifier for Option<SyntaxToken<'_>> {
    fn bridged_identifier<'db>(self, ctx: &mut AstContext<'db>) -> Identifier<'db> {
        self.map_or(Identifier::EMPTY, |token| token.bridged_identifier(ctx))
    }

    fn bridged_identifier_and_source_loc<'db>(
        self,
        ctx: &mut AstContext<'db>,
        buffer: SourceBuffer,
    ) -> (Identifier<'db>, SourceLoc) {
        (self.bridged_identifier(ctx), self.bridged_source_loc(buffer))
    }
}
