use std::process::ExitCode;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use ferrule_ast::{AstContext, dump_source_file};
use ferrule_astgen::generate_ast;
use ferrule_errors::{Diagnostic, Renderer};
use ferrule_inputs::File;
use ferrule_legacy_parse::{LegacyParser, parse_source_file};
use salsa::DatabaseImpl;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
enum Options {
    /// Print the lossless syntax tree.
    DumpSyntax { path: Utf8PathBuf },
    /// Print the AST, generated from the syntax tree with legacy fallback.
    DumpAst {
        path: Utf8PathBuf,
        /// Parse the whole file with the legacy parser.
        #[arg(long)]
        legacy_only: bool,
        /// Print the line and column of every node and name.
        #[arg(long)]
        locations: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let db = DatabaseImpl::default();
    let renderer = Renderer::styled();

    let (file, errors) = match Options::parse() {
        Options::DumpSyntax { path } => {
            let file = read_file(&db, path)?;
            let parse = ferrule_parse::parse(file.text(&db));
            print!("{}", parse.tree().debug_tree());
            (file, report(&db, &renderer, file, parse.diagnostics()))
        }
        Options::DumpAst { path, legacy_only, locations } => {
            let file = read_file(&db, path)?;
            let mut ctx = AstContext::new(&db);
            let buffer = ctx.add_buffer(file);

            let mut errors = 0;
            let decls = if legacy_only {
                parse_source_file(&mut ctx, buffer)
            } else {
                let parse = ferrule_parse::parse(file.text(&db));
                errors += report(&db, &renderer, file, parse.diagnostics());
                generate_ast(&mut ctx, buffer, parse.tree(), &mut LegacyParser)
            };
            print!("{}", dump_source_file(&ctx, &decls, locations));

            let diagnostics = ctx.diagnostics().iter().map(|d| &d.diagnostic);
            errors += report(&db, &renderer, file, diagnostics);
            (file, errors)
        }
    };

    if errors == 0 {
        return Ok(ExitCode::SUCCESS);
    }
    eprintln!("{}: {errors} error(s)", file.path(&db));
    Ok(ExitCode::FAILURE)
}

fn read_file(db: &DatabaseImpl, path: Utf8PathBuf) -> anyhow::Result<File> {
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("failed to read `{path}`"))?;
    Ok(File::new(db, path, text))
}

/// Renders `diagnostics` to stderr and returns how many there were.
fn report<'a>(
    db: &DatabaseImpl,
    renderer: &Renderer,
    file: File,
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
) -> usize {
    let path = file.path(db).as_str();
    let text = file.text(db);
    let mut count = 0;
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic.render(renderer, path, text));
        count += 1;
    }
    count
}
