//! Command handlers for the `sono` CLI.
//!
//! Each handler returns the process exit code: 0 on success, 1 for any
//! source or I/O failure. Diagnostics go to stderr; requested output goes
//! to stdout.

use sono_parse::DeclKind;

use crate::pipeline::{self, FrontEnd};

/// Validate a file end to end, printing a one-line summary.
pub fn check_file(path: &str) -> i32 {
    with_front_end(path, |front| {
        println!(
            "{path}: {} tokens, {} lists, {} declarations",
            front.tokens.len(),
            front.lists.len(),
            front.decls.len()
        );
    })
}

/// Tokenize a file and dump every non-whitespace token.
pub fn lex_file(path: &str) -> i32 {
    let Some(source) = read_source(path) else {
        return 1;
    };
    match sono_lexer::tokenize(source) {
        Ok(tokens) => {
            for ix in 0..tokens.len() {
                if !tokens.get(ix).is_whitespace() {
                    println!("{}", tokens.render(ix));
                }
            }
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

/// Run the full front end and print the file's top-level declarations.
pub fn parse_file(path: &str) -> i32 {
    with_front_end(path, |front| {
        for decl in front.decls.iter() {
            let label = match decl.kind {
                DeclKind::Module => "MODULE",
                DeclKind::Concept => "CONCEPT",
                DeclKind::Class => "CLASS",
                DeclKind::Function => "FUNCTION",
            };
            match decl.name {
                Some(span) => println!("{label}: {}", front.tokens.text(span)),
                None => println!("{label}: <unnamed>"),
            }
        }
    })
}

fn with_front_end(path: &str, on_success: impl FnOnce(&FrontEnd)) -> i32 {
    let Some(source) = read_source(path) else {
        return 1;
    };
    match pipeline::run(source) {
        Ok(front) => {
            on_success(&front);
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn read_source(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(err) => {
            eprintln!("error: cannot read {path}: {err}");
            None
        }
    }
}
