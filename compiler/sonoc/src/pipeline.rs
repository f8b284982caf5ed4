//! The per-file front-end pipeline: tokenize, pair lists, scan
//! declarations. Each file gets its own context; nothing is shared between
//! files and a failure in one file never poisons another.

use sono_ir::TokenList;
use sono_lexer::LexicalError;
use sono_parse::{scan_declarations, FileDecls, ListError, ListRegistry};
use tracing::debug;

/// Everything the front end derives from one source file.
#[derive(Debug)]
pub struct FrontEnd {
    pub tokens: TokenList,
    pub lists: ListRegistry,
    pub decls: FileDecls,
}

/// First failure of any front-end stage.
#[derive(Debug, thiserror::Error)]
pub enum FrontEndError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    List(#[from] ListError),
}

/// Run the whole front end over one file's text.
pub fn run(source: impl Into<String>) -> Result<FrontEnd, FrontEndError> {
    let tokens = sono_lexer::tokenize(source)?;
    let lists = ListRegistry::build(&tokens)?;
    let decls = scan_declarations(&tokens, &lists);
    debug!(
        tokens = tokens.len(),
        lists = lists.len(),
        decls = decls.len(),
        "front end complete"
    );
    Ok(FrontEnd {
        tokens,
        lists,
        decls,
    })
}
