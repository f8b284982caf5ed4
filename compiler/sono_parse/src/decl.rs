//! Top-level declaration scanning.
//!
//! A declaration is a top-level list whose first non-whitespace element is
//! one of the declaring keywords (`module`, `concept`, `class`, `function`)
//! followed by the declared name. The scan is shallow: it records what each
//! top-level list declares without descending into bodies.

use rustc_hash::FxHashMap;
use sono_ir::{Keyword, Span, TokenDetail, TokenList};
use tracing::debug;

use crate::cursor::ListCursor;
use crate::lists::ListRegistry;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeclKind {
    Module,
    Concept,
    Class,
    Function,
}

impl DeclKind {
    fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Module => Some(DeclKind::Module),
            Keyword::Concept => Some(DeclKind::Concept),
            Keyword::Class => Some(DeclKind::Class),
            Keyword::Function => Some(DeclKind::Function),
            _ => None,
        }
    }
}

/// One declared entity: its kind, the list that declares it, and the span
/// of its name leaf when one follows the keyword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decl {
    pub kind: DeclKind,
    pub head: usize,
    pub name: Option<Span>,
}

/// All declarations of one file, with a by-name index.
#[derive(Debug, Default)]
pub struct FileDecls {
    decls: Vec<Decl>,
    by_name: FxHashMap<String, usize>,
}

impl FileDecls {
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decl> {
        self.decls.iter()
    }

    pub fn by_name(&self, name: &str) -> Option<&Decl> {
        self.by_name.get(name).map(|&ix| &self.decls[ix])
    }
}

/// Collect the declarations of every top-level list.
pub fn scan_declarations(tokens: &TokenList, registry: &ListRegistry) -> FileDecls {
    let mut decls = FileDecls::default();
    for list in registry.top_level() {
        let mut cursor = ListCursor::new(tokens, list);
        cursor.skip_whitespace();
        let TokenDetail::Keyword(keyword) = &cursor.token().detail else {
            continue;
        };
        let keyword = *keyword;
        let Some(kind) = DeclKind::from_keyword(keyword) else {
            continue;
        };
        cursor.advance();
        cursor.skip_whitespace();
        let name = match &cursor.token().detail {
            TokenDetail::Identifier(id) if !id.pack && !id.unpack => Some(id.leaf),
            _ => None,
        };
        match name {
            Some(span) => debug!(kind = ?kind, name = span.text(tokens.source()), "declaration"),
            None => debug!(kind = ?kind, "unnamed declaration"),
        }
        if let Some(span) = name {
            decls
                .by_name
                .insert(span.text(tokens.source()).to_owned(), decls.decls.len());
        }
        decls.decls.push(Decl {
            kind,
            head: list.head,
            name,
        });
    }
    decls
}
