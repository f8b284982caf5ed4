//! End-to-end front-end tests driving the whole pipeline the way the CLI
//! does: source text in, tokens, lists, and declarations out.

use pretty_assertions::assert_eq;
use sono_ir::TokenDetail;
use sono_parse::ListCursor;
use sonoc::pipeline::{run, FrontEndError};

#[test]
fn span_coverage_over_a_full_program() {
    let source = "(module geo)\n(function area (r) (* 3.14 (* r r)))\n";
    let front = run(source).unwrap();
    let rebuilt: String = (0..front.tokens.len())
        .map(|ix| front.tokens.token_text(ix))
        .collect();
    assert_eq!(rebuilt, source);
}

#[test]
fn position_monotonicity() {
    let front = run("(a\n b (c\n d))\n").unwrap();
    let mut last_line = 0;
    for (ix, token) in front.tokens.iter().enumerate() {
        assert_eq!(token.seq as usize, ix);
        assert!(token.line >= last_line);
        last_line = token.line;
    }
}

#[test]
fn list_pairing_scenario() {
    let front = run("(a (b) c)").unwrap();
    let lists: Vec<_> = front.lists.iter().collect();
    assert_eq!(lists.len(), 2);
    let outer = lists[0];
    let inner = lists[1];
    assert_eq!((outer.head, outer.tail, outer.depth), (0, 8, 0));
    assert_eq!(inner.depth, 1);
    assert_eq!(front.tokens.token_text(inner.head + 1), "b");

    // The cursor treats the inner list as one opaque step.
    let mut cursor = ListCursor::new(&front.tokens, outer);
    let mut visited = Vec::new();
    while !cursor.at_tail() {
        if !cursor.token().is_whitespace() {
            visited.push(front.tokens.token_text(cursor.index()).to_owned());
        }
        cursor.advance();
    }
    assert_eq!(visited, vec!["a", "(", "c"]);
}

#[test]
fn base_round_trips_and_offsets() {
    for literal in ["0b1010", "0o755", "0d99", "0xfe'ed", "0a0z", r"0sA+\9"] {
        assert!(run(literal).is_ok(), "{literal} should classify");
    }
    // One illegal digit, reported at its exact position.
    let err = run("0o78").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Lexical error at line: 1, column: 4\n\
         Illegal character found in numerator:\n\
         0o78\n\
         +  ^"
    );
}

#[test]
fn quote_and_delimiter_symmetry() {
    assert!(run("\"abc\"").is_ok());
    assert!(run("'abc'").is_ok());
    assert!(run("R\"TAG(xyz)TAG\"").is_ok());

    let err = run("\"abc'").unwrap_err();
    assert!(err.to_string().contains("Mismatching quote"));

    let err = run("R\"TAG(xyz)OTHER\"").unwrap_err();
    assert!(err.to_string().contains("Mismatching raw string delimiter"));
}

#[test]
fn unicode_escape_lengths() {
    assert!(run("\"\\u00e9\"").is_ok());
    let err = run("\"\\u00\"").unwrap_err();
    assert!(err
        .to_string()
        .contains("Insufficient characters found for unicode literal"));
    let err = run("\"\\u00zz\"").unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("Illegal character found in unicode literal"));
    // The caret sits under the first z.
    assert!(rendered.starts_with("Lexical error at line: 1, column: 6\n"));
}

#[test]
fn qualified_identifier_paths() {
    let front = run("a.b.c").unwrap();
    match &front.tokens.get(0).detail {
        TokenDetail::Identifier(id) => {
            let path: Vec<&str> = id
                .path
                .iter()
                .map(|&s| front.tokens.text(s))
                .collect();
            assert_eq!(path, vec!["a", "b"]);
            assert_eq!(front.tokens.text(id.leaf), "c");
        }
        other => panic!("expected identifier, got {other:?}"),
    }

    assert!(run("a..b")
        .unwrap_err()
        .to_string()
        .contains("Empty segment in qualified identifier"));
    assert!(run("module.x")
        .unwrap_err()
        .to_string()
        .contains("Identifier segment cannot be a keyword"));
}

#[test]
fn pack_and_unpack() {
    let front = run("...rest").unwrap();
    match &front.tokens.get(0).detail {
        TokenDetail::Identifier(id) => {
            assert!(id.pack && !id.unpack);
            assert_eq!(front.tokens.text(id.leaf), "rest");
        }
        other => panic!("expected identifier, got {other:?}"),
    }
    let front = run("rest...").unwrap();
    match &front.tokens.get(0).detail {
        TokenDetail::Identifier(id) => {
            assert!(!id.pack && id.unpack);
            assert_eq!(front.tokens.text(id.leaf), "rest");
        }
        other => panic!("expected identifier, got {other:?}"),
    }
    assert!(run("...mod.ule")
        .unwrap_err()
        .to_string()
        .contains("Period found in identifier pack"));
}

#[test]
fn declarations_come_out_of_the_pipeline() {
    let front = run("(module geo)\n(function area (r) r)\n(print 1)\n").unwrap();
    assert_eq!(front.decls.len(), 2);
    assert!(front.decls.by_name("geo").is_some());
    assert!(front.decls.by_name("area").is_some());
    assert!(front.decls.by_name("print").is_none());
}

#[test]
fn unbalanced_files_fail_as_list_errors() {
    match run("(a (b)").unwrap_err() {
        FrontEndError::List(err) => {
            assert_eq!(
                err.to_string(),
                "Unmatched opening parenthesis at line: 1, column: 1"
            );
        }
        other => panic!("expected list error, got {other}"),
    }
}

#[test]
fn errors_are_per_file_not_per_process() {
    // A failed file leaves the pipeline reusable for the next one.
    assert!(run("0b9").is_err());
    assert!(run("(ok)").is_ok());
}
