//! Sono compiler CLI.

use sonoc::commands::{check_file, lex_file, parse_file};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("SONO_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        print_usage();
        std::process::exit(1);
    }

    let code = match args[1].as_str() {
        "check" => check_file(&args[2]),
        "lex" => lex_file(&args[2]),
        "parse" => parse_file(&args[2]),
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            1
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    eprintln!("Usage: sono <command> <file.sono>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  check    Validate a file and print a summary");
    eprintln!("  lex      Dump classified tokens");
    eprintln!("  parse    Print top-level declarations");
}
