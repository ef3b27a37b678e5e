//! datefmt CLI
//!
//! Translates human date/time patterns into reference-time layouts.

use std::error::Error;

use datefmtc::commands::{dict_command, lex_command, translate_command, CommandError};

fn main() {
    datefmtc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let rest = &args[2..];
    let mut stdout = std::io::stdout().lock();

    let result = match command.as_str() {
        "translate" | "t" => translate_command(rest, &mut stdout),
        "lex" => lex_command(rest, &mut stdout),
        "dict" => dict_command(rest, &mut stdout),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("datefmt {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        report(&err);
        std::process::exit(1);
    }
}

fn report(err: &CommandError) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn print_usage() {
    println!("datefmt (date pattern to reference-time layout translator)");
    println!();
    println!("Usage: datefmt <command> [options]");
    println!();
    println!("Commands:");
    println!("  translate <pattern>  Translate a pattern (use '-' to read stdin)");
    println!("  lex <pattern>        Tokenize and display tokens");
    println!("  dict [name]          List a built-in dictionary (standard, strict)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Translate options:");
    println!("  --dict=<name>        Dictionary: standard (default), strict");
    println!("  --strict             Split tokens on every byte change (Dd -> D, d)");
    println!("  --map=<tok>=<rep>    Add or override a dictionary entry (repeatable)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing (e.g. RUST_LOG=datefmt_lexer_core=trace)");
}
