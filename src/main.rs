// minicc: mini-C front-end — tokens, AST, symbol table, and TAC for one file

mod compile;
mod parser;
mod symtab;
mod tac;

use std::fs;
use std::path::Path;

use compile::compile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("minicc");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file.c>", program_name);
        std::process::exit(1);
    }

    let input_file = &args[1];

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        std::process::exit(1);
    }

    let source = fs::read_to_string(input_file)?;
    let result = compile(&source);

    println!("=== TOKENS ===");
    for token in &result.tokens {
        println!("{:<12} {:<16} line {}", token.kind(), token.text(), token.line());
    }

    println!();
    println!("=== AST ===");
    print!("{}", result.ast_text());

    println!();
    println!("=== SYMBOL TABLE ===");
    for (name, symbol) in result.symbols.entries_sorted() {
        println!("{}: {}", name, symbol);
    }

    println!();
    println!("=== THREE-ADDRESS CODE ===");
    for line in result.tac_text() {
        println!("{}", line);
    }

    if !result.diagnostics.is_empty() {
        println!();
        println!("=== DIAGNOSTICS ===");
        for diagnostic in &result.diagnostics {
            println!("{}", diagnostic);
        }
        std::process::exit(1);
    }

    Ok(())
}
