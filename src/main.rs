extern crate clap;

use clap::{App, Arg};

use std::fs;

mod error_formatting;
mod input;
mod line_reader;
mod repl;

use loxscan::scanner;

static INPUT_STR: &str = "INPUT";
static JSON_STR: &str = "json";

// sysexits.h
const EX_USAGE: i32 = 64;
const EX_DATAERR: i32 = 65;
const EX_NOINPUT: i32 = 66;

fn main() {
    let matches = App::new("loxscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("lox lexical scanner")
        .author("Thomas Peters")
        .arg(
            Arg::with_name(INPUT_STR)
                .help("script to scan; starts a prompt when omitted")
                .multiple(true)
                .index(1),
        )
        .arg(
            Arg::with_name(JSON_STR)
                .long("json")
                .takes_value(false)
                .help("print the token stream as JSON"),
        )
        .get_matches();

    let json = matches.is_present(JSON_STR);
    let scripts: Vec<&str> = matches
        .values_of(INPUT_STR)
        .map(|values| values.collect())
        .unwrap_or_default();

    match scripts.as_slice() {
        [] => repl::run(json),
        [script] => run_file(script, json),
        _ => {
            println!("Usage: loxscan [script]");
            std::process::exit(EX_USAGE);
        }
    }
}

fn run_file(path: &str, json: bool) {
    let content = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            eprintln!("Error reading {}: {}", path, err);
            std::process::exit(EX_NOINPUT);
        }
    };

    let input = input::Input {
        source: input::Source::File(path.to_string()),
        content,
    };

    if !run(&input, json) {
        std::process::exit(EX_DATAERR);
    }
}

/// Scans `input` and prints its tokens. Any diagnostic suppresses the token output and makes
/// this return false.
fn run(input: &input::Input, json: bool) -> bool {
    let mut sink = error_formatting::ConsoleSink::new(input);
    let tokens = scanner::scan_tokens_with(&input.content, &mut sink);

    if sink.had_error() {
        return false;
    }

    if json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(rendered) => println!("{}", rendered),
            Err(err) => {
                eprintln!("Error serializing tokens: {}", err);
                return false;
            }
        }
    } else {
        for token in &tokens {
            println!("{}", token);
        }
    }

    true
}
