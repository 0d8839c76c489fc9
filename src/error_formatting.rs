use loxscan::diagnostics::{Diagnostic, DiagnosticSink};

use crate::input;

use colored::*;

fn format_input(input: &input::Input, line: usize, col: usize) -> String {
    let source_line = input.content.lines().nth(line - 1).unwrap_or("");
    format!(
        "in {}, at line {}, column {}:\n{}\n{}{}",
        input.name(),
        line,
        col,
        source_line,
        "~".repeat(col.saturating_sub(1)).blue().bold(),
        "^".blue().bold()
    )
}

pub fn format_lexical_error(err: &Diagnostic, input: &input::Input) -> String {
    format!(
        "loxscan: {}: {}\n{}",
        "lexical error".red().bold(),
        err.to_string().white().bold(),
        format_input(input, err.line, err.col)
    )
}

/// Prints each diagnostic to stderr as soon as the scanner reports it.
pub struct ConsoleSink<'a> {
    input: &'a input::Input,
    reported: usize,
}

impl<'a> ConsoleSink<'a> {
    pub fn new(input: &'a input::Input) -> ConsoleSink<'a> {
        ConsoleSink { input, reported: 0 }
    }

    pub fn had_error(&self) -> bool {
        self.reported > 0
    }
}

impl<'a> DiagnosticSink for ConsoleSink<'a> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;
        eprintln!("{}", format_lexical_error(&diagnostic, self.input));
    }
}
