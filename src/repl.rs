use crate::input;
use crate::line_reader::{LineReadStatus, LineReader};

static HISTORY_FILE: &str = ".loxscan-history.txt";
static PROMPT: &str = "> ";

/// Whether a line of prompt input ends the session.
fn is_exit_command(line: &str) -> bool {
    matches!(line.trim(), "exit" | "quit")
}

pub fn run(json: bool) {
    let mut line_reader = LineReader::new(HISTORY_FILE, PROMPT);

    loop {
        let line = match line_reader.readline() {
            LineReadStatus::Line(line) => line,
            LineReadStatus::Done => break,
        };

        if is_exit_command(&line) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        // Lines are scanned independently; nothing carries over between them.
        let input = input::Input {
            source: input::Source::Repl,
            content: line,
        };
        crate::run(&input, json);
    }
}

#[cfg(test)]
mod tests {
    use crate::repl;

    #[test]
    fn test_exit_commands() {
        assert!(repl::is_exit_command("exit"));
        assert!(repl::is_exit_command("  quit \n"));
        assert!(!repl::is_exit_command("exit;"));
        assert!(!repl::is_exit_command("print quit;"));
    }
}
