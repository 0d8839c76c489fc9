use rustyline::error::ReadlineError;

/// Prompt input with history kept across sessions in `history_file`.
pub struct LineReader {
    editor: rustyline::Editor<()>,
    history_file: String,
    prompt: String,
}

impl Drop for LineReader {
    fn drop(&mut self) {
        self.editor.save_history(&self.history_file).ok();
    }
}

pub enum LineReadStatus {
    Line(String),
    Done,
}

/// rustyline hands back the newline when stdin is not a terminal.
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

impl LineReader {
    pub fn new(history_file: &str, prompt: &str) -> LineReader {
        let mut editor = rustyline::Editor::<()>::new();
        editor.load_history(history_file).ok();
        LineReader {
            editor,
            history_file: history_file.into(),
            prompt: prompt.into(),
        }
    }

    /// Ctrl-C discards the pending line; end-of-input and read failures end the session.
    pub fn readline(&mut self) -> LineReadStatus {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let line = strip_line_ending(line);
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str());
                }
                LineReadStatus::Line(line)
            }
            Err(ReadlineError::Interrupted) => LineReadStatus::Line(String::new()),
            Err(_) => LineReadStatus::Done,
        }
    }
}
